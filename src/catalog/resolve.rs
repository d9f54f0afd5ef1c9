//! カタログエントリからパッケージ情報を解決

use super::entry::CatalogEntry;
use crate::error::{NurayaError, Result};
use crate::plugin::PluginInfo;

/// レジストリのベースURL
pub const REGISTRY_BASE: &str = "https://grafana.com";

/// プラグインページのベースURL
pub const HOMEPAGE_BASE: &str = "https://grafana.com/grafana";

/// 採用するプラットフォームの優先順位
pub const PLATFORM_PREFERENCE: &[&str] = &["linux-amd64", "any"];

/// プライベートプラグインを示すソースURL
pub const PRIVATE_PLUGINS_URL: &str = "https://github.com/grafana/plugins-private";

/// ベンダーのGitHub組織を推定できる slug の目印
pub const VENDOR_MARKER: &str = "volkovlabs";

const VENDOR_GITHUB_ORG: &str = "https://github.com/VolkovLabs";

/// エントリのパッケージ情報を解決
///
/// `PLATFORM_PREFERENCE` の順で最初に見つかったパッケージを採用する。
pub fn resolve_package(entry: &CatalogEntry) -> Result<PluginInfo> {
    let package = PLATFORM_PREFERENCE
        .iter()
        .find_map(|platform| entry.packages.get(*platform))
        .ok_or_else(|| NurayaError::Unresolvable(entry.slug.clone()))?;

    Ok(PluginInfo {
        slug: entry.slug.clone(),
        version: entry.version.clone(),
        homepage_url: entry
            .links
            .first()
            .map(|link| format!("{}{}", HOMEPAGE_BASE, link.href)),
        repository_url: repository_url(&entry.url, &entry.slug),
        package_url: format!("{}{}", REGISTRY_BASE, package.download_url),
    })
}

/// ソースリポジトリURLを決定
pub fn repository_url(url: &str, slug: &str) -> Option<String> {
    if url == PRIVATE_PLUGINS_URL {
        return None;
    }
    if !url.is_empty() {
        return Some(url.to_string());
    }
    if slug.contains(VENDOR_MARKER) {
        return Some(format!("{}/{}", VENDOR_GITHUB_ORG, slug));
    }
    None
}

#[cfg(test)]
#[path = "resolve_test.rs"]
mod tests;
