//! プラグインレコードとプラグインリスト

mod list;
mod manifest;

pub use list::PluginList;

use serde::Serialize;

/// 最小限のプラグイン情報
///
/// `version` が空の場合はカタログから解決する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Plugin {
    pub slug: String,
    pub version: String,
}

impl Plugin {
    pub fn new(slug: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            version: version.into(),
        }
    }

    /// slug と version の両方が指定されているか
    pub fn is_pinned(&self) -> bool {
        !self.slug.is_empty() && !self.version.is_empty()
    }
}

/// カタログから解決した拡張プラグイン情報
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PluginInfo {
    pub slug: String,
    pub version: String,
    pub homepage_url: Option<String>,
    /// プライベート/非公開リポジトリの場合は None
    pub repository_url: Option<String>,
    pub package_url: String,
}

impl From<PluginInfo> for Plugin {
    fn from(info: PluginInfo) -> Self {
        Plugin::new(info.slug, info.version)
    }
}
