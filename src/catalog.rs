//! Grafana プラグインカタログ
//!
//! レジストリから取得したカタログを保持し、slug/プレフィックスで検索する。
//! 検索は線形走査（カタログは数百件規模）。

mod cache;
pub(crate) mod entry;
mod resolve;
mod source;

pub use cache::CatalogCache;
pub use entry::{CatalogDocument, CatalogEntry};
pub use resolve::{resolve_package, REGISTRY_BASE};
pub use source::{CatalogSource, GrafanaApi};

use crate::error::{NurayaError, Result};
use crate::plugin::PluginInfo;

/// プラグインカタログ（プロセス内で不変）
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// ソースからカタログを取得
    pub async fn fetch(source: &dyn CatalogSource) -> Result<Self> {
        let document = source.fetch().await?;
        tracing::debug!("catalog loaded: {} entries", document.items.len());
        Ok(Self::from_document(document))
    }

    pub fn from_document(document: CatalogDocument) -> Self {
        Self {
            entries: document.items,
        }
    }

    /// 全エントリを走査
    pub fn entries(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter()
    }

    /// slug 完全一致で検索し、パッケージ情報を解決
    ///
    /// 見つからない場合は `PluginNotFound`、互換パッケージがない場合は `Unresolvable`。
    pub fn find_by_slug(&self, slug: &str) -> Result<PluginInfo> {
        self.entries()
            .find(|entry| entry.slug == slug)
            .ok_or_else(|| NurayaError::PluginNotFound(slug.to_string()))
            .and_then(resolve_package)
    }

    /// slug がプレフィックスに一致する全エントリを解決
    ///
    /// 解決できないエントリは警告ログを出して読み飛ばす。
    pub fn find_by_prefix<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = PluginInfo> + 'a {
        self.entries()
            .filter(move |entry| entry.slug.starts_with(prefix))
            .filter_map(|entry| match resolve_package(entry) {
                Ok(info) => Some(info),
                Err(err) => {
                    tracing::warn!("Skipping {}: {}", entry.slug, err);
                    None
                }
            })
    }
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
