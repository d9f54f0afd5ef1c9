//! プラグインリスト
//!
//! マニフェストとカタログのプレフィックス検索からプラグインを集め、
//! ダウンロードURLの一覧に変換する。カタログは最初に必要になった時点で
//! 一度だけ取得する。

use super::manifest::load_manifest;
use super::Plugin;
use crate::catalog::{Catalog, CatalogSource, REGISTRY_BASE};
use crate::error::{NurayaError, Result};
use std::path::Path;
use tokio::sync::OnceCell;

/// 直接ダウンロードURLの対象OS
const DOWNLOAD_OS: &str = "linux";
/// 直接ダウンロードURLの対象アーキテクチャ
const DOWNLOAD_ARCH: &str = "amd64";

/// slug と version からダウンロードURLを組み立てる
pub fn download_url(slug: &str, version: &str) -> String {
    format!(
        "{}/api/plugins/{}/versions/{}/download?os={}&arch={}",
        REGISTRY_BASE, slug, version, DOWNLOAD_OS, DOWNLOAD_ARCH
    )
}

/// プラグインの順序付きリスト
pub struct PluginList {
    items: Vec<Plugin>,
    source: Box<dyn CatalogSource>,
    catalog: OnceCell<Catalog>,
}

impl PluginList {
    pub fn new(source: Box<dyn CatalogSource>) -> Self {
        Self {
            items: Vec::new(),
            source,
            catalog: OnceCell::new(),
        }
    }

    pub fn items(&self) -> &[Plugin] {
        &self.items
    }

    /// カタログを取得（初回のみ通信）
    pub async fn catalog(&self) -> Result<&Catalog> {
        self.catalog
            .get_or_try_init(|| Catalog::fetch(self.source.as_ref()))
            .await
    }

    /// マニフェストのプラグインを追加
    pub fn add_manifest(&mut self, path: &Path) -> Result<&mut Self> {
        let plugins = load_manifest(path)?;
        tracing::debug!("loaded {} plugin(s) from {}", plugins.len(), path.display());
        self.items.extend(plugins);
        Ok(self)
    }

    /// slug と version を指定してプラグインを追加
    pub fn add_plugin(&mut self, slug: impl Into<String>, version: impl Into<String>) -> &mut Self {
        self.items.push(Plugin::new(slug, version));
        self
    }

    /// プレフィックスに一致するカタログのプラグインを解決済みバージョンで追加
    pub async fn add_prefix(&mut self, prefix: &str) -> Result<&mut Self> {
        let found: Vec<Plugin> = self
            .catalog()
            .await?
            .find_by_prefix(prefix)
            .map(Plugin::from)
            .collect();
        tracing::debug!("prefix {:?} matched {} plugin(s)", prefix, found.len());
        self.items.extend(found);
        Ok(self)
    }

    /// 各プラグインのパッケージURLを入力順で返す
    ///
    /// バージョン指定済みのプラグインはカタログを参照しない。
    /// 互換パッケージがないプラグインはエラーログを出して除外する。
    pub async fn package_urls(&self) -> Result<Vec<String>> {
        let mut urls = Vec::with_capacity(self.items.len());

        for item in &self.items {
            if item.is_pinned() {
                urls.push(download_url(&item.slug, &item.version));
                continue;
            }

            if item.slug.is_empty() {
                return Err(NurayaError::PluginNotFound(format!(
                    "incomplete plugin entry (version={:?})",
                    item.version
                )));
            }

            match self.catalog().await?.find_by_slug(&item.slug) {
                Ok(info) => urls.push(info.package_url),
                Err(err) if err.is_skippable() => {
                    tracing::error!(
                        "Plugin has no compatible package in the Grafana plugin catalog, skipping: {}",
                        item.slug
                    );
                }
                Err(err) => return Err(err),
            }
        }

        Ok(urls)
    }
}

#[cfg(test)]
#[path = "list_test.rs"]
mod tests;
