//! カタログ取得元

use super::cache::CatalogCache;
use super::entry::CatalogDocument;
use crate::config::HttpConfig;
use crate::error::Result;
use crate::http;
use reqwest::Client;
use std::future::Future;
use std::pin::Pin;

/// Grafana プラグインカタログのエンドポイント
pub const CATALOG_URL: &str = "https://grafana.com/api/plugins";

/// 一時的なエラーに対するリトライ回数
const MAX_RETRIES: u32 = 2;

/// カタログ取得元 trait
pub trait CatalogSource: Send + Sync {
    /// カタログ全体を取得
    fn fetch<'a>(&'a self) -> Pin<Box<dyn Future<Output = Result<CatalogDocument>> + Send + 'a>>;
}

/// grafana.com API クライアント
///
/// レスポンスはディスクキャッシュ経由で取得する。
pub struct GrafanaApi {
    http: Client,
    url: String,
    cache: Option<CatalogCache>,
    refresh: bool,
}

impl GrafanaApi {
    /// 新しいGrafanaApiを作成（キャッシュなし）
    pub fn new(config: &HttpConfig) -> Self {
        Self {
            http: config.build_client(),
            url: CATALOG_URL.to_string(),
            cache: None,
            refresh: false,
        }
    }

    /// ディスクキャッシュを設定
    pub fn with_cache(mut self, cache: CatalogCache) -> Self {
        self.cache = Some(cache);
        self
    }

    /// キャッシュを読まずに再取得する
    pub fn with_refresh(mut self, refresh: bool) -> Self {
        self.refresh = refresh;
        self
    }

    /// エンドポイントを差し替え
    #[cfg(test)]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    fn cached(&self) -> Option<String> {
        if self.refresh {
            return None;
        }
        self.cache.as_ref()?.get(&self.url)
    }

    async fn fetch_document(&self) -> Result<CatalogDocument> {
        if let Some(body) = self.cached() {
            tracing::debug!("catalog cache hit: {}", self.url);
            return CatalogDocument::parse(&body);
        }

        tracing::debug!("catalog cache miss: {}", self.url);
        let body = http::with_retry(|| http::fetch_text(&self.http, &self.url), MAX_RETRIES).await?;
        let document = CatalogDocument::parse(&body)?;

        if let Some(cache) = &self.cache {
            if let Err(err) = cache.store(&self.url, &body) {
                tracing::warn!("Failed to write catalog cache: {}", err);
            }
        }

        Ok(document)
    }
}

impl CatalogSource for GrafanaApi {
    fn fetch<'a>(&'a self) -> Pin<Box<dyn Future<Output = Result<CatalogDocument>> + Send + 'a>> {
        Box::pin(self.fetch_document())
    }
}
