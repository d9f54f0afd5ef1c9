//! HTTP設定とキャッシュ設定

use crate::env::EnvVar;
use crate::error::{NurayaError, Result};
use reqwest::Client;
use std::path::PathBuf;
use std::time::Duration;

/// キャッシュディレクトリを上書きする環境変数
pub const CACHE_DIR_ENV: &str = "NURAYA_CACHE_DIR";

/// カタログキャッシュの有効期間（1時間）
pub const CACHE_TTL: Duration = Duration::from_secs(3600);

/// HTTP設定
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// タイムアウト（秒）
    pub timeout: Option<Duration>,
    /// User-Agent
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: Some(Duration::from_secs(30)),
            user_agent: "nuraya-cli".to_string(),
        }
    }
}

impl HttpConfig {
    /// reqwest::Client を構築
    pub fn build_client(&self) -> Client {
        let mut builder = Client::builder().user_agent(&self.user_agent);

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        builder.build().unwrap_or_else(|_| Client::new())
    }
}

/// キャッシュディレクトリを解決
///
/// 優先順位: 1. NURAYA_CACHE_DIR, 2. $HOME/.nuraya/cache
pub fn cache_dir() -> Result<PathBuf> {
    if let Some(dir) = EnvVar::path(CACHE_DIR_ENV) {
        return Ok(dir);
    }

    let home = EnvVar::path("HOME")
        .ok_or_else(|| NurayaError::Cache("HOME environment variable not set".to_string()))?;
    Ok(home.join(".nuraya").join("cache"))
}
