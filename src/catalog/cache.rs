//! カタログレスポンスのディスクキャッシュ
//!
//! `~/.nuraya/cache/<key>.json` にレスポンス本文と取得日時を保存し、
//! TTL（既定1時間）以内であれば再利用する。

use crate::config::{self, CACHE_TTL};
use crate::error::{NurayaError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;
use tempfile::NamedTempFile;

/// キャッシュファイルの内容
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CacheEntry {
    url: String,
    fetched_at: DateTime<Utc>,
    body: String,
}

/// カタログキャッシュ
#[derive(Debug, Clone)]
pub struct CatalogCache {
    cache_dir: PathBuf,
    ttl: Duration,
}

impl CatalogCache {
    /// キャッシュを初期化（ディレクトリ作成含む）
    pub fn new() -> Result<Self> {
        Self::with_cache_dir(config::cache_dir()?)
    }

    /// カスタムキャッシュディレクトリで初期化（テスト用）
    pub fn with_cache_dir(cache_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&cache_dir).map_err(|e| {
            NurayaError::Cache(format!(
                "Failed to create cache directory {}: {}",
                cache_dir.display(),
                e
            ))
        })?;
        Ok(Self {
            cache_dir,
            ttl: CACHE_TTL,
        })
    }

    /// URLからキャッシュファイルパスを取得
    fn cache_path(&self, url: &str) -> PathBuf {
        let key: String = url
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
            .collect();
        self.cache_dir.join(format!("{}.json", key))
    }

    /// 有効なキャッシュ本文を取得
    pub fn get(&self, url: &str) -> Option<String> {
        self.get_at(url, Utc::now())
    }

    /// 指定時刻時点で有効なキャッシュ本文を取得
    ///
    /// 未作成・期限切れ・破損はいずれも None。
    pub(crate) fn get_at(&self, url: &str, now: DateTime<Utc>) -> Option<String> {
        let content = fs::read_to_string(self.cache_path(url)).ok()?;
        let entry: CacheEntry = match serde_json::from_str(&content) {
            Ok(entry) => entry,
            Err(err) => {
                tracing::debug!("ignoring corrupt cache entry for {}: {}", url, err);
                return None;
            }
        };

        if entry.url != url {
            return None;
        }

        match (now - entry.fetched_at).to_std() {
            Ok(age) if age < self.ttl => Some(entry.body),
            _ => None,
        }
    }

    /// キャッシュを保存（アトミック書き込み）
    pub fn store(&self, url: &str, body: &str) -> Result<()> {
        self.store_at(url, body, Utc::now())
    }

    pub(crate) fn store_at(&self, url: &str, body: &str, fetched_at: DateTime<Utc>) -> Result<()> {
        let entry = CacheEntry {
            url: url.to_string(),
            fetched_at,
            body: body.to_string(),
        };

        let mut temp_file = NamedTempFile::new_in(&self.cache_dir)?;
        temp_file.write_all(serde_json::to_string(&entry)?.as_bytes())?;
        temp_file.flush()?;
        temp_file
            .persist(self.cache_path(url))
            .map_err(|e| NurayaError::Io(e.error))?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "cache_test.rs"]
mod tests;
