//! プラグインマニフェストの読み込み
//!
//! 対応形式は JSON のみ。`plugins`（旧形式では `versions`）配列に
//! `{name, version}` を列挙する。

use super::Plugin;
use crate::error::{NurayaError, Result};
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

/// マニフェスト形式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestFormat {
    Json,
    /// 認識するが未実装
    Toml,
}

impl ManifestFormat {
    /// 拡張子から形式を判定
    pub fn detect(path: &Path) -> Result<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            Some(ext) => Err(NurayaError::UnsupportedFormat {
                path: path.to_path_buf(),
                reason: format!("Unsupported file extension: .{}", ext),
            }),
            None => Err(NurayaError::UnsupportedFormat {
                path: path.to_path_buf(),
                reason: "Missing file extension".to_string(),
            }),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ManifestEntry {
    name: String,
    version: String,
}

/// マニフェストファイルを読み込む
///
/// 形式判定はファイルを開く前に行う。
pub fn load_manifest(path: &Path) -> Result<Vec<Plugin>> {
    match ManifestFormat::detect(path)? {
        ManifestFormat::Json => {
            let content = std::fs::read_to_string(path)?;
            parse_json(&content, path)
        }
        ManifestFormat::Toml => Err(NurayaError::NotImplemented(
            "Reading plugin manifests from TOML not implemented yet".to_string(),
        )),
    }
}

/// 配列を探すキー（優先順）
const ARRAY_KEYS: &[&str] = &["plugins", "versions"];

/// JSONマニフェストをパース
///
/// `plugins`、なければ `versions` の配列を採用する。
/// JSON構文エラーと要素の不備は `InvalidManifest`、配列が見つからない場合は `UnsupportedFormat`。
pub(crate) fn parse_json(content: &str, path: &Path) -> Result<Vec<Plugin>> {
    let document: Value = serde_json::from_str(content).map_err(|e| {
        NurayaError::InvalidManifest(format!("Failed to parse {}: {}", path.display(), e))
    })?;

    let entries = ARRAY_KEYS
        .iter()
        .find_map(|key| document.get(*key).filter(|value| value.is_array()))
        .ok_or_else(|| NurayaError::UnsupportedFormat {
            path: path.to_path_buf(),
            reason: "Manifest file format not supported: expected a `plugins` array".to_string(),
        })?;

    let entries: Vec<ManifestEntry> = Vec::deserialize(entries).map_err(|e| {
        NurayaError::InvalidManifest(format!("Invalid plugin entry in {}: {}", path.display(), e))
    })?;

    Ok(entries
        .into_iter()
        .map(|entry| Plugin::new(entry.name, entry.version))
        .collect())
}

#[cfg(test)]
#[path = "manifest_test.rs"]
mod tests;
