use crate::error::{NurayaError, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// `GET /api/plugins` のレスポンス
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogDocument {
    pub items: Vec<CatalogEntry>,
}

impl CatalogDocument {
    /// JSONからパース
    pub fn parse(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| {
            NurayaError::InvalidCatalog(format!("Failed to parse plugin catalog: {}", e))
        })
    }
}

/// カタログ内のプラグインエントリ
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub slug: String,
    pub version: String,
    /// ソースリポジトリURL（空・null の場合あり）
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub links: Vec<Link>,
    /// プラットフォーム識別子 → パッケージ
    #[serde(default, deserialize_with = "null_as_default")]
    pub packages: BTreeMap<String, Package>,
}

/// null を既定値として読む
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Link {
    pub href: String,
}

/// プラットフォーム別パッケージ
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Package {
    #[serde(rename = "downloadUrl")]
    pub download_url: String,
}
