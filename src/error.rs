use std::path::PathBuf;
use thiserror::Error;

/// nuraya統一エラー型
#[derive(Debug, Error)]
pub enum NurayaError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Plugin registry error: {message} (status: {status})")]
    RegistryApi { status: u16, message: String },

    #[error("Invalid plugin catalog: {0}")]
    InvalidCatalog(String),

    #[error("Plugin not found: {0}")]
    PluginNotFound(String),

    #[error("Package not found or unknown package type: {0}")]
    Unresolvable(String),

    #[error("Unsupported manifest {}: {reason}", path.display())]
    UnsupportedFormat { path: PathBuf, reason: String },

    #[error("Not implemented: {0}")]
    NotImplemented(String),

    #[error("Invalid manifest: {0}")]
    InvalidManifest(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Cache error: {0}")]
    Cache(String),

    #[error("Command `{program}` failed with exit code {code}")]
    Subprocess { program: String, code: i32 },
}

pub type Result<T> = std::result::Result<T, NurayaError>;

impl NurayaError {
    /// プロセスの終了コード
    ///
    /// 外部コマンドの失敗はその終了コードをそのまま返す。
    pub fn exit_code(&self) -> i32 {
        match self {
            NurayaError::Subprocess { code, .. } => *code,
            _ => 1,
        }
    }

    /// プレフィックス検索などで読み飛ばしてよいエラーかどうか
    pub fn is_skippable(&self) -> bool {
        matches!(self, NurayaError::Unresolvable(_))
    }
}
