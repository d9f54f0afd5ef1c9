//! ログ初期化
//!
//! ログは常に標準エラーに出力する（標準出力はURL一覧などの結果専用）。

use crate::env::EnvVar;
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "nuraya=info";
const VERBOSE_FILTER: &str = "nuraya=debug";

/// 使用するフィルタ指定を決定
///
/// `--verbose` が最優先、次に RUST_LOG、どちらもなければ info。
fn filter_directive(verbose: bool, rust_log: Option<String>) -> String {
    if verbose {
        return VERBOSE_FILTER.to_string();
    }
    rust_log.unwrap_or_else(|| DEFAULT_FILTER.to_string())
}

/// tracing サブスクライバを初期化
pub fn init(verbose: bool) {
    let directive = filter_directive(verbose, EnvVar::get("RUST_LOG"));
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}
