use crate::error::NurayaError;
use owo_colors::OwoColorize;
use std::io::IsTerminal;

/// 標準エラーに色付き出力するかどうか
pub fn should_use_color() -> bool {
    std::io::stderr().is_terminal() && std::env::var("NO_COLOR").is_err()
}

/// CLI向けにエラーを整形
pub fn format_error(error: &NurayaError, use_color: bool) -> String {
    if use_color {
        format!("{} {}", "error:".red().bold(), error)
    } else {
        format!("error: {}", error)
    }
}
