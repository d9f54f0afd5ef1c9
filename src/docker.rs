//! Docker コマンドのラッパー
//!
//! コマンド構築と実行を分け、引数と環境変数をテストできるようにする。

use crate::error::{NurayaError, Result};
use std::process::Command;

/// 既定のイメージ名
pub const DEFAULT_IMAGE: &str = "grafana-nuraya:dev";

/// 既定の管理者パスワード
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin";

/// 実行時のコンテナ名
pub const CONTAINER_NAME: &str = "grafana-nuraya";

/// 公開ポート（host:container）
pub const PUBLISHED_PORT: &str = "3000:3000";

const DOCKER: &str = "docker";

/// `docker build` コマンドを構築
pub fn build_command(image: &str) -> Command {
    let mut command = Command::new(DOCKER);
    command
        .args(["build", "-t", image, "."])
        .env("BUILDKIT_PROGRESS", "plain")
        .env("DOCKER_BUILDKIT", "1");
    command
}

/// `docker run` コマンドを構築
pub fn run_command(image: &str, admin_password: &str) -> Command {
    let mut command = Command::new(DOCKER);
    command.args([
        "run".to_string(),
        "--rm".to_string(),
        "-it".to_string(),
        format!("--name={}", CONTAINER_NAME),
        format!("--publish={}", PUBLISHED_PORT),
        format!("--env=GF_SECURITY_ADMIN_PASSWORD={}", admin_password),
        image.to_string(),
    ]);
    command
}

/// コマンドを実行し、終了を待つ
///
/// 非ゼロ終了は `NurayaError::Subprocess` として終了コードを保持する。
pub fn execute(mut command: Command) -> Result<()> {
    let program = command.get_program().to_string_lossy().to_string();
    tracing::info!(
        "Running: {} {}",
        program,
        command
            .get_args()
            .map(|a| a.to_string_lossy())
            .collect::<Vec<_>>()
            .join(" ")
    );

    let status = command.status()?;
    if status.success() {
        return Ok(());
    }

    Err(NurayaError::Subprocess {
        program,
        code: status.code().unwrap_or(1),
    })
}
