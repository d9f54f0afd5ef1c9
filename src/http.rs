//! 共通HTTPヘルパー

use crate::error::{NurayaError, Result};
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Client;
use std::future::Future;
use std::time::Duration;

/// リトライ間隔の初期値
const RETRY_BASE_DELAY: Duration = Duration::from_millis(200);

/// スピナー付きでテキストを取得
///
/// 非2xxステータスは `NurayaError::RegistryApi` として返す。
pub async fn fetch_text(client: &Client, url: &str) -> Result<String> {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(format!("Fetching {url}"));
    pb.enable_steady_tick(Duration::from_millis(100));

    let result = send(client, url).await;
    pb.finish_and_clear();
    result
}

async fn send(client: &Client, url: &str) -> Result<String> {
    let response = client.get(url).send().await?;
    let status = response.status().as_u16();

    if !response.status().is_success() {
        let message = response.text().await.unwrap_or_default();
        return Err(NurayaError::RegistryApi { status, message });
    }

    Ok(response.text().await?)
}

/// リトライ対象のエラーかどうか
///
/// 接続エラー、429、5xx をリトライ対象とする。
pub fn is_retriable_error(error: &NurayaError) -> bool {
    match error {
        NurayaError::Network(_) => true,
        NurayaError::RegistryApi { status, .. } => *status == 429 || (500..600).contains(status),
        _ => false,
    }
}

/// リトライ付きで非同期処理を実行
///
/// `max_retries` 回までリトライする（初回を含めると最大 `max_retries + 1` 回）。
pub async fn with_retry<T, F, Fut>(mut operation: F, max_retries: u32) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let mut attempt = 0;
    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(err) if attempt < max_retries && is_retriable_error(&err) => {
                attempt += 1;
                let delay = RETRY_BASE_DELAY * 2u32.pow(attempt - 1);
                tracing::debug!("retrying after {:?} (attempt {}): {}", delay, attempt, err);
                tokio::time::sleep(delay).await;
            }
            Err(err) => return Err(err),
        }
    }
}

#[cfg(test)]
#[path = "http_test.rs"]
mod tests;
