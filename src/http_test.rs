use super::*;

fn registry_error(status: u16) -> NurayaError {
    NurayaError::RegistryApi {
        status,
        message: "error".to_string(),
    }
}

// =========================================================================
// is_retriable_error tests
// =========================================================================

#[test]
fn test_is_retriable_error_429() {
    assert!(is_retriable_error(&registry_error(429)));
}

#[test]
fn test_is_retriable_error_5xx() {
    assert!(is_retriable_error(&registry_error(500)));
    assert!(is_retriable_error(&registry_error(502)));
    assert!(is_retriable_error(&registry_error(503)));
}

#[test]
fn test_is_retriable_error_4xx() {
    assert!(!is_retriable_error(&registry_error(401)));
    assert!(!is_retriable_error(&registry_error(404)));
}

#[test]
fn test_is_retriable_error_other_variants() {
    assert!(!is_retriable_error(&NurayaError::InvalidCatalog(
        "bad".to_string()
    )));
    assert!(!is_retriable_error(&NurayaError::PluginNotFound(
        "foo".to_string()
    )));
}

// =========================================================================
// with_retry tests
// =========================================================================

#[tokio::test]
async fn test_with_retry_success_first_try() {
    let mut call_count = 0;
    let result = with_retry(
        || {
            call_count += 1;
            async { Ok::<_, NurayaError>(42) }
        },
        3,
    )
    .await;

    assert_eq!(result.unwrap(), 42);
    assert_eq!(call_count, 1);
}

#[tokio::test]
async fn test_with_retry_success_after_retries() {
    let mut call_count = 0;
    let result = with_retry(
        || {
            call_count += 1;
            let fail = call_count < 3;
            async move {
                if fail {
                    Err(registry_error(503))
                } else {
                    Ok(42)
                }
            }
        },
        3,
    )
    .await;

    assert_eq!(result.unwrap(), 42);
    assert_eq!(call_count, 3);
}

#[tokio::test]
async fn test_with_retry_fails_after_max_retries() {
    let mut call_count = 0;
    let result: Result<i32> = with_retry(
        || {
            call_count += 1;
            async { Err(registry_error(500)) }
        },
        2,
    )
    .await;

    assert!(result.is_err());
    // 初回 + 2回リトライ = 3回
    assert_eq!(call_count, 3);
}

#[tokio::test]
async fn test_with_retry_non_retriable_error_fails_immediately() {
    let mut call_count = 0;
    let result: Result<i32> = with_retry(
        || {
            call_count += 1;
            async { Err(registry_error(404)) }
        },
        3,
    )
    .await;

    assert!(matches!(
        result,
        Err(NurayaError::RegistryApi { status: 404, .. })
    ));
    assert_eq!(call_count, 1);
}
