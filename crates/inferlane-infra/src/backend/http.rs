//! Shared HTTP plumbing for the remote backends.

use std::time::Duration;

use inferlane_types::error::InferenceError;
use inferlane_types::inference::ProviderKind;

/// Build the pooled client a backend reuses for every call.
pub(crate) fn build_client(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .expect("failed to create reqwest client")
}

/// Map a transport-level failure.
pub(crate) fn send_error(err: reqwest::Error, timeout: Duration) -> InferenceError {
    if err.is_timeout() {
        InferenceError::Timeout {
            timeout_secs: timeout.as_secs(),
        }
    } else {
        InferenceError::Http(err.to_string())
    }
}

/// Turn a non-success response into an error, logging the body.
pub(crate) async fn status_error(
    provider: ProviderKind,
    response: reqwest::Response,
    url: &str,
) -> InferenceError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    tracing::warn!(provider = %provider, status = %status, body = %body, url = %url, "Backend error response");

    match status.as_u16() {
        401 | 403 => InferenceError::AuthenticationFailed(provider),
        code => InferenceError::Status {
            provider,
            status: code,
            body,
        },
    }
}
