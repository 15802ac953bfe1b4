//! Local mock backend for development without any remote dependency.

use serde_json::Value;

use inferlane_types::error::InferenceError;
use inferlane_types::inference::{InferenceRequest, InferenceResponse, ProviderKind};

use super::provider::InferenceBackend;

/// Placeholder prediction returned by [`LocalBackend`].
pub const MOCK_PREDICTION: &str = "mock_prediction";

/// Always succeeds with a constant prediction; performs no I/O.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalBackend;

impl InferenceBackend for LocalBackend {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Local
    }

    async fn invoke(&self, _request: &InferenceRequest) -> Result<InferenceResponse, InferenceError> {
        Ok(InferenceResponse {
            prediction: Value::String(MOCK_PREDICTION.to_string()),
            provider: ProviderKind::Local,
            token_count: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_local_backend_returns_placeholder() {
        let request = InferenceRequest::new().with_field("prompt", "ignored");
        let response = LocalBackend.invoke(&request).await.unwrap();
        assert_eq!(response.prediction, Value::String("mock_prediction".to_string()));
        assert_eq!(response.provider, ProviderKind::Local);
        assert_eq!(response.token_count, None);
    }
}
