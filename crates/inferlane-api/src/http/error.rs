//! Application error type mapping to HTTP status codes.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use inferlane_types::error::InferenceError;

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// The inference backend failed or returned something unusable.
    Inference(InferenceError),
}

impl From<InferenceError> for AppError {
    fn from(e: InferenceError) -> Self {
        AppError::Inference(e)
    }
}

impl AppError {
    fn parts(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Inference(InferenceError::Serialization(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
            }
            AppError::Inference(InferenceError::Timeout { .. }) => {
                (StatusCode::BAD_GATEWAY, "BACKEND_TIMEOUT")
            }
            AppError::Inference(InferenceError::AuthenticationFailed(_)) => {
                (StatusCode::BAD_GATEWAY, "BACKEND_AUTH_FAILED")
            }
            AppError::Inference(InferenceError::Deserialization(_)) => {
                (StatusCode::BAD_GATEWAY, "BACKEND_BAD_RESPONSE")
            }
            AppError::Inference(_) => (StatusCode::BAD_GATEWAY, "BACKEND_ERROR"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.parts();
        let AppError::Inference(err) = &self;
        tracing::error!(status = status.as_u16(), code, error = %err, "Prediction failed");

        let body = json!({
            "error": {
                "code": code,
                "message": err.to_string(),
            },
            "timestamp": crate::http::handlers::predict::epoch_seconds(),
        });

        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use inferlane_types::inference::ProviderKind;

    use super::*;

    #[test]
    fn test_backend_failures_are_bad_gateway() {
        let cases = [
            InferenceError::Http("connection refused".to_string()),
            InferenceError::Timeout { timeout_secs: 300 },
            InferenceError::Status {
                provider: ProviderKind::SageMaker,
                status: 500,
                body: "boom".to_string(),
            },
            InferenceError::AuthenticationFailed(ProviderKind::Bedrock),
            InferenceError::Deserialization("missing completion".to_string()),
        ];
        for err in cases {
            let response = AppError::from(err).into_response();
            assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        }
    }

    #[test]
    fn test_serialization_failure_is_internal() {
        let response =
            AppError::from(InferenceError::Serialization("bad".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
