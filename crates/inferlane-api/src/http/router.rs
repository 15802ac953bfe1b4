//! Axum router configuration with middleware (CORS, request tracing).

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/predict", post(handlers::predict::predict))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use inferlane_core::adapter::InferenceAdapter;
    use inferlane_core::backend::{BoxInferenceBackend, InferenceBackend};
    use inferlane_core::metrics::NoopMetricsSink;
    use inferlane_core::router::BackendHandles;
    use inferlane_types::config::AdapterConfig;
    use inferlane_types::error::InferenceError;
    use inferlane_types::inference::{InferenceRequest, InferenceResponse, ProviderKind};

    use super::*;

    struct UnavailableBackend;

    impl InferenceBackend for UnavailableBackend {
        fn kind(&self) -> ProviderKind {
            ProviderKind::SageMaker
        }

        async fn invoke(
            &self,
            _request: &InferenceRequest,
        ) -> Result<InferenceResponse, InferenceError> {
            Err(InferenceError::Status {
                provider: ProviderKind::SageMaker,
                status: 503,
                body: "endpoint unavailable".to_string(),
            })
        }
    }

    fn local_router() -> Router {
        let config = AdapterConfig {
            model_version: Some("1.2.0".to_string()),
            ..AdapterConfig::default()
        };
        let adapter =
            InferenceAdapter::new(config, BackendHandles::new(), Arc::new(NoopMetricsSink))
                .unwrap();
        build_router(AppState::from_adapter(adapter))
    }

    fn failing_router() -> Router {
        let config = AdapterConfig {
            provider: ProviderKind::SageMaker,
            ..AdapterConfig::default()
        };
        let handles =
            BackendHandles::new().with_sagemaker(BoxInferenceBackend::new(UnavailableBackend));
        let adapter = InferenceAdapter::new(config, handles, Arc::new(NoopMetricsSink)).unwrap();
        build_router(AppState::from_adapter(adapter))
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = local_router()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({"status": "healthy"}));
    }

    #[tokio::test]
    async fn test_predict_local_backend() {
        let response = local_router()
            .oneshot(post_json("/predict", r#"{"age": 63, "chol": 233}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["prediction"], json!("mock_prediction"));
        assert_eq!(body["provider"], json!("local"));
        assert_eq!(body["model_version"], json!("1.2.0"));
        let timestamp = body["timestamp"].as_f64().unwrap();
        assert!(timestamp > 1_600_000_000.0, "timestamp: {timestamp}");
    }

    #[tokio::test]
    async fn test_predict_backend_failure_is_bad_gateway() {
        let response = failing_router()
            .oneshot(post_json("/predict", r#"{"prompt": "hi"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], json!("BACKEND_ERROR"));
        assert!(
            body["error"]["message"]
                .as_str()
                .unwrap()
                .contains("endpoint unavailable")
        );
    }

    #[tokio::test]
    async fn test_predict_rejects_non_object_body() {
        let response = local_router()
            .oneshot(post_json("/predict", "[1, 2, 3]"))
            .await
            .unwrap();

        assert!(response.status().is_client_error());
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let response = local_router()
            .oneshot(Request::get("/metrics").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
