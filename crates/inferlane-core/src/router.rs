//! Provider routing.
//!
//! Selects exactly one backend from the configured [`ProviderKind`]. Backend
//! handles are injected by the caller at construction time; the local mock
//! backend is built in and serves as the single fallback arm.

use inferlane_types::config::AdapterConfig;
use inferlane_types::error::ConfigError;
use inferlane_types::inference::ProviderKind;

use crate::backend::{BoxInferenceBackend, LocalBackend};

/// Remote backend handles supplied by the caller.
///
/// Only the handle for the configured provider has to be present.
#[derive(Debug, Default)]
pub struct BackendHandles {
    pub bedrock: Option<BoxInferenceBackend>,
    pub sagemaker: Option<BoxInferenceBackend>,
}

impl BackendHandles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bedrock(mut self, backend: BoxInferenceBackend) -> Self {
        self.bedrock = Some(backend);
        self
    }

    pub fn with_sagemaker(mut self, backend: BoxInferenceBackend) -> Self {
        self.sagemaker = Some(backend);
        self
    }
}

/// Routes every request to the one backend chosen at construction.
#[derive(Debug)]
pub struct ProviderRouter {
    provider: ProviderKind,
    backend: BoxInferenceBackend,
}

impl ProviderRouter {
    /// Bind the router to the backend for `provider`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingBackend`] when `provider` is a remote
    /// provider and its handle was not supplied. Unsupplied handles for
    /// providers that are not selected are ignored.
    pub fn new(provider: ProviderKind, handles: BackendHandles) -> Result<Self, ConfigError> {
        let backend = match provider {
            ProviderKind::Bedrock => handles
                .bedrock
                .ok_or(ConfigError::MissingBackend(ProviderKind::Bedrock))?,
            ProviderKind::SageMaker => handles
                .sagemaker
                .ok_or(ConfigError::MissingBackend(ProviderKind::SageMaker))?,
            ProviderKind::Local => BoxInferenceBackend::new(LocalBackend),
        };

        if backend.kind() != provider {
            tracing::warn!(
                provider = %provider,
                backend = %backend.kind(),
                "Injected backend reports a different provider than the one it was registered for"
            );
        }

        Ok(Self { provider, backend })
    }

    /// Build a router from a validated config.
    pub fn from_config(config: &AdapterConfig, handles: BackendHandles) -> Result<Self, ConfigError> {
        if config.fell_back_to_local() {
            tracing::debug!(
                configured = config.configured_provider.as_deref().unwrap_or_default(),
                "Unrecognized provider, routing to local backend"
            );
        }
        Self::new(config.provider, handles)
    }

    /// The provider this router dispatches to.
    pub fn provider(&self) -> ProviderKind {
        self.provider
    }

    /// The selected backend.
    pub fn route(&self) -> &BoxInferenceBackend {
        &self.backend
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::Ordering;

    use serde_json::json;

    use inferlane_types::config::{DEFAULT_REGION, RawConfig};
    use inferlane_types::inference::InferenceRequest;

    use super::*;
    use crate::testing::FakeBackend;

    fn raw_with_provider(provider: Option<&str>) -> RawConfig {
        RawConfig {
            provider: provider.map(str::to_string),
            ..RawConfig::default()
        }
    }

    #[tokio::test]
    async fn test_unknown_provider_routes_to_local_without_remote_call() {
        for configured in [None, Some("vertex"), Some(""), Some("openai")] {
            let bedrock = FakeBackend::new(ProviderKind::Bedrock, json!("remote"), Some(5));
            let sagemaker = FakeBackend::new(ProviderKind::SageMaker, json!("remote"), None);
            let bedrock_calls = bedrock.calls();
            let sagemaker_calls = sagemaker.calls();

            let config =
                AdapterConfig::from_raw(raw_with_provider(configured), DEFAULT_REGION).unwrap();
            let handles = BackendHandles::new()
                .with_bedrock(BoxInferenceBackend::new(bedrock))
                .with_sagemaker(BoxInferenceBackend::new(sagemaker));
            let router = ProviderRouter::from_config(&config, handles).unwrap();

            let response = router.route().invoke(&InferenceRequest::new()).await.unwrap();
            assert_eq!(response.provider, ProviderKind::Local, "configured: {configured:?}");
            assert_eq!(bedrock_calls.load(Ordering::SeqCst), 0);
            assert_eq!(sagemaker_calls.load(Ordering::SeqCst), 0);
        }
    }

    #[tokio::test]
    async fn test_mixed_case_provider_is_unrecognized() {
        for configured in ["SageMaker", " sagemaker", "BEDROCK", "bedrock "] {
            let bedrock = FakeBackend::new(ProviderKind::Bedrock, json!("remote"), Some(5));
            let sagemaker = FakeBackend::new(ProviderKind::SageMaker, json!("remote"), None);
            let bedrock_calls = bedrock.calls();
            let sagemaker_calls = sagemaker.calls();

            let mut raw = raw_with_provider(Some(configured));
            raw.sagemaker.endpoint_name = Some("ep".to_string());
            raw.bedrock.model_id = Some("anthropic.claude-v2".to_string());
            let config = AdapterConfig::from_raw(raw, DEFAULT_REGION).unwrap();
            let handles = BackendHandles::new()
                .with_bedrock(BoxInferenceBackend::new(bedrock))
                .with_sagemaker(BoxInferenceBackend::new(sagemaker));
            let router = ProviderRouter::from_config(&config, handles).unwrap();

            assert_eq!(router.provider(), ProviderKind::Local, "configured: {configured:?}");
            let response = router.route().invoke(&InferenceRequest::new()).await.unwrap();
            assert_eq!(response.provider, ProviderKind::Local);
            assert_eq!(bedrock_calls.load(Ordering::SeqCst), 0);
            assert_eq!(sagemaker_calls.load(Ordering::SeqCst), 0);
        }
    }

    #[tokio::test]
    async fn test_routes_to_injected_sagemaker_handle() {
        let sagemaker = FakeBackend::new(ProviderKind::SageMaker, json!([0.87]), None);
        let calls = sagemaker.calls();
        let router = ProviderRouter::new(
            ProviderKind::SageMaker,
            BackendHandles::new().with_sagemaker(BoxInferenceBackend::new(sagemaker)),
        )
        .unwrap();

        assert_eq!(router.provider(), ProviderKind::SageMaker);
        let response = router.route().invoke(&InferenceRequest::new()).await.unwrap();
        assert_eq!(response.prediction, json!([0.87]));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_missing_handle_is_construction_error() {
        let err = ProviderRouter::new(ProviderKind::Bedrock, BackendHandles::new()).unwrap_err();
        assert!(matches!(err, ConfigError::MissingBackend(ProviderKind::Bedrock)));
    }

    #[test]
    fn test_local_needs_no_handles() {
        let router = ProviderRouter::new(ProviderKind::Local, BackendHandles::new()).unwrap();
        assert_eq!(router.route().kind(), ProviderKind::Local);
    }
}
