//! Remote backend implementations.
//!
//! Concrete implementations of the [`InferenceBackend`] trait defined in
//! `inferlane-core`, plus a factory ([`create_backend_handles`]) that builds
//! the handle for the configured provider.
//!
//! [`InferenceBackend`]: inferlane_core::backend::InferenceBackend

pub mod bedrock;
mod http;
pub mod sagemaker;
pub mod sigv4;

#[cfg(test)]
mod test_server;

use std::time::Duration;

use secrecy::SecretString;

use inferlane_core::backend::BoxInferenceBackend;
use inferlane_core::router::BackendHandles;
use inferlane_types::config::AdapterConfig;
use inferlane_types::error::ConfigError;
use inferlane_types::inference::ProviderKind;

use self::bedrock::BedrockBackend;
use self::sagemaker::SageMakerBackend;
use self::sigv4::AwsCredentials;

/// Environment variables that must be set for a remote provider.
pub fn credential_env_vars(provider: ProviderKind) -> &'static [&'static str] {
    match provider {
        ProviderKind::Bedrock => &["BEDROCK_API_KEY"],
        ProviderKind::SageMaker => &["AWS_ACCESS_KEY_ID", "AWS_SECRET_ACCESS_KEY"],
        ProviderKind::Local => &[],
    }
}

/// Credentials for the remote backends.
///
/// Bedrock takes an API key as a Bearer token; SageMaker Runtime requires
/// SigV4 signing with AWS access keys.
#[derive(Debug, Clone, Default)]
pub struct BackendCredentials {
    pub bedrock_api_key: Option<SecretString>,
    pub aws: Option<AwsCredentials>,
}

impl BackendCredentials {
    /// Read `BEDROCK_API_KEY` and the standard AWS key variables.
    pub fn from_env() -> Self {
        Self {
            bedrock_api_key: std::env::var("BEDROCK_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty())
                .map(SecretString::from),
            aws: AwsCredentials::from_env(),
        }
    }

    pub fn with_bedrock_api_key(mut self, key: impl Into<String>) -> Self {
        self.bedrock_api_key = Some(SecretString::from(key.into()));
        self
    }

    pub fn with_aws(mut self, credentials: AwsCredentials) -> Self {
        self.aws = Some(credentials);
        self
    }
}

/// Build backend handles for the provider selected in `config`.
///
/// Only the selected provider's handle is constructed; the local backend
/// needs none.
///
/// # Errors
///
/// Returns [`ConfigError::MissingCredential`] if a remote provider is
/// selected but its credentials are absent.
pub fn create_backend_handles(
    config: &AdapterConfig,
    credentials: &BackendCredentials,
) -> Result<BackendHandles, ConfigError> {
    let timeout = Duration::from_secs(config.request_timeout_secs);

    match config.provider {
        ProviderKind::Bedrock => {
            let key = credentials
                .bedrock_api_key
                .clone()
                .ok_or_else(|| missing_credential(ProviderKind::Bedrock))?;
            // Validated by AdapterConfig::from_raw for the bedrock provider.
            let model_id = config.bedrock.model_id.clone().ok_or_else(|| {
                ConfigError::Invalid("bedrock.model_id is required".to_string())
            })?;
            let mut backend = BedrockBackend::new(
                key,
                model_id,
                config.bedrock.max_tokens,
                &config.region,
                timeout,
            );
            if let Some(url) = &config.bedrock.endpoint_url {
                backend = backend.with_base_url(url);
            }
            Ok(BackendHandles::new().with_bedrock(BoxInferenceBackend::new(backend)))
        }
        ProviderKind::SageMaker => {
            let aws = credentials
                .aws
                .clone()
                .ok_or_else(|| missing_credential(ProviderKind::SageMaker))?;
            let endpoint_name = config.sagemaker.endpoint_name.clone().ok_or_else(|| {
                ConfigError::Invalid("sagemaker.endpoint_name is required".to_string())
            })?;
            let mut backend = SageMakerBackend::new(aws, endpoint_name, &config.region, timeout);
            if let Some(url) = &config.sagemaker.endpoint_url {
                backend = backend.with_base_url(url);
            }
            Ok(BackendHandles::new().with_sagemaker(BoxInferenceBackend::new(backend)))
        }
        ProviderKind::Local => Ok(BackendHandles::new()),
    }
}

fn missing_credential(provider: ProviderKind) -> ConfigError {
    ConfigError::MissingCredential(credential_env_vars(provider).join(", "))
}
