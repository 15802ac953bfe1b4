use thiserror::Error;

use crate::inference::ProviderKind;

/// Errors from a backend invocation. Fatal for the `predict` call that hit them.
#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    #[error("{provider} returned HTTP {status}: {body}")]
    Status {
        provider: ProviderKind,
        status: u16,
        body: String,
    },

    #[error("authentication failed for {0}")]
    AuthenticationFailed(ProviderKind),

    #[error("deserialization error: {0}")]
    Deserialization(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Errors from publishing metrics. Never escape `predict`.
#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("metrics publish failed: {0}")]
    Publish(String),
}

/// Errors from loading or validating configuration at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {message}")]
    Read { path: String, message: String },

    #[error("failed to parse {path}: {message}")]
    Parse { path: String, message: String },

    #[error("invalid configuration: {0}")]
    Invalid(String),

    #[error("no backend handle supplied for provider '{0}'")]
    MissingBackend(ProviderKind),

    #[error("missing credential: set {0}")]
    MissingCredential(String),
}
