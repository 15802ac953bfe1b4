//! Infrastructure layer for Inferlane.
//!
//! Implements the ports defined in `inferlane-core`: HTTP backends for
//! AWS Bedrock and SageMaker, an OpenTelemetry metrics sink, and the YAML
//! configuration loader. [`build_adapter`] wires them into a ready
//! [`InferenceAdapter`].

pub mod backend;
pub mod config;
pub mod metrics;

use std::sync::Arc;

use inferlane_core::adapter::InferenceAdapter;
use inferlane_core::metrics::MetricsSink;
use inferlane_types::config::AdapterConfig;
use inferlane_types::error::ConfigError;

/// Build an adapter for `config`, reading the selected provider's
/// credentials from the environment.
///
/// # Errors
///
/// Returns [`ConfigError::MissingCredential`] when a remote provider is
/// selected and its credential variables are unset.
pub fn build_adapter(
    config: AdapterConfig,
    sink: Arc<dyn MetricsSink>,
) -> Result<InferenceAdapter, ConfigError> {
    let credentials = backend::BackendCredentials::from_env();
    let handles = backend::create_backend_handles(&config, &credentials)?;
    InferenceAdapter::new(config, handles, sink)
}
