//! Application state shared by the CLI and the HTTP handlers.

use std::path::Path;
use std::sync::Arc;

use inferlane_core::adapter::InferenceAdapter;
use inferlane_infra::build_adapter;
use inferlane_infra::config::load_config;
use inferlane_infra::metrics::OtelMetricsSink;

#[derive(Clone)]
pub struct AppState {
    pub adapter: Arc<InferenceAdapter>,
}

impl AppState {
    /// Load config from `config_path` and wire the adapter to the global
    /// OpenTelemetry meter. Call after tracing is initialised so the sink
    /// binds to the installed meter provider.
    pub async fn init(config_path: &Path) -> anyhow::Result<Self> {
        let config = load_config(config_path).await?;
        if config.fell_back_to_local() {
            tracing::warn!(
                configured = config.configured_provider.as_deref().unwrap_or_default(),
                "Unknown provider in config, serving with the local mock backend"
            );
        }

        let adapter = build_adapter(config, Arc::new(OtelMetricsSink::global()))?;
        tracing::info!(provider = %adapter.provider(), "Inference adapter ready");

        Ok(Self::from_adapter(adapter))
    }

    pub fn from_adapter(adapter: InferenceAdapter) -> Self {
        Self {
            adapter: Arc::new(adapter),
        }
    }
}
