//! The `predict` flow.
//!
//! One pass per call, no retries:
//! route -> invoke -> measure -> emit -> guard -> return.
//!
//! Latency covers the backend invocation only. Routing, cost estimation and
//! metric emission happen outside the timed window.

use std::sync::Arc;
use std::time::Instant;

use serde::Serialize;
use tracing::{Instrument, info_span};

use inferlane_types::config::AdapterConfig;
use inferlane_types::error::{ConfigError, InferenceError};
use inferlane_types::inference::{
    InferenceMetrics, InferenceRequest, InferenceResponse, ProviderKind,
};

use crate::budget::{BudgetStatus, check_budget};
use crate::cost::{estimate_cost, format_cost};
use crate::metrics::MetricsSink;
use crate::router::{BackendHandles, ProviderRouter};

/// Everything a single `predict` call produced.
#[derive(Debug, Clone, Serialize)]
pub struct PredictOutcome {
    /// The backend's response, unmodified.
    pub response: InferenceResponse,
    pub metrics: InferenceMetrics,
    pub budget: BudgetStatus,
}

/// Routes prediction requests to the configured backend and records
/// latency/cost telemetry for each one.
///
/// Holds only immutable state, so a single instance can be shared across
/// concurrent requests behind an `Arc`.
pub struct InferenceAdapter {
    config: Arc<AdapterConfig>,
    router: ProviderRouter,
    sink: Arc<dyn MetricsSink>,
}

impl InferenceAdapter {
    /// Wire an adapter from a validated config, backend handles and a sink.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingBackend`] if the configured provider's
    /// handle is absent from `handles`.
    pub fn new(
        config: AdapterConfig,
        handles: BackendHandles,
        sink: Arc<dyn MetricsSink>,
    ) -> Result<Self, ConfigError> {
        let router = ProviderRouter::from_config(&config, handles)?;
        Ok(Self {
            config: Arc::new(config),
            router,
            sink,
        })
    }

    pub fn config(&self) -> &AdapterConfig {
        &self.config
    }

    pub fn provider(&self) -> ProviderKind {
        self.router.provider()
    }

    /// Run one prediction and return the backend's response unchanged.
    ///
    /// # Errors
    ///
    /// Backend failures (transport, HTTP status, malformed payload) propagate.
    /// Metrics failures and cost-ceiling breaches never do.
    pub async fn predict(
        &self,
        request: &InferenceRequest,
    ) -> Result<InferenceResponse, InferenceError> {
        self.predict_with_report(request)
            .await
            .map(|outcome| outcome.response)
    }

    /// Like [`Self::predict`], also returning the derived metrics and the
    /// budget guard's verdict.
    pub async fn predict_with_report(
        &self,
        request: &InferenceRequest,
    ) -> Result<PredictOutcome, InferenceError> {
        let span = info_span!(
            "inference.predict",
            provider = %self.router.provider(),
            model_id = %self.config.model_id,
        );

        self.run_predict(request).instrument(span).await
    }

    async fn run_predict(
        &self,
        request: &InferenceRequest,
    ) -> Result<PredictOutcome, InferenceError> {
        let backend = self.router.route();

        let started = Instant::now();
        let response = backend.invoke(request).await?;
        let latency = started.elapsed();

        let metrics = InferenceMetrics::new(
            response.provider,
            self.config.model_id.as_str(),
            latency,
            response.tokens_used(),
            estimate_cost(&response),
        );

        self.emit(&metrics);

        let budget = check_budget(
            metrics.estimated_cost_usd,
            self.config.cost.per_inference_limit_usd,
        );
        if let BudgetStatus::Exceeded {
            cost_usd,
            limit_usd,
        } = budget
        {
            tracing::warn!(
                provider = %metrics.provider,
                model_id = %metrics.model_id,
                cost_usd,
                limit_usd,
                "Inference cost exceeded limit: {}",
                format_cost(cost_usd)
            );
        }

        Ok(PredictOutcome {
            response,
            metrics,
            budget,
        })
    }

    fn emit(&self, metrics: &InferenceMetrics) {
        tracing::debug!(
            provider = %metrics.provider,
            model_id = %metrics.model_id,
            latency_ms = metrics.latency_ms,
            tokens_used = metrics.tokens_used,
            cost = %format_cost(metrics.estimated_cost_usd),
            "Inference complete"
        );

        if let Err(e) = self.sink.emit(metrics) {
            tracing::warn!(
                provider = %metrics.provider,
                error = %e,
                "Failed to publish inference metrics"
            );
        }
    }
}
