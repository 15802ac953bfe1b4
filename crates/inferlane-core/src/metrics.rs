//! Metrics sink port.
//!
//! A sink publishes one [`InferenceMetrics`] record per prediction to an
//! external collector. Implementations live in inferlane-infra.

use inferlane_types::error::MetricsError;
use inferlane_types::inference::InferenceMetrics;

/// Destination for per-inference latency and cost telemetry.
///
/// `emit` is synchronous and must not block on network delivery; callers
/// treat an `Err` as non-fatal and only log it.
pub trait MetricsSink: Send + Sync {
    fn emit(&self, metrics: &InferenceMetrics) -> Result<(), MetricsError>;
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopMetricsSink;

impl MetricsSink for NoopMetricsSink {
    fn emit(&self, _metrics: &InferenceMetrics) -> Result<(), MetricsError> {
        Ok(())
    }
}
