//! OpenTelemetry implementation of the [`MetricsSink`] port.
//!
//! Publishes `Latency` (ms, by provider and model id), `Cost` (by provider)
//! and an `inference_count` counter. Recording only touches in-process
//! aggregators; export happens on the meter provider's own schedule, so
//! `emit` never blocks on the collector.

use opentelemetry::KeyValue;
use opentelemetry::global;
use opentelemetry::metrics::{Counter, Histogram, Meter};

use inferlane_core::metrics::MetricsSink;
use inferlane_observe::metric_names::{
    COST, DIM_MODEL_ID, DIM_PROVIDER, INFERENCE_COUNT, LATENCY, METRICS_NAMESPACE,
};
use inferlane_types::error::MetricsError;
use inferlane_types::inference::InferenceMetrics;

pub struct OtelMetricsSink {
    latency: Histogram<f64>,
    cost: Histogram<f64>,
    inference_count: Counter<u64>,
}

impl OtelMetricsSink {
    /// Create instruments on the given meter.
    pub fn new(meter: &Meter) -> Self {
        Self {
            latency: meter
                .f64_histogram(LATENCY)
                .with_description("Backend invocation latency")
                .with_unit("ms")
                .with_boundaries(vec![
                    1.0, 5.0, 10.0, 25.0, 50.0, 100.0, 250.0, 500.0, 1000.0, 2500.0, 5000.0,
                    10000.0,
                ])
                .build(),
            cost: meter
                .f64_histogram(COST)
                .with_description("Estimated inference cost in USD")
                .build(),
            inference_count: meter
                .u64_counter(INFERENCE_COUNT)
                .with_description("Total inferences")
                .with_unit("{inference}")
                .build(),
        }
    }

    /// Create instruments on the global meter provider.
    pub fn global() -> Self {
        Self::new(&global::meter(METRICS_NAMESPACE))
    }
}

impl MetricsSink for OtelMetricsSink {
    fn emit(&self, metrics: &InferenceMetrics) -> Result<(), MetricsError> {
        if !metrics.latency_ms.is_finite() || !metrics.estimated_cost_usd.is_finite() {
            return Err(MetricsError::Publish(format!(
                "non-finite measurement (latency_ms={}, cost={})",
                metrics.latency_ms, metrics.estimated_cost_usd
            )));
        }

        let provider = KeyValue::new(DIM_PROVIDER, metrics.provider.as_str());

        self.latency.record(
            metrics.latency_ms,
            &[
                provider.clone(),
                KeyValue::new(DIM_MODEL_ID, metrics.model_id.clone()),
            ],
        );
        self.cost
            .record(metrics.estimated_cost_usd, std::slice::from_ref(&provider));
        self.inference_count.add(1, &[provider]);

        Ok(())
    }
}
