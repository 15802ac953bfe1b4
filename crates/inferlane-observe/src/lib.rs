//! Observability setup for Inferlane: tracing subscriber, OpenTelemetry
//! trace/metric providers, and the names of the published measurements.

pub mod metric_names;
pub mod tracing_setup;
