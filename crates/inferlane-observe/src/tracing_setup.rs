//! Tracing subscriber initialization with structured logging and optional
//! OpenTelemetry export.
//!
//! # Usage
//!
//! ```no_run
//! // Structured logging only, default filter "info"
//! inferlane_observe::tracing_setup::init_tracing("info", false).unwrap();
//!
//! // With OpenTelemetry spans and metrics exported to stdout
//! inferlane_observe::tracing_setup::init_tracing("info", true).unwrap();
//! ```

use std::sync::OnceLock;

use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::metrics::SdkMeterProvider;
use opentelemetry_sdk::trace::SdkTracerProvider;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Stores the OTel providers so they can be flushed and shut down on exit.
static TRACER_PROVIDER: OnceLock<SdkTracerProvider> = OnceLock::new();
static METER_PROVIDER: OnceLock<SdkMeterProvider> = OnceLock::new();

/// Initialize the global tracing subscriber.
///
/// - Always installs a structured `fmt` layer with span close timing.
/// - `default_filter` applies when `RUST_LOG` is unset.
/// - When `enable_otel` is true, bridges tracing spans to OpenTelemetry and
///   installs a global meter provider, both with stdout exporters (swap for
///   OTLP in production). Without it, the global meter is a no-op and
///   inference metrics are dropped.
///
/// # Errors
///
/// Returns an error if the global subscriber has already been set.
pub fn init_tracing(
    default_filter: &str,
    enable_otel: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    if enable_otel {
        let tracer_provider = SdkTracerProvider::builder()
            .with_simple_exporter(opentelemetry_stdout::SpanExporter::default())
            .build();
        let tracer = tracer_provider.tracer("inferlane");
        let otel_layer = tracing_opentelemetry::layer().with_tracer(tracer);

        let meter_provider = SdkMeterProvider::builder()
            .with_periodic_exporter(opentelemetry_stdout::MetricExporter::default())
            .build();

        let _ = TRACER_PROVIDER.set(tracer_provider.clone());
        let _ = METER_PROVIDER.set(meter_provider.clone());
        opentelemetry::global::set_tracer_provider(tracer_provider);
        opentelemetry::global::set_meter_provider(meter_provider);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .with(otel_layer)
            .try_init()?;
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    }

    Ok(())
}

/// Flush pending spans and metrics and shut down the OTel providers.
///
/// Safe to call even when OTel was not enabled (no-op in that case).
pub fn shutdown_tracing() {
    if let Some(provider) = METER_PROVIDER.get() {
        if let Err(e) = provider.shutdown() {
            eprintln!("Warning: OTel meter provider shutdown error: {e}");
        }
    }
    if let Some(provider) = TRACER_PROVIDER.get() {
        if let Err(e) = provider.shutdown() {
            eprintln!("Warning: OTel tracer provider shutdown error: {e}");
        }
    }
}
