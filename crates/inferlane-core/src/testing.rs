//! Test doubles shared by the core unit tests.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use serde_json::Value;
use tracing::field::{Field, Visit};
use tracing::subscriber::DefaultGuard;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;

use inferlane_types::error::{InferenceError, MetricsError};
use inferlane_types::inference::{
    InferenceMetrics, InferenceRequest, InferenceResponse, ProviderKind,
};

use crate::backend::InferenceBackend;
use crate::metrics::MetricsSink;

/// Backend that returns a canned response and counts its invocations.
pub struct FakeBackend {
    kind: ProviderKind,
    prediction: Value,
    token_count: Option<u64>,
    fail_with_status: Option<u16>,
    calls: Arc<AtomicUsize>,
}

impl FakeBackend {
    pub fn new(kind: ProviderKind, prediction: Value, token_count: Option<u64>) -> Self {
        Self {
            kind,
            prediction,
            token_count,
            fail_with_status: None,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn failing(kind: ProviderKind, status: u16) -> Self {
        Self {
            fail_with_status: Some(status),
            ..Self::new(kind, Value::Null, None)
        }
    }

    /// Shared call counter; stays readable after the backend is boxed.
    pub fn calls(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

impl InferenceBackend for FakeBackend {
    fn kind(&self) -> ProviderKind {
        self.kind
    }

    async fn invoke(&self, _request: &InferenceRequest) -> Result<InferenceResponse, InferenceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(status) = self.fail_with_status {
            return Err(InferenceError::Status {
                provider: self.kind,
                status,
                body: "fake failure".to_string(),
            });
        }
        Ok(InferenceResponse {
            prediction: self.prediction.clone(),
            provider: self.kind,
            token_count: self.token_count,
        })
    }
}

/// Sink that keeps every emitted record for inspection.
#[derive(Default)]
pub struct RecordingSink {
    emitted: Mutex<Vec<InferenceMetrics>>,
}

impl RecordingSink {
    pub fn emitted(&self) -> Vec<InferenceMetrics> {
        self.emitted.lock().unwrap().clone()
    }
}

impl MetricsSink for RecordingSink {
    fn emit(&self, metrics: &InferenceMetrics) -> Result<(), MetricsError> {
        self.emitted.lock().unwrap().push(metrics.clone());
        Ok(())
    }
}

/// Sink that always fails, counting attempts.
#[derive(Default)]
pub struct FailingSink {
    attempts: AtomicUsize,
}

impl FailingSink {
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

impl MetricsSink for FailingSink {
    fn emit(&self, _metrics: &InferenceMetrics) -> Result<(), MetricsError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(MetricsError::Publish("collector unreachable".to_string()))
    }
}

/// A WARN event seen by [`WarnCapture`].
#[derive(Debug, Clone)]
pub struct CapturedWarning {
    pub message: String,
    /// Name of the innermost span the event was recorded in.
    pub span: Option<String>,
}

/// Tracing layer that records WARN events.
///
/// Installed as the thread-local default, so it only sees events from the
/// current test (tokio tests run on a current-thread runtime).
#[derive(Clone, Default)]
pub struct WarnCapture {
    warnings: Arc<Mutex<Vec<CapturedWarning>>>,
}

impl WarnCapture {
    pub fn install() -> (Self, DefaultGuard) {
        let capture = Self::default();
        let subscriber = tracing_subscriber::registry().with(capture.clone());
        let guard = tracing::subscriber::set_default(subscriber);
        (capture, guard)
    }

    pub fn warnings(&self) -> Vec<CapturedWarning> {
        self.warnings.lock().unwrap().clone()
    }
}

impl<S> Layer<S> for WarnCapture
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, ctx: Context<'_, S>) {
        if *event.metadata().level() != Level::WARN {
            return;
        }
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        self.warnings.lock().unwrap().push(CapturedWarning {
            message: visitor.message,
            span: ctx.event_span(event).map(|span| span.name().to_string()),
        });
    }
}

#[derive(Default)]
struct MessageVisitor {
    message: String,
}

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        }
    }
}
