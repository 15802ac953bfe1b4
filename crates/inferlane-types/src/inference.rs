//! Inference request/response types and per-call metrics.
//!
//! The request is an opaque string-keyed JSON object; the only field the
//! adapter gives meaning to is `prompt`. Responses always carry the
//! `provider` that produced them so cost estimation can key off it.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Identifier of a backing model-hosting provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// Text generation through AWS Bedrock.
    Bedrock,
    /// A hosted SageMaker inference endpoint.
    #[serde(rename = "sagemaker")]
    SageMaker,
    /// Local mock backend with no external dependency.
    Local,
}

impl ProviderKind {
    /// Resolve a configured provider string into a backend.
    ///
    /// Total: absent, empty or unrecognized values fall back to
    /// [`ProviderKind::Local`]. Matching is exact, so `"SageMaker"` or
    /// `" bedrock"` are unrecognized.
    pub fn resolve(configured: Option<&str>) -> Self {
        configured
            .and_then(|value| value.parse().ok())
            .unwrap_or(ProviderKind::Local)
    }

    /// Stable string identifier (`"bedrock"`, `"sagemaker"`, `"local"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::Bedrock => "bedrock",
            ProviderKind::SageMaker => "sagemaker",
            ProviderKind::Local => "local",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bedrock" => Ok(ProviderKind::Bedrock),
            "sagemaker" => Ok(ProviderKind::SageMaker),
            "local" => Ok(ProviderKind::Local),
            other => Err(format!("invalid provider: '{other}'")),
        }
    }
}

/// A prediction request: an opaque mapping of field names to JSON values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InferenceRequest(Map<String, Value>);

impl InferenceRequest {
    /// Create an empty request.
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Builder-style field insertion.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// The `prompt` field, if present and a string.
    pub fn prompt(&self) -> Option<&str> {
        self.0.get("prompt").and_then(Value::as_str)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

/// A backend's answer to an [`InferenceRequest`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InferenceResponse {
    /// Backend-specific prediction payload.
    pub prediction: Value,
    /// Which backend produced this response.
    pub provider: ProviderKind,
    /// Tokens consumed, for backends that account for them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_count: Option<u64>,
}

impl InferenceResponse {
    /// Token usage with absent counts treated as zero.
    pub fn tokens_used(&self) -> u64 {
        self.token_count.unwrap_or(0)
    }
}

/// Telemetry derived once per `predict` call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InferenceMetrics {
    pub provider: ProviderKind,
    pub model_id: String,
    /// Wall-clock time spent inside the backend invocation.
    pub latency_ms: f64,
    pub tokens_used: u64,
    pub estimated_cost_usd: f64,
}

impl InferenceMetrics {
    /// Build metrics from a measured invocation duration.
    ///
    /// Negative or non-finite costs are clamped to zero.
    pub fn new(
        provider: ProviderKind,
        model_id: impl Into<String>,
        latency: Duration,
        tokens_used: u64,
        estimated_cost_usd: f64,
    ) -> Self {
        let estimated_cost_usd = if estimated_cost_usd.is_finite() {
            estimated_cost_usd.max(0.0)
        } else {
            0.0
        };

        Self {
            provider,
            model_id: model_id.into(),
            latency_ms: latency.as_secs_f64() * 1000.0,
            tokens_used,
            estimated_cost_usd,
        }
    }
}
