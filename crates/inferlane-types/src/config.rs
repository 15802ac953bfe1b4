//! Adapter configuration types.
//!
//! [`RawConfig`] mirrors the loosely-typed nested mapping found in the
//! pipeline's YAML config files (other keys in those files are ignored).
//! [`AdapterConfig::from_raw`] applies defaults and validates it into the
//! immutable structure the adapter runs on.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ConfigError;
use crate::inference::ProviderKind;

/// Region used when neither the config file nor the environment sets one.
pub const DEFAULT_REGION: &str = "us-east-1";

const DEFAULT_MODEL_ID: &str = "unknown";
const DEFAULT_MAX_TOKENS: u32 = 256;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 300;
const DEFAULT_COST_LIMIT_USD: f64 = 0.01;

/// Configuration as it appears on disk, before defaults and validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawConfig {
    #[serde(default)]
    pub provider: Option<String>,
    #[serde(default)]
    pub model_id: Option<String>,
    #[serde(default)]
    pub model: RawModelSection,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
    #[serde(default)]
    pub bedrock: RawBedrockSection,
    #[serde(default)]
    pub sagemaker: RawSageMakerSection,
    #[serde(default)]
    pub cost: RawCostSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawModelSection {
    /// Accepts `1.2.0` as well as bare numbers such as `3`.
    #[serde(default)]
    pub version: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawBedrockSection {
    #[serde(default)]
    pub model_id: Option<String>,
    #[serde(default)]
    pub max_tokens: Option<u32>,
    #[serde(default)]
    pub endpoint_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSageMakerSection {
    #[serde(default)]
    pub endpoint_name: Option<String>,
    #[serde(default)]
    pub endpoint_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCostSection {
    #[serde(default)]
    pub per_inference_limit_usd: Option<f64>,
}

/// Validated, immutable adapter configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdapterConfig {
    /// Resolved backend selection.
    pub provider: ProviderKind,
    /// The provider string as written in the config, kept for diagnostics.
    pub configured_provider: Option<String>,
    /// Model identifier used as a metrics dimension.
    pub model_id: String,
    /// Deployed model version reported by the HTTP surface.
    pub model_version: Option<String>,
    pub region: String,
    pub request_timeout_secs: u64,
    pub bedrock: BedrockSettings,
    pub sagemaker: SageMakerSettings,
    pub cost: CostSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BedrockSettings {
    pub model_id: Option<String>,
    pub max_tokens: u32,
    pub endpoint_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SageMakerSettings {
    pub endpoint_name: Option<String>,
    pub endpoint_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostSettings {
    /// Advisory per-inference ceiling in USD.
    pub per_inference_limit_usd: f64,
}

impl AdapterConfig {
    /// Apply defaults to a raw config and validate it.
    ///
    /// `fallback_region` is used when the file does not set `region`
    /// (callers typically pass `AWS_REGION` from the environment).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a numeric setting is out of range
    /// or when the selected provider lacks its required connection setting.
    pub fn from_raw(raw: RawConfig, fallback_region: &str) -> Result<Self, ConfigError> {
        let configured_provider = raw.provider;
        let provider = ProviderKind::resolve(configured_provider.as_deref());

        let max_tokens = raw.bedrock.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS);
        if max_tokens == 0 {
            return Err(ConfigError::Invalid(
                "bedrock.max_tokens must be greater than zero".to_string(),
            ));
        }

        let limit = raw
            .cost
            .per_inference_limit_usd
            .unwrap_or(DEFAULT_COST_LIMIT_USD);
        if !limit.is_finite() || limit < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "cost.per_inference_limit_usd must be a non-negative number, got {limit}"
            )));
        }

        let request_timeout_secs = raw
            .request_timeout_secs
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS);
        if request_timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "request_timeout_secs must be greater than zero".to_string(),
            ));
        }

        let bedrock_model_id = non_empty(raw.bedrock.model_id);
        let endpoint_name = non_empty(raw.sagemaker.endpoint_name);

        match provider {
            ProviderKind::Bedrock if bedrock_model_id.is_none() => {
                return Err(ConfigError::Invalid(
                    "bedrock.model_id is required when provider is 'bedrock'".to_string(),
                ));
            }
            ProviderKind::SageMaker if endpoint_name.is_none() => {
                return Err(ConfigError::Invalid(
                    "sagemaker.endpoint_name is required when provider is 'sagemaker'"
                        .to_string(),
                ));
            }
            _ => {}
        }

        let model_version = raw.model.version.and_then(|v| match v {
            Value::String(s) => Some(s),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        });

        Ok(Self {
            provider,
            configured_provider,
            model_id: non_empty(raw.model_id).unwrap_or_else(|| DEFAULT_MODEL_ID.to_string()),
            model_version,
            region: non_empty(raw.region).unwrap_or_else(|| fallback_region.to_string()),
            request_timeout_secs,
            bedrock: BedrockSettings {
                model_id: bedrock_model_id,
                max_tokens,
                endpoint_url: non_empty(raw.bedrock.endpoint_url),
            },
            sagemaker: SageMakerSettings {
                endpoint_name,
                endpoint_url: non_empty(raw.sagemaker.endpoint_url),
            },
            cost: CostSettings {
                per_inference_limit_usd: limit,
            },
        })
    }

    /// Whether the configured provider string was not recognized and the
    /// local backend was selected in its place.
    pub fn fell_back_to_local(&self) -> bool {
        self.provider == ProviderKind::Local
            && self
                .configured_provider
                .as_deref()
                .is_some_and(|p| p != "local")
    }
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            provider: ProviderKind::Local,
            configured_provider: None,
            model_id: DEFAULT_MODEL_ID.to_string(),
            model_version: None,
            region: DEFAULT_REGION.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            bedrock: BedrockSettings {
                model_id: None,
                max_tokens: DEFAULT_MAX_TOKENS,
                endpoint_url: None,
            },
            sagemaker: SageMakerSettings {
                endpoint_name: None,
                endpoint_url: None,
            },
            cost: CostSettings {
                per_inference_limit_usd: DEFAULT_COST_LIMIT_USD,
            },
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
