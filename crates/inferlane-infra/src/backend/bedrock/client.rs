//! BedrockBackend -- concrete [`InferenceBackend`] for AWS Bedrock text generation.
//!
//! The API key is wrapped in [`secrecy::SecretString`] and is never logged
//! or included in `Debug` output.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;

use inferlane_core::backend::InferenceBackend;
use inferlane_types::error::InferenceError;
use inferlane_types::inference::{InferenceRequest, InferenceResponse, ProviderKind};

use super::super::http::{build_client, send_error, status_error};
use super::types::{BedrockInvokeRequest, BedrockInvokeResponse};

/// Text-generation backend on the AWS Bedrock Runtime API.
///
/// Sends the request's `prompt` with the configured token limit and a fixed
/// sampling temperature. No retries: transport and HTTP errors are returned
/// to the caller.
pub struct BedrockBackend {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
    model_id: String,
    max_tokens: u32,
    timeout: Duration,
}

impl BedrockBackend {
    /// Sampling temperature sent with every request.
    pub const TEMPERATURE: f64 = 0.7;

    /// Prefix used to identify Bedrock API keys.
    const KEY_PREFIX: &'static str = "bedrock-api-key-";

    /// Create a new Bedrock backend.
    ///
    /// If `api_key` starts with `bedrock-api-key-`, the prefix is stripped and
    /// the remainder is used as the Bearer token.
    pub fn new(
        api_key: SecretString,
        model_id: String,
        max_tokens: u32,
        region: &str,
        timeout: Duration,
    ) -> Self {
        let raw_key = api_key.expose_secret();
        let token = raw_key.strip_prefix(Self::KEY_PREFIX).unwrap_or(raw_key);

        Self {
            client: build_client(timeout),
            api_key: SecretString::from(token.to_string()),
            base_url: format!("https://bedrock-runtime.{region}.amazonaws.com"),
            model_id,
            max_tokens,
            timeout,
        }
    }

    /// Point the backend at a different Runtime endpoint (VPC endpoint, proxy).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Full invoke URL for the configured model. The model id is a single
    /// path segment, so ARNs and inference-profile ids are percent-encoded.
    fn url(&self) -> String {
        format!(
            "{}/model/{}/invoke",
            self.base_url,
            urlencoding::encode(&self.model_id)
        )
    }

    fn to_invoke_request(&self, request: &InferenceRequest) -> BedrockInvokeRequest {
        BedrockInvokeRequest {
            prompt: request.prompt().unwrap_or_default().to_string(),
            max_tokens: self.max_tokens,
            temperature: Self::TEMPERATURE,
        }
    }
}

// No Debug derive: keeps the bearer token out of formatted output.

impl InferenceBackend for BedrockBackend {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Bedrock
    }

    async fn invoke(&self, request: &InferenceRequest) -> Result<InferenceResponse, InferenceError> {
        let body = self.to_invoke_request(request);
        let url = self.url();

        tracing::debug!(url = %url, model_id = %self.model_id, max_tokens = self.max_tokens, "Bedrock invoke request");

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key.expose_secret()))
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| send_error(e, self.timeout))?;

        if !response.status().is_success() {
            return Err(status_error(ProviderKind::Bedrock, response, &url).await);
        }

        let result: BedrockInvokeResponse = response.json().await.map_err(|e| {
            InferenceError::Deserialization(format!("failed to parse Bedrock response: {e}"))
        })?;

        Ok(InferenceResponse {
            prediction: Value::String(result.completion),
            provider: ProviderKind::Bedrock,
            token_count: Some(result.token_count),
        })
    }
}
