//! SageMakerBackend -- concrete [`InferenceBackend`] for a hosted SageMaker endpoint.

use std::time::Duration;

use chrono::Utc;
use serde_json::Value;

use inferlane_core::backend::InferenceBackend;
use inferlane_types::error::InferenceError;
use inferlane_types::inference::{InferenceRequest, InferenceResponse, ProviderKind};

use super::super::http::{build_client, send_error, status_error};
use super::super::sigv4::{self, AwsCredentials, SigningScope};

/// Invokes a named SageMaker real-time endpoint.
///
/// The whole request is forwarded as the JSON body and the endpoint's raw
/// JSON answer becomes the prediction. There is no token accounting.
/// Requests are SigV4-signed for the `sagemaker` service in the configured
/// region.
pub struct SageMakerBackend {
    client: reqwest::Client,
    credentials: AwsCredentials,
    region: String,
    base_url: String,
    endpoint_name: String,
    timeout: Duration,
}

impl SageMakerBackend {
    /// Service name in the SigV4 credential scope.
    const SIGNING_SERVICE: &'static str = "sagemaker";

    pub fn new(
        credentials: AwsCredentials,
        endpoint_name: String,
        region: &str,
        timeout: Duration,
    ) -> Self {
        Self {
            client: build_client(timeout),
            credentials,
            region: region.to_string(),
            base_url: format!("https://runtime.sagemaker.{region}.amazonaws.com"),
            endpoint_name,
            timeout,
        }
    }

    /// Point the backend at a different runtime endpoint.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn url(&self) -> String {
        format!(
            "{}/endpoints/{}/invocations",
            self.base_url,
            urlencoding::encode(&self.endpoint_name)
        )
    }
}

impl InferenceBackend for SageMakerBackend {
    fn kind(&self) -> ProviderKind {
        ProviderKind::SageMaker
    }

    async fn invoke(&self, request: &InferenceRequest) -> Result<InferenceResponse, InferenceError> {
        let body = serde_json::to_vec(request)
            .map_err(|e| InferenceError::Serialization(e.to_string()))?;
        let url = self.url();
        let parsed = reqwest::Url::parse(&url)
            .map_err(|e| InferenceError::Http(format!("invalid SageMaker URL {url}: {e}")))?;

        let content_sha256 = sigv4::payload_hash(&body);
        let signed = sigv4::sign(
            &self.credentials,
            SigningScope {
                region: &self.region,
                service: Self::SIGNING_SERVICE,
            },
            "POST",
            &parsed,
            &[
                ("content-type", "application/json"),
                ("x-amz-content-sha256", &content_sha256),
            ],
            &body,
            Utc::now(),
        )
        .map_err(|e| InferenceError::Http(format!("failed to sign SageMaker request: {e}")))?;

        tracing::debug!(url = %url, endpoint = %self.endpoint_name, fields = request.as_map().len(), "SageMaker invoke request");

        let mut builder = self
            .client
            .post(parsed)
            .header("Authorization", signed.authorization)
            .header("X-Amz-Date", signed.amz_date)
            .header("X-Amz-Content-Sha256", content_sha256)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json");
        if let Some(token) = signed.security_token {
            builder = builder.header("X-Amz-Security-Token", token);
        }

        let response = builder
            .body(body)
            .send()
            .await
            .map_err(|e| send_error(e, self.timeout))?;

        if !response.status().is_success() {
            return Err(status_error(ProviderKind::SageMaker, response, &url).await);
        }

        let prediction: Value = response.json().await.map_err(|e| {
            InferenceError::Deserialization(format!("failed to parse SageMaker response: {e}"))
        })?;

        Ok(InferenceResponse {
            prediction,
            provider: ProviderKind::SageMaker,
            token_count: None,
        })
    }
}
