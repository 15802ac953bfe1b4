//! Bedrock text-completion request/response bodies.
//!
//! The model id is not part of the body; it goes in the URL path.

use serde::{Deserialize, Serialize};

/// Request body for `POST /model/{model_id}/invoke`.
#[derive(Debug, Clone, Serialize)]
pub struct BedrockInvokeRequest {
    pub prompt: String,
    pub max_tokens: u32,
    pub temperature: f64,
}

/// Response body from the text-completion model.
///
/// `completion` is required; a payload without it is treated as malformed.
#[derive(Debug, Clone, Deserialize)]
pub struct BedrockInvokeResponse {
    pub completion: String,
    #[serde(default)]
    pub token_count: u64,
}
