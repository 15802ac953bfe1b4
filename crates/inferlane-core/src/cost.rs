//! Per-inference cost estimation.
//!
//! A coarse linear policy keyed by the provider that produced the response.
//! Not billing-accurate; estimates are displayed as approximate (`~$0.001`).

use inferlane_types::inference::{InferenceResponse, ProviderKind};

/// Bedrock text generation, USD per token.
pub const BEDROCK_COST_PER_TOKEN_USD: f64 = 0.00002;

/// SageMaker hosted endpoint, flat USD per invocation.
pub const SAGEMAKER_COST_PER_INVOCATION_USD: f64 = 0.001;

/// Estimate the cost of a single inference in USD.
///
/// Pure and deterministic: the result depends only on the response's
/// provider tag and token count.
pub fn estimate_cost(response: &InferenceResponse) -> f64 {
    match response.provider {
        ProviderKind::Bedrock => response.tokens_used() as f64 * BEDROCK_COST_PER_TOKEN_USD,
        ProviderKind::SageMaker => SAGEMAKER_COST_PER_INVOCATION_USD,
        ProviderKind::Local => 0.0,
    }
}

/// Format a cost estimate as a human-readable string.
///
/// Always prefixed with `~`. Costs below $0.01 use 3 decimal places,
/// larger ones use 2.
pub fn format_cost(cost: f64) -> String {
    if cost < 0.01 {
        format!("~${cost:.3}")
    } else {
        format!("~${cost:.2}")
    }
}
