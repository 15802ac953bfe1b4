//! Names of the inference measurements and their dimensions.
//!
//! Dashboards and alarms downstream key off these exact strings.

/// Meter / namespace under which inference measurements are published.
pub const METRICS_NAMESPACE: &str = "ML/Inference";

/// Backend invocation latency, in milliseconds.
pub const LATENCY: &str = "Latency";

/// Estimated inference cost (unitless, USD by convention).
pub const COST: &str = "Cost";

/// Number of completed inferences.
pub const INFERENCE_COUNT: &str = "inference_count";

// --- Dimensions ---

/// Provider that served the inference (`bedrock`, `sagemaker`, `local`).
pub const DIM_PROVIDER: &str = "Provider";

/// Configured model identifier.
pub const DIM_MODEL_ID: &str = "ModelId";
