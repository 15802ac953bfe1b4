//! POST /predict - Run one inference through the adapter.

use axum::Json;
use axum::extract::State;
use chrono::Utc;
use serde::Serialize;
use serde_json::Value;

use inferlane_types::inference::{InferenceRequest, ProviderKind};

use crate::http::error::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub prediction: Value,
    pub provider: ProviderKind,
    pub model_version: Option<String>,
    /// Unix epoch seconds with sub-second precision.
    pub timestamp: f64,
}

pub(crate) fn epoch_seconds() -> f64 {
    Utc::now().timestamp_micros() as f64 / 1_000_000.0
}

/// The body must be a JSON object; anything else is rejected by the
/// extractor before the adapter is called.
pub async fn predict(
    State(state): State<AppState>,
    Json(request): Json<InferenceRequest>,
) -> Result<Json<PredictResponse>, AppError> {
    let response = state.adapter.predict(&request).await?;

    Ok(Json(PredictResponse {
        prediction: response.prediction,
        provider: response.provider,
        model_version: state.adapter.config().model_version.clone(),
        timestamp: epoch_seconds(),
    }))
}
