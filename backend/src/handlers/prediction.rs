//! HTTP handler for load prediction

use axum::{body::Bytes, extract::State, Json};
use shared::PredictionResult;

use crate::error::AppResult;
use crate::services::PredictionService;
use crate::AppState;

/// Predict the load for the posted conditions.
///
/// The body is read as raw bytes so that any JSON payload is accepted
/// regardless of its `Content-Type`.
pub async fn predict(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<Json<PredictionResult>> {
    let service = PredictionService::new(state.engine.clone());
    let result = service.predict_json(&body).await?;
    Ok(Json(result))
}
