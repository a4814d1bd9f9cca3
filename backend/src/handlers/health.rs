//! Health check handlers

use axum::Json;
use chrono::Local;
use shared::HealthStatus;

/// Health check endpoint handler. Reports healthy regardless of engine or weather state.
pub async fn health_check() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "OK".to_string(),
        backend: "axum".to_string(),
        model: "ANN (external engine)".to_string(),
        time: Local::now().naive_local().format("%Y-%m-%dT%H:%M:%S%.6f").to_string(),
    })
}
