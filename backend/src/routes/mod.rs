//! Route definitions for the Load Forecast service

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check (always 200)
        .route("/health", get(handlers::health_check))
        // Load forecasting
        .route("/predict", post(handlers::predict))
        // Dashboard feeds
        .route("/live-load", get(handlers::live_load))
        .route("/live-weather", get(handlers::live_weather))
}
