//! Error handling for the Load Forecast service
//!
//! Every failure is rendered as `{"error": "<message>"}`. The message is a
//! fixed, caller-safe string per error kind; the detail carried by the
//! variant is only written to the server log.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use shared::NormalizationError;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Prediction errors
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Prediction engine unavailable")]
    EngineUnavailable,

    #[error("Prediction failed: {0}")]
    PredictionFailed(String),

    // Weather errors
    #[error("Weather API request failed: {0}")]
    WeatherUnavailable(String),

    #[error("Weather API response invalid: {0}")]
    WeatherResponseInvalid(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Error response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl AppError {
    /// HTTP status and caller-facing message for this error
    pub fn status_and_message(&self) -> (StatusCode, &'static str) {
        match self {
            // Validation failures are reported exactly like engine failures
            AppError::Validation(_) | AppError::PredictionFailed(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Prediction failed")
            }
            AppError::EngineUnavailable => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Prediction engine not running",
            ),
            AppError::WeatherUnavailable(_) => {
                (StatusCode::BAD_GATEWAY, "Weather API request failed")
            }
            AppError::WeatherResponseInvalid(_) => {
                (StatusCode::BAD_GATEWAY, "Weather API response invalid")
            }
            AppError::Configuration(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Configuration error")
            }
        }
    }
}

impl From<NormalizationError> for AppError {
    fn from(err: NormalizationError) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();

        // Log the error for debugging
        tracing::error!("Error: {:?}", self);

        (
            status,
            Json(ErrorResponse {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;
