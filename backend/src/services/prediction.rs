//! Prediction service: request decoding, feature encoding, engine call, scaling

use shared::{normalize, PredictionRequest, PredictionResult};

use crate::error::{AppError, AppResult};
use crate::external::EngineClient;

/// Prediction service wrapping the forecasting engine
#[derive(Clone)]
pub struct PredictionService {
    engine: EngineClient,
}

impl PredictionService {
    pub fn new(engine: EngineClient) -> Self {
        Self { engine }
    }

    /// Decode a raw JSON body and predict.
    ///
    /// The engine is checked before the body is looked at, so a disabled
    /// engine is reported as such even for malformed requests.
    pub async fn predict_json(&self, body: &[u8]) -> AppResult<PredictionResult> {
        if !self.engine.is_available() {
            return Err(AppError::EngineUnavailable);
        }

        let request: PredictionRequest = serde_json::from_slice(body)
            .map_err(|e| AppError::Validation(format!("Invalid request body: {}", e)))?;

        self.predict(&request).await
    }

    /// Predict the load for a decoded request
    pub async fn predict(&self, request: &PredictionRequest) -> AppResult<PredictionResult> {
        let features = normalize(request)?;
        let raw = self.engine.predict(features).await?;
        let result = PredictionResult::from_raw_output(raw);

        tracing::info!(
            date = %request.date,
            daytype = %request.day_type(),
            season = %request.season(),
            raw_output = raw,
            predicted_load = result.predicted_load,
            "Prediction completed"
        );

        Ok(result)
    }
}
