//! Prediction request and result models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::features::scale_to_megawatts;
use crate::types::{DayType, NumericInput, Season};
use crate::validation::{
    parse_forecast_date, validate_forecast_date, validate_numeric, NormalizationError,
};

/// Unit reported with every prediction
pub const LOAD_UNIT: &str = "MW";

/// Body of `POST /predict`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PredictionRequest {
    /// Temperature in °C
    #[validate(custom = "validate_numeric")]
    pub temperature: NumericInput,
    /// Relative humidity in %
    #[validate(custom = "validate_numeric")]
    pub humidity: NumericInput,
    /// `weekday` or `weekend`
    pub daytype: String,
    /// `summer`, `monsoon` or `winter`
    pub season: String,
    /// Forecast date, `YYYY-MM-DD`
    #[validate(custom = "validate_forecast_date")]
    pub date: String,
}

impl PredictionRequest {
    pub fn day_type(&self) -> DayType {
        DayType::from_label(&self.daytype)
    }

    pub fn season(&self) -> Season {
        Season::from_label(&self.season)
    }

    pub fn forecast_date(&self) -> Result<NaiveDate, NormalizationError> {
        parse_forecast_date(&self.date)
    }
}

/// Body returned by a successful `POST /predict`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub predicted_load: f64,
    pub unit: String,
}

impl PredictionResult {
    /// Build a result from the engine's raw output
    pub fn from_raw_output(raw: f64) -> Self {
        Self {
            predicted_load: scale_to_megawatts(raw),
            unit: LOAD_UNIT.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_deserializes_mixed_numeric_forms() {
        let request: PredictionRequest = serde_json::from_str(
            r#"{"temperature": "31.5", "humidity": 40, "daytype": "weekend",
                "season": "winter", "date": "2025-01-04"}"#,
        )
        .unwrap();

        assert!(request.validate().is_ok());
        assert_eq!(request.temperature.to_f64(), Some(31.5));
        assert_eq!(request.day_type(), DayType::Weekend);
        assert_eq!(request.season(), Season::Winter);
    }

    #[test]
    fn test_request_missing_field_fails_to_deserialize() {
        let result: Result<PredictionRequest, _> = serde_json::from_str(
            r#"{"temperature": 30, "humidity": 40, "daytype": "weekday", "season": "summer"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_flags_bad_fields() {
        let request = PredictionRequest {
            temperature: NumericInput::from("n/a"),
            humidity: NumericInput::from(40.0),
            daytype: "weekday".into(),
            season: "summer".into(),
            date: "2024-02-30".into(),
        };

        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("temperature"));
        assert!(fields.contains_key("date"));
        assert!(!fields.contains_key("humidity"));
    }

    #[test]
    fn test_result_serialization() {
        let result = PredictionResult::from_raw_output(0.15);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["predicted_load"], 6500.0);
        assert_eq!(json["unit"], "MW");
    }
}
