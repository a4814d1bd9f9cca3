//! Validation utilities for prediction requests

use chrono::NaiveDate;
use thiserror::Error;
use validator::{ValidationError, ValidationErrors};

use crate::types::NumericInput;

/// Calendar date format accepted on the wire
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Reasons a request cannot be turned into a feature vector
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NormalizationError {
    #[error("{field} is not a finite number")]
    InvalidNumber { field: &'static str },

    #[error("invalid date {0:?}, expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("feature {index} is not finite")]
    NonFiniteFeature { index: usize },

    #[error("invalid request: {0}")]
    Invalid(String),
}

impl From<ValidationErrors> for NormalizationError {
    fn from(errors: ValidationErrors) -> Self {
        NormalizationError::Invalid(errors.to_string())
    }
}

/// Parse a `YYYY-MM-DD` calendar date. Past, present and future dates are all accepted.
pub fn parse_forecast_date(value: &str) -> Result<NaiveDate, NormalizationError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|_| NormalizationError::InvalidDate(value.to_string()))
}

/// Parse a numeric request field into a finite float
pub fn parse_numeric(
    value: &NumericInput,
    field: &'static str,
) -> Result<f64, NormalizationError> {
    value
        .to_f64()
        .ok_or(NormalizationError::InvalidNumber { field })
}

// ============================================================================
// Field validators (used by `#[derive(Validate)]`)
// ============================================================================

pub fn validate_forecast_date(value: &str) -> Result<(), ValidationError> {
    parse_forecast_date(value)
        .map(|_| ())
        .map_err(|_| ValidationError::new("invalid_date"))
}

pub fn validate_numeric(value: &NumericInput) -> Result<(), ValidationError> {
    match value.to_f64() {
        Some(_) => Ok(()),
        None => Err(ValidationError::new("not_a_number")),
    }
}
