//! Feature encoding for the forecasting engine and scaling of its output
//!
//! The engine was trained on a fixed 10-element input layout and emits a
//! unitless scalar. Both the input encoding and the output calibration below
//! must match that training run exactly.

use chrono::Datelike;
use serde::Serialize;
use validator::Validate;

use crate::models::PredictionRequest;
use crate::types::{DayType, Season};
use crate::validation::{parse_numeric, NormalizationError};

/// Number of inputs the engine expects
pub const FEATURE_COUNT: usize = 10;

/// Base load added to the scaled engine output (MW)
pub const BASE_LOAD_MW: f64 = 3500.0;
/// Multiplier applied to the raw engine output (MW)
pub const OUTPUT_SCALE_MW: f64 = 20000.0;
/// Lower clamp bound (MW)
pub const MIN_LOAD_MW: f64 = 3000.0;
/// Upper clamp bound (MW)
pub const MAX_LOAD_MW: f64 = 9000.0;

/// Input vector in the engine's trained order:
///
/// `[day/10, month/20, temp/50, humidity/100, weekend, weekday, summer, monsoon, winter, 1]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeatureVector([f64; FEATURE_COUNT]);

impl FeatureVector {
    pub fn values(&self) -> &[f64; FEATURE_COUNT] {
        &self.0
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

impl TryFrom<[f64; FEATURE_COUNT]> for FeatureVector {
    type Error = NormalizationError;

    fn try_from(values: [f64; FEATURE_COUNT]) -> Result<Self, Self::Error> {
        if let Some(index) = values.iter().position(|v| !v.is_finite()) {
            return Err(NormalizationError::NonFiniteFeature { index });
        }
        Ok(Self(values))
    }
}

fn flag(set: bool) -> f64 {
    if set {
        1.0
    } else {
        0.0
    }
}

/// Encode a request into the engine's input vector.
///
/// Unknown `daytype` / `season` labels are not an error; they simply leave
/// the corresponding flags at 0.
pub fn normalize(request: &PredictionRequest) -> Result<FeatureVector, NormalizationError> {
    request.validate()?;

    let temperature = parse_numeric(&request.temperature, "temperature")?;
    let humidity = parse_numeric(&request.humidity, "humidity")?;
    let date = request.forecast_date()?;

    let day_type = request.day_type();
    let season = request.season();

    FeatureVector::try_from([
        f64::from(date.day()) / 10.0,
        f64::from(date.month()) / 20.0,
        temperature / 50.0,
        humidity / 100.0,
        flag(day_type == DayType::Weekend),
        flag(day_type == DayType::Weekday),
        flag(season == Season::Summer),
        flag(season == Season::Monsoon),
        flag(season == Season::Winter),
        1.0,
    ])
}

/// Round to 2 decimal places, ties to even
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// Convert the engine's raw output to megawatts, clamped to the plausible range
pub fn scale_to_megawatts(raw: f64) -> f64 {
    let mw = BASE_LOAD_MW + raw * OUTPUT_SCALE_MW;
    round2(mw.clamp(MIN_LOAD_MW, MAX_LOAD_MW))
}
