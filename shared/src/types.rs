//! Common types used across the service

use serde::{Deserialize, Serialize};

/// A numeric request field that may arrive as a JSON number or as a string
/// holding a number (`30` and `"30"` are both accepted).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumericInput {
    Number(f64),
    Text(String),
}

impl NumericInput {
    /// Parse into a finite `f64`, or `None` if the value is not a usable number
    pub fn to_f64(&self) -> Option<f64> {
        let value = match self {
            NumericInput::Number(v) => Some(*v),
            NumericInput::Text(s) => s.trim().parse::<f64>().ok(),
        };
        value.filter(|v| v.is_finite())
    }
}

impl From<f64> for NumericInput {
    fn from(value: f64) -> Self {
        NumericInput::Number(value)
    }
}

impl From<&str> for NumericInput {
    fn from(value: &str) -> Self {
        NumericInput::Text(value.to_string())
    }
}

/// Kind of day the forecast is requested for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayType {
    Weekday,
    Weekend,
    /// Any other label; contributes no day flag
    Other(String),
}

impl DayType {
    pub fn from_label(label: &str) -> Self {
        match label {
            "weekday" => DayType::Weekday,
            "weekend" => DayType::Weekend,
            other => DayType::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            DayType::Weekday => "weekday",
            DayType::Weekend => "weekend",
            DayType::Other(label) => label,
        }
    }
}

impl std::fmt::Display for DayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Season label used by the trained model
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Season {
    Summer,
    Monsoon,
    Winter,
    /// Any other label; contributes no season flag
    Other(String),
}

impl Season {
    pub fn from_label(label: &str) -> Self {
        match label {
            "summer" => Season::Summer,
            "monsoon" => Season::Monsoon,
            "winter" => Season::Winter,
            other => Season::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Season::Summer => "summer",
            Season::Monsoon => "monsoon",
            Season::Winter => "winter",
            Season::Other(label) => label,
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
