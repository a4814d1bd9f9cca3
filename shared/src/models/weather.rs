//! Live weather models

use serde::{Deserialize, Serialize};

/// Current conditions as returned by `GET /live-weather`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiveWeather {
    /// Temperature in °C, 2 decimals
    pub temperature: f64,
    /// Relative humidity in %, 2 decimals
    pub humidity: f64,
    /// Local wall-clock time of the upstream fetch, `HH:MM:SS`
    pub timestamp: String,
}
