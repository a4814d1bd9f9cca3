//! Weather API client for fetching current conditions
//!
//! Integrates with the Open-Meteo forecast API (no API key) for the
//! temperature and relative humidity at one fixed location.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use crate::config::WeatherConfig;
use crate::error::{AppError, AppResult};

/// Fields requested from the `current` block
const CURRENT_FIELDS: &str = "temperature_2m,relative_humidity_2m";

/// Current conditions at the configured location
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurrentConditions {
    pub temperature_celsius: f64,
    pub humidity_percent: f64,
}

/// Upstream source of current conditions
#[async_trait]
pub trait WeatherSource: Send + Sync {
    async fn fetch_current(&self) -> AppResult<CurrentConditions>;
}

/// Open-Meteo API client
#[derive(Clone)]
pub struct OpenMeteoClient {
    client: Client,
    base_url: String,
    latitude: f64,
    longitude: f64,
}

impl OpenMeteoClient {
    /// Create a new client from configuration
    pub fn new(config: &WeatherConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            latitude: config.latitude,
            longitude: config.longitude,
        })
    }
}

#[async_trait]
impl WeatherSource for OpenMeteoClient {
    async fn fetch_current(&self) -> AppResult<CurrentConditions> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("latitude", self.latitude.to_string()),
                ("longitude", self.longitude.to_string()),
                ("current", CURRENT_FIELDS.to_string()),
            ])
            .send()
            .await
            .map_err(|e| AppError::WeatherUnavailable(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::WeatherUnavailable(format!(
                "API returned {}",
                response.status()
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| AppError::WeatherUnavailable(format!("Failed to read body: {}", e)))?;

        // An undecodable body counts as a failed request; a decodable one with the
        // wrong shape is an invalid response
        let json: Value = serde_json::from_str(&body)
            .map_err(|e| AppError::WeatherUnavailable(format!("Body is not JSON: {}", e)))?;

        parse_current(&json).map_err(AppError::WeatherResponseInvalid)
    }
}

/// Extract current conditions from an Open-Meteo response body
pub fn parse_current(body: &Value) -> Result<CurrentConditions, String> {
    let current = body
        .get("current")
        .filter(|v| v.is_object())
        .ok_or_else(|| "missing `current` object".to_string())?;

    Ok(CurrentConditions {
        temperature_celsius: number_field(current, "temperature_2m")?,
        humidity_percent: number_field(current, "relative_humidity_2m")?,
    })
}

fn number_field(current: &Value, key: &str) -> Result<f64, String> {
    let value = match current.get(key) {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        Some(_) => None,
        None => return Err(format!("missing `current.{}`", key)),
    };

    value
        .filter(|v| v.is_finite())
        .ok_or_else(|| format!("`current.{}` is not a number", key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_current() {
        let body = json!({
            "latitude": 28.625,
            "longitude": 77.25,
            "current_units": {"temperature_2m": "°C", "relative_humidity_2m": "%"},
            "current": {"time": "2024-06-15T12:00", "interval": 900,
                        "temperature_2m": 38.4, "relative_humidity_2m": 27}
        });

        assert_eq!(
            parse_current(&body).unwrap(),
            CurrentConditions {
                temperature_celsius: 38.4,
                humidity_percent: 27.0
            }
        );
    }

    #[test]
    fn test_parse_current_accepts_numeric_strings() {
        let body = json!({"current": {"temperature_2m": "21.5", "relative_humidity_2m": "80"}});
        let parsed = parse_current(&body).unwrap();
        assert_eq!(parsed.temperature_celsius, 21.5);
        assert_eq!(parsed.humidity_percent, 80.0);
    }

    #[test]
    fn test_parse_current_rejects_bad_shapes() {
        let cases = [
            json!({}),
            json!({"current": null}),
            json!({"current": [1, 2]}),
            json!({"current": {"temperature_2m": 30.0}}),
            json!({"current": {"temperature_2m": null, "relative_humidity_2m": 50}}),
            json!({"current": {"temperature_2m": "hot", "relative_humidity_2m": 50}}),
            json!({"current": {"temperature_2m": 30.0, "relative_humidity_2m": {"v": 50}}}),
        ];

        for body in cases {
            assert!(parse_current(&body).is_err(), "{body} should be rejected");
        }
    }
}
