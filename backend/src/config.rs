//! Configuration management for the Load Forecast service
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (config/development.toml, config/production.toml)
//! 3. Environment variable overrides with LOAD_FORECAST_ prefix

use std::path::PathBuf;
use std::time::Duration;

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Forecasting engine bridge configuration
    #[serde(default)]
    pub engine: EngineConfig,

    /// Live weather configuration
    pub weather: WeatherConfig,

    /// Front-end asset configuration
    pub frontend: FrontendConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct EngineConfig {
    /// Executable that hosts the trained model. The engine stays disabled when unset.
    pub command: Option<String>,

    /// Arguments passed to the engine executable
    #[serde(default)]
    pub args: Vec<String>,

    /// Working directory for the engine process
    pub working_dir: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WeatherConfig {
    /// Open-Meteo forecast endpoint
    pub base_url: String,

    pub latitude: f64,
    pub longitude: f64,

    /// Upstream request timeout in seconds
    pub timeout_secs: u64,

    /// How long a successful reading is served from cache, in seconds
    pub cache_ttl_secs: u64,
}

impl WeatherConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct FrontendConfig {
    /// Directory served under `/static`
    pub static_dir: PathBuf,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("LOAD_FORECAST_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 5000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("weather.base_url", DEFAULT_WEATHER_URL)?
            .set_default("weather.latitude", 28.6139)?
            .set_default("weather.longitude", 77.2090)?
            .set_default("weather.timeout_secs", 10)?
            .set_default("weather.cache_ttl_secs", 60)?
            .set_default("frontend.static_dir", DEFAULT_STATIC_DIR)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (LOAD_FORECAST_ prefix)
            .add_source(
                Environment::with_prefix("LOAD_FORECAST")
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(" ")
                    .with_list_parse_key("engine.args")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

/// Bundled dashboard assets
pub const DEFAULT_STATIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/static");

/// Open-Meteo current-conditions endpoint
pub const DEFAULT_WEATHER_URL: &str = "https://api.open-meteo.com/v1/forecast";

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            server: ServerConfig::default(),
            engine: EngineConfig::default(),
            weather: WeatherConfig::default(),
            frontend: FrontendConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 5000,
            host: "0.0.0.0".to_string(),
        }
    }
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_WEATHER_URL.to_string(),
            latitude: 28.6139,
            longitude: 77.2090,
            timeout_secs: 10,
            cache_ttl_secs: 60,
        }
    }
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
        }
    }
}
