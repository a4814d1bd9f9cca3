//! Business logic services for the Load Forecast service

pub mod load;
pub mod prediction;
pub mod weather;

pub use prediction::PredictionService;
pub use weather::{LiveWeatherService, WeatherCacheEntry};
