//! External integrations

pub mod engine;
pub mod weather;

pub use engine::{BridgeProcess, EngineClient, LoadModel};
pub use weather::{CurrentConditions, OpenMeteoClient, WeatherSource};
