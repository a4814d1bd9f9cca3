//! HTTP handlers

pub mod health;
pub mod home;
pub mod live;
pub mod prediction;

pub use health::health_check;
pub use home::index;
pub use live::{live_load, live_weather};
pub use prediction::predict;
