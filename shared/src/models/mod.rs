//! API models for the Load Forecast service

pub mod prediction;
pub mod status;
pub mod weather;

pub use prediction::*;
pub use status::*;
pub use weather::*;
