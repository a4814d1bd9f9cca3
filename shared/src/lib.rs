//! Shared types and models for the Load Forecast service
//!
//! This crate contains the request/response models exchanged over the HTTP
//! API together with the pure feature-encoding and output-scaling rules that
//! sit in front of the forecasting engine.

pub mod features;
pub mod models;
pub mod types;
pub mod validation;

pub use features::*;
pub use models::*;
pub use types::*;
pub use validation::*;
