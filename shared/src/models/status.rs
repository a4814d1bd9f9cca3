//! Health and live-load models

use serde::{Deserialize, Serialize};

/// Body of `GET /health`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub backend: String,
    pub model: String,
    pub time: String,
}

/// Body of `GET /live-load`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LiveLoad {
    pub load_mw: i64,
    /// Local wall-clock time, `HH:MM:SS`
    pub time: String,
}
