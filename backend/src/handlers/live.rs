//! HTTP handlers for the live dashboard feeds

use axum::{extract::State, Json};
use chrono::Local;
use shared::{LiveLoad, LiveWeather};

use crate::error::AppResult;
use crate::services::load::sample_live_load;
use crate::AppState;

/// Synthetic live load reading
pub async fn live_load() -> Json<LiveLoad> {
    let load_mw = sample_live_load(&mut rand::thread_rng());

    Json(LiveLoad {
        load_mw,
        time: Local::now().format("%H:%M:%S").to_string(),
    })
}

/// Current weather at the configured location
pub async fn live_weather(State(state): State<AppState>) -> AppResult<Json<LiveWeather>> {
    let reading = state.weather.current().await?;
    Ok(Json(reading))
}
