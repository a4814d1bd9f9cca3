//! Live weather service with a single-slot, time-bounded cache
//!
//! Only one location is ever queried, so the cache holds exactly one entry.
//! A failed refresh leaves the slot untouched and is reported to the caller;
//! stale readings are never served.

use std::sync::Arc;
use std::time::Duration;

use chrono::Local;
use shared::{round2, LiveWeather};
use tokio::sync::Mutex;
use tokio::time::Instant;

use crate::error::AppResult;
use crate::external::weather::WeatherSource;

/// Last successful reading and when it was fetched
#[derive(Debug, Clone)]
pub struct WeatherCacheEntry {
    pub reading: LiveWeather,
    pub fetched_at: Instant,
}

impl WeatherCacheEntry {
    pub fn is_fresh(&self, ttl: Duration, now: Instant) -> bool {
        now.saturating_duration_since(self.fetched_at) < ttl
    }
}

/// Serves current weather, refreshing from upstream at most once per TTL
pub struct LiveWeatherService {
    source: Arc<dyn WeatherSource>,
    ttl: Duration,
    slot: Mutex<Option<WeatherCacheEntry>>,
}

impl LiveWeatherService {
    pub fn new(source: Arc<dyn WeatherSource>, ttl: Duration) -> Self {
        Self {
            source,
            ttl,
            slot: Mutex::new(None),
        }
    }

    /// Current reading, from cache when fresh, otherwise from upstream
    pub async fn current(&self) -> AppResult<LiveWeather> {
        // Held across the fetch so concurrent stale checks wait for one refresh
        let mut slot = self.slot.lock().await;
        let now = Instant::now();

        if let Some(entry) = slot.as_ref().filter(|e| e.is_fresh(self.ttl, now)) {
            tracing::debug!("Serving cached weather reading");
            return Ok(entry.reading.clone());
        }

        let conditions = self.source.fetch_current().await?;
        let reading = LiveWeather {
            temperature: round2(conditions.temperature_celsius),
            humidity: round2(conditions.humidity_percent),
            timestamp: Local::now().format("%H:%M:%S").to_string(),
        };

        tracing::debug!(
            temperature = reading.temperature,
            humidity = reading.humidity,
            "Weather reading refreshed"
        );

        *slot = Some(WeatherCacheEntry {
            reading: reading.clone(),
            fetched_at: now,
        });

        Ok(reading)
    }

    /// Snapshot of the cache slot
    pub async fn cached(&self) -> Option<WeatherCacheEntry> {
        self.slot.lock().await.clone()
    }
}
