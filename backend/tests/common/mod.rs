//! Test doubles for the engine and the weather upstream

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use load_forecast_backend::{
    config::Config,
    error::{AppError, AppResult},
    external::{CurrentConditions, EngineClient, LoadModel, WeatherSource},
    services::LiveWeatherService,
    AppState,
};
use shared::FeatureVector;

/// Model that returns a fixed output and records every input it sees
pub struct RecordingModel {
    output: f64,
    pub seen: Mutex<Vec<FeatureVector>>,
}

impl RecordingModel {
    pub fn new(output: f64) -> Arc<Self> {
        Arc::new(Self {
            output,
            seen: Mutex::new(Vec::new()),
        })
    }
}

impl LoadModel for RecordingModel {
    fn predict(&self, features: &FeatureVector) -> anyhow::Result<f64> {
        self.seen.lock().unwrap().push(*features);
        Ok(self.output)
    }
}

/// Model whose every call fails
pub struct BrokenModel;

impl LoadModel for BrokenModel {
    fn predict(&self, _features: &FeatureVector) -> anyhow::Result<f64> {
        anyhow::bail!("Error using predict_load: network object not found")
    }
}

/// Outcome returned by [`ScriptedWeather`] for one fetch
pub enum Upstream {
    Ok(f64, f64),
    Down,
    Garbled,
}

/// Weather source that replays a script of outcomes and counts fetches.
/// Once the script is exhausted the last outcome repeats.
pub struct ScriptedWeather {
    script: Mutex<VecDeque<Upstream>>,
    last: Mutex<Option<Upstream>>,
    delay: Duration,
    calls: AtomicUsize,
}

impl ScriptedWeather {
    pub fn new(script: Vec<Upstream>) -> Arc<Self> {
        Self::with_delay(script, Duration::ZERO)
    }

    pub fn with_delay(script: Vec<Upstream>, delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            script: Mutex::new(script.into()),
            last: Mutex::new(None),
            delay,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn next_outcome(&self) -> AppResult<CurrentConditions> {
        let mut last = self.last.lock().unwrap();
        if let Some(next) = self.script.lock().unwrap().pop_front() {
            *last = Some(next);
        }

        match last.as_ref() {
            Some(Upstream::Ok(t, h)) => Ok(CurrentConditions {
                temperature_celsius: *t,
                humidity_percent: *h,
            }),
            Some(Upstream::Garbled) => Err(AppError::WeatherResponseInvalid(
                "missing `current.temperature_2m`".into(),
            )),
            Some(Upstream::Down) | None => {
                Err(AppError::WeatherUnavailable("connection refused".into()))
            }
        }
    }
}

#[async_trait]
impl WeatherSource for ScriptedWeather {
    async fn fetch_current(&self) -> AppResult<CurrentConditions> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.next_outcome()
    }
}

pub fn weather_service(source: Arc<ScriptedWeather>) -> LiveWeatherService {
    LiveWeatherService::new(source, Duration::from_secs(60))
}

pub fn app_state(engine: EngineClient, weather: Arc<ScriptedWeather>) -> AppState {
    AppState {
        config: Arc::new(Config::default()),
        engine,
        weather: Arc::new(weather_service(weather)),
    }
}
