//! Forecasting engine client
//!
//! The trained load model lives outside this process. The service only needs
//! one operation from it, `predict(features) -> scalar`, captured by
//! [`LoadModel`]. The bundled implementation, [`BridgeProcess`], drives a
//! long-lived child process over a line protocol:
//!
//! - on startup the child writes one line (e.g. `ready`) once the model is loaded
//! - each request is one line of 10 space-separated decimal features
//! - each reply is one line holding a single decimal number

use std::io::{BufRead, BufReader, Write};
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};
use std::sync::{Arc, Mutex};

use anyhow::{anyhow, bail, Context};
use shared::FeatureVector;

use crate::config::EngineConfig;
use crate::error::{AppError, AppResult};

/// A loaded forecasting model. Calls block until the model answers.
pub trait LoadModel: Send + Sync {
    fn predict(&self, features: &FeatureVector) -> anyhow::Result<f64>;
}

/// Process-wide handle to the forecasting engine.
///
/// Initialization is attempted once. A client that failed to start stays
/// disabled for the life of the process.
#[derive(Clone)]
pub struct EngineClient {
    model: Option<Arc<dyn LoadModel>>,
}

impl EngineClient {
    /// Start the configured engine bridge, or return a disabled client if it cannot start
    pub fn start(config: &EngineConfig) -> Self {
        match BridgeProcess::spawn(config) {
            Ok(bridge) => {
                tracing::info!("Forecasting engine started");
                Self::with_model(Arc::new(bridge))
            }
            Err(e) => {
                tracing::error!("Forecasting engine failed to start: {:#}", e);
                Self::disabled()
            }
        }
    }

    pub fn with_model(model: Arc<dyn LoadModel>) -> Self {
        Self { model: Some(model) }
    }

    pub fn disabled() -> Self {
        Self { model: None }
    }

    pub fn is_available(&self) -> bool {
        self.model.is_some()
    }

    /// Run one prediction on the blocking pool.
    ///
    /// Engine errors are logged by the caller's error path and reduced to
    /// [`AppError::PredictionFailed`].
    pub async fn predict(&self, features: FeatureVector) -> AppResult<f64> {
        let model = self.model.clone().ok_or(AppError::EngineUnavailable)?;

        let raw = tokio::task::spawn_blocking(move || model.predict(&features))
            .await
            .map_err(|e| AppError::PredictionFailed(format!("engine task aborted: {}", e)))?
            .map_err(|e| AppError::PredictionFailed(format!("{:#}", e)))?;

        if !raw.is_finite() {
            return Err(AppError::PredictionFailed(format!(
                "engine returned non-finite output {}",
                raw
            )));
        }

        Ok(raw)
    }
}

/// Child process hosting the trained model
pub struct BridgeProcess {
    inner: Mutex<BridgeIo>,
}

struct BridgeIo {
    child: Child,
    stdin: ChildStdin,
    stdout: BufReader<ChildStdout>,
}

impl BridgeProcess {
    /// Spawn the engine process and wait for its readiness line
    pub fn spawn(config: &EngineConfig) -> anyhow::Result<Self> {
        let program = config
            .command
            .as_deref()
            .filter(|c| !c.trim().is_empty())
            .ok_or_else(|| anyhow!("no engine command configured"))?;

        let mut command = Command::new(program);
        command
            .args(&config.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit());
        if let Some(dir) = &config.working_dir {
            command.current_dir(dir);
        }

        tracing::info!(command = %program, args = ?config.args, "Starting forecasting engine");
        let mut child = command
            .spawn()
            .with_context(|| format!("failed to spawn engine command {:?}", program))?;

        let (stdin, stdout) = match (child.stdin.take(), child.stdout.take()) {
            (Some(stdin), Some(stdout)) => (stdin, stdout),
            _ => {
                let _ = child.kill();
                bail!("engine stdio was not captured");
            }
        };
        let mut stdout = BufReader::new(stdout);

        let mut banner = String::new();
        let read = stdout.read_line(&mut banner);
        if !matches!(read, Ok(n) if n > 0) {
            let _ = child.kill();
            let _ = child.wait();
            bail!("engine exited before signalling readiness");
        }
        tracing::debug!(banner = %banner.trim(), "Engine ready");

        Ok(Self {
            inner: Mutex::new(BridgeIo {
                child,
                stdin,
                stdout,
            }),
        })
    }
}

impl LoadModel for BridgeProcess {
    fn predict(&self, features: &FeatureVector) -> anyhow::Result<f64> {
        // One request in flight at a time; the child answers strictly in order
        let mut io = self
            .inner
            .lock()
            .map_err(|_| anyhow!("engine lock poisoned"))?;
        let BridgeIo { stdin, stdout, .. } = &mut *io;
        exchange(stdout, stdin, features)
    }
}

impl Drop for BridgeProcess {
    fn drop(&mut self) {
        if let Ok(io) = self.inner.get_mut() {
            if io.child.kill().is_ok() {
                let _ = io.child.wait();
                tracing::info!("Forecasting engine stopped");
            }
        }
    }
}

/// Encode a feature vector as one protocol line
pub fn encode_features(features: &FeatureVector) -> String {
    let mut line = features
        .as_slice()
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    line.push('\n');
    line
}

/// Parse one protocol reply line
pub fn parse_output(line: &str) -> anyhow::Result<f64> {
    let trimmed = line.trim();
    trimmed
        .parse::<f64>()
        .with_context(|| format!("engine replied with non-numeric output {:?}", trimmed))
}

fn exchange<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    features: &FeatureVector,
) -> anyhow::Result<f64> {
    writer
        .write_all(encode_features(features).as_bytes())
        .context("failed to send features to engine")?;
    writer.flush().context("failed to send features to engine")?;

    let mut reply = String::new();
    let n = reader
        .read_line(&mut reply)
        .context("failed to read engine reply")?;
    if n == 0 {
        bail!("engine closed its output");
    }
    parse_output(&reply)
}
