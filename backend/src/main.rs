//! Load Forecast - Backend Server
//!
//! Serves load predictions from an external forecasting engine, live
//! weather for the dashboard, and the dashboard itself.

use std::{net::SocketAddr, sync::Arc};

use load_forecast_backend::{
    config::Config,
    create_app,
    external::{EngineClient, OpenMeteoClient},
    services::LiveWeatherService,
    AppState,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "load_forecast_server=debug,load_forecast_backend=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    tracing::info!("Starting Load Forecast Server");
    tracing::info!("Environment: {}", config.environment);

    // Start the forecasting engine once; a failure leaves predictions disabled
    let engine_config = config.engine.clone();
    let engine = tokio::task::spawn_blocking(move || EngineClient::start(&engine_config)).await?;
    if !engine.is_available() {
        tracing::warn!("Prediction endpoint will report the engine as not running");
    }

    let weather_client = OpenMeteoClient::new(&config.weather)?;
    let weather = LiveWeatherService::new(Arc::new(weather_client), config.weather.cache_ttl());

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;

    // Create application state
    let state = AppState {
        config: Arc::new(config),
        engine,
        weather: Arc::new(weather),
    };

    // Build application
    let app = create_app(state);

    // Start server
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
