//! climate-api - A read-only JSON API over climate observations
//!
//! This is the main entry point for the climate-api application.

use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info};

use climate_api::handlers::heartbeat;
use climate_api::{init_tracing, router, AppState, ClimateError, Config, Result};

fn main() -> Result<()> {
    heartbeat::mark_start();

    // Load configuration
    let config = Config::load()?;

    let mut runtime = tokio::runtime::Builder::new_multi_thread();
    runtime.enable_all();
    if let Some(workers) = config.server.workers {
        runtime.worker_threads(workers);
    }
    let runtime = runtime.build()?;

    runtime.block_on(serve(config))
}

async fn serve(config: Config) -> Result<()> {
    init_tracing(&config.log_level);

    info!("Starting climate-api v{}", env!("CARGO_PKG_VERSION"));

    // Validate configuration
    config.validate().map_err(|e| {
        error!("Invalid configuration: {}", e);
        e
    })?;

    info!("Opening climate store: {:?}", config.database.path);

    // Connect to the store and create application state
    let app_state = AppState::connect(config.clone()).await.map_err(|e| {
        error!("Failed to open climate store: {}", e);
        e
    })?;

    // Validate the store contents
    let counts = app_state.validate().await.map_err(|e| {
        error!("Climate store is not usable: {}", e);
        e
    })?;

    info!("Found {} stations", counts.stations);
    info!("Found {} measurements", counts.measurements);

    let state = Arc::new(app_state);
    let app = router(state.clone());

    // Create the server address
    let addr = SocketAddr::from((
        config
            .server
            .host
            .parse::<std::net::IpAddr>()
            .map_err(|e| ClimateError::Config {
                message: format!("Invalid host address: {}", e),
            })?,
        config.server.port,
    ));

    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| ClimateError::Server {
            message: format!("Failed to bind to address: {}", e),
        })?;

    info!("Server is ready to accept connections");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ClimateError::Server {
            message: format!("Server error: {}", e),
        })?;

    state.store.close().await;

    info!("Server has been gracefully shut down");
    Ok(())
}

/// Wait for a shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown");
        },
        _ = terminate => {
            info!("Received SIGTERM, starting graceful shutdown");
        },
    }
}
