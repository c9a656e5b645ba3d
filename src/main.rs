//! Textbook Preload - local preloader service
//!
//! Warms the textbook's common resources at startup and exposes the preload
//! cache over a small HTTP surface.

use std::net::SocketAddr;

use anyhow::Context;
use tokio::signal;
use tokio::task::JoinHandle;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use textbook_preload::api::create_router;
use textbook_preload::{spawn_startup_preloads, spawn_sweep_task, ApiClient, AppState, Config};

/// Main entry point for the preloader service.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Create the preloader and its HTTP fetcher
/// 4. Probe backend health and spawn startup preloads
/// 5. Start the stale sweep task (unless disabled)
/// 6. Serve the HTTP surface on the configured port
/// 7. Handle graceful shutdown on SIGINT/SIGTERM
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "textbook_preload=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting textbook preloader");

    let config = Config::from_env();
    info!(
        "Configuration loaded: api_url={}, preload_base_url={}, freshness_window={}ms, port={}, sweep_interval={}s",
        config.api_url,
        config.preload_base_url,
        config.freshness_window_ms,
        config.server_port,
        config.sweep_interval
    );

    let state = AppState::from_config(&config).context("failed to build preloader")?;

    let client = ApiClient::new(config.api_url.clone()).context("failed to build API client")?;
    if client.health_check().await {
        info!("Backend at {} is healthy", client.base_url());
    } else {
        warn!("Backend at {} is not reachable, preloads may fail", client.base_url());
    }

    let mut handles = vec![spawn_startup_preloads(state.preloader.clone())];
    if config.sweep_interval > 0 {
        handles.push(spawn_sweep_task(
            state.preloader.clone(),
            config.sweep_interval,
        ));
    }
    info!("Background tasks started");

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(handles))
        .await
        .context("server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM), then aborts background tasks.
async fn shutdown_signal(handles: Vec<JoinHandle<()>>) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {}", e);
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
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }

    for handle in handles {
        handle.abort();
    }
    warn!("Background tasks aborted");
}
