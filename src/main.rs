use std::time::Duration;

use anyhow::Context;
use bookshelf::router::init_router;
use bookshelf::state::init_app_state;
use bookshelf_config::ServerConfig;
use bookshelf_observability::{Metrics, init_tracing};
use dotenvy::dotenv;
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    dotenv().ok();

    let log_guard = init_tracing();

    if let Err(err) = run().await {
        error!(error = ?err, "Server exited with an error");
        // flush the file appender; process::exit skips destructors
        drop(log_guard);
        std::process::exit(1);
    }
}

const METRICS_UPKEEP_INTERVAL: Duration = Duration::from_secs(5);

fn spawn_metrics_upkeep(metrics: Metrics) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(METRICS_UPKEEP_INTERVAL);
        loop {
            interval.tick().await;
            metrics.run_upkeep();
        }
    });
}

async fn run() -> anyhow::Result<()> {
    let state = init_app_state().await?;
    spawn_metrics_upkeep(state.metrics.clone());
    let app = init_router(state);

    let server_config = ServerConfig::from_env();
    let address = server_config.bind_address();

    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;

    info!(%address, "Server running");
    info!("API docs available at http://{address}/docs");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            error!(error = %err, "Failed to install Ctrl+C handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(err) => error!(error = %err, "Failed to install SIGTERM handler"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
