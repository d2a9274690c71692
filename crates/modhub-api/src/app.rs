//! Application builder — wires router and state into an Axum app and serves it.

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tracing::info;

use modhub_core::config::AppConfig;
use modhub_core::error::{AppError, ErrorKind};
use modhub_registry::ModuleRegistry;

use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application.
pub fn build_app(config: AppConfig, registry: Arc<ModuleRegistry>) -> Router {
    build_router(AppState::new(config, registry))
}

/// Runs the ModHub server until Ctrl+C or SIGTERM.
pub async fn run_server(config: AppConfig, registry: Arc<ModuleRegistry>) -> Result<(), AppError> {
    let address = config.server.bind_address();
    let modules = registry.list_modules()?;
    info!(
        root = %config.modules.root.display(),
        modules = modules.len(),
        "Module registry ready"
    );

    let app = build_app(config, registry);
    let listener = TcpListener::bind(&address)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Internal, format!("Failed to bind {address}"), e)
        })?;

    info!(address = %address, "ModHub server listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    info!("ModHub server stopped");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("Shutdown signal received, starting graceful shutdown...");
}
