//! ModHub Server — module registry over HTTP.
//!
//! Main entry point that loads configuration, builds the module registry,
//! and starts the API server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use modhub_core::config::AppConfig;
use modhub_core::error::AppError;
use modhub_registry::{CallableTable, ComponentCatalog, ModuleRegistry};

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!(error = %e, "Server error");
        std::process::exit(1);
    }
}

/// Load configuration from `MODHUB_CONFIG`, or from `config/` for `MODHUB_ENV`
fn load_configuration() -> Result<AppConfig, AppError> {
    match std::env::var("MODHUB_CONFIG") {
        Ok(path) => AppConfig::load_file(path),
        Err(_) => {
            let env = std::env::var("MODHUB_ENV").unwrap_or_else(|_| "development".to_string());
            AppConfig::load(&env)
        }
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Build the registry and serve the API
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting ModHub v{}", env!("CARGO_PKG_VERSION"));

    // Components and hook callables are registered by the embedding host;
    // the standalone server only exposes discovery, enablement, and hooks.
    let registry = Arc::new(ModuleRegistry::from_config(
        &config.modules,
        Arc::new(ComponentCatalog::new()),
        Arc::new(CallableTable::new()),
    ));

    modhub_api::run_server(config, registry).await
}
