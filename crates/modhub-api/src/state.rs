//! Application state shared across all handlers.

use std::sync::Arc;
use std::time::Instant;

use modhub_core::config::AppConfig;
use modhub_registry::ModuleRegistry;

use crate::url::UrlBuilder;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped or `Copy` for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Module registry, held for the process lifetime
    pub registry: Arc<ModuleRegistry>,
    /// Module URL builder rooted at `server.base_url`
    pub urls: Arc<UrlBuilder>,
    /// Process start, for uptime reporting
    pub started_at: Instant,
}

impl AppState {
    /// Creates the state from a loaded configuration and a built registry.
    pub fn new(config: AppConfig, registry: Arc<ModuleRegistry>) -> Self {
        let urls = Arc::new(UrlBuilder::new(config.server.base_url.clone()));
        Self {
            config: Arc::new(config),
            registry,
            urls,
            started_at: Instant::now(),
        }
    }
}
