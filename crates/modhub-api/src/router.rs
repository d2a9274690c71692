//! Route definitions for the ModHub HTTP API.
//!
//! All routes are mounted under `/api`. Requests to an `/api/...` path with
//! a trailing `/` are permanently redirected to the slash-less route.

use axum::{Router, middleware as axum_middleware, routing::get};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(health_routes())
        .merge(module_routes())
        .merge(resolve_routes());

    Router::new()
        .nest("/api", api_routes)
        .fallback(handlers::fallback::fallback)
        .layer(TraceLayer::new_for_http())
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Health endpoint
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}

/// Module listing, status, and hooks
fn module_routes() -> Router<AppState> {
    Router::new()
        .route("/modules", get(handlers::modules::list_modules))
        .route("/modules/{name}", get(handlers::modules::get_module))
        .route("/modules/{name}/hooks", get(handlers::modules::module_hooks))
}

/// Identifier resolution
fn resolve_routes() -> Router<AppState> {
    Router::new().route("/resolve", get(handlers::resolve::resolve))
}
