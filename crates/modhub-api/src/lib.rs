//! # modhub-api
//!
//! HTTP API layer for ModHub built on Axum.
//!
//! Exposes module status, hook listings, and identifier resolution over
//! REST, maps registry errors to HTTP responses, and provides the module
//! URL builder and trailing-slash redirect helper.

pub mod app;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod redirect;
pub mod router;
pub mod state;
pub mod url;

pub use app::{build_app, run_server};
pub use error::ApiError;
pub use state::AppState;
pub use url::UrlBuilder;
