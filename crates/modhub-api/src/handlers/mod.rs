//! HTTP request handlers.

pub mod fallback;
pub mod health;
pub mod modules;
pub mod resolve;
