//! # modhub-core
//!
//! Core crate for ModHub. Contains the unified error system, configuration
//! schemas, the capability/component model, and the collaborator traits
//! (filesystem, enablement source, component space) that the registry is
//! built against.
//!
//! This crate has **no** internal dependencies on other ModHub crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;

pub use error::{AppError, ErrorKind};
pub use result::AppResult;
