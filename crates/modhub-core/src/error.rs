//! Unified application error types for ModHub.
//!
//! Every registry operation reports failure through [`AppError`]. The
//! [`ErrorKind`] tells callers (HTTP, CLI) how to present the failure
//! without parsing messages.

use std::fmt;
use thiserror::Error;

/// Error kind categorization used across the entire workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// The module root or a hooks directory could not be read.
    Filesystem,
    /// A configuration value is present but malformed.
    Configuration,
    /// Unknown module, unknown component, or a qualified name that does not exist.
    NotFound,
    /// The module exists but is not enabled.
    ModuleDisabled,
    /// A component does not satisfy the requested capability.
    CapabilityMismatch,
    /// A registered hook does not resolve to an invocable target.
    HookInvalid,
    /// A duplicate registration was attempted.
    Conflict,
    /// The external configuration provider failed.
    Provider,
    /// A serialization/deserialization error occurred.
    Serialization,
    /// An internal error occurred.
    Internal,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Filesystem => write!(f, "FILESYSTEM"),
            Self::Configuration => write!(f, "CONFIGURATION"),
            Self::NotFound => write!(f, "NOT_FOUND"),
            Self::ModuleDisabled => write!(f, "MODULE_DISABLED"),
            Self::CapabilityMismatch => write!(f, "CAPABILITY_MISMATCH"),
            Self::HookInvalid => write!(f, "HOOK_INVALID"),
            Self::Conflict => write!(f, "CONFLICT"),
            Self::Provider => write!(f, "PROVIDER"),
            Self::Serialization => write!(f, "SERIALIZATION"),
            Self::Internal => write!(f, "INTERNAL"),
        }
    }
}

/// The unified application error used throughout ModHub.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    /// The category of error.
    pub kind: ErrorKind,
    /// A human-readable error message.
    pub message: String,
    /// Optional underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new application error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Create a new application error with an underlying cause.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a filesystem error.
    pub fn filesystem(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Filesystem, message)
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    /// Create a not-found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    /// Create a module-disabled error.
    pub fn module_disabled(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ModuleDisabled, message)
    }

    /// Create a capability-mismatch error.
    pub fn capability_mismatch(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::CapabilityMismatch, message)
    }

    /// Create a hook-invalid error.
    pub fn hook_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::HookInvalid, message)
    }

    /// Create a conflict error.
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Conflict, message)
    }

    /// Create a configuration-provider error.
    pub fn provider(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Provider, message)
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }

    /// Returns `true` if this error has the given kind.
    pub fn is(&self, kind: ErrorKind) -> bool {
        self.kind == kind
    }
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            message: self.message.clone(),
            source: None,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(
            ErrorKind::Serialization,
            format!("JSON serialization error: {err}"),
            err,
        )
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::with_source(ErrorKind::Filesystem, format!("I/O error: {err}"), err)
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorKind::Configuration,
            format!("Configuration error: {err}"),
            err,
        )
    }
}
