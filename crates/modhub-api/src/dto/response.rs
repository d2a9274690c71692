//! Response DTOs.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use modhub_registry::{ModuleInfo, ResolvedIdentifier};

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status.
    pub status: String,
    /// Server version.
    pub version: String,
    /// Seconds since the server started.
    pub uptime_seconds: u64,
    /// Number of installed modules.
    pub modules: usize,
    /// Response time.
    pub timestamp: DateTime<Utc>,
}

/// Module summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleResponse {
    /// Module name.
    pub name: String,
    /// Whether the module is enabled.
    pub enabled: bool,
    /// Hooks the module implements.
    pub hooks: Vec<String>,
    /// Public URL of the module.
    pub url: String,
    /// Enablement error for this module, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ModuleResponse {
    /// Builds a response from a registry summary and its URL.
    pub fn new(info: ModuleInfo, url: String) -> Self {
        Self {
            name: info.name,
            enabled: info.enabled,
            hooks: info.hooks,
            url,
            error: info.error,
        }
    }
}

/// One hook implementation of a module.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HookResponse {
    /// Hook name.
    pub hook: String,
    /// Callable identifier.
    pub callable: String,
    /// Hook source file.
    pub source: PathBuf,
}

/// Outcome of an identifier resolution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolveResponse {
    /// The identifier as requested.
    pub identifier: String,
    /// The fully qualified component name.
    pub qualified_name: String,
    /// Structured resolution result.
    pub resolved: ResolvedIdentifier,
}
