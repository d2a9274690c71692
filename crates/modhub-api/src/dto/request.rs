//! Request DTOs.

use serde::{Deserialize, Serialize};

/// Query string of `GET /api/resolve`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolveQuery {
    /// `name` or `module:name`.
    pub identifier: String,
    /// Kind segment used to qualify module-scoped names.
    #[serde(default)]
    pub kind: String,
    /// Capability tag the component must declare.
    #[serde(default)]
    pub capability: Option<String>,
}
