//! Enablement configuration supplied by the host.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::result::AppResult;

/// Snapshot of the enable/disable configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnablementConfig {
    /// Explicit entries keyed by module name. Only booleans are valid.
    pub entries: BTreeMap<String, serde_json::Value>,
    /// Modules enabled when no explicit entry exists.
    pub core_modules: BTreeSet<String>,
    /// When non-empty, only these modules count as installed.
    pub allow_list: BTreeSet<String>,
}

impl EnablementConfig {
    /// Creates an empty configuration with the given core set.
    pub fn with_core<I, S>(core: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            core_modules: core.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Adds an explicit entry.
    pub fn with_entry(mut self, module: &str, value: serde_json::Value) -> Self {
        self.entries.insert(module.to_string(), value);
        self
    }

    /// Restricts the installed set to the given modules.
    pub fn with_allow_list<I, S>(mut self, modules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allow_list = modules.into_iter().map(Into::into).collect();
        self
    }
}

/// Configuration provider consulted on every enablement decision that is
/// not already cached.
pub trait EnablementSource: Send + Sync + std::fmt::Debug {
    /// Returns the current configuration snapshot.
    ///
    /// Provider failures are surfaced to the caller unchanged.
    fn enablement(&self) -> AppResult<EnablementConfig>;
}
