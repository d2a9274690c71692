//! Module discovery and enablement configuration.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::traits::enablement::EnablementConfig;

/// Modules enabled by default unless explicitly disabled.
pub const DEFAULT_CORE_MODULES: &[&str] = &["filter", "system", "user"];

/// Module system configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModulesConfig {
    /// Directory whose immediate sub-directories are the installed modules.
    #[serde(default = "default_root")]
    pub root: PathBuf,
    /// Core modules, enabled unless an explicit entry disables them.
    #[serde(default = "default_core")]
    pub core: Vec<String>,
    /// Restricts the installed set to these names when non-empty.
    #[serde(default)]
    pub allow_list: Vec<String>,
    /// Explicit enable/disable entries. Values are kept raw so that a
    /// non-boolean entry is reported when that module is resolved.
    #[serde(default)]
    pub enabled: BTreeMap<String, serde_json::Value>,
}

impl Default for ModulesConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            core: default_core(),
            allow_list: Vec::new(),
            enabled: BTreeMap::new(),
        }
    }
}

impl ModulesConfig {
    /// Builds the enablement snapshot consumed by the registry.
    pub fn enablement(&self) -> EnablementConfig {
        EnablementConfig {
            entries: self.enabled.clone(),
            core_modules: self.core.iter().cloned().collect(),
            allow_list: self.allow_list.iter().cloned().collect(),
        }
    }
}

fn default_root() -> PathBuf {
    PathBuf::from("./modules")
}

fn default_core() -> Vec<String> {
    DEFAULT_CORE_MODULES.iter().map(|m| m.to_string()).collect()
}
