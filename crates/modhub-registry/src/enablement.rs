//! Enablement resolver — decides whether a module is active.
//!
//! Decisions are cached per module for the lifetime of the registry. A
//! malformed configuration entry is reported as a `Configuration` error
//! and never cached, so fixing the configuration takes effect on the next
//! call.

use std::borrow::Cow;
use std::sync::{Arc, PoisonError, RwLock};

use dashmap::DashMap;
use tracing::{debug, warn};

use modhub_core::error::AppError;
use modhub_core::result::AppResult;
use modhub_core::traits::{EnablementConfig, EnablementSource};

use crate::discovery::ModuleDiscovery;

/// Cached enable/disable decisions.
#[derive(Debug)]
pub struct EnablementResolver {
    /// Module discovery, used for the on-disk existence check.
    discovery: Arc<ModuleDiscovery>,
    /// Module name → decision.
    decisions: DashMap<String, bool>,
}

impl EnablementResolver {
    /// Creates a resolver with an empty cache.
    pub fn new(discovery: Arc<ModuleDiscovery>) -> Self {
        Self {
            discovery,
            decisions: DashMap::new(),
        }
    }

    /// Decides whether `module` is enabled under `config`.
    pub fn is_enabled(&self, module: &str, config: &EnablementConfig) -> AppResult<bool> {
        self.decide(module, || Ok(Cow::Borrowed(config)))
    }

    /// Decides whether `module` is enabled, fetching the configuration from
    /// `source` only when no cached decision exists.
    pub fn is_enabled_from(&self, module: &str, source: &dyn EnablementSource) -> AppResult<bool> {
        self.decide(module, || source.enablement().map(Cow::Owned))
    }

    /// Returns the cached decision for `module`, if any.
    pub fn cached(&self, module: &str) -> Option<bool> {
        self.decisions.get(module).map(|d| *d)
    }

    /// Clears every cached decision.
    pub fn reset(&self) {
        self.decisions.clear();
    }

    fn decide<'a, F>(&self, module: &str, config: F) -> AppResult<bool>
    where
        F: FnOnce() -> AppResult<Cow<'a, EnablementConfig>>,
    {
        if let Some(decision) = self.cached(module) {
            return Ok(decision);
        }

        let config = config()?;

        if !config.allow_list.is_empty() && !config.allow_list.contains(module) {
            debug!(module = %module, "Module outside the allow-list");
            return Ok(self.store(module, false));
        }

        if !self.discovery.module_exists(module) {
            debug!(module = %module, "Module directory does not exist");
            return Ok(self.store(module, false));
        }

        let decision = match config.entries.get(module) {
            Some(serde_json::Value::Bool(enabled)) => *enabled,
            Some(other) => {
                warn!(module = %module, value = %other, "Invalid enable value");
                return Err(AppError::configuration(format!(
                    "invalid enable value for module '{module}': expected a boolean, got {other}"
                )));
            }
            None => config.core_modules.contains(module),
        };

        debug!(module = %module, enabled = decision, "Enablement decided");
        Ok(self.store(module, decision))
    }

    /// Stores `decision` unless another caller stored one first, and
    /// returns the stored value.
    fn store(&self, module: &str, decision: bool) -> bool {
        *self
            .decisions
            .entry(module.to_string())
            .or_insert(decision)
            .value()
    }
}

/// An [`EnablementSource`] holding a replaceable configuration snapshot.
#[derive(Debug, Default)]
pub struct StaticEnablement {
    config: RwLock<EnablementConfig>,
}

impl StaticEnablement {
    /// Wraps a fixed snapshot.
    pub fn new(config: EnablementConfig) -> Self {
        Self {
            config: RwLock::new(config),
        }
    }

    /// Replaces the snapshot. Cached decisions are unaffected until the
    /// registry is reset.
    pub fn replace(&self, config: EnablementConfig) {
        *self.config.write().unwrap_or_else(PoisonError::into_inner) = config;
    }
}

impl EnablementSource for StaticEnablement {
    fn enablement(&self) -> AppResult<EnablementConfig> {
        Ok(self
            .config
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }
}
