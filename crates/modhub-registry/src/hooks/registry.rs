//! Hook registry — discovers which hooks each module implements.
//!
//! A module implements hook `<name>` by shipping a file
//! `hooks/hook_<name>.<ext>`. The per-module map is computed once and
//! cached until reset.

use std::collections::BTreeMap;
use std::sync::{Arc, LazyLock};

use dashmap::DashMap;
use regex::Regex;
use tracing::debug;

use modhub_core::result::AppResult;

use super::definitions::{HookImplementation, callable_id};
use crate::discovery::ModuleDiscovery;

/// Hook name → implementation for one module.
pub type HookMap = BTreeMap<String, HookImplementation>;

static HOOK_FILE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^hook_([A-Za-z0-9_]+)\.[A-Za-z0-9]+$").expect("valid hook file pattern")
});

/// Extracts the hook name from a hook file name, if it follows the
/// `hook_<name>.<ext>` convention.
pub fn parse_hook_file(file_name: &str) -> Option<&str> {
    HOOK_FILE
        .captures(file_name)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Per-module cache of discovered hook implementations.
#[derive(Debug)]
pub struct HookRegistry {
    discovery: Arc<ModuleDiscovery>,
    /// Module name → hook map.
    maps: DashMap<String, Arc<HookMap>>,
}

impl HookRegistry {
    /// Creates an empty registry.
    pub fn new(discovery: Arc<ModuleDiscovery>) -> Self {
        Self {
            discovery,
            maps: DashMap::new(),
        }
    }

    /// Returns the hooks implemented by `module`.
    ///
    /// A module without a hooks directory implements nothing.
    pub fn hooks_for(&self, module: &str) -> AppResult<Arc<HookMap>> {
        if let Some(map) = self.maps.get(module).map(|m| m.clone()) {
            return Ok(map);
        }

        let map = Arc::new(self.scan(module)?);
        debug!(module = %module, hooks = map.len(), "Hook map computed");

        Ok(self
            .maps
            .entry(module.to_string())
            .or_insert(map)
            .value()
            .clone())
    }

    /// Returns whether a hook map for `module` is cached.
    pub fn is_cached(&self, module: &str) -> bool {
        self.maps.contains_key(module)
    }

    /// Clears every cached hook map.
    pub fn reset(&self) {
        self.maps.clear();
    }

    fn scan(&self, module: &str) -> AppResult<HookMap> {
        let dir = self.discovery.hooks_dir(module);
        let fs = self.discovery.fs();
        if !fs.is_dir(&dir) {
            return Ok(HookMap::new());
        }

        let mut files = fs.list_files(&dir)?;
        // Same hook under two extensions: the first name in sort order wins.
        files.sort();

        let mut map = HookMap::new();
        for file in &files {
            let Some(hook) = parse_hook_file(file) else {
                debug!(module = %module, file = %file, "Skipping non-hook file");
                continue;
            };
            map.entry(hook.to_string())
                .or_insert_with(|| HookImplementation {
                    source: dir.join(file),
                    callable: callable_id(module, hook),
                });
        }
        Ok(map)
    }
}
