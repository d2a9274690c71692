//! Hook loading — maps callable identifiers to invocable functions.

use std::collections::BTreeSet;
use std::path::PathBuf;
use std::sync::{Arc, PoisonError, RwLock};

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tracing::{debug, info};

use modhub_core::error::AppError;
use modhub_core::result::AppResult;

use super::definitions::{HookImplementation, HookPayload, callable_id};

/// An invocable hook implementation.
pub type HookFn = Arc<dyn Fn(&mut HookPayload) + Send + Sync>;

/// Loads hook sources and resolves callable identifiers.
pub trait HookLoader: Send + Sync + std::fmt::Debug {
    /// Makes the implementation's source available. Must be idempotent.
    fn load(&self, implementation: &HookImplementation) -> AppResult<()>;

    /// Resolves a callable identifier to a function, if one exists.
    fn resolve(&self, callable: &str) -> Option<HookFn>;
}

/// A [`HookLoader`] backed by an explicit callable table filled in by the
/// host at startup.
#[derive(Default)]
pub struct CallableTable {
    /// Callable identifier → function.
    callables: DashMap<String, HookFn>,
    /// Source locations loaded so far.
    loaded: RwLock<BTreeSet<PathBuf>>,
}

impl std::fmt::Debug for CallableTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallableTable")
            .field("callables", &self.callables.len())
            .finish()
    }
}

impl CallableTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a callable under an explicit identifier.
    ///
    /// Fails with `Conflict` if the identifier is already taken.
    pub fn register<F>(&self, callable: &str, function: F) -> AppResult<()>
    where
        F: Fn(&mut HookPayload) + Send + Sync + 'static,
    {
        match self.callables.entry(callable.to_string()) {
            Entry::Occupied(_) => Err(AppError::conflict(format!(
                "callable '{callable}' is already registered"
            ))),
            Entry::Vacant(slot) => {
                slot.insert(Arc::new(function));
                info!(callable = %callable, "Hook callable registered");
                Ok(())
            }
        }
    }

    /// Registers the implementation of `hook` for `module` under the
    /// conventional `<module>_hook_<hook>` identifier.
    pub fn register_hook<F>(&self, module: &str, hook: &str, function: F) -> AppResult<()>
    where
        F: Fn(&mut HookPayload) + Send + Sync + 'static,
    {
        self.register(&callable_id(module, hook), function)
    }

    /// Returns the source locations loaded so far, in sorted order.
    pub fn loaded_sources(&self) -> Vec<PathBuf> {
        self.loaded
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .cloned()
            .collect()
    }
}

impl HookLoader for CallableTable {
    fn load(&self, implementation: &HookImplementation) -> AppResult<()> {
        if !implementation.source.is_file() {
            return Err(AppError::filesystem(format!(
                "hook source '{}' does not exist",
                implementation.source.display()
            )));
        }

        let mut loaded = self.loaded.write().unwrap_or_else(PoisonError::into_inner);
        if loaded.insert(implementation.source.clone()) {
            debug!(
                source = %implementation.source.display(),
                callable = %implementation.callable,
                "Hook source loaded"
            );
        }
        Ok(())
    }

    fn resolve(&self, callable: &str) -> Option<HookFn> {
        self.callables.get(callable).map(|f| f.value().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use modhub_core::error::ErrorKind;
    use serde_json::json;

    #[test]
    fn test_register_and_resolve() {
        let table = CallableTable::new();
        table
            .register_hook("blog", "routes", |payload| {
                payload.push("routes", json!("/blog"));
            })
            .expect("register");

        let hook = table.resolve("blog_hook_routes").expect("resolves");
        let mut payload = HookPayload::new();
        hook(&mut payload);
        assert_eq!(payload.get("routes"), Some(&json!(["/blog"])));

        assert!(table.resolve("blog_hook_menu").is_none());
    }

    #[test]
    fn test_duplicate_callable_is_conflict() {
        let table = CallableTable::new();
        table.register("blog_hook_routes", |_| {}).expect("first");
        let err = table.register("blog_hook_routes", |_| {}).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);
    }

    #[test]
    fn test_load_is_idempotent() {
        let temp = tempfile::tempdir().expect("tempdir");
        let source = temp.path().join("hook_routes.rs");
        std::fs::write(&source, "").expect("write");

        let table = CallableTable::new();
        let implementation = HookImplementation {
            source,
            callable: "blog_hook_routes".into(),
        };
        table.load(&implementation).expect("load");
        table.load(&implementation).expect("load again");
        assert_eq!(table.loaded_sources().len(), 1);
    }

    #[test]
    fn test_load_missing_source_fails() {
        let table = CallableTable::new();
        let implementation = HookImplementation {
            source: PathBuf::from("/nonexistent/blog/hooks/hook_routes.rs"),
            callable: "blog_hook_routes".into(),
        };
        let err = table.load(&implementation).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Filesystem);
        assert!(table.loaded_sources().is_empty());
    }
}
