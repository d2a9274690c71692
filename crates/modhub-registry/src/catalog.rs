//! Component catalog — the explicit component space populated by the host.

use std::collections::BTreeSet;
use std::sync::Arc;

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tracing::info;

use modhub_core::error::AppError;
use modhub_core::result::AppResult;
use modhub_core::traits::{Capability, Component, ComponentSpace};

/// Zero-argument constructor stored for each component.
pub type Constructor = Arc<dyn Fn() -> Arc<dyn Component> + Send + Sync>;

/// Entry in the catalog.
struct CatalogEntry {
    /// Capabilities declared at registration time.
    capabilities: BTreeSet<Capability>,
    /// Builds a fresh instance.
    constructor: Constructor,
}

/// Table of fully qualified component names.
#[derive(Default)]
pub struct ComponentCatalog {
    entries: DashMap<String, CatalogEntry>,
}

impl std::fmt::Debug for ComponentCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComponentCatalog")
            .field("components", &self.entries.len())
            .finish()
    }
}

impl ComponentCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a component under its fully qualified name.
    ///
    /// Fails with `Conflict` if the name is already taken.
    pub fn register<F>(
        &self,
        qualified_name: &str,
        capabilities: impl IntoIterator<Item = Capability>,
        constructor: F,
    ) -> AppResult<()>
    where
        F: Fn() -> Arc<dyn Component> + Send + Sync + 'static,
    {
        match self.entries.entry(qualified_name.to_string()) {
            Entry::Occupied(_) => Err(AppError::conflict(format!(
                "component '{qualified_name}' is already registered"
            ))),
            Entry::Vacant(slot) => {
                let capabilities: BTreeSet<Capability> = capabilities.into_iter().collect();
                info!(
                    component = %qualified_name,
                    capabilities = capabilities.len(),
                    "Component registered"
                );
                slot.insert(CatalogEntry {
                    capabilities,
                    constructor: Arc::new(constructor),
                });
                Ok(())
            }
        }
    }

    /// Registers a `Default`-constructible component.
    pub fn register_default<T>(
        &self,
        qualified_name: &str,
        capabilities: impl IntoIterator<Item = Capability>,
    ) -> AppResult<()>
    where
        T: Component + Default,
    {
        self.register(qualified_name, capabilities, || {
            Arc::new(T::default()) as Arc<dyn Component>
        })
    }

    /// Returns the registered names in lexicographic order.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.entries.iter().map(|e| e.key().clone()).collect();
        names.sort();
        names
    }

    /// Returns the number of registered components.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ComponentSpace for ComponentCatalog {
    fn exists(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    fn satisfies(&self, name: &str, capability: &Capability) -> bool {
        self.entries
            .get(name)
            .map(|entry| entry.capabilities.contains(capability))
            .unwrap_or(false)
    }

    fn construct(&self, name: &str) -> Option<Arc<dyn Component>> {
        // Clone the constructor out so the shard lock is not held while it runs.
        let constructor = self.entries.get(name)?.constructor.clone();
        Some(constructor())
    }
}
