//! Shared fixtures for registry integration tests.

#![allow(dead_code)]

use std::any::Any;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use modhub_core::result::AppResult;
use modhub_core::traits::{Capability, Component, EnablementConfig, ModuleFs};
use modhub_registry::{
    CallableTable, ComponentCatalog, LocalFs, ModuleRegistry, StaticEnablement,
};
use tempfile::TempDir;

/// A [`ModuleFs`] that counts calls before delegating to [`LocalFs`].
#[derive(Debug, Default)]
pub struct CountingFs {
    inner: LocalFs,
    pub is_dir_calls: AtomicUsize,
    pub list_dirs_calls: AtomicUsize,
    pub list_files_calls: AtomicUsize,
}

impl CountingFs {
    pub fn is_dir_count(&self) -> usize {
        self.is_dir_calls.load(Ordering::SeqCst)
    }

    pub fn list_dirs_count(&self) -> usize {
        self.list_dirs_calls.load(Ordering::SeqCst)
    }

    pub fn list_files_count(&self) -> usize {
        self.list_files_calls.load(Ordering::SeqCst)
    }
}

impl ModuleFs for CountingFs {
    fn is_dir(&self, path: &Path) -> bool {
        self.is_dir_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.is_dir(path)
    }

    fn list_dirs(&self, path: &Path) -> AppResult<Vec<String>> {
        self.list_dirs_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.list_dirs(path)
    }

    fn list_files(&self, path: &Path) -> AppResult<Vec<String>> {
        self.list_files_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.list_files(path)
    }
}

/// A component with a fixed capability set.
#[derive(Debug, Clone)]
pub struct Widget {
    pub name: String,
    pub capabilities: Vec<Capability>,
}

impl Component for Widget {
    fn capabilities(&self) -> Vec<Capability> {
        self.capabilities.clone()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// A temporary module root plus the collaborators wired into a registry.
pub struct TestModules {
    pub dir: TempDir,
    pub fs: Arc<CountingFs>,
    pub enablement: Arc<StaticEnablement>,
    pub catalog: Arc<ComponentCatalog>,
    pub callables: Arc<CallableTable>,
}

impl TestModules {
    /// Creates an empty module root with core modules `system` and `user`.
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("tempdir"),
            fs: Arc::new(CountingFs::default()),
            enablement: Arc::new(StaticEnablement::new(EnablementConfig::with_core([
                "system", "user",
            ]))),
            catalog: Arc::new(ComponentCatalog::new()),
            callables: Arc::new(CallableTable::new()),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Creates a module directory.
    pub fn module(&self, name: &str) -> PathBuf {
        let path = self.root().join(name);
        std::fs::create_dir_all(&path).expect("create module dir");
        path
    }

    /// Creates a module with one `hooks/hook_<name>.rs` file per hook.
    pub fn module_with_hooks(&self, name: &str, hooks: &[&str]) -> PathBuf {
        let path = self.module(name);
        let hooks_dir = path.join("hooks");
        std::fs::create_dir_all(&hooks_dir).expect("create hooks dir");
        for hook in hooks {
            std::fs::write(hooks_dir.join(format!("hook_{hook}.rs")), "").expect("write hook");
        }
        path
    }

    /// Replaces the enablement configuration.
    pub fn configure(&self, config: EnablementConfig) {
        self.enablement.replace(config);
    }

    /// Registers a component that declares and implements `capabilities`.
    pub fn component(&self, qualified_name: &str, capabilities: &[&'static str]) {
        let caps: Vec<Capability> = capabilities.iter().map(|c| Capability::new(*c)).collect();
        let name = qualified_name.to_string();
        let declared = caps.clone();
        self.catalog
            .register(qualified_name, declared, move || {
                Arc::new(Widget {
                    name: name.clone(),
                    capabilities: caps.clone(),
                }) as Arc<dyn Component>
            })
            .expect("register component");
    }

    /// Builds a registry over this module root.
    pub fn registry(&self) -> ModuleRegistry {
        ModuleRegistry::builder(self.root())
            .filesystem(self.fs.clone())
            .enablement(self.enablement.clone())
            .components(self.catalog.clone())
            .hook_loader(self.callables.clone())
            .build()
    }
}
