//! Module discovery — lists the modules installed under the module root.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};

use tracing::debug;

use modhub_core::result::AppResult;
use modhub_core::traits::ModuleFs;

/// Name of the per-module directory scanned for hook files.
pub const HOOKS_DIR: &str = "hooks";

/// Scans the module root one level deep and caches the result.
#[derive(Debug)]
pub struct ModuleDiscovery {
    /// Directory whose sub-directories are modules.
    root: PathBuf,
    /// Filesystem collaborator.
    fs: Arc<dyn ModuleFs>,
    /// Cached module set, `None` until the first successful scan.
    modules: RwLock<Option<Arc<BTreeSet<String>>>>,
}

impl ModuleDiscovery {
    /// Creates a discovery component for `root`.
    pub fn new(root: impl Into<PathBuf>, fs: Arc<dyn ModuleFs>) -> Self {
        Self {
            root: root.into(),
            fs,
            modules: RwLock::new(None),
        }
    }

    /// Returns the installed module names in lexicographic order.
    ///
    /// The first successful scan is cached; failures are not.
    pub fn list_modules(&self) -> AppResult<Arc<BTreeSet<String>>> {
        if let Some(modules) = self.cached() {
            return Ok(modules);
        }

        let names = self.fs.list_dirs(&self.root)?;
        let scanned: Arc<BTreeSet<String>> = Arc::new(names.into_iter().collect());
        debug!(
            root = %self.root.display(),
            count = scanned.len(),
            "Scanned module root"
        );

        let mut slot = self.modules.write().unwrap_or_else(PoisonError::into_inner);
        // Another thread may have finished its scan first; keep its result.
        Ok(slot.get_or_insert(scanned).clone())
    }

    /// Returns whether `name` is in the discovered module set.
    pub fn contains(&self, name: &str) -> AppResult<bool> {
        Ok(self.list_modules()?.contains(name))
    }

    /// Checks on disk whether `name` has a module directory.
    ///
    /// Names that are not a single path segment never exist.
    pub fn module_exists(&self, name: &str) -> bool {
        is_plain_segment(name) && self.fs.is_dir(&self.root.join(name))
    }

    /// Returns the module root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the directory of module `name`.
    pub fn module_path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// Returns the hooks directory of module `name`.
    pub fn hooks_dir(&self, name: &str) -> PathBuf {
        self.module_path(name).join(HOOKS_DIR)
    }

    /// Returns the filesystem collaborator.
    pub fn fs(&self) -> &Arc<dyn ModuleFs> {
        &self.fs
    }

    /// Forgets the cached module set.
    pub fn reset(&self) {
        *self.modules.write().unwrap_or_else(PoisonError::into_inner) = None;
    }

    fn cached(&self) -> Option<Arc<BTreeSet<String>>> {
        self.modules
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

fn is_plain_segment(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\'])
}
