//! Local filesystem implementation of [`ModuleFs`].

use std::path::Path;

use modhub_core::error::{AppError, ErrorKind};
use modhub_core::result::AppResult;
use modhub_core::traits::ModuleFs;

/// [`ModuleFs`] backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Creates a local filesystem collaborator.
    pub fn new() -> Self {
        Self
    }

    fn list(&self, path: &Path, want_dirs: bool) -> AppResult<Vec<String>> {
        let entries = std::fs::read_dir(path).map_err(|e| {
            AppError::with_source(
                ErrorKind::Filesystem,
                format!("Cannot read directory '{}': {e}", path.display()),
                e,
            )
        })?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().to_string();
            if name.starts_with('.') {
                continue;
            }
            // Follows symlinks so linked module directories count as modules.
            let is_dir = entry.path().is_dir();
            if is_dir == want_dirs {
                names.push(name);
            }
        }
        Ok(names)
    }
}

impl ModuleFs for LocalFs {
    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn list_dirs(&self, path: &Path) -> AppResult<Vec<String>> {
        self.list(path, true)
    }

    fn list_files(&self, path: &Path) -> AppResult<Vec<String>> {
        self.list(path, false)
    }
}
