//! Filesystem collaborator used for module and hook discovery.

use std::path::Path;

use crate::result::AppResult;

/// Read-only view of the filesystem the registry scans.
///
/// Listings are one level deep and return bare entry names. Hidden
/// entries (names starting with `.`) are never returned.
pub trait ModuleFs: Send + Sync + std::fmt::Debug {
    /// Returns whether `path` exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Lists the names of the sub-directories of `path`.
    ///
    /// Fails with a `Filesystem` error if `path` cannot be read.
    fn list_dirs(&self, path: &Path) -> AppResult<Vec<String>>;

    /// Lists the names of the regular files directly inside `path`.
    ///
    /// Fails with a `Filesystem` error if `path` cannot be read.
    fn list_files(&self, path: &Path) -> AppResult<Vec<String>>;
}
