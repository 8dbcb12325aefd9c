//! FileSystem port - read-only view of the file system used by path resolvers
//!
//! Resolvers only ever ask "is something there?". They never create, write or
//! remove files, so the port exposes nothing that mutates.

use std::path::{Path, PathBuf};

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard metadata lookups
/// - in-memory fakes for tests
pub trait FileSystem: Send + Sync {
    /// Check if a file or directory exists.
    ///
    /// Failing to stat counts as "does not exist".
    fn exists(&self, path: &Path) -> bool;

    /// Check if the path is an existing directory
    fn is_dir(&self, path: &Path) -> bool;

    /// Directory that relative inputs are resolved against
    fn current_dir(&self) -> std::io::Result<PathBuf>;
}

impl<F: FileSystem + ?Sized> FileSystem for &F {
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        (**self).is_dir(path)
    }

    fn current_dir(&self) -> std::io::Result<PathBuf> {
        (**self).current_dir()
    }
}
