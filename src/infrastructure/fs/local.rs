//! Local File System Implementation
//!
//! Implements the FileSystem port with plain metadata lookups.

use std::path::{Path, PathBuf};

use crate::domain::ports::FileSystem;

/// Local file system implementation
///
/// Only reads metadata; a failed stat is reported as "missing".
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn exists(&self, path: &Path) -> bool {
        path.try_exists().unwrap_or(false)
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn current_dir(&self) -> std::io::Result<PathBuf> {
        std::env::current_dir()
    }
}

/// LocalFs with a fixed working directory instead of the process cwd
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootedFs {
    root: PathBuf,
}

impl RootedFs {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl FileSystem for RootedFs {
    fn exists(&self, path: &Path) -> bool {
        LocalFs.exists(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        LocalFs.is_dir(path)
    }

    fn current_dir(&self) -> std::io::Result<PathBuf> {
        Ok(self.root.clone())
    }
}
