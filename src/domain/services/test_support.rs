//! In-memory fakes shared by the resolver unit tests

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::domain::entities::TwoParams;
use crate::domain::ports::FileSystem;
use crate::domain::services::PathOptions;
use crate::domain::value_objects::ConfigProfile;
use crate::infrastructure::DefaultPatternProvider;

/// File system holding a fixed set of files and directories
#[derive(Debug, Clone, Default)]
pub struct MemoryFs {
    cwd: PathBuf,
    files: HashSet<PathBuf>,
    dirs: HashSet<PathBuf>,
}

impl MemoryFs {
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self {
            cwd: cwd.into(),
            ..Self::default()
        }
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.files.insert(path.into());
        self
    }

    pub fn with_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.dirs.insert(path.into());
        self
    }
}

impl FileSystem for MemoryFs {
    fn exists(&self, path: &Path) -> bool {
        self.files.contains(path) || self.dirs.contains(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.dirs.contains(path)
    }

    fn current_dir(&self) -> std::io::Result<PathBuf> {
        Ok(self.cwd.clone())
    }
}

/// Build validated params with the built-in patterns
pub fn params_for(directive: &str, layer: &str, options: PathOptions) -> (TwoParams, PathOptions) {
    let params = TwoParams::create(
        directive,
        layer,
        ConfigProfile::default(),
        &DefaultPatternProvider,
    )
    .unwrap();
    (params, options)
}
