//! Path result value object - what every path resolver hands back

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// How a resolved path was derived
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PathKind {
    /// Read from standard input (`-`)
    Stdin,
    /// Given as an absolute path
    Absolute,
    /// Given as a relative path with directory components
    Relative,
    /// Given as a bare filename, or built from configuration
    Filename,
    /// Generated because no usable destination was given
    AutoGenerated,
}

impl PathKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PathKind::Stdin => "stdin",
            PathKind::Absolute => "absolute",
            PathKind::Relative => "relative",
            PathKind::Filename => "filename",
            PathKind::AutoGenerated => "auto-generated",
        }
    }
}

impl fmt::Display for PathKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classified output of a path resolver
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathResult {
    value: PathBuf,
    #[serde(rename = "type")]
    kind: PathKind,
    exists: bool,
    is_generated: bool,
}

impl PathResult {
    pub fn new(value: impl Into<PathBuf>, kind: PathKind, exists: bool) -> Self {
        Self {
            value: value.into(),
            kind,
            exists,
            is_generated: kind == PathKind::AutoGenerated,
        }
    }

    /// The "no input requested" result: an empty path
    pub fn empty() -> Self {
        Self::new(PathBuf::new(), PathKind::Filename, false)
    }

    pub fn stdin() -> Self {
        Self::new("-", PathKind::Stdin, true)
    }

    pub fn value(&self) -> &Path {
        &self.value
    }

    pub fn into_path_buf(self) -> PathBuf {
        self.value
    }

    pub fn kind(&self) -> PathKind {
        self.kind
    }

    pub fn exists(&self) -> bool {
        self.exists
    }

    pub fn is_generated(&self) -> bool {
        self.is_generated
    }

    /// Returns true if the resolver was asked for nothing
    pub fn is_empty(&self) -> bool {
        self.value.as_os_str().is_empty()
    }
}

impl fmt::Display for PathResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value.display())
    }
}
