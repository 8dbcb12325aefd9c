//! Input file path resolver
//!
//! Classifies the `--from` option. First match wins:
//! 1. absent or empty → empty path (no input requested)
//! 2. `-` → stdin
//! 3. absolute path → kept as given
//! 4. relative path with directories → joined to the working directory
//! 5. bare filename → joined to the working directory
//!
//! Any byte sequence the OS accepts is a valid input name; only NUL is
//! rejected.

use std::path::Path;

use crate::domain::ports::FileSystem;
use crate::domain::value_objects::{PathKind, PathResult, STANDARD_LAYERS};

use super::path_options::PathParams;
use super::path_support::{current_dir, has_separator, normalize_separators, PathResolutionError};

/// Value of `--from` that selects standard input
pub const STDIN_MARKER: &str = "-";

#[derive(Debug, Clone)]
pub struct InputFilePathResolver<F> {
    fs: F,
}

impl<F: FileSystem> InputFilePathResolver<F> {
    pub fn new(fs: F) -> Self {
        Self { fs }
    }

    pub fn resolve(&self, params: &PathParams<'_>) -> Result<PathResult, PathResolutionError> {
        let raw = match params.options.from_file.as_deref() {
            None | Some("") => return Ok(PathResult::empty()),
            Some(STDIN_MARKER) => return Ok(PathResult::stdin()),
            Some(raw) => raw,
        };

        if raw.contains('\0') {
            return Err(PathResolutionError::invalid(raw, "contains a NUL byte"));
        }
        let normalized = normalize_separators(raw);
        let path = Path::new(&normalized);

        if path.is_absolute() {
            return Ok(PathResult::new(path, PathKind::Absolute, self.fs.exists(path)));
        }

        let cwd = current_dir(&self.fs)?;
        let resolved = cwd.join(path);

        if has_separator(raw) {
            tracing::debug!(from = raw, "input is a relative path");
        } else {
            tracing::debug!(
                from = raw,
                layer = params.layer.value(),
                inferred = infer_from_layer(raw).unwrap_or(params.layer.value()),
                "input is a bare filename"
            );
        }

        let exists = self.fs.exists(&resolved);
        Ok(PathResult::new(resolved, PathKind::Filename, exists))
    }
}

/// Infer the source layer from an input file name.
///
/// `notes/issue_42.md` → `issue`. Only the file name is inspected, and the
/// first standard layer it mentions wins.
pub fn infer_from_layer(from_file: &str) -> Option<&'static str> {
    let normalized = normalize_separators(from_file);
    let file_name = Path::new(&normalized).file_name()?.to_str()?.to_lowercase();
    STANDARD_LAYERS
        .into_iter()
        .find(|layer| file_name.contains(layer))
}
