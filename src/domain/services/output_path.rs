//! Output file path resolver
//!
//! Classifies `--destination` (alias `--output`):
//! 1. absent, or a directory → auto-generated `{dir}/{YYYYMMDD}_{hash7}.md`
//! 2. absolute path with a file name and extension → absolute
//! 3. relative path with directories and extension → relative (joined to cwd)
//! 4. bare filename with extension → placed in the layer's output directory
//!
//! A destination counts as a directory when it is one on disk, ends in a
//! separator, or has no extension and is not an existing file. An existing
//! extensionless file in the working directory is used in place.
//!
//! An explicitly empty (or blank) destination is a caller mistake, not a
//! request to auto-generate.

use std::path::{Path, PathBuf, MAIN_SEPARATOR};

use chrono::Local;
use sha2::{Digest, Sha256};

use crate::config::Config;
use crate::domain::ports::FileSystem;
use crate::domain::value_objects::{PathKind, PathResult};

use super::path_options::PathParams;
use super::path_support::{
    check_path_chars, current_dir, normalize_separators, resolve_base_dir, PathResolutionError,
};

/// Number of hex characters in the generated file name hash
pub const GENERATED_HASH_LEN: usize = 7;

#[derive(Debug, Clone)]
pub struct OutputFilePathResolver<'a, F> {
    config: &'a Config,
    fs: F,
}

impl<'a, F: FileSystem> OutputFilePathResolver<'a, F> {
    pub fn new(config: &'a Config, fs: F) -> Self {
        Self { config, fs }
    }

    pub fn resolve(&self, params: &PathParams<'_>) -> Result<PathResult, PathResolutionError> {
        let cwd = current_dir(&self.fs)?;
        let layer_dir = self.layer_output_dir(&cwd, params.layer.value());

        let raw = match params.options.destination() {
            None => return Ok(self.generate_in(&layer_dir)),
            Some(raw) if raw.trim().is_empty() => {
                return Err(PathResolutionError::invalid(
                    raw,
                    "destination must not be empty; omit it to auto-generate",
                ))
            }
            Some(raw) => raw,
        };

        check_path_chars(raw)?;
        let normalized = normalize_separators(raw);
        let path = Path::new(&normalized);
        let anchored = if path.is_absolute() {
            path.to_path_buf()
        } else {
            cwd.join(path)
        };

        let is_dir = self.fs.is_dir(&anchored);
        let is_file = !is_dir && self.fs.exists(&anchored);
        let names_dir = ends_with_separator(&normalized)
            || (!is_file && path.extension().is_none());

        if is_dir || names_dir {
            tracing::debug!(destination = raw, "destination is a directory");
            return Ok(self.generate_in(&anchored));
        }

        let result = if path.is_absolute() {
            PathResult::new(path, PathKind::Absolute, is_file)
        } else if path.components().count() > 1 {
            PathResult::new(anchored, PathKind::Relative, is_file)
        } else if is_file && path.extension().is_none() {
            tracing::debug!(destination = raw, "destination is an existing file");
            PathResult::new(anchored, PathKind::Filename, true)
        } else {
            let placed = layer_dir.join(path);
            let exists = self.fs.exists(&placed);
            PathResult::new(placed, PathKind::Filename, exists)
        };

        Ok(result)
    }

    /// `{output_base}/{layer}`, where the base defaults to `cwd`
    fn layer_output_dir(&self, cwd: &Path, layer: &str) -> PathBuf {
        let base = match self.config.output_base_dir() {
            Some(base) => resolve_base_dir(base, cwd),
            None => cwd.to_path_buf(),
        };
        base.join(layer)
    }

    fn generate_in(&self, dir: &Path) -> PathResult {
        let path = dir.join(generate_file_name());
        tracing::debug!(path = %path.display(), "auto-generated output path");
        let exists = self.fs.exists(&path);
        PathResult::new(path, PathKind::AutoGenerated, exists)
    }
}

/// `{YYYYMMDD}_{hash7}.md` for the current local date.
///
/// The hash mixes nanosecond time with a random component, so rapid
/// successive calls still yield distinct names.
pub fn generate_file_name() -> String {
    let now = Local::now();
    let nanos = now.timestamp_nanos_opt().unwrap_or_default();
    let salt: u64 = rand::random();

    let mut hasher = Sha256::new();
    hasher.update(nanos.to_le_bytes());
    hasher.update(salt.to_le_bytes());
    let digest = format!("{:x}", hasher.finalize());

    format!(
        "{}_{}.md",
        now.format("%Y%m%d"),
        &digest[..GENERATED_HASH_LEN]
    )
}

fn ends_with_separator(normalized: &str) -> bool {
    normalized.ends_with(MAIN_SEPARATOR) || normalized.ends_with('/')
}
