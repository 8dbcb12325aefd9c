//! Shared plumbing for the path resolvers
//!
//! Separator normalization, character checks and base-dir anchoring. The
//! resolvers use these helpers but never call each other.

use std::path::{Component, Path, PathBuf, MAIN_SEPARATOR_STR};

use crate::domain::ports::FileSystem;

/// Characters that never appear in a well-formed path argument
pub const DISALLOWED_PATH_CHARS: [char; 7] = ['\0', '<', '>', '|', '?', '*', '"'];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathResolutionError {
    /// The path argument is structurally invalid
    #[error("invalid path '{path}': {reason}")]
    InvalidPath { path: String, reason: String },

    /// The current working directory could not be determined
    #[error("working directory unavailable: {message}")]
    WorkingDirectoryUnavailable { message: String },
}

impl PathResolutionError {
    pub(crate) fn invalid(path: &str, reason: impl Into<String>) -> Self {
        PathResolutionError::InvalidPath {
            path: path.to_string(),
            reason: reason.into(),
        }
    }
}

/// Replace Windows-style backslashes with the platform separator
pub fn normalize_separators(raw: &str) -> String {
    raw.replace('\\', MAIN_SEPARATOR_STR)
}

/// Returns true if the string contains a directory separator of either style
pub fn has_separator(raw: &str) -> bool {
    raw.contains('/') || raw.contains('\\')
}

/// Reject disallowed characters
pub fn check_path_chars(raw: &str) -> Result<(), PathResolutionError> {
    match raw.chars().find(|c| DISALLOWED_PATH_CHARS.contains(c)) {
        Some(c) => Err(PathResolutionError::invalid(
            raw,
            format!("contains disallowed character {c:?}"),
        )),
        None => Ok(()),
    }
}

/// Validate a value that becomes part of a file name (`adaptation`, `fromLayerType`).
///
/// Returns `None` for absent or blank values.
pub fn check_name_segment<'a>(
    option: &str,
    value: Option<&'a str>,
) -> Result<Option<&'a str>, PathResolutionError> {
    let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };

    check_path_chars(value)?;
    if has_separator(value) || value.contains("..") {
        return Err(PathResolutionError::invalid(
            value,
            format!("{option} must be a plain name without separators or '..'"),
        ));
    }

    Ok(Some(value))
}

pub(crate) fn current_dir<F: FileSystem>(fs: &F) -> Result<PathBuf, PathResolutionError> {
    fs.current_dir()
        .map_err(|e| PathResolutionError::WorkingDirectoryUnavailable {
            message: e.to_string(),
        })
}

/// Expand a leading `~` to the home directory
pub fn expand_home(path: &Path) -> PathBuf {
    let mut components = path.components();
    match components.next() {
        Some(Component::Normal(first)) if first == "~" => match dirs::home_dir() {
            Some(home) => home.join(components.as_path()),
            None => path.to_path_buf(),
        },
        _ => path.to_path_buf(),
    }
}

/// Anchor a configured base dir: `~` is expanded, relative dirs join `cwd`.
pub fn resolve_base_dir(raw: &str, cwd: &Path) -> PathBuf {
    let expanded = expand_home(Path::new(&normalize_separators(raw.trim())));
    if expanded.is_absolute() {
        expanded
    } else {
        cwd.join(expanded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_backslashes() {
        let normalized = normalize_separators(r"docs\input\file.md");
        assert_eq!(
            normalized,
            ["docs", "input", "file.md"].join(MAIN_SEPARATOR_STR)
        );
    }

    #[test]
    fn rejects_disallowed_chars() {
        assert!(check_path_chars("out.md").is_ok());
        assert!(matches!(
            check_path_chars("out|tee.md"),
            Err(PathResolutionError::InvalidPath { .. })
        ));
        assert!(check_path_chars("a\0b").is_err());
    }

    #[test]
    fn name_segment_blank_is_none() {
        assert_eq!(check_name_segment("adaptation", None).unwrap(), None);
        assert_eq!(check_name_segment("adaptation", Some("  ")).unwrap(), None);
        assert_eq!(
            check_name_segment("adaptation", Some("strict")).unwrap(),
            Some("strict")
        );
    }

    #[test]
    fn name_segment_rejects_traversal() {
        assert!(check_name_segment("adaptation", Some("../x")).is_err());
        assert!(check_name_segment("fromLayerType", Some("a/b")).is_err());
        assert!(check_name_segment("fromLayerType", Some(r"a\b")).is_err());
    }

    #[test]
    fn base_dir_relative_joins_cwd() {
        let cwd = Path::new("/work");
        assert_eq!(
            resolve_base_dir("prompts", cwd),
            Path::new("/work").join("prompts")
        );
    }

    #[cfg(unix)]
    #[test]
    fn base_dir_absolute_is_kept() {
        assert_eq!(
            resolve_base_dir("/tmp/x", Path::new("/work")),
            Path::new("/tmp/x")
        );
    }

    #[test]
    fn expand_home_leaves_other_paths() {
        let path = Path::new("prompts/~/x");
        assert_eq!(expand_home(path), path);
    }

    #[test]
    fn expand_home_expands_tilde() {
        let expanded = expand_home(Path::new("~/prompts"));
        if dirs::home_dir().is_some() {
            assert!(!expanded.to_string_lossy().starts_with('~'));
        }
    }
}
