//! Configuration loading
//!
//! Profiles map to YAML files inside the config directory:
//! - `default` → `app.yml`, then `user.yml`
//! - `<name>` → `<name>-app.yml`, then `<name>-user.yml`
//!
//! The user file overrides the app file key by key.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::services::{check_name_segment, PathResolutionError};
use crate::domain::value_objects::ConfigProfile;

use super::types::Config;

/// Config directory below the working directory
pub const CONFIG_SUBDIR: &str = "config";

/// Overrides `app_prompt.base_dir`
pub const ENV_PROMPT_BASE_DIR: &str = "BREAKDOWN_PROMPT_BASE_DIR";
/// Overrides `app_schema.base_dir`
pub const ENV_SCHEMA_BASE_DIR: &str = "BREAKDOWN_SCHEMA_BASE_DIR";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config in {file}: {message}")]
    Parse { file: PathBuf, message: String },

    #[error("config profile '{profile}' not found (expected {path})")]
    ProfileNotFound { profile: String, path: PathBuf },

    #[error("invalid config profile '{profile}': {reason}")]
    InvalidProfile { profile: String, reason: String },
}

/// Non-fatal configuration warning (e.g. an unknown key)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Result of loading a profile
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadedConfig {
    pub config: Config,
    pub warnings: Vec<ConfigWarning>,
    /// Files that were actually read, in load order
    pub files: Vec<PathBuf>,
}

/// `{cwd}/{working_dir}/config`
pub fn default_config_dir(cwd: &Path) -> PathBuf {
    cwd.join(super::types::DEFAULT_WORKING_DIR).join(CONFIG_SUBDIR)
}

pub fn app_config_file_name(profile: &ConfigProfile) -> String {
    if profile.is_default() {
        "app.yml".to_string()
    } else {
        format!("{}-app.yml", profile.value())
    }
}

pub fn user_config_file_name(profile: &ConfigProfile) -> String {
    if profile.is_default() {
        "user.yml".to_string()
    } else {
        format!("{}-user.yml", profile.value())
    }
}

/// Load a single YAML config file, collecting unknown keys as warnings.
pub fn load_with_warnings(path: &Path) -> Result<(Config, Vec<ConfigWarning>), ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_with_warnings(&content, path)
}

pub(crate) fn parse_with_warnings(
    content: &str,
    path: &Path,
) -> Result<(Config, Vec<ConfigWarning>), ConfigError> {
    if content.trim().is_empty() {
        return Ok((Config::default(), Vec::new()));
    }

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = serde_yaml_ng::Deserializer::from_str(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ConfigError::Parse {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load and merge the app and user files of `profile` from `config_dir`.
///
/// A missing `app.yml` for the default profile yields defaults; a missing app
/// file for any other profile is `ProfileNotFound`. User files are optional.
/// The profile name must be a plain file-name segment.
pub fn load_profile(
    config_dir: &Path,
    profile: &ConfigProfile,
) -> Result<LoadedConfig, ConfigError> {
    check_profile_name(profile)?;
    let mut loaded = LoadedConfig::default();

    let app_path = config_dir.join(app_config_file_name(profile));
    if app_path.is_file() {
        let (config, warnings) = load_with_warnings(&app_path)?;
        loaded.config = config;
        loaded.warnings.extend(warnings);
        loaded.files.push(app_path);
    } else if !profile.is_default() {
        return Err(ConfigError::ProfileNotFound {
            profile: profile.value().to_string(),
            path: app_path,
        });
    } else {
        tracing::debug!(path = %app_path.display(), "no app config, using defaults");
    }

    let user_path = config_dir.join(user_config_file_name(profile));
    if user_path.is_file() {
        let (user_config, warnings) = load_with_warnings(&user_path)?;
        loaded.config = loaded.config.merge(user_config);
        loaded.warnings.extend(warnings);
        loaded.files.push(user_path);
    }

    for warning in &loaded.warnings {
        tracing::warn!(
            key = %warning.key,
            file = %warning.file.display(),
            suggestion = warning.suggestion.as_deref().unwrap_or(""),
            "unknown config key"
        );
    }

    loaded.config = with_env_overrides(loaded.config);
    Ok(loaded)
}

fn check_profile_name(profile: &ConfigProfile) -> Result<(), ConfigError> {
    check_name_segment("profile", Some(profile.value()))
        .map(|_| ())
        .map_err(|e| ConfigError::InvalidProfile {
            profile: profile.value().to_string(),
            reason: match e {
                PathResolutionError::InvalidPath { reason, .. } => reason,
                other => other.to_string(),
            },
        })
}

/// Apply environment variable overrides (BREAKDOWN_* prefix)
pub fn with_env_overrides(mut config: Config) -> Config {
    if let Ok(dir) = std::env::var(ENV_PROMPT_BASE_DIR) {
        if !dir.trim().is_empty() {
            config.app_prompt.base_dir = Some(dir);
        }
    }

    if let Ok(dir) = std::env::var(ENV_SCHEMA_BASE_DIR) {
        if !dir.trim().is_empty() {
            config.app_schema.base_dir = Some(dir);
        }
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "working_dir",
        "resource_dir",
        "app_prompt",
        "app_schema",
        "app_output",
        "base_dir",
        "params",
        "two",
        "directive_type",
        "layer_type",
        "pattern",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
