//! Config profile value object - names which configuration variant is active
//!
//! Profiles select the config files (`app.yml` for `default`, `{name}-app.yml`
//! otherwise) and therefore the validation patterns.

use std::fmt;

use serde::Serialize;

/// A named configuration variant (e.g. `default`, `production`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ConfigProfile(String);

impl ConfigProfile {
    /// Name of the profile used when none is given
    pub const DEFAULT_NAME: &'static str = "default";

    /// Create a profile from a name. Blank names normalize to `default`.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            Self::default()
        } else if trimmed.len() == name.len() {
            Self(name)
        } else {
            Self(trimmed.to_string())
        }
    }

    /// Normalize the value of a `--config` CLI option.
    ///
    /// Absent, empty and whitespace-only values all map to `default`.
    pub fn from_cli_option(option: Option<&str>) -> Self {
        match option {
            Some(name) => Self::new(name),
            None => Self::default(),
        }
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    pub fn is_default(&self) -> bool {
        self.0 == Self::DEFAULT_NAME
    }
}

impl Default for ConfigProfile {
    fn default() -> Self {
        Self(Self::DEFAULT_NAME.to_string())
    }
}

impl fmt::Display for ConfigProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ConfigProfile {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ConfigProfile {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
