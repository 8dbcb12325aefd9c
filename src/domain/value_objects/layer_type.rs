//! Layer value object - the second positional token (`project`, `issue`, `task`, ...)
//!
//! Layers in the standard hierarchy carry a depth:
//! - `project` = 1
//! - `issue` = 2
//! - `task` = 3
//!
//! Any other value accepted by the configured pattern has depth 0.

use std::fmt;

use serde::{Serialize, Serializer};

use super::type_error::check_token;
use super::{ConfigProfile, ParamKind, TypeCreationError, TypePattern};

/// Layer names that make up the standard hierarchy, shallowest first
pub const STANDARD_LAYERS: [&str; 3] = ["project", "issue", "task"];

/// A layer token validated against the active profile's pattern.
#[derive(Debug, Clone)]
pub struct LayerType {
    value: String,
    profile: ConfigProfile,
    pattern: TypePattern,
}

impl LayerType {
    pub(crate) fn create(
        value: &str,
        pattern: &TypePattern,
        profile: &ConfigProfile,
    ) -> Result<Self, TypeCreationError> {
        check_token(ParamKind::Layer, value, pattern)?;
        Ok(Self {
            value: value.to_string(),
            profile: profile.clone(),
            pattern: pattern.clone(),
        })
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn profile(&self) -> &ConfigProfile {
        &self.profile
    }

    pub fn pattern(&self) -> &TypePattern {
        &self.pattern
    }

    /// Depth in the standard hierarchy, 0 for non-standard layers
    pub fn hierarchy_level(&self) -> u8 {
        match self.value.as_str() {
            "project" => 1,
            "issue" => 2,
            "task" => 3,
            _ => 0,
        }
    }

    /// Returns true for `project`, `issue` and `task`
    pub fn is_standard_hierarchy(&self) -> bool {
        self.hierarchy_level() > 0
    }

    pub fn revalidate(&self) -> Result<(), TypeCreationError> {
        check_token(ParamKind::Layer, &self.value, &self.pattern)
    }
}

impl PartialEq for LayerType {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && self.profile == other.profile
    }
}

impl Eq for LayerType {}

impl fmt::Display for LayerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl AsRef<str> for LayerType {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl Serialize for LayerType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.value)
    }
}
