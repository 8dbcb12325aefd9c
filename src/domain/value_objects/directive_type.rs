//! Directive value object - the first positional token (`to`, `summary`, `defect`, ...)

use std::fmt;

use serde::{Serialize, Serializer};

use super::type_error::check_token;
use super::{ConfigProfile, ParamKind, TypeCreationError, TypePattern};

/// A directive token validated against the active profile's pattern.
///
/// Created only through `TypeFactory`. The profile is kept for traceability;
/// the pattern lets the aggregate re-validate without a provider at hand.
#[derive(Debug, Clone)]
pub struct DirectiveType {
    value: String,
    profile: ConfigProfile,
    pattern: TypePattern,
}

impl DirectiveType {
    pub(crate) fn create(
        value: &str,
        pattern: &TypePattern,
        profile: &ConfigProfile,
    ) -> Result<Self, TypeCreationError> {
        check_token(ParamKind::Directive, value, pattern)?;
        Ok(Self {
            value: value.to_string(),
            profile: profile.clone(),
            pattern: pattern.clone(),
        })
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Profile this directive was validated under
    pub fn profile(&self) -> &ConfigProfile {
        &self.profile
    }

    /// Pattern this directive was validated against
    pub fn pattern(&self) -> &TypePattern {
        &self.pattern
    }

    /// Re-run the smart-constructor checks against the stored pattern
    pub fn revalidate(&self) -> Result<(), TypeCreationError> {
        check_token(ParamKind::Directive, &self.value, &self.pattern)
    }
}

impl PartialEq for DirectiveType {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && self.profile == other.profile
    }
}

impl Eq for DirectiveType {}

impl fmt::Display for DirectiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl AsRef<str> for DirectiveType {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl Serialize for DirectiveType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.value)
    }
}
