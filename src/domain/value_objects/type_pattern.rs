//! Type Pattern Value Object
//!
//! A compiled validation rule for directive and layer tokens, paired with the
//! source string it was compiled from.

use std::fmt;

use regex::Regex;

/// Compiled validation pattern
///
/// Only constructible through [`TypePattern::create`] (or
/// [`TypePattern::try_create`] when the compile error matters), so an
/// existing value always holds a usable regex.
#[derive(Debug, Clone)]
pub struct TypePattern {
    regex: Regex,
}

impl TypePattern {
    /// Compile `source`, returning `None` if it is not a valid pattern
    pub fn create(source: &str) -> Option<Self> {
        Self::try_create(source).ok()
    }

    /// Compile `source`, keeping the compile error for diagnostics
    pub fn try_create(source: &str) -> Result<Self, regex::Error> {
        Regex::new(source).map(|regex| Self { regex })
    }

    /// Returns true if `value` matches the pattern
    pub fn test(&self, value: &str) -> bool {
        self.regex.is_match(value)
    }

    /// The source string the pattern was compiled from
    pub fn source(&self) -> &str {
        self.regex.as_str()
    }
}

impl PartialEq for TypePattern {
    fn eq(&self, other: &Self) -> bool {
        self.source() == other.source()
    }
}

impl Eq for TypePattern {}

impl fmt::Display for TypePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.source())
    }
}
