//! Errors raised while turning raw tokens into typed parameters

use std::fmt;

use super::TypePattern;

/// Which of the two positional parameters a value belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamKind {
    Directive,
    Layer,
}

impl ParamKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParamKind::Directive => "directive",
            ParamKind::Layer => "layer",
        }
    }
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure to create a `DirectiveType` or `LayerType`
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TypeCreationError {
    /// The raw token was empty; rejected before any pattern matching
    #[error("{kind} must not be empty")]
    EmptyInput { kind: ParamKind },

    /// No pattern is configured for this kind under the active profile
    #[error("no {kind} pattern is configured for the active profile")]
    PatternNotFound { kind: ParamKind },

    /// The token did not match the configured pattern
    #[error("{kind} '{value}' does not match pattern '{pattern}'")]
    ValidationFailed {
        kind: ParamKind,
        value: String,
        pattern: String,
    },

    /// The configured pattern could not be compiled
    #[error("{kind} pattern '{pattern}' is invalid: {cause}")]
    InvalidPattern {
        kind: ParamKind,
        pattern: String,
        cause: String,
    },
}

impl TypeCreationError {
    pub fn kind(&self) -> ParamKind {
        match self {
            TypeCreationError::EmptyInput { kind }
            | TypeCreationError::PatternNotFound { kind }
            | TypeCreationError::ValidationFailed { kind, .. }
            | TypeCreationError::InvalidPattern { kind, .. } => *kind,
        }
    }
}

/// Smart-constructor check shared by directive and layer creation.
///
/// Empty input never reaches the regex engine.
pub(crate) fn check_token(
    kind: ParamKind,
    value: &str,
    pattern: &TypePattern,
) -> Result<(), TypeCreationError> {
    if value.is_empty() {
        return Err(TypeCreationError::EmptyInput { kind });
    }
    if !pattern.test(value) {
        return Err(TypeCreationError::ValidationFailed {
            kind,
            value: value.to_string(),
            pattern: pattern.source().to_string(),
        });
    }
    Ok(())
}
