//! Pattern provider port - supplies validation patterns for directive and layer tokens
//!
//! Providers are injected into `TypeFactory`; there is no global registry.

use crate::domain::value_objects::{ParamKind, TypePattern};

/// Why a provider did or did not yield a pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternStatus {
    /// A usable pattern is available
    Configured,
    /// Nothing is configured for this kind
    Missing,
    /// A source string is configured but does not compile
    Malformed { source: String, cause: String },
}

impl PatternStatus {
    pub fn is_configured(&self) -> bool {
        matches!(self, PatternStatus::Configured)
    }
}

/// Supplies the two compiled validation patterns for the active profile.
///
/// `None` is a normal answer, not a failure. Implementations that can tell
/// "not configured" apart from "malformed" override [`pattern_status`].
///
/// [`pattern_status`]: TypePatternProvider::pattern_status
pub trait TypePatternProvider: Send + Sync {
    fn directive_pattern(&self) -> Option<TypePattern>;

    fn layer_pattern(&self) -> Option<TypePattern>;

    /// Pattern for `kind`
    fn pattern(&self, kind: ParamKind) -> Option<TypePattern> {
        match kind {
            ParamKind::Directive => self.directive_pattern(),
            ParamKind::Layer => self.layer_pattern(),
        }
    }

    /// Diagnose the pattern for `kind`.
    ///
    /// The default cannot see past `Option`, so it reports `Missing` for every `None`.
    fn pattern_status(&self, kind: ParamKind) -> PatternStatus {
        match self.pattern(kind) {
            Some(_) => PatternStatus::Configured,
            None => PatternStatus::Missing,
        }
    }
}

impl<P: TypePatternProvider + ?Sized> TypePatternProvider for &P {
    fn directive_pattern(&self) -> Option<TypePattern> {
        (**self).directive_pattern()
    }

    fn layer_pattern(&self) -> Option<TypePattern> {
        (**self).layer_pattern()
    }

    fn pattern_status(&self, kind: ParamKind) -> PatternStatus {
        (**self).pattern_status(kind)
    }
}
