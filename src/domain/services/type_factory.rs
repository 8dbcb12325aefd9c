//! Type factory
//!
//! Turns raw directive/layer tokens into validated value objects using the
//! patterns supplied by an injected [`TypePatternProvider`].

use crate::domain::ports::{PatternStatus, TypePatternProvider};
use crate::domain::value_objects::{
    ConfigProfile, DirectiveType, LayerType, ParamKind, TypeCreationError, TypePattern,
};

/// Which patterns the provider can currently resolve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PatternAvailability {
    pub directive: bool,
    pub layer: bool,
    pub both: bool,
}

/// A directive and layer validated together
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypePair {
    pub directive: DirectiveType,
    pub layer: LayerType,
}

#[derive(Debug, Clone)]
pub struct TypeFactory<P> {
    provider: P,
    profile: ConfigProfile,
}

impl<P: TypePatternProvider> TypeFactory<P> {
    /// Factory validating under the `default` profile
    pub fn new(provider: P) -> Self {
        Self::with_profile(provider, ConfigProfile::default())
    }

    pub fn with_profile(provider: P, profile: ConfigProfile) -> Self {
        Self { provider, profile }
    }

    pub fn profile(&self) -> &ConfigProfile {
        &self.profile
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn create_directive(&self, raw: &str) -> Result<DirectiveType, TypeCreationError> {
        let pattern = self.require_pattern(ParamKind::Directive)?;
        DirectiveType::create(raw, &pattern, &self.profile)
    }

    pub fn create_layer(&self, raw: &str) -> Result<LayerType, TypeCreationError> {
        let pattern = self.require_pattern(ParamKind::Layer)?;
        LayerType::create(raw, &pattern, &self.profile)
    }

    /// Validate directive then layer; the directive error wins when both are bad.
    pub fn create_both(
        &self,
        raw_directive: &str,
        raw_layer: &str,
    ) -> Result<TypePair, TypeCreationError> {
        let directive = self.create_directive(raw_directive)?;
        let layer = self.create_layer(raw_layer)?;
        Ok(TypePair { directive, layer })
    }

    pub fn pattern_availability(&self) -> PatternAvailability {
        let directive = self.provider.directive_pattern().is_some();
        let layer = self.provider.layer_pattern().is_some();
        PatternAvailability {
            directive,
            layer,
            both: directive && layer,
        }
    }

    fn require_pattern(&self, kind: ParamKind) -> Result<TypePattern, TypeCreationError> {
        if let Some(pattern) = self.provider.pattern(kind) {
            return Ok(pattern);
        }

        match self.provider.pattern_status(kind) {
            PatternStatus::Malformed { source, cause } => {
                tracing::debug!(%kind, pattern = %source, "configured pattern does not compile");
                Err(TypeCreationError::InvalidPattern {
                    kind,
                    pattern: source,
                    cause,
                })
            }
            // A provider that claims a pattern but returned none is treated as missing.
            PatternStatus::Missing | PatternStatus::Configured => {
                tracing::debug!(%kind, profile = %self.profile, "no pattern configured");
                Err(TypeCreationError::PatternNotFound { kind })
            }
        }
    }
}
