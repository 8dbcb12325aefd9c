//! Pattern providers backed by configuration or built-in defaults.

use crate::config::Config;
use crate::domain::ports::{PatternStatus, TypePatternProvider};
use crate::domain::value_objects::{ParamKind, TypePattern};

/// Built-in directive pattern
pub const DEFAULT_DIRECTIVE_PATTERN: &str = "^(to|summary|defect)$";
/// Built-in layer pattern
pub const DEFAULT_LAYER_PATTERN: &str = "^(project|issue|task)$";

/// Provider returning the built-in patterns
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultPatternProvider;

impl TypePatternProvider for DefaultPatternProvider {
    fn directive_pattern(&self) -> Option<TypePattern> {
        TypePattern::create(DEFAULT_DIRECTIVE_PATTERN)
    }

    fn layer_pattern(&self) -> Option<TypePattern> {
        TypePattern::create(DEFAULT_LAYER_PATTERN)
    }
}

#[derive(Debug, Clone)]
enum Slot {
    Compiled(TypePattern),
    Missing,
    Malformed { source: String, cause: String },
}

impl Slot {
    fn compile(source: Option<&str>) -> Self {
        match source {
            None => Slot::Missing,
            Some(source) => match TypePattern::try_create(source) {
                Ok(pattern) => Slot::Compiled(pattern),
                Err(e) => Slot::Malformed {
                    source: source.to_string(),
                    cause: e.to_string(),
                },
            },
        }
    }

    fn pattern(&self) -> Option<TypePattern> {
        match self {
            Slot::Compiled(pattern) => Some(pattern.clone()),
            Slot::Missing | Slot::Malformed { .. } => None,
        }
    }

    fn status(&self) -> PatternStatus {
        match self {
            Slot::Compiled(_) => PatternStatus::Configured,
            Slot::Missing => PatternStatus::Missing,
            Slot::Malformed { source, cause } => PatternStatus::Malformed {
                source: source.clone(),
                cause: cause.clone(),
            },
        }
    }
}

/// Provider reading `params.two.{directive_type,layer_type}.pattern`.
///
/// Patterns are compiled once, when the provider is built.
#[derive(Debug, Clone)]
pub struct ConfigPatternProvider {
    directive: Slot,
    layer: Slot,
}

impl ConfigPatternProvider {
    pub fn from_config(config: &Config) -> Self {
        Self {
            directive: Slot::compile(config.directive_pattern()),
            layer: Slot::compile(config.layer_pattern()),
        }
    }

    /// Like [`from_config`](Self::from_config), but unset patterns fall back
    /// to the built-in ones. Malformed patterns stay malformed.
    pub fn from_config_or_default(config: &Config) -> Self {
        let directive = config
            .directive_pattern()
            .unwrap_or(DEFAULT_DIRECTIVE_PATTERN);
        let layer = config.layer_pattern().unwrap_or(DEFAULT_LAYER_PATTERN);
        if config.directive_pattern().is_none() || config.layer_pattern().is_none() {
            tracing::debug!("using built-in patterns for unset config patterns");
        }
        Self {
            directive: Slot::compile(Some(directive)),
            layer: Slot::compile(Some(layer)),
        }
    }

    fn slot(&self, kind: ParamKind) -> &Slot {
        match kind {
            ParamKind::Directive => &self.directive,
            ParamKind::Layer => &self.layer,
        }
    }
}

impl TypePatternProvider for ConfigPatternProvider {
    fn directive_pattern(&self) -> Option<TypePattern> {
        self.directive.pattern()
    }

    fn layer_pattern(&self) -> Option<TypePattern> {
        self.layer.pattern()
    }

    fn pattern_status(&self, kind: ParamKind) -> PatternStatus {
        self.slot(kind).status()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::services::TypeFactory;
    use crate::domain::value_objects::TypeCreationError;

    #[test]
    fn default_provider_patterns() {
        let provider = DefaultPatternProvider;
        let directive = provider.directive_pattern().unwrap();
        let layer = provider.layer_pattern().unwrap();
        for d in ["to", "summary", "defect"] {
            assert!(directive.test(d));
        }
        for l in ["project", "issue", "task"] {
            assert!(layer.test(l));
        }
        assert!(!directive.test("find"));
    }

    #[test]
    fn config_provider_reads_patterns() {
        let config = Config::with_patterns("^(find|to)$", "^(bugs|task)$");
        let provider = ConfigPatternProvider::from_config(&config);

        assert_eq!(provider.directive_pattern().unwrap().source(), "^(find|to)$");
        assert!(provider.layer_pattern().unwrap().test("bugs"));
    }

    #[test]
    fn config_provider_missing_patterns() {
        let provider = ConfigPatternProvider::from_config(&Config::default());

        assert!(provider.directive_pattern().is_none());
        assert_eq!(
            provider.pattern_status(ParamKind::Layer),
            PatternStatus::Missing
        );
    }

    #[test]
    fn config_provider_malformed_pattern() {
        let config = Config::with_patterns("^(to|summary", "^task$");
        let provider = ConfigPatternProvider::from_config(&config);

        assert!(provider.directive_pattern().is_none());
        assert!(matches!(
            provider.pattern_status(ParamKind::Directive),
            PatternStatus::Malformed { ref source, .. } if source == "^(to|summary"
        ));
        assert!(provider.pattern_status(ParamKind::Layer).is_configured());
    }

    #[test]
    fn factory_distinguishes_missing_from_malformed() {
        let malformed = TypeFactory::new(ConfigPatternProvider::from_config(
            &Config::with_patterns("[", "^task$"),
        ));
        assert!(matches!(
            malformed.create_directive("to"),
            Err(TypeCreationError::InvalidPattern { .. })
        ));

        let missing = TypeFactory::new(ConfigPatternProvider::from_config(&Config::default()));
        assert!(matches!(
            missing.create_directive("to"),
            Err(TypeCreationError::PatternNotFound { .. })
        ));
    }

    #[test]
    fn or_default_fills_unset_patterns_only() {
        let mut config = Config::default();
        config.params.two.layer_type.pattern = Some("^(bugs)$".to_string());
        let provider = ConfigPatternProvider::from_config_or_default(&config);

        assert_eq!(
            provider.directive_pattern().unwrap().source(),
            DEFAULT_DIRECTIVE_PATTERN
        );
        assert_eq!(provider.layer_pattern().unwrap().source(), "^(bugs)$");
    }
}
