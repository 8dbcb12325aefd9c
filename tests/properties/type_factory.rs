//! Property tests for pattern-driven type creation.

use proptest::prelude::*;

use breakdown::config::Config;
use breakdown::{
    ConfigPatternProvider, ConfigProfile, DefaultPatternProvider, ParamKind, TwoParams,
    TwoParamsError, TypeCreationError, TypeFactory,
};

fn token() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-z0-9_-]{0,15}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: The factory never panics on arbitrary input.
    #[test]
    fn property_factory_never_panics(s in "(?s).{0,128}") {
        let factory = TypeFactory::new(DefaultPatternProvider);
        let _ = factory.create_directive(&s);
        let _ = factory.create_layer(&s);
        let _ = factory.create_both(&s, &s);
    }

    /// PROPERTY: A token accepted by its pattern is echoed back unchanged.
    #[test]
    fn property_accepted_value_is_unchanged(value in token()) {
        let config = Config::with_patterns(format!("^{}$", regex::escape(&value)), ".+");
        let factory = TypeFactory::new(ConfigPatternProvider::from_config(&config));

        let directive = factory.create_directive(&value).unwrap();
        prop_assert_eq!(directive.value(), value.as_str());

        let layer = factory.create_layer(&value).unwrap();
        prop_assert_eq!(layer.value(), value.as_str());
    }

    /// PROPERTY: An empty token fails for its own kind, whatever the other token is.
    #[test]
    fn property_empty_input_blames_its_own_kind(other in "(?s).{0,32}") {
        let directive = TwoParams::create("", &other, ConfigProfile::default(), DefaultPatternProvider)
            .unwrap_err();
        prop_assert!(matches!(directive, TwoParamsError::InvalidDirective(_)));
        prop_assert_eq!(directive.cause().kind(), ParamKind::Directive);

        let layer = TwoParams::create("to", "", ConfigProfile::default(), DefaultPatternProvider)
            .unwrap_err();
        prop_assert_eq!(
            layer,
            TwoParamsError::InvalidLayer(TypeCreationError::EmptyInput { kind: ParamKind::Layer })
        );
    }

    /// PROPERTY: Rejections carry the offending value and the pattern source.
    #[test]
    fn property_rejection_reports_value_and_pattern(value in token()) {
        prop_assume!(!matches!(value.as_str(), "to" | "summary" | "defect"));
        let factory = TypeFactory::new(DefaultPatternProvider);

        match factory.create_directive(&value) {
            Err(TypeCreationError::ValidationFailed { kind, value: got, pattern }) => {
                prop_assert_eq!(kind, ParamKind::Directive);
                prop_assert_eq!(got, value);
                prop_assert_eq!(pattern, "^(to|summary|defect)$");
            }
            other => prop_assert!(false, "unexpected result: {:?}", other),
        }
    }
}
