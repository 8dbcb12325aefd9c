//! Property tests for the TwoParams aggregate.

use proptest::prelude::*;

use breakdown::{ConfigProfile, DefaultPatternProvider, TwoParams};

fn directive() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["to", "summary", "defect"])
}

fn layer() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["project", "issue", "task"])
}

fn profile() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z]{0,8}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: equals is reflexive and symmetric, and agrees with the inputs.
    #[test]
    fn property_equals_is_structural(
        d1 in directive(), l1 in layer(), p1 in profile(),
        d2 in directive(), l2 in layer(), p2 in profile(),
    ) {
        let a = TwoParams::create(d1, l1, ConfigProfile::new(p1.as_str()), DefaultPatternProvider).unwrap();
        let b = TwoParams::create(d2, l2, ConfigProfile::new(p2.as_str()), DefaultPatternProvider).unwrap();
        let a_again = TwoParams::create(d1, l1, ConfigProfile::new(p1.as_str()), DefaultPatternProvider).unwrap();

        prop_assert!(a.equals(&a));
        prop_assert!(a.equals(&a_again));
        prop_assert_eq!(a.equals(&b), b.equals(&a));

        let same_inputs = d1 == d2 && l1 == l2 && a.profile() == b.profile();
        prop_assert_eq!(a.equals(&b), same_inputs);
    }

    /// PROPERTY: Derived paths never change the aggregate and validate keeps passing.
    #[test]
    fn property_derivations_keep_aggregate_valid(d in directive(), l in layer()) {
        let params = TwoParams::create(d, l, ConfigProfile::default(), DefaultPatternProvider).unwrap();
        let before = params.clone();

        let _ = params.prompt_path(None);
        let _ = params.schema_path();
        let _ = params.to_command();

        prop_assert!(params.validate().is_ok());
        prop_assert!(params.equals(&before));
        prop_assert_eq!(params.command_string(), format!("{} {}", d, l));
    }
}
