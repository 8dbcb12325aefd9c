use super::*;
use crate::domain::value_objects::{ParamKind, TypePattern};
use crate::infrastructure::DefaultPatternProvider;

struct Permissive;

impl TypePatternProvider for Permissive {
    fn directive_pattern(&self) -> Option<TypePattern> {
        TypePattern::create("^[a-z]+$")
    }

    fn layer_pattern(&self) -> Option<TypePattern> {
        TypePattern::create("^[a-z]+$")
    }
}

fn create(directive: &str, layer: &str) -> Result<TwoParams, TwoParamsError> {
    TwoParams::create(directive, layer, ConfigProfile::default(), DefaultPatternProvider)
}

#[test]
fn create_echoes_input() {
    let params = create("summary", "issue").unwrap();
    assert_eq!(params.directive().value(), "summary");
    assert_eq!(params.layer().value(), "issue");
    assert!(params.profile().is_default());
}

#[test]
fn empty_directive_is_invalid_directive() {
    let err = create("", "project").unwrap_err();
    assert_eq!(
        err,
        TwoParamsError::InvalidDirective(TypeCreationError::EmptyInput {
            kind: ParamKind::Directive
        })
    );
}

#[test]
fn empty_layer_is_invalid_layer() {
    let err = create("to", "").unwrap_err();
    assert!(matches!(err, TwoParamsError::InvalidLayer(_)));
    assert_eq!(err.cause().kind(), ParamKind::Layer);
}

#[test]
fn directive_error_wins_when_both_invalid() {
    let err = create("", "").unwrap_err();
    assert!(matches!(err, TwoParamsError::InvalidDirective(_)));
}

#[test]
fn create_with_cli_option_normalizes_profile() {
    for option in [None, Some(""), Some("  ")] {
        let params =
            TwoParams::create_with_cli_option("to", "task", option, DefaultPatternProvider)
                .unwrap();
        assert!(params.profile().is_default(), "{option:?}");
    }

    let params = TwoParams::create_with_cli_option(
        "to",
        "task",
        Some("production"),
        DefaultPatternProvider,
    )
    .unwrap();
    assert_eq!(params.profile().value(), "production");
    assert_eq!(params.directive().profile().value(), "production");
}

#[test]
fn equals_is_structural() {
    let a = create("to", "project").unwrap();
    let b = create("to", "project").unwrap();
    assert!(a.equals(&a));
    assert!(a.equals(&b));
    assert!(b.equals(&a));

    assert!(!a.equals(&create("summary", "project").unwrap()));
    assert!(!a.equals(&create("to", "issue").unwrap()));

    let other_profile =
        TwoParams::create("to", "project", ConfigProfile::new("prod"), DefaultPatternProvider)
            .unwrap();
    assert!(!a.equals(&other_profile));
}

#[test]
fn validate_succeeds_after_derived_operations() {
    let params = create("defect", "task").unwrap();
    let _ = params.resolve_prompt_file_path(Path::new("/prompts"), Some("issue"));
    let _ = params.to_command();
    assert!(params.validate().is_ok());
    assert!(params.validate().is_ok());
    assert_eq!(params.directive().value(), "defect");
    assert_eq!(params.layer().value(), "task");
}

#[test]
fn command_string() {
    assert_eq!(create("to", "issue").unwrap().command_string(), "to issue");
}

#[test]
fn debug_string_snapshot() {
    let params = create("summary", "project").unwrap();
    insta::assert_snapshot!(
        params.debug_string(),
        @r#"TwoParams(directive="summary", layer="project", profile="default")"#
    );
}

#[test]
fn to_command_captures_fresh_timestamp() {
    let params = create("to", "project").unwrap();
    let before = Utc::now();
    let command = params.to_command();

    assert_eq!(command.command, "breakdown");
    assert_eq!(command.directive, "to");
    assert_eq!(command.layer, "project");
    assert_eq!(command.profile, "default");
    assert!(command.timestamp >= before);

    let later = params.to_command();
    assert!(later.timestamp >= command.timestamp);
}

#[test]
fn to_command_serializes() {
    let command = create("to", "task").unwrap().to_command();
    let json = serde_json::to_value(&command).unwrap();
    assert_eq!(json["command"], "breakdown");
    assert_eq!(json["layer"], "task");
    assert!(json["timestamp"].is_string());
}

#[test]
fn prompt_and_schema_paths() {
    let params = create("to", "project").unwrap();

    assert_eq!(
        params.prompt_path(None),
        Path::new("to").join("project").join("f_project.md")
    );
    assert_eq!(
        params.prompt_path(Some("issue")),
        Path::new("to").join("project").join("f_issue.md")
    );
    assert_eq!(
        params.schema_path(),
        Path::new("to").join("project").join("f_project.schema.json")
    );
    assert_eq!(
        params.resolve_schema_file_path(Path::new("/schema")),
        Path::new("/schema")
            .join("to")
            .join("project")
            .join("f_project.schema.json")
    );
}

#[test]
fn path_helpers_are_idempotent() {
    let params = create("summary", "task").unwrap();
    let first = params.resolve_prompt_file_path(Path::new("/p"), None);
    for _ in 0..5 {
        assert_eq!(params.resolve_prompt_file_path(Path::new("/p"), None), first);
    }
}

#[test]
fn non_standard_layer_with_custom_patterns() {
    let params = TwoParams::create("find", "bugs", ConfigProfile::default(), Permissive).unwrap();
    assert_eq!(params.layer().hierarchy_level(), 0);
    assert!(!params.layer().is_standard_hierarchy());
}

#[test]
fn error_display() {
    let err = create("explode", "project").unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid directive: directive 'explode' does not match pattern '^(to|summary|defect)$'"
    );
}
