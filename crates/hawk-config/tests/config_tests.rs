// SPDX-FileCopyrightText: 2026 Hawk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the Hawk configuration system.

use std::io::Write;

use hawk_config::diagnostic::ConfigError;
use hawk_config::model::HawkConfig;
use hawk_config::{load_and_validate_path, load_and_validate_str, load_config_from_str};
use hawk_core::Category;

/// Valid TOML with every section deserializes successfully.
#[test]
fn valid_toml_deserializes_into_hawk_config() {
    let toml = r#"
[agent]
name = "hawk-test"
log_level = "debug"

[routing]
fallback_category = "analytics"
safety_keywords = ["crowd", "exit"]
analytics_keywords = ["trend"]
alert_keywords = ["siren", "urgent"]

[coordinator]
model = "gemini-test"
specialist_timeout_secs = 5
keyword_routing_only = true

[specialists.alerting]
model = "gemini-alert"
priority_level = 2
"#;

    let config = load_config_from_str(toml).expect("valid TOML should deserialize");
    assert_eq!(config.agent.name, "hawk-test");
    assert_eq!(config.agent.log_level, "debug");
    assert_eq!(config.routing.fallback_category, Category::Analytics);
    assert_eq!(config.routing.safety_keywords, vec!["crowd", "exit"]);
    assert_eq!(config.routing.alert_keywords, vec!["siren", "urgent"]);
    assert_eq!(config.coordinator.model, "gemini-test");
    assert_eq!(config.coordinator.specialist_timeout_secs, 5);
    assert!(config.coordinator.keyword_routing_only);
    assert_eq!(config.specialists.alerting.model, "gemini-alert");
    assert_eq!(config.specialists.alerting.priority_level, 2);
}

/// A partial specialist table is merged over the built-in profile.
#[test]
fn partial_specialist_table_keeps_builtin_fields() {
    let toml = r#"
[specialists.safety]
model = "gemini-safety"
"#;

    let config = load_config_from_str(toml).expect("partial table should merge");
    let defaults = HawkConfig::default();
    assert_eq!(config.specialists.safety.model, "gemini-safety");
    assert_eq!(config.specialists.safety.name, defaults.specialists.safety.name);
    assert_eq!(
        config.specialists.safety.system_instruction,
        defaults.specialists.safety.system_instruction
    );
}

/// An empty document yields the shipped routing rules.
#[test]
fn missing_sections_use_defaults() {
    let config = load_config_from_str("").expect("empty TOML should use defaults");

    assert_eq!(config.agent.name, "hawk");
    assert_eq!(config.agent.log_level, "info");
    assert_eq!(config.routing.fallback_category, Category::Safety);
    assert_eq!(config.routing.safety_keywords.len(), 12);
    assert_eq!(config.routing.analytics_keywords.len(), 10);
    assert_eq!(config.routing.alert_keywords.len(), 9);
    assert!(config.routing.safety_keywords.contains(&"emergency".to_string()));
    assert!(config.routing.alert_keywords.contains(&"emergency".to_string()));
    assert_eq!(config.coordinator.specialist_timeout_secs, 30);
    assert!(!config.coordinator.keyword_routing_only);
    assert_eq!(config.specialists.safety.priority_level, 1);
    assert_eq!(config.specialists.analytics.priority_level, 2);
}

/// Env overrides land on the dotted path produced by the key mapping.
#[test]
fn env_style_override_sets_fallback_category() {
    use figment::{
        providers::{Format, Serialized, Toml},
        Figment,
    };

    let config: HawkConfig = Figment::new()
        .merge(Serialized::defaults(HawkConfig::default()))
        .merge(Toml::string("[routing]\nfallback_category = \"safety\"\n"))
        .merge((
            hawk_config::loader::map_env_key("routing_fallback_category"),
            "alerting",
        ))
        .extract()
        .expect("should merge override");

    assert_eq!(config.routing.fallback_category, Category::Alerting);
}

/// Unknown key in [routing] gets a suggestion.
#[test]
fn unknown_routing_key_suggests_correction() {
    let toml = r#"
[routing]
alert_keyword = ["siren"]
"#;

    let errors = load_and_validate_str(toml).expect_err("should reject unknown key");
    let found = errors.iter().any(|e| {
        matches!(e, ConfigError::UnknownKey { key, suggestion, valid_keys, .. } if {
            key == "alert_keyword"
                && suggestion.as_deref() == Some("alert_keywords")
                && valid_keys.contains("fallback_category")
        })
    });
    assert!(found, "expected UnknownKey with suggestion, got: {errors:?}");
}

/// Unknown category name gets a value suggestion.
#[test]
fn unknown_category_suggests_variant() {
    let toml = r#"
[routing]
fallback_category = "analytic"
"#;

    let errors = load_and_validate_str(toml).expect_err("should reject unknown category");
    let found = errors.iter().any(|e| {
        matches!(e, ConfigError::UnknownValue { value, suggestion, .. } if {
            value == "analytic" && suggestion.as_deref() == Some("analytics")
        })
    });
    assert!(found, "expected UnknownValue with suggestion, got: {errors:?}");
}

/// Unexpected top-level section is rejected.
#[test]
fn deny_unknown_fields_at_top_level() {
    let err = load_config_from_str("[vector_index]\ndimensions = 512\n")
        .expect_err("unknown top-level section should be rejected");
    let err_str = err.to_string();
    assert!(
        err_str.contains("unknown field") || err_str.contains("vector_index"),
        "error should mention unknown field, got: {err_str}"
    );
}

/// Wrong value type is reported as InvalidType.
#[test]
fn invalid_type_is_reported() {
    let toml = r#"
[coordinator]
specialist_timeout_secs = "soon"
"#;

    let errors = load_and_validate_str(toml).expect_err("should reject invalid type");
    assert!(
        errors
            .iter()
            .any(|e| matches!(e, ConfigError::InvalidType { .. })),
        "got: {errors:?}"
    );
}

/// Semantic validation runs after a successful parse.
#[test]
fn validation_runs_after_parse() {
    let toml = r#"
[routing]
safety_keywords = ["crowd", "Crowd"]
"#;

    let errors = load_and_validate_str(toml).expect_err("uppercase term should fail");
    assert!(errors.iter().any(|e| {
        matches!(e, ConfigError::Validation { message } if message.contains("`Crowd` must be lowercase"))
    }));
}

/// An explicit file path is honoured.
#[test]
fn load_from_explicit_path() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "[agent]\nname = \"from-file\"").expect("write config");

    let config = load_and_validate_path(file.path()).expect("file config should validate");
    assert_eq!(config.agent.name, "from-file");
}

/// ConfigError renders through miette's graphical handler.
#[test]
fn config_error_renders_with_miette() {
    use miette::{Diagnostic, GraphicalReportHandler};

    let error = ConfigError::UnknownValue {
        key: "routing.fallback_category".to_string(),
        value: "analytic".to_string(),
        suggestion: Some("analytics".to_string()),
        valid_values: "safety, analytics, alerting".to_string(),
    };

    assert!(error.code().is_some());
    let help = error.help().expect("help text").to_string();
    assert!(help.contains("did you mean `analytics`"), "got: {help}");

    let mut buf = String::new();
    GraphicalReportHandler::new()
        .render_report(&mut buf, &error)
        .expect("should render");
    assert!(buf.contains("analytic"));
}

/// The effective config serializes back to TOML.
#[test]
fn config_round_trips_through_toml() {
    let config = HawkConfig::default();
    let rendered = toml::to_string(&config).expect("serialize");
    let parsed = load_config_from_str(&rendered).expect("reparse");
    assert_eq!(parsed, config);
}
