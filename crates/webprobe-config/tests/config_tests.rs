// SPDX-FileCopyrightText: 2026 Webprobe Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the Webprobe configuration system.

use std::io::Write;

use miette::Diagnostic;
use webprobe_config::diagnostic::ConfigError;
use webprobe_config::model::{ProbeConfig, WebprobeConfig};
use webprobe_config::{load_and_validate_str, load_config_from_path, load_config_from_str};

#[test]
fn empty_toml_yields_documented_defaults() {
    let config = load_config_from_str("").expect("empty config should deserialize");
    assert_eq!(config, WebprobeConfig::default());
    assert_eq!(config.probe.connect_timeout_secs, 2);
    assert_eq!(config.probe.read_timeout_secs, 5);
    assert_eq!(config.probe.max_redirect_hops, 4);
    assert!(config.probe.user_agent.starts_with("webprobe/"));
}

#[test]
fn full_probe_section_deserializes() {
    let toml = r#"
[probe]
connect_timeout_secs = 1
read_timeout_secs = 3
max_redirect_hops = 6
user_agent = "site-audit/1.0"
"#;

    let config = load_config_from_str(toml).expect("valid TOML should deserialize");
    assert_eq!(
        config.probe,
        ProbeConfig {
            connect_timeout_secs: 1,
            read_timeout_secs: 3,
            max_redirect_hops: 6,
            user_agent: "site-audit/1.0".to_string(),
        }
    );
}

#[test]
fn unknown_key_in_probe_gets_suggestion() {
    let toml = r#"
[probe]
max_redirect_hop = 3
"#;

    let errors = load_and_validate_str(toml).expect_err("should reject unknown field");
    assert_eq!(errors.len(), 1);
    match &errors[0] {
        ConfigError::UnknownKey {
            key, suggestion, ..
        } => {
            assert_eq!(key, "max_redirect_hop");
            assert_eq!(suggestion.as_deref(), Some("max_redirect_hops"));
        }
        other => panic!("expected UnknownKey, got {other:?}"),
    }
}

#[test]
fn unknown_section_is_rejected() {
    let toml = r#"
[pagespeed]
api_key = "abc"
"#;

    let err = load_config_from_str(toml).expect_err("unknown section should fail");
    let err_str = err.to_string();
    assert!(
        err_str.contains("unknown field") || err_str.contains("pagespeed"),
        "error should mention the unknown section, got: {err_str}"
    );
}

#[test]
fn wrong_type_is_reported_as_invalid_type() {
    let toml = r#"
[probe]
read_timeout_secs = "five"
"#;

    let errors = load_and_validate_str(toml).expect_err("string timeout should fail");
    assert!(
        errors
            .iter()
            .any(|e| matches!(e, ConfigError::InvalidType { key, .. } if key.contains("read_timeout_secs"))),
        "got: {errors:?}"
    );
}

#[test]
fn validation_rejects_zero_hops() {
    let toml = r#"
[probe]
max_redirect_hops = 0
"#;

    let errors = load_and_validate_str(toml).expect_err("zero hops should fail validation");
    assert!(errors.iter().any(|e| {
        matches!(e, ConfigError::Validation { message } if message.contains("max_redirect_hops"))
    }));
}

#[test]
fn config_error_has_code_and_help() {
    let error = ConfigError::UnknownKey {
        key: "user_agnet".to_string(),
        suggestion: Some("user_agent".to_string()),
        valid_keys: "connect_timeout_secs, user_agent".to_string(),
        span: None,
        src: None,
    };

    assert!(error.code().is_some());
    let help = error.help().expect("should have help text").to_string();
    assert!(help.contains("did you mean `user_agent`"), "got: {help}");
}

#[test]
fn config_error_renders_with_miette() {
    use miette::GraphicalReportHandler;

    let error = ConfigError::MissingKey {
        key: "probe.user_agent".to_string(),
    };

    let mut buf = String::new();
    GraphicalReportHandler::new()
        .render_report(&mut buf, &error)
        .expect("should render without error");
    assert!(buf.contains("probe.user_agent"));
}

#[test]
fn load_from_path_reads_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[probe]\nconnect_timeout_secs = 4\nread_timeout_secs = 12").unwrap();

    let config = load_config_from_path(file.path()).expect("file config should load");
    assert_eq!(config.probe.connect_timeout_secs, 4);
    assert_eq!(config.probe.read_timeout_secs, 12);
    assert_eq!(config.probe.max_redirect_hops, 4);
}
