//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for sandboxed files and env vars.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use pretty_assertions::assert_eq;
use triad_config::{ConfigError, TriadConfig};

#[test]
fn loads_extraction_and_scoring_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[extraction]
signal_threshold = 3
max_assert_distance = 8

[scoring]
weight_readme = 0.6
critical_confidence = 0.25
"#,
        )?;

        let config = TriadConfig::from_figment(
            &Figment::from(Serialized::defaults(TriadConfig::default()))
                .merge(Toml::file("config.toml")),
        )
        .expect("config loads");

        assert_eq!(config.extraction.signal_threshold, 3);
        assert_eq!(config.extraction.max_assert_distance, 8);
        assert_eq!(config.extraction.endpoint_search_radius, 5);
        assert_eq!(config.scoring.weight_readme, 0.6);
        assert_eq!(config.scoring.critical_confidence, 0.25);
        assert_eq!(config.scoring.weight_test, 1.0);
        Ok(())
    });
}

#[test]
fn loads_semantic_section_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[semantic]
api_key = "toml-key"
model = "gemini-2.0-flash"
timeout_secs = 10
narrate = false
"#,
        )?;

        let config: TriadConfig = Figment::from(Serialized::defaults(TriadConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert!(config.semantic.is_configured());
        assert_eq!(config.semantic.model, "gemini-2.0-flash");
        assert_eq!(config.semantic.timeout_secs, 10);
        assert!(!config.semantic.narrate);
        assert_eq!(
            config.semantic.endpoint,
            "https://generativelanguage.googleapis.com"
        );
        Ok(())
    });
}

#[test]
fn project_local_file_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_dir(".triad")?;
        jail.create_file(
            ".triad/config.toml",
            r#"
[claims]
readme_confidence = 0.6
"#,
        )?;

        let config = TriadConfig::load().expect("config loads");
        assert_eq!(config.claims.readme_confidence, 0.6);
        assert_eq!(config.claims.structured_confidence, 0.9);
        Ok(())
    });
}

#[test]
fn out_of_range_confidence_is_rejected() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[claims]
structured_confidence = 1.5
"#,
        )?;

        let result = TriadConfig::from_figment(
            &Figment::from(Serialized::defaults(TriadConfig::default()))
                .merge(Toml::file("config.toml")),
        );
        match result {
            Err(ConfigError::InvalidValue { field, .. }) => {
                assert_eq!(field, "claims.structured_confidence");
            }
            other => panic!("expected InvalidValue, got {other:?}"),
        }
        Ok(())
    });
}

#[test]
fn zero_signal_threshold_is_rejected() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[extraction]
signal_threshold = 0
"#,
        )?;

        let result = TriadConfig::from_figment(
            &Figment::from(Serialized::defaults(TriadConfig::default()))
                .merge(Toml::file("config.toml")),
        );
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
        Ok(())
    });
}
