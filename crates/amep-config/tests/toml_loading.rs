//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed env var manipulation.

use amep_config::AmepConfig;
use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};

#[test]
fn loads_service_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[service]
base_url = "https://amep.example.edu/api"
teacher_id = "t-7"
timeout_secs = 30
"#,
        )?;

        let config: AmepConfig = Figment::from(Serialized::defaults(AmepConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.service.base_url, "https://amep.example.edu/api");
        assert_eq!(config.service.teacher_id, "t-7");
        assert_eq!(config.service.timeout_secs, 30);
        assert!(config.service.is_configured());
        Ok(())
    });
}

#[test]
fn loads_general_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[general]
default_classroom = "c-12"
default_limit = 50
"#,
        )?;

        let config: AmepConfig = Figment::from(Serialized::defaults(AmepConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.general.default_classroom(), Some("c-12"));
        assert_eq!(config.general.default_limit, 50);
        Ok(())
    });
}

#[test]
fn loads_full_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[service]
base_url = "https://amep.example.edu/api"
teacher_id = "t-7"

[general]
default_classroom = "c-12"
default_limit = 10
"#,
        )?;

        let config: AmepConfig = Figment::from(Serialized::defaults(AmepConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert!(config.service.is_configured());
        assert!(config.require_service().is_ok());
        assert_eq!(config.general.default_classroom(), Some("c-12"));
        assert_eq!(config.general.default_limit, 10);
        // Unset fields keep their defaults.
        assert_eq!(config.service.timeout_secs, 10);
        Ok(())
    });
}

#[test]
fn env_var_overrides_toml() {
    Jail::expect_with(|jail| {
        jail.set_env("AMEP_SERVICE__TEACHER_ID", "t-from-env");

        jail.create_file(
            "config.toml",
            r#"
[service]
base_url = "https://amep.example.edu/api"
teacher_id = "t-from-toml"
"#,
        )?;

        let config: AmepConfig = Figment::from(Serialized::defaults(AmepConfig::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("AMEP_").split("__"))
            .extract()?;

        // Env should win over TOML
        assert_eq!(config.service.teacher_id, "t-from-env");
        // TOML value not overridden by env should remain
        assert_eq!(config.service.base_url, "https://amep.example.edu/api");
        Ok(())
    });
}

#[test]
fn env_var_overrides_default() {
    Jail::expect_with(|jail| {
        jail.set_env("AMEP_SERVICE__BASE_URL", "http://10.0.0.5:5000/api");

        // No TOML file -- just defaults + env
        let config: AmepConfig = Figment::from(Serialized::defaults(AmepConfig::default()))
            .merge(Env::prefixed("AMEP_").split("__"))
            .extract()?;

        assert_eq!(config.service.base_url, "http://10.0.0.5:5000/api");
        Ok(())
    });
}

/// Documents the figment gotcha: typo'd env var keys are silently ignored.
/// The value stays at its default because figment doesn't know "teacher_idd"
/// should be "teacher_id".
#[test]
fn typo_env_var_silently_ignored() {
    Jail::expect_with(|jail| {
        jail.set_env("AMEP_SERVICE__TEACHER_IDD", "t-typo");

        let config: AmepConfig = Figment::from(Serialized::defaults(AmepConfig::default()))
            .merge(Env::prefixed("AMEP_").split("__"))
            .extract()?;

        // "teacher_idd" is not a known field -- silently ignored
        assert!(
            config.service.teacher_id.is_empty(),
            "typo'd env var should be silently ignored by figment"
        );
        Ok(())
    });
}

/// `load_from` reads the project file from an explicit directory, the way
/// the CLI's `--config-dir` flag does.
#[test]
fn load_from_reads_explicit_project_dir() {
    Jail::expect_with(|jail| {
        jail.create_dir("deploy")?;
        jail.create_file(
            "deploy/config.toml",
            r#"
[service]
base_url = "https://staging.example.edu/api"
teacher_id = "t-staging"
"#,
        )?;

        let config: AmepConfig =
            AmepConfig::figment_for(Some(std::path::Path::new("deploy"))).extract()?;

        assert_eq!(config.service.base_url, "https://staging.example.edu/api");
        assert_eq!(config.service.teacher_id, "t-staging");
        Ok(())
    });
}

/// Verify that figment's Env provider correctly maps nested AMEP_* vars
/// through the full provider chain (defaults -> env).
#[test]
fn full_env_provider_chain() {
    Jail::expect_with(|jail| {
        jail.set_env("AMEP_SERVICE__BASE_URL", "https://jail.example.edu/api");
        jail.set_env("AMEP_SERVICE__TEACHER_ID", "t-jail");
        jail.set_env("AMEP_SERVICE__TIMEOUT_SECS", "25");
        jail.set_env("AMEP_GENERAL__DEFAULT_CLASSROOM", "c-jail");
        jail.set_env("AMEP_GENERAL__DEFAULT_LIMIT", "42");

        let config: AmepConfig = Figment::from(Serialized::defaults(AmepConfig::default()))
            .merge(Env::prefixed("AMEP_").split("__"))
            .extract()?;

        assert_eq!(config.service.base_url, "https://jail.example.edu/api");
        assert_eq!(config.service.teacher_id, "t-jail");
        assert_eq!(config.service.timeout_secs, 25);
        assert!(config.service.is_configured());

        assert_eq!(config.general.default_classroom(), Some("c-jail"));
        assert_eq!(config.general.default_limit, 42);
        Ok(())
    });
}
