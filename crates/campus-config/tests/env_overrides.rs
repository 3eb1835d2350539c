//! Environment variables override files and defaults.

use campus_config::{Backend, CampusConfig, ConfigError};
use figment::Jail;
use pretty_assertions::assert_eq;

#[test]
fn nested_env_vars_map_to_sections() {
    Jail::expect_with(|jail| {
        jail.set_env("CAMPUS_API__BACKEND", "rest");
        jail.set_env("CAMPUS_API__BASE_URL", "http://127.0.0.1:9000/api");
        jail.set_env("CAMPUS_MOCK__LATENCY_MS", "0");

        let config = CampusConfig::load().expect("config loads");
        assert_eq!(config.api.backend, Backend::Rest);
        assert_eq!(config.api.base_url(), "http://127.0.0.1:9000/api");
        assert_eq!(config.mock.latency_ms, 0);
        Ok(())
    });
}

#[test]
fn env_beats_project_file() {
    Jail::expect_with(|jail| {
        jail.create_dir(".campus")?;
        jail.create_file(
            ".campus/config.toml",
            r#"
[general]
default_limit = 50
"#,
        )?;
        jail.set_env("CAMPUS_GENERAL__DEFAULT_LIMIT", "5");

        let config = CampusConfig::load().expect("config loads");
        assert_eq!(config.general.default_limit, 5);
        Ok(())
    });
}

#[test]
fn invalid_env_value_fails_validation() {
    Jail::expect_with(|jail| {
        jail.set_env("CAMPUS_API__TIMEOUT_SECS", "0");

        let err = CampusConfig::load().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { ref field, .. } if field == "api.timeout_secs"
        ));
        Ok(())
    });
}
