//! Tests for layered configuration loading

use fieldlogic_domain::Error;
use fieldlogic_infrastructure::config::{AppConfig, ConfigLoader};
use figment::Jail;

#[test]
fn test_defaults_without_sources() {
    Jail::expect_with(|_jail| {
        let config = ConfigLoader::new().load().map_err(|e| e.to_string())?;
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.expressions.max_depth, 32);
        assert!(!config.rules.strict_unknown_rules);
        Ok(())
    });
}

#[test]
fn test_default_file_in_working_directory() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "fieldlogic.toml",
            r#"
                [logging]
                level = "debug"

                [rules]
                strict_unknown_rules = true
            "#,
        )?;
        let config = ConfigLoader::new().load().map_err(|e| e.to_string())?;
        assert_eq!(config.logging.level, "debug");
        assert!(!config.logging.json_format);
        assert!(config.rules.strict_unknown_rules);
        assert_eq!(config.expressions.max_depth, 32);
        Ok(())
    });
}

#[test]
fn test_environment_overrides_file() {
    Jail::expect_with(|jail| {
        jail.create_file("custom.toml", "[expressions]\nmax_depth = 8\n")?;
        jail.set_env("FIELDLOGIC__EXPRESSIONS__MAX_DEPTH", "4");
        jail.set_env("FIELDLOGIC__LOGGING__JSON_FORMAT", "true");
        let config = ConfigLoader::new()
            .with_config_path("custom.toml")
            .load()
            .map_err(|e| e.to_string())?;
        assert_eq!(config.expressions.max_depth, 4);
        assert!(config.logging.json_format);
        Ok(())
    });
}

#[test]
fn test_custom_env_prefix() {
    Jail::expect_with(|jail| {
        jail.set_env("FORMS__LOGGING__LEVEL", "error");
        jail.set_env("FIELDLOGIC__LOGGING__LEVEL", "trace");
        let config = ConfigLoader::new()
            .with_env_prefix("FORMS")
            .load()
            .map_err(|e| e.to_string())?;
        assert_eq!(config.logging.level, "error");
        Ok(())
    });
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    Jail::expect_with(|_jail| {
        let result = ConfigLoader::new().with_config_path("nope.toml").load();
        assert!(matches!(result, Err(Error::Configuration { .. })));
        Ok(())
    });
}

#[test]
fn test_validation_rejects_bad_values() {
    Jail::expect_with(|jail| {
        jail.set_env("FIELDLOGIC__LOGGING__LEVEL", "loud");
        let result = ConfigLoader::new().load();
        assert!(matches!(result, Err(Error::Configuration { .. })));

        jail.set_env("FIELDLOGIC__LOGGING__LEVEL", "info");
        jail.set_env("FIELDLOGIC__EXPRESSIONS__MAX_DEPTH", "0");
        let result = ConfigLoader::new().load();
        assert!(matches!(result, Err(Error::Configuration { .. })));
        Ok(())
    });
}

#[test]
fn test_save_and_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("saved.toml");
    let mut config = AppConfig::default();
    config.expressions.max_depth = 12;
    config.rules.strict_unknown_rules = true;

    let loader = ConfigLoader::new().with_config_path(&path);
    loader.save_to_file(&config, &path).unwrap();
    assert_eq!(loader.config_path(), Some(path.as_path()));

    let reloaded = loader.with_env_prefix("FIELDLOGIC_TEST_UNUSED").load().unwrap();
    assert_eq!(reloaded, config);
}
