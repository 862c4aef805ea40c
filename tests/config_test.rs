//! Integration tests for Settings loading from a global TOML file.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use pga::application::ApplicationError;
use pga::config::Settings;
use pga::domain::ClientMode;

#[test]
fn given_global_config_when_load_then_overrides_defaults() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("pga.toml");
    fs::write(
        &path,
        r#"
alias_file = "/srv/secrets/pgapass"
psql = "/opt/pg16/bin/psql"
"#,
    )
    .unwrap();

    // Act
    let settings = Settings::load_from(Some(&path)).expect("load settings");

    // Assert
    assert_eq!(settings.alias_file, PathBuf::from("/srv/secrets/pgapass"));
    assert_eq!(
        settings.client_program(ClientMode::Interactive),
        "/opt/pg16/bin/psql"
    );
    // Unspecified values keep their defaults
    assert_eq!(settings.client_program(ClientMode::Dump), "pg_dump");
    assert_eq!(settings.password_env, "PGPASSWORD");
}

#[test]
fn given_missing_global_config_when_load_then_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");

    let settings = Settings::load_from(Some(&path)).expect("load settings");

    assert!(settings.alias_file.ends_with(".pgapass"));
}

#[test]
fn given_invalid_toml_when_load_then_returns_config_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("pga.toml");
    fs::write(&path, "psql = [unterminated").unwrap();

    let err = Settings::load_from(Some(&path)).unwrap_err();

    assert!(matches!(err, ApplicationError::Config { .. }), "got {err:?}");
}

#[test]
fn given_empty_password_env_when_load_then_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("pga.toml");
    fs::write(&path, "password_env = \"\"\n").unwrap();

    let err = Settings::load_from(Some(&path)).unwrap_err();

    assert!(err.to_string().contains("password_env"));
}
