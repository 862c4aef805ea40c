//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/pga/pga.toml`
//! 3. Environment variables: `PGA_*` prefix
//! 4. `--config` on the command line (alias file only, applied by the CLI)

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::Deserialize;

use crate::application::ApplicationError;
use crate::domain::builder::DEFAULT_PASSWORD_ENV;
use crate::domain::{expand_env_vars, ClientMode};

/// Name of the alias file under the home directory.
pub const ALIAS_FILE_NAME: &str = ".pgapass";

/// Raw settings for intermediate parsing (`None` means "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub alias_file: Option<PathBuf>,
    pub psql: Option<String>,
    pub pg_dump: Option<String>,
    pub password_env: Option<String>,
}

/// Unified configuration for pga.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Alias file (default: ~/.pgapass)
    pub alias_file: PathBuf,
    /// Interactive client program (default: psql)
    pub psql: String,
    /// Dump program (default: pg_dump)
    pub pg_dump: String,
    /// Variable carrying the password to the client (default: PGPASSWORD)
    pub password_env: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            alias_file: default_alias_file(),
            psql: "psql".into(),
            pg_dump: "pg_dump".into(),
            password_env: DEFAULT_PASSWORD_ENV.into(),
        }
    }
}

/// Get the default alias file (~/.pgapass).
fn default_alias_file() -> PathBuf {
    directories::BaseDirs::new()
        .map(|dirs| dirs.home_dir().join(ALIAS_FILE_NAME))
        .unwrap_or_else(|| PathBuf::from("~").join(ALIAS_FILE_NAME))
}

/// Get the XDG config directory for pga.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "pga").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("pga.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Program to launch for `mode`.
    pub fn client_program(&self, mode: ClientMode) -> &str {
        match mode {
            ClientMode::Interactive => &self.psql,
            ClientMode::Dump => &self.pg_dump,
        }
    }

    /// Expand shell variables and tilde in path-like fields.
    ///
    /// Handles `~`, `$VAR`, and `${VAR}` syntax.
    fn expand_paths(&mut self) {
        let expanded = expand_env_vars(self.alias_file.to_string_lossy().as_ref());
        self.alias_file = PathBuf::from(expanded);

        // Client programs may be given as paths like ~/bin/psql
        self.psql = expand_env_vars(&self.psql);
        self.pg_dump = expand_env_vars(&self.pg_dump);
    }

    /// Overlay values: overlay wins if Some, otherwise keep self.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            alias_file: overlay
                .alias_file
                .clone()
                .unwrap_or_else(|| self.alias_file.clone()),
            psql: overlay.psql.clone().unwrap_or_else(|| self.psql.clone()),
            pg_dump: overlay
                .pg_dump
                .clone()
                .unwrap_or_else(|| self.pg_dump.clone()),
            password_env: overlay
                .password_env
                .clone()
                .unwrap_or_else(|| self.password_env.clone()),
        }
    }

    /// Load settings with layered precedence from the XDG global config.
    ///
    /// # Precedence (lowest to highest)
    /// 1. Compiled defaults
    /// 2. Global config: `$XDG_CONFIG_HOME/pga/pga.toml`
    /// 3. Environment variables: `PGA_*` prefix
    pub fn load() -> Result<Self, ApplicationError> {
        Self::load_from(global_config_path().as_deref())
    }

    /// Load settings using `global` as the config file instead of the XDG path.
    ///
    /// A missing file is not an error; an unreadable or invalid one is.
    pub fn load_from(global: Option<&Path>) -> Result<Self, ApplicationError> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Global config file
        if let Some(global_path) = global {
            if global_path.exists() {
                let raw = load_raw_settings(global_path)?;
                current = current.merge_with(&raw);
            }
        }

        // 3. Environment variables (explicit override)
        current = Self::apply_env_overrides(current)?;

        // Expand ~ and $VAR in path-like fields
        current.expand_paths();

        if current.password_env.is_empty() {
            return Err(ApplicationError::Config {
                message: "password_env must not be empty".into(),
            });
        }

        Ok(current)
    }

    /// Apply PGA_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        // Use config crate just for env var parsing
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("PGA")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("alias_file") {
            settings.alias_file = PathBuf::from(val);
        }
        if let Ok(val) = config.get_string("psql") {
            settings.psql = val;
        }
        if let Ok(val) = config.get_string("pg_dump") {
            settings.pg_dump = val;
        }
        if let Ok(val) = config.get_string("password_env") {
            settings.password_env = val;
        }

        Ok(settings)
    }

    /// Alias file to use, honouring a command-line override.
    pub fn alias_file_or(&self, cli_override: Option<&Path>) -> PathBuf {
        match cli_override {
            Some(path) => PathBuf::from(expand_env_vars(path.to_string_lossy().as_ref())),
            None => self.alias_file.clone(),
        }
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_no_config_when_loading_then_uses_defaults() {
        let settings = Settings::load_from(None).expect("load defaults");
        assert!(settings.alias_file.ends_with(ALIAS_FILE_NAME));
        assert!(!settings.psql.is_empty());
        assert!(!settings.pg_dump.is_empty());
    }

    #[test]
    fn given_tilde_in_alias_file_when_expand_paths_then_expands_to_home() {
        let mut settings = Settings {
            alias_file: PathBuf::from("~/.pgapass"),
            ..Settings::default()
        };

        settings.expand_paths();

        let home = std::env::var("HOME").expect("HOME should be set");
        let path = settings.alias_file.to_string_lossy();
        assert!(path.starts_with(&home), "should start with home dir: {path}");
        assert!(!path.contains('~'), "should not contain tilde: {path}");
    }

    #[test]
    fn given_modes_when_choosing_program_then_maps_psql_and_pg_dump() {
        let settings = Settings {
            psql: "psql16".into(),
            pg_dump: "pg_dump16".into(),
            ..Settings::default()
        };
        assert_eq!(settings.client_program(ClientMode::Interactive), "psql16");
        assert_eq!(settings.client_program(ClientMode::Dump), "pg_dump16");
    }

    #[test]
    fn given_cli_override_when_choosing_alias_file_then_override_wins() {
        let settings = Settings {
            alias_file: PathBuf::from("/etc/pgapass"),
            ..Settings::default()
        };
        assert_eq!(
            settings.alias_file_or(Some(Path::new("/tmp/other"))),
            PathBuf::from("/tmp/other")
        );
        assert_eq!(settings.alias_file_or(None), PathBuf::from("/etc/pgapass"));
    }
}
