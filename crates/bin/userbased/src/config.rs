//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `userbase.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Database settings.
    pub database: DatabaseConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// `PostgreSQL` connection configuration.
///
/// `url` wins over the discrete fields when set.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Full connection string.
    pub url: Option<String>,
    /// Server host name.
    pub host: String,
    /// Server port.
    pub port: u16,
    /// Database name.
    pub name: String,
    /// Login role.
    pub user: String,
    /// Login password.
    pub password: String,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `userbase.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if an
    /// override or the final configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("userbase.toml")?;
        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Empty values count as unset.
        let lookup = |key: &str| lookup(key).filter(|val| !val.is_empty());

        if let Some(val) = lookup("HOST") {
            self.server.host = val;
        }
        if let Some(val) = lookup("PORT") {
            self.server.port = parse_port("PORT", &val)?;
        }
        if let Some(val) = lookup("DATABASE_URL") {
            self.database.url = Some(val);
        }
        if let Some(val) = lookup("DB_HOST") {
            self.database.host = val;
        }
        if let Some(val) = lookup("DB_PORT") {
            self.database.port = parse_port("DB_PORT", &val)?;
        }
        if let Some(val) = lookup("DB_NAME") {
            self.database.name = val;
        }
        if let Some(val) = lookup("DB_USER") {
            self.database.user = val;
        }
        if let Some(val) = lookup("DB_PASSWORD") {
            self.database.password = val;
        }
        if let Some(val) = lookup("USERBASE_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = lookup("RUST_LOG") {
            self.logging.filter = val;
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Build the storage adapter configuration.
    #[must_use]
    pub fn storage_config(&self) -> userbase_adapter_storage_postgres_sqlx::Config {
        userbase_adapter_storage_postgres_sqlx::Config {
            database_url: self.database.url.clone(),
            host: self.database.host.clone(),
            port: self.database.port,
            database: self.database.name.clone(),
            username: self.database.user.clone(),
            password: self.database.password.clone(),
        }
    }
}

fn parse_port(key: &str, val: &str) -> Result<u16, ConfigError> {
    val.parse()
        .map_err(|_| ConfigError::Validation(format!("{key} must be a port number, got {val:?}")))
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            host: "postgres-db".to_string(),
            port: 5432,
            name: "crud_db".to_string(),
            user: "postgres".to_string(),
            password: "postgres".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "userbase=info,tower_http=debug".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3000);
        assert!(config.database.url.is_none());
        assert_eq!(config.database.host, "postgres-db");
        assert_eq!(config.database.port, 5432);
        assert_eq!(config.database.name, "crud_db");
        assert_eq!(config.database.user, "postgres");
        assert_eq!(config.database.password, "postgres");
    }

    #[test]
    fn should_parse_minimal_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            [server]
            host = '127.0.0.1'
            port = 9090

            [database]
            url = 'postgres://u:p@db/app'
            host = 'db'
            port = 6543
            name = 'app'
            user = 'u'
            password = 'p'

            [logging]
            filter = 'debug'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.database.url.as_deref(), Some("postgres://u:p@db/app"));
        assert_eq!(config.database.port, 6543);
        assert_eq!(config.logging.filter, "debug");
    }

    #[test]
    fn should_return_default_when_file_not_found() {
        let config = Config::from_file("nonexistent.toml").unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn should_apply_environment_overrides() {
        let mut config = Config::default();
        config
            .apply_overrides(env(&[
                ("PORT", "8080"),
                ("DB_HOST", "localhost"),
                ("DB_PORT", "15432"),
                ("DB_NAME", "users"),
                ("DB_USER", "app"),
                ("DB_PASSWORD", "hunter2"),
                ("RUST_LOG", "trace"),
            ]))
            .unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.database.host, "localhost");
        assert_eq!(config.database.port, 15432);
        assert_eq!(config.database.name, "users");
        assert_eq!(config.database.user, "app");
        assert_eq!(config.database.password, "hunter2");
        assert_eq!(config.logging.filter, "trace");
    }

    #[test]
    fn should_prefer_rust_log_over_userbase_log() {
        let mut config = Config::default();
        config
            .apply_overrides(env(&[("USERBASE_LOG", "warn"), ("RUST_LOG", "debug")]))
            .unwrap();
        assert_eq!(config.logging.filter, "debug");
    }

    #[test]
    fn should_ignore_empty_database_url() {
        let mut config = Config::default();
        config
            .apply_overrides(env(&[("DATABASE_URL", "")]))
            .unwrap();
        assert!(config.database.url.is_none());
    }

    #[test]
    fn should_reject_non_numeric_port() {
        let mut config = Config::default();
        let result = config.apply_overrides(env(&[("PORT", "http")]));
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn should_reject_zero_port() {
        let mut config = Config::default();
        config.server.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_format_bind_addr() {
        let config = Config::default();
        assert_eq!(config.bind_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn should_map_database_section_to_storage_config() {
        let mut config = Config::default();
        config
            .apply_overrides(env(&[("DATABASE_URL", "postgres://u:p@db/app")]))
            .unwrap();

        let storage = config.storage_config();
        assert_eq!(storage.database_url.as_deref(), Some("postgres://u:p@db/app"));
        assert_eq!(storage.database, "crud_db");
        assert_eq!(storage.username, "postgres");
    }

    #[test]
    fn should_report_parse_error_for_invalid_toml() {
        let result: Result<Config, _> = toml::from_str("invalid {{{");
        assert!(result.is_err());
    }
}
