//! # Configuration Management for BookHaus
//!
//! This crate provides the configuration structures for the BookHaus catalog,
//! currently the SQLite database settings used to build the connection pool.
//!
//! ## Quick Start
//!
//! ### Programmatic Configuration
//! ```rust
//! use config::DatabaseConfig;
//!
//! let db_config = DatabaseConfig::new(
//!     "sqlite://catalog.db".to_string(),
//!     true, 1, 5, 30, 600, 3600,
//! );
//!
//! // Or a private in-memory database, handy for tests
//! let memory = DatabaseConfig::in_memory();
//! ```
//!
//! ### TOML File Configuration
//! ```toml
//! [database]
//! url = "sqlite://catalog.db"
//! create_if_missing = true
//! min_connections = 1
//! max_connections = 5
//! connection_timeout_seconds = 30
//! idle_timeout_seconds = 600
//! max_lifetime_seconds = 3600
//! ```
//!
//! Load configuration:
//! ```rust,no_run
//! use config::AppConfig;
//!
//! // Load from bookhaus.toml (or the path in BOOKHAUS_CONFIG)
//! let config = AppConfig::load()?;
//!
//! // Or load from custom path
//! let config = AppConfig::from_file("config/production.toml")?;
//! # Ok::<(), config::ConfigError>(())
//! ```

use serde::{Deserialize, Serialize};
use std::{env, path::Path};
use thiserror::Error;

const DEFAULT_CONFIG_PATH: &str = "./bookhaus.toml";
const CONFIG_PATH_VAR: &str = "BOOKHAUS_CONFIG";

/// Connection URL of a private in-memory SQLite database.
pub const IN_MEMORY_URL: &str = "sqlite::memory:";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Environment variable error: {0}")]
    Env(#[from] env::VarError),
    #[error("Dotenvy error: {0}")]
    Dotenvy(#[from] dotenvy::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Complete application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub database: DatabaseConfig,
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// sqlx connection URL, e.g. `sqlite://catalog.db` or `sqlite::memory:`
    pub url: String,
    #[serde(default = "default_create_if_missing")]
    pub create_if_missing: bool,
    pub min_connections: u32,
    pub max_connections: u32,
    pub connection_timeout_seconds: u64,
    /// 0 keeps idle connections open forever
    #[serde(default)]
    pub idle_timeout_seconds: u64,
    /// 0 disables connection recycling
    #[serde(default)]
    pub max_lifetime_seconds: u64,
}

fn default_create_if_missing() -> bool {
    true
}

impl AppConfig {
    /// Load configuration from the TOML file named by `BOOKHAUS_CONFIG`
    /// (environment or `.env`), falling back to `./bookhaus.toml`
    pub fn load() -> Result<Self, ConfigError> {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                return Err(e.into());
            }
        }

        let config = if let Ok(config_path) = env::var(CONFIG_PATH_VAR) {
            Self::from_file(&config_path)
        } else if Path::new(DEFAULT_CONFIG_PATH).exists() {
            Self::from_file(DEFAULT_CONFIG_PATH)
        } else {
            Err(ConfigError::Invalid(format!(
                "Config path must be specified as {} (environment or .env file) or in {} file",
                CONFIG_PATH_VAR, DEFAULT_CONFIG_PATH
            )))
        }?;

        Ok(config)
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.database.validate()
    }
}

impl DatabaseConfig {
    /// Create a new database configuration
    pub fn new(
        url: String,
        create_if_missing: bool,
        min_connections: u32,
        max_connections: u32,
        connection_timeout_seconds: u64,
        idle_timeout_seconds: u64,
        max_lifetime_seconds: u64,
    ) -> Self {
        Self {
            url,
            create_if_missing,
            min_connections,
            max_connections,
            connection_timeout_seconds,
            idle_timeout_seconds,
            max_lifetime_seconds,
        }
    }

    /// Private in-memory database.
    ///
    /// Every SQLite connection to `:memory:` opens its own empty database, so
    /// the pool is pinned to a single connection that is never recycled.
    pub fn in_memory() -> Self {
        Self::new(IN_MEMORY_URL.to_string(), true, 1, 1, 30, 0, 0)
    }

    pub fn is_in_memory(&self) -> bool {
        self.url.contains(":memory:") || self.url.contains("mode=memory")
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.url.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "Database url cannot be empty".to_string(),
            ));
        }
        if !self.url.starts_with("sqlite:") {
            return Err(ConfigError::Invalid(format!(
                "Database url must use the sqlite: scheme, got '{}'",
                self.url
            )));
        }
        if self.min_connections == 0 {
            return Err(ConfigError::Invalid(
                "Database min_connections must be greater than 0".to_string(),
            ));
        }
        if self.max_connections == 0 {
            return Err(ConfigError::Invalid(
                "Database max_connections must be greater than 0".to_string(),
            ));
        }
        if self.min_connections > self.max_connections {
            return Err(ConfigError::Invalid(
                "Database min_connections cannot be greater than max_connections".to_string(),
            ));
        }
        if self.connection_timeout_seconds == 0 {
            return Err(ConfigError::Invalid(
                "Database connection_timeout_seconds must be greater than 0".to_string(),
            ));
        }
        if self.is_in_memory() && self.max_connections > 1 {
            return Err(ConfigError::Invalid(
                "In-memory databases require max_connections = 1".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const VALID: &str = r#"
        [database]
        url = "sqlite://catalog.db"
        min_connections = 1
        max_connections = 4
        connection_timeout_seconds = 30
    "#;

    #[test]
    fn parses_minimal_config_with_defaults() {
        let config = AppConfig::from_toml_str(VALID).unwrap();

        assert_eq!(config.database.url, "sqlite://catalog.db");
        assert!(config.database.create_if_missing);
        assert_eq!(config.database.max_connections, 4);
        assert_eq!(config.database.idle_timeout_seconds, 0);
        assert_eq!(config.database.max_lifetime_seconds, 0);
        assert!(!config.database.is_in_memory());
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(VALID.as_bytes()).unwrap();

        let config = AppConfig::from_file(file.path()).unwrap();
        assert_eq!(config.database.min_connections, 1);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = AppConfig::from_file("/definitely/not/here/bookhaus.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn rejects_non_sqlite_url() {
        let toml = VALID.replace("sqlite://catalog.db", "postgres://localhost/catalog");
        let err = AppConfig::from_toml_str(&toml).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(msg) if msg.contains("sqlite")));
    }

    #[test]
    fn rejects_min_above_max() {
        let toml = VALID.replace("min_connections = 1", "min_connections = 8");
        assert!(matches!(
            AppConfig::from_toml_str(&toml),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn rejects_zero_timeout() {
        let toml = VALID.replace(
            "connection_timeout_seconds = 30",
            "connection_timeout_seconds = 0",
        );
        assert!(matches!(
            AppConfig::from_toml_str(&toml),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn malformed_toml_is_reported() {
        let err = AppConfig::from_toml_str("[database\nurl = ").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn in_memory_is_single_connection() {
        let config = DatabaseConfig::in_memory();
        assert!(config.is_in_memory());
        assert!(config.validate().is_ok());

        let mut pooled = config.clone();
        pooled.max_connections = 4;
        assert!(pooled.validate().is_err());
    }
}
