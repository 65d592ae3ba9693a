//! Application configuration structs
//!
//! Loads configuration from environment variables and config files.

use serde::Deserialize;
use std::env;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub app: AppSettings,
    pub database: DatabaseConfig,
    #[serde(default)]
    pub migrations: MigrationConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            env: default_env(),
        }
    }
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    /// Parse a case-insensitive environment name
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "production" | "prod" => Some(Self::Production),
            "staging" => Some(Self::Staging),
            "development" | "dev" => Some(Self::Development),
            _ => None,
        }
    }
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

/// Schema migration settings
#[derive(Debug, Clone, Deserialize)]
pub struct MigrationConfig {
    #[serde(default = "default_migrations_dir")]
    pub dir: String,
}

impl Default for MigrationConfig {
    fn default() -> Self {
        Self {
            dir: default_migrations_dir(),
        }
    }
}

/// Log output settings
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingConfig {
    /// Emit JSON lines instead of the human readable format
    #[serde(default)]
    pub json: bool,
}

// Default value functions
fn default_app_name() -> String {
    "user-records".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_max_connections() -> u32 {
    20
}

fn default_min_connections() -> u32 {
    5
}

fn default_migrations_dir() -> String {
    "./migrations".to_string()
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing
    /// or a numeric setting cannot be parsed
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Ok(Self {
            app: AppSettings {
                name: env::var("APP_NAME").unwrap_or_else(|_| default_app_name()),
                env: env::var("APP_ENV")
                    .ok()
                    .and_then(|s| Environment::parse(&s))
                    .unwrap_or_default(),
            },
            database: DatabaseConfig {
                url: env::var("DATABASE_URL").map_err(|_| ConfigError::MissingVar("DATABASE_URL"))?,
                max_connections: parse_var("DATABASE_MAX_CONNECTIONS")?
                    .unwrap_or_else(default_max_connections),
                min_connections: parse_var("DATABASE_MIN_CONNECTIONS")?
                    .unwrap_or_else(default_min_connections),
            },
            migrations: MigrationConfig {
                dir: env::var("MIGRATIONS_DIR").unwrap_or_else(|_| default_migrations_dir()),
            },
            logging: LoggingConfig {
                json: env::var("LOG_FORMAT")
                    .map(|s| s.eq_ignore_ascii_case("json"))
                    .unwrap_or(false),
            },
        })
    }

    /// Load layered configuration through the `config` crate
    ///
    /// Sources, later ones winning: `config/default.*`, `config/local.*`,
    /// then `RECORDS__SECTION__KEY` environment variables
    /// (e.g. `RECORDS__DATABASE__URL`).
    ///
    /// # Errors
    /// Returns `ConfigError::Load` if a source is malformed or a required key is absent
    pub fn load() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();

        ::config::Config::builder()
            .add_source(::config::File::with_name("config/default").required(false))
            .add_source(::config::File::with_name("config/local").required(false))
            .add_source(
                ::config::Environment::with_prefix("RECORDS")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .and_then(::config::Config::try_deserialize)
            .map_err(|e| ConfigError::Load(e.to_string()))
    }
}

fn parse_var(name: &'static str) -> Result<Option<u32>, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue(name, raw)),
        Err(_) => Ok(None),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),

    #[error("Failed to load configuration: {0}")]
    Load(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_is_production() {
        assert!(!Environment::Development.is_production());
        assert!(!Environment::Staging.is_production());
        assert!(Environment::Production.is_production());
    }

    #[test]
    fn test_environment_is_development() {
        assert!(Environment::Development.is_development());
        assert!(!Environment::Staging.is_development());
        assert!(!Environment::Production.is_development());
    }

    #[test]
    fn test_environment_parse() {
        assert_eq!(Environment::parse("PRODUCTION"), Some(Environment::Production));
        assert_eq!(Environment::parse(" staging "), Some(Environment::Staging));
        assert_eq!(Environment::parse("dev"), Some(Environment::Development));
        assert_eq!(Environment::parse("qa"), None);
    }

    #[test]
    fn test_default_values() {
        assert_eq!(default_app_name(), "user-records");
        assert_eq!(default_max_connections(), 20);
        assert_eq!(default_min_connections(), 5);
        assert_eq!(MigrationConfig::default().dir, "./migrations");
        assert!(!LoggingConfig::default().json);
    }

    #[test]
    fn test_deserialize_fills_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{"database": {"url": "postgres://localhost/records"}}"#)
                .unwrap();
        assert_eq!(config.app.name, "user-records");
        assert_eq!(config.app.env, Environment::Development);
        assert_eq!(config.database.max_connections, 20);
        assert_eq!(config.migrations.dir, "./migrations");
    }

    // Only this test touches RECORDS__* variables, so it owns them for its duration.
    #[test]
    fn test_load_layers_prefixed_env() {
        const URL: &str = "RECORDS__DATABASE__URL";
        const MAX: &str = "RECORDS__DATABASE__MAX_CONNECTIONS";
        const ENV: &str = "RECORDS__APP__ENV";

        env::remove_var(URL);
        assert!(matches!(AppConfig::load(), Err(ConfigError::Load(_))));

        env::set_var(URL, "postgres://h/db");
        env::set_var(MAX, "7");
        env::set_var(ENV, "production");
        let loaded = AppConfig::load();
        env::remove_var(URL);
        env::remove_var(MAX);
        env::remove_var(ENV);

        let config = loaded.unwrap();
        assert_eq!(config.database.url, "postgres://h/db");
        assert_eq!(config.database.max_connections, 7);
        assert_eq!(config.app.env, Environment::Production);
        // untouched keys fall back to their defaults
        assert_eq!(config.database.min_connections, 5);
        assert_eq!(config.app.name, "user-records");
        assert_eq!(config.migrations.dir, "./migrations");
    }

    #[test]
    fn test_deserialize_requires_database_url() {
        let result = serde_json::from_str::<AppConfig>(r#"{"app": {"name": "x"}}"#);
        assert!(result.is_err());
    }
}
