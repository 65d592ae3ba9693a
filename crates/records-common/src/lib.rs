//! # records-common
//!
//! Shared utilities including configuration, error handling, telemetry, and the
//! concrete leaf services (password hashing, email syntax, clock) used by the
//! user record service.

pub mod config;
pub mod error;
pub mod providers;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use config::{
    AppConfig, AppSettings, ConfigError, DatabaseConfig, Environment, LoggingConfig,
    MigrationConfig,
};
pub use error::{AppError, AppResult};
pub use providers::{
    hash_password, verify_password, Argon2Hasher, FixedClock, SystemClock, ValidatorEmailSyntax,
};
pub use telemetry::{
    init_tracing, init_tracing_with_config, try_init_tracing, try_init_tracing_with_config,
    TracingConfig, TracingError,
};
