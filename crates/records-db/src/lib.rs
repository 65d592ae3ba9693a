//! # records-db
//!
//! Persistence layer implementing the `UserRecordGateway` port with PostgreSQL via SQLx,
//! plus an in-memory gateway with the same constraints.
//!
//! ## Overview
//!
//! - Connection pool management
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - Gateway implementations (PostgreSQL, in-memory)
//! - The SQL schema and a runtime migration runner
//!
//! ## Usage
//!
//! ```rust,ignore
//! use records_common::AppConfig;
//! use records_db::{create_pool, run_migrations, PgUserRecordGateway, PoolConfig};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AppConfig::from_env()?;
//!     let pool = create_pool(&PoolConfig::from(&config.database)).await?;
//!     run_migrations(&pool, &config.migrations.dir).await?;
//!     let gateway = PgUserRecordGateway::new(pool);
//!
//!     // Hand the gateway to the service layer...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod migrate;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use migrate::{bundled_migrations_dir, run_migrations};
pub use pool::{create_pool, PgPool, PoolConfig};
pub use repositories::{
    is_unique_violation_source, MemoryStoreError, MemoryUserRecordGateway, PgUserRecordGateway,
};
