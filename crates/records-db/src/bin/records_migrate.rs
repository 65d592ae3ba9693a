//! Applies the user records schema
//!
//! Run with:
//! ```bash
//! DATABASE_URL=postgres://... cargo run -p records-db --bin records-migrate
//! ```
//!
//! The migrations directory comes from `MIGRATIONS_DIR`, falling back to the
//! directory shipped with this crate when the configured one does not exist.

use std::path::PathBuf;

use anyhow::Context;
use records_common::{try_init_tracing_with_config, AppConfig, TracingConfig};
use records_db::{bundled_migrations_dir, create_pool, run_migrations, PoolConfig};
use tracing::{error, info, warn};

#[tokio::main]
async fn main() {
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    let tracing_config = TracingConfig::for_app(config.app.env, &config.logging);
    if let Err(e) = try_init_tracing_with_config(&tracing_config) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    if let Err(e) = run(&config).await {
        error!(error = %format!("{e:#}"), "Migration failed");
        std::process::exit(1);
    }
}

async fn run(config: &AppConfig) -> anyhow::Result<()> {
    info!(app = %config.app.name, env = ?config.app.env, "Running migrations");

    let mut dir = PathBuf::from(&config.migrations.dir);
    if !dir.is_dir() {
        warn!(configured = %dir.display(), "Migrations directory not found, using bundled schema");
        dir = bundled_migrations_dir().to_path_buf();
    }

    let pool = create_pool(&PoolConfig::from(&config.database))
        .await
        .context("connecting to database")?;

    run_migrations(&pool, &dir)
        .await
        .with_context(|| format!("applying migrations from {}", dir.display()))?;

    pool.close().await;
    Ok(())
}
