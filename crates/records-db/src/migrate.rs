//! Schema migrations
//!
//! Migrations are plain SQL files (`<version>_<name>.sql`) read from a directory
//! at runtime; the shipped schema lives in `crates/records-db/migrations`.

use std::path::Path;

use sqlx::migrate::{MigrateError, Migrator};
use sqlx::PgPool;
use tracing::{info, instrument};

/// Apply every pending migration found in `dir`
#[instrument(skip(pool, dir), fields(dir = %dir.as_ref().display()))]
pub async fn run_migrations(pool: &PgPool, dir: impl AsRef<Path>) -> Result<(), MigrateError> {
    let migrator = Migrator::new(dir.as_ref()).await?;
    let known = migrator.iter().count();

    migrator.run(pool).await?;

    info!(migrations = known, "Schema is up to date");
    Ok(())
}

/// Directory holding the migrations shipped with this crate
pub fn bundled_migrations_dir() -> &'static Path {
    Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/migrations"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_dir_contains_users_schema() {
        let schema = bundled_migrations_dir().join("0001_create_users.sql");
        let sql = std::fs::read_to_string(schema).unwrap();
        assert!(sql.contains("CREATE TABLE IF NOT EXISTS users"));
        assert!(sql.contains("nickname        VARCHAR(255) NOT NULL UNIQUE"));
        assert!(sql.contains("MAXVALUE 4294967295"));
        assert!(sql.contains("CHECK (octet_length(nickname) <= 255)"));
    }

    #[tokio::test]
    async fn test_migrator_reads_bundled_dir() {
        let migrator = Migrator::new(bundled_migrations_dir()).await.unwrap();
        let versions: Vec<i64> = migrator.iter().map(|m| m.version).collect();
        assert_eq!(versions, vec![1]);
    }
}
