//! PostgreSQL implementation of UserRecordGateway

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{instrument, warn};

use records_core::entities::{NewUserRecord, UserPatch, UserRecord};
use records_core::error::DomainError;
use records_core::traits::{RepoResult, UserRecordGateway};
use records_core::value_objects::UserId;

use crate::mappers::{UserInsert, UserUpdate};
use crate::models::UserModel;

use super::error::{is_unique_violation, map_db_error};

/// PostgreSQL implementation of UserRecordGateway
#[derive(Clone)]
pub struct PgUserRecordGateway {
    pool: PgPool,
}

impl PgUserRecordGateway {
    /// Create a new PgUserRecordGateway
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn into_record(model: UserModel) -> RepoResult<UserRecord> {
    UserRecord::try_from(model).map_err(DomainError::backend)
}

#[async_trait]
impl UserRecordGateway for PgUserRecordGateway {
    #[instrument(skip(self, record), fields(nickname = %record.nickname))]
    async fn insert(&self, record: &NewUserRecord) -> RepoResult<UserRecord> {
        let values = UserInsert::new(record);

        let model = sqlx::query_as::<_, UserModel>(
            r"
            INSERT INTO users (nickname, email, password_digest, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, nickname, email, password_digest, created_at, updated_at
            ",
        )
        .bind(values.nickname)
        .bind(values.email)
        .bind(values.password_digest)
        .bind(values.created_at)
        .bind(values.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                warn!("nickname already taken");
            }
            map_db_error(e)
        })?;

        into_record(model)
    }

    #[instrument(skip(self))]
    async fn fetch_all(&self, limit: i64) -> RepoResult<Vec<UserRecord>> {
        let models = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, nickname, email, password_digest, created_at, updated_at
            FROM users
            ORDER BY id
            LIMIT $1
            ",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        models.into_iter().map(into_record).collect()
    }

    #[instrument(skip(self))]
    async fn fetch_by_id(&self, id: UserId) -> RepoResult<Option<UserRecord>> {
        let result = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, nickname, email, password_digest, created_at, updated_at
            FROM users
            WHERE id = $1
            ",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(into_record).transpose()
    }

    #[instrument(skip(self, patch))]
    async fn update_columns(&self, id: UserId, patch: &UserPatch) -> RepoResult<u64> {
        let values = UserUpdate::new(id, patch);

        let result = sqlx::query(
            r"
            UPDATE users
            SET password_digest = $2, nickname = $3, email = $4, updated_at = $5
            WHERE id = $1
            ",
        )
        .bind(values.id)
        .bind(values.password_digest)
        .bind(values.nickname)
        .bind(values.email)
        .bind(values.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                warn!("nickname already taken");
            }
            map_db_error(e)
        })?;

        Ok(result.rows_affected())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: UserId) -> RepoResult<u64> {
        let result = sqlx::query(
            r"
            DELETE FROM users
            WHERE id = $1
            ",
        )
        .bind(i64::from(id))
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }
}
