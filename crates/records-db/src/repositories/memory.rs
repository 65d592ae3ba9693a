//! In-memory implementation of UserRecordGateway
//!
//! Mirrors the PostgreSQL schema rules (unique nickname, column lengths,
//! u32 identity) so services can be exercised without a database.

use std::collections::BTreeMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::{instrument, warn};

use records_core::entities::{
    NewUserRecord, UserPatch, UserRecord, EMAIL_MAX_LEN, NICKNAME_MAX_LEN,
    PASSWORD_DIGEST_MAX_LEN,
};
use records_core::error::DomainError;
use records_core::traits::{RepoResult, UserRecordGateway};
use records_core::value_objects::UserId;

/// Constraint failures raised by the in-memory store
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MemoryStoreError {
    #[error("duplicate key value violates unique constraint on nickname: {0}")]
    DuplicateNickname(String),

    #[error("value too long for column {column} (max {max} bytes)")]
    ValueTooLong { column: &'static str, max: usize },

    #[error("identity sequence exhausted")]
    IdsExhausted,

    #[error("store unavailable")]
    Unavailable,
}

#[derive(Debug, Default)]
struct MemoryState {
    last_id: u32,
    rows: BTreeMap<UserId, UserRecord>,
    unavailable: bool,
}

impl MemoryState {
    fn ensure_available(&self) -> Result<(), MemoryStoreError> {
        if self.unavailable {
            return Err(MemoryStoreError::Unavailable);
        }
        Ok(())
    }

    fn check_columns(nickname: &str, email: &str, digest: &str) -> Result<(), MemoryStoreError> {
        for (column, value, max) in [
            ("nickname", nickname, NICKNAME_MAX_LEN),
            ("email", email, EMAIL_MAX_LEN),
            ("password_digest", digest, PASSWORD_DIGEST_MAX_LEN),
        ] {
            if value.len() > max {
                return Err(MemoryStoreError::ValueTooLong { column, max });
            }
        }
        Ok(())
    }

    fn check_nickname_free(&self, nickname: &str, owner: Option<UserId>) -> Result<(), MemoryStoreError> {
        let taken = self
            .rows
            .values()
            .any(|row| row.nickname == nickname && Some(row.id) != owner);
        if taken {
            return Err(MemoryStoreError::DuplicateNickname(nickname.to_string()));
        }
        Ok(())
    }
}

fn store_error(e: MemoryStoreError) -> DomainError {
    warn!(error = %e, "memory store rejected operation");
    DomainError::backend(e)
}

/// Thread-safe in-memory user store
#[derive(Debug, Default)]
pub struct MemoryUserRecordGateway {
    state: RwLock<MemoryState>,
}

impl MemoryUserRecordGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every following call fail with a backend error until reset
    pub fn set_unavailable(&self, unavailable: bool) {
        self.state.write().unavailable = unavailable;
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.state.read().rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl UserRecordGateway for MemoryUserRecordGateway {
    #[instrument(skip(self, record), fields(nickname = %record.nickname))]
    async fn insert(&self, record: &NewUserRecord) -> RepoResult<UserRecord> {
        let mut state = self.state.write();
        state.ensure_available().map_err(store_error)?;
        MemoryState::check_columns(&record.nickname, &record.email, &record.password_digest)
            .map_err(store_error)?;
        state
            .check_nickname_free(&record.nickname, None)
            .map_err(store_error)?;

        let next = state
            .last_id
            .checked_add(1)
            .ok_or(MemoryStoreError::IdsExhausted)
            .map_err(store_error)?;
        state.last_id = next;

        let stored = UserRecord {
            id: UserId::new(next),
            nickname: record.nickname.clone(),
            email: record.email.clone(),
            password_digest: record.password_digest.clone(),
            created_at: record.created_at,
            updated_at: record.updated_at,
        };
        state.rows.insert(stored.id, stored.clone());
        Ok(stored)
    }

    #[instrument(skip(self))]
    async fn fetch_all(&self, limit: i64) -> RepoResult<Vec<UserRecord>> {
        let state = self.state.read();
        state.ensure_available().map_err(store_error)?;

        let take = usize::try_from(limit.max(0)).unwrap_or(usize::MAX);
        Ok(state.rows.values().take(take).cloned().collect())
    }

    #[instrument(skip(self))]
    async fn fetch_by_id(&self, id: UserId) -> RepoResult<Option<UserRecord>> {
        let state = self.state.read();
        state.ensure_available().map_err(store_error)?;
        Ok(state.rows.get(&id).cloned())
    }

    #[instrument(skip(self, patch))]
    async fn update_columns(&self, id: UserId, patch: &UserPatch) -> RepoResult<u64> {
        let mut state = self.state.write();
        state.ensure_available().map_err(store_error)?;
        if !state.rows.contains_key(&id) {
            return Ok(0);
        }
        MemoryState::check_columns(&patch.nickname, &patch.email, &patch.password_digest)
            .map_err(store_error)?;
        state
            .check_nickname_free(&patch.nickname, Some(id))
            .map_err(store_error)?;

        match state.rows.get_mut(&id) {
            Some(row) => {
                row.apply_patch(patch);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: UserId) -> RepoResult<u64> {
        let mut state = self.state.write();
        state.ensure_available().map_err(store_error)?;
        Ok(u64::from(state.rows.remove(&id).is_some()))
    }
}
