//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{NewUserRecord, UserPatch, UserRecord};
use crate::error::DomainError;
use crate::value_objects::UserId;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

/// Upper bound on records returned by a full listing
pub const FIND_ALL_LIMIT: i64 = 100;

// ============================================================================
// User Record Gateway
// ============================================================================

#[async_trait]
pub trait UserRecordGateway: Send + Sync {
    /// Insert a new record and return it with its assigned id
    async fn insert(&self, record: &NewUserRecord) -> RepoResult<UserRecord>;

    /// Fetch up to `limit` records in backend order
    async fn fetch_all(&self, limit: i64) -> RepoResult<Vec<UserRecord>>;

    /// Fetch one record; `None` means no row matched
    async fn fetch_by_id(&self, id: UserId) -> RepoResult<Option<UserRecord>>;

    /// Overwrite the patch columns of one record, returning rows affected
    async fn update_columns(&self, id: UserId, patch: &UserPatch) -> RepoResult<u64>;

    /// Hard delete one record, returning rows affected
    async fn delete(&self, id: UserId) -> RepoResult<u64>;
}
