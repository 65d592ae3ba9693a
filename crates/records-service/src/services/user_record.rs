//! User record service
//!
//! Orchestrates normalize, validate, hash and persist for user records.

use records_core::entities::{UserInput, UserRecord};
use records_core::error::DomainError;
use records_core::traits::{RepoResult, FIND_ALL_LIMIT};
use records_core::value_objects::{UserId, ValidationMode};
use tracing::{error, info, instrument, warn};

use super::context::ServiceContext;

/// User record service
pub struct UserRecordService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserRecordService<'a> {
    /// Create a new UserRecordService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Trim and HTML-escape nickname and email, drop any client id and
    /// stamp both timestamps with the current time
    pub fn normalize(&self, input: UserInput) -> UserInput {
        input.prepare(self.ctx.clock().now())
    }

    /// Check required fields and email syntax for `mode`
    #[instrument(skip(self, input))]
    pub fn validate(&self, input: &UserInput, mode: ValidationMode) -> RepoResult<()> {
        input
            .validate(mode, self.ctx.email_validator())
            .inspect_err(|e| warn!(error = %e, "User input rejected"))
    }

    /// Hash the password and insert a new record
    #[instrument(skip(self, input), fields(nickname = %input.nickname))]
    pub async fn create(&self, input: UserInput) -> RepoResult<UserRecord> {
        let digest = self.hash(&input.password)?;
        let values = input.into_new_record(digest, self.ctx.clock().now());

        let record = self
            .ctx
            .user_gateway()
            .insert(&values)
            .await
            .inspect_err(|e| error!(error = %e, "Failed to insert user record"))?;

        info!(user_id = %record.id, "User record created");
        Ok(record)
    }

    /// List stored records, at most `FIND_ALL_LIMIT` of them
    #[instrument(skip(self))]
    pub async fn find_all(&self) -> RepoResult<Vec<UserRecord>> {
        self.ctx
            .user_gateway()
            .fetch_all(FIND_ALL_LIMIT)
            .await
            .inspect_err(|e| error!(error = %e, "Failed to list user records"))
    }

    /// Get a record by id
    #[instrument(skip(self))]
    pub async fn find_by_id(&self, id: UserId) -> RepoResult<UserRecord> {
        self.ctx
            .user_gateway()
            .fetch_by_id(id)
            .await
            .inspect_err(|e| error!(error = %e, "Failed to fetch user record"))?
            .ok_or_else(|| not_found(id))
    }

    /// Rehash the password, overwrite the mutable columns and return the
    /// stored state
    #[instrument(skip(self, input), fields(nickname = %input.nickname))]
    pub async fn update(&self, id: UserId, input: UserInput) -> RepoResult<UserRecord> {
        let digest = self.hash(&input.password)?;
        let patch = input.into_patch(digest, self.ctx.clock().now());

        let affected = self
            .ctx
            .user_gateway()
            .update_columns(id, &patch)
            .await
            .inspect_err(|e| error!(error = %e, "Failed to update user record"))?;
        if affected == 0 {
            return Err(not_found(id));
        }

        let record = self.find_by_id(id).await?;
        info!(user_id = %id, "User record updated");
        Ok(record)
    }

    /// Hard delete a record, returning how many rows were removed
    #[instrument(skip(self))]
    pub async fn delete(&self, id: UserId) -> RepoResult<u64> {
        let removed = self
            .ctx
            .user_gateway()
            .delete(id)
            .await
            .inspect_err(|e| error!(error = %e, "Failed to delete user record"))?;

        if removed == 0 {
            info!(user_id = %id, "No user record to delete");
        } else {
            info!(user_id = %id, removed, "User record deleted");
        }
        Ok(removed)
    }

    /// Normalize, validate for creation, then create
    #[instrument(skip(self, input))]
    pub async fn register(&self, input: UserInput) -> RepoResult<UserRecord> {
        let input = self.normalize(input);
        self.validate(&input, ValidationMode::Create)?;
        self.create(input).await
    }

    /// Normalize, validate for update, then update
    #[instrument(skip(self, input))]
    pub async fn edit(&self, id: UserId, input: UserInput) -> RepoResult<UserRecord> {
        let input = self.normalize(input);
        self.validate(&input, ValidationMode::Update)?;
        self.update(id, input).await
    }

    /// Check a plaintext password against a stored record
    #[instrument(skip(self, record, plaintext), fields(user_id = %record.id))]
    pub fn verify_password(&self, record: &UserRecord, plaintext: &str) -> bool {
        let matches = self.ctx.hasher().verify(&record.password_digest, plaintext);
        if !matches {
            warn!("Password mismatch");
        }
        matches
    }

    fn hash(&self, plaintext: &str) -> RepoResult<String> {
        self.ctx
            .hasher()
            .hash(plaintext)
            .inspect_err(|e| error!(error = %e, "Password hashing failed"))
    }
}

fn not_found(id: UserId) -> DomainError {
    warn!(user_id = %id, "User record not found");
    DomainError::UserNotFound(id)
}
