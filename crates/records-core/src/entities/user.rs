//! User entities - the stored account record and the request-boundary input

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, Field};
use crate::sanitize::sanitize_text;
use crate::traits::EmailSyntaxValidator;
use crate::value_objects::{UserId, ValidationMode};

/// Maximum nickname length in bytes (UTF-8), enforced by the storage schema
pub const NICKNAME_MAX_LEN: usize = 255;
/// Maximum email length in bytes (UTF-8), enforced by the storage schema
pub const EMAIL_MAX_LEN: usize = 100;
/// Maximum password digest length in bytes (UTF-8), enforced by the storage schema
pub const PASSWORD_DIGEST_MAX_LEN: usize = 100;

/// A persisted user account
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserRecord {
    pub id: UserId,
    pub nickname: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_digest: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserRecord {
    /// Apply a column-level patch; `id` and `created_at` are left untouched
    pub fn apply_patch(&mut self, patch: &UserPatch) {
        self.password_digest.clone_from(&patch.password_digest);
        self.nickname.clone_from(&patch.nickname);
        self.email.clone_from(&patch.email);
        self.updated_at = patch.updated_at;
    }
}

/// User data as received from a client
///
/// Holds the plaintext password; it is consumed when the password is hashed.
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UserInput {
    /// Ignored: ids are always assigned by the backend
    pub id: Option<UserId>,
    pub nickname: String,
    pub email: String,
    pub password: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl UserInput {
    pub fn new(
        nickname: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            nickname: nickname.into(),
            email: email.into(),
            password: password.into(),
            ..Default::default()
        }
    }

    /// Discard any client id, sanitize text fields and stamp both timestamps
    pub fn prepare(mut self, now: DateTime<Utc>) -> Self {
        self.id = None;
        self.nickname = sanitize_text(&self.nickname);
        self.email = sanitize_text(&self.email);
        self.created_at = Some(now);
        self.updated_at = Some(now);
        self
    }

    /// Check required fields and email syntax for the given mode
    ///
    /// Rules run in order nickname, password, email, email syntax; the first
    /// failure is returned.
    pub fn validate(
        &self,
        mode: ValidationMode,
        emails: &dyn EmailSyntaxValidator,
    ) -> Result<(), DomainError> {
        if mode.requires_nickname() && self.nickname.is_empty() {
            return Err(DomainError::MissingField(Field::Nickname));
        }
        if self.password.is_empty() {
            return Err(DomainError::MissingField(Field::Password));
        }
        if self.email.is_empty() {
            return Err(DomainError::MissingField(Field::Email));
        }
        if !emails.is_valid(&self.email) {
            return Err(DomainError::InvalidEmailFormat);
        }
        Ok(())
    }

    /// Build the insert payload, dropping the plaintext password
    ///
    /// Timestamps stamped by `prepare` win over `now`.
    pub fn into_new_record(self, password_digest: String, now: DateTime<Utc>) -> NewUserRecord {
        NewUserRecord {
            nickname: self.nickname,
            email: self.email,
            password_digest,
            created_at: self.created_at.unwrap_or(now),
            updated_at: self.updated_at.unwrap_or(now),
        }
    }

    /// Build the column-level patch, dropping the plaintext password
    pub fn into_patch(self, password_digest: String, updated_at: DateTime<Utc>) -> UserPatch {
        UserPatch {
            password_digest,
            nickname: self.nickname,
            email: self.email,
            updated_at,
        }
    }
}

impl fmt::Debug for UserInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserInput")
            .field("id", &self.id)
            .field("nickname", &self.nickname)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("created_at", &self.created_at)
            .field("updated_at", &self.updated_at)
            .finish()
    }
}

/// Values for inserting a new user; the id is assigned by the backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUserRecord {
    pub nickname: String,
    pub email: String,
    pub password_digest: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The only columns an update may touch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserPatch {
    pub password_digest: String,
    pub nickname: String,
    pub email: String,
    pub updated_at: DateTime<Utc>,
}
