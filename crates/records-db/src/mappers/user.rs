//! User entity <-> model mapper

use chrono::{DateTime, Utc};
use records_core::entities::{NewUserRecord, UserPatch, UserRecord};
use records_core::value_objects::{UserId, UserIdParseError};

use crate::models::UserModel;

/// Convert UserModel to UserRecord entity
///
/// Fails only if the stored id is outside the u32 range.
impl TryFrom<UserModel> for UserRecord {
    type Error = UserIdParseError;

    fn try_from(model: UserModel) -> Result<Self, Self::Error> {
        Ok(UserRecord {
            id: UserId::try_from(model.id)?,
            nickname: model.nickname,
            email: model.email,
            password_digest: model.password_digest,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

/// Values for database insertion; the id column is never bound
pub struct UserInsert<'a> {
    pub nickname: &'a str,
    pub email: &'a str,
    pub password_digest: &'a str,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl<'a> UserInsert<'a> {
    pub fn new(record: &'a NewUserRecord) -> Self {
        Self {
            nickname: &record.nickname,
            email: &record.email,
            password_digest: &record.password_digest,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

/// Values for the column-level update
pub struct UserUpdate<'a> {
    pub id: i64,
    pub password_digest: &'a str,
    pub nickname: &'a str,
    pub email: &'a str,
    pub updated_at: DateTime<Utc>,
}

impl<'a> UserUpdate<'a> {
    pub fn new(id: UserId, patch: &'a UserPatch) -> Self {
        Self {
            id: i64::from(id),
            password_digest: &patch.password_digest,
            nickname: &patch.nickname,
            email: &patch.email,
            updated_at: patch.updated_at,
        }
    }
}
