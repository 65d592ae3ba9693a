//! Domain errors - error types for the domain layer

use std::fmt;

use thiserror::Error;

use crate::value_objects::UserId;

/// Boxed error carried through unchanged from a persistence backend
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Required user fields checked by validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Nickname,
    Password,
    Email,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Nickname => "Nickname",
            Self::Password => "Password",
            Self::Email => "Email",
        };
        f.write_str(label)
    }
}

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(UserId),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("{0} required")]
    MissingField(Field),

    #[error("Invalid email")]
    InvalidEmailFormat,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Password hashing failed: {0}")]
    HashingFailure(String),

    #[error("Database error: {0}")]
    Backend(#[source] BoxError),
}

impl DomainError {
    /// Wrap a backend failure without altering it
    pub fn backend(err: impl Into<BoxError>) -> Self {
        Self::Backend(err.into())
    }

    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::MissingField(Field::Nickname) => "NICKNAME_REQUIRED",
            Self::MissingField(Field::Password) => "PASSWORD_REQUIRED",
            Self::MissingField(Field::Email) => "EMAIL_REQUIRED",
            Self::InvalidEmailFormat => "INVALID_EMAIL",
            Self::HashingFailure(_) => "HASHING_FAILURE",
            Self::Backend(_) => "DATABASE_ERROR",
        }
    }

    /// HTTP status code the controller tier should answer with
    pub fn status_code(&self) -> u16 {
        if self.is_not_found() {
            404
        } else if self.is_validation() {
            400
        } else {
            500
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::UserNotFound(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::MissingField(_) | Self::InvalidEmailFormat)
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(DomainError::UserNotFound(UserId::new(1)).code(), "UNKNOWN_USER");
        assert_eq!(
            DomainError::MissingField(Field::Nickname).code(),
            "NICKNAME_REQUIRED"
        );
        assert_eq!(DomainError::InvalidEmailFormat.code(), "INVALID_EMAIL");
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            DomainError::UserNotFound(UserId::new(123)).to_string(),
            "User not found: 123"
        );
        assert_eq!(
            DomainError::MissingField(Field::Password).to_string(),
            "Password required"
        );
        assert_eq!(DomainError::InvalidEmailFormat.to_string(), "Invalid email");
    }

    #[test]
    fn test_classification() {
        assert!(DomainError::UserNotFound(UserId::new(1)).is_not_found());
        assert!(DomainError::MissingField(Field::Email).is_validation());
        assert!(!DomainError::HashingFailure("boom".into()).is_validation());
        assert_eq!(DomainError::InvalidEmailFormat.status_code(), 400);
        assert_eq!(DomainError::UserNotFound(UserId::new(1)).status_code(), 404);
        assert_eq!(DomainError::HashingFailure("boom".into()).status_code(), 500);
    }

    #[test]
    fn test_backend_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "connection reset");
        let err = DomainError::backend(io);
        assert_eq!(err.to_string(), "Database error: connection reset");
        assert!(err.source().is_some());
        assert!(!err.is_not_found());
    }
}
