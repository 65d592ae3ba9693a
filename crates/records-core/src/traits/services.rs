//! Leaf service ports: password hashing, email syntax, and time

use chrono::{DateTime, Utc};

use crate::error::DomainError;

/// One-way password hashing
pub trait HashService: Send + Sync {
    /// Hash a plaintext password into a storable digest
    ///
    /// Failures are reported as `DomainError::HashingFailure`.
    fn hash(&self, plaintext: &str) -> Result<String, DomainError>;

    /// Check a plaintext password against a digest; a malformed digest never matches
    fn verify(&self, digest: &str, plaintext: &str) -> bool;
}

/// Format-only email validation
pub trait EmailSyntaxValidator: Send + Sync {
    fn is_valid(&self, email: &str) -> bool;
}

/// Source of the current time
pub trait ClockSource: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
