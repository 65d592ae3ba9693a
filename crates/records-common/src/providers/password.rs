//! Password hashing and verification
//!
//! Uses Argon2id for secure password hashing (OWASP recommended).
//! Digests are PHC strings of 97 bytes, within the 100-byte digest column.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use records_core::{DomainError, HashService};
use tracing::{error, warn};

/// Hash a password using Argon2id
///
/// # Errors
/// Returns `DomainError::HashingFailure` if hashing fails
pub fn hash_password(password: &str) -> Result<String, DomainError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| {
            error!(error = %e, "argon2 hash_password error");
            DomainError::HashingFailure(e.to_string())
        })
}

/// Verify a password against a digest
///
/// A digest that is not a valid PHC string never matches.
pub fn verify_password(digest: &str, password: &str) -> bool {
    let parsed = match PasswordHash::new(digest) {
        Ok(parsed) => parsed,
        Err(e) => {
            warn!(error = %e, "stored digest is not a valid password hash");
            return false;
        }
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

/// Argon2id-backed `HashService` for dependency injection
#[derive(Debug, Clone, Copy, Default)]
pub struct Argon2Hasher;

impl Argon2Hasher {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl HashService for Argon2Hasher {
    fn hash(&self, plaintext: &str) -> Result<String, DomainError> {
        hash_password(plaintext)
    }

    fn verify(&self, digest: &str, plaintext: &str) -> bool {
        verify_password(digest, plaintext)
    }
}

#[cfg(test)]
mod tests {
    use records_core::entities::PASSWORD_DIGEST_MAX_LEN;

    use super::*;

    #[test]
    fn test_hash_password() {
        let hash = hash_password("secret").unwrap();

        // Hash should start with argon2 identifier
        assert!(hash.starts_with("$argon2id$"));
        assert_ne!(hash, "secret");
        // Hash should be different each time (different salt)
        assert_ne!(hash, hash_password("secret").unwrap());
    }

    #[test]
    fn test_digest_fits_column() {
        let hash = hash_password("a much longer passphrase than usual, with spaces").unwrap();
        assert!(hash.len() <= PASSWORD_DIGEST_MAX_LEN);
    }

    #[test]
    fn test_verify_password() {
        let hash = hash_password("secret").unwrap();
        assert!(verify_password(&hash, "secret"));
        assert!(!verify_password(&hash, "Secret"));
    }

    #[test]
    fn test_verify_rejects_malformed_digest() {
        assert!(!verify_password("not-a-valid-hash", "secret"));
        // plaintext stored by mistake must not verify against itself
        assert!(!verify_password("secret", "secret"));
    }

    #[test]
    fn test_hasher_service() {
        let hasher = Argon2Hasher::new();
        let digest = hasher.hash("correct-horse-battery-staple").unwrap();
        assert!(hasher.verify(&digest, "correct-horse-battery-staple"));
        assert!(!hasher.verify(&digest, "wrong"));
    }

    #[test]
    fn test_empty_password_still_hashes() {
        let hasher = Argon2Hasher::new();
        let digest = hasher.hash("").unwrap();
        assert!(hasher.verify(&digest, ""));
    }
}
