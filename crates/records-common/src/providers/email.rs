//! Email syntax validation backed by the `validator` crate

use records_core::EmailSyntaxValidator;
use validator::ValidateEmail;

/// Format-only email check (no DNS or mailbox lookup)
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatorEmailSyntax;

impl ValidatorEmailSyntax {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl EmailSyntaxValidator for ValidatorEmailSyntax {
    fn is_valid(&self, email: &str) -> bool {
        email.validate_email()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_common_addresses() {
        let emails = ValidatorEmailSyntax::new();
        assert!(emails.is_valid("a@b.com"));
        assert!(emails.is_valid("bob@x.com"));
        assert!(emails.is_valid("first.last+tag@sub.example.org"));
    }

    #[test]
    fn test_rejects_malformed_addresses() {
        let emails = ValidatorEmailSyntax::new();
        assert!(!emails.is_valid("not-an-email"));
        assert!(!emails.is_valid("@example.com"));
        assert!(!emails.is_valid("bob@"));
        assert!(!emails.is_valid("bob smith@example.com"));
        assert!(!emails.is_valid(""));
    }
}
