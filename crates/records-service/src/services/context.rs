//! Service context - dependency container for services
//!
//! Holds the persistence gateway and the leaf services the user record
//! service depends on.

use std::sync::Arc;

use records_common::{AppError, AppResult, Argon2Hasher, SystemClock, ValidatorEmailSyntax};
use records_core::traits::{ClockSource, EmailSyntaxValidator, HashService, UserRecordGateway};

/// Service context containing all dependencies
///
/// Cloning is cheap; every dependency is shared behind an `Arc`.
#[derive(Clone)]
pub struct ServiceContext {
    // Persistence
    user_gateway: Arc<dyn UserRecordGateway>,

    // Leaf services
    hasher: Arc<dyn HashService>,
    email_validator: Arc<dyn EmailSyntaxValidator>,
    clock: Arc<dyn ClockSource>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        user_gateway: Arc<dyn UserRecordGateway>,
        hasher: Arc<dyn HashService>,
        email_validator: Arc<dyn EmailSyntaxValidator>,
        clock: Arc<dyn ClockSource>,
    ) -> Self {
        Self {
            user_gateway,
            hasher,
            email_validator,
            clock,
        }
    }

    /// Start a builder with the production leaf services preselected
    pub fn builder() -> ServiceContextBuilder {
        ServiceContextBuilder::new()
    }

    // === Gateways ===

    /// Get the user record gateway
    pub fn user_gateway(&self) -> &dyn UserRecordGateway {
        self.user_gateway.as_ref()
    }

    // === Services ===

    /// Get the password hasher
    pub fn hasher(&self) -> &dyn HashService {
        self.hasher.as_ref()
    }

    /// Get the email syntax validator
    pub fn email_validator(&self) -> &dyn EmailSyntaxValidator {
        self.email_validator.as_ref()
    }

    /// Get the clock
    pub fn clock(&self) -> &dyn ClockSource {
        self.clock.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("user_gateway", &"dyn UserRecordGateway")
            .field("hasher", &"dyn HashService")
            .field("email_validator", &"dyn EmailSyntaxValidator")
            .field("clock", &"dyn ClockSource")
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
///
/// Only the gateway is required; the leaf services default to
/// `Argon2Hasher`, `ValidatorEmailSyntax` and `SystemClock`.
pub struct ServiceContextBuilder {
    user_gateway: Option<Arc<dyn UserRecordGateway>>,
    hasher: Arc<dyn HashService>,
    email_validator: Arc<dyn EmailSyntaxValidator>,
    clock: Arc<dyn ClockSource>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            user_gateway: None,
            hasher: Arc::new(Argon2Hasher::new()),
            email_validator: Arc::new(ValidatorEmailSyntax::new()),
            clock: Arc::new(SystemClock),
        }
    }

    pub fn user_gateway(mut self, gateway: Arc<dyn UserRecordGateway>) -> Self {
        self.user_gateway = Some(gateway);
        self
    }

    pub fn hasher(mut self, hasher: Arc<dyn HashService>) -> Self {
        self.hasher = hasher;
        self
    }

    pub fn email_validator(mut self, validator: Arc<dyn EmailSyntaxValidator>) -> Self {
        self.email_validator = validator;
        self
    }

    pub fn clock(mut self, clock: Arc<dyn ClockSource>) -> Self {
        self.clock = clock;
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `AppError::Internal` if the gateway was not provided
    pub fn build(self) -> AppResult<ServiceContext> {
        let user_gateway = self
            .user_gateway
            .ok_or_else(|| AppError::internal(anyhow::anyhow!("user_gateway is required")))?;

        Ok(ServiceContext::new(
            user_gateway,
            self.hasher,
            self.email_validator,
            self.clock,
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use records_db::MemoryUserRecordGateway;

    use super::*;

    #[test]
    fn test_build_requires_gateway() {
        let err = ServiceContextBuilder::new().build().unwrap_err();
        assert_eq!(err.error_code(), "INTERNAL_ERROR");
    }

    #[test]
    fn test_build_with_defaults() {
        let ctx = ServiceContext::builder()
            .user_gateway(Arc::new(MemoryUserRecordGateway::new()))
            .build()
            .unwrap();

        assert!(ctx.email_validator().is_valid("a@b.com"));
        assert!(format!("{ctx:?}").contains("ServiceContext"));
    }

    #[test]
    fn test_context_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ServiceContext>();
    }
}
