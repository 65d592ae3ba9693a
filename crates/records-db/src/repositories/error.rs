//! Error handling utilities for gateways

use records_core::error::DomainError;
use sqlx::Error as SqlxError;
use tracing::error;

/// Wrap a SQLx error as a backend failure, keeping it as the error source
pub fn map_db_error(e: SqlxError) -> DomainError {
    error!(error = %e, "database operation failed");
    DomainError::backend(e)
}

/// Whether a SQLx error is a unique constraint violation
pub fn is_unique_violation(e: &SqlxError) -> bool {
    e.as_database_error()
        .is_some_and(|db_err| db_err.is_unique_violation())
}

/// Whether a gateway error was caused by a unique constraint violation
pub fn is_unique_violation_source(e: &DomainError) -> bool {
    match e {
        DomainError::Backend(source) => source
            .downcast_ref::<SqlxError>()
            .is_some_and(is_unique_violation),
        _ => false,
    }
}
