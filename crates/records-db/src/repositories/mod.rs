//! Gateway implementations
//!
//! PostgreSQL and in-memory implementations of the `UserRecordGateway` port
//! defined in records-core.

mod error;
mod memory;
mod user;

pub use error::{is_unique_violation, is_unique_violation_source, map_db_error};
pub use memory::{MemoryStoreError, MemoryUserRecordGateway};
pub use user::PgUserRecordGateway;
