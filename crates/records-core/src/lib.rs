//! # records-core
//!
//! Domain layer containing the user record entity, value objects, validation rules,
//! and the ports (gateway and leaf services) that infrastructure crates implement.
//! This crate has zero dependencies on infrastructure (database, hashing backends, etc.).

pub mod entities;
pub mod error;
pub mod sanitize;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{NewUserRecord, UserInput, UserPatch, UserRecord};
pub use error::{BoxError, DomainError, Field};
pub use sanitize::{escape_html, sanitize_text};
pub use traits::{
    ClockSource, EmailSyntaxValidator, HashService, RepoResult, UserRecordGateway,
    FIND_ALL_LIMIT,
};
pub use value_objects::{UserId, UserIdParseError, ValidationMode};
