//! Value objects - immutable types that represent domain concepts

mod user_id;
mod validation_mode;

pub use user_id::{UserId, UserIdParseError};
pub use validation_mode::ValidationMode;
