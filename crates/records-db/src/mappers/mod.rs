//! Entity to model mappers
//!
//! - `TryFrom<UserModel> for UserRecord`: convert database rows to domain objects
//! - `UserInsert`/`UserUpdate`: borrow entity data for database writes

mod user;

pub use user::{UserInsert, UserUpdate};
