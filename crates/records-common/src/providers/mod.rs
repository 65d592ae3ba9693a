//! Leaf service implementations for the ports declared in records-core

mod clock;
mod email;
mod password;

pub use clock::{FixedClock, SystemClock};
pub use email::ValidatorEmailSyntax;
pub use password::{hash_password, verify_password, Argon2Hasher};
