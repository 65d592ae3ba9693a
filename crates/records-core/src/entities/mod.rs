//! Domain entities - core business objects

mod user;

pub use user::{
    NewUserRecord, UserInput, UserPatch, UserRecord, EMAIL_MAX_LEN, NICKNAME_MAX_LEN,
    PASSWORD_DIGEST_MAX_LEN,
};
