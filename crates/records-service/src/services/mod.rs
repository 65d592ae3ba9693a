//! Application services

mod context;
mod user_record;

pub use context::{ServiceContext, ServiceContextBuilder};
pub use user_record::UserRecordService;
