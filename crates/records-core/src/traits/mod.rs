//! Ports - interfaces the domain needs and infrastructure provides

mod repositories;
mod services;

pub use repositories::{RepoResult, UserRecordGateway, FIND_ALL_LIMIT};
pub use services::{ClockSource, EmailSyntaxValidator, HashService};
