//! # records-service
//!
//! Application layer: the user record use cases and the dependency container
//! they run against.
//!
//! ```rust,ignore
//! use records_common::AppConfig;
//! use records_core::UserInput;
//! use records_service::{create_service_context, UserRecordService};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let ctx = create_service_context(&AppConfig::from_env()?).await?;
//!     let service = UserRecordService::new(&ctx);
//!     let record = service
//!         .register(UserInput::new("bob", "bob@example.com", "secret"))
//!         .await?;
//!     println!("created user {}", record.id);
//!     Ok(())
//! }
//! ```

pub mod bootstrap;
pub mod services;

pub use bootstrap::{context_for_pool, create_migrated_service_context, create_service_context};
pub use services::{ServiceContext, ServiceContextBuilder, UserRecordService};
