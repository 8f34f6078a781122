//! # auth-db
//!
//! Database layer for the auth backend: PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate owns the process-wide connection pool and the scoped session
//! handles request handlers borrow from it:
//!
//! - Connection pool construction from validated settings
//! - Scoped session acquisition with guaranteed release
//! - Database models with SQLx `FromRow` derives
//!
//! ## Usage
//!
//! ```rust,ignore
//! use auth_common::DatabaseSettings;
//! use auth_db::{create_pool, with_session, PoolConfig};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let settings = DatabaseSettings::from_env()?;
//!     let pool = create_pool(&PoolConfig::from_settings(&settings)).await?;
//!
//!     let count = with_session(&pool, |session| {
//!         Box::pin(async move {
//!             // run queries on `session`...
//!             Ok(0_i64)
//!         })
//!     })
//!     .await?;
//!
//!     Ok(())
//! }
//! ```

mod error;

pub mod models;
pub mod pool;
pub mod session;

// Re-export commonly used types
pub use models::UserModel;
pub use pool::{create_pool, PgPool, PoolConfig};
pub use session::{acquire_session, with_session, DbSession};
