//! Configuration structs

mod database;

pub use database::{ConfigError, DatabaseSettings};
