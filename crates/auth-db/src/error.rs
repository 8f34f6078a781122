//! Error handling utilities for the database layer

use auth_common::AppError;
use sqlx::Error as SqlxError;

/// Convert a SQLx error to AppError
pub(crate) fn map_db_error(e: SqlxError) -> AppError {
    AppError::Database(e.to_string())
}
