//! Scoped database session acquisition
//!
//! Each request borrows one session from the shared pool. A session is
//! never shared between concurrent callers; the handle returns to the pool
//! when dropped, so release happens on every exit path, including when the
//! caller bails out with an error.

use futures::future::BoxFuture;
use sqlx::pool::PoolConnection;
use sqlx::postgres::PgPool;
use sqlx::Postgres;
use tracing::debug;

use auth_common::AppResult;

use crate::error::map_db_error;

/// A single checked-out database session
///
/// One logical conversation with the database. Returns to the pool on drop.
pub type DbSession = PoolConnection<Postgres>;

/// Check one session out of the pool
///
/// For callers that manage the scope themselves; prefer [`with_session`]
/// in request handlers.
///
/// # Errors
/// Propagates the driver error if the pool cannot provide a connection.
/// Acquisition is not retried.
pub async fn acquire_session(pool: &PgPool) -> AppResult<DbSession> {
    let session = pool.acquire().await.map_err(map_db_error)?;
    debug!("database session acquired");
    Ok(session)
}

/// Run `f` with a session scoped to the call
///
/// Acquires one session, hands it to `f`, and returns it to the pool after
/// `f` completes — whether `f` succeeds or fails. Acquisition failures
/// propagate without invoking `f`.
pub async fn with_session<T, F>(pool: &PgPool, f: F) -> AppResult<T>
where
    F: for<'c> FnOnce(&'c mut DbSession) -> BoxFuture<'c, AppResult<T>>,
{
    let mut session = acquire_session(pool).await?;
    let result = f(&mut session).await;
    drop(session);
    debug!("database session released");
    result
}
