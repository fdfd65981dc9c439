//! Connection contract and transaction helper

use std::future::Future;

use futures::future::BoxFuture;
use tracing::{debug, warn};

use crate::{QueryResult, Result};

/// A live database handle statements are executed through
///
/// Object safe so statements can borrow any engine as `&dyn Connection`.
/// Implementations translate driver failures with [`crate::classifier`]
/// before returning them.
pub trait Connection: Send + Sync {
    /// Run one SQL text and collect its rows
    fn execute<'a>(&'a self, sql: &'a str) -> BoxFuture<'a, Result<QueryResult>>;

    /// Quote a string as a literal for this engine
    fn quote(&self, value: &str) -> String {
        crate::value::quote(value)
    }

    fn begin_transaction(&self) -> BoxFuture<'_, Result<()>>;

    /// Commit the open transaction
    fn end_transaction(&self) -> BoxFuture<'_, Result<()>>;

    fn rollback_transaction(&self) -> BoxFuture<'_, Result<()>>;

    /// Auto-increment id generated by the most recent insert
    fn last_insert_id(&self) -> u64;
}

/// Run `f` inside a transaction on `conn`
///
/// Commits when `f` succeeds. When it fails the transaction is rolled back
/// and `f`'s error is returned; a failing rollback is only logged.
pub async fn transaction<C, F, Fut, T>(conn: &C, f: F) -> Result<T>
where
    C: Connection + ?Sized,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    conn.begin_transaction().await?;
    debug!("transaction started");

    match f().await {
        Ok(value) => {
            conn.end_transaction().await?;
            debug!("transaction committed");
            Ok(value)
        }
        Err(err) => {
            match conn.rollback_transaction().await {
                Ok(()) => debug!(error = %err, "transaction rolled back"),
                Err(rollback_err) => {
                    warn!(error = %err, rollback_error = %rollback_err, "rollback failed")
                }
            }
            Err(err)
        }
    }
}
