//! Full SQL statements over a [`Table`]
//!
//! A statement owns its table, borrows an optional [`Connection`], and
//! delegates each clause to the matching builder in [`crate::builder`].

pub mod delete;
pub mod insert;
pub mod select;
pub mod update;

pub use delete::Delete;
pub use insert::Insert;
pub use select::Select;
pub use update::Update;

use std::future::Future;

use tracing::{debug, trace, warn};

use crate::model::Table;
use crate::{Connection, Error, QueryResult, Result};

/// Behaviour shared by every statement
pub trait Statement {
    /// The table the statement operates on
    fn table(&self) -> &Table;

    /// The connection bound at construction, if any
    fn connection(&self) -> Option<&dyn Connection>;

    /// Render the SQL text. Pure; calling it twice yields the same text.
    fn generate(&self) -> String;

    /// Check the statement is complete enough to be executed
    fn validate(&self) -> Result<()> {
        Ok(())
    }

    /// Validate, generate and run the statement.
    ///
    /// `connection` overrides the bound connection. Without either the call
    /// fails with [`Error::NoConnection`].
    fn execute<'a>(
        &'a self,
        connection: Option<&'a dyn Connection>,
    ) -> impl Future<Output = Result<QueryResult>> + Send + 'a
    where
        Self: Sync,
    {
        async move {
            let Some(conn) = connection.or_else(|| self.connection()) else {
                warn!(table = self.table().name(), "statement executed without a connection");
                return Err(Error::NoConnection);
            };

            self.validate()?;
            let sql = self.generate();
            trace!(sql = %sql, "generated statement");
            debug!(table = self.table().name(), "executing statement");

            conn.execute(&sql).await
        }
    }
}
