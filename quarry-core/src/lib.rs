//! Quarry Core - composable SQL statement construction
//!
//! Statements are assembled from small fragment-generating values over a
//! declared [`Table`]/[`Column`] model, rendered to SQL text with inlined,
//! escaped literals, and executed through the object-safe [`Connection`]
//! contract. Driver failures come back as one vendor-independent [`Error`].

pub mod builder;
pub mod classifier;
pub mod config;
pub mod connection;
pub mod criteria;
pub mod engine;
pub mod error;
pub mod expression;
pub mod model;
pub mod result;
pub mod statement;
pub mod value;

#[cfg(test)]
mod mock;

// Re-export main types
pub use builder::{Aggregate, ColumnFunction};
pub use classifier::DriverFailure;
pub use config::Configuration;
pub use connection::{transaction, Connection};
pub use criteria::{op, Connector, Criteria, JoinType, SortDirection};
pub use error::{Error, ErrorKind, Result};
pub use expression::{Basic, Comparison, Expression, Join, Like, On, Using};
pub use model::{Column, Table};
pub use result::{QueryResult, Row};
pub use statement::{Delete, Insert, Select, Statement, Update};
pub use value::Value;

#[cfg(feature = "mysql")]
pub use engine::MySqlEngine;

/// Start a SELECT over `table`
pub fn select<'c>(table: Table) -> Select<'c> {
    Select::new(table)
}

/// Start an INSERT into `table`
pub fn insert<'c>(table: Table) -> Insert<'c> {
    Insert::new(table)
}

/// Start an UPDATE of `table`
pub fn update<'c>(table: Table) -> Update<'c> {
    Update::new(table)
}

/// Start a DELETE from `table`
pub fn delete<'c>(table: Table) -> Delete<'c> {
    Delete::new(table)
}
