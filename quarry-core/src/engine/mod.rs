//! Database engines implementing [`crate::Connection`]

#[cfg(feature = "mysql")]
pub mod mysql;

#[cfg(feature = "mysql")]
pub use mysql::MySqlEngine;
