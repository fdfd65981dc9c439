//! Error types for Quarry

use thiserror::Error;

/// The main error type for Quarry operations
///
/// Driver failures reach callers only in classified form: the engine hands
/// every raw driver error to [`crate::classifier::classify`], which picks one
/// of the taxonomy variants below and keeps the driver's message.
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed SQL or an access rule violation (SQLSTATE class `42`)
    #[error("SQL syntax error: {message}")]
    Syntax { message: String },

    /// Referenced table does not exist (SQLSTATE `42S02`)
    #[error("Table not found: {message}")]
    TableNotFound { message: String },

    /// Referenced column does not exist (SQLSTATE `42S22`)
    #[error("Unknown column: {message}")]
    UnknownColumn { message: String },

    /// UNIQUE, NOT NULL or FOREIGN KEY violation (SQLSTATE class `23`)
    #[error("Integrity constraint violation: {message}")]
    IntegrityConstraintViolation { message: String },

    /// No default database selected (SQLSTATE class `3D`)
    #[error("No database selected: {message}")]
    NoDatabaseSelected { message: String },

    /// Access denied for the configured user (vendor error 1044)
    #[error("Wrong credentials: {message}")]
    WrongCredentials { message: String },

    /// Configured database does not exist (vendor error 1049)
    #[error("Database not found: {message}")]
    DatabaseNotFound { message: String },

    /// Any driver failure the classifier does not recognise
    #[error("Database error: {message}")]
    Database { message: String },

    /// Column lookup on the table model failed
    #[error("Column '{column}' not found in table '{table}'")]
    NotFound { table: String, column: String },

    #[error("Could not begin transaction: {message}")]
    BeginTransactionFailure { message: String },

    #[error("Could not commit transaction: {message}")]
    CommitTransactionFailure { message: String },

    #[error("Could not roll back transaction: {message}")]
    RollbackTransactionFailure { message: String },

    /// A guarded UPDATE or DELETE was executed without a WHERE clause
    #[error("Refusing to run {statement} on '{table}' without a WHERE clause")]
    EmptyWhereClause { statement: String, table: String },

    /// Statement cannot produce valid SQL
    #[error("Invalid statement: {message}")]
    InvalidStatement { message: String },

    /// Unknown comparison operator token
    #[error("Unknown criteria '{criteria}'")]
    InvalidCriteria { criteria: String },

    /// `execute` was called with no bound or supplied connection
    #[error("Statement has no connection to execute on")]
    NoConnection,

    /// Invalid connection configuration
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience Result type for Quarry operations
pub type Result<T> = std::result::Result<T, Error>;

/// The taxonomy kind of an [`Error`], without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Syntax,
    TableNotFound,
    UnknownColumn,
    IntegrityConstraintViolation,
    NoDatabaseSelected,
    WrongCredentials,
    DatabaseNotFound,
    Database,
    NotFound,
    BeginTransactionFailure,
    CommitTransactionFailure,
    RollbackTransactionFailure,
    EmptyWhereClause,
    InvalidStatement,
    InvalidCriteria,
    NoConnection,
    Configuration,
    Serialization,
}

impl ErrorKind {
    /// Build the error of this kind carrying `message`.
    ///
    /// Only meaningful for the kinds the classifier produces; the structural
    /// kinds carry different payloads and fall back to [`Error::Database`].
    pub fn with_message(self, message: impl Into<String>) -> Error {
        let message = message.into();
        match self {
            ErrorKind::Syntax => Error::Syntax { message },
            ErrorKind::TableNotFound => Error::TableNotFound { message },
            ErrorKind::UnknownColumn => Error::UnknownColumn { message },
            ErrorKind::IntegrityConstraintViolation => {
                Error::IntegrityConstraintViolation { message }
            }
            ErrorKind::NoDatabaseSelected => Error::NoDatabaseSelected { message },
            ErrorKind::WrongCredentials => Error::WrongCredentials { message },
            ErrorKind::DatabaseNotFound => Error::DatabaseNotFound { message },
            ErrorKind::BeginTransactionFailure => Error::BeginTransactionFailure { message },
            ErrorKind::CommitTransactionFailure => Error::CommitTransactionFailure { message },
            ErrorKind::RollbackTransactionFailure => {
                Error::RollbackTransactionFailure { message }
            }
            ErrorKind::InvalidStatement => Error::InvalidStatement { message },
            ErrorKind::Configuration => Error::Configuration { message },
            _ => Error::Database { message },
        }
    }
}

impl Error {
    /// Create a new column not found error
    pub fn not_found(table: impl Into<String>, column: impl Into<String>) -> Self {
        Self::NotFound {
            table: table.into(),
            column: column.into(),
        }
    }

    /// Create a new invalid statement error
    pub fn invalid_statement(message: impl Into<String>) -> Self {
        Self::InvalidStatement {
            message: message.into(),
        }
    }

    /// Create a new configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a new empty WHERE clause error
    pub fn empty_where_clause(statement: impl Into<String>, table: impl Into<String>) -> Self {
        Self::EmptyWhereClause {
            statement: statement.into(),
            table: table.into(),
        }
    }

    /// The taxonomy kind of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Syntax { .. } => ErrorKind::Syntax,
            Error::TableNotFound { .. } => ErrorKind::TableNotFound,
            Error::UnknownColumn { .. } => ErrorKind::UnknownColumn,
            Error::IntegrityConstraintViolation { .. } => ErrorKind::IntegrityConstraintViolation,
            Error::NoDatabaseSelected { .. } => ErrorKind::NoDatabaseSelected,
            Error::WrongCredentials { .. } => ErrorKind::WrongCredentials,
            Error::DatabaseNotFound { .. } => ErrorKind::DatabaseNotFound,
            Error::Database { .. } => ErrorKind::Database,
            Error::NotFound { .. } => ErrorKind::NotFound,
            Error::BeginTransactionFailure { .. } => ErrorKind::BeginTransactionFailure,
            Error::CommitTransactionFailure { .. } => ErrorKind::CommitTransactionFailure,
            Error::RollbackTransactionFailure { .. } => ErrorKind::RollbackTransactionFailure,
            Error::EmptyWhereClause { .. } => ErrorKind::EmptyWhereClause,
            Error::InvalidStatement { .. } => ErrorKind::InvalidStatement,
            Error::InvalidCriteria { .. } => ErrorKind::InvalidCriteria,
            Error::NoConnection => ErrorKind::NoConnection,
            Error::Configuration { .. } => ErrorKind::Configuration,
            Error::Serialization(_) => ErrorKind::Serialization,
        }
    }

    /// The driver message carried by a classified error, if any
    pub fn driver_message(&self) -> Option<&str> {
        match self {
            Error::Syntax { message }
            | Error::TableNotFound { message }
            | Error::UnknownColumn { message }
            | Error::IntegrityConstraintViolation { message }
            | Error::NoDatabaseSelected { message }
            | Error::WrongCredentials { message }
            | Error::DatabaseNotFound { message }
            | Error::Database { message }
            | Error::BeginTransactionFailure { message }
            | Error::CommitTransactionFailure { message }
            | Error::RollbackTransactionFailure { message } => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_error() {
        let err = Error::not_found("users", "invalid_column");
        assert!(matches!(err, Error::NotFound { .. }));
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.to_string(), "Column 'invalid_column' not found in table 'users'");
    }

    #[test]
    fn test_invalid_statement_error() {
        let err = Error::invalid_statement("UPDATE requires SET values");
        assert!(matches!(err, Error::InvalidStatement { .. }));
        assert_eq!(err.to_string(), "Invalid statement: UPDATE requires SET values");
    }

    #[test]
    fn test_empty_where_clause_error() {
        let err = Error::empty_where_clause("DELETE", "users");
        assert_eq!(
            err.to_string(),
            "Refusing to run DELETE on 'users' without a WHERE clause"
        );
    }

    #[test]
    fn test_kind_round_trips_through_with_message() {
        let err = ErrorKind::TableNotFound.with_message("Table 'app.users' doesn't exist");
        assert_eq!(err.kind(), ErrorKind::TableNotFound);
        assert_eq!(err.driver_message(), Some("Table 'app.users' doesn't exist"));
    }

    #[test]
    fn test_structural_kind_falls_back_to_database() {
        let err = ErrorKind::NoConnection.with_message("boom");
        assert!(matches!(err, Error::Database { ref message } if message == "boom"));
    }
}
