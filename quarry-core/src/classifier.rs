//! Translation of raw driver failures into the error taxonomy
//!
//! The SQLSTATE class of a failure has the highest priority, its subclass
//! comes next, and the vendor error number is only consulted when the state
//! code is missing or not recognised.

use crate::error::{Error, ErrorKind};

/// A driver failure before classification
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DriverFailure {
    /// Raw error code reported by the driver, usually a 5-character SQLSTATE
    pub code: Option<String>,
    /// Vendor-specific error number (e.g. MySQL's 1044)
    pub vendor_code: Option<i64>,
    pub message: String,
}

impl DriverFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: None,
            vendor_code: None,
            message: message.into(),
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn with_vendor_code(mut self, vendor_code: i64) -> Self {
        self.vendor_code = Some(vendor_code);
        self
    }

    /// Classify this failure, keeping its message
    pub fn classify(self) -> Error {
        classify(self)
    }
}

impl From<&sqlx::Error> for DriverFailure {
    fn from(err: &sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => {
                let mut failure = DriverFailure::new(db_err.message());
                failure.code = db_err.code().map(|code| code.into_owned());
                failure.vendor_code = vendor_code(db_err.as_ref());
                failure
            }
            other => DriverFailure::new(other.to_string()),
        }
    }
}

#[cfg(feature = "mysql")]
fn vendor_code(db_err: &dyn sqlx::error::DatabaseError) -> Option<i64> {
    db_err
        .try_downcast_ref::<sqlx::mysql::MySqlDatabaseError>()
        .map(|mysql_err| i64::from(mysql_err.number()))
}

#[cfg(not(feature = "mysql"))]
fn vendor_code(_db_err: &dyn sqlx::error::DatabaseError) -> Option<i64> {
    None
}

/// Map a SQLSTATE code and vendor error number onto a taxonomy kind.
///
/// A numeric `code` that is not a 5-character SQLSTATE doubles as the vendor
/// number when `vendor_code` is absent, since some drivers report only that.
pub fn classify_code(code: Option<&str>, vendor_code: Option<i64>) -> ErrorKind {
    let (class, subclass) = match code {
        Some(code) if code.len() == 5 && code.is_ascii() => (Some(&code[0..2]), Some(&code[2..5])),
        _ => (None, None),
    };

    match (class, subclass) {
        (Some("3D"), _) => ErrorKind::NoDatabaseSelected,
        (Some("23"), _) => ErrorKind::IntegrityConstraintViolation,
        (Some("42"), Some("S02")) => ErrorKind::TableNotFound,
        (Some("42"), Some("S22")) => ErrorKind::UnknownColumn,
        (Some("42"), _) => ErrorKind::Syntax,
        _ => {
            let number = vendor_code.or_else(|| code.and_then(|c| c.trim().parse().ok()));
            match number {
                Some(1044) => ErrorKind::WrongCredentials,
                Some(1049) => ErrorKind::DatabaseNotFound,
                _ => ErrorKind::Database,
            }
        }
    }
}

/// Classify a driver failure into a taxonomy error carrying its message
pub fn classify(failure: DriverFailure) -> Error {
    let kind = classify_code(failure.code.as_deref(), failure.vendor_code);
    tracing::trace!(
        code = failure.code.as_deref().unwrap_or(""),
        vendor_code = failure.vendor_code.unwrap_or(0),
        ?kind,
        "classified driver failure"
    );
    kind.with_message(failure.message)
}

/// Classify a sqlx error
pub fn classify_sqlx(err: &sqlx::Error) -> Error {
    classify(DriverFailure::from(err))
}
