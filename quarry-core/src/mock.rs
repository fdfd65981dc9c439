//! In-memory connection used by the unit tests

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use futures::future::{BoxFuture, FutureExt};

use crate::classifier::DriverFailure;
use crate::result::Row;
use crate::{Connection, Error, QueryResult, Result};

/// Records every statement it receives and answers with canned rows
#[derive(Default)]
pub struct MockConnection {
    statements: Mutex<Vec<String>>,
    rows: Vec<Row>,
    failure: Option<DriverFailure>,
    fail_begin: bool,
    fail_rollback: bool,
    last_insert_id: AtomicU64,
}

impl MockConnection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer every `execute` with these rows
    pub fn with_rows(mut self, rows: Vec<Row>) -> Self {
        self.rows = rows;
        self
    }

    /// Fail every `execute` with this driver failure
    pub fn failing_with(mut self, failure: DriverFailure) -> Self {
        self.failure = Some(failure);
        self
    }

    pub fn failing_begin(mut self) -> Self {
        self.fail_begin = true;
        self
    }

    pub fn failing_rollback(mut self) -> Self {
        self.fail_rollback = true;
        self
    }

    /// Every SQL text received so far, transaction control included
    pub fn statements(&self) -> Vec<String> {
        self.statements.lock().unwrap().clone()
    }

    fn record(&self, sql: &str) {
        self.statements.lock().unwrap().push(sql.to_string());
    }
}

impl Connection for MockConnection {
    fn execute<'a>(&'a self, sql: &'a str) -> BoxFuture<'a, Result<QueryResult>> {
        async move {
            self.record(sql);
            if let Some(failure) = &self.failure {
                return Err(failure.clone().classify());
            }

            if sql.starts_with("INSERT") {
                let id = self.last_insert_id.fetch_add(1, Ordering::SeqCst) + 1;
                return Ok(QueryResult::affected(1, id));
            }
            Ok(QueryResult::from_rows(self.rows.clone()))
        }
        .boxed()
    }

    fn begin_transaction(&self) -> BoxFuture<'_, Result<()>> {
        async move {
            if self.fail_begin {
                return Err(Error::BeginTransactionFailure {
                    message: "already in a transaction".to_string(),
                });
            }
            self.record("BEGIN");
            Ok(())
        }
        .boxed()
    }

    fn end_transaction(&self) -> BoxFuture<'_, Result<()>> {
        async move {
            self.record("COMMIT");
            Ok(())
        }
        .boxed()
    }

    fn rollback_transaction(&self) -> BoxFuture<'_, Result<()>> {
        async move {
            self.record("ROLLBACK");
            if self.fail_rollback {
                return Err(Error::RollbackTransactionFailure {
                    message: "no active transaction".to_string(),
                });
            }
            Ok(())
        }
        .boxed()
    }

    fn last_insert_id(&self) -> u64 {
        self.last_insert_id.load(Ordering::SeqCst)
    }
}
