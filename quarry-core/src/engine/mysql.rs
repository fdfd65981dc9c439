//! MySQL engine over a single sqlx connection

use std::sync::atomic::{AtomicU64, Ordering};

use futures::future::{BoxFuture, FutureExt};
use futures::TryStreamExt;
use sqlx::mysql::{MySqlConnectOptions, MySqlConnection, MySqlRow};
use sqlx::{Column as _, ConnectOptions, Connection as _, Either, Executor, Row as _, ValueRef};
use tokio::sync::Mutex;
use tracing::{debug, trace, warn};

use crate::classifier::classify_sqlx;
use crate::result::Row;
use crate::{Configuration, Connection, Error, QueryResult, Result};

/// A [`Connection`] backed by one `MySqlConnection`
///
/// Access to the driver connection is serialised through an async mutex, so
/// one engine can be shared by reference between statements.
pub struct MySqlEngine {
    conn: Mutex<MySqlConnection>,
    last_insert_id: AtomicU64,
}

impl MySqlEngine {
    /// Connect using `config`
    pub async fn connect(config: &Configuration) -> Result<Self> {
        config.validate()?;

        let mut options = MySqlConnectOptions::new()
            .host(config.host())
            .port(config.port())
            .database(config.database())
            .charset(config.charset())
            .collation(config.collation());
        if !config.username().is_empty() {
            options = options.username(config.username());
        }
        if !config.password().is_empty() {
            options = options.password(config.password());
        }

        debug!(dsn = %config.dsn(), "connecting to mysql");
        let conn = options.connect().await.map_err(|e| classify_sqlx(&e))?;
        Ok(Self::from_connection(conn))
    }

    /// Wrap an already established connection
    pub fn from_connection(conn: MySqlConnection) -> Self {
        Self {
            conn: Mutex::new(conn),
            last_insert_id: AtomicU64::new(0),
        }
    }

    /// Close the connection gracefully
    pub async fn close(self) -> Result<()> {
        self.conn
            .into_inner()
            .close()
            .await
            .map_err(|e| classify_sqlx(&e))
    }

    async fn run_control(&self, sql: &'static str) -> std::result::Result<(), String> {
        let mut conn = self.conn.lock().await;
        debug!(statement = sql, "transaction control");
        (&mut *conn)
            .execute(sql)
            .await
            .map(|_| ())
            .map_err(|e| e.to_string())
    }
}

impl Connection for MySqlEngine {
    fn execute<'a>(&'a self, sql: &'a str) -> BoxFuture<'a, Result<QueryResult>> {
        async move {
            trace!(sql, "sending statement");
            let mut conn = self.conn.lock().await;

            let mut rows = Vec::new();
            let mut rows_affected = 0;
            let mut last_insert_id = 0;

            let mut stream = (&mut *conn).fetch_many(sql);
            while let Some(step) = stream.try_next().await.map_err(|e| classify_sqlx(&e))? {
                match step {
                    Either::Left(done) => {
                        rows_affected += done.rows_affected();
                        if done.last_insert_id() > 0 {
                            last_insert_id = done.last_insert_id();
                        }
                    }
                    Either::Right(row) => rows.push(row_to_json(&row)),
                }
            }
            drop(stream);

            if last_insert_id > 0 {
                self.last_insert_id.store(last_insert_id, Ordering::SeqCst);
            }
            debug!(rows = rows.len(), rows_affected, "statement executed");

            Ok(QueryResult::new(rows, rows_affected, last_insert_id))
        }
        .boxed()
    }

    fn begin_transaction(&self) -> BoxFuture<'_, Result<()>> {
        async move {
            self.run_control("BEGIN")
                .await
                .map_err(|message| Error::BeginTransactionFailure { message })
        }
        .boxed()
    }

    fn end_transaction(&self) -> BoxFuture<'_, Result<()>> {
        async move {
            self.run_control("COMMIT")
                .await
                .map_err(|message| Error::CommitTransactionFailure { message })
        }
        .boxed()
    }

    fn rollback_transaction(&self) -> BoxFuture<'_, Result<()>> {
        async move {
            self.run_control("ROLLBACK")
                .await
                .map_err(|message| Error::RollbackTransactionFailure { message })
        }
        .boxed()
    }

    fn last_insert_id(&self) -> u64 {
        self.last_insert_id.load(Ordering::SeqCst)
    }
}

fn row_to_json(row: &MySqlRow) -> Row {
    row.columns()
        .iter()
        .map(|column| (column.name().to_string(), decode_column(row, column.ordinal())))
        .collect()
}

/// Decode one column into JSON, trying the widest matching Rust type first
fn decode_column(row: &MySqlRow, index: usize) -> serde_json::Value {
    use serde_json::Value as Json;

    let is_null = row
        .try_get_raw(index)
        .map(|raw| raw.is_null())
        .unwrap_or(true);
    if is_null {
        return Json::Null;
    }

    if let Ok(v) = row.try_get::<i64, _>(index) {
        return Json::from(v);
    }
    if let Ok(v) = row.try_get::<u64, _>(index) {
        return Json::from(v);
    }
    if let Ok(v) = row.try_get::<f64, _>(index) {
        return Json::from(v);
    }
    if let Ok(v) = row.try_get::<f32, _>(index) {
        return Json::from(v);
    }
    if let Ok(v) = row.try_get::<bool, _>(index) {
        return Json::from(v);
    }
    #[cfg(feature = "decimal-support")]
    if let Ok(v) = row.try_get::<rust_decimal::Decimal, _>(index) {
        return Json::from(v.to_string());
    }
    #[cfg(feature = "datetime-support")]
    {
        if let Ok(v) = row.try_get::<chrono::NaiveDateTime, _>(index) {
            return Json::from(v.to_string());
        }
        if let Ok(v) = row.try_get::<chrono::NaiveDate, _>(index) {
            return Json::from(v.to_string());
        }
        if let Ok(v) = row.try_get::<chrono::NaiveTime, _>(index) {
            return Json::from(v.to_string());
        }
    }
    if let Ok(v) = row.try_get::<String, _>(index) {
        return Json::from(v);
    }
    if let Ok(v) = row.try_get::<Vec<u8>, _>(index) {
        return text_or_bytes(v);
    }

    // Text protocol: DECIMAL, temporal, JSON, SET and BIT values arrive as
    // raw text even when no typed decoder accepts the column
    match row.try_get_unchecked::<Vec<u8>, _>(index) {
        Ok(v) => text_or_bytes(v),
        Err(err) => {
            warn!(column = index, error = %err, "undecodable column value");
            Json::Null
        }
    }
}

/// UTF-8 payloads become strings, anything else an array of bytes
fn text_or_bytes(bytes: Vec<u8>) -> serde_json::Value {
    match String::from_utf8(bytes) {
        Ok(text) => serde_json::Value::from(text),
        Err(err) => serde_json::Value::from(err.into_bytes()),
    }
}
