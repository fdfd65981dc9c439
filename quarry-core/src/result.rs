//! Rows returned by one statement execution

use std::collections::VecDeque;

use serde::de::DeserializeOwned;

use crate::Result;

/// A generic row: column name to JSON value
pub type Row = serde_json::Map<String, serde_json::Value>;

/// The outcome of one round trip through a [`crate::Connection`]
///
/// Rows are handed out cursor-style: [`fetch`](QueryResult::fetch) takes the
/// next row, [`fetch_all`](QueryResult::fetch_all) takes whatever is left.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryResult {
    rows: VecDeque<Row>,
    row_count: usize,
    rows_affected: u64,
    last_insert_id: u64,
}

impl QueryResult {
    pub fn new(rows: Vec<Row>, rows_affected: u64, last_insert_id: u64) -> Self {
        Self {
            row_count: rows.len(),
            rows: rows.into(),
            rows_affected,
            last_insert_id,
        }
    }

    /// Result of a statement that returned rows
    pub fn from_rows(rows: Vec<Row>) -> Self {
        Self::new(rows, 0, 0)
    }

    /// Result of a statement that only modified rows
    pub fn affected(rows_affected: u64, last_insert_id: u64) -> Self {
        Self::new(Vec::new(), rows_affected, last_insert_id)
    }

    /// Take the next row
    pub fn fetch(&mut self) -> Option<Row> {
        self.rows.pop_front()
    }

    /// Take the next row, deserialized into `T`
    pub fn fetch_as<T: DeserializeOwned>(&mut self) -> Result<Option<T>> {
        self.fetch()
            .map(|row| serde_json::from_value(serde_json::Value::Object(row)))
            .transpose()
            .map_err(Into::into)
    }

    /// Take every remaining row
    pub fn fetch_all(&mut self) -> Vec<Row> {
        self.rows.drain(..).collect()
    }

    /// Take every remaining row, deserialized into `T`
    pub fn fetch_all_as<T: DeserializeOwned>(&mut self) -> Result<Vec<T>> {
        self.fetch_all()
            .into_iter()
            .map(|row| serde_json::from_value(serde_json::Value::Object(row)).map_err(Into::into))
            .collect()
    }

    /// Rows returned, or rows affected for statements that return none
    pub fn len(&self) -> usize {
        if self.row_count > 0 {
            self.row_count
        } else {
            self.rows_affected as usize
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn rows_affected(&self) -> u64 {
        self.rows_affected
    }

    pub fn last_insert_id(&self) -> u64 {
        self.last_insert_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct User {
        id: i64,
        email: String,
    }

    fn row(value: serde_json::Value) -> Row {
        match value {
            serde_json::Value::Object(map) => map,
            _ => panic!("not an object"),
        }
    }

    #[test]
    fn test_fetch_is_cursor_like() {
        let mut result = QueryResult::from_rows(vec![
            row(json!({"id": 1, "email": "a@example.com"})),
            row(json!({"id": 2, "email": "b@example.com"})),
            row(json!({"id": 3, "email": "c@example.com"})),
        ]);

        let first: User = result.fetch_as().unwrap().unwrap();
        assert_eq!(first, User { id: 1, email: "a@example.com".into() });

        let rest: Vec<User> = result.fetch_all_as().unwrap();
        assert_eq!(rest.len(), 2);
        assert_eq!(rest[1].id, 3);

        assert!(result.fetch().is_none());
        assert_eq!(result.len(), 3);
    }

    #[test]
    fn test_len_falls_back_to_rows_affected() {
        let result = QueryResult::affected(4, 17);
        assert_eq!(result.len(), 4);
        assert_eq!(result.last_insert_id(), 17);
        assert!(QueryResult::default().is_empty());
    }

    #[test]
    fn test_fetch_as_reports_shape_mismatch() {
        let mut result = QueryResult::from_rows(vec![row(json!({"id": "x"}))]);
        let err = result.fetch_as::<User>().unwrap_err();
        assert!(matches!(err, crate::Error::Serialization(_)));
    }
}
