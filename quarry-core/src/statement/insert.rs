//! INSERT statement module

use super::Statement;
use crate::model::Table;
use crate::{Connection, Error, Result, Value};

/// `INSERT INTO` statement
///
/// Values are kept in the order their columns were first set; setting a
/// column again overwrites its value in place.
pub struct Insert<'c> {
    table: Table,
    connection: Option<&'c dyn Connection>,
    values: Vec<(String, Value)>,
}

impl<'c> Insert<'c> {
    pub fn new(table: Table) -> Self {
        Self {
            table,
            connection: None,
            values: Vec::new(),
        }
    }

    pub fn with_connection(mut self, connection: &'c dyn Connection) -> Self {
        self.connection = Some(connection);
        self
    }

    pub fn set_connection(&mut self, connection: &'c dyn Connection) {
        self.connection = Some(connection);
    }

    /// Set the value inserted into `column`
    pub fn value(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.put(column.into(), value.into());
        self
    }

    /// Set several column values at once
    pub fn values<I, K, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        for (column, value) in values {
            self.put(column.into(), value.into());
        }
        self
    }

    fn put(&mut self, column: String, value: Value) {
        match self.values.iter_mut().find(|(existing, _)| *existing == column) {
            Some((_, slot)) => *slot = value,
            None => self.values.push((column, value)),
        }
    }
}

impl Statement for Insert<'_> {
    fn table(&self) -> &Table {
        &self.table
    }

    fn connection(&self) -> Option<&dyn Connection> {
        self.connection
    }

    fn generate(&self) -> String {
        let columns: Vec<&str> = self.values.iter().map(|(column, _)| column.as_str()).collect();
        let values: Vec<String> = self.values.iter().map(|(_, value)| value.literal()).collect();

        format!(
            "INSERT INTO {} ({}) VALUES ({})",
            self.table.qualified_name_without_alias(),
            columns.join(", "),
            values.join(", ")
        )
    }

    fn validate(&self) -> Result<()> {
        if self.values.is_empty() {
            return Err(Error::invalid_statement(format!(
                "INSERT into {} has no values",
                self.table.name()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockConnection;

    #[test]
    fn test_values_escaped_and_ordered() {
        let insert = Insert::new(Table::aliased("people", "p"))
            .value("name", "O'Brien")
            .value("age", 30);

        assert_eq!(
            insert.generate(),
            "INSERT INTO people (name, age) VALUES ('O\\'Brien', '30')"
        );
    }

    #[test]
    fn test_duplicate_column_keeps_position() {
        let insert = Insert::new(Table::new("users"))
            .values([("email", "a@b.c"), ("username", "ann")])
            .value("email", "ann@b.c")
            .value("resettable", ());

        assert_eq!(
            insert.generate(),
            "INSERT INTO users (email, username, resettable) VALUES ('ann@b.c', 'ann', NULL)"
        );
    }

    #[tokio::test]
    async fn test_execute_reports_insert_id() {
        let conn = MockConnection::new();
        let insert = Insert::new(Table::new("users"))
            .value("email", "a@b.c")
            .with_connection(&conn);

        let result = insert.execute(None).await.unwrap();
        assert_eq!(result.last_insert_id(), 1);
        assert_eq!(conn.last_insert_id(), 1);
    }

    #[tokio::test]
    async fn test_empty_insert_is_not_sent() {
        let conn = MockConnection::new();
        let insert = Insert::new(Table::new("users")).with_connection(&conn);

        assert!(matches!(
            insert.execute(None).await,
            Err(Error::InvalidStatement { .. })
        ));
        assert!(conn.statements().is_empty());
    }
}
