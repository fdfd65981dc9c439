//! UPDATE statement module

use super::Statement;
use crate::builder::{Clause, WhereClause};
use crate::expression::Expression;
use crate::model::Table;
use crate::{Connection, Error, Result, Value};

/// `UPDATE` statement
pub struct Update<'c> {
    table: Table,
    connection: Option<&'c dyn Connection>,
    values: Vec<(String, Value)>,
    where_clause: WhereClause,
    require_where: bool,
}

impl<'c> Update<'c> {
    /// Create a new UPDATE of `table`, unguarded and without a connection
    pub fn new(table: Table) -> Self {
        Self {
            table,
            connection: None,
            values: Vec::new(),
            where_clause: WhereClause::new(),
            require_where: false,
        }
    }

    /// Bind the connection `execute` uses when no override is given
    pub fn with_connection(mut self, connection: &'c dyn Connection) -> Self {
        self.connection = Some(connection);
        self
    }

    /// Bind the connection in place
    pub fn set_connection(&mut self, connection: &'c dyn Connection) {
        self.connection = Some(connection);
    }

    /// Assign `value` to `column`; assigning a column again overwrites it
    pub fn set(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        let column = column.into();
        let value = value.into();
        match self.values.iter_mut().find(|(existing, _)| *existing == column) {
            Some((_, slot)) => *slot = value,
            None => self.values.push((column, value)),
        }
        self
    }

    /// Add a WHERE expression
    ///
    /// # Examples
    /// ```
    /// use quarry_core::{op, Comparison, Statement, Table, Update};
    ///
    /// let update = Update::new(Table::new("users"))
    ///     .set("verified", 1)
    ///     .where_(("email", "ann@example.com"))
    ///     .where_(Comparison::new("status", op::NEQ, 2));
    ///
    /// assert_eq!(
    ///     update.generate(),
    ///     "UPDATE users SET verified='1' WHERE email = 'ann@example.com' AND status != '2'"
    /// );
    /// ```
    pub fn where_(mut self, expression: impl Into<Expression>) -> Self {
        self.where_clause.add(expression);
        self
    }

    /// Add a WHERE expression attached with `OR`
    pub fn or_where(mut self, expression: impl Into<Expression>) -> Self {
        self.where_clause.add_or(expression);
        self
    }

    /// Refuse to execute without at least one WHERE expression
    pub fn require_where(mut self) -> Self {
        self.require_where = true;
        self
    }
}

impl Statement for Update<'_> {
    fn table(&self) -> &Table {
        &self.table
    }

    fn connection(&self) -> Option<&dyn Connection> {
        self.connection
    }

    fn generate(&self) -> String {
        let assignments: Vec<String> = self
            .values
            .iter()
            .map(|(column, value)| format!("{}={}", column, value.literal()))
            .collect();

        format!(
            "UPDATE {} SET {}{}",
            self.table.qualified_name_with_alias(),
            assignments.join(", "),
            self.where_clause.build()
        )
    }

    fn validate(&self) -> Result<()> {
        if self.values.is_empty() {
            return Err(Error::invalid_statement(format!(
                "UPDATE of {} sets no values",
                self.table.name()
            )));
        }
        if self.require_where && self.where_clause.is_empty() {
            return Err(Error::empty_where_clause("UPDATE", self.table.name()));
        }
        Ok(())
    }
}
