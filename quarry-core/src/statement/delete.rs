//! DELETE statement module

use super::Statement;
use crate::builder::{Clause, LimitClause, WhereClause};
use crate::expression::Expression;
use crate::model::Table;
use crate::{Connection, Error, Result};

/// `DELETE FROM` statement
pub struct Delete<'c> {
    table: Table,
    connection: Option<&'c dyn Connection>,
    where_clause: WhereClause,
    limit: LimitClause,
    require_where: bool,
}

impl<'c> Delete<'c> {
    /// Create a new DELETE from `table`, unguarded and without a connection
    pub fn new(table: Table) -> Self {
        Self {
            table,
            connection: None,
            where_clause: WhereClause::new(),
            limit: LimitClause::default(),
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

    /// Add a WHERE expression
    ///
    /// # Examples
    /// ```
    /// use quarry_core::{op, Comparison, Delete, Statement, Table};
    ///
    /// let delete = Delete::new(Table::new("users_remembered"))
    ///     .where_(("user", 9))
    ///     .or_where(Comparison::new("expires", op::LT, 1_700_000_000));
    ///
    /// assert_eq!(
    ///     delete.generate(),
    ///     "DELETE FROM users_remembered WHERE user = '9' OR expires < '1700000000'"
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

    /// Delete at most `limit` rows; `0` removes the limit
    pub fn limit(mut self, limit: u64) -> Self {
        self.limit.set_limit(limit);
        self
    }

    /// Skip `offset` rows, only rendered together with a limit
    pub fn offset(mut self, offset: u64) -> Self {
        self.limit.set_offset(offset);
        self
    }

    /// Refuse to execute without at least one WHERE expression
    pub fn require_where(mut self) -> Self {
        self.require_where = true;
        self
    }
}

impl Statement for Delete<'_> {
    fn table(&self) -> &Table {
        &self.table
    }

    fn connection(&self) -> Option<&dyn Connection> {
        self.connection
    }

    fn generate(&self) -> String {
        format!(
            "DELETE FROM {}{}{}",
            self.table.qualified_name_with_alias(),
            self.where_clause.build(),
            self.limit.build()
        )
    }

    fn validate(&self) -> Result<()> {
        if self.require_where && self.where_clause.is_empty() {
            return Err(Error::empty_where_clause("DELETE", self.table.name()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criteria::op;
    use crate::expression::Comparison;
    use crate::mock::MockConnection;

    #[test]
    fn test_generate() {
        let delete = Delete::new(Table::new("users_throttling"))
            .where_(Comparison::new("expires_at", op::LT, 1_700_000_000))
            .limit(100);

        assert_eq!(
            delete.generate(),
            "DELETE FROM users_throttling WHERE expires_at < '1700000000' LIMIT 100"
        );
    }

    #[test]
    fn test_unguarded_delete_without_where() {
        let delete = Delete::new(Table::new("users_remembered"));
        assert_eq!(delete.generate(), "DELETE FROM users_remembered");
        assert!(delete.validate().is_ok());
    }

    #[tokio::test]
    async fn test_guarded_delete_is_not_sent() {
        let conn = MockConnection::new();
        let delete = Delete::new(Table::new("users"))
            .require_where()
            .with_connection(&conn);

        let err = delete.execute(None).await.unwrap_err();
        assert!(matches!(err, Error::EmptyWhereClause { .. }));
        assert!(conn.statements().is_empty());
    }
}
