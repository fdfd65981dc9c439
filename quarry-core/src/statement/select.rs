//! SELECT statement module

use super::Statement;
use crate::builder::{
    Aggregate, Clause, ColumnFunction, GroupByClause, JoinClause, LimitClause, OrderByClause,
    WhereClause,
};
use crate::criteria::SortDirection;
use crate::expression::{Expression, Join};
use crate::model::{Column, Table};
use crate::{Connection, Error, Result};

/// `SELECT` statement
///
/// Projects every column of the table and of each joined table, unless an
/// aggregate function replaces the column list.
///
/// # Examples
/// ```
/// use quarry_core::{op, Column, Select, Statement, Table};
///
/// let users = Table::new("users")
///     .with_column(Column::new("id"))
///     .with_column(Column::new("email"));
///
/// let query = Select::new(users)
///     .where_(("verified", 1))
///     .where_(("registered", op::GT, 1_500_000_000))
///     .limit(10);
///
/// assert_eq!(
///     query.generate(),
///     "SELECT users.id, users.email FROM users WHERE verified = '1' AND registered > '1500000000' LIMIT 10"
/// );
/// ```
pub struct Select<'c> {
    table: Table,
    connection: Option<&'c dyn Connection>,
    function: Option<ColumnFunction>,
    joins: JoinClause,
    where_clause: WhereClause,
    group_by: GroupByClause,
    order_by: OrderByClause,
    limit: LimitClause,
}

impl<'c> Select<'c> {
    pub fn new(table: Table) -> Self {
        Self {
            table,
            connection: None,
            function: None,
            joins: JoinClause::new(),
            where_clause: WhereClause::new(),
            group_by: GroupByClause::new(),
            order_by: OrderByClause::new(),
            limit: LimitClause::default(),
        }
    }

    /// Bind the connection `execute` uses by default
    pub fn with_connection(mut self, connection: &'c dyn Connection) -> Self {
        self.connection = Some(connection);
        self
    }

    pub fn set_connection(&mut self, connection: &'c dyn Connection) {
        self.connection = Some(connection);
    }

    pub fn join(mut self, join: Join) -> Self {
        self.joins.add(join);
        self
    }

    /// Add a WHERE expression
    pub fn where_(mut self, expression: impl Into<Expression>) -> Self {
        self.where_clause.add(expression);
        self
    }

    /// Add a WHERE expression attached with `OR`
    pub fn or_where(mut self, expression: impl Into<Expression>) -> Self {
        self.where_clause.add_or(expression);
        self
    }

    pub fn group_by(mut self, expression: impl Into<Expression>) -> Self {
        self.group_by.add(expression);
        self
    }

    /// Set the HAVING expression; only emitted alongside a GROUP BY
    pub fn having(mut self, expression: impl Into<Expression>) -> Self {
        self.group_by.having(expression);
        self
    }

    pub fn order_by(mut self, expression: impl Into<Expression>) -> Self {
        self.order_by.add(expression);
        self
    }

    pub fn order_by_column(mut self, column: &Column, direction: SortDirection) -> Self {
        self.order_by.add_column(column, direction);
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.limit.set_limit(limit);
        self
    }

    pub fn offset(mut self, offset: u64) -> Self {
        self.limit.set_offset(offset);
        self
    }

    /// Project an aggregate instead of the column list
    pub fn function(mut self, function: ColumnFunction) -> Self {
        self.function = Some(function);
        self
    }

    pub fn sum(self, column: impl Into<String>) -> Self {
        self.function(ColumnFunction::new(Aggregate::Sum, column))
    }

    pub fn avg(self, column: impl Into<String>) -> Self {
        self.function(ColumnFunction::new(Aggregate::Avg, column))
    }

    pub fn count(self, column: impl Into<String>) -> Self {
        self.function(ColumnFunction::new(Aggregate::Count, column))
    }

    fn projection(&self) -> String {
        match &self.function {
            Some(function) => function.build(),
            None => self
                .table
                .columns()
                .iter()
                .chain(self.joins.columns())
                .map(Column::qualified_name_with_alias)
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

impl Statement for Select<'_> {
    fn table(&self) -> &Table {
        &self.table
    }

    fn connection(&self) -> Option<&dyn Connection> {
        self.connection
    }

    fn generate(&self) -> String {
        format!(
            "SELECT {} FROM {}{}{}{}{}{}",
            self.projection(),
            self.table.qualified_name_with_alias(),
            self.joins.build(),
            self.where_clause.build(),
            self.group_by.build(),
            self.order_by.build(),
            self.limit.build()
        )
    }

    fn validate(&self) -> Result<()> {
        if self.projection().is_empty() {
            return Err(Error::invalid_statement(format!(
                "SELECT on {} has no columns to project",
                self.table.name()
            )));
        }
        Ok(())
    }
}
