//! JOIN expression module

use super::Expression;
use crate::criteria::JoinType;
use crate::model::Table;

/// `<TYPE> JOIN <table> [<condition>]`
///
/// Owns the joined table so a [`crate::Select`] can project its columns.
#[derive(Debug, Clone, PartialEq)]
pub struct Join {
    table: Table,
    condition: Option<Box<Expression>>,
    join_type: JoinType,
}

impl Join {
    /// A `LEFT JOIN` of `table` with no condition yet
    pub fn new(table: Table) -> Self {
        Self {
            table,
            condition: None,
            join_type: JoinType::default(),
        }
    }

    /// Join `table` on `condition`, usually an [`super::On`] or [`super::Using`]
    pub fn on(table: Table, condition: impl Into<Expression>) -> Self {
        Self::new(table).with_condition(condition)
    }

    pub fn with_condition(mut self, condition: impl Into<Expression>) -> Self {
        self.condition = Some(Box::new(condition.into()));
        self
    }

    pub fn with_type(mut self, join_type: JoinType) -> Self {
        self.join_type = join_type;
        self
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn join_type(&self) -> JoinType {
        self.join_type
    }

    pub fn generate(&self) -> String {
        let mut sql = format!(
            "{} JOIN {}",
            self.join_type,
            self.table.qualified_name_with_alias()
        );

        if let Some(condition) = &self.condition {
            sql.push(' ');
            sql.push_str(&condition.generate());
        }

        sql
    }
}
