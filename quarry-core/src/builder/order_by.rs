//! ORDER BY clause builder module

use super::Clause;
use crate::criteria::SortDirection;
use crate::expression::{Basic, Expression};
use crate::model::Column;

/// `ORDER BY` clause builder
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderByClause {
    expressions: Vec<Expression>,
}

impl OrderByClause {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, expression: impl Into<Expression>) -> &mut Self {
        self.expressions.push(expression.into());
        self
    }

    /// Order by a model column, qualified with its table
    pub fn add_column(&mut self, column: &Column, direction: SortDirection) -> &mut Self {
        self.add(Basic::new([
            column.qualified_name_without_alias(),
            direction.to_string(),
        ]))
    }
}

impl Clause for OrderByClause {
    fn build(&self) -> String {
        if self.expressions.is_empty() {
            return String::new();
        }

        let orderings: Vec<String> = self.expressions.iter().map(Expression::generate).collect();
        format!(" ORDER BY {}", orderings.join(", "))
    }

    fn is_empty(&self) -> bool {
        self.expressions.is_empty()
    }
}
