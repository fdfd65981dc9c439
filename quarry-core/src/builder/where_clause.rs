//! WHERE clause builder module

use super::Clause;
use crate::expression::Expression;

/// Separator placed before an expression that does not carry its own connector
const UNTYPED_SEPARATOR: &str = "  AND  ";

/// `WHERE` clause builder
///
/// Expressions are joined positionally. Comparisons and LIKE patterns are
/// preceded by their own connector, anything else by [`UNTYPED_SEPARATOR`].
/// No parenthesised grouping is performed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WhereClause {
    expressions: Vec<Expression>,
}

impl WhereClause {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, expression: impl Into<Expression>) -> &mut Self {
        self.expressions.push(expression.into());
        self
    }

    /// Add an expression attached with `OR`
    pub fn add_or(&mut self, expression: impl Into<Expression>) -> &mut Self {
        self.expressions.push(expression.into().or());
        self
    }

    pub fn expressions(&self) -> &[Expression] {
        &self.expressions
    }

    pub fn len(&self) -> usize {
        self.expressions.len()
    }
}

impl Clause for WhereClause {
    fn build(&self) -> String {
        if self.expressions.is_empty() {
            return String::new();
        }

        let mut sql = String::from(" WHERE ");
        for (i, expression) in self.expressions.iter().enumerate() {
            if i > 0 {
                match expression.connector() {
                    Some(connector) => {
                        sql.push(' ');
                        sql.push_str(connector.as_str());
                        sql.push(' ');
                    }
                    None => sql.push_str(UNTYPED_SEPARATOR),
                }
            }
            sql.push_str(&expression.generate());
        }
        sql
    }

    fn is_empty(&self) -> bool {
        self.expressions.is_empty()
    }
}
