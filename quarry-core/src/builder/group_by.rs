//! GROUP BY / HAVING clause builder module

use super::Clause;
use crate::expression::Expression;

/// `GROUP BY ... HAVING ...` clause builder
///
/// The having expression is only rendered together with at least one
/// grouping expression.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupByClause {
    expressions: Vec<Expression>,
    having: Option<Expression>,
}

impl GroupByClause {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, expression: impl Into<Expression>) -> &mut Self {
        self.expressions.push(expression.into());
        self
    }

    /// Set the having expression, replacing any previous one
    pub fn having(&mut self, expression: impl Into<Expression>) -> &mut Self {
        self.having = Some(expression.into());
        self
    }
}

impl Clause for GroupByClause {
    fn build(&self) -> String {
        if self.expressions.is_empty() {
            return String::new();
        }

        let groups: Vec<String> = self.expressions.iter().map(Expression::generate).collect();
        let mut sql = format!(" GROUP BY {}", groups.join(", "));

        if let Some(having) = &self.having {
            sql.push_str(" HAVING ");
            sql.push_str(&having.generate());
        }
        sql
    }

    fn is_empty(&self) -> bool {
        self.expressions.is_empty()
    }
}
