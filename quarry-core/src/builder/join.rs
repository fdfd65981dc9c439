//! JOIN clause builder module

use super::Clause;
use crate::expression::Join;
use crate::model::Column;

/// Join clause builder
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JoinClause {
    joins: Vec<Join>,
}

impl JoinClause {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, join: Join) -> &mut Self {
        self.joins.push(join);
        self
    }

    pub fn joins(&self) -> &[Join] {
        &self.joins
    }

    /// Columns of every joined table, in join order
    pub fn columns(&self) -> impl Iterator<Item = &Column> {
        self.joins.iter().flat_map(|join| join.table().columns())
    }
}

impl Clause for JoinClause {
    fn build(&self) -> String {
        if self.joins.is_empty() {
            return String::new();
        }

        let joins: Vec<String> = self.joins.iter().map(Join::generate).collect();
        format!(" {}", joins.join(" "))
    }

    fn is_empty(&self) -> bool {
        self.joins.is_empty()
    }
}
