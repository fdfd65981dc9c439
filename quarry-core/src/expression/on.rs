//! ON join condition expression

use crate::criteria::Criteria;
use crate::model::Column;

/// `ON <a>.<first> <operator> <b>.<second>` join condition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct On {
    first_column: String,
    operator: Criteria,
    second_column: String,
    first_alias: Option<String>,
    second_alias: Option<String>,
}

impl On {
    /// Compare two bare column names
    pub fn new(
        first_column: impl Into<String>,
        operator: Criteria,
        second_column: impl Into<String>,
    ) -> Self {
        Self {
            first_column: first_column.into(),
            operator,
            second_column: second_column.into(),
            first_alias: None,
            second_alias: None,
        }
    }

    /// Compare two model columns by their qualified names
    pub fn columns(first: &Column, operator: Criteria, second: &Column) -> Self {
        Self::new(
            first.qualified_name_without_alias(),
            operator,
            second.qualified_name_without_alias(),
        )
    }

    /// Equality of two bare column names, the usual join condition
    pub fn equals(first_column: impl Into<String>, second_column: impl Into<String>) -> Self {
        Self::new(first_column, Criteria::EqualsTo, second_column)
    }

    /// Qualify the left-hand column with a table alias or name
    pub fn with_first_alias(mut self, alias: impl Into<String>) -> Self {
        self.first_alias = Some(alias.into());
        self
    }

    /// Qualify the right-hand column with a table alias or name
    pub fn with_second_alias(mut self, alias: impl Into<String>) -> Self {
        self.second_alias = Some(alias.into());
        self
    }

    pub fn generate(&self) -> String {
        format!(
            "ON {} {} {}",
            qualify(self.first_alias.as_deref(), &self.first_column),
            self.operator,
            qualify(self.second_alias.as_deref(), &self.second_column)
        )
    }
}

fn qualify(alias: Option<&str>, column: &str) -> String {
    match alias {
        Some(alias) => format!("{}.{}", alias, column),
        None => column.to_string(),
    }
}
