//! Aggregate projection builder module

use std::fmt::{self, Display};

use super::Clause;

/// Aggregate functions a [`crate::Select`] can project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Aggregate {
    Sum,
    Avg,
    Count,
}

impl Aggregate {
    pub fn as_str(&self) -> &'static str {
        match self {
            Aggregate::Sum => "SUM",
            Aggregate::Avg => "AVG",
            Aggregate::Count => "COUNT",
        }
    }
}

impl Display for Aggregate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single aggregate projection such as `SUM(amount) AS sumAmount`
///
/// The alias is derived from the function and column names; it can be
/// switched off with [`ColumnFunction::without_alias`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnFunction {
    function: Aggregate,
    column: String,
    aliased: bool,
}

impl ColumnFunction {
    pub fn new(function: Aggregate, column: impl Into<String>) -> Self {
        Self {
            function,
            column: column.into(),
            aliased: true,
        }
    }

    pub fn sum(column: impl Into<String>) -> Self {
        Self::new(Aggregate::Sum, column)
    }

    pub fn avg(column: impl Into<String>) -> Self {
        Self::new(Aggregate::Avg, column)
    }

    pub fn count(column: impl Into<String>) -> Self {
        Self::new(Aggregate::Count, column)
    }

    pub fn without_alias(mut self) -> Self {
        self.aliased = false;
        self
    }

    pub fn function(&self) -> Aggregate {
        self.function
    }

    pub fn column(&self) -> &str {
        &self.column
    }

    /// `sumAmount` for `SUM(amount)`; a qualified column contributes only
    /// its last segment, so `SUM(u.amount)` is also `sumAmount`
    pub fn alias(&self) -> String {
        let mut alias = self.function.as_str().to_lowercase();
        let name = self.column.rsplit('.').next().unwrap_or(self.column.as_str());
        let mut chars = name.chars();
        if let Some(first) = chars.next() {
            alias.extend(first.to_uppercase());
            alias.push_str(chars.as_str());
        }
        alias
    }
}

impl Clause for ColumnFunction {
    fn build(&self) -> String {
        if self.column.is_empty() {
            return String::new();
        }

        let call = format!("{}({})", self.function, self.column);
        if self.aliased {
            format!("{} AS {}", call, self.alias())
        } else {
            call
        }
    }
}
