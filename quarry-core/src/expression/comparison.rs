//! Comparison expression module

use crate::criteria::{Connector, Criteria};
use crate::Value;

/// `<alias>.<column> <criteria> <value>`
///
/// The value is quoted, except for `IN` (parenthesised list) and `BETWEEN`
/// (inlined range), which take SQL text or a list of values.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    column: String,
    criteria: Criteria,
    value: Value,
    alias: Option<String>,
    connector: Connector,
}

impl Comparison {
    pub fn new(column: impl Into<String>, criteria: Criteria, value: impl Into<Value>) -> Self {
        Self {
            column: column.into(),
            criteria,
            value: value.into(),
            alias: None,
            connector: Connector::And,
        }
    }

    /// Prefix the column with a table alias
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn with_connector(mut self, connector: Connector) -> Self {
        self.connector = connector;
        self
    }

    /// Attach with `OR` instead of `AND`
    pub fn or(self) -> Self {
        self.with_connector(Connector::Or)
    }

    pub fn connector(&self) -> Connector {
        self.connector
    }

    pub fn criteria(&self) -> Criteria {
        self.criteria
    }

    pub fn generate(&self) -> String {
        let value = match self.criteria {
            Criteria::In => match &self.value {
                Value::Array(_) => format!("( {} )", self.value.literal()),
                other => format!("( {} )", other.raw()),
            },
            Criteria::Between => match self.value.as_array() {
                Some(bounds) if bounds.len() == 2 => {
                    format!("{} AND {}", bounds[0].literal(), bounds[1].literal())
                }
                _ => self.value.raw(),
            },
            _ => self.value.literal(),
        };

        match &self.alias {
            Some(alias) => format!("{}.{} {} {}", alias, self.column, self.criteria, value),
            None => format!("{} {} {}", self.column, self.criteria, value),
        }
    }
}
