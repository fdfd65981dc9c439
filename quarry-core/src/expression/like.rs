//! LIKE pattern expression

use crate::criteria::Connector;
use crate::value::quote;

/// `<column> LIKE '<pattern>'`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Like {
    column: String,
    pattern: String,
    connector: Connector,
}

impl Like {
    pub fn new(column: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            pattern: pattern.into(),
            connector: Connector::And,
        }
    }

    pub fn with_connector(mut self, connector: Connector) -> Self {
        self.connector = connector;
        self
    }

    pub fn or(self) -> Self {
        self.with_connector(Connector::Or)
    }

    pub fn connector(&self) -> Connector {
        self.connector
    }

    pub fn generate(&self) -> String {
        format!("{} LIKE {}", self.column, quote(&self.pattern))
    }
}
