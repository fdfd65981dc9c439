//! Table model

use super::column::{Column, TableRef};
use crate::{Error, Result};

/// A queryable table and its ordered columns
///
/// Column order matters: it is the order a [`crate::Select`] projects them in
/// when no aggregate replaces the column list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    name: String,
    alias: Option<String>,
    columns: Vec<Column>,
}

impl Table {
    /// Create a new table without columns
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alias: None,
            columns: Vec::new(),
        }
    }

    /// Create a new table referred to by `alias` in statements
    pub fn aliased(name: impl Into<String>, alias: impl Into<String>) -> Self {
        Self::new(name).with_alias(alias)
    }

    /// Set the alias; columns already added pick up the new qualifier
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        let alias = alias.into();
        self.alias = if alias.is_empty() { None } else { Some(alias) };

        let table = self.table_ref();
        for column in &mut self.columns {
            column.attach(table.clone());
        }
        self
    }

    /// Add a column and return the table for chaining
    pub fn with_column(mut self, column: Column) -> Self {
        self.add_column(column);
        self
    }

    /// Add a column.
    ///
    /// A column with the same name as an existing one replaces it in place.
    pub fn add_column(&mut self, mut column: Column) -> &mut Self {
        column.attach(self.table_ref());

        match self.columns.iter().position(|c| c.name() == column.name()) {
            Some(index) => self.columns[index] = column,
            None => self.columns.push(column),
        }
        self
    }

    /// Look up a column by name
    pub fn get_column(&self, name: &str) -> Result<&Column> {
        self.columns
            .iter()
            .find(|column| column.name() == name)
            .ok_or_else(|| Error::not_found(&self.name, name))
    }

    pub fn get_column_mut(&mut self, name: &str) -> Result<&mut Column> {
        let table_name = &self.name;
        self.columns
            .iter_mut()
            .find(|column| column.name() == name)
            .ok_or_else(|| Error::not_found(table_name, name))
    }

    /// Remove a column by name, returning it
    pub fn remove_column(&mut self, name: &str) -> Result<Column> {
        let index = self
            .columns
            .iter()
            .position(|column| column.name() == name)
            .ok_or_else(|| Error::not_found(&self.name, name))?;
        Ok(self.columns.remove(index))
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    pub fn has_alias(&self) -> bool {
        self.alias.is_some()
    }

    /// The prefix columns of this table are qualified with
    pub fn qualifier(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.name)
    }

    /// `"<name> AS <alias>"` when `include_alias` and an alias is set,
    /// otherwise the bare name
    pub fn qualified_name(&self, include_alias: bool) -> String {
        match (&self.alias, include_alias) {
            (Some(alias), true) => format!("{} AS {}", self.name, alias),
            _ => self.name.clone(),
        }
    }

    pub fn qualified_name_with_alias(&self) -> String {
        self.qualified_name(true)
    }

    pub fn qualified_name_without_alias(&self) -> String {
        self.qualified_name(false)
    }

    fn table_ref(&self) -> TableRef {
        TableRef {
            name: self.name.clone(),
            alias: self.alias.clone(),
        }
    }
}
