//! Column model

/// The owning table's naming, as seen from one of its columns
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TableRef {
    pub(crate) name: String,
    pub(crate) alias: Option<String>,
}

impl TableRef {
    fn qualifier(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.name)
    }
}

/// A column of a [`crate::Table`]
///
/// The column remembers the name and alias of the table it was added to, so
/// it can render its own qualified name (`users.email`, `u.email AS mail`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    name: String,
    alias: Option<String>,
    table: Option<TableRef>,
}

impl Column {
    /// Create a new detached column
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alias: None,
            table: None,
        }
    }

    /// Create a new detached column with a projection alias
    pub fn aliased(name: impl Into<String>, alias: impl Into<String>) -> Self {
        Self::new(name).with_alias(alias)
    }

    /// Set the projection alias, an empty alias clears it
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.set_alias(alias);
        self
    }

    pub fn set_alias(&mut self, alias: impl Into<String>) {
        let alias = alias.into();
        self.alias = if alias.is_empty() { None } else { Some(alias) };
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

    /// Name of the owning table, if the column was added to one
    pub fn table_name(&self) -> Option<&str> {
        self.table.as_ref().map(|table| table.name.as_str())
    }

    pub(crate) fn attach(&mut self, table: TableRef) {
        self.table = Some(table);
    }

    /// Render the column name prefixed by its table's alias (or name).
    ///
    /// With `include_alias` the column's own alias is appended as
    /// `AS <alias>`. A detached column renders its bare name.
    pub fn qualified_name(&self, include_alias: bool) -> String {
        let mut result = String::new();

        if let Some(table) = &self.table {
            result.push_str(table.qualifier());
            result.push('.');
        }

        result.push_str(&self.name);

        if include_alias {
            if let Some(alias) = &self.alias {
                result.push_str(" AS ");
                result.push_str(alias);
            }
        }

        result
    }

    pub fn qualified_name_with_alias(&self) -> String {
        self.qualified_name(true)
    }

    pub fn qualified_name_without_alias(&self) -> String {
        self.qualified_name(false)
    }
}
