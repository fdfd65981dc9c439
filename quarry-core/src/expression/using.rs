//! USING join condition expression

/// `USING(<col>, <col>, ...)` join condition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Using {
    columns: Vec<String>,
}

impl Using {
    /// Join on one shared column name
    pub fn new(column: impl Into<String>) -> Self {
        Self {
            columns: vec![column.into()],
        }
    }

    /// Join on several shared column names
    pub fn columns<I, T>(columns: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
        }
    }

    pub fn and(mut self, column: impl Into<String>) -> Self {
        self.columns.push(column.into());
        self
    }

    pub fn generate(&self) -> String {
        format!("USING({})", self.columns.join(", "))
    }
}
