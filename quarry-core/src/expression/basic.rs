//! Raw SQL token expression

/// Raw SQL tokens joined by single spaces
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Basic {
    tokens: Vec<String>,
}

impl Basic {
    pub fn new<I, T>(tokens: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
        }
    }

    pub fn generate(&self) -> String {
        self.tokens.join(" ")
    }
}
