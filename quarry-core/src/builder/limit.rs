//! LIMIT / OFFSET clause builder module

use super::Clause;

/// `LIMIT [offset, ]count` clause builder
///
/// A limit of zero means "no limit" and suppresses the offset as well.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LimitClause {
    limit: u64,
    offset: u64,
}

impl LimitClause {
    pub fn new(limit: u64, offset: u64) -> Self {
        Self { limit, offset }
    }

    pub fn set_limit(&mut self, limit: u64) -> &mut Self {
        self.limit = limit;
        self
    }

    pub fn set_offset(&mut self, offset: u64) -> &mut Self {
        self.offset = offset;
        self
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }

    pub fn offset(&self) -> u64 {
        self.offset
    }
}

impl Clause for LimitClause {
    fn build(&self) -> String {
        match (self.limit, self.offset) {
            (0, _) => String::new(),
            (limit, 0) => format!(" LIMIT {}", limit),
            (limit, offset) => format!(" LIMIT {}, {}", offset, limit),
        }
    }
}
