//! Clause builders
//!
//! Each builder accumulates the fragments of one SQL clause and renders the
//! whole clause, leading keyword and separating space included, or an empty
//! string when nothing was added.

pub mod column_function;
pub mod group_by;
pub mod join;
pub mod limit;
pub mod order_by;
pub mod where_clause;

pub use column_function::{Aggregate, ColumnFunction};
pub use group_by::GroupByClause;
pub use join::JoinClause;
pub use limit::LimitClause;
pub use order_by::OrderByClause;
pub use where_clause::WhereClause;

/// A clause that renders itself into statement text
pub trait Clause {
    /// Render the clause, or `""` when it has nothing to contribute
    fn build(&self) -> String;

    /// Whether the clause would render nothing
    fn is_empty(&self) -> bool {
        self.build().is_empty()
    }
}
