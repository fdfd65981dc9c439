//! SQL fragment generators
//!
//! Every fragment is a small value that renders one piece of SQL text through
//! `generate()`. [`Expression`] is the closed set of fragments the clause
//! builders accept.

pub mod basic;
pub mod comparison;
pub mod join;
pub mod like;
pub mod on;
pub mod using;

pub use basic::Basic;
pub use comparison::Comparison;
pub use join::Join;
pub use like::Like;
pub use on::On;
pub use using::Using;

use crate::criteria::{Connector, Criteria};
use crate::Value;

/// Any SQL fragment a clause builder can hold
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Basic(Basic),
    Comparison(Comparison),
    Like(Like),
    Join(Join),
    On(On),
    Using(Using),
}

impl Expression {
    /// Render the fragment
    pub fn generate(&self) -> String {
        match self {
            Expression::Basic(e) => e.generate(),
            Expression::Comparison(e) => e.generate(),
            Expression::Like(e) => e.generate(),
            Expression::Join(e) => e.generate(),
            Expression::On(e) => e.generate(),
            Expression::Using(e) => e.generate(),
        }
    }

    /// The connector of fragments that declare one.
    ///
    /// Only comparisons and LIKE patterns carry a connector; the WHERE
    /// builder falls back to `AND` for everything else.
    pub fn connector(&self) -> Option<Connector> {
        match self {
            Expression::Comparison(e) => Some(e.connector()),
            Expression::Like(e) => Some(e.connector()),
            _ => None,
        }
    }

    /// Switch a connector-carrying fragment to `OR`; other fragments are
    /// returned unchanged
    pub fn or(self) -> Self {
        match self {
            Expression::Comparison(e) => Expression::Comparison(e.or()),
            Expression::Like(e) => Expression::Like(e.or()),
            other => other,
        }
    }
}

impl From<Basic> for Expression {
    fn from(e: Basic) -> Self {
        Expression::Basic(e)
    }
}

impl From<Comparison> for Expression {
    fn from(e: Comparison) -> Self {
        Expression::Comparison(e)
    }
}

impl From<Like> for Expression {
    fn from(e: Like) -> Self {
        Expression::Like(e)
    }
}

impl From<Join> for Expression {
    fn from(e: Join) -> Self {
        Expression::Join(e)
    }
}

impl From<On> for Expression {
    fn from(e: On) -> Self {
        Expression::On(e)
    }
}

impl From<Using> for Expression {
    fn from(e: Using) -> Self {
        Expression::Using(e)
    }
}

// Raw SQL text: where_("deleted_at IS NULL"), order_by("created_at DESC")
impl From<&str> for Expression {
    fn from(text: &str) -> Self {
        Expression::Basic(Basic::new([text]))
    }
}

impl From<String> for Expression {
    fn from(text: String) -> Self {
        Expression::Basic(Basic::new([text]))
    }
}

// Shorthand equality: where_(("email", "a@b.c"))
impl<V> From<(&str, V)> for Expression
where
    V: Into<Value>,
{
    fn from((column, value): (&str, V)) -> Self {
        Expression::Comparison(Comparison::new(column, Criteria::EqualsTo, value))
    }
}

// Explicit criteria: where_(("attempts", op::GTE, 5))
impl<V> From<(&str, Criteria, V)> for Expression
where
    V: Into<Value>,
{
    fn from((column, criteria, value): (&str, Criteria, V)) -> Self {
        Expression::Comparison(Comparison::new(column, criteria, value))
    }
}
