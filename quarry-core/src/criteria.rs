//! Comparison criteria, connectors and the other closed keyword sets

use std::fmt::{self, Display};
use std::str::FromStr;

use crate::Error;

/// Comparison operator used inside a [`crate::expression::Comparison`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Criteria {
    EqualsTo,
    GreaterThan,
    LessThan,
    GreaterThanOrEqualTo,
    LessThanOrEqualTo,
    NotEqualTo,
    In,
    Between,
}

impl Criteria {
    /// Get the SQL token of the criteria
    pub fn as_str(&self) -> &'static str {
        match self {
            Criteria::EqualsTo => "=",
            Criteria::GreaterThan => ">",
            Criteria::LessThan => "<",
            Criteria::GreaterThanOrEqualTo => ">=",
            Criteria::LessThanOrEqualTo => "<=",
            Criteria::NotEqualTo => "!=",
            Criteria::In => "IN",
            Criteria::Between => "BETWEEN",
        }
    }

    /// Whether values compared with this criteria are inlined unquoted
    pub fn takes_raw_value(&self) -> bool {
        matches!(self, Criteria::In | Criteria::Between)
    }
}

impl Display for Criteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Criteria {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "=" => Ok(Criteria::EqualsTo),
            ">" => Ok(Criteria::GreaterThan),
            "<" => Ok(Criteria::LessThan),
            ">=" => Ok(Criteria::GreaterThanOrEqualTo),
            "<=" => Ok(Criteria::LessThanOrEqualTo),
            "!=" | "<>" => Ok(Criteria::NotEqualTo),
            other if other.eq_ignore_ascii_case("IN") => Ok(Criteria::In),
            other if other.eq_ignore_ascii_case("BETWEEN") => Ok(Criteria::Between),
            other => Err(Error::InvalidCriteria {
                criteria: other.to_string(),
            }),
        }
    }
}

/// How an expression is attached to the one before it in a WHERE clause
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Connector {
    #[default]
    And,
    Or,
}

impl Connector {
    pub fn as_str(&self) -> &'static str {
        match self {
            Connector::And => "AND",
            Connector::Or => "OR",
        }
    }
}

impl Display for Connector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// JOIN types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JoinType {
    Inner,
    #[default]
    Left,
    Right,
    Cross,
}

impl Display for JoinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JoinType::Inner => write!(f, "INNER"),
            JoinType::Left => write!(f, "LEFT"),
            JoinType::Right => write!(f, "RIGHT"),
            JoinType::Cross => write!(f, "CROSS"),
        }
    }
}

/// Sort direction for ORDER BY
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Asc => write!(f, "ASC"),
            SortDirection::Desc => write!(f, "DESC"),
        }
    }
}

/// Convenience module for criteria constants
pub mod op {
    use super::Criteria;

    pub const EQ: Criteria = Criteria::EqualsTo;
    pub const GT: Criteria = Criteria::GreaterThan;
    pub const LT: Criteria = Criteria::LessThan;
    pub const GTE: Criteria = Criteria::GreaterThanOrEqualTo;
    pub const LTE: Criteria = Criteria::LessThanOrEqualTo;
    pub const NEQ: Criteria = Criteria::NotEqualTo;
    pub const IN: Criteria = Criteria::In;
    pub const BETWEEN: Criteria = Criteria::Between;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_criteria_tokens() {
        assert_eq!(Criteria::GreaterThan.as_str(), ">");
        assert_eq!(Criteria::NotEqualTo.as_str(), "!=");
        assert_eq!(Criteria::Between.as_str(), "BETWEEN");
        assert_eq!(format!("{}", op::LTE), "<=");
    }

    #[test]
    fn test_string_conversion() {
        assert_eq!(">=".parse::<Criteria>().unwrap(), op::GTE);
        assert_eq!("in".parse::<Criteria>().unwrap(), Criteria::In);
        assert_eq!("<>".parse::<Criteria>().unwrap(), Criteria::NotEqualTo);
    }

    #[test]
    fn test_invalid_string_conversion() {
        let err = "LIKE".parse::<Criteria>().unwrap_err();
        assert!(matches!(err, Error::InvalidCriteria { ref criteria } if criteria == "LIKE"));
    }

    #[test]
    fn test_raw_value_criteria() {
        assert!(Criteria::In.takes_raw_value());
        assert!(Criteria::Between.takes_raw_value());
        assert!(!Criteria::EqualsTo.takes_raw_value());
    }

    #[test]
    fn test_keyword_display() {
        assert_eq!(Connector::Or.to_string(), "OR");
        assert_eq!(JoinType::default().to_string(), "LEFT");
        assert_eq!(SortDirection::Desc.to_string(), "DESC");
    }
}
