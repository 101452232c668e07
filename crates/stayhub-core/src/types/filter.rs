//! Filter and ordering types for dynamic query building.
//!
//! The inventory store is queried with small predicate sets (equality on
//! the room, date bounds, ordering by date); these types describe such
//! predicates independently of the SQL layer that executes them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Filter comparison operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterOp {
    /// Exact equality.
    Eq,
    /// Less than.
    Lt,
    /// Less than or equal.
    Lte,
    /// Greater than or equal.
    Gte,
    /// SQL `IN` list membership.
    In,
}

/// A dynamic filter value.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    /// A string value.
    String(String),
    /// An integer value.
    Integer(i64),
    /// A UUID value.
    Uuid(Uuid),
    /// A calendar date value.
    Date(NaiveDate),
    /// A list of string values (for the `In` operator).
    StringList(Vec<String>),
    /// A list of UUID values (for the `In` operator).
    UuidList(Vec<Uuid>),
}

/// A single filter condition on a named field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterField {
    /// The column or field name to filter on.
    pub field: String,
    /// The comparison operator.
    pub op: FilterOp,
    /// The value to compare against.
    pub value: FilterValue,
}

impl FilterField {
    /// Create a new filter field.
    pub fn new(field: impl Into<String>, op: FilterOp, value: FilterValue) -> Self {
        Self {
            field: field.into(),
            op,
            value,
        }
    }

    /// Shorthand for an equality filter on a UUID column.
    pub fn eq_uuid(field: impl Into<String>, value: Uuid) -> Self {
        Self::new(field, FilterOp::Eq, FilterValue::Uuid(value))
    }

    /// Shorthand for a date lower bound (inclusive).
    pub fn date_gte(field: impl Into<String>, value: NaiveDate) -> Self {
        Self::new(field, FilterOp::Gte, FilterValue::Date(value))
    }

    /// Shorthand for a date upper bound (inclusive).
    pub fn date_lte(field: impl Into<String>, value: NaiveDate) -> Self {
        Self::new(field, FilterOp::Lte, FilterValue::Date(value))
    }

    /// Shorthand for a date upper bound (exclusive).
    pub fn date_lt(field: impl Into<String>, value: NaiveDate) -> Self {
        Self::new(field, FilterOp::Lt, FilterValue::Date(value))
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderDirection {
    /// Ascending.
    Asc,
    /// Descending.
    Desc,
}

/// An ordering clause on a named field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ordering {
    /// The column or field name to order by.
    pub field: String,
    /// The sort direction.
    pub direction: OrderDirection,
}

impl Ordering {
    /// Ascending order on a field.
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: OrderDirection::Asc,
        }
    }

    /// Descending order on a field.
    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: OrderDirection::Desc,
        }
    }
}
