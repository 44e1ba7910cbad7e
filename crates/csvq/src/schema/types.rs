//! Core type definitions for schema representation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Inferred SQL type for a column.
///
/// sqlite compares text lexically (`'2' < '10'` is false), so numeric
/// columns must be declared as `integer` or `real` to sort and compare
/// as numbers once loaded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
    /// Whole numbers made only of decimal digits.
    Integer,
    /// Floating-point numeric literals.
    Real,
    /// Everything else.
    #[default]
    Text,
}

impl ColumnType {
    /// The SQL keyword used in `CREATE TABLE`.
    pub fn sql_keyword(&self) -> &'static str {
        match self {
            ColumnType::Integer => "integer",
            ColumnType::Real => "real",
            ColumnType::Text => "text",
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.sql_keyword())
    }
}
