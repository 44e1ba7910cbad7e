//! Column schema definition.

use serde::{Deserialize, Serialize};

use super::types::ColumnType;

/// Schema for a single column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSchema {
    /// Normalized column name, used as the SQL identifier.
    pub name: String,
    /// Header text exactly as it appears in the file.
    pub original_name: String,
    /// Zero-based position in the table.
    pub position: usize,
    /// Type inferred from the sample row.
    pub column_type: ColumnType,
}

impl ColumnSchema {
    /// Create a new column schema.
    pub fn new(
        name: impl Into<String>,
        original_name: impl Into<String>,
        position: usize,
        column_type: ColumnType,
    ) -> Self {
        Self {
            name: name.into(),
            original_name: original_name.into(),
            position,
            column_type,
        }
    }

    /// Whether the column looks like a key: `id` or `*_id`.
    pub fn is_identifier(&self) -> bool {
        self.name == "id" || self.name.ends_with("_id")
    }
}
