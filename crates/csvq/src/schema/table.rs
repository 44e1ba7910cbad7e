//! Table-level schema definition.

use serde::{Deserialize, Serialize};

use super::column::ColumnSchema;

/// Schema for one input file, loaded as one table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSchema {
    table: String,
    columns: Vec<ColumnSchema>,
}

impl TableSchema {
    /// Create a table schema with the given columns.
    pub fn new(table: impl Into<String>, columns: Vec<ColumnSchema>) -> Self {
        Self {
            table: table.into(),
            columns,
        }
    }

    /// Normalized table name.
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Columns in file order.
    pub fn columns(&self) -> &[ColumnSchema] {
        &self.columns
    }

    /// Get all column names.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Columns that get a unique index.
    pub fn identifier_columns(&self) -> impl Iterator<Item = &ColumnSchema> {
        self.columns.iter().filter(|c| c.is_identifier())
    }
}
