//! Assembled scripts and bulk-load directives.

use std::fmt;
use std::path::{Path, PathBuf};

use indexmap::IndexSet;

use crate::error::Result;
use crate::schema::TableSchema;

/// A sqlite3 shell directive loading one file into one table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadDirective {
    /// Shell command, `.import` by default.
    pub command: String,
    /// File to load, as given on input.
    pub path: PathBuf,
    /// Destination table.
    pub table: String,
}

impl LoadDirective {
    pub fn new(
        command: impl Into<String>,
        path: impl Into<PathBuf>,
        table: impl Into<String>,
    ) -> Self {
        Self {
            command: command.into(),
            path: path.into(),
            table: table.into(),
        }
    }
}

impl fmt::Display for LoadDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.command,
            shell_argument(&self.path.to_string_lossy()),
            shell_argument(&self.table)
        )
    }
}

/// Quote a dot-command argument the way the sqlite3 shell tokenizes it.
fn shell_argument(arg: &str) -> String {
    let needs_quotes =
        arg.is_empty() || arg.chars().any(|c| c.is_whitespace() || c == '"' || c == '\\');
    if needs_quotes {
        format!("\"{}\"", arg.replace('\\', "\\\\").replace('"', "\\\""))
    } else {
        arg.to_string()
    }
}

/// `.separator` directive for a column delimiter.
fn separator_directive(delimiter: char) -> String {
    match delimiter {
        '\t' => ".separator \"\\t\"".to_string(),
        c => format!(".separator {}", shell_argument(&c.to_string())),
    }
}

/// The statements for a set of files, bucketed by kind.
///
/// Rendering order is fixed: every `CREATE TABLE`, then every load
/// directive, then every header `DELETE`, then every index. Within a
/// bucket statements follow input file order. Files read with a delimiter
/// other than `,` get their loads wrapped in `.separator` directives, the
/// second one restoring `,` for csv output.
#[derive(Debug, Clone, Default)]
pub struct Script {
    pub(crate) tables: IndexSet<String>,
    pub(crate) separator: Option<char>,
    pub(crate) schemas: Vec<TableSchema>,
    pub(crate) create_tables: Vec<String>,
    pub(crate) loads: Vec<LoadDirective>,
    pub(crate) header_deletes: Vec<String>,
    pub(crate) indexes: Vec<String>,
}

impl Script {
    /// The whole setup script, one statement per entry, newline separated.
    pub fn full_script(&self) -> String {
        self.statements().join("\n")
    }

    /// Only the `CREATE TABLE` statements.
    pub fn create_tables_only(&self) -> String {
        self.create_tables.join("\n")
    }

    /// All statements in execution order.
    pub fn statements(&self) -> Vec<String> {
        let (set_separator, reset_separator) = match self.separator {
            Some(c) if !self.loads.is_empty() => {
                (Some(separator_directive(c)), Some(separator_directive(',')))
            }
            _ => (None, None),
        };

        self.create_tables
            .iter()
            .cloned()
            .chain(set_separator)
            .chain(self.loads.iter().map(|l| l.to_string()))
            .chain(reset_separator)
            .chain(self.header_deletes.iter().cloned())
            .chain(self.indexes.iter().cloned())
            .collect()
    }

    /// Table of the first input file.
    pub fn first_table(&self) -> Option<&str> {
        self.tables.first().map(|s| s.as_str())
    }

    /// Table names in input order.
    pub fn tables(&self) -> impl Iterator<Item = &str> {
        self.tables.iter().map(|s| s.as_str())
    }

    pub fn schemas(&self) -> &[TableSchema] {
        &self.schemas
    }

    pub fn create_tables(&self) -> &[String] {
        &self.create_tables
    }

    pub fn loads(&self) -> &[LoadDirective] {
        &self.loads
    }

    pub fn header_deletes(&self) -> &[String] {
        &self.header_deletes
    }

    pub fn indexes(&self) -> &[String] {
        &self.indexes
    }

    /// Inferred schemas as pretty-printed JSON.
    pub fn schemas_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.schemas)?)
    }

    /// Load directive for a file path, if it was assembled.
    pub fn load_for(&self, path: impl AsRef<Path>) -> Option<&LoadDirective> {
        self.loads.iter().find(|l| l.path == path.as_ref())
    }
}
