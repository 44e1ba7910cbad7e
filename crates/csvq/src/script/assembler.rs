//! Turns a list of CSV files into one load script.

use std::collections::HashSet;
use std::path::Path;

use indexmap::IndexSet;
use tracing::{debug, warn};

use super::output::{LoadDirective, Script};
use crate::ddl::{create_index, create_table, header_delete, index_name};
use crate::error::{CsvqError, Result};
use crate::inference::table_name_for;
use crate::input::{ReaderConfig, SchemaBuilder};
use crate::schema::TableSchema;

/// Configuration for script assembly.
#[derive(Debug, Clone)]
pub struct AssemblerConfig {
    /// How headers and sample rows are read.
    pub reader: ReaderConfig,
    /// Shell command used for bulk loading.
    pub load_command: String,
    /// Whether to emit unique indexes on `id` / `*_id` columns.
    pub create_indexes: bool,
}

impl Default for AssemblerConfig {
    fn default() -> Self {
        Self {
            reader: ReaderConfig::default(),
            load_command: ".import".to_string(),
            create_indexes: true,
        }
    }
}

impl AssemblerConfig {
    pub fn with_reader(mut self, reader: ReaderConfig) -> Self {
        self.reader = reader;
        self
    }

    pub fn with_load_command(mut self, command: impl Into<String>) -> Self {
        self.load_command = command.into();
        self
    }

    pub fn with_indexes(mut self, create_indexes: bool) -> Self {
        self.create_indexes = create_indexes;
        self
    }
}

/// Builds a [`Script`] from CSV files.
pub struct ScriptAssembler {
    config: AssemblerConfig,
    builder: SchemaBuilder,
}

impl ScriptAssembler {
    /// Create an assembler with default configuration.
    pub fn new() -> Self {
        Self::with_config(AssemblerConfig::default())
    }

    /// Create an assembler with custom configuration.
    pub fn with_config(config: AssemblerConfig) -> Self {
        let builder = SchemaBuilder::with_config(config.reader.clone());
        Self { config, builder }
    }

    /// Assemble the script for `paths`, in order.
    ///
    /// Fails on the first file that is not a readable regular file or whose
    /// table name was already taken by an earlier file. Nothing is returned
    /// on failure.
    pub fn assemble<I, P>(&self, paths: I) -> Result<Script>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut seen: IndexSet<String> = IndexSet::new();
        let mut index_names: HashSet<String> = HashSet::new();
        let mut script = Script::default();
        let delimiter = char::from(self.config.reader.delimiter);
        if delimiter != ',' {
            script.separator = Some(delimiter);
        }

        for path in paths {
            let path = path.as_ref();

            if !path.is_file() {
                return Err(CsvqError::NotAFile {
                    path: path.to_path_buf(),
                });
            }

            let table = table_name_for(path);
            if !seen.insert(table.clone()) {
                return Err(CsvqError::DuplicateTable {
                    table,
                    path: path.to_path_buf(),
                });
            }

            debug!("loading {} as table {}", path.display(), table);
            script
                .loads
                .push(LoadDirective::new(&self.config.load_command, path, &table));

            let schema = self.builder.build(path, &table)?;
            script.create_tables.push(create_table(&schema));
            script.header_deletes.push(header_delete(&schema));
            if self.config.create_indexes {
                for name in repeated_index_names(&mut index_names, &schema) {
                    warn!("index {} on table {} reuses an earlier index name", name, table);
                }
                script.indexes.extend(create_index(&schema));
            }
            script.schemas.push(schema);
        }

        if seen.is_empty() {
            return Err(CsvqError::EmptyData("no input files".to_string()));
        }

        debug!(
            "assembled {} tables, {} indexes",
            seen.len(),
            script.indexes.len()
        );
        script.tables = seen;
        Ok(script)
    }
}

/// Index names of `schema` already present in `seen`; records the new ones.
fn repeated_index_names(seen: &mut HashSet<String>, schema: &TableSchema) -> Vec<String> {
    schema
        .identifier_columns()
        .map(|c| index_name(&c.name))
        .filter(|name| !seen.insert(name.clone()))
        .collect()
}

impl Default for ScriptAssembler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_assemble_single_file() {
        let dir = TempDir::new().unwrap();
        let users = write(&dir, "Users.csv", "id,name\n1,Alice\n");

        let script = ScriptAssembler::new().assemble([&users]).unwrap();

        assert_eq!(script.first_table(), Some("users"));
        assert_eq!(script.create_tables().len(), 1);
        assert_eq!(script.loads()[0].table, "users");
        assert_eq!(
            script.header_deletes(),
            &["DELETE FROM users WHERE \"id\" = 'id' AND \"name\" = 'name';".to_string()]
        );
        assert_eq!(
            script.indexes(),
            &["CREATE UNIQUE INDEX id_index ON users(id);".to_string()]
        );
    }

    #[test]
    fn test_duplicate_table_rejected() {
        let dir = TempDir::new().unwrap();
        let a = write(&dir, "a.csv", "x\n1\n");
        let sub = dir.path().join("sub");
        fs::create_dir(&sub).unwrap();
        let a_again = sub.join("A.csv");
        fs::write(&a_again, "y\n2\n").unwrap();

        let err = ScriptAssembler::new().assemble([&a, &a_again]).unwrap_err();
        match err {
            CsvqError::DuplicateTable { table, path } => {
                assert_eq!(table, "a");
                assert_eq!(path, a_again);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_not_a_file() {
        let dir = TempDir::new().unwrap();
        let err = ScriptAssembler::new().assemble([dir.path()]).unwrap_err();
        assert!(matches!(err, CsvqError::NotAFile { .. }));
        assert!(err.is_file_error());
    }

    #[test]
    fn test_no_inputs() {
        let paths: Vec<&Path> = Vec::new();
        let err = ScriptAssembler::new().assemble(paths).unwrap_err();
        assert!(matches!(err, CsvqError::EmptyData(_)));
    }

    #[test]
    fn test_repeated_index_names() {
        let dir = TempDir::new().unwrap();
        let users = write(&dir, "users.csv", "id,name\n1,Alice\n");
        let orders = write(&dir, "orders.csv", "id,user_id\n10,1\n");

        let builder = SchemaBuilder::new();
        let mut seen = HashSet::new();
        let first = builder.build(&users, "users").unwrap();
        let second = builder.build(&orders, "orders").unwrap();

        assert!(repeated_index_names(&mut seen, &first).is_empty());
        assert_eq!(repeated_index_names(&mut seen, &second), vec!["id_index"]);
        assert!(seen.contains("user_id_index"));
    }

    #[test]
    fn test_non_comma_delimiter_sets_separator() {
        let dir = TempDir::new().unwrap();
        let t = write(&dir, "t.csv", "a;b\n1;x\n");

        let config = AssemblerConfig::default().with_reader(ReaderConfig {
            delimiter: b';',
            ..ReaderConfig::default()
        });
        let script = ScriptAssembler::with_config(config).assemble([&t]).unwrap();
        let load = script.loads()[0].to_string();

        assert_eq!(
            script.statements(),
            vec![
                "CREATE TABLE t (\n  \"a\" integer,\n  \"b\" text\n);".to_string(),
                ".separator ;".to_string(),
                load,
                ".separator ,".to_string(),
                "DELETE FROM t WHERE \"a\" = 'a' AND \"b\" = 'b';".to_string(),
            ]
        );
    }

    #[test]
    fn test_comma_delimiter_has_no_separator() {
        let dir = TempDir::new().unwrap();
        let t = write(&dir, "t.csv", "a,b\n1,x\n");

        let script = ScriptAssembler::new().assemble([&t]).unwrap();
        assert!(!script.full_script().contains(".separator"));
    }

    #[test]
    fn test_indexes_disabled() {
        let dir = TempDir::new().unwrap();
        let users = write(&dir, "users.csv", "id,name\n1,Alice\n");

        let config = AssemblerConfig::default().with_indexes(false);
        let script = ScriptAssembler::with_config(config).assemble([&users]).unwrap();

        assert!(script.indexes().is_empty());
        assert!(!script.full_script().contains("INDEX"));
    }

    #[test]
    fn test_custom_load_command() {
        let dir = TempDir::new().unwrap();
        let users = write(&dir, "users.csv", "id\n1\n");

        let config = AssemblerConfig::default().with_load_command(".import --csv");
        let script = ScriptAssembler::with_config(config).assemble([&users]).unwrap();

        assert!(script.loads()[0].to_string().starts_with(".import --csv "));
    }
}
