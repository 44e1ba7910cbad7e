//! Schema construction from a file's header and first data row.

use std::fs::File;
use std::path::Path;

use tracing::{debug, warn};

use super::source::SampledRecords;
use crate::error::{CsvqError, Result};
use crate::inference::{dedupe_names, infer_type, normalize};
use crate::schema::{ColumnSchema, ColumnType, TableSchema};

/// What to do with a file that has a header but no data rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MissingSamplePolicy {
    /// Type every column as `text`.
    #[default]
    AllText,
    /// Fail with [`CsvqError::MissingSample`].
    Fail,
}

/// Reader configuration.
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Field delimiter. The sqlite3 shell only understands `"` as the quote
    /// character, so that one is fixed.
    pub delimiter: u8,
    /// Handling of files without a sample row.
    pub missing_sample: MissingSamplePolicy,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            missing_sample: MissingSamplePolicy::default(),
        }
    }
}

/// Builds a [`TableSchema`] from the first two records of a CSV file.
pub struct SchemaBuilder {
    config: ReaderConfig,
}

impl SchemaBuilder {
    /// Create a builder with default configuration.
    pub fn new() -> Self {
        Self {
            config: ReaderConfig::default(),
        }
    }

    /// Create a builder with custom configuration.
    pub fn with_config(config: ReaderConfig) -> Self {
        Self { config }
    }

    /// Read the header and sample row, then infer a schema for `table`.
    pub fn build(&self, path: impl AsRef<Path>, table: &str) -> Result<TableSchema> {
        let path = path.as_ref();
        let records = self.read_records(path)?;

        if records.sample.is_none() {
            match self.config.missing_sample {
                MissingSamplePolicy::Fail => {
                    return Err(CsvqError::MissingSample {
                        path: path.to_path_buf(),
                    });
                }
                MissingSamplePolicy::AllText => {
                    warn!(
                        "{} has no data rows; typing every column of {} as text",
                        path.display(),
                        table
                    );
                }
            }
        }

        let normalized: Vec<String> = records
            .header
            .iter()
            .map(|h| normalize(h))
            .collect();
        let names = dedupe_names(normalized.clone());
        for (before, after) in normalized.iter().zip(&names) {
            if before != after {
                warn!("column {} in table {} renamed to {}", before, table, after);
            }
        }

        let columns = names
            .into_iter()
            .zip(&records.header)
            .enumerate()
            .map(|(position, (name, original))| {
                let column_type = records
                    .sample_value(position)
                    .map(infer_type)
                    .unwrap_or(ColumnType::Text);
                ColumnSchema::new(name, original.as_str(), position, column_type)
            })
            .collect();

        Ok(TableSchema::new(table, columns))
    }

    /// Read at most two records: the header and one sample row.
    pub fn read_records(&self, path: impl AsRef<Path>) -> Result<SampledRecords> {
        let path = path.as_ref();

        let file = File::open(path).map_err(|e| CsvqError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.config.delimiter)
            .has_headers(false)
            .flexible(true)
            .from_reader(file);

        let read_err = |e: csv::Error| CsvqError::Read {
            path: path.to_path_buf(),
            source: e,
        };

        let mut records = reader.records();

        let header: Vec<String> = match records.next() {
            Some(record) => record
                .map_err(read_err)?
                .iter()
                .map(|s| s.to_string())
                .collect(),
            None => {
                return Err(CsvqError::EmptyData(format!(
                    "no header row in {}",
                    path.display()
                )));
            }
        };

        let sample: Option<Vec<String>> = records
            .next()
            .transpose()
            .map_err(read_err)?
            .map(|record| record.iter().map(|s| s.to_string()).collect());

        debug!(
            "read {} header fields from {} (sample row: {})",
            header.len(),
            path.display(),
            sample.is_some()
        );

        Ok(SampledRecords::new(header, sample))
    }
}

impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}
