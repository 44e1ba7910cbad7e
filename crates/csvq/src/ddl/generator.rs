//! SQL statement generation from a table schema.
//!
//! The header row is loaded as ordinary data by `.import`, so each table
//! needs three kinds of statement: the `CREATE TABLE` that fixes column
//! names and types before loading, a `DELETE` that removes the header row
//! afterwards, and unique indexes that can only be built once the header
//! row is gone.

use super::quote::{identifier, quote_identifier, quote_literal};
use crate::schema::TableSchema;

/// `CREATE TABLE` with one quoted, typed column per schema column.
pub fn create_table(schema: &TableSchema) -> String {
    let columns: Vec<String> = schema
        .columns()
        .iter()
        .map(|c| {
            format!(
                "  {} {}",
                quote_identifier(&c.name),
                c.column_type.sql_keyword()
            )
        })
        .collect();

    format!(
        "CREATE TABLE {} (\n{}\n);",
        identifier(schema.table()),
        columns.join(",\n")
    )
}

/// `DELETE` matching exactly the header row as it was loaded.
pub fn header_delete(schema: &TableSchema) -> String {
    let conditions: Vec<String> = schema
        .columns()
        .iter()
        .map(|c| {
            format!(
                "{} = {}",
                quote_identifier(&c.name),
                quote_literal(&c.original_name)
            )
        })
        .collect();

    format!(
        "DELETE FROM {} WHERE {};",
        identifier(schema.table()),
        conditions.join(" AND ")
    )
}

/// Name of the unique index on `column`.
///
/// Index names share one namespace per database, so two tables indexing
/// columns with the same name produce the same index name.
pub fn index_name(column: &str) -> String {
    format!("{}_index", column)
}

/// One `CREATE UNIQUE INDEX` per `id` / `*_id` column, in column order.
pub fn create_index(schema: &TableSchema) -> Vec<String> {
    let table = identifier(schema.table());

    schema
        .identifier_columns()
        .map(|c| {
            format!(
                "CREATE UNIQUE INDEX {} ON {}({});",
                identifier(&index_name(&c.name)),
                table,
                identifier(&c.name)
            )
        })
        .collect()
}
