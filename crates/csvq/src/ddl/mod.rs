//! DDL and cleanup statements for loaded tables.

mod generator;
mod quote;

pub use generator::{create_index, create_table, header_delete, index_name};
pub use quote::{identifier, quote_identifier, quote_literal};
