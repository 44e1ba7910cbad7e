//! Reading CSV headers and sample rows.

mod builder;
mod source;

pub use builder::{MissingSamplePolicy, ReaderConfig, SchemaBuilder};
pub use source::SampledRecords;
