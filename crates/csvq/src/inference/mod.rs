//! Name normalization and type inference.

mod normalize;
mod sample;

pub use normalize::{dedupe_names, normalize, table_name_for};
pub use sample::infer_type;
