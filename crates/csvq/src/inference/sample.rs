//! Column type inference from a single sampled cell.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::schema::ColumnType;

// sqlite's unsigned numeric literal: `1.5`, `1.`, `.5`, `1e10`, `2.5E-3`.
// Signs are unary operators in SQL, not part of the literal.
static REAL_LITERAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?$").unwrap()
});

/// Classify one sample value.
///
/// Pure digits are `Integer`, other numeric literals are `Real`, and
/// everything else (including the empty string) is `Text`.
pub fn infer_type(sample: &str) -> ColumnType {
    if is_integer(sample) {
        ColumnType::Integer
    } else if REAL_LITERAL.is_match(sample) {
        ColumnType::Real
    } else {
        ColumnType::Text
    }
}

fn is_integer(sample: &str) -> bool {
    !sample.is_empty() && sample.bytes().all(|b| b.is_ascii_digit())
}
