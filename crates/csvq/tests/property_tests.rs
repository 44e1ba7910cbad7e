//! Property-based tests for csvq.
//!
//! # Running Property Tests
//!
//! ```bash
//! cargo test -p csvq --test property_tests
//!
//! # More cases
//! PROPTEST_CASES=10000 cargo test -p csvq --test property_tests
//! ```

use std::fs;

use proptest::prelude::*;
use tempfile::TempDir;

use csvq::inference::{dedupe_names, infer_type, normalize};
use csvq::{ColumnType, ScriptAssembler};

// =============================================================================
// Test Strategies
// =============================================================================

/// Header-like text: words, digits, punctuation and spaces.
fn header_like() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_ \\-\\.\\(\\)\\$%/#']{0,40}"
}

/// Arbitrary unicode strings.
fn any_text() -> impl Strategy<Value = String> {
    any::<String>()
}

/// Cell values that look numeric, or almost.
fn numeric_like() -> impl Strategy<Value = String> {
    prop_oneof![
        "[0-9]{1,12}",
        "[0-9]{1,6}\\.[0-9]{0,6}",
        "[+-][0-9]{1,6}",
        "[0-9]{1,3}[eE][+-]?[0-9]{1,3}",
        "[a-z0-9\\.\\-]{0,8}",
    ]
}

// =============================================================================
// Normalization Properties
// =============================================================================

mod normalize_tests {
    use super::*;

    proptest! {
        /// Normalizing twice is the same as normalizing once.
        #[test]
        fn is_idempotent(input in any_text()) {
            let once = normalize(&input);
            prop_assert_eq!(normalize(&once), once);
        }

        /// Output holds only lowercase word characters and underscores.
        #[test]
        fn output_is_identifier_safe(input in header_like()) {
            let out = normalize(&input);
            prop_assert!(
                out.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'),
                "unexpected character in {:?}", out
            );
        }

        /// Deduplicated names are unique and keep the input length.
        #[test]
        fn dedupe_is_unique(names in prop::collection::vec("[a-c]{1,2}", 0..12)) {
            let out = dedupe_names(names.clone());
            prop_assert_eq!(out.len(), names.len());

            let mut sorted = out.clone();
            sorted.sort();
            sorted.dedup();
            prop_assert_eq!(sorted.len(), out.len());
        }
    }
}

// =============================================================================
// Type Inference Properties
// =============================================================================

mod infer_tests {
    use super::*;

    proptest! {
        /// Inference never panics and is deterministic.
        #[test]
        fn is_deterministic(input in any_text()) {
            prop_assert_eq!(infer_type(&input), infer_type(&input));
        }

        /// Pure digit strings are always integers.
        #[test]
        fn digits_are_integer(input in "[0-9]{1,30}") {
            prop_assert_eq!(infer_type(&input), ColumnType::Integer);
        }

        /// Integers and reals always parse as numbers.
        #[test]
        fn numeric_types_parse(input in numeric_like()) {
            match infer_type(&input) {
                ColumnType::Integer | ColumnType::Real => {
                    prop_assert!(input.parse::<f64>().is_ok(), "{:?} should parse", input)
                }
                ColumnType::Text => {}
            }
        }

        /// Signed values are never numeric.
        #[test]
        fn signed_is_text(input in "[+-][0-9]{1,6}(\\.[0-9]{1,3})?") {
            prop_assert_eq!(infer_type(&input), ColumnType::Text);
        }
    }
}

// =============================================================================
// Script Assembly Properties
// =============================================================================

mod assembly_tests {
    use super::*;

    fn statement_kind(s: &str) -> u8 {
        if s.starts_with("CREATE TABLE") {
            0
        } else if s.starts_with(".import") {
            1
        } else if s.starts_with("DELETE FROM") {
            2
        } else {
            3
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        /// Statements come out as creates, loads, deletes, indexes for any
        /// number and order of files.
        #[test]
        fn sections_are_ordered(
            tables in prop::collection::btree_set("[a-z]{1,6}", 1..6),
            with_id in prop::collection::vec(any::<bool>(), 6),
        ) {
            let dir = TempDir::new().unwrap();
            let paths: Vec<_> = tables
                .iter()
                .zip(&with_id)
                .map(|(name, id)| {
                    let path = dir.path().join(format!("{}.csv", name));
                    let header = if *id { "id,value" } else { "key,value" };
                    fs::write(&path, format!("{}\n1,x\n", header)).unwrap();
                    path
                })
                .collect();

            let script = ScriptAssembler::new().assemble(&paths).unwrap();
            let kinds: Vec<u8> = script
                .statements()
                .iter()
                .map(|s| statement_kind(s))
                .collect();

            prop_assert!(kinds.windows(2).all(|w| w[0] <= w[1]), "out of order: {:?}", kinds);
            prop_assert_eq!(script.create_tables().len(), tables.len());
            prop_assert_eq!(script.loads().len(), tables.len());
            prop_assert_eq!(script.header_deletes().len(), tables.len());
        }
    }
}
