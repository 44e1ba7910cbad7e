//! Identifier normalization for table and column names.

use std::collections::HashSet;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

// Runs of anything that is not a letter, digit or underscore.
static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w]+").unwrap());

/// Rewrite arbitrary header text into a snake_case identifier.
///
/// Every run of non-word characters becomes a single `_` and the result is
/// lowercased, so `"First Name"` becomes `first_name` and `"2023-Q1"`
/// becomes `2023_q1`. Total and idempotent.
pub fn normalize(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    NON_WORD.replace_all(&lowered, "_").trim().to_string()
}

/// Derive a table name from a file path: base name, last extension
/// stripped, normalized.
pub fn table_name_for(path: impl AsRef<Path>) -> String {
    let stem = path
        .as_ref()
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    normalize(&stem)
}

/// Make names unique by suffixing repeats with `_2`, `_3`, ...
///
/// The first occurrence keeps its name. Returns the names in input order.
pub fn dedupe_names(names: Vec<String>) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::with_capacity(names.len());
    let mut out = Vec::with_capacity(names.len());

    for name in names {
        let mut candidate = name.clone();
        let mut n = 2;
        while seen.contains(&candidate) {
            candidate = format!("{}_{}", name, n);
            n += 1;
        }
        seen.insert(candidate.clone());
        out.push(candidate);
    }

    out
}
