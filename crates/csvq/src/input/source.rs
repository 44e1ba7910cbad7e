//! Raw records read from the head of a CSV file.

/// The header record and the first data record of a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampledRecords {
    /// Column headers, as written in the file.
    pub header: Vec<String>,
    /// First data row, if the file has one.
    pub sample: Option<Vec<String>>,
}

impl SampledRecords {
    /// Create from a header and an optional sample row.
    pub fn new(header: Vec<String>, sample: Option<Vec<String>>) -> Self {
        Self { header, sample }
    }

    /// Sample cell for a column; `None` when there is no sample row.
    ///
    /// A sample row shorter than the header yields `""` for the missing
    /// cells.
    pub fn sample_value(&self, col: usize) -> Option<&str> {
        self.sample
            .as_ref()
            .map(|row| row.get(col).map(|s| s.as_str()).unwrap_or(""))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_value() {
        let records = SampledRecords::new(
            vec!["a".into(), "b".into(), "c".into()],
            Some(vec!["1".into(), "x".into()]),
        );
        assert_eq!(records.sample_value(0), Some("1"));
        assert_eq!(records.sample_value(2), Some(""));
    }

    #[test]
    fn test_sample_value_without_sample() {
        let records = SampledRecords::new(vec!["a".into()], None);
        assert_eq!(records.sample_value(0), None);
    }
}
