//! Parsed CSV document model.

use std::collections::HashMap;

/// One data row, as a mapping from column name to field value.
///
/// Built by zipping the header row with the record's fields, so a duplicate
/// header name resolves last-wins and a row shorter than the header simply
/// has no entry for the trailing columns. Fields beyond the header are
/// dropped here and survive only in the raw text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record(HashMap<String, String>);

impl Record {
    pub(crate) fn from_fields<'a>(
        headers: &[String],
        fields: impl Iterator<Item = &'a str>,
    ) -> Self {
        let mut values = HashMap::new();
        for (header, field) in headers.iter().zip(fields) {
            values.insert(header.clone(), field.to_string());
        }
        Self(values)
    }

    /// Returns the value for `name`, or the empty string when absent.
    pub fn get(&self, name: &str) -> &str {
        self.0.get(name).map(String::as_str).unwrap_or("")
    }

    /// Whether the record carries a value for `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }
}

/// A parsed CSV file: ordered headers, one record per data row, and the
/// decoded text the records were parsed from.
#[derive(Debug, Clone)]
pub struct CsvDocument {
    /// Column names from the first row, in file order. Empty when the file
    /// has no rows at all.
    pub headers: Vec<String>,
    /// Data rows, in file order.
    pub records: Vec<Record>,
    /// Decoded file contents with trailing newlines trimmed. Kept whole so
    /// the raw view stays faithful even where parsing reinterprets
    /// structure.
    pub raw: String,
}

impl CsvDocument {
    /// Total number of data rows.
    pub fn row_count(&self) -> usize {
        self.records.len()
    }
}
