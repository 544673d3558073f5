//! RFC 4180 CSV reader.

use std::path::Path;

use csv::ReaderBuilder;
use encoding_rs::Encoding;

use crate::ReadError;
use crate::document::{CsvDocument, Record};
use crate::encoding::decode_file;

/// CSV reader with a configurable delimiter and quote character.
pub struct CsvReader {
    delimiter: u8,
    quote: u8,
}

impl Default for CsvReader {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote: b'"',
        }
    }
}

impl CsvReader {
    /// Creates a reader with the standard comma/double-quote convention.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a custom field delimiter.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set a custom quote character.
    pub fn with_quote(mut self, quote: u8) -> Self {
        self.quote = quote;
        self
    }

    /// Reads and parses `path`, decoding it under `encoding`.
    pub fn read_file(
        &self,
        path: &Path,
        encoding: &'static Encoding,
    ) -> Result<CsvDocument, ReadError> {
        let text = decode_file(path, encoding)?;
        self.parse(&text)
    }

    /// Parses decoded CSV text into a document.
    ///
    /// The first row is the header; every later row becomes a `Record`. The
    /// document keeps the input text (trailing newlines trimmed) as its raw
    /// view.
    pub fn parse(&self, text: &str) -> Result<CsvDocument, ReadError> {
        self.validate_quoting(text)?;

        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .quote(self.quote)
            .flexible(true)
            .from_reader(text.as_bytes());

        let headers: Vec<String> = reader
            .headers()
            .map_err(|e| ReadError::malformed(format!("failed to read header row: {e}")))?
            .iter()
            .map(str::to_string)
            .collect();

        let mut records = Vec::new();
        for (index, result) in reader.records().enumerate() {
            let record = result.map_err(|e| {
                ReadError::malformed(format!("failed to parse data row {}: {e}", index + 1))
            })?;
            records.push(Record::from_fields(&headers, record.iter()));
        }

        Ok(CsvDocument {
            headers,
            records,
            raw: text.trim_end_matches('\n').to_string(),
        })
    }

    /// Walks the quote state machine over the whole input and rejects text
    /// that ends inside a quoted field. The `csv` crate accepts such input
    /// by folding the remainder into the open field, which silently corrupts
    /// the parsed rows.
    fn validate_quoting(&self, text: &str) -> Result<(), ReadError> {
        let quote = char::from(self.quote);
        let delimiter = char::from(self.delimiter);

        let mut in_quotes = false;
        let mut field_start = true;
        let mut line = 1usize;
        let mut opened_on = 0usize;
        let mut chars = text.chars().peekable();

        while let Some(ch) = chars.next() {
            if in_quotes {
                if ch == quote {
                    if chars.peek() == Some(&quote) {
                        // doubled quote, literal
                        chars.next();
                    } else {
                        in_quotes = false;
                        field_start = false;
                    }
                } else if ch == '\n' {
                    line += 1;
                }
            } else if ch == quote && field_start {
                in_quotes = true;
                opened_on = line;
                field_start = false;
            } else if ch == delimiter {
                field_start = true;
            } else if ch == '\n' {
                line += 1;
                field_start = true;
            } else if ch != '\r' {
                field_start = false;
            }
        }

        if in_quotes {
            return Err(ReadError::malformed_at(
                format!("unterminated quoted field opened on line {opened_on}"),
                opened_on,
            ));
        }

        Ok(())
    }
}
