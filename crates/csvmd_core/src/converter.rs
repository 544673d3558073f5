//! Conversion orchestration.

use std::path::Path;

use tracing::debug;

use csvmd_parser::{CsvDocument, CsvReader, resolve_encoding};

use crate::render::{details_block, markdown_table};
use crate::{ConvertError, RenderConfig};

/// Outcome of a conversion run.
#[derive(Debug, Clone)]
pub struct ConvertResult {
    /// Composed Markdown, fragments joined with `\n`.
    pub markdown: String,
    /// Data rows in the input file.
    pub total_rows: usize,
    /// Data rows rendered in the table.
    pub shown_rows: usize,
    /// Whether the table omitted rows.
    pub truncated: bool,
}

/// Orchestrates parse and render for one input file.
pub struct Converter {
    config: RenderConfig,
}

impl Converter {
    /// Creates a converter with the given configuration.
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Reads, parses and renders `path`.
    pub fn convert_file(&self, path: impl AsRef<Path>) -> Result<ConvertResult, ConvertError> {
        let path = path.as_ref();
        let encoding = resolve_encoding(&self.config.encoding)?;
        let document = CsvReader::new()
            .with_delimiter(self.config.delimiter_byte()?)
            .with_quote(self.config.quote_byte()?)
            .read_file(path, encoding)?;

        debug!(
            path = %path.display(),
            rows = document.row_count(),
            columns = document.headers.len(),
            "parsed CSV file"
        );

        Ok(self.convert(&document))
    }

    /// Renders an already parsed document.
    ///
    /// The table fragment honors the `head` cap and is followed by the
    /// truncation notice when rows were omitted; the raw fragment always
    /// carries the full row count and the untruncated text.
    pub fn convert(&self, document: &CsvDocument) -> ConvertResult {
        let total = document.row_count();
        let head = self.config.head.unwrap_or(total);
        let shown = head.min(total);
        let truncated = total > head;

        let mut parts = Vec::new();

        if self.config.mode.renders_table() {
            parts.push(markdown_table(
                &document.headers,
                &document.records[..shown],
            ));
            if truncated {
                let notice = self.config.messages.notice(shown, total);
                parts.push(format!("\n\n{notice}\n"));
            }
        }

        if self.config.mode.renders_details() {
            let title = self.config.messages.title(total);
            parts.push(details_block(&title, &document.raw, &self.config.lang));
        }

        debug!(total, shown, mode = ?self.config.mode, "rendered fragments");

        ConvertResult {
            markdown: parts.join("\n"),
            total_rows: total,
            shown_rows: shown,
            truncated,
        }
    }
}
