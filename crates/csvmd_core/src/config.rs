//! Render configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{ConvertError, Messages};

/// File names probed when no explicit config path is given.
pub const CONFIG_FILE_NAMES: [&str; 2] = [".csvmd.jsonc", ".csvmd.json"];

/// Which fragments the converter emits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputMode {
    /// Markdown table only.
    #[serde(rename = "table")]
    Table,
    /// Markdown table followed by the collapsible raw block.
    #[default]
    #[serde(rename = "table+details_csv")]
    TableWithDetails,
    /// Collapsible raw block only.
    #[serde(rename = "details_csv")]
    DetailsOnly,
}

impl OutputMode {
    /// Whether the table fragment is rendered.
    pub fn renders_table(&self) -> bool {
        matches!(self, Self::Table | Self::TableWithDetails)
    }

    /// Whether the collapsible raw block is rendered.
    pub fn renders_details(&self) -> bool {
        matches!(self, Self::TableWithDetails | Self::DetailsOnly)
    }
}

/// Configuration for a conversion run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RenderConfig {
    /// Maximum number of data rows in the table; `None` renders all rows.
    #[serde(default)]
    pub head: Option<usize>,

    /// Fragments to emit.
    #[serde(default)]
    pub mode: OutputMode,

    /// WHATWG label of the input text encoding.
    #[serde(default = "default_encoding")]
    pub encoding: String,

    /// Field delimiter; must be a single-byte character.
    #[serde(default = "default_delimiter")]
    pub delimiter: char,

    /// Quote character; must be a single-byte character.
    #[serde(default = "default_quote")]
    pub quote: char,

    /// Language tag of the fenced block in the raw view.
    #[serde(default = "default_lang")]
    pub lang: String,

    /// Localizable output strings.
    #[serde(default)]
    pub messages: Messages,
}

fn default_encoding() -> String {
    "utf-8".to_string()
}

fn default_delimiter() -> char {
    ','
}

fn default_quote() -> char {
    '"'
}

fn default_lang() -> String {
    "csv".to_string()
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            head: None,
            mode: OutputMode::default(),
            encoding: default_encoding(),
            delimiter: default_delimiter(),
            quote: default_quote(),
            lang: default_lang(),
            messages: Messages::default(),
        }
    }
}

impl RenderConfig {
    /// Loads configuration from a file.
    ///
    /// Supports `.csvmd.jsonc`, `.csvmd.json`.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConvertError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| ConvertError::config(format!("Failed to read config: {e}")))?;
        Self::from_json(&content)
    }

    /// Parses configuration from a JSON or JSONC string.
    pub fn from_json(json: &str) -> Result<Self, ConvertError> {
        let value = jsonc_parser::parse_to_serde_value(json, &Default::default())
            .map_err(|e| ConvertError::config(format!("Invalid JSON: {e}")))?
            .unwrap_or_else(|| serde_json::Value::Object(serde_json::Map::new()));

        serde_json::from_value(value)
            .map_err(|e| ConvertError::config(format!("Invalid config: {e}")))
    }

    /// Looks for a config file in `dir` and loads it when present.
    pub fn discover(dir: impl AsRef<Path>) -> Result<Option<Self>, ConvertError> {
        for name in CONFIG_FILE_NAMES {
            let candidate = dir.as_ref().join(name);
            if candidate.is_file() {
                return Self::from_file(candidate).map(Some);
            }
        }
        Ok(None)
    }

    /// The delimiter as the single byte the CSV reader takes.
    pub fn delimiter_byte(&self) -> Result<u8, ConvertError> {
        single_byte(self.delimiter, "Delimiter")
    }

    /// The quote character as the single byte the CSV reader takes.
    pub fn quote_byte(&self) -> Result<u8, ConvertError> {
        single_byte(self.quote, "Quote")
    }
}

fn single_byte(ch: char, what: &str) -> Result<u8, ConvertError> {
    if ch.is_ascii() {
        Ok(ch as u8)
    } else {
        Err(ConvertError::config(format!(
            "{what} must be a single-byte character, got '{ch}'"
        )))
    }
}
