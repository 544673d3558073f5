//! Localizable output strings.
//!
//! The truncation notice and the raw-block title are presentation text, not
//! part of the table contract, so both are templates a config file can
//! override. Placeholders `{shown}` and `{total}` are substituted textually.

use serde::{Deserialize, Serialize};

/// Message catalog for the rendered fragments.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Messages {
    /// Note emitted under a truncated table.
    #[serde(default = "default_truncation_notice")]
    pub truncation_notice: String,

    /// Summary title of the collapsible raw block.
    #[serde(default = "default_details_title")]
    pub details_title: String,
}

fn default_truncation_notice() -> String {
    "> Showing first {shown} of {total} rows.".to_string()
}

fn default_details_title() -> String {
    "Full data (CSV), {total} rows".to_string()
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            truncation_notice: default_truncation_notice(),
            details_title: default_details_title(),
        }
    }
}

impl Messages {
    /// Renders the truncation notice for `shown` of `total` rows.
    pub fn notice(&self, shown: usize, total: usize) -> String {
        self.truncation_notice
            .replace("{shown}", &shown.to_string())
            .replace("{total}", &total.to_string())
    }

    /// Renders the raw-block title for `total` rows.
    pub fn title(&self, total: usize) -> String {
        self.details_title.replace("{total}", &total.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_notice() {
        let messages = Messages::default();
        assert_eq!(messages.notice(3, 10), "> Showing first 3 of 10 rows.");
    }

    #[test]
    fn test_default_title() {
        let messages = Messages::default();
        assert_eq!(messages.title(10), "Full data (CSV), 10 rows");
    }

    #[test]
    fn test_custom_template() {
        let messages = Messages {
            truncation_notice: "先頭 {shown} 行のみ（全 {total} 行）".to_string(),
            ..Messages::default()
        };
        assert_eq!(messages.notice(1, 2), "先頭 1 行のみ（全 2 行）");
    }

    #[test]
    fn test_template_without_placeholders() {
        let messages = Messages {
            details_title: "everything".to_string(),
            ..Messages::default()
        };
        assert_eq!(messages.title(5), "everything");
    }
}
