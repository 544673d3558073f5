//! Collapsible raw-block renderer.

use super::escape::escape_html;

/// Language tag used when the caller does not pick one.
pub const DEFAULT_LANG: &str = "text";

/// Wraps `body` in a `<details>` disclosure whose `<summary>` is the
/// HTML-escaped `title`, with the body in a fenced code block tagged `lang`.
///
/// The body is placed verbatim; a body that itself contains the fence
/// sequence is an accepted limitation.
pub fn details_block(title: &str, body: &str, lang: &str) -> String {
    format!(
        "<details>\n<summary>{}</summary>\n\n```{}\n{}\n```\n\n</details>",
        escape_html(title),
        lang,
        body
    )
}
