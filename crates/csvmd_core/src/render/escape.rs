//! Escaping for the Markdown and HTML contexts the renderers emit into.

/// Escapes a table cell.
///
/// Each line feed and carriage return becomes a single space (cells are one
/// table line), and each pipe gains a backslash so it cannot terminate the
/// column.
pub fn escape_cell(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\n' | '\r' => out.push(' '),
            '|' => out.push_str("\\|"),
            _ => out.push(ch),
        }
    }
    out
}

/// Escapes text placed inside a `<summary>` element so it cannot break out
/// of the surrounding markup.
pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    out
}
