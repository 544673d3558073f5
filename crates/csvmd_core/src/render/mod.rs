//! Markdown renderers.
//!
//! Pure functions over parsed rows and raw text. The converter owns fragment
//! ordering and joining; nothing here appends trailing newlines.

mod details;
mod escape;
mod table;

pub use details::{DEFAULT_LANG, details_block};
pub use escape::{escape_cell, escape_html};
pub use table::markdown_table;
