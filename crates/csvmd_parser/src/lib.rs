//! # csvmd_parser
//!
//! CSV read layer for csvmd.
//!
//! This crate provides:
//! - Encoding resolution and strict decoding via `encoding_rs`
//! - An RFC 4180 `CsvReader` built on the `csv` crate
//! - The `CsvDocument` model: headers, records, and the decoded raw text
//!
//! ## Example
//!
//! ```rust,ignore
//! use csvmd_parser::{CsvReader, resolve_encoding};
//!
//! let encoding = resolve_encoding("utf-8")?;
//! let document = CsvReader::new().read_file("data.csv".as_ref(), encoding)?;
//! println!("{} rows", document.row_count());
//! ```

mod document;
mod encoding;
mod error;
mod reader;

pub use document::{CsvDocument, Record};
pub use encoding::{decode_file, resolve_encoding};
pub use error::ReadError;
pub use reader::CsvReader;
