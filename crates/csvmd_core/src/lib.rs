//! # csvmd_core
//!
//! Core conversion engine for csvmd.
//!
//! This crate provides:
//! - The `Converter` orchestrator
//! - Render configuration and the localizable message catalog
//! - Pure Markdown renderers (table, collapsible raw block)
//!
//! ## Example
//!
//! ```rust,ignore
//! use csvmd_core::{Converter, RenderConfig};
//!
//! let converter = Converter::new(RenderConfig::default());
//! let result = converter.convert_file("data.csv")?;
//! println!("{}", result.markdown);
//! ```

mod config;
mod converter;
mod error;
mod messages;
pub mod render;

pub use config::{OutputMode, RenderConfig};
pub use converter::{ConvertResult, Converter};
pub use error::ConvertError;
pub use messages::Messages;

pub use csvmd_parser::{CsvDocument, CsvReader, ReadError, Record, resolve_encoding};
