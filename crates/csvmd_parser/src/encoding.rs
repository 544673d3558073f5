//! Encoding resolution and strict decoding.

use std::fs;
use std::io;
use std::path::Path;

use encoding_rs::Encoding;

use crate::ReadError;

/// Resolves a WHATWG encoding label ("utf-8", "shift_jis", "latin1", ...).
pub fn resolve_encoding(label: &str) -> Result<&'static Encoding, ReadError> {
    Encoding::for_label(label.trim().as_bytes())
        .ok_or_else(|| ReadError::UnknownEncoding(label.to_string()))
}

/// Reads `path` and decodes it strictly under `encoding`.
///
/// A byte sequence that is malformed under the encoding aborts the read;
/// there is no lossy replacement.
pub fn decode_file(path: &Path, encoding: &'static Encoding) -> Result<String, ReadError> {
    let bytes = fs::read(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ReadError::FileNotFound(path.to_path_buf()),
        _ => ReadError::Io(e),
    })?;

    let (text, _, had_errors) = encoding.decode(&bytes);
    if had_errors {
        return Err(ReadError::Encoding {
            path: path.to_path_buf(),
            encoding: encoding.name(),
        });
    }

    Ok(text.into_owned())
}
