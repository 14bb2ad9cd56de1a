//! Word-list file reading and text decoding

use std::fs;
use std::path::Path;

use encoding_rs::Encoding;

use super::error::{HskError, Result};

/// Resolve an encoding label (e.g. "UTF-8", "GB18030") to an encoding.
///
/// GBK and GB2312 are normalized to GB18030, their superset. Unknown
/// labels fall back to UTF-8.
pub fn parse_encoding(label: &str) -> &'static Encoding {
    let label = match label {
        "GBK" | "GB2312" => "GB18030",
        other => other,
    };
    Encoding::for_label(label.as_bytes()).unwrap_or(encoding_rs::UTF_8)
}

/// Read a word-list file and decode it with the given encoding.
///
/// A byte-order mark in the file takes precedence over `encoding`. Any
/// malformed byte sequence is a fatal error rather than a replacement
/// character: a garbled list must not be absorbed into the table.
pub fn read_word_list(path: &Path, encoding: &'static Encoding) -> Result<String> {
    let bytes = fs::read(path)?;
    let (text, used_encoding, had_errors) = encoding.decode(&bytes);
    if had_errors {
        return Err(HskError::Decode {
            path: path.to_path_buf(),
            encoding: used_encoding.name(),
        });
    }
    Ok(text.into_owned())
}
