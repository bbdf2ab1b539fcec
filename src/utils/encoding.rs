//! Text loading with an ordered encoding fallback chain
//!
//! A file's bytes are read once and decoded strictly (no replacement
//! characters) with each encoding of the chain in turn. The first encoding that
//! decodes cleanly wins, and the caller learns which one it was.

use encoding_rs::{Encoding, UTF_8, WINDOWS_1252};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

/// Placeholder rendered when no encoding of the chain can decode a file.
pub const UNDECODABLE_PLACEHOLDER: &str = "# File could not be decoded";

/// Prefix of the placeholder rendered when a file cannot be read.
pub const READ_ERROR_PREFIX: &str = "# Error reading file: ";

/// Encodings attempted in order when no chain is configured.
pub const DEFAULT_ENCODINGS: [TextEncoding; 4] = [
    TextEncoding::Utf8,
    TextEncoding::Latin1,
    TextEncoding::Windows1252,
    TextEncoding::Iso8859_1,
];

/// A text encoding that can take part in the fallback chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TextEncoding {
    #[serde(rename = "utf-8", alias = "utf8")]
    Utf8,
    #[serde(rename = "latin-1", alias = "latin1")]
    Latin1,
    #[serde(rename = "cp1252", alias = "windows-1252")]
    Windows1252,
    #[serde(rename = "iso-8859-1")]
    Iso8859_1,
}

impl TextEncoding {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextEncoding::Utf8 => "utf-8",
            TextEncoding::Latin1 => "latin-1",
            TextEncoding::Windows1252 => "cp1252",
            TextEncoding::Iso8859_1 => "iso-8859-1",
        }
    }

    /// Decode `bytes` without replacement, returning `None` on malformed input.
    ///
    /// Latin-1 maps every byte to the code point of the same value, so it never
    /// fails. Whether the result is *meaningful* is not checked.
    pub fn decode(&self, bytes: &[u8]) -> Option<String> {
        match self {
            TextEncoding::Utf8 => decode_strict(UTF_8, bytes),
            TextEncoding::Latin1 | TextEncoding::Iso8859_1 => {
                Some(encoding_rs::mem::decode_latin1(bytes).into_owned())
            }
            TextEncoding::Windows1252 => decode_strict(WINDOWS_1252, bytes),
        }
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn decode_strict(encoding: &'static Encoding, bytes: &[u8]) -> Option<String> {
    encoding
        .decode_without_bom_handling_and_without_replacement(bytes)
        .map(|text| text.into_owned())
}

/// How a file's content was obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Decoded cleanly with this encoding
    Decoded(TextEncoding),
    /// Every encoding of the chain rejected the bytes
    Undecodable,
    /// The file could not be read at all
    Unreadable(String),
}

/// Content of a file ready for rendering, plus how it was obtained.
#[derive(Debug, Clone)]
pub struct LoadedFile {
    pub content: String,
    pub outcome: LoadOutcome,
}

impl LoadedFile {
    /// True when `content` is a placeholder rather than the file's text
    pub fn is_placeholder(&self) -> bool {
        !matches!(self.outcome, LoadOutcome::Decoded(_))
    }
}

/// Decode `bytes` with the first encoding of `chain` that accepts them.
pub fn decode_with_chain(bytes: &[u8], chain: &[TextEncoding]) -> Option<(String, TextEncoding)> {
    chain.iter().find_map(|encoding| encoding.decode(bytes).map(|text| (text, *encoding)))
}

/// Read a file as text, never failing.
///
/// Read errors and exhausted encoding chains produce placeholder content so
/// that one bad file cannot abort a whole run.
pub fn read_file_safe(path: &Path, chain: &[TextEncoding]) -> LoadedFile {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "failed to read file");
            return LoadedFile {
                content: format!("{READ_ERROR_PREFIX}{err}"),
                outcome: LoadOutcome::Unreadable(err.to_string()),
            };
        }
    };

    match decode_with_chain(&bytes, chain) {
        Some((content, encoding)) => {
            tracing::debug!(path = %path.display(), %encoding, "decoded file");
            LoadedFile { content, outcome: LoadOutcome::Decoded(encoding) }
        }
        None => {
            tracing::warn!(
                path = %path.display(),
                tried = chain.len(),
                "no encoding could decode file; using placeholder"
            );
            LoadedFile {
                content: UNDECODABLE_PLACEHOLDER.to_string(),
                outcome: LoadOutcome::Undecodable,
            }
        }
    }
}
