//! Parser trait definitions and error types.
//!
//! This module defines the `GraphParser` trait implemented by each
//! format-specific parser, and the error type every parse path returns.

use crate::model::Graph;
use thiserror::Error;

/// Errors that can occur while turning an input file into a [`Graph`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Input bytes are not valid UTF-8 text
    #[error("Decode error: {0}")]
    DecodeError(String),

    /// The filename carries no recognized extension
    #[error("Unsupported file type: {0}")]
    UnsupportedFormat(String),

    /// Content fails structural parsing for the selected format
    #[error("{0}")]
    InvalidFormat(String),

    /// The file could not be read
    #[error("IO error: {0}")]
    IoError(String),
}

/// Discriminant of [`ParseError`], for callers mapping failures onto their
/// own responses or exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    Decode,
    UnsupportedFormat,
    InvalidFormat,
    Io,
}

impl ParseError {
    /// Which kind of failure this is
    #[must_use]
    pub const fn kind(&self) -> ParseErrorKind {
        match self {
            Self::DecodeError(_) => ParseErrorKind::Decode,
            Self::UnsupportedFormat(_) => ParseErrorKind::UnsupportedFormat,
            Self::InvalidFormat(_) => ParseErrorKind::InvalidFormat,
            Self::IoError(_) => ParseErrorKind::Io,
        }
    }

    /// The message without the kind prefix
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::DecodeError(msg)
            | Self::UnsupportedFormat(msg)
            | Self::InvalidFormat(msg)
            | Self::IoError(msg) => msg,
        }
    }

    /// True when the input itself was rejected, as opposed to the file
    /// being unreadable
    #[must_use]
    pub const fn is_input_rejected(&self) -> bool {
        !matches!(self, Self::IoError(_))
    }
}

impl From<std::io::Error> for ParseError {
    fn from(err: std::io::Error) -> Self {
        Self::IoError(err.to_string())
    }
}

impl From<std::str::Utf8Error> for ParseError {
    fn from(err: std::str::Utf8Error) -> Self {
        Self::DecodeError(err.to_string())
    }
}

/// Decode raw input bytes as UTF-8.
pub fn decode_content(content: &[u8]) -> Result<&str, ParseError> {
    Ok(std::str::from_utf8(content)?)
}

/// Trait for graph format parsers
///
/// Implementors provide `parse_str`; `parse_bytes` decodes the input first
/// and delegates to it. Parsers hold no per-call state.
pub trait GraphParser: Send + Sync {
    /// Parse a graph from string content
    fn parse_str(&self, content: &str) -> Result<Graph, ParseError>;

    /// Parse a graph from raw bytes, which must be UTF-8
    fn parse_bytes(&self, content: &[u8]) -> Result<Graph, ParseError> {
        self.parse_str(decode_content(content)?)
    }

    /// Get format name
    fn format_name(&self) -> &str;

    /// File extensions (without the dot) this parser is selected for
    fn extensions(&self) -> &[&str];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_rejects_invalid_utf8() {
        let err = decode_content(&[0x7b, 0xff, 0xfe]).unwrap_err();
        assert_eq!(err.kind(), ParseErrorKind::Decode);
    }

    #[test]
    fn test_decode_accepts_utf8() {
        assert_eq!(decode_content("{\"é\": 1}".as_bytes()).unwrap(), "{\"é\": 1}");
    }

    #[test]
    fn test_invalid_format_displays_bare_message() {
        let err = ParseError::InvalidFormat("Invalid GEXF file".to_string());
        assert_eq!(err.to_string(), "Invalid GEXF file");
        assert_eq!(err.message(), "Invalid GEXF file");
        assert!(err.is_input_rejected());
    }

    #[test]
    fn test_io_error_is_not_input_rejection() {
        let err: ParseError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert_eq!(err.kind(), ParseErrorKind::Io);
        assert!(!err.is_input_rejected());
    }
}
