//! Format selection for graph files.
//!
//! The input format is taken from the filename suffix only; content is never
//! sniffed. A file named `graph.csv` is rejected whatever it contains.

use super::traits::{GraphParser, ParseError};
use super::{GexfParser, JsonGraphParser};
use crate::model::Graph;
use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Supported input formats.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    /// JSON graph (`nodes` + `edges` or `nodes` + `links`)
    Json,
    /// GEXF XML graph
    Gexf,
}

impl InputFormat {
    /// Every supported format, in dispatch order
    pub const ALL: [Self; 2] = [Self::Json, Self::Gexf];

    /// Select a format by filename suffix.
    ///
    /// Matching is case-sensitive: `graph.JSON` is not recognized.
    #[must_use]
    pub fn from_filename(filename: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|format| filename.ends_with(format.suffix()))
    }

    /// Get the human-readable name for this format.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Json => "JSON",
            Self::Gexf => "GEXF",
        }
    }

    /// File extension without the dot
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Gexf => "gexf",
        }
    }

    /// Filename suffix including the dot
    #[must_use]
    pub const fn suffix(&self) -> &'static str {
        match self {
            Self::Json => ".json",
            Self::Gexf => ".gexf",
        }
    }
}

impl std::fmt::Display for InputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

/// Routes a file to the parser for its format.
///
/// Holds one stateless parser per format, so a single dispatcher can serve
/// any number of calls, from any thread.
#[derive(Debug, Clone, Default)]
pub struct FormatDispatcher {
    json: JsonGraphParser,
    gexf: GexfParser,
}

impl FormatDispatcher {
    /// Create a new dispatcher
    #[must_use]
    pub const fn new() -> Self {
        Self {
            json: JsonGraphParser::new(),
            gexf: GexfParser::new(),
        }
    }

    /// Select the format for a filename, or fail with `UnsupportedFormat`
    pub fn select(&self, filename: &str) -> Result<InputFormat, ParseError> {
        InputFormat::from_filename(filename).ok_or_else(|| {
            tracing::debug!("No parser for filename {:?}", filename);
            ParseError::UnsupportedFormat(filename.to_string())
        })
    }

    /// The parser handling a format
    #[must_use]
    pub fn parser(&self, format: InputFormat) -> &dyn GraphParser {
        match format {
            InputFormat::Json => &self.json,
            InputFormat::Gexf => &self.gexf,
        }
    }

    /// Parse raw file content, choosing the parser from the filename.
    ///
    /// The filename is checked before the bytes are decoded, so an
    /// unsupported extension wins over undecodable content.
    pub fn parse_bytes(&self, filename: &str, content: &[u8]) -> Result<Graph, ParseError> {
        let format = self.select(filename)?;
        self.parse_as(format, content)
    }

    /// Parse already-decoded content, choosing the parser from the filename
    pub fn parse_str(&self, filename: &str, content: &str) -> Result<Graph, ParseError> {
        let format = self.select(filename)?;
        tracing::debug!("Parsing {:?} as {}", filename, format.name());
        self.parser(format).parse_str(content)
    }

    /// Parse raw content in an explicitly declared format
    pub fn parse_as(&self, format: InputFormat, content: &[u8]) -> Result<Graph, ParseError> {
        tracing::debug!("Parsing {} bytes as {}", content.len(), format.name());
        self.parser(format).parse_bytes(content)
    }
}
