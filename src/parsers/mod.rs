//! Graph format parsers.
//!
//! This module provides parsers for GEXF and JSON graph files, converting
//! them to the normalized [`Graph`] representation.
//!
//! ## Format Selection
//!
//! The parser is chosen from the filename suffix: `.json` selects the JSON
//! parser, `.gexf` the GEXF parser, anything else fails with
//! [`ParseError::UnsupportedFormat`]. Content is never used to guess a format.
//!
//! ## Usage
//!
//! ```no_run
//! use graph_tools::parsers::{parse_graph, parse_graph_file};
//! use std::path::Path;
//!
//! // Parse an uploaded blob by its filename
//! let graph = parse_graph("upload.gexf", b"<gexf><nodes/></gexf>").unwrap();
//!
//! // Parse a file on disk
//! let graph = parse_graph_file(Path::new("graph.json")).unwrap();
//! println!("{} nodes, {} links", graph.node_count(), graph.link_count());
//! ```

mod detection;
mod gexf;
mod json;
mod traits;

pub use detection::{FormatDispatcher, InputFormat};
pub use gexf::{GexfParser, NODE_VAL};
pub use json::{JsonGraphParser, JsonGraphSchema};
pub use traits::{decode_content, GraphParser, ParseError, ParseErrorKind};

use crate::model::Graph;
use std::path::Path;

/// Maximum graph file size (512 MB) accepted by [`parse_graph_file`].
pub const MAX_GRAPH_FILE_SIZE: u64 = 512 * 1024 * 1024;

/// Parse raw file content, selecting the parser from the filename
pub fn parse_graph(filename: &str, content: &[u8]) -> Result<Graph, ParseError> {
    FormatDispatcher::new().parse_bytes(filename, content)
}

/// Parse decoded file content, selecting the parser from the filename
pub fn parse_graph_str(filename: &str, content: &str) -> Result<Graph, ParseError> {
    FormatDispatcher::new().parse_str(filename, content)
}

/// Read and parse a graph file, selecting the parser from its file name
///
/// Returns an error if the file exceeds [`MAX_GRAPH_FILE_SIZE`].
pub fn parse_graph_file(path: &Path) -> Result<Graph, ParseError> {
    parse_graph_file_with_limit(path, MAX_GRAPH_FILE_SIZE)
}

/// Read and parse a graph file, refusing files larger than `max_size` bytes
pub fn parse_graph_file_with_limit(path: &Path, max_size: u64) -> Result<Graph, ParseError> {
    let filename = path.to_string_lossy();
    let dispatcher = FormatDispatcher::new();
    let format = dispatcher.select(&filename)?;

    let metadata = std::fs::metadata(path)?;
    if metadata.len() > max_size {
        return Err(ParseError::IoError(format!(
            "graph file is {} bytes, exceeding the {} byte limit",
            metadata.len(),
            max_size,
        )));
    }

    let content = std::fs::read(path)?;
    dispatcher.parse_as(format, &content)
}
