//! GEXF graph parser.
//!
//! Documents are checked for XML well-formedness first: undefined entities,
//! stray `&` or `<`, invalid names, malformed comments and unbound namespace
//! prefixes are all rejected. `node` and `edge` elements are then matched by
//! local name anywhere below the root element, so documents declaring the
//! GEXF 1.2 draft namespace, a prefixed namespace, or none at all yield the
//! same graph.

use crate::model::{Graph, Link, Node};
use crate::parsers::traits::{GraphParser, ParseError};
use roxmltree::{Document, ParsingOptions};

/// Sizing hint placed on every node as `val`.
pub const NODE_VAL: u64 = 1;

/// Message returned for every GEXF failure. Details are only logged.
const INVALID_GEXF: &str = "Invalid GEXF file";

/// Parser for GEXF graph files
#[derive(Debug, Clone, Copy, Default)]
pub struct GexfParser;

impl GexfParser {
    /// Create a new GEXF parser
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Parse the document and collect nodes and edges in document order.
    ///
    /// Internal DTD subsets are allowed; their entities expand as usual.
    fn read_document(&self, content: &str) -> Result<Graph, roxmltree::Error> {
        let mut options = ParsingOptions::default();
        options.allow_dtd = true;
        let document = Document::parse_with_options(content, options)?;

        let mut graph = Graph::default();
        for element in document
            .root_element()
            .descendants()
            .skip(1)
            .filter(roxmltree::Node::is_element)
        {
            match element.tag_name().name() {
                "node" => {
                    let mut node = Node::new(
                        element.attribute("id").map(str::to_owned),
                        element.attribute("label").map(str::to_owned),
                    );
                    node.insert("val", NODE_VAL);
                    graph.add_node(node);
                }
                "edge" => graph.add_link(Link::new(
                    element.attribute("source").map(str::to_owned),
                    element.attribute("target").map(str::to_owned),
                    element.attribute("id").map(str::to_owned),
                )),
                _ => {}
            }
        }
        Ok(graph)
    }
}

impl GraphParser for GexfParser {
    fn parse_str(&self, content: &str) -> Result<Graph, ParseError> {
        match self.read_document(content) {
            Ok(graph) => {
                tracing::debug!(
                    "Parsed GEXF: {} nodes, {} edges",
                    graph.node_count(),
                    graph.link_count()
                );
                Ok(graph)
            }
            Err(detail) => {
                tracing::warn!("Error parsing GEXF: {}", detail);
                Err(ParseError::InvalidFormat(INVALID_GEXF.to_string()))
            }
        }
    }

    fn format_name(&self) -> &str {
        "GEXF"
    }

    fn extensions(&self) -> &[&str] {
        &["gexf"]
    }
}
