//! **Normalize graph files into a single `{nodes, links}` representation.**
//!
//! `graph-tools` reads graph documents exported by other tools and converts them
//! into one JSON shape that force-directed visualizations can consume directly:
//! a list of node objects and a list of link objects.
//!
//! ## Supported Inputs
//!
//! - **GEXF** (`.gexf`): every `<node>` becomes `{id, name, val}` and every
//!   `<edge>` becomes `{source, target, id}`. The GEXF 1.2draft namespace is
//!   optional.
//! - **JSON** (`.json`), in one of two schemas:
//!   - *keyed attributes*: `nodes` + `edges`, where entries carry a `key` and an
//!     `attributes` object (the layout graphology and similar libraries export);
//!   - *direct*: `nodes` + `links`, already in the output shape and passed through.
//!
//! The parser is chosen from the filename suffix alone. Content is never sniffed.
//!
//! ## Core Modules
//!
//! - **[`model`]**: the normalized [`Graph`], [`Node`] and [`Link`] types.
//! - **[`parsers`]**: [`GexfParser`], [`JsonGraphParser`] and the
//!   [`FormatDispatcher`] that routes a filename to one of them.
//! - **[`pipeline`]**: read, parse and write stages shared by the CLI.
//! - **[`config`]**: YAML configuration with discovery and validation.
//!
//! ## Getting Started
//!
//! ```
//! use graph_tools::parse_graph;
//!
//! let content = br#"{"nodes":[{"id":"a","name":"A"}],"links":[]}"#;
//! let graph = parse_graph("graph.json", content).unwrap();
//! assert_eq!(graph.node_count(), 1);
//! println!("{}", graph.to_json().unwrap());
//! ```
//!
//! Unsupported file types are rejected before their content is looked at:
//!
//! ```
//! use graph_tools::{parse_graph, ParseError};
//!
//! let err = parse_graph("graph.csv", b"a,b").unwrap_err();
//! assert!(matches!(err, ParseError::UnsupportedFormat(_)));
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

pub mod cli;
pub mod config;
pub mod model;
pub mod parsers;
pub mod pipeline;

// Re-export main types for convenience
pub use config::{AppConfig, AppConfigBuilder, BehaviorConfig, InputConfig, OutputConfig};
pub use config::{ConfigError, Validatable};
pub use model::{Graph, GraphStats, Link, Node};
pub use parsers::{
    parse_graph, parse_graph_file, parse_graph_str, FormatDispatcher, GexfParser, GraphParser,
    InputFormat, JsonGraphParser, ParseError,
};
