//! Graph file parsing pipeline.
//!
//! Provides functions for reading and parsing graph files with context.

use crate::config::AppConfig;
use crate::model::Graph;
use crate::parsers::{FormatDispatcher, InputFormat, ParseError};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// A parsed graph together with where it came from
#[derive(Debug, Clone)]
pub struct ParsedGraph {
    /// The normalized graph
    pub graph: Graph,
    /// Format the file was parsed as
    pub format: InputFormat,
    /// Path the graph was read from
    pub path: PathBuf,
}

impl ParsedGraph {
    /// Get a reference to the graph
    #[must_use]
    pub const fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Consume and return the inner graph
    #[must_use]
    pub fn into_graph(self) -> Graph {
        self.graph
    }
}

/// Read and parse a graph file, with context for error messages.
///
/// The format comes from `config.input.format` when set, otherwise from the
/// file name. Files over `config.input.max_file_size_mb` are refused before
/// being read. The underlying [`ParseError`] stays reachable through
/// `downcast_ref` for exit-code mapping.
pub fn parse_graph_with_context(path: &Path, config: &AppConfig) -> Result<ParsedGraph> {
    let quiet = config.behavior.quiet;
    if !quiet {
        tracing::info!("Parsing graph: {:?}", path);
    }

    let dispatcher = FormatDispatcher::new();
    let format = match config.input.format {
        Some(format) => format,
        None => dispatcher
            .select(&path.to_string_lossy())
            .with_context(|| format!("Cannot parse {}", path.display()))?,
    };

    let limit = config.max_file_size_bytes();
    let size = std::fs::metadata(path)
        .with_context(|| format!("Failed to read graph file: {}", path.display()))?
        .len();
    if size > limit {
        return Err(ParseError::IoError(format!(
            "graph file is {} MB, exceeding the {} MB limit",
            size / (1024 * 1024),
            config.input.max_file_size_mb,
        )))
        .with_context(|| format!("Failed to read graph file: {}", path.display()));
    }

    let content = std::fs::read(path)
        .with_context(|| format!("Failed to read graph file: {}", path.display()))?;
    let graph = dispatcher
        .parse_as(format, &content)
        .with_context(|| format!("Failed to parse graph: {}", path.display()))?;

    if !quiet {
        tracing::info!(
            "Parsed {} nodes and {} links as {}",
            graph.node_count(),
            graph.link_count(),
            format.name()
        );
    }

    Ok(ParsedGraph {
        graph,
        format,
        path: path.to_path_buf(),
    })
}
