//! Convert command handler.
//!
//! Implements the `convert` subcommand: parse a graph file and emit the
//! normalized `{nodes, links}` JSON.

use crate::config::AppConfig;
use crate::pipeline::{exit_codes, parse_graph_with_context, write_output, OutputTarget};
use anyhow::{Context, Result};
use std::path::Path;

/// Run the convert command
pub fn run_convert(path: &Path, config: &AppConfig) -> Result<i32> {
    let parsed = parse_graph_with_context(path, config)?;
    let graph = parsed.graph();

    let json = if config.output.pretty {
        graph.to_json_pretty()
    } else {
        graph.to_json()
    }
    .context("Failed to serialize graph")?;

    let target = OutputTarget::from_option(config.output.file.clone());
    write_output(&json, &target, config.behavior.quiet)?;

    if config.behavior.fail_on_empty && graph.is_empty() {
        tracing::warn!("{} produced an empty graph", parsed.path.display());
        return Ok(exit_codes::EMPTY_GRAPH);
    }
    Ok(exit_codes::SUCCESS)
}
