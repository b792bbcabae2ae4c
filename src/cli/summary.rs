//! Summary command handler.
//!
//! Implements the `summary` subcommand: parse a graph file and report how
//! many nodes and links it holds, along with repeated node ids and links
//! that point at no node. Nothing is rejected on that basis.

use crate::config::AppConfig;
use crate::model::GraphStats;
use crate::parsers::InputFormat;
use crate::pipeline::{exit_codes, parse_graph_with_context, write_output, OutputTarget};
use anyhow::Result;
use std::fmt::Write as _;
use std::path::Path;

/// Run the summary command
pub fn run_summary(path: &Path, config: &AppConfig) -> Result<i32> {
    let parsed = parse_graph_with_context(path, config)?;
    let stats = parsed.graph().stats();

    let report = render_summary(&parsed.path, parsed.format, &stats);
    let target = OutputTarget::from_option(config.output.file.clone());
    write_output(report.trim_end(), &target, config.behavior.quiet)?;

    if config.behavior.fail_on_empty && parsed.graph().is_empty() {
        return Ok(exit_codes::EMPTY_GRAPH);
    }
    Ok(exit_codes::SUCCESS)
}

/// Render the plain-text summary
fn render_summary(path: &Path, format: InputFormat, stats: &GraphStats) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "File:    {}", path.display());
    let _ = writeln!(out, "Format:  {}", format.name());
    let _ = writeln!(out, "Nodes:   {}", stats.nodes);
    let _ = writeln!(out, "Links:   {}", stats.links);

    if !stats.duplicate_node_ids.is_empty() {
        let _ = writeln!(
            out,
            "Repeated node ids: {} ({})",
            stats.duplicate_node_ids.len(),
            stats.duplicate_node_ids.join(", ")
        );
    }
    if stats.dangling_links > 0 {
        let _ = writeln!(out, "Links without a matching node: {}", stats.dangling_links);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_summary_clean_graph() {
        let stats = GraphStats {
            nodes: 2,
            links: 1,
            ..Default::default()
        };
        let out = render_summary(Path::new("g.json"), InputFormat::Json, &stats);
        assert!(out.contains("Format:  JSON"));
        assert!(out.contains("Nodes:   2"));
        assert!(!out.contains("Repeated"));
        assert!(!out.contains("without a matching node"));
    }

    #[test]
    fn test_render_summary_reports_duplicates() {
        let stats = GraphStats {
            nodes: 3,
            links: 2,
            duplicate_node_ids: vec!["1".to_string()],
            dangling_links: 1,
        };
        let out = render_summary(Path::new("g.gexf"), InputFormat::Gexf, &stats);
        assert!(out.contains("Repeated node ids: 1 (1)"));
        assert!(out.contains("Links without a matching node: 1"));
    }
}
