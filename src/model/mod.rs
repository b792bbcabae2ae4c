//! Normalized graph representation.
//!
//! Every supported input format is converted into a [`Graph`] of [`Node`]s and
//! [`Link`]s. Nodes and links are insertion-ordered mappings so attributes
//! copied from the source document survive unchanged, while the keys the
//! visualization relies on (`id`, `name`, `source`, `target`) are always
//! present on graphs produced by the parsers.

mod graph;

pub use graph::*;
