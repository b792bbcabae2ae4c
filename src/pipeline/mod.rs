//! Pipeline orchestration for graph files.
//!
//! Shared read → parse → write logic for the CLI command handlers.

mod output;
mod parse;

pub use output::{write_output, OutputTarget};
pub use parse::{parse_graph_with_context, ParsedGraph};

use crate::parsers::ParseError;

/// Exit codes for scripting and CI use
pub mod exit_codes {
    /// Success
    pub const SUCCESS: i32 = 0;
    /// The graph parsed but is empty and `fail_on_empty` is set
    pub const EMPTY_GRAPH: i32 = 1;
    /// The input was rejected: unsupported format, undecodable or invalid content
    pub const INPUT_REJECTED: i32 = 2;
    /// Any other error
    pub const ERROR: i32 = 3;
}

/// Map an error chain to an exit code.
///
/// Errors carrying a [`ParseError`] for rejected input map to
/// [`exit_codes::INPUT_REJECTED`]; everything else is [`exit_codes::ERROR`].
#[must_use]
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    let rejected = err
        .chain()
        .filter_map(|cause| cause.downcast_ref::<ParseError>())
        .any(ParseError::is_input_rejected);
    if rejected {
        exit_codes::INPUT_REJECTED
    } else {
        exit_codes::ERROR
    }
}
