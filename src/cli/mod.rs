//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by main.rs.
//! Each handler implements the business logic for a specific CLI subcommand.

mod convert;
mod summary;

pub use convert::run_convert;
pub use summary::run_summary;

// Re-export config types used by handlers
pub use crate::config::AppConfig;
