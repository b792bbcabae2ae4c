//! Configuration module for graph-tools.
//!
//! This module provides:
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - YAML config file loading and discovery
//! - CLI argument merging
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use graph_tools::config::{AppConfig, InputFormat};
//!
//! // Use builder
//! let config = AppConfig::builder()
//!     .format(InputFormat::Gexf)
//!     .pretty(true)
//!     .build();
//!
//! // Load from file
//! use graph_tools::config::load_or_default;
//! let (config, loaded_from) = load_or_default(None);
//! ```
//!
//! # Configuration File
//!
//! Place a `.graph-tools.yaml` file in your project root or `~/.config/graph-tools/`:
//!
//! ```yaml
//! input:
//!   max_file_size_mb: 64
//! output:
//!   pretty: true
//! ```

pub mod file;
mod types;
mod validation;

pub use crate::parsers::InputFormat;
pub use file::{
    config_search_paths, discover_config_file, generate_example_config, load_config_file,
    load_or_default, load_with_overrides, ConfigFileError, CONFIG_FILE_NAMES,
};
pub use types::{
    AppConfig, AppConfigBuilder, BehaviorConfig, InputConfig, OutputConfig,
    DEFAULT_MAX_FILE_SIZE_MB,
};
pub use validation::{ConfigError, Validatable};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// Documents every option that can be set in `.graph-tools.yaml`, for
/// editor validation and autocompletion.
pub fn generate_json_schema() -> Result<String, serde_json::Error> {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema)
}
