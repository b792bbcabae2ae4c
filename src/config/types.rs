//! Configuration types for graph-tools operations.

use crate::parsers::InputFormat;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default maximum input size in megabytes.
pub const DEFAULT_MAX_FILE_SIZE_MB: u64 = 512;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Unified application configuration that can be loaded from CLI args or config files.
///
/// CLI arguments are layered over file settings with [`AppConfig::merge`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Input handling (size limit, format override)
    pub input: InputConfig,
    /// Output configuration (pretty printing, file)
    pub output: OutputConfig,
    /// Behavior flags
    pub behavior: BehaviorConfig,
}

impl AppConfig {
    /// Create an `AppConfig` builder.
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Input size limit in bytes
    #[must_use]
    pub const fn max_file_size_bytes(&self) -> u64 {
        self.input.max_file_size_mb.saturating_mul(1024 * 1024)
    }
}

// ============================================================================
// Builder for AppConfig
// ============================================================================

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    /// Set the input size limit in megabytes.
    pub const fn max_file_size_mb(mut self, megabytes: u64) -> Self {
        self.config.input.max_file_size_mb = megabytes;
        self
    }

    /// Force an input format instead of using the file name.
    pub const fn format(mut self, format: InputFormat) -> Self {
        self.config.input.format = Some(format);
        self
    }

    /// Pretty-print JSON output.
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.config.output.pretty = pretty;
        self
    }

    /// Write output to a file instead of stdout.
    pub fn output_file(mut self, file: Option<PathBuf>) -> Self {
        self.config.output.file = file;
        self
    }

    /// Suppress informational logging.
    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.config.behavior.quiet = quiet;
        self
    }

    /// Treat a graph with no nodes and no links as a failure.
    pub const fn fail_on_empty(mut self, fail: bool) -> Self {
        self.config.behavior.fail_on_empty = fail;
        self
    }

    /// Build the `AppConfig`.
    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// Section Configurations
// ============================================================================

/// Input-related configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct InputConfig {
    /// Refuse input files larger than this many megabytes
    #[schemars(range(min = 1))]
    pub max_file_size_mb: u64,
    /// Parse every input as this format instead of selecting by file name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<InputFormat>,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            max_file_size_mb: DEFAULT_MAX_FILE_SIZE_MB,
            format: None,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Indent JSON output
    pub pretty: bool,
    /// Output file path (None for stdout)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

/// Behavior flags
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Suppress informational logging
    pub quiet: bool,
    /// Exit non-zero when the parsed graph has no nodes and no links
    pub fail_on_empty: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.input.max_file_size_mb, 512);
        assert_eq!(config.max_file_size_bytes(), 512 * 1024 * 1024);
        assert!(config.input.format.is_none());
        assert!(!config.output.pretty);
        assert!(!config.behavior.fail_on_empty);
    }

    #[test]
    fn test_builder() {
        let config = AppConfig::builder()
            .max_file_size_mb(8)
            .format(InputFormat::Gexf)
            .pretty(true)
            .fail_on_empty(true)
            .build();

        assert_eq!(config.input.max_file_size_mb, 8);
        assert_eq!(config.input.format, Some(InputFormat::Gexf));
        assert!(config.output.pretty);
        assert!(config.behavior.fail_on_empty);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config: AppConfig = serde_yaml_ng::from_str("output:\n  pretty: true\n").unwrap();
        assert!(config.output.pretty);
        assert_eq!(config.input.max_file_size_mb, DEFAULT_MAX_FILE_SIZE_MB);
    }

    #[test]
    fn test_format_deserializes_lowercase() {
        let config: AppConfig = serde_yaml_ng::from_str("input:\n  format: gexf\n").unwrap();
        assert_eq!(config.input.format, Some(InputFormat::Gexf));
    }
}
