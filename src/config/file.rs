//! Configuration file loading and discovery.
//!
//! Supports loading configuration from YAML files with automatic discovery.

use super::types::AppConfig;
use std::path::{Path, PathBuf};

// ============================================================================
// Configuration File Discovery
// ============================================================================

/// Standard config file names to search for.
pub const CONFIG_FILE_NAMES: &[&str] = &[
    ".graph-tools.yaml",
    ".graph-tools.yml",
    "graph-tools.yaml",
    "graph-tools.yml",
];

/// Discover a config file by searching standard locations.
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Current directory
/// 3. Git repository root (if in a repo)
/// 4. User config directory (~/.config/graph-tools/)
/// 5. Home directory
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        if path.exists() {
            return Some(path.to_path_buf());
        }
    }

    if let Some(path) = std::env::current_dir()
        .ok()
        .and_then(|cwd| find_config_in_dir(&cwd))
    {
        return Some(path);
    }

    if let Some(path) = find_git_root().and_then(|root| find_config_in_dir(&root)) {
        return Some(path);
    }

    if let Some(path) = dirs::config_dir()
        .and_then(|config_dir| find_config_in_dir(&config_dir.join("graph-tools")))
    {
        return Some(path);
    }

    dirs::home_dir().and_then(|home| find_config_in_dir(&home))
}

/// Directories searched for config files, in order
#[must_use]
pub fn config_search_paths() -> Vec<PathBuf> {
    [
        std::env::current_dir().ok(),
        find_git_root(),
        dirs::config_dir().map(|p| p.join("graph-tools")),
        dirs::home_dir(),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Find a config file in a specific directory.
fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

/// Find the git repository root by walking up the directory tree.
fn find_git_root() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    let mut current = cwd.as_path();

    loop {
        if current.join(".git").exists() {
            return Some(current.to_path_buf());
        }
        current = current.parent()?;
    }
}

// ============================================================================
// Configuration File Loading
// ============================================================================

/// Error type for config file operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigFileError {
    /// File not found
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// IO error reading file
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    /// YAML parsing error
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_yaml_ng::Error),
}

/// Load an `AppConfig` from a YAML file.
pub fn load_config_file(path: &Path) -> Result<AppConfig, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let config: AppConfig = serde_yaml_ng::from_str(&content)?;
    Ok(config)
}

/// Load config from discovered file, or return default.
#[must_use]
pub fn load_or_default(explicit_path: Option<&Path>) -> (AppConfig, Option<PathBuf>) {
    discover_config_file(explicit_path).map_or_else(
        || (AppConfig::default(), None),
        |path| match load_config_file(&path) {
            Ok(config) => (config, Some(path)),
            Err(e) => {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                (AppConfig::default(), None)
            }
        },
    )
}

/// Load the discovered config file and layer CLI settings over it.
///
/// `max_file_size_mb` is applied whenever it is given, even when it equals
/// the default, so an explicit limit always beats the file's.
#[must_use]
pub fn load_with_overrides(
    explicit_path: Option<&Path>,
    overrides: &AppConfig,
    max_file_size_mb: Option<u64>,
) -> (AppConfig, Option<PathBuf>) {
    let (mut config, loaded_from) = load_or_default(explicit_path);
    config.merge(overrides);
    if let Some(megabytes) = max_file_size_mb {
        config.input.max_file_size_mb = megabytes;
    }
    (config, loaded_from)
}

// ============================================================================
// Configuration Merging
// ============================================================================

impl AppConfig {
    /// Merge another config into this one, with `other` taking precedence.
    ///
    /// Only values that differ from the defaults override, so CLI args
    /// left unset keep the file's settings.
    pub fn merge(&mut self, other: &Self) {
        if other.input.max_file_size_mb != super::types::DEFAULT_MAX_FILE_SIZE_MB {
            self.input.max_file_size_mb = other.input.max_file_size_mb;
        }
        if other.input.format.is_some() {
            self.input.format = other.input.format;
        }

        if other.output.pretty {
            self.output.pretty = true;
        }
        if other.output.file.is_some() {
            self.output.file.clone_from(&other.output.file);
        }

        if other.behavior.quiet {
            self.behavior.quiet = true;
        }
        if other.behavior.fail_on_empty {
            self.behavior.fail_on_empty = true;
        }
    }
}

// ============================================================================
// Example Config Generation
// ============================================================================

/// Generate an example config file content.
#[must_use]
pub fn generate_example_config() -> String {
    r"# graph-tools configuration
# Place this file at .graph-tools.yaml in your project root
# or at ~/.config/graph-tools/graph-tools.yaml for global config.
#
# CLI arguments always override file settings.

input:
  # Refuse files larger than this many megabytes
  max_file_size_mb: 512
  # Parse every file as this format instead of using its extension (json, gexf)
  # format: gexf

output:
  # Indent JSON output
  pretty: false
  # Output file path (omit for stdout)
  # file: graph.json

behavior:
  # Suppress informational logging
  quiet: false
  # Exit with code 1 when the parsed graph is empty
  fail_on_empty: false
"
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::InputFormat;
    use tempfile::TempDir;

    #[test]
    fn test_find_config_in_dir() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join(".graph-tools.yaml");
        std::fs::write(&config_path, "output:\n  pretty: true\n").unwrap();

        let found = find_config_in_dir(tmp.path());
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_find_config_in_dir_not_found() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(find_config_in_dir(tmp.path()), None);
    }

    #[test]
    fn test_load_config_file() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.yaml");
        let yaml = r"
input:
  max_file_size_mb: 16
  format: json
behavior:
  fail_on_empty: true
";
        std::fs::write(&config_path, yaml).unwrap();

        let config = load_config_file(&config_path).unwrap();
        assert_eq!(config.input.max_file_size_mb, 16);
        assert_eq!(config.input.format, Some(InputFormat::Json));
        assert!(config.behavior.fail_on_empty);
        assert!(!config.output.pretty);
    }

    #[test]
    fn test_load_config_file_not_found() {
        let result = load_config_file(Path::new("/nonexistent/config.yaml"));
        assert!(matches!(result, Err(ConfigFileError::NotFound(_))));
    }

    #[test]
    fn test_load_config_file_bad_yaml() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.yaml");
        std::fs::write(&config_path, "input: [unclosed").unwrap();

        let result = load_config_file(&config_path);
        assert!(matches!(result, Err(ConfigFileError::Parse(_))));
    }

    #[test]
    fn test_load_or_default_falls_back_on_bad_file() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("broken.yaml");
        std::fs::write(&config_path, "output: {pretty: maybe}").unwrap();

        let (config, loaded_from) = load_or_default(Some(&config_path));
        assert_eq!(config, AppConfig::default());
        assert!(loaded_from.is_none());
    }

    #[test]
    fn test_config_merge() {
        let mut base = AppConfig::builder().max_file_size_mb(64).pretty(true).build();
        let cli = AppConfig::builder()
            .format(InputFormat::Gexf)
            .fail_on_empty(true)
            .build();

        base.merge(&cli);
        assert_eq!(base.input.max_file_size_mb, 64);
        assert_eq!(base.input.format, Some(InputFormat::Gexf));
        assert!(base.output.pretty);
        assert!(base.behavior.fail_on_empty);
    }

    #[test]
    fn test_explicit_size_limit_beats_file_even_at_default() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join(".graph-tools.yaml");
        std::fs::write(&config_path, "input:\n  max_file_size_mb: 16\n").unwrap();

        let overrides = AppConfig::default();
        let (config, loaded_from) = load_with_overrides(
            Some(&config_path),
            &overrides,
            Some(crate::config::DEFAULT_MAX_FILE_SIZE_MB),
        );
        assert_eq!(loaded_from, Some(config_path.clone()));
        assert_eq!(config.input.max_file_size_mb, 512);

        let (config, _) = load_with_overrides(Some(&config_path), &overrides, None);
        assert_eq!(config.input.max_file_size_mb, 16);
    }

    #[test]
    fn test_example_config_parses() {
        let config: AppConfig = serde_yaml_ng::from_str(&generate_example_config()).unwrap();
        assert_eq!(config, AppConfig::default());
    }
}
