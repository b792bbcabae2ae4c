//! graph-tools: graph file normalizer
//!
//! Converts GEXF and JSON graph files into a normalized `{nodes, links}` graph.

use anyhow::{bail, Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use graph_tools::{
    cli::{run_convert, run_summary},
    config::{self, AppConfig, Validatable},
    parsers::InputFormat,
    pipeline::{exit_code_for, exit_codes},
};
use std::io;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Build long version string with format support info
const fn build_long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        "\n\nSupported Input Formats:",
        "\n  JSON: nodes + edges (keyed attributes), nodes + links (direct)",
        "\n  GEXF: 1.2draft, with or without namespace",
        "\n\nOutput:",
        "\n  JSON {nodes, links}"
    )
}

#[derive(Parser)]
#[command(name = "graph-tools")]
#[command(version, long_version = build_long_version())]
#[command(about = "Normalize GEXF and JSON graph files", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Success
    1  Empty graph (with fail_on_empty)
    2  Input rejected (unsupported type, not UTF-8, invalid content)
    3  Error occurred

EXAMPLES:
    # Normalize a GEXF file to JSON on stdout
    graph-tools convert network.gexf

    # Pretty-print into a file
    graph-tools convert companies.json --pretty -O graph.json

    # Parse a file with a non-standard extension
    graph-tools convert export.xml --format gexf")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Arguments for the `convert` subcommand
#[derive(Parser)]
struct ConvertArgs {
    /// Path to the graph file (.json or .gexf)
    file: PathBuf,

    /// Parse as this format instead of using the file extension
    #[arg(long, value_enum)]
    format: Option<InputFormat>,

    /// Indent the JSON output
    #[arg(long)]
    pretty: bool,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Exit with code 1 if the graph has no nodes and no links
    #[arg(long)]
    fail_on_empty: bool,

    /// Refuse files larger than this many megabytes
    #[arg(long, env = "GRAPH_TOOLS_MAX_FILE_SIZE_MB")]
    max_file_size_mb: Option<u64>,
}

/// Arguments for the `summary` subcommand
#[derive(Parser)]
struct SummaryArgs {
    /// Path to the graph file (.json or .gexf)
    file: PathBuf,

    /// Parse as this format instead of using the file extension
    #[arg(long, value_enum)]
    format: Option<InputFormat>,

    /// Exit with code 1 if the graph has no nodes and no links
    #[arg(long)]
    fail_on_empty: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a graph file to normalized JSON
    Convert(ConvertArgs),

    /// Print node and link counts for a graph file
    Summary(SummaryArgs),

    /// List supported input formats
    Formats,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Generate JSON Schema for the config file format
    ConfigSchema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show, discover, or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .graph-tools.yaml in the current directory
    Init,
}

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so JSON on stdout stays clean
    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    let code = match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            exit_code_for(&err)
        }
    };
    std::process::exit(code);
}

/// Dispatch to command handlers
fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::Convert(args) => {
            let overrides = AppConfig::builder()
                .pretty(args.pretty)
                .output_file(args.output_file)
                .quiet(cli.quiet)
                .fail_on_empty(args.fail_on_empty);
            let overrides = match args.format {
                Some(format) => overrides.format(format),
                None => overrides,
            };
            let config = effective_config(
                cli.config.as_deref(),
                &overrides.build(),
                args.max_file_size_mb,
            )?;
            run_convert(&args.file, &config)
        }

        Commands::Summary(args) => {
            let overrides = AppConfig::builder()
                .quiet(cli.quiet)
                .fail_on_empty(args.fail_on_empty);
            let overrides = match args.format {
                Some(format) => overrides.format(format),
                None => overrides,
            };
            let mut config = effective_config(cli.config.as_deref(), &overrides.build(), None)?;
            // The summary is always printed, never written to the configured output file
            config.output.file = None;
            run_summary(&args.file, &config)
        }

        Commands::Formats => {
            for format in InputFormat::ALL {
                println!("{:<6} {}", format.name(), format.suffix());
            }
            Ok(exit_codes::SUCCESS)
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "graph-tools", &mut io::stdout());
            Ok(exit_codes::SUCCESS)
        }

        Commands::ConfigSchema { output } => {
            let schema = config::generate_json_schema().context("failed to serialize schema")?;
            match output {
                Some(path) => {
                    std::fs::write(&path, &schema)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => println!("{schema}"),
            }
            Ok(exit_codes::SUCCESS)
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let (config, loaded_from) = config::load_or_default(cli.config.as_deref());
                if let Some(path) = &loaded_from {
                    eprintln!("# Loaded from: {}", path.display());
                } else {
                    eprintln!("# No config file found; showing defaults");
                }
                let yaml =
                    serde_yaml_ng::to_string(&config).context("failed to serialize config")?;
                print!("{yaml}");
                Ok(exit_codes::SUCCESS)
            }
            ConfigAction::Path => {
                eprintln!("Config file search paths (in order):");
                for path in config::config_search_paths() {
                    eprintln!("  {}", path.display());
                }
                eprintln!();
                eprintln!("Recognized file names:");
                for name in config::CONFIG_FILE_NAMES {
                    eprintln!("  {name}");
                }
                eprintln!();
                match config::discover_config_file(cli.config.as_deref()) {
                    Some(path) => println!("{}", path.display()),
                    None => eprintln!("No config file found"),
                }
                Ok(exit_codes::SUCCESS)
            }
            ConfigAction::Init => {
                let path = PathBuf::from(".graph-tools.yaml");
                if path.exists() {
                    bail!("{} already exists", path.display());
                }
                std::fs::write(&path, config::generate_example_config())
                    .with_context(|| format!("failed to write {}", path.display()))?;
                eprintln!("Wrote {}", path.display());
                Ok(exit_codes::SUCCESS)
            }
        },
    }
}

/// Layer CLI settings over the discovered config file and validate the result
fn effective_config(
    explicit: Option<&Path>,
    overrides: &AppConfig,
    max_file_size_mb: Option<u64>,
) -> Result<AppConfig> {
    let (config, loaded_from) = config::load_with_overrides(explicit, overrides, max_file_size_mb);
    if let Some(path) = loaded_from {
        tracing::debug!("Loaded config from {}", path.display());
    }

    let errors = config.validate();
    if !errors.is_empty() {
        let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
        bail!("Invalid configuration:\n  {}", messages.join("\n  "));
    }
    Ok(config)
}
