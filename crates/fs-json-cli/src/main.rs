//! `fsjson` CLI — serialize values and build assembly inspection reports.
//!
//! ## Usage
//!
//! ```sh
//! # Serialize JSON through the feature-script serializer (stdin → stdout)
//! echo '{"a": 1, "b": [true, "x"]}' | fsjson serialize
//!
//! # Escape strings so the output is always valid JSON
//! fsjson serialize --escape-strings -i values.json -o values.out
//!
//! # Load serializer options from a JSON config file
//! fsjson serialize --config options.json -i values.json
//!
//! # Assembly-mate report from attribute query results
//! fsjson mates -i entities.json
//!
//! # Mate-connector report
//! fsjson target -i connectors.json
//! ```
//!
//! Diagnostics go to stderr; set `RUST_LOG` or pass `-v` for more detail.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use fs_json::{AttributedEntity, MateConnector, SerializeOptions};
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "fsjson",
    version,
    about = "Feature-script JSON serializer and assembly inspection CLI"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Serialize a JSON map or array with the feature-script serializer
    Serialize {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Escape quotes, backslashes and control characters in strings
        #[arg(long)]
        escape_strings: bool,
        /// JSON file with serializer options (e.g. {"escape_strings": true})
        #[arg(long)]
        config: Option<String>,
    },
    /// Build the assembly-mate report from attribute query results
    Mates {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Build the target mate report from mate connector query results
    Target {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Serialize {
            input,
            output,
            escape_strings,
            config,
        } => {
            let options = load_options(config.as_deref(), escape_strings)?;
            let json = read_input(input.as_deref())?;
            let value = fs_json::from_json_str(&json).context("Failed to parse input JSON")?;
            let text =
                fs_json::serialize_with(&value, &options).context("Failed to serialize value")?;
            write_output(output.as_deref(), &text)?;
        }
        Commands::Mates { input, output } => {
            let json = read_input(input.as_deref())?;
            let entities: Vec<AttributedEntity> =
                serde_json::from_str(&json).context("Failed to parse attribute query results")?;
            tracing::info!(count = entities.len(), "loaded attributed entities");
            let text = fs_json::inspect_assembly_mates(&entities)
                .context("Failed to build assembly mate report")?;
            write_output(output.as_deref(), &text)?;
        }
        Commands::Target { input, output } => {
            let json = read_input(input.as_deref())?;
            let connectors: Vec<MateConnector> =
                serde_json::from_str(&json).context("Failed to parse mate connector results")?;
            tracing::info!(count = connectors.len(), "loaded mate connectors");
            let text = fs_json::inspect_target_mate(&connectors)
                .context("Failed to build target mate report")?;
            write_output(output.as_deref(), &text)?;
        }
    }

    Ok(())
}

/// Send logs to stderr so stdout carries only the serialized output.
///
/// `RUST_LOG` wins when set; otherwise `-v` picks the level.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();
}

/// Resolve serializer options: config file first, then `--escape-strings`
/// forces escaping on.
fn load_options(config: Option<&str>, escape_strings: bool) -> Result<SerializeOptions> {
    let mut options = match config {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config: {}", path))?;
            serde_json::from_str(&raw).with_context(|| format!("Invalid config: {}", path))?
        }
        None => SerializeOptions::default(),
    };
    if escape_strings {
        options.escape_strings = true;
    }
    tracing::debug!(?options, "serializer options");
    Ok(options)
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
