//! `jvalue` CLI: format, minify, validate and query JSON from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Pretty-print (stdin → stdout, 2-space indent)
//! echo '{"name":"Alice","tags":["a","b"]}' | jvalue format
//!
//! # Pretty-print with 4 spaces, file to file
//! jvalue format --spacing 4 -i data.json -o pretty.json
//!
//! # Minify
//! jvalue minify -i data.json
//!
//! # Check a document without printing it
//! jvalue validate -i config.json
//!
//! # Extract a nested value (numeric segments index arrays)
//! jvalue get servers.0.port -i config.json
//!
//! # Debug logging
//! jvalue -v validate -i config.json
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use jvalue_core::{Value, DEFAULT_SPACING};
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "jvalue", version, about = "JSON value formatter and inspector")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log parser activity to stderr (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse JSON and re-emit it indented
    Format {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Spaces per nesting level (0 = compact)
        #[arg(short, long, default_value_t = DEFAULT_SPACING)]
        spacing: usize,
    },
    /// Parse JSON and re-emit it without whitespace
    Minify {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Check that the input is well-formed JSON
    Validate {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Print the value at a dotted path such as `servers.0.port`
    Get {
        /// Dotted path; numeric segments index arrays, others index objects
        path: String,
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Spaces per nesting level (0 = compact)
        #[arg(short, long, default_value_t = DEFAULT_SPACING)]
        spacing: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Format {
            input,
            output,
            spacing,
        } => {
            let value = read_value(input.as_deref())?;
            write_output(output.as_deref(), &value.to_json(spacing))?;
        }
        Commands::Minify { input, output } => {
            let value = read_value(input.as_deref())?;
            write_output(output.as_deref(), &value.to_json(0))?;
        }
        Commands::Validate { input } => {
            let value = read_value(input.as_deref())?;
            tracing::debug!(root = %value.value_type(), size = value.size(), "document is valid");
            println!("valid");
        }
        Commands::Get {
            path,
            input,
            spacing,
        } => {
            let value = read_value(input.as_deref())?;
            let found = lookup(&value, &path);
            if found.is_null() {
                tracing::debug!(%path, "path resolved to null");
            }
            write_output(None, &found.to_json(spacing))?;
        }
    }

    Ok(())
}

/// Install a stderr subscriber. `--verbose` forces `debug`; otherwise
/// `RUST_LOG` is honoured with `warn` as the fallback.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

/// Walk a dotted path with read-only indexing. Missing segments yield null.
///
/// - `""` → the root
/// - `servers.0.port` → `root["servers"][0]["port"]`
/// - A numeric segment on an object is treated as a key (`{"0": ...}`)
fn lookup<'a>(root: &'a Value, path: &str) -> &'a Value {
    if path.is_empty() {
        return root;
    }
    path.split('.').fold(root, |current, segment| {
        match segment.parse::<usize>() {
            Ok(index) if current.is_array() => &current[index],
            _ => &current[segment],
        }
    })
}

fn read_value(path: Option<&str>) -> Result<Value> {
    let text = read_input(path)?;
    let value: Value = text.parse().context("Failed to parse JSON input")?;
    tracing::debug!(bytes = text.len(), root = %value.value_type(), "parsed input");
    Ok(value)
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

/// Write `content` plus a trailing newline to a file or stdout.
fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, format!("{content}\n"))
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
