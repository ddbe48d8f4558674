// markstyle/src/cli.rs
//! This file defines the command-line interface (CLI) for the markstyle
//! application, including all available commands and their arguments.
//! License: MIT OR Apache-2.0

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "markstyle",
    author = "MarkStyle Team",
    version = env!("CARGO_PKG_VERSION"),
    about = "Turn inline markdown into cleaned text plus ordered style transforms",
    long_about = "Markstyle is a command-line utility that converts lightweight inline markdown markup (bold, italic, headings, and user-defined rules) into a cleaned string plus an ordered list of style transforms anchored to character ranges in that string, ready for a downstream rich-text styling API.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG for 'markstyle' crate to DEBUG)
    #[arg(long, short = 'd', help = "Enable debug logging.")]
    pub debug: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `markstyle` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parses an input file or stdin, stripping markup and emitting transforms.
    #[command(about = "Parses an input file or stdin, stripping markup and emitting style transforms.")]
    Style(StyleCommand),

    /// Scans an input and reports matched rules without rewriting anything.
    #[command(about = "Scans an input and reports matched rules without rewriting anything.")]
    Scan(ScanCommand),

    /// Lists the effective (merged, font-resolved) rule set.
    #[command(about = "Lists the effective rule set after merging custom rules and font maps.")]
    Rules(RulesCommand),
}

/// Output format for the `style` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// The full `{ text, transforms }` document as JSON.
    Json,
    /// The cleaned text only.
    Text,
}

/// Arguments for the `style` command.
#[derive(Parser, Debug)]
pub struct StyleCommand {
    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Write output to this file instead of stdout.
    #[arg(long, short = 'o', value_name = "FILE", help = "Write output to a specified file instead of stdout.")]
    pub output: Option<PathBuf>,

    /// Path to a custom rule configuration file (YAML).
    #[arg(long = "config", value_name = "FILE", help = "Path to a custom rule configuration file (YAML).")]
    pub config: Option<PathBuf>,

    /// Path to a font map file (YAML `slot: font-name` pairs).
    #[arg(long = "font-map", value_name = "FILE", help = "Path to a font map file overriding default font slots.")]
    pub font_map: Option<PathBuf>,

    /// Explicitly enable these rule names (comma-separated).
    #[arg(long, short = 'e', value_delimiter = ',', help = "Explicitly enable these rule names (comma-separated).")]
    pub enable: Vec<String>,

    /// Explicitly disable these rule names (comma-separated).
    #[arg(long, short = 'x', value_delimiter = ',', help = "Explicitly disable these rule names (comma-separated).")]
    pub disable: Vec<String>,

    /// Select the output format.
    #[arg(long = "format", value_enum, default_value = "json", help = "Select the output format ('json' or 'text').")]
    pub format: OutputFormat,
}

/// Arguments for the `scan` command.
#[derive(Parser, Debug)]
pub struct ScanCommand {
    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Path to a custom rule configuration file (YAML).
    #[arg(long = "config", value_name = "FILE", help = "Path to a custom rule configuration file (YAML).")]
    pub config: Option<PathBuf>,

    /// Explicitly enable these rule names (comma-separated).
    #[arg(long, short = 'e', value_delimiter = ',', help = "Explicitly enable these rule names (comma-separated).")]
    pub enable: Vec<String>,

    /// Explicitly disable these rule names (comma-separated).
    #[arg(long, short = 'x', value_delimiter = ',', help = "Explicitly disable these rule names (comma-separated).")]
    pub disable: Vec<String>,
}

/// Arguments for the `rules` command.
#[derive(Parser, Debug)]
pub struct RulesCommand {
    /// Path to a custom rule configuration file (YAML).
    #[arg(long = "config", value_name = "FILE", help = "Path to a custom rule configuration file (YAML).")]
    pub config: Option<PathBuf>,

    /// Path to a font map file (YAML `slot: font-name` pairs).
    #[arg(long = "font-map", value_name = "FILE", help = "Path to a font map file overriding default font slots.")]
    pub font_map: Option<PathBuf>,
}
