// markstyle/src/main.rs
//! MarkStyle entry point.
//!
//! Parses the CLI, initializes logging, and dispatches to the command
//! runners.

use clap::Parser;

use markstyle::cli::{Cli, Commands};
use markstyle::commands;
use markstyle::logger;

fn main() {
    let args = Cli::parse();

    if args.quiet {
        logger::init_logger(Some(log::LevelFilter::Off));
    } else if args.debug {
        logger::init_logger(Some(log::LevelFilter::Debug));
    } else {
        logger::init_logger(None);
    }

    let result = match &args.command {
        Commands::Style(cmd) => commands::style::run(cmd, args.quiet),
        Commands::Scan(cmd) => commands::scan::run(cmd, args.quiet),
        Commands::Rules(cmd) => commands::rules::run(cmd),
    };

    if let Err(e) = result {
        commands::error_msg(format!("Error: {e:#}"));
        std::process::exit(1);
    }
}
