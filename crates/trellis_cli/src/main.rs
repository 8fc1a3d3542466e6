//! Trellis CLI — command-line front end for trellis configuration files.
//!
//! Provides `trellis check` to validate a configuration, `trellis dump` to
//! re-render it in normalized text or JSON form, and `trellis events` to
//! print the raw record stream seen by the parser.

#![warn(missing_docs)]

mod check;
mod dump;
mod events;
mod pipeline;

use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use log::LevelFilter;

/// Trellis — inspect and normalize FPGA configuration text.
#[derive(Parser, Debug)]
#[command(name = "trellis", version, about = "Trellis configuration tools")]
pub struct Cli {
    /// Suppress all output except errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable verbose (debug-level) output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a custom `trellis.toml` configuration file.
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse a configuration file and report a summary.
    Check(CheckArgs),
    /// Parse a configuration file and print it in normalized form.
    Dump(DumpArgs),
    /// Print every parsed record, one per line.
    Events(EventsArgs),
}

/// Arguments for the `trellis check` subcommand.
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Input file, or `-` for standard input.
    pub input: String,
}

/// Arguments for the `trellis dump` subcommand.
#[derive(Parser, Debug)]
pub struct DumpArgs {
    /// Input file, or `-` for standard input.
    pub input: String,

    /// Output format (default taken from `trellis.toml`).
    #[arg(short, long, value_enum)]
    pub format: Option<DumpFormat>,

    /// Write to this file instead of standard output.
    #[arg(short, long)]
    pub output: Option<String>,
}

/// Arguments for the `trellis events` subcommand.
#[derive(Parser, Debug)]
pub struct EventsArgs {
    /// Input file, or `-` for standard input.
    pub input: String,

    /// Print each event as a JSON object.
    #[arg(long)]
    pub json: bool,
}

/// Output format for `trellis dump`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum DumpFormat {
    /// Trellis configuration text.
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Global settings derived from CLI flags.
pub struct GlobalArgs {
    /// Whether to suppress non-error output.
    pub quiet: bool,
    /// Whether to print verbose/debug information.
    pub verbose: bool,
    /// Optional path to a custom config file.
    pub config: Option<String>,
}

impl GlobalArgs {
    /// Returns the log level implied by `--quiet` and `--verbose`.
    pub fn log_level(&self) -> LevelFilter {
        if self.quiet {
            LevelFilter::Warn
        } else if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let global = GlobalArgs {
        quiet: cli.quiet,
        verbose: cli.verbose,
        config: cli.config,
    };

    env_logger::Builder::new()
        .filter_level(global.log_level())
        .parse_default_env()
        .format_timestamp(None)
        .init();

    let result = match cli.command {
        Command::Check(ref args) => check::run(args, &global),
        Command::Dump(ref args) => dump::run(args, &global),
        Command::Events(ref args) => events::run(args, &global),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}
