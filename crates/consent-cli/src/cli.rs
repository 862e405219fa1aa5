//! CLI argument definitions for the consent code decoder.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "consent-codes",
    version,
    about = "Decode data use consent codes into readable descriptions",
    long_about = "Decode consent codes such as GRU-IRB or DS-ADHD-RC,NPU.\n\n\
                  Prints the title, long description, per-symbol flags and\n\
                  disease details for each code."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Decode one or more consent codes.
    Decode(DecodeArgs),

    /// List all known consent symbols.
    Symbols,
}

#[derive(Parser)]
pub struct DecodeArgs {
    /// Consent codes to decode.
    #[arg(value_name = "CODE")]
    pub codes: Vec<String>,

    /// Read additional codes from a file, one per line.
    #[arg(long = "input", value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Disease abbreviation table (TSV) to use instead of the bundled one.
    #[arg(long = "diseases", value_name = "PATH")]
    pub diseases: Option<PathBuf>,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
