//! CLI argument definitions for the part enricher.

use std::path::PathBuf;

use bom_cli::logging::LogFormat;
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use tracing::level_filters::LevelFilter;

#[derive(Parser)]
#[command(
    name = "bom-enrich",
    version,
    about = "Fill bill-of-materials tables from a part catalog service",
    long_about = "Look up every PartNumber in a CSV/TSV table against a catalog service\n\
                  and fill the Manufacturer, Description, Lifecycle, Price, Stock, and\n\
                  RepresentativeParts columns. Attributes the catalog does not supply\n\
                  are blanked and listed in a highlight report."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Log more (-v, -vv) or less (-q) than the default warnings.
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Color for tables and logs.
    #[command(flatten)]
    pub color: Color,

    /// Log level; takes precedence over -v/-q and RUST_LOG.
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log line format.
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Append logs to this file rather than stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Prefix log lines with a timestamp.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Include the emitting module in log lines.
    #[arg(long = "log-target", global = true)]
    pub log_target: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Enrich a table, or every table in a folder.
    Enrich(EnrichArgs),

    /// List the columns the enricher knows how to fill.
    Attributes,
}

#[derive(Parser)]
pub struct EnrichArgs {
    /// CSV/TSV file, or a folder of them.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Catalog search URL containing the {part_number} placeholder.
    #[arg(long = "api-url", value_name = "TEMPLATE")]
    pub api_url: String,

    /// Output file (or folder when INPUT is a folder).
    ///
    /// Defaults to <INPUT stem>_enriched.<ext> next to each input.
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Skip writing the JSON highlight report next to each output.
    #[arg(long = "no-report")]
    pub no_report: bool,

    /// Number of rows looked up concurrently (1 = sequential).
    #[arg(long = "workers", value_name = "N", default_value_t = 1)]
    pub workers: usize,

    /// Per-request timeout in seconds.
    #[arg(long = "timeout-secs", value_name = "SECONDS", default_value_t = 30)]
    pub timeout_secs: u64,

    /// Print the first N enriched rows with missing values highlighted.
    #[arg(long = "preview", value_name = "N")]
    pub preview: Option<usize>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl From<LogLevelArg> for LevelFilter {
    fn from(level: LogLevelArg) -> Self {
        match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        }
    }
}

impl From<LogFormatArg> for LogFormat {
    fn from(format: LogFormatArg) -> Self {
        match format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}
