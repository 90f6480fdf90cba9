//! Bill-of-materials part enricher CLI.

use std::io::{self, IsTerminal};

use bom_cli::logging::{LogConfig, init_logging};
use clap::{ColorChoice, Parser};

mod cli;
mod commands;
mod summary;
mod types;

use crate::cli::{Cli, Command};
use crate::commands::{run_attributes, run_enrich};
use crate::summary::print_summary;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    if let Err(error) = init_logging(&log_config(&cli)) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    std::process::exit(dispatch(cli.command));
}

/// Run a subcommand and map its result to a process exit code.
fn dispatch(command: Command) -> i32 {
    let outcome = match command {
        Command::Enrich(args) => run_enrich(&args).map(|result| {
            print_summary(&result);
            i32::from(result.has_errors)
        }),
        Command::Attributes => run_attributes().map(|()| 0),
    };
    outcome.unwrap_or_else(|error| {
        eprintln!("error: {error:#}");
        1
    })
}

/// An explicit `--log-level` beats `-v/-q`, and either one disables
/// `RUST_LOG`.
fn log_config(cli: &Cli) -> LogConfig {
    let level_filter = cli
        .log_level
        .map_or_else(|| cli.verbosity.tracing_level_filter(), Into::into);
    let with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    LogConfig::default()
        .with_level(level_filter)
        .with_env_filter(!(cli.verbosity.is_present() || cli.log_level.is_some()))
        .with_format(cli.log_format.into())
        .with_log_file(cli.log_file.clone())
        .with_ansi(with_ansi)
        .with_timestamps(cli.log_timestamps)
        .with_target(cli.log_target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_flags_reach_log_config() {
        let cli = Cli::try_parse_from(["bom-enrich", "--log-timestamps", "--log-target", "attributes"])
            .expect("parse args");
        let config = log_config(&cli);
        assert!(config.with_timestamps);
        assert!(config.with_target);

        let cli = Cli::try_parse_from(["bom-enrich", "attributes"]).expect("parse args");
        let config = log_config(&cli);
        assert!(!config.with_timestamps);
        assert!(!config.with_target);
        assert!(config.use_env_filter);
    }
}
