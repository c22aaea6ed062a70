//! Application dispatch for the shoal CLI.

use crate::cli::{CliArgs, RunArgs, ShoalCommand};
use crate::command::parse_line;
use crate::config::{OutputFormat, ShoalConfig};
use crate::config_handlers;
use crate::driver::process_file;
use crate::error::{Error, Result};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Initialise tracing-based logging on stderr.
///
/// Uses `RUST_LOG` if set, otherwise defaults based on verbosity flags.
pub fn init_logging(verbose: bool, quiet: bool) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    // Ignore error if a subscriber is already set (e.g. in tests).
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Run the CLI with the given arguments.
pub fn run(args: CliArgs) -> Result<()> {
    init_logging(args.verbose, args.quiet);

    match args.command {
        ShoalCommand::Run(run_args) => {
            let config = ShoalConfig::load(args.config.as_deref())?;
            cmd_run(&config, run_args)
        }
        ShoalCommand::Check { files } => cmd_check(&files),
        ShoalCommand::Config(config_cmd) => {
            config_handlers::handle_config_command(args.config.as_deref(), config_cmd.command)
        }
    }
}

/// Merge command-line overrides into the loaded configuration.
pub fn effective_config(config: &ShoalConfig, run: &RunArgs) -> ShoalConfig {
    let mut effective = config.clone();
    if let Some(format) = run.format {
        effective.output.format = format;
    }
    if let Some(policy) = run.on_error {
        effective.driver.on_error = policy;
    }
    effective.driver.strict |= run.strict;
    effective.driver.stats |= run.stats;
    effective.output.banner &= !run.no_banner;
    effective
}

fn cmd_run(config: &ShoalConfig, run: RunArgs) -> Result<()> {
    let config = effective_config(config, &run);
    let mut failed = 0;

    for path in &run.files {
        let report = process_file(path, &config.driver)?;
        tracing::info!(
            file = %path.display(),
            lines = report.events.len(),
            aborted = report.aborted,
            "Processed instance file"
        );

        match config.output.format {
            OutputFormat::Text => {
                for line in report.narration(config.output.banner) {
                    println!("{line}");
                }
            }
            OutputFormat::Json => println!("{}", serde_json::to_string(&report)?),
        }

        failed += report.failures().count();
        if report.aborted {
            tracing::error!(file = %path.display(), "Stopped at first failing command");
            break;
        }
    }

    if failed > 0 {
        return Err(Error::LinesFailed { count: failed });
    }
    Ok(())
}

fn cmd_check(files: &[PathBuf]) -> Result<()> {
    let mut unrecognised = 0;

    for path in files {
        let input = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        for (idx, text) in input.lines().enumerate() {
            if text.trim().is_empty() || parse_line(text).is_some() {
                continue;
            }
            println!("{}:{}: not a command: {text:?}", path.display(), idx + 1);
            unrecognised += 1;
        }
    }

    if unrecognised > 0 {
        return Err(Error::LinesFailed {
            count: unrecognised,
        });
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
