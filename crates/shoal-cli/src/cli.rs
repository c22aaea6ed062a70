//! CLI argument parsing and command definitions.

use crate::config::{ErrorPolicy, OutputFormat};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

// ============================================================================
// CLI argument types
// ============================================================================

/// Build social graph instances from command files and answer distance queries.
#[derive(Parser, Debug)]
#[command(name = "shoal", author, version, about, long_about = None)]
pub struct CliArgs {
    /// Path to configuration file.
    #[arg(short, long, env = "SHOAL_CONFIG")]
    pub config: Option<String>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-essential output.
    #[arg(short, long)]
    pub quiet: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: ShoalCommand,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum ShoalCommand {
    /// Process instance files, one isolated instance per file.
    Run(RunArgs),

    /// Parse instance files and report lines that are not commands.
    Check {
        /// Instance files to check.
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Configuration operations.
    Config(ConfigCommand),
}

/// Arguments for `shoal run`.
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Instance files to process, in order.
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output format (overrides config).
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Failure handling (overrides config).
    #[arg(long, value_enum)]
    pub on_error: Option<ErrorPolicy>,

    /// Treat unrecognised lines as failures.
    #[arg(long)]
    pub strict: bool,

    /// Print instance statistics after each file.
    #[arg(long)]
    pub stats: bool,

    /// Omit the per-file banner.
    #[arg(long)]
    pub no_banner: bool,
}

/// Config-specific subcommands.
#[derive(Parser, Debug)]
pub struct ConfigCommand {
    /// Config subcommand to execute.
    #[command(subcommand)]
    pub command: ConfigAction,
}

/// Available config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the resolved config file path.
    Path,

    /// Print the effective configuration as TOML.
    Show,

    /// Create a default configuration file.
    Init {
        /// Output file path (defaults to XDG config path).
        #[arg(short, long)]
        file: Option<String>,

        /// Overwrite existing file.
        #[arg(long)]
        force: bool,
    },
}

// ============================================================================
// Tests
// ============================================================================
