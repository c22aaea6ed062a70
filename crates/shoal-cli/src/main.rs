//! shoal CLI
//!
//! Builds one social graph instance per command file and answers the
//! distance queries in it.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;
use shoal_cli::cli::CliArgs;

fn main() -> Result<()> {
    let args = CliArgs::parse();
    shoal_cli::app::run(args)?;
    Ok(())
}
