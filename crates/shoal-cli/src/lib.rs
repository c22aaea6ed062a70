//! # shoal-cli
//!
//! Driver for shoal social graph instances.
//!
//! Reads line-oriented instance files, builds one [`shoal_graph::Instance`]
//! per file, answers distance queries and narrates each step:
//! - [`command`]: line grammar and the [`Command`] variant
//! - [`session`]: applies commands to an instance
//! - [`driver`]: per-file processing and reports
//! - [`config`]: TOML/env configuration
//! - [`cli`] and [`app`]: argument parsing and dispatch

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
pub mod command;
pub mod config;
pub mod config_handlers;
pub mod driver;
pub mod error;
pub mod session;

pub use command::{Command, parse_line};
pub use config::ShoalConfig;
pub use driver::{Event, FileReport, process_file, process_str};
pub use error::{Error, Result};
pub use session::{Outcome, Session};
