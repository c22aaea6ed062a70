//! Per-file processing.
//!
//! Every instance file gets a fresh [`Session`]: instances are never shared
//! or merged across files. Each line becomes one [`Event`] in the file's
//! [`FileReport`].

use crate::command::parse_line;
use crate::config::{DriverConfig, ErrorPolicy};
use crate::error::{Error, Result};
use crate::session::{Outcome, Session};
use serde::Serialize;
use shoal_graph::{InstanceStats, compute_stats};
use std::path::Path;

/// Separator printed before each file in text mode.
pub const BANNER: &str = "********************************";

// ============================================================================
// Report types
// ============================================================================

/// What happened to one line of an instance file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    /// The line was a command and it succeeded.
    Applied {
        /// 1-based line number
        line: usize,
        /// What the command did
        outcome: Outcome,
    },
    /// The line failed, either as a command or as an unrecognised line in
    /// strict mode.
    Failed {
        /// 1-based line number
        line: usize,
        /// Line text
        text: String,
        /// Failure message
        error: String,
    },
    /// The line was not a command and was skipped.
    Ignored {
        /// 1-based line number
        line: usize,
        /// Line text
        text: String,
    },
}

impl Event {
    /// Narration for this event, if it has any.
    pub fn narration(&self) -> Option<String> {
        match self {
            Self::Applied { outcome, .. } => Some(outcome.to_string()),
            Self::Failed { line, text, error } => {
                Some(format!("Failed on line {line} ({text:?}): {error}."))
            }
            Self::Ignored { .. } => None,
        }
    }
}

/// Result of processing one instance file.
#[derive(Clone, Debug, Serialize)]
pub struct FileReport {
    /// Where the commands came from (usually a file path).
    pub source: String,
    /// Instance display name at the end of processing.
    pub instance_name: Option<String>,
    /// One event per processed line, in order.
    pub events: Vec<Event>,
    /// Whether processing stopped early on a failure.
    pub aborted: bool,
    /// Instance statistics, when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<InstanceStats>,
}

impl FileReport {
    /// Returns the failed events.
    pub fn failures(&self) -> impl Iterator<Item = &Event> {
        self.events
            .iter()
            .filter(|e| matches!(e, Event::Failed { .. }))
    }

    /// Returns whether any line failed.
    pub fn has_failures(&self) -> bool {
        self.failures().next().is_some()
    }

    /// Renders the report as narration lines.
    pub fn narration(&self, banner: bool) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.events.len() + 3);
        if banner {
            lines.push(BANNER.to_string());
            lines.push(format!("Processing instance file {}.", self.source));
        }
        lines.extend(self.events.iter().filter_map(Event::narration));
        if let Some(stats) = &self.stats {
            lines.push(format!(
                "Instance has {}, {} and {}.",
                counted(stats.users, "user"),
                counted(stats.friendships, "friendship"),
                counted(stats.components, "component")
            ));
        }
        lines
    }
}

/// `1 user`, `2 users`, `0 users`.
fn counted(n: usize, noun: &str) -> String {
    if n == 1 {
        format!("{n} {noun}")
    } else {
        format!("{n} {noun}s")
    }
}

// ============================================================================
// Processing
// ============================================================================

/// Process the commands in `input`, labelled `source` in the report.
pub fn process_str(source: &str, input: &str, config: &DriverConfig) -> FileReport {
    let mut session = Session::new();
    let mut events = Vec::new();
    let mut aborted = false;

    for (idx, text) in input.lines().enumerate() {
        let line = idx + 1;
        let result = match parse_line(text) {
            Some(command) => session.apply(&command).map(Some),
            None if config.strict && !text.trim().is_empty() => Err(Error::Parse {
                text: text.to_string(),
            }),
            None => Ok(None),
        };

        match result {
            Ok(Some(outcome)) => events.push(Event::Applied { line, outcome }),
            Ok(None) => {
                tracing::debug!(source, line, text, "Ignoring line");
                events.push(Event::Ignored {
                    line,
                    text: text.to_string(),
                });
            }
            Err(e) => {
                tracing::warn!(source, line, error = %e, "Command failed");
                events.push(Event::Failed {
                    line,
                    text: text.to_string(),
                    error: e.to_string(),
                });
                if config.on_error == ErrorPolicy::FailFast {
                    aborted = true;
                    break;
                }
            }
        }
    }

    let instance = session.into_instance();
    FileReport {
        source: source.to_string(),
        instance_name: instance.name().map(str::to_string),
        events,
        aborted,
        stats: config.stats.then(|| compute_stats(&instance)),
    }
}

/// Read and process one instance file.
pub fn process_file(path: impl AsRef<Path>, config: &DriverConfig) -> Result<FileReport> {
    let path = path.as_ref();
    let input = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
    Ok(process_str(&path.display().to_string(), &input, config))
}

// ============================================================================
// Tests
// ============================================================================
