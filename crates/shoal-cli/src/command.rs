//! Instance file line grammar.
//!
//! Each line of an instance file is one command:
//!
//! | Line                 | Command                    |
//! |----------------------|----------------------------|
//! | `i <name>`           | [`Command::SetName`]       |
//! | `u <user>`           | [`Command::AddUser`]       |
//! | `fr <user> <user>`   | [`Command::AddFriendship`] |
//! | `dq <user> <user>`   | [`Command::Query`]         |
//!
//! Usernames are lowercase ASCII letters (possibly empty). An instance name
//! is any text. Lines matching none of the forms are not commands.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static RE_INSTANCE_NAME: LazyLock<Regex> = LazyLock::new(|| compile(r"^i (?P<name>.*)$"));
static RE_USER: LazyLock<Regex> = LazyLock::new(|| compile(r"^u (?P<user>[a-z]*)$"));
static RE_FRIENDSHIP: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^fr (?P<u1>[a-z]*) (?P<u2>[a-z]*)$"));
static RE_DISTANCE_QUERY: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^dq (?P<u1>[a-z]*) (?P<u2>[a-z]*)$"));

#[allow(clippy::expect_used)]
fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("command patterns are valid")
}

/// A parsed instance file command.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    /// Set the instance display name.
    SetName {
        /// New display name
        name: String,
    },
    /// Register a user.
    AddUser {
        /// Username to register
        username: String,
    },
    /// Befriend two users.
    AddFriendship {
        /// First user
        u1: String,
        /// Second user
        u2: String,
    },
    /// Ask for the distance between two users.
    Query {
        /// Starting user
        u1: String,
        /// Target user
        u2: String,
    },
}

/// Parse one line into a command.
///
/// A trailing `\n`, `\r` or `\r\n` is ignored. Returns `None` for lines that
/// are not commands.
///
/// # Example
///
/// ```rust
/// use shoal_cli::{Command, parse_line};
///
/// assert_eq!(
///     parse_line("fr ann bob\n"),
///     Some(Command::AddFriendship { u1: "ann".into(), u2: "bob".into() })
/// );
/// assert_eq!(parse_line("# comment"), None);
/// ```
pub fn parse_line(line: &str) -> Option<Command> {
    let line = line.trim_end_matches(['\n', '\r']);

    if let Some(caps) = RE_INSTANCE_NAME.captures(line) {
        return Some(Command::SetName {
            name: caps["name"].to_string(),
        });
    }
    if let Some(caps) = RE_USER.captures(line) {
        return Some(Command::AddUser {
            username: caps["user"].to_string(),
        });
    }
    if let Some(caps) = RE_FRIENDSHIP.captures(line) {
        return Some(Command::AddFriendship {
            u1: caps["u1"].to_string(),
            u2: caps["u2"].to_string(),
        });
    }
    if let Some(caps) = RE_DISTANCE_QUERY.captures(line) {
        return Some(Command::Query {
            u1: caps["u1"].to_string(),
            u2: caps["u2"].to_string(),
        });
    }
    None
}
