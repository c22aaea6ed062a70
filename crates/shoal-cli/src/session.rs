//! Applying commands to a social graph instance.
//!
//! A [`Session`] owns one [`Instance`] and resolves command arguments
//! (usernames) through it before mutating or querying the graph.

use crate::command::Command;
use crate::error::Result;
use serde::Serialize;
use shoal_graph::{Distance, Instance};
use std::fmt;

/// What a successfully applied command did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    /// The instance was (re)named.
    Named {
        /// New display name
        name: String,
    },
    /// A user was registered.
    UserAdded {
        /// Registered username
        username: String,
    },
    /// A friendship was created (or already existed).
    FriendshipAdded {
        /// First user
        u1: String,
        /// Second user
        u2: String,
    },
    /// A distance query was answered.
    Distance {
        /// Starting user
        u1: String,
        /// Target user
        u2: String,
        /// Query result
        distance: Distance,
    },
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named { name } => write!(f, "Instance name is {name}."),
            Self::UserAdded { username } => write!(f, "Added user {username}."),
            Self::FriendshipAdded { u1, u2 } => {
                write!(f, "Added friendship between {u1} and {u2}.")
            }
            Self::Distance {
                u1,
                u2,
                distance: Distance::Hops(n),
            } => write!(f, "Distance between {u1} and {u2}: {n}."),
            Self::Distance {
                u1,
                u2,
                distance: Distance::NoPath,
            } => write!(f, "No path between {u1} and {u2}."),
        }
    }
}

/// Driver state for one instance.
#[derive(Debug, Default)]
pub struct Session {
    instance: Instance,
}

impl Session {
    /// Creates a session around a fresh, unnamed instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the instance built so far.
    pub fn instance(&self) -> &Instance {
        &self.instance
    }

    /// Consumes the session, returning its instance.
    pub fn into_instance(self) -> Instance {
        self.instance
    }

    /// Applies one command.
    ///
    /// On error the instance is unchanged.
    pub fn apply(&mut self, command: &Command) -> Result<Outcome> {
        match command {
            Command::SetName { name } => {
                self.instance.set_name(name.as_str());
                Ok(Outcome::Named { name: name.clone() })
            }
            Command::AddUser { username } => {
                let user = self.instance.register(username.as_str())?;
                Ok(Outcome::UserAdded {
                    username: user.username().to_string(),
                })
            }
            Command::AddFriendship { u1, u2 } => {
                let a = self.instance.lookup(u1)?;
                let b = self.instance.lookup(u2)?;
                self.instance.add_friendship(&a, &b)?;
                Ok(Outcome::FriendshipAdded {
                    u1: u1.clone(),
                    u2: u2.clone(),
                })
            }
            Command::Query { u1, u2 } => {
                let a = self.instance.lookup(u1)?;
                let b = self.instance.lookup(u2)?;
                let distance = self.instance.distance_between(&a, &b)?;
                Ok(Outcome::Distance {
                    u1: u1.clone(),
                    u2: u2.clone(),
                    distance,
                })
            }
        }
    }
}
