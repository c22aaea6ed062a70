//! Error types for the shoal social graph.

use crate::InstanceId;

/// Errors raised by social graph mutation and distance queries.
///
/// Every variant is local and recoverable by the caller: a failed operation
/// leaves the instance exactly as it was before the call.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A username was registered twice in the same instance.
    #[error("Username already taken: {username}")]
    DuplicateUsername {
        /// The colliding username
        username: String,
        /// Instance that already holds the username
        instance: InstanceId,
    },

    /// A username was looked up but never registered.
    #[error("Unknown user: {username}")]
    UnknownUser {
        /// The missing username
        username: String,
    },

    /// An operation mixed users from different instances.
    #[error("User belongs to instance {found}, not {expected}")]
    CrossInstance {
        /// Instance the operation was invoked on
        expected: InstanceId,
        /// Instance the offending user belongs to
        found: InstanceId,
    },
}

/// Convenience `Result` type alias for shoal operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Creates a new duplicate-username error.
    pub fn duplicate_username<S: Into<String>>(username: S, instance: InstanceId) -> Self {
        Error::DuplicateUsername {
            username: username.into(),
            instance,
        }
    }

    /// Creates a new unknown-user error.
    pub fn unknown_user<S: Into<String>>(username: S) -> Self {
        Error::UnknownUser {
            username: username.into(),
        }
    }

    /// Creates a new cross-instance error.
    pub fn cross_instance(expected: InstanceId, found: InstanceId) -> Self {
        Error::CrossInstance { expected, found }
    }

    /// Returns whether this error stems from a membership check, as opposed to
    /// a registration collision.
    pub fn is_membership_error(&self) -> bool {
        match self {
            Error::UnknownUser { .. } => true,
            Error::CrossInstance { .. } => true,
            Error::DuplicateUsername { .. } => false,
        }
    }
}
