//! Identity for social graph instances.

use serde::Serialize;
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a social graph instance.
///
/// Membership checks compare these, never display names. Internally a UUID v4,
/// so two instances created in the same process never share an identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct InstanceId(Uuid);

impl InstanceId {
    /// Creates a new random instance ID.
    ///
    /// # Examples
    ///
    /// ```
    /// use shoal_core::InstanceId;
    ///
    /// let a = InstanceId::new();
    /// let b = InstanceId::new();
    /// assert_ne!(a, b);
    /// ```
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for InstanceId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
