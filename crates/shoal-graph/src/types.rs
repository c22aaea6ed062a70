//! Core social graph types.
//!
//! An [`Instance`] owns its [`User`] records keyed by username. Callers hold
//! [`UserRef`] handles: the username plus the [`InstanceId`] of the owning
//! instance. A handle never keeps an instance alive; it is only compared
//! against an instance's identity before that instance will act on it.

use crate::distance::{self, Distance};
use serde::Serialize;
use shoal_core::{Error, InstanceId, Result};
use std::collections::{BTreeSet, HashMap};

// ============================================================================
// UserRef
// ============================================================================

/// Non-owning handle to a user registered in some [`Instance`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct UserRef {
    instance: InstanceId,
    username: String,
}

impl UserRef {
    /// Returns the username this handle refers to.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the identity of the owning instance.
    pub fn instance(&self) -> InstanceId {
        self.instance
    }
}

// ============================================================================
// User
// ============================================================================

/// A named node of an instance's friendship graph.
///
/// Friends are stored by username and resolved through the owning instance.
/// The set is ordered, so friend enumeration is deterministic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct User {
    username: String,
    friends: BTreeSet<String>,
    instance: InstanceId,
}

impl User {
    fn new(instance: InstanceId, username: String) -> Self {
        Self {
            username,
            friends: BTreeSet::new(),
            instance,
        }
    }

    /// Returns the username.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the identity of the owning instance.
    pub fn instance(&self) -> InstanceId {
        self.instance
    }

    /// Returns an iterator over friend usernames, in sorted order.
    pub fn friends(&self) -> impl Iterator<Item = &str> {
        self.friends.iter().map(String::as_str)
    }

    pub(crate) fn friend_set(&self) -> &BTreeSet<String> {
        &self.friends
    }

    /// Returns the number of friends (a self-loop counts as one).
    pub fn friend_count(&self) -> usize {
        self.friends.len()
    }

    /// Checks whether `username` is in this user's friend set.
    pub fn is_friend(&self, username: &str) -> bool {
        self.friends.contains(username)
    }

    /// Returns a handle to this user.
    pub fn handle(&self) -> UserRef {
        UserRef {
            instance: self.instance,
            username: self.username.clone(),
        }
    }
}

// ============================================================================
// Instance
// ============================================================================

/// An isolated social graph namespace.
///
/// Instances are deliberately not `Clone`: a clone would share the identity
/// of the original and let users from two graphs pass membership checks.
#[derive(Debug)]
pub struct Instance {
    id: InstanceId,
    name: Option<String>,
    users: HashMap<String, User>,
}

impl Instance {
    /// Creates an empty, unnamed instance.
    pub fn new() -> Self {
        Self {
            id: InstanceId::new(),
            name: None,
            users: HashMap::new(),
        }
    }

    /// Creates an empty instance with a display name.
    pub fn with_name(name: impl Into<String>) -> Self {
        let mut instance = Self::new();
        instance.name = Some(name.into());
        instance
    }

    /// Returns the identity used for membership checks.
    pub fn id(&self) -> InstanceId {
        self.id
    }

    /// Returns the display name, if one was set.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Sets the display name. Purely cosmetic; an empty name is allowed.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    /// Returns the number of registered users.
    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    /// Returns the number of friendships, counting each unordered pair once.
    pub fn friendship_count(&self) -> usize {
        self.users
            .values()
            .map(|u| {
                u.friends
                    .iter()
                    .filter(|f| f.as_str() >= u.username.as_str())
                    .count()
            })
            .sum()
    }

    /// Checks if a username is registered.
    pub fn contains(&self, username: &str) -> bool {
        self.users.contains_key(username)
    }

    /// Gets a user by username.
    pub fn get(&self, username: &str) -> Option<&User> {
        self.users.get(username)
    }

    /// Returns an iterator over all users, in no particular order.
    pub fn users(&self) -> impl Iterator<Item = &User> {
        self.users.values()
    }

    /// Registers a new user with an empty friend set.
    ///
    /// Fails with [`Error::DuplicateUsername`] if the name is taken; the
    /// existing registration is left untouched.
    pub fn register(&mut self, username: impl Into<String>) -> Result<UserRef> {
        let username = username.into();
        if self.users.contains_key(&username) {
            return Err(Error::duplicate_username(username, self.id));
        }

        let user = User::new(self.id, username.clone());
        let handle = user.handle();
        self.users.insert(username, user);
        log::debug!("Registered user {:?} in instance {}", handle.username, self.id);
        Ok(handle)
    }

    /// Resolves a username to a handle.
    pub fn lookup(&self, username: &str) -> Result<UserRef> {
        self.users
            .get(username)
            .map(User::handle)
            .ok_or_else(|| Error::unknown_user(username))
    }

    /// Resolves a handle to the user record, after checking membership.
    pub fn user(&self, user: &UserRef) -> Result<&User> {
        self.ensure_member(user)?;
        self.users
            .get(&user.username)
            .ok_or_else(|| Error::unknown_user(&user.username))
    }

    /// Adds a symmetric friendship between two users of this instance.
    ///
    /// Both handles are validated before either friend set changes, so a
    /// failure leaves no partial edge. Re-adding an existing friendship has
    /// no effect. A self-friendship is accepted and stored as a self-loop.
    pub fn add_friendship(&mut self, u1: &UserRef, u2: &UserRef) -> Result<()> {
        self.user(u1)?;
        self.user(u2)?;

        if let Some(user) = self.users.get_mut(&u1.username) {
            user.friends.insert(u2.username.clone());
        }
        if let Some(user) = self.users.get_mut(&u2.username) {
            user.friends.insert(u1.username.clone());
        }

        log::debug!(
            "Added friendship {:?} <-> {:?} in instance {}",
            u1.username,
            u2.username,
            self.id
        );
        Ok(())
    }

    /// Computes the friendship distance between two users of this instance.
    ///
    /// See [`distance::distance_between`].
    pub fn distance_between(&self, u1: &UserRef, u2: &UserRef) -> Result<Distance> {
        distance::distance_between(self, u1, u2)
    }

    /// Fails with [`Error::CrossInstance`] unless `user` was issued by this
    /// instance.
    pub(crate) fn ensure_member(&self, user: &UserRef) -> Result<()> {
        if user.instance != self.id {
            return Err(Error::cross_instance(self.id, user.instance));
        }
        Ok(())
    }
}

impl Default for Instance {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================
