//! Friendship distance queries.
//!
//! The search is a depth-first walk that threads the current path through
//! the traversal. A node already on the current path is never re-entered,
//! which guarantees termination on cycles and self-loops, but the same node
//! may be explored again along a different branch. Nothing is memoised.
//!
//! Each node keeps a running best distance over its friends; the first
//! minimum wins ties. When a friend turns out to be the target (a best of 1)
//! the node stops enumerating its remaining friends. That cutoff is local to
//! the node, not a global bound on the whole search tree.
//!
//! The walk uses an explicit frame stack rather than native recursion, so a
//! long chain of friends cannot exhaust the thread stack.

use crate::types::{Instance, User, UserRef};
use serde::{Deserialize, Serialize};
use shoal_core::{Error, Result};
use std::collections::{HashSet, btree_set};
use std::fmt;

// ============================================================================
// Distance
// ============================================================================

/// Outcome of a distance query.
///
/// `Hops(0)` (a user measured against itself) and `NoPath` are distinct.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Distance {
    /// Minimum number of friendship edges between the two users.
    Hops(usize),
    /// The users are in different connected components.
    NoPath,
}

impl Distance {
    /// Returns the hop count, or `None` when unreachable.
    pub fn hops(&self) -> Option<usize> {
        match self {
            Self::Hops(n) => Some(*n),
            Self::NoPath => None,
        }
    }

    /// Returns whether a path exists.
    pub fn is_reachable(&self) -> bool {
        matches!(self, Self::Hops(_))
    }
}

impl From<Option<usize>> for Distance {
    fn from(hops: Option<usize>) -> Self {
        hops.map_or(Self::NoPath, Self::Hops)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hops(n) => write!(f, "{n}"),
            Self::NoPath => write!(f, "no path"),
        }
    }
}

// ============================================================================
// Search
// ============================================================================

/// One node on the current search path.
struct Frame<'a> {
    username: &'a str,
    friends: btree_set::Iter<'a, String>,
    best: Option<usize>,
}

impl<'a> Frame<'a> {
    fn new(user: &'a User) -> Self {
        Self {
            username: user.username(),
            friends: user.friend_set().iter(),
            best: None,
        }
    }

    /// Folds a friend's distance to the target into this node's best.
    fn offer(&mut self, friend_distance: Option<usize>) {
        if let Some(d) = friend_distance {
            let candidate = d + 1;
            if self.best.is_none_or(|best| candidate < best) {
                self.best = Some(candidate);
            }
        }
    }

    /// A friend is the target; nothing shorter can come from this node.
    fn done(&self) -> bool {
        self.best == Some(1)
    }
}

/// Compute the minimum number of friendship hops between two users.
///
/// Both users must belong to `instance`; otherwise the query fails with
/// [`Error::CrossInstance`] before any traversal happens.
///
/// # Example
///
/// ```rust
/// use shoal_graph::{Distance, Instance, distance_between};
///
/// let mut inst = Instance::new();
/// let a = inst.register("a").unwrap();
/// let b = inst.register("b").unwrap();
///
/// assert_eq!(distance_between(&inst, &a, &a).unwrap(), Distance::Hops(0));
/// assert_eq!(distance_between(&inst, &a, &b).unwrap(), Distance::NoPath);
/// ```
pub fn distance_between(instance: &Instance, u1: &UserRef, u2: &UserRef) -> Result<Distance> {
    let source = instance.user(u1)?;
    let target = instance.user(u2)?;

    let (hops, _) = search_with_stats(instance, source, target.username())?;
    let distance = Distance::from(hops);
    log::debug!(
        "Distance {:?} -> {:?} in instance {}: {}",
        u1.username(),
        u2.username(),
        instance.id(),
        distance
    );
    Ok(distance)
}

/// Runs the search, also returning how many frames were expanded.
///
/// The frame count is the number of times a node was entered, counting
/// re-entries along different branches; the source counts as one.
pub(crate) fn search_with_stats(
    instance: &Instance,
    source: &User,
    target: &str,
) -> Result<(Option<usize>, usize)> {
    if source.username() == target {
        return Ok((Some(0), 0));
    }

    let mut stack: Vec<Frame<'_>> = vec![Frame::new(source)];
    let mut on_path: HashSet<&str> = HashSet::from([source.username()]);
    let mut expanded: usize = 1;

    while let Some(frame) = stack.last_mut() {
        let next = if frame.done() {
            None
        } else {
            frame
                .friends
                .by_ref()
                .map(String::as_str)
                .find(|name| !on_path.contains(name))
        };

        match next {
            Some(name) if name == target => frame.offer(Some(0)),
            Some(name) => {
                let friend = instance
                    .get(name)
                    .ok_or_else(|| Error::unknown_user(name))?;
                on_path.insert(friend.username());
                stack.push(Frame::new(friend));
                expanded += 1;
            }
            None => {
                let finished = stack.pop();
                let Some(finished) = finished else { break };
                on_path.remove(finished.username);

                match stack.last_mut() {
                    Some(parent) => parent.offer(finished.best),
                    None => {
                        log::trace!(
                            "Search from {:?} expanded {expanded} frames",
                            source.username()
                        );
                        return Ok((finished.best, expanded));
                    }
                }
            }
        }
    }

    Ok((None, expanded))
}

// ============================================================================
// Tests
// ============================================================================
