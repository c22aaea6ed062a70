//! Social graph instances and friendship distance queries.
//!
//! This crate provides:
//!
//! - [`Instance`]: an isolated namespace of users and symmetric friendships
//! - [`distance_between`]: minimum friendship hops between two users
//! - [`InstanceStats`]: structural statistics over an instance
//!
//! # Example
//!
//! ```rust
//! use shoal_graph::{Distance, Instance};
//!
//! let mut inst = Instance::with_name("pond");
//! let a = inst.register("a").unwrap();
//! let b = inst.register("b").unwrap();
//! let c = inst.register("c").unwrap();
//! inst.add_friendship(&a, &b).unwrap();
//! inst.add_friendship(&b, &c).unwrap();
//!
//! assert_eq!(inst.distance_between(&a, &c).unwrap(), Distance::Hops(2));
//! ```

#![forbid(unsafe_code)]

pub mod distance;
pub mod stats;
pub mod types;

#[cfg(test)]
mod proptests;

pub use distance::{Distance, distance_between};
pub use stats::{InstanceStats, compute_stats, to_ungraph};
pub use types::{Instance, User, UserRef};

pub use shoal_core::{Error, InstanceId, Result};
