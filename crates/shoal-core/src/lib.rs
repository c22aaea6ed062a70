//! Shoal Core — shared errors and identifiers.
//!
//! This crate provides the foundational types used across all shoal crates.
//! It has no internal shoal dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`ids`]: Instance identity

#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]

pub mod error;
pub mod ids;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
pub use ids::InstanceId;
