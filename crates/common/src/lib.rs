//! Shared value types passed between the simulation kernel and its host.
//!
//! # Invariants
//! - Every type here is `Copy`; state is copied into long-lived owners, never aliased.

pub mod types;

pub use types::{InputState, Pose, WORLD_UP};
