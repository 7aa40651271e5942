//! Gravity kernel: discretized gravity field, player integrator, deterministic scenes.
//!
//! # Invariants
//! - The field grid is read-only once `calculate()` has run after the last insertion.
//! - A frame step runs to completion; every operation is total over its inputs.
//! - All simulation state is owned by explicit values, never process-wide globals.

pub mod field;
pub mod orient;
pub mod player;
pub mod scene;
pub mod simulation;

pub use field::{FieldError, G, GravField, MASS_MAX, MassNode, Nearest};
pub use orient::rotate_towards;
pub use player::{ConfigError, Player, PlayerConfig, PlayerEvent, SurfaceState};
pub use scene::{SceneConfig, SceneError, SceneRng};
pub use simulation::{Simulation, SimulationError};
