//! Input collaborator: key and button state plus pointer-lock mouse look.
//!
//! # Invariants
//! - The kernel reads `InputState` copies and a look quaternion, never raw events.
//! - Mouse motion only turns the view while the pointer is locked.
//! - Pitch never reaches a pole.

pub mod binding;
pub mod controls;
pub mod look;

pub use binding::{Key, MouseButton};
pub use controls::{Controls, LockEvent};
pub use look::{InputError, LookConfig, LookControls};
