//! Developer tooling: read-only inspectors over the field and the player.
//!
//! # Invariants
//! - Inspectors never mutate what they inspect.

mod inspector;

pub use inspector::{FieldInspector, FieldSummary, PlayerInspector, PlayerSummary, Probe};

pub fn crate_info() -> &'static str {
    "gravfield-tools v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("tools"));
    }
}
