//! Rendering adapter: where per-frame poses leave the kernel.
//!
//! # Invariants
//! - Sinks read poses; they never feed back into the simulation.
//! - Projection state (aspect, clip planes) lives here, not in the kernel.
//!
//! # Workaround
//! Ships a debug text sink in place of a GPU camera. Any renderer that can
//! consume a `Pose` implements `PoseSink` and plugs in unchanged.

mod projection;
mod sink;

pub use projection::Projection;
pub use sink::{DebugTextSink, PoseSink};

pub fn crate_info() -> &'static str {
    "gravfield-render v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("render"));
    }
}
