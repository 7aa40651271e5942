use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::field::{FieldError, GravField, MASS_MAX};

/// Errors from building a scene.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SceneError {
    #[error("mass range [{min}, {max}] must satisfy 0 < min <= max <= 10")]
    InvalidMassRange { min: f32, max: f32 },
    #[error("field size must be positive")]
    EmptyField,
    #[error(transparent)]
    Field(#[from] FieldError),
}

/// Layout of a randomly seeded field of masses.
///
/// Masses land on integer grid points inside the field. The same seed always
/// produces the same scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub field_size: usize,
    pub mass_count: usize,
    pub mass_min: f32,
    pub mass_max: f32,
    pub seed: u64,
    /// Where the player starts.
    pub spawn: Vec3,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            field_size: 100,
            mass_count: 10,
            mass_min: 2.0,
            mass_max: MASS_MAX,
            seed: 42,
            spawn: Vec3::splat(50.0),
        }
    }
}

impl SceneConfig {
    pub fn validate(&self) -> Result<(), SceneError> {
        if self.field_size == 0 {
            return Err(SceneError::EmptyField);
        }
        let (min, max) = (self.mass_min, self.mass_max);
        if !(min > 0.0 && min <= max && max <= MASS_MAX) {
            return Err(SceneError::InvalidMassRange { min, max });
        }
        Ok(())
    }

    /// Place the masses and calculate the field once.
    pub fn build(&self) -> Result<GravField, SceneError> {
        self.validate()?;
        let _span = tracing::info_span!("scene_build", seed = self.seed).entered();

        let mut rng = SceneRng::new(self.seed);
        let mut field = GravField::new(self.field_size);
        let size = self.field_size as u64;
        for _ in 0..self.mass_count {
            let position = Vec3::new(
                rng.next_below(size) as f32,
                rng.next_below(size) as f32,
                rng.next_below(size) as f32,
            );
            let mass = self.mass_min + rng.next_f32() * (self.mass_max - self.mass_min);
            // Rounding can push the top of the range a hair past MASS_MAX.
            field.add_mass(position, mass.min(self.mass_max))?;
        }
        field.calculate();

        tracing::info!(
            nodes = field.node_count(),
            size = self.field_size,
            "scene built"
        );
        Ok(field)
    }
}

/// Deterministic generator for scene layout (splitmix64).
#[derive(Debug, Clone)]
pub struct SceneRng {
    state: u64,
}

impl SceneRng {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9e37_79b9_7f4a_7c15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^ (z >> 31)
    }

    /// Uniform in `[0, 1)`.
    pub fn next_f32(&mut self) -> f32 {
        (self.next_u64() >> 40) as f32 / (1u64 << 24) as f32
    }

    /// Uniform-ish in `[0, bound)`. Returns 0 for a zero bound.
    pub fn next_below(&mut self, bound: u64) -> u64 {
        if bound == 0 {
            return 0;
        }
        self.next_u64() % bound
    }
}
