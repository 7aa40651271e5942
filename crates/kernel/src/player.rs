use glam::{Quat, Vec3};
use gravfield_common::{InputState, Pose, WORLD_UP};
use serde::{Deserialize, Serialize};

use crate::field::{GravField, Nearest};
use crate::orient::rotate_towards;

/// Errors from validating player tuning values.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} must be finite and non-negative, got {value}")]
    Negative { name: &'static str, value: f32 },
    #[error("{name} must lie in [0, 1], got {value}")]
    OutOfUnitRange { name: &'static str, value: f32 },
}

/// Tuning for the player integrator.
///
/// `friction` and `gravity_lerp` are per-frame blend factors, not rates, so
/// their effect depends on frame rate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Clearance kept between the player and a node surface.
    pub height: f32,
    /// Fraction of velocity removed each frame.
    pub friction: f32,
    /// Thrust per second at full input.
    pub acceleration: f32,
    /// Blend factor pulling the smoothed gravity toward the sampled cell.
    pub gravity_lerp: f32,
    /// Extra distance beyond `height` at which up realigns to a surface.
    pub turn_threshold: f32,
    /// Maximum surface-alignment turn in radians per second.
    pub turn_speed: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            height: 0.5,
            friction: 0.25,
            acceleration: 400.0,
            gravity_lerp: 0.5,
            turn_threshold: 2.0,
            turn_speed: 1.0,
        }
    }
}

impl PlayerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("height", self.height),
            ("acceleration", self.acceleration),
            ("turn_threshold", self.turn_threshold),
            ("turn_speed", self.turn_speed),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Negative { name, value });
            }
        }
        for (name, value) in [("friction", self.friction), ("gravity_lerp", self.gravity_lerp)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::OutOfUnitRange { name, value });
            }
        }
        Ok(())
    }
}

/// Contact state with node surfaces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SurfaceState {
    #[default]
    Airborne,
    Grounded,
}

/// State transitions reported by a frame update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlayerEvent {
    /// Touched down on the node centered at `node`.
    Landed { node: Vec3 },
    /// Left the surface on jump intent.
    Jumped,
}

/// First-person player integrating thrust, gravity, friction and surface alignment.
///
/// Airborne players fly under thrust and field gravity until a collision glues
/// them to a surface. Grounded players stay put until they jump.
#[derive(Debug, Clone)]
pub struct Player {
    config: PlayerConfig,
    pose: Pose,
    velocity: Vec3,
    heading: Vec3,
    current_g: Vec3,
    state: SurfaceState,
    target_orientation: Quat,
    current_orientation: Quat,
}

impl Player {
    /// Spawn an airborne player at rest with default tuning.
    pub fn spawn(position: Vec3) -> Self {
        Self::with_config(position, PlayerConfig::default())
    }

    pub fn with_config(position: Vec3, config: PlayerConfig) -> Self {
        Self {
            config,
            pose: Pose::at(position),
            velocity: Vec3::ZERO,
            heading: Vec3::ZERO,
            current_g: Vec3::ZERO,
            state: SurfaceState::Airborne,
            target_orientation: Quat::IDENTITY,
            current_orientation: Quat::IDENTITY,
        }
    }

    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }

    pub fn pose(&self) -> &Pose {
        &self.pose
    }

    pub fn position(&self) -> Vec3 {
        self.pose.position
    }

    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    pub fn heading(&self) -> Vec3 {
        self.heading
    }

    /// Smoothed gravity estimate.
    pub fn current_g(&self) -> Vec3 {
        self.current_g
    }

    pub fn state(&self) -> SurfaceState {
        self.state
    }

    pub fn is_grounded(&self) -> bool {
        self.state == SurfaceState::Grounded
    }

    pub fn target_orientation(&self) -> Quat {
        self.target_orientation
    }

    pub fn current_orientation(&self) -> Quat {
        self.current_orientation
    }

    /// Advance one frame of `delta` seconds.
    ///
    /// `look` is the yaw/pitch rotation from the input collaborator; it is
    /// applied after the surface alignment. Returns the state transition that
    /// happened this frame, if any.
    pub fn update(
        &mut self,
        delta: f32,
        field: &GravField,
        input: &InputState,
        look: Quat,
    ) -> Option<PlayerEvent> {
        self.apply_friction();
        self.calculate_heading(input);

        let event = match self.state {
            SurfaceState::Grounded => {
                self.move_polar();
                (!self.is_grounded()).then_some(PlayerEvent::Jumped)
            }
            SurfaceState::Airborne => {
                self.move_linear(delta);
                self.gravitate(delta, field);
                let (displacement, contact) = self.collide(delta, field);
                self.pose.position += displacement;
                contact.map(|hit| PlayerEvent::Landed { node: hit.position })
            }
        };

        self.turn(delta, look);
        event
    }

    /// Damp velocity toward zero by the friction fraction.
    pub fn apply_friction(&mut self) {
        self.velocity = self.velocity.lerp(Vec3::ZERO, self.config.friction);
    }

    /// Normalized movement intent in player space. Zero when no key is held.
    pub fn calculate_heading(&mut self, input: &InputState) -> Vec3 {
        self.heading = input.intent().normalize_or_zero();
        self.heading
    }

    /// Grounded movement: only the jump check, the player does not slide.
    pub fn move_polar(&mut self) {
        if self.state == SurfaceState::Grounded && self.heading.y > 0.0 {
            self.state = SurfaceState::Airborne;
        }
    }

    /// Add thrust along the heading, rotated into the current view.
    pub fn move_linear(&mut self, delta: f32) {
        let direction = self.pose.orientation * self.heading;
        self.velocity += direction * (self.config.acceleration * delta);
    }

    /// Pull toward the field and realign up to a nearby surface.
    ///
    /// Outside the field the smoothed gravity keeps its last value.
    pub fn gravitate(&mut self, delta: f32, field: &GravField) {
        if let Some(sampled) = field.sample(self.pose.position) {
            self.current_g = self.current_g.lerp(sampled, self.config.gravity_lerp);
        }
        self.velocity += self.current_g * delta;

        let nearest = field.nearest(self.pose.position);
        if nearest.distance < nearest.radius + self.config.height + self.config.turn_threshold {
            self.pose.up = -nearest.direction;
            self.target_orientation = Quat::from_rotation_arc(WORLD_UP, self.pose.up);
        }
    }

    /// This frame's displacement, zeroed when it would reach a node surface.
    ///
    /// Reaching the surface grounds the player and returns the node hit, which
    /// is the node nearest the candidate position, not the current one.
    pub fn collide(&mut self, delta: f32, field: &GravField) -> (Vec3, Option<Nearest>) {
        let displacement = self.velocity * delta;
        let nearest = field.nearest(self.pose.position + displacement);
        if nearest.distance <= nearest.radius + self.config.height {
            self.state = SurfaceState::Grounded;
            return (Vec3::ZERO, Some(nearest));
        }
        (displacement, None)
    }

    /// Step the alignment toward its target, then compose the look rotation.
    pub fn turn(&mut self, delta: f32, look: Quat) {
        self.current_orientation = rotate_towards(
            self.current_orientation,
            self.target_orientation,
            self.config.turn_speed * delta,
        );
        self.pose.orientation = self.current_orientation * look;
    }
}
