use std::sync::Arc;

use glam::Quat;
use gravfield_common::{InputState, Pose};

use crate::field::GravField;
use crate::player::{ConfigError, Player, PlayerConfig, PlayerEvent};
use crate::scene::{SceneConfig, SceneError};

/// One running simulation: a built field and the player flying through it.
///
/// The field sits behind an `Arc` so several simulations can share one
/// immutable grid while each owns its own player state.
#[derive(Debug, Clone)]
pub struct Simulation {
    field: Arc<GravField>,
    player: Player,
    frame: u64,
}

/// Errors from assembling a simulation out of configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SimulationError {
    #[error("scene: {0}")]
    Scene(#[from] SceneError),
    #[error("player: {0}")]
    Player(#[from] ConfigError),
}

impl Simulation {
    pub fn new(field: GravField, player: Player) -> Self {
        Self::with_shared_field(Arc::new(field), player)
    }

    /// Run a player against a field that other simulations may also read.
    pub fn with_shared_field(field: Arc<GravField>, player: Player) -> Self {
        if field.is_stale() {
            tracing::warn!("simulation built on a field that has not been calculated");
        }
        Self {
            field,
            player,
            frame: 0,
        }
    }

    /// Build the scene's field and spawn a player at its spawn point.
    pub fn from_scene(scene: &SceneConfig, player: PlayerConfig) -> Result<Self, SimulationError> {
        player.validate()?;
        let field = scene.build()?;
        Ok(Self::new(field, Player::with_config(scene.spawn, player)))
    }

    pub fn field(&self) -> &GravField {
        &self.field
    }

    /// Another handle to the grid, for spawning a sibling simulation.
    pub fn shared_field(&self) -> Arc<GravField> {
        Arc::clone(&self.field)
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn pose(&self) -> &Pose {
        self.player.pose()
    }

    /// Frames stepped so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Advance one frame. Negative or non-finite deltas count as zero.
    pub fn step(&mut self, delta: f32, input: &InputState, look: Quat) -> Option<PlayerEvent> {
        let delta = if delta.is_finite() { delta.max(0.0) } else { 0.0 };
        self.frame += 1;

        let event = self.player.update(delta, &self.field, input, look);
        match event {
            Some(PlayerEvent::Landed { node }) => {
                tracing::debug!(frame = self.frame, ?node, "player landed");
            }
            Some(PlayerEvent::Jumped) => {
                tracing::debug!(frame = self.frame, "player jumped");
            }
            None => {}
        }
        tracing::trace!(
            frame = self.frame,
            position = ?self.player.position(),
            velocity = ?self.player.velocity(),
            "frame stepped"
        );
        event
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use gravfield_common::WORLD_UP;

    fn small_field() -> GravField {
        let mut f = GravField::new(20);
        f.add_mass(Vec3::new(10.0, 10.0, 10.0), 3.0).unwrap();
        f.calculate();
        f
    }

    #[test]
    fn step_counts_frames() {
        let mut sim = Simulation::new(small_field(), Player::spawn(Vec3::new(10.0, 16.0, 10.0)));
        for _ in 0..5 {
            sim.step(1.0 / 60.0, &InputState::default(), Quat::IDENTITY);
        }
        assert_eq!(sim.frame(), 5);
    }

    #[test]
    fn bad_delta_is_clamped() {
        let mut sim = Simulation::new(small_field(), Player::spawn(Vec3::new(10.0, 16.0, 10.0)));
        let start = sim.pose().position;
        let thrust = InputState {
            move_forward: true,
            ..InputState::default()
        };
        sim.step(f32::NAN, &thrust, Quat::IDENTITY);
        sim.step(-1.0, &thrust, Quat::IDENTITY);
        assert_eq!(sim.pose().position, start);
        assert!(sim.pose().position.is_finite());
        assert!(sim.pose().orientation.is_finite());
    }

    #[test]
    fn shared_field_runs_independent_players() {
        let mut a = Simulation::new(small_field(), Player::spawn(Vec3::new(10.0, 16.0, 10.0)));
        let mut b = Simulation::with_shared_field(
            a.shared_field(),
            Player::spawn(Vec3::new(10.0, 4.0, 10.0)),
        );
        let thrust = InputState {
            move_left: true,
            ..InputState::default()
        };
        for _ in 0..30 {
            a.step(1.0 / 60.0, &thrust, Quat::IDENTITY);
            b.step(1.0 / 60.0, &InputState::default(), Quat::IDENTITY);
        }
        assert!(Arc::ptr_eq(&a.shared_field(), &b.shared_field()));
        assert_ne!(a.pose().position, b.pose().position);
        assert!(a.pose().position.x < 10.0);
    }

    #[test]
    fn from_scene_spawns_at_configured_point() {
        let scene = SceneConfig {
            field_size: 16,
            mass_count: 3,
            spawn: Vec3::new(8.0, 8.0, 8.0),
            ..SceneConfig::default()
        };
        let sim = Simulation::from_scene(&scene, PlayerConfig::default()).unwrap();
        assert_eq!(sim.pose().position, Vec3::new(8.0, 8.0, 8.0));
        assert_eq!(sim.pose().up, WORLD_UP);
        assert_eq!(sim.field().node_count(), 3);
        assert!(!sim.field().is_stale());
    }

    #[test]
    fn from_scene_rejects_bad_player_config() {
        let scene = SceneConfig {
            field_size: 4,
            mass_count: 0,
            ..SceneConfig::default()
        };
        let player = PlayerConfig {
            gravity_lerp: 2.0,
            ..PlayerConfig::default()
        };
        assert!(matches!(
            Simulation::from_scene(&scene, player),
            Err(SimulationError::Player(_))
        ));
    }

    #[test]
    fn replays_identically() {
        let scene = SceneConfig {
            field_size: 24,
            mass_count: 4,
            seed: 9,
            spawn: Vec3::splat(12.0),
            ..SceneConfig::default()
        };
        let input = InputState {
            move_forward: true,
            move_up: true,
            ..InputState::default()
        };
        let run = || {
            let mut sim = Simulation::from_scene(&scene, PlayerConfig::default()).unwrap();
            for i in 0..120 {
                let look = Quat::from_rotation_y(i as f32 * 0.01);
                sim.step(1.0 / 60.0, &input, look);
            }
            *sim.pose()
        };
        assert_eq!(run(), run());
    }
}
