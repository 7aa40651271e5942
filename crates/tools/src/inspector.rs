use glam::{UVec3, Vec3};
use gravfield_kernel::{GravField, Nearest, Player, SurfaceState};

/// Field inspector for developer tooling.
///
/// Read-only queries against a built field for debugging and CLI output.
pub struct FieldInspector;

impl FieldInspector {
    /// Summarize the field: size, nodes, and the strongest grid cell.
    pub fn summary(field: &GravField) -> FieldSummary {
        let mut strongest = None;
        let mut peak = 0.0_f32;
        let size = field.size() as u32;
        for x in 0..size {
            for y in 0..size {
                for z in 0..size {
                    let cell = UVec3::new(x, y, z);
                    let magnitude = field.sample_at(cell).length();
                    if magnitude > peak {
                        peak = magnitude;
                        strongest = Some(cell);
                    }
                }
            }
        }
        FieldSummary {
            size: field.size(),
            node_count: field.node_count(),
            total_mass: field.nodes().iter().map(|n| n.mass).sum(),
            calculated: !field.is_stale(),
            strongest_cell: strongest,
            peak_magnitude: peak,
        }
    }

    /// Gravity and nearest node as seen from an arbitrary point.
    pub fn probe(field: &GravField, position: Vec3) -> Probe {
        Probe {
            position,
            gravity: field.sample(position),
            nearest: field.nearest(position),
        }
    }
}

/// Summary of a field for the inspector.
#[derive(Debug, Clone)]
pub struct FieldSummary {
    pub size: usize,
    pub node_count: usize,
    pub total_mass: f32,
    pub calculated: bool,
    pub strongest_cell: Option<UVec3>,
    pub peak_magnitude: f32,
}

impl std::fmt::Display for FieldSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Field: size={} nodes={} total_mass={:.2} calculated={}",
            self.size, self.node_count, self.total_mass, self.calculated
        )?;
        if let Some(cell) = self.strongest_cell {
            write!(
                f,
                " peak={:.2} at ({}, {}, {})",
                self.peak_magnitude, cell.x, cell.y, cell.z
            )?;
        }
        Ok(())
    }
}

/// What a point in space sees of the field.
#[derive(Debug, Clone, Copy)]
pub struct Probe {
    pub position: Vec3,
    /// `None` outside the grid.
    pub gravity: Option<Vec3>,
    pub nearest: Nearest,
}

impl std::fmt::Display for Probe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let p = self.position;
        write!(f, "Probe ({:.2}, {:.2}, {:.2}):", p.x, p.y, p.z)?;
        match self.gravity {
            Some(g) => write!(
                f,
                " g=({:.3}, {:.3}, {:.3}) |g|={:.3}",
                g.x,
                g.y,
                g.z,
                g.length()
            )?,
            None => write!(f, " outside field")?,
        }
        if self.nearest.is_none() {
            write!(f, " no nodes")
        } else {
            let n = self.nearest.position;
            write!(
                f,
                " nearest=({:.1}, {:.1}, {:.1}) radius={:.2} distance={:.2}",
                n.x, n.y, n.z, self.nearest.radius, self.nearest.distance
            )
        }
    }
}

/// Player inspector for developer tooling.
pub struct PlayerInspector;

impl PlayerInspector {
    pub fn summary(player: &Player) -> PlayerSummary {
        let pose = player.pose();
        PlayerSummary {
            position: pose.position.to_array(),
            velocity: player.velocity().to_array(),
            up: pose.up.to_array(),
            gravity: player.current_g().to_array(),
            grounded: player.state() == SurfaceState::Grounded,
        }
    }
}

/// Snapshot of a player's motion state.
#[derive(Debug, Clone)]
pub struct PlayerSummary {
    pub position: [f32; 3],
    pub velocity: [f32; 3],
    pub up: [f32; 3],
    pub gravity: [f32; 3],
    pub grounded: bool,
}

impl std::fmt::Display for PlayerSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let speed = Vec3::from_array(self.velocity).length();
        write!(
            f,
            "Player [{}] pos=({:.2}, {:.2}, {:.2}) speed={:.2} up=({:.2}, {:.2}, {:.2})",
            if self.grounded { "grounded" } else { "airborne" },
            self.position[0],
            self.position[1],
            self.position[2],
            speed,
            self.up[0],
            self.up[1],
            self.up[2],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one_mass_field() -> GravField {
        let mut f = GravField::new(10);
        f.add_mass(Vec3::new(5.0, 5.0, 5.0), 5.0).unwrap();
        f.calculate();
        f
    }

    #[test]
    fn summary_empty_field() {
        let f = GravField::new(4);
        let s = FieldInspector::summary(&f);
        assert_eq!(s.node_count, 0);
        assert!(!s.calculated);
        assert!(s.strongest_cell.is_none());
        assert_eq!(s.peak_magnitude, 0.0);
    }

    #[test]
    fn summary_finds_peak_next_to_mass() {
        let s = FieldInspector::summary(&one_mass_field());
        assert_eq!(s.node_count, 1);
        assert_eq!(s.total_mass, 5.0);
        assert!(s.calculated);
        // The six face neighbours tie at 100; the scan keeps the first.
        assert_eq!(s.strongest_cell, Some(UVec3::new(4, 5, 5)));
        assert!((s.peak_magnitude - 100.0).abs() < 1e-3);
    }

    #[test]
    fn summary_display() {
        let s = FieldInspector::summary(&one_mass_field());
        let text = format!("{s}");
        assert!(text.contains("nodes=1"));
        assert!(text.contains("peak=100.00 at (4, 5, 5)"));
    }

    #[test]
    fn probe_inside_and_outside() {
        let f = one_mass_field();
        let inside = FieldInspector::probe(&f, Vec3::new(5.0, 5.0, 4.0));
        assert!(inside.gravity.is_some());
        assert!(format!("{inside}").contains("|g|=100.000"));

        let outside = FieldInspector::probe(&f, Vec3::new(-1.0, 5.0, 5.0));
        assert!(outside.gravity.is_none());
        assert!(format!("{outside}").contains("outside field"));
        assert!((outside.nearest.distance - 6.0).abs() < 1e-5);
    }

    #[test]
    fn probe_without_nodes() {
        let f = GravField::new(2);
        let p = FieldInspector::probe(&f, Vec3::ZERO);
        assert!(format!("{p}").contains("no nodes"));
    }

    #[test]
    fn player_summary() {
        let player = Player::spawn(Vec3::new(1.0, 2.0, 3.0));
        let s = PlayerInspector::summary(&player);
        assert_eq!(s.position, [1.0, 2.0, 3.0]);
        assert!(!s.grounded);
        let text = format!("{s}");
        assert!(text.contains("airborne"));
        assert!(text.contains("speed=0.00"));
    }
}
