use glam::{UVec3, Vec3};
use serde::{Deserialize, Serialize};

/// Gravitational constant for this universe.
pub const G: f32 = 20.0;

/// Largest mass a node may carry.
pub const MASS_MAX: f32 = 10.0;

/// Errors from placing masses into the field.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FieldError {
    #[error("mass {mass} outside (0, 10]")]
    InvalidMass { mass: f32 },
    #[error("node position {0} is not finite")]
    NonFinitePosition(Vec3),
}

/// A static point mass. Its mass doubles as its surface radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MassNode {
    pub position: Vec3,
    pub mass: f32,
}

impl MassNode {
    /// Acceleration this node imparts at `point`: `G * mass / r²` toward the node.
    ///
    /// A point that coincides with the node center gets no pull.
    pub fn acceleration_at(&self, point: Vec3) -> Vec3 {
        let delta = self.position - point;
        let r = delta.length();
        if r == 0.0 {
            return Vec3::ZERO;
        }
        delta / r * (G * self.mass / (r * r))
    }
}

/// Result of a nearest-node query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nearest {
    /// Surface radius of the node (its mass).
    pub radius: f32,
    /// Distance from the query point to the node center.
    pub distance: f32,
    /// Unit vector from the query point toward the node, zero when coincident.
    pub direction: Vec3,
    /// Node center.
    pub position: Vec3,
}

impl Nearest {
    /// Returned when the field has no nodes. Infinitely far, so every
    /// proximity comparison fails.
    pub const NONE: Self = Self {
        radius: 0.0,
        distance: f32::INFINITY,
        direction: Vec3::ZERO,
        position: Vec3::ZERO,
    };

    pub fn is_none(&self) -> bool {
        self.distance.is_infinite()
    }
}

/// Cubic grid of precomputed gravity vectors plus the masses that produce them.
///
/// Masses are placed first, then `calculate()` fills the grid once. There is no
/// incremental update: adding a node afterwards leaves the grid stale until the
/// next full `calculate()`.
///
/// Both `calculate` and `nearest` are linear scans over the nodes. That is fine
/// for tens of nodes in a 100³ grid and is a known scaling limit beyond that.
#[derive(Debug, Clone)]
pub struct GravField {
    size: usize,
    vectors: Vec<Vec3>,
    nodes: Vec<MassNode>,
    calculated: bool,
}

impl GravField {
    /// Create a field of `size³` zero vectors with no nodes.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            vectors: vec![Vec3::ZERO; size * size * size],
            nodes: Vec::new(),
            calculated: false,
        }
    }

    /// Grid extent along each axis.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> &[MassNode] {
        &self.nodes
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// True while the grid does not reflect the current node set.
    pub fn is_stale(&self) -> bool {
        !self.calculated
    }

    /// Append a node. It contributes to the grid at the next `calculate()`.
    pub fn add_mass(&mut self, position: Vec3, mass: f32) -> Result<(), FieldError> {
        if !(mass > 0.0 && mass <= MASS_MAX) {
            return Err(FieldError::InvalidMass { mass });
        }
        if !position.is_finite() {
            return Err(FieldError::NonFinitePosition(position));
        }
        if self.calculated {
            tracing::warn!(?position, mass, "mass added after calculate; field is stale");
            self.calculated = false;
        }
        self.nodes.push(MassNode { position, mass });
        tracing::debug!(?position, mass, nodes = self.nodes.len(), "mass added");
        Ok(())
    }

    /// Recompute every grid vector as the sum of all node contributions.
    pub fn calculate(&mut self) {
        let _span =
            tracing::info_span!("field_calculate", size = self.size, nodes = self.nodes.len())
                .entered();

        let size = self.size;
        for x in 0..size {
            for y in 0..size {
                for z in 0..size {
                    let point = Vec3::new(x as f32, y as f32, z as f32);
                    let net: Vec3 = self.nodes.iter().map(|n| n.acceleration_at(point)).sum();
                    let idx = self.index(x, y, z);
                    self.vectors[idx] = net;
                }
            }
        }
        self.calculated = true;

        tracing::debug!(cells = self.vectors.len(), "field calculated");
    }

    /// True iff every component of `position` lies in `[0, size)`.
    pub fn inside(&self, position: Vec3) -> bool {
        let size = self.size as f32;
        (0.0..size).contains(&position.x)
            && (0.0..size).contains(&position.y)
            && (0.0..size).contains(&position.z)
    }

    /// Precomputed vector at an integer cell.
    ///
    /// The cell must be inside the grid; callers gate with `inside()`.
    /// Out-of-range cells panic like out-of-bounds slice indexing.
    pub fn sample_at(&self, cell: UVec3) -> Vec3 {
        let (x, y, z) = (cell.x as usize, cell.y as usize, cell.z as usize);
        assert!(
            x < self.size && y < self.size && z < self.size,
            "cell {cell} outside field of size {}",
            self.size
        );
        self.vectors[self.index(x, y, z)]
    }

    /// Vector at the cell containing `position`, or `None` outside the field.
    pub fn sample(&self, position: Vec3) -> Option<Vec3> {
        self.inside(position)
            .then(|| self.sample_at(position.floor().as_uvec3()))
    }

    /// Closest node to `position`. Ties go to the earliest inserted node.
    pub fn nearest(&self, position: Vec3) -> Nearest {
        let mut result = Nearest::NONE;
        for node in &self.nodes {
            let distance = node.position.distance(position);
            if distance < result.distance {
                result = Nearest {
                    radius: node.mass,
                    distance,
                    direction: (node.position - position).normalize_or_zero(),
                    position: node.position,
                };
            }
        }
        result
    }

    fn index(&self, x: usize, y: usize, z: usize) -> usize {
        (x * self.size + y) * self.size + z
    }
}
