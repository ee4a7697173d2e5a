//! Ground queries: mesh-backed height field plus a flat fallback plane.

mod height_field;

pub use height_field::HeightField;

use glam::{Vec2, Vec3};
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::assets::mesh::TerrainMesh;

/// Slack around the bounds rectangle that still counts as "on the terrain".
pub const FOOTPRINT_MARGIN: f32 = 2.0;

/// Axis-aligned (x, z) rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: f32,
    pub max_x: f32,
    pub min_z: f32,
    pub max_z: f32,
}

impl Bounds {
    pub fn new(min_x: f32, max_x: f32, min_z: f32, max_z: f32) -> Self {
        Self {
            min_x,
            max_x,
            min_z,
            max_z,
        }
    }

    /// Square centered on the origin.
    pub fn symmetric(half_extent: f32) -> Self {
        Self::new(-half_extent, half_extent, -half_extent, half_extent)
    }

    /// Smallest rectangle enclosing all points, `None` for an empty set.
    pub fn enclosing(points: impl IntoIterator<Item = Vec2>) -> Option<Self> {
        points.into_iter().fold(None, |acc, p| {
            Some(match acc {
                None => Self::new(p.x, p.x, p.y, p.y),
                Some(b) => Self::new(
                    b.min_x.min(p.x),
                    b.max_x.max(p.x),
                    b.min_z.min(p.y),
                    b.max_z.max(p.y),
                ),
            })
        })
    }

    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn depth(&self) -> f32 {
        self.max_z - self.min_z
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(
            (self.min_x + self.max_x) * 0.5,
            (self.min_z + self.max_z) * 0.5,
        )
    }

    pub fn contains_with_margin(&self, x: f32, z: f32, margin: f32) -> bool {
        x >= self.min_x - margin
            && x <= self.max_x + margin
            && z >= self.min_z - margin
            && z <= self.max_z + margin
    }
}

/// What every ground-relative system needs from the terrain.
pub trait GroundQuery {
    /// Ground height at (x, z).
    fn height_at(&self, x: f32, z: f32) -> f32;

    /// Cheap rectangular containment test (bounds plus margin), not an exact polygon test.
    fn is_within_footprint(&self, x: f32, z: f32) -> bool;

    fn bounds(&self) -> Bounds;
}

/// Constant-height square used when no terrain mesh is available.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlatGround {
    pub half_extent: f32,
    pub height: f32,
}

impl Default for FlatGround {
    fn default() -> Self {
        Self {
            half_extent: 50.0,
            height: 0.0,
        }
    }
}

impl GroundQuery for FlatGround {
    fn height_at(&self, _x: f32, _z: f32) -> f32 {
        self.height
    }

    fn is_within_footprint(&self, x: f32, z: f32) -> bool {
        self.bounds().contains_with_margin(x, z, FOOTPRINT_MARGIN)
    }

    fn bounds(&self) -> Bounds {
        Bounds::symmetric(self.half_extent)
    }
}

/// The ground the simulation runs on.
#[derive(Debug, Clone)]
pub enum Terrain {
    Mesh(HeightField),
    Flat(FlatGround),
}

impl Terrain {
    /// Build a mesh-backed terrain, falling back to `fallback` if the mesh is unusable.
    pub fn from_mesh(mesh: &TerrainMesh, scale: f32, offset: Vec3, fallback: FlatGround) -> Self {
        match HeightField::new(mesh, scale, offset) {
            Ok(field) => {
                let b = field.bounds();
                info!(
                    "terrain: {} triangles, bounds x [{:.1}, {:.1}] z [{:.1}, {:.1}]",
                    field.triangle_count(),
                    b.min_x,
                    b.max_x,
                    b.min_z,
                    b.max_z
                );
                Terrain::Mesh(field)
            }
            Err(err) => {
                warn!("terrain: {err}; using flat ground (half extent {})", fallback.half_extent);
                Terrain::Flat(fallback)
            }
        }
    }

    pub fn is_flat(&self) -> bool {
        matches!(self, Terrain::Flat(_))
    }

    /// Spawn point: the middle of the bounds.
    pub fn center(&self) -> Vec2 {
        self.bounds().center()
    }
}

impl Default for Terrain {
    fn default() -> Self {
        Terrain::Flat(FlatGround::default())
    }
}

impl GroundQuery for Terrain {
    fn height_at(&self, x: f32, z: f32) -> f32 {
        match self {
            Terrain::Mesh(field) => field.height_at(x, z),
            Terrain::Flat(flat) => flat.height_at(x, z),
        }
    }

    fn is_within_footprint(&self, x: f32, z: f32) -> bool {
        match self {
            Terrain::Mesh(field) => field.is_within_footprint(x, z),
            Terrain::Flat(flat) => flat.is_within_footprint(x, z),
        }
    }

    fn bounds(&self) -> Bounds {
        match self {
            Terrain::Mesh(field) => field.bounds(),
            Terrain::Flat(flat) => flat.bounds(),
        }
    }
}
