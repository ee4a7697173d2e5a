use glam::{Vec2, Vec3};

use crate::assets::mesh::TerrainMesh;
use crate::error::SimError;
use crate::terrain::{Bounds, GroundQuery, FOOTPRINT_MARGIN};

/// Barycentric weights may dip this far below zero and still count as inside.
const BARYCENTRIC_EPSILON: f32 = 1e-6;

/// Triangles whose projected area is below this are skipped.
const DEGENERATE_AREA: f32 = 1e-10;

/// Height and footprint oracle over a static terrain mesh.
///
/// Vertices are transformed once at construction (`world = local * scale + offset`),
/// and the (x, z) bounds are computed from the transformed set. Nothing mutates after that.
#[derive(Debug, Clone)]
pub struct HeightField {
    vertices: Vec<Vec3>,
    triangles: Vec<[u32; 3]>,
    scale: f32,
    offset: Vec3,
    bounds: Bounds,
    margin: f32,
}

impl HeightField {
    /// Build from a mesh-local mesh. Fails on an empty mesh or a face pointing past the vertex list.
    pub fn new(mesh: &TerrainMesh, scale: f32, offset: Vec3) -> Result<Self, SimError> {
        mesh.validate()?;

        let vertices: Vec<Vec3> = mesh.positions.iter().map(|&v| v * scale + offset).collect();
        let bounds = Bounds::enclosing(vertices.iter().map(|v| Vec2::new(v.x, v.z)))
            .ok_or(SimError::EmptyMesh)?;

        Ok(Self {
            vertices,
            triangles: mesh.triangles.clone(),
            scale,
            offset,
            bounds,
            margin: FOOTPRINT_MARGIN,
        })
    }

    /// Override the footprint margin (defaults to [`FOOTPRINT_MARGIN`]).
    pub fn with_margin(mut self, margin: f32) -> Self {
        self.margin = margin;
        self
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn offset(&self) -> Vec3 {
        self.offset
    }

    /// Height returned when no triangle covers the query point.
    pub fn fallback_height(&self) -> f32 {
        self.offset.y
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Midpoint of the (x, z) bounds.
    pub fn center(&self) -> Vec2 {
        self.bounds.center()
    }

    /// First triangle, in mesh order, whose (x, z) projection contains the point.
    /// Returns the triangle's corners and the barycentric weights of the point.
    fn locate(&self, point: Vec2) -> Option<([Vec3; 3], Vec3)> {
        self.triangles.iter().find_map(|&[i0, i1, i2]| {
            let corners = [
                self.vertices[i0 as usize],
                self.vertices[i1 as usize],
                self.vertices[i2 as usize],
            ];
            barycentric(point, &corners).map(|weights| (corners, weights))
        })
    }
}

/// Barycentric weights of `p` against the (x, z) projection of `tri`,
/// or `None` when the triangle is degenerate or doesn't contain the point.
fn barycentric(p: Vec2, tri: &[Vec3; 3]) -> Option<Vec3> {
    let a = Vec2::new(tri[0].x, tri[0].z);
    let b = Vec2::new(tri[1].x, tri[1].z);
    let c = Vec2::new(tri[2].x, tri[2].z);

    let ab = b - a;
    let ac = c - a;
    let ap = p - a;

    let cross = ab.perp_dot(ac);
    if 0.5 * cross.abs() < DEGENERATE_AREA {
        return None;
    }

    let u = ap.perp_dot(ac) / cross;
    let v = ab.perp_dot(ap) / cross;
    let w = 1.0 - u - v;

    if u >= -BARYCENTRIC_EPSILON && v >= -BARYCENTRIC_EPSILON && w >= -BARYCENTRIC_EPSILON {
        Some(Vec3::new(w, u, v))
    } else {
        None
    }
}

impl GroundQuery for HeightField {
    fn height_at(&self, x: f32, z: f32) -> f32 {
        match self.locate(Vec2::new(x, z)) {
            // a + u(b - a) + v(c - a): flat triangles come back exact.
            Some(([a, b, c], weights)) => a.y + weights.y * (b.y - a.y) + weights.z * (c.y - a.y),
            None => self.fallback_height(),
        }
    }

    fn is_within_footprint(&self, x: f32, z: f32) -> bool {
        self.bounds.contains_with_margin(x, z, self.margin)
    }

    fn bounds(&self) -> Bounds {
        self.bounds
    }
}
