use std::collections::HashMap;

use glam::Vec3;

use crate::error::SimError;

/// One corner of a face as written by the mesh loader.
/// Only `position` matters to the simulation; the other slots belong to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FaceVertex {
    pub position: u32,
    pub tex_coord: Option<u32>,
    pub normal: Option<u32>,
}

impl FaceVertex {
    pub fn new(position: u32) -> Self {
        Self {
            position,
            tex_coord: None,
            normal: None,
        }
    }
}

/// Mesh-local terrain geometry: positions plus ground triangles as position-index triples.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TerrainMesh {
    pub positions: Vec<Vec3>,
    pub triangles: Vec<[u32; 3]>,
}

impl TerrainMesh {
    pub fn new(positions: Vec<Vec3>, triangles: Vec<[u32; 3]>) -> Self {
        Self {
            positions,
            triangles,
        }
    }

    /// Build from loader face records, keeping the position index of each corner.
    pub fn from_faces(positions: Vec<Vec3>, faces: &[[FaceVertex; 3]]) -> Self {
        let triangles = faces
            .iter()
            .map(|[a, b, c]| [a.position, b.position, c.position])
            .collect();
        Self {
            positions,
            triangles,
        }
    }

    /// Build from flat `xyz` coordinates and flat index triples.
    /// Trailing values that don't form a whole vertex or triangle are dropped.
    pub fn from_flat(coords: &[f32], indices: &[u32]) -> Self {
        let positions = coords
            .chunks_exact(3)
            .map(|c| Vec3::new(c[0], c[1], c[2]))
            .collect();
        let triangles = indices
            .chunks_exact(3)
            .map(|t| [t[0], t[1], t[2]])
            .collect();
        Self {
            positions,
            triangles,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty() || self.triangles.is_empty()
    }

    /// Check that the mesh is non-empty and every index names an existing vertex.
    pub fn validate(&self) -> Result<(), SimError> {
        if self.is_empty() {
            return Err(SimError::EmptyMesh);
        }
        let vertex_count = self.positions.len();
        for (face, tri) in self.triangles.iter().enumerate() {
            if let Some(&index) = tri.iter().find(|&&i| i as usize >= vertex_count) {
                return Err(SimError::IndexOutOfRange {
                    face,
                    index,
                    vertex_count,
                });
            }
        }
        Ok(())
    }
}

/// Supplier of named terrain meshes (the resource loader lives outside the core).
pub trait MeshSource {
    fn load_mesh(&self, name: &str) -> Result<TerrainMesh, SimError>;
}

/// Mesh source backed by meshes that were already decoded and handed over.
#[derive(Debug, Default)]
pub struct InMemoryMeshSource {
    meshes: HashMap<String, TerrainMesh>,
}

impl InMemoryMeshSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, mesh: TerrainMesh) {
        self.meshes.insert(name.into(), mesh);
    }

    pub fn with_mesh(mut self, name: impl Into<String>, mesh: TerrainMesh) -> Self {
        self.insert(name, mesh);
        self
    }
}

impl MeshSource for InMemoryMeshSource {
    fn load_mesh(&self, name: &str) -> Result<TerrainMesh, SimError> {
        self.meshes
            .get(name)
            .cloned()
            .ok_or_else(|| SimError::MissingMesh(name.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_faces_keeps_position_indices() {
        let corner = |p, t| FaceVertex {
            position: p,
            tex_coord: Some(t),
            normal: Some(9),
        };
        let mesh = TerrainMesh::from_faces(
            vec![Vec3::ZERO, Vec3::X, Vec3::Z],
            &[[corner(0, 5), corner(1, 6), corner(2, 7)]],
        );
        assert_eq!(mesh.triangles, vec![[0, 1, 2]]);
    }

    #[test]
    fn from_flat_drops_partial_records() {
        let mesh = TerrainMesh::from_flat(
            &[0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 7.0],
            &[0, 1, 2, 0],
        );
        assert_eq!(mesh.positions.len(), 3);
        assert_eq!(mesh.triangles.len(), 1);
    }

    #[test]
    fn validate_rejects_empty_and_bad_indices() {
        assert!(matches!(
            TerrainMesh::default().validate(),
            Err(SimError::EmptyMesh)
        ));

        let mesh = TerrainMesh::new(vec![Vec3::ZERO, Vec3::X], vec![[0, 1, 4]]);
        match mesh.validate() {
            Err(SimError::IndexOutOfRange { face, index, vertex_count }) => {
                assert_eq!(face, 0);
                assert_eq!(index, 4);
                assert_eq!(vertex_count, 2);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn in_memory_source_lookup() {
        let source = InMemoryMeshSource::new().with_mesh(
            "desert",
            TerrainMesh::new(vec![Vec3::ZERO, Vec3::X, Vec3::Z], vec![[0, 1, 2]]),
        );
        assert!(source.load_mesh("desert").is_ok());
        assert!(matches!(
            source.load_mesh("moon"),
            Err(SimError::MissingMesh(name)) if name == "moon"
        ));
    }
}
