pub mod manifest;
pub mod mesh;

pub use manifest::{TerrainDescriptor, WorldManifest};
pub use mesh::{FaceVertex, InMemoryMeshSource, MeshSource, TerrainMesh};
