use thiserror::Error;

/// Errors raised while building the simulation from its setup-time inputs.
///
/// Nothing in the per-frame path returns these; a broken terrain degrades to flat
/// ground instead (see [`crate::terrain::Terrain::from_mesh`]).
#[derive(Debug, Error)]
pub enum SimError {
    #[error("terrain mesh has no vertices or no triangles")]
    EmptyMesh,
    #[error("face {face} references vertex {index} but the mesh only has {vertex_count}")]
    IndexOutOfRange {
        face: usize,
        index: u32,
        vertex_count: usize,
    },
    #[error("mesh resource `{0}` not found")]
    MissingMesh(String),
    #[error("invalid world manifest: {0}")]
    Manifest(#[from] serde_json::Error),
}
