use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::api::config::SimConfig;
use crate::error::SimError;

/// World description loaded once at setup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldManifest {
    pub terrain: TerrainDescriptor,
    /// Fixed seed for placement and roaming. Omit for a fresh world each session.
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub config: SimConfig,
}

/// Names the terrain mesh resource and how to place it in the world.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TerrainDescriptor {
    /// Resource name handed to the mesh source.
    pub mesh: String,
    /// Uniform scale applied before the offset.
    #[serde(default = "default_scale")]
    pub scale: f32,
    #[serde(default)]
    pub offset: Vec3,
}

fn default_scale() -> f32 {
    1.0
}

impl WorldManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_minimal_manifest() {
        let json = r#"{ "terrain": { "mesh": "desert" } }"#;
        let manifest = WorldManifest::from_json(json).unwrap();
        assert_eq!(manifest.terrain.mesh, "desert");
        assert_eq!(manifest.terrain.scale, 1.0);
        assert_eq!(manifest.terrain.offset, Vec3::ZERO);
        assert_eq!(manifest.seed, None);
        assert_eq!(manifest.config, SimConfig::default());
    }

    #[test]
    fn parse_full_manifest() {
        let json = r#"{
            "terrain": { "mesh": "dunes", "scale": 20.0, "offset": [0.0, -3.0, 0.0] },
            "seed": 1234,
            "config": {
                "fixed_dt": 0.02,
                "energy": { "max": 50.0 },
                "cactus": { "placement": { "count_range": [3, 4] } }
            }
        }"#;
        let manifest = WorldManifest::from_json(json).unwrap();
        assert_eq!(manifest.terrain.scale, 20.0);
        assert_eq!(manifest.terrain.offset, Vec3::new(0.0, -3.0, 0.0));
        assert_eq!(manifest.seed, Some(1234));
        assert_eq!(manifest.config.fixed_dt, 0.02);
        assert_eq!(manifest.config.energy.max, 50.0);
        assert_eq!(manifest.config.energy.move_drain, 1.5);
        assert_eq!(manifest.config.cactus.placement.count_range, (3, 4));
    }

    #[test]
    fn malformed_manifest_is_an_error() {
        let err = WorldManifest::from_json("{ not json").unwrap_err();
        assert!(matches!(err, SimError::Manifest(_)));

        // terrain is required
        assert!(WorldManifest::from_json("{}").is_err());
    }
}
