use serde::{Deserialize, Serialize};

use crate::api::types::InstanceKind;
use crate::player::{EnergyConfig, PlayerConfig};
use crate::systems::animation::PulseConfig;
use crate::systems::placement::PlacementConstraints;
use crate::systems::roam::RoamConfig;
use crate::terrain::FlatGround;

/// Placement and collision tuning for one prop kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KindConfig {
    pub placement: PlacementConstraints,
    /// Collider radius at scale 1.
    pub collider_radius: f32,
    /// Height above the ground the instance is placed at.
    pub hover_height: f32,
}

impl Default for KindConfig {
    fn default() -> Self {
        Self {
            placement: PlacementConstraints::default(),
            collider_radius: 1.0,
            hover_height: 0.0,
        }
    }
}

/// All simulation tuning. Every field has a default, so a partial JSON document is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Fixed timestep in seconds (default: 1/60).
    pub fixed_dt: f32,
    pub player: PlayerConfig,
    pub energy: EnergyConfig,
    pub cactus: KindConfig,
    pub can: KindConfig,
    pub sun: KindConfig,
    pub tumbleweed: KindConfig,
    pub roam: RoamConfig,
    pub pulse: PulseConfig,
    /// Ground used when the terrain mesh is missing or unusable.
    pub fallback_ground: FlatGround,
    /// Segments per hitbox outline circle.
    pub hitbox_segments: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        let roam = RoamConfig::default();
        Self {
            fixed_dt: 1.0 / 60.0,
            player: PlayerConfig::default(),
            energy: EnergyConfig::default(),
            cactus: KindConfig {
                placement: PlacementConstraints::default()
                    .with_count(15, 25)
                    .with_scale(0.8, 1.5)
                    .with_spacing(8.0, 5.0),
                collider_radius: 1.0,
                hover_height: 0.0,
            },
            can: KindConfig {
                placement: PlacementConstraints::default()
                    .with_count(10, 15)
                    .with_scale(0.8, 1.2)
                    .with_spacing(5.0, 4.0),
                collider_radius: 0.5,
                hover_height: 0.3,
            },
            sun: KindConfig {
                placement: PlacementConstraints::default()
                    .with_count(5, 8)
                    .with_scale(0.8, 1.2)
                    .with_spacing(10.0, 8.0),
                collider_radius: 1.0,
                hover_height: 3.0,
            },
            tumbleweed: KindConfig {
                placement: PlacementConstraints::default()
                    .with_count(4, 6)
                    .with_scale(0.7, 1.1)
                    .with_spacing(10.0, 6.0),
                collider_radius: 0.8,
                hover_height: roam.rest_height,
            },
            roam,
            pulse: PulseConfig::default(),
            fallback_ground: FlatGround::default(),
            hitbox_segments: 24,
        }
    }
}

impl SimConfig {
    /// Per-kind tuning. `Player` has no placement and falls back to the defaults.
    pub fn kind(&self, kind: InstanceKind) -> KindConfig {
        match kind {
            InstanceKind::Cactus => self.cactus,
            InstanceKind::Can => self.can,
            InstanceKind::Sun => self.sun,
            InstanceKind::Tumbleweed => self.tumbleweed,
            InstanceKind::Player => KindConfig {
                collider_radius: self.player.radius,
                ..KindConfig::default()
            },
        }
    }
}
