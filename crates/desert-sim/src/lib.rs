pub mod api;
pub mod assets;
pub mod components;
pub mod core;
pub mod error;
pub mod input;
pub mod player;
pub mod renderer;
pub mod systems;
pub mod terrain;

// Re-export key types at crate root for convenience
pub use api::config::{KindConfig, SimConfig};
pub use api::simulation::{ControlState, Simulation, Snapshot, DEFAULT_SEED};
pub use api::types::{GameEvent, InstanceId, InstanceKind, SimEvent};
pub use assets::manifest::{TerrainDescriptor, WorldManifest};
pub use assets::mesh::{FaceVertex, InMemoryMeshSource, MeshSource, TerrainMesh};
pub use components::instance::{Instance, PulseState, RoamState};
pub use crate::core::registry::{Collider, InstanceRegistry};
pub use crate::core::time::FixedTimestep;
pub use error::SimError;
pub use input::queue::{Command, InputEvent, InputQueue};
pub use player::{EnergyBudget, EnergyConfig, EnergyEvent, PlayerAgent, PlayerConfig};
pub use renderer::instance::{RenderBuffer, RenderInstance};
pub use systems::animation::{render_scale, tick_pulses, PulseConfig};
pub use systems::debug::{flatten_lines, hitbox_outlines, DebugLine};
pub use systems::placement::{place, PlacementConstraints, PlacementResult};
pub use systems::render::build_render_buffer;
pub use systems::roam::{tick_roaming, RoamConfig};
pub use terrain::{Bounds, FlatGround, GroundQuery, HeightField, Terrain, FOOTPRINT_MARGIN};
