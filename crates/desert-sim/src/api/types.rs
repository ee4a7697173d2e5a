use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// Unique identifier for a placed instance, stable for the whole session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InstanceId(pub u32);

/// Which kind of thing an instance (or render record) is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstanceKind {
    Player,
    Cactus,
    Can,
    Sun,
    Tumbleweed,
}

impl InstanceKind {
    /// The four kinds that get scattered over the terrain.
    pub const PLACED: [InstanceKind; 4] = [
        InstanceKind::Cactus,
        InstanceKind::Can,
        InstanceKind::Sun,
        InstanceKind::Tumbleweed,
    ];

    /// Can be picked up (and later respawned).
    pub fn is_collectible(self) -> bool {
        matches!(self, InstanceKind::Can | InstanceKind::Sun)
    }

    /// Blocks player movement.
    pub fn is_obstacle(self) -> bool {
        matches!(self, InstanceKind::Cactus | InstanceKind::Tumbleweed)
    }

    /// Numeric tag written into flat buffers.
    pub fn code(self) -> f32 {
        match self {
            InstanceKind::Player => 0.0,
            InstanceKind::Cactus => 1.0,
            InstanceKind::Can => 2.0,
            InstanceKind::Sun => 3.0,
            InstanceKind::Tumbleweed => 4.0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            InstanceKind::Player => "player",
            InstanceKind::Cactus => "cactus",
            InstanceKind::Can => "can",
            InstanceKind::Sun => "sun",
            InstanceKind::Tumbleweed => "tumbleweed",
        }
    }
}

/// Something that happened during one simulation update.
/// Queued for the caller instead of being dispatched from inside the update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SimEvent {
    EnergyLow { percent: f32 },
    EnergyEmpty,
    EnergyRecovered { percent: f32 },
    CanCollected { score: u32, remaining: usize },
    SunCollected { percent: f32, remaining: usize },
    GameOver { score: u32 },
    Restarted,
}

/// Event kind tags used in [`GameEvent::kind`].
pub mod event_kinds {
    pub const ENERGY_LOW: f32 = 1.0;
    pub const ENERGY_EMPTY: f32 = 2.0;
    pub const ENERGY_RECOVERED: f32 = 3.0;
    pub const CAN_COLLECTED: f32 = 4.0;
    pub const SUN_COLLECTED: f32 = 5.0;
    pub const GAME_OVER: f32 = 6.0;
    pub const RESTARTED: f32 = 7.0;
}

impl SimEvent {
    /// Flatten into the fixed 4-float record the host reads.
    pub fn to_game_event(self) -> GameEvent {
        use event_kinds::*;
        match self {
            SimEvent::EnergyLow { percent } => GameEvent::new(ENERGY_LOW, percent, 0.0, 0.0),
            SimEvent::EnergyEmpty => GameEvent::new(ENERGY_EMPTY, 0.0, 0.0, 0.0),
            SimEvent::EnergyRecovered { percent } => {
                GameEvent::new(ENERGY_RECOVERED, percent, 0.0, 0.0)
            }
            SimEvent::CanCollected { score, remaining } => {
                GameEvent::new(CAN_COLLECTED, score as f32, remaining as f32, 0.0)
            }
            SimEvent::SunCollected { percent, remaining } => {
                GameEvent::new(SUN_COLLECTED, percent, remaining as f32, 0.0)
            }
            SimEvent::GameOver { score } => GameEvent::new(GAME_OVER, score as f32, 0.0, 0.0),
            SimEvent::Restarted => GameEvent::new(RESTARTED, 0.0, 0.0, 0.0),
        }
    }
}

/// A game event as read by the host through a flat float buffer.
/// Generic container: `kind` identifies the event, `a/b/c` carry payload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct GameEvent {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl GameEvent {
    pub const FLOATS: usize = 4;

    pub fn new(kind: f32, a: f32, b: f32, c: f32) -> Self {
        Self { kind, a, b, c }
    }
}
