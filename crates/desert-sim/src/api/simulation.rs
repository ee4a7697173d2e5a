use std::f32::consts::TAU;

use glam::{Vec2, Vec3};
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::api::config::SimConfig;
use crate::api::types::{InstanceId, InstanceKind, SimEvent};
use crate::assets::manifest::WorldManifest;
use crate::assets::mesh::MeshSource;
use crate::components::instance::{Instance, PulseState};
use crate::core::registry::{Collider, InstanceRegistry};
use crate::error::SimError;
use crate::input::queue::{Command, InputEvent, InputQueue};
use crate::player::PlayerAgent;
use crate::systems::animation::{tick_pulses, PulseConfig};
use crate::systems::debug::{hitbox_outlines, DebugLine};
use crate::systems::placement::place;
use crate::systems::roam::tick_roaming;
use crate::terrain::Terrain;

/// Seed used when a manifest doesn't name one and the caller has no entropy to offer.
pub const DEFAULT_SEED: u64 = 0x5eed_d35e_47;

/// Which movement commands are currently held down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ControlState {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
}

impl ControlState {
    fn set(&mut self, command: Command, down: bool) {
        match command {
            Command::MoveForward => self.forward = down,
            Command::MoveBackward => self.backward = down,
            Command::RotateLeft => self.left = down,
            Command::RotateRight => self.right = down,
            Command::Restart | Command::ToggleHitboxes => {}
        }
    }

    pub fn any(&self) -> bool {
        self.forward || self.backward || self.left || self.right
    }
}

/// The whole game world: terrain, props, player, and the per-update event queue.
///
/// Drive it with [`Simulation::handle_input`] and [`Simulation::update`], then read
/// [`Simulation::events`] and [`Simulation::snapshot`]. Nothing here is global.
pub struct Simulation {
    config: SimConfig,
    terrain: Terrain,
    cacti: InstanceRegistry,
    cans: InstanceRegistry,
    suns: InstanceRegistry,
    tumbleweeds: InstanceRegistry,
    player: PlayerAgent,
    controls: ControlState,
    rng: StdRng,
    ticks: u64,
    game_over: bool,
    show_hitboxes: bool,
    restart_requested: bool,
    /// Events from the most recent update.
    events: Vec<SimEvent>,
}

impl Simulation {
    /// Build a world on `terrain`: scatter every prop kind and put the player at the center.
    pub fn new(config: SimConfig, terrain: Terrain, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut next_id = 1;
        let spawn = terrain.center();

        let cacti = populate(InstanceKind::Cactus, &config, &terrain, spawn, &mut rng, &mut next_id);
        let cans = populate(InstanceKind::Can, &config, &terrain, spawn, &mut rng, &mut next_id);
        let mut suns = populate(InstanceKind::Sun, &config, &terrain, spawn, &mut rng, &mut next_id);
        let mut tumbleweeds =
            populate(InstanceKind::Tumbleweed, &config, &terrain, spawn, &mut rng, &mut next_id);

        for sun in suns.iter_mut() {
            sun.pulse = Some(PulseState {
                phase: rng.gen::<f32>() * TAU,
            });
        }
        for weed in tumbleweeds.iter_mut() {
            weed.roam = Some(config.roam.initial_state(&mut rng));
        }

        info!(
            "world ready (seed {seed}): {} cacti, {} cans, {} suns, {} tumbleweeds on {} ground",
            cacti.len(),
            cans.len(),
            suns.len(),
            tumbleweeds.len(),
            if terrain.is_flat() { "flat" } else { "mesh" }
        );

        let mut player = PlayerAgent::new(config.player, config.energy);
        player.reset_to_origin(&terrain);

        Self {
            config,
            terrain,
            cacti,
            cans,
            suns,
            tumbleweeds,
            player,
            controls: ControlState::default(),
            rng,
            ticks: 0,
            game_over: false,
            show_hitboxes: false,
            restart_requested: false,
            events: Vec::with_capacity(16),
        }
    }

    /// Parse a manifest and build the world it describes. Uses the manifest seed, or
    /// [`DEFAULT_SEED`] when it has none.
    pub fn from_manifest(json: &str, meshes: &dyn MeshSource) -> Result<Self, SimError> {
        let manifest = WorldManifest::from_json(json)?;
        let seed = manifest.seed.unwrap_or(DEFAULT_SEED);
        Ok(Self::from_world(manifest, meshes, seed))
    }

    /// Build from an already parsed manifest. A missing or broken terrain mesh falls back to
    /// flat ground.
    pub fn from_world(manifest: WorldManifest, meshes: &dyn MeshSource, seed: u64) -> Self {
        let fallback = manifest.config.fallback_ground;
        let terrain = match meshes.load_mesh(&manifest.terrain.mesh) {
            Ok(mesh) => Terrain::from_mesh(
                &mesh,
                manifest.terrain.scale,
                manifest.terrain.offset,
                fallback,
            ),
            Err(err) => {
                warn!("terrain: {err}; using flat ground (half extent {})", fallback.half_extent);
                Terrain::Flat(fallback)
            }
        };
        Self::new(manifest.config, terrain, seed)
    }

    // -- Input --

    /// Apply queued commands. Movement keys only change the held state; the actual moves
    /// happen in [`Simulation::update`]. A restart press takes effect at the next update.
    pub fn handle_input(&mut self, input: &InputQueue) {
        for event in input.iter() {
            match *event {
                InputEvent::Pressed(cmd) if cmd.is_held() => self.controls.set(cmd, true),
                InputEvent::Released(cmd) if cmd.is_held() => self.controls.set(cmd, false),
                InputEvent::Pressed(Command::Restart) => self.restart_requested = true,
                InputEvent::Pressed(Command::ToggleHitboxes) => {
                    self.show_hitboxes = !self.show_hitboxes;
                    debug!("hitboxes {}", if self.show_hitboxes { "on" } else { "off" });
                }
                InputEvent::Pressed(_) | InputEvent::Released(_) => {}
            }
        }
    }

    // -- Stepping --

    /// Advance the world by `dt` seconds.
    ///
    /// Order: pending restart, prop systems, held movement, energy and pickups, game over.
    /// Clears the previous update's events first.
    pub fn update(&mut self, dt: f32) {
        self.events.clear();

        if self.restart_requested {
            self.restart_requested = false;
            self.reset_world();
        }

        if !(dt > 0.0) {
            return;
        }
        self.ticks += 1;

        tick_roaming(&mut self.tumbleweeds, &self.terrain, &self.config.roam, &mut self.rng, dt);
        tick_pulses(&mut self.suns, &self.config.pulse, dt);

        if self.game_over {
            return;
        }

        self.apply_controls(dt);
        self.player
            .update_energy_system(dt, &mut self.suns, &mut self.cans, &mut self.events);

        // A sun refill in the same step can lift the meter again after it emptied.
        let emptied = self.events.contains(&SimEvent::EnergyEmpty);
        if emptied || self.player.energy().is_empty() {
            self.game_over = true;
            let score = self.player.score();
            info!("game over: out of energy with {score} cans after {} ticks", self.ticks);
            self.events.push(SimEvent::GameOver { score });
        }
    }

    fn apply_controls(&mut self, dt: f32) {
        let controls = self.controls;
        if controls.left {
            self.player.rotate_left(dt);
        }
        if controls.right {
            self.player.rotate_right(dt);
        }

        let obstacles: Vec<&InstanceRegistry> =
            [&self.cacti, &self.cans, &self.suns, &self.tumbleweeds]
                .into_iter()
                .filter(|reg| reg.kind().is_obstacle())
                .collect();
        if controls.forward {
            self.player.move_forward(dt, &self.terrain, &obstacles);
        }
        if controls.backward {
            self.player.move_backward(dt, &self.terrain, &obstacles);
        }
    }

    /// Put the player back at the spawn point with full energy, bring every prop back,
    /// and clear game over. Reports [`SimEvent::Restarted`] in [`Simulation::events`].
    pub fn restart(&mut self) {
        self.events.clear();
        self.restart_requested = false;
        self.reset_world();
    }

    fn reset_world(&mut self) {
        self.player.reset_to_origin(&self.terrain);
        self.player.reset_score();
        for reg in [&mut self.cacti, &mut self.cans, &mut self.suns, &mut self.tumbleweeds] {
            reg.respawn();
        }
        self.controls = ControlState::default();
        self.game_over = false;
        info!("restart after {} ticks", self.ticks);
        self.events.push(SimEvent::Restarted);
    }

    // -- Queries --

    /// Events emitted during the most recent update (or restart).
    pub fn events(&self) -> &[SimEvent] {
        &self.events
    }

    /// Read-only view for renderers and UI, valid until the next mutation.
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            player_pos: self.player.pos(),
            player_heading: self.player.heading(),
            cacti: self.cacti.as_slice(),
            cans: self.cans.as_slice(),
            suns: self.suns.as_slice(),
            tumbleweeds: self.tumbleweeds.as_slice(),
            pulse: self.config.pulse,
            energy_percent: self.energy_percent(),
            score: self.score(),
            remaining_cans: self.remaining_cans(),
            remaining_suns: self.remaining_suns(),
            game_over: self.game_over,
            show_hitboxes: self.show_hitboxes,
        }
    }

    pub fn energy_percent(&self) -> f32 {
        self.player.energy().percent()
    }

    pub fn score(&self) -> u32 {
        self.player.score()
    }

    pub fn remaining_cans(&self) -> usize {
        self.cans.active_count()
    }

    pub fn remaining_suns(&self) -> usize {
        self.suns.active_count()
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn show_hitboxes(&self) -> bool {
        self.show_hitboxes
    }

    pub fn controls(&self) -> ControlState {
        self.controls
    }

    /// Fixed steps run so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn terrain(&self) -> &Terrain {
        &self.terrain
    }

    pub fn player(&self) -> &PlayerAgent {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut PlayerAgent {
        &mut self.player
    }

    pub fn registry(&self, kind: InstanceKind) -> Option<&InstanceRegistry> {
        match kind {
            InstanceKind::Cactus => Some(&self.cacti),
            InstanceKind::Can => Some(&self.cans),
            InstanceKind::Sun => Some(&self.suns),
            InstanceKind::Tumbleweed => Some(&self.tumbleweeds),
            InstanceKind::Player => None,
        }
    }

    pub fn registry_mut(&mut self, kind: InstanceKind) -> Option<&mut InstanceRegistry> {
        match kind {
            InstanceKind::Cactus => Some(&mut self.cacti),
            InstanceKind::Can => Some(&mut self.cans),
            InstanceKind::Sun => Some(&mut self.suns),
            InstanceKind::Tumbleweed => Some(&mut self.tumbleweeds),
            InstanceKind::Player => None,
        }
    }

    /// Collision circles of the player and every active prop.
    pub fn colliders(&self) -> Vec<Collider> {
        let pos = self.player.pos();
        let mut colliders = vec![Collider {
            x: pos.x,
            z: pos.z,
            radius: self.player.config().radius,
        }];
        for reg in [&self.cacti, &self.cans, &self.suns, &self.tumbleweeds] {
            colliders.extend(reg.collision_data());
        }
        colliders
    }

    /// Outlines for every collider, whether or not hitboxes are toggled on.
    pub fn hitbox_lines(&self) -> Vec<DebugLine> {
        hitbox_outlines(&self.colliders(), &self.terrain, self.config.hitbox_segments)
    }
}

fn populate(
    kind: InstanceKind,
    config: &SimConfig,
    terrain: &Terrain,
    spawn: Vec2,
    rng: &mut StdRng,
    next_id: &mut u32,
) -> InstanceRegistry {
    let kind_config = config.kind(kind);
    let constraints = kind_config.placement.with_origin(spawn);
    let mut registry = InstanceRegistry::new(kind, kind_config.collider_radius);

    for p in place(terrain, &constraints, rng) {
        let id = InstanceId(*next_id);
        *next_id += 1;
        registry.spawn(
            Instance::new(id, kind)
                .with_pos(Vec3::new(p.x, p.ground_height + kind_config.hover_height, p.z))
                .with_rotation(p.rotation)
                .with_scale(p.scale),
        );
    }
    debug!("placed {} {} instances", registry.len(), kind.name());
    registry
}

/// Read-only view of one frame.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub player_pos: Vec3,
    /// Degrees, 0 faces +z.
    pub player_heading: f32,
    /// All instances per kind, collected ones included; filter with `is_active`.
    pub cacti: &'a [Instance],
    pub cans: &'a [Instance],
    pub suns: &'a [Instance],
    pub tumbleweeds: &'a [Instance],
    pub pulse: PulseConfig,
    pub energy_percent: f32,
    pub score: u32,
    pub remaining_cans: usize,
    pub remaining_suns: usize,
    pub game_over: bool,
    pub show_hitboxes: bool,
}

impl<'a> Snapshot<'a> {
    /// Every active prop, in kind order.
    pub fn active_instances(&self) -> impl Iterator<Item = &'a Instance> {
        self.cacti
            .iter()
            .chain(self.cans)
            .chain(self.suns)
            .chain(self.tumbleweeds)
            .filter(|i| i.is_active())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::mesh::{InMemoryMeshSource, TerrainMesh};
    use crate::terrain::{FlatGround, GroundQuery};

    /// Config with nothing placed, so tests control every prop.
    fn bare_config() -> SimConfig {
        let mut cfg = SimConfig::default();
        for kind in [&mut cfg.cactus, &mut cfg.can, &mut cfg.sun, &mut cfg.tumbleweed] {
            kind.placement.count_range = (0, 0);
        }
        cfg
    }

    fn flat(half_extent: f32) -> Terrain {
        Terrain::Flat(FlatGround {
            half_extent,
            height: 0.0,
        })
    }

    fn bare_sim() -> Simulation {
        Simulation::new(bare_config(), flat(50.0), 1)
    }

    fn press(sim: &mut Simulation, cmd: Command) {
        let mut q = InputQueue::new();
        q.push(InputEvent::Pressed(cmd));
        sim.handle_input(&q);
    }

    fn release(sim: &mut Simulation, cmd: Command) {
        let mut q = InputQueue::new();
        q.push(InputEvent::Released(cmd));
        sim.handle_input(&q);
    }

    #[test]
    fn default_world_is_populated_and_player_spawns_clear() {
        let sim = Simulation::new(SimConfig::default(), Terrain::default(), 42);
        let snap = sim.snapshot();
        assert!(snap.cacti.len() <= 25);
        assert!(!snap.cans.is_empty());
        assert!(!snap.suns.is_empty());
        assert_eq!(snap.player_pos, Vec3::ZERO);
        assert_eq!(snap.energy_percent, 100.0);
        assert_eq!(snap.remaining_cans, snap.cans.len());

        let p = sim.player();
        for reg in [InstanceKind::Cactus, InstanceKind::Tumbleweed] {
            assert!(!sim.registry(reg).unwrap().blocks(p.pos().x, p.pos().z, p.config().radius));
        }
        assert!(snap.suns.iter().all(|s| s.pulse.is_some()));
        assert!(snap.tumbleweeds.iter().all(|t| t.roam.is_some()));
    }

    #[test]
    fn instance_ids_are_unique() {
        let sim = Simulation::new(SimConfig::default(), Terrain::default(), 3);
        let snap = sim.snapshot();
        let mut ids: Vec<u32> = snap
            .cacti
            .iter()
            .chain(snap.cans)
            .chain(snap.suns)
            .chain(snap.tumbleweeds)
            .map(|i| i.id.0)
            .collect();
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }

    #[test]
    fn same_seed_same_world() {
        let a = Simulation::new(SimConfig::default(), Terrain::default(), 9);
        let b = Simulation::new(SimConfig::default(), Terrain::default(), 9);
        assert_eq!(a.snapshot().cans, b.snapshot().cans);
        assert_eq!(a.snapshot().cacti, b.snapshot().cacti);
    }

    #[test]
    fn held_forward_moves_every_update() {
        let mut sim = bare_sim();
        press(&mut sim, Command::MoveForward);
        sim.update(0.5);
        sim.update(0.5);
        let pos = sim.player().pos();
        assert!((pos.z - 5.0).abs() < 1e-4);
        assert!(sim.player().energy().current() < 100.0);

        release(&mut sim, Command::MoveForward);
        sim.update(0.5);
        assert!((sim.player().pos().z - 5.0).abs() < 1e-4);
    }

    #[test]
    fn tumbleweed_blocks_forward_move() {
        let mut sim = bare_sim();
        sim.registry_mut(InstanceKind::Tumbleweed).unwrap().spawn(
            Instance::new(InstanceId(100), InstanceKind::Tumbleweed)
                .with_pos(Vec3::new(0.0, 0.5, 2.0)),
        );
        press(&mut sim, Command::MoveForward);
        sim.update(0.2);
        assert_eq!(sim.player().pos(), Vec3::ZERO);
        assert!(!sim.is_game_over());
    }

    #[test]
    fn cans_and_suns_do_not_block() {
        let mut sim = bare_sim();
        sim.registry_mut(InstanceKind::Sun).unwrap().spawn(
            Instance::new(InstanceId(100), InstanceKind::Sun).with_pos(Vec3::new(0.0, 3.0, 30.0)),
        );
        sim.registry_mut(InstanceKind::Can).unwrap().spawn(
            Instance::new(InstanceId(101), InstanceKind::Can).with_pos(Vec3::new(0.0, 0.0, 20.0)),
        );
        press(&mut sim, Command::MoveForward);
        for _ in 0..10 {
            sim.update(0.5);
        }
        assert!((sim.player().pos().z - 25.0).abs() < 1e-3);
    }

    #[test]
    fn emptying_ends_the_game_even_if_a_sun_refills_the_same_step() {
        let mut cfg = bare_config();
        cfg.player.sun_detection_radius = 1.0;
        cfg.player.sun_pickup_radius = 5.0;
        let mut sim = Simulation::new(cfg, flat(50.0), 1);
        sim.registry_mut(InstanceKind::Sun).unwrap().spawn(
            Instance::new(InstanceId(100), InstanceKind::Sun).with_pos(Vec3::new(0.0, 3.0, 3.0)),
        );
        sim.player_mut().energy_mut().set_current(0.05);
        sim.update(1.0);

        assert!(sim.player().energy().current() > 0.0);
        assert!(sim.events().contains(&SimEvent::EnergyEmpty));
        assert!(sim.is_game_over());
        assert_eq!(sim.events().last(), Some(&SimEvent::GameOver { score: 0 }));
    }

    #[test]
    fn restart_release_is_ignored() {
        let mut sim = bare_sim();
        release(&mut sim, Command::Restart);
        sim.update(0.1);
        assert!(sim.events().is_empty());
        assert_eq!(sim.controls(), ControlState::default());
    }

    #[test]
    fn rotate_then_move() {
        let mut sim = bare_sim();
        press(&mut sim, Command::RotateRight);
        sim.update(1.0);
        release(&mut sim, Command::RotateRight);
        assert_eq!(sim.player().heading(), 270.0);

        press(&mut sim, Command::MoveForward);
        sim.update(1.0);
        // 270 degrees faces -x
        assert!((sim.player().pos().x + 5.0).abs() < 1e-4);
        assert!(sim.player().pos().z.abs() < 1e-4);
    }

    #[test]
    fn empty_energy_ends_the_game_and_blocks_movement() {
        let mut sim = bare_sim();
        sim.player_mut().energy_mut().set_current(0.5);
        press(&mut sim, Command::MoveForward);
        sim.update(1.0);

        assert!(sim.is_game_over());
        assert_eq!(
            sim.events(),
            &[SimEvent::EnergyEmpty, SimEvent::GameOver { score: 0 }]
        );

        let before = sim.player().pos();
        sim.update(1.0);
        assert_eq!(sim.player().pos(), before);
        assert!(sim.events().is_empty());
    }

    #[test]
    fn restart_command_applies_on_next_update() {
        let mut sim = bare_sim();
        sim.player_mut().energy_mut().set_current(0.01);
        sim.update(1.0);
        assert!(sim.is_game_over());

        press(&mut sim, Command::Restart);
        assert!(sim.is_game_over());
        sim.update(1.0 / 60.0);

        assert!(!sim.is_game_over());
        assert_eq!(sim.events().first(), Some(&SimEvent::Restarted));
        assert!(sim.energy_percent() > 99.0);
        assert_eq!(sim.player().pos(), Vec3::ZERO);
    }

    #[test]
    fn restart_resets_score_and_collectibles() {
        let mut sim = bare_sim();
        let can = Instance::new(InstanceId(100), InstanceKind::Can).with_pos(Vec3::new(5.0, 0.0, 5.0));
        sim.registry_mut(InstanceKind::Can).unwrap().spawn(can);

        let ground = sim.terrain().clone();
        sim.player_mut().teleport(5.0, 5.5, &ground);
        sim.update(0.1);
        assert_eq!(sim.score(), 1);
        assert_eq!(sim.remaining_cans(), 0);
        assert!(sim
            .events()
            .contains(&SimEvent::CanCollected { score: 1, remaining: 0 }));

        sim.restart();
        assert_eq!(sim.events(), &[SimEvent::Restarted]);
        assert_eq!(sim.score(), 0);
        assert_eq!(sim.remaining_cans(), 1);
        assert_eq!(sim.player().pos(), Vec3::ZERO);
    }

    #[test]
    fn standing_near_a_sun_recharges() {
        let mut sim = bare_sim();
        sim.registry_mut(InstanceKind::Sun).unwrap().spawn(
            Instance::new(InstanceId(100), InstanceKind::Sun).with_pos(Vec3::new(0.0, 3.0, 5.0)),
        );
        sim.player_mut().energy_mut().set_current(50.0);
        sim.update(1.0);
        assert_eq!(sim.player().energy().current(), 75.0);
        assert_eq!(sim.remaining_suns(), 1);
    }

    #[test]
    fn hitbox_toggle_and_lines() {
        let mut sim = Simulation::new(SimConfig::default(), Terrain::default(), 5);
        assert!(!sim.show_hitboxes());
        press(&mut sim, Command::ToggleHitboxes);
        assert!(sim.show_hitboxes());
        assert!(sim.snapshot().show_hitboxes);

        let lines = sim.hitbox_lines();
        assert_eq!(lines.len(), sim.colliders().len());
        assert_eq!(lines[0].len(), sim.config().hitbox_segments + 1);

        press(&mut sim, Command::ToggleHitboxes);
        assert!(!sim.show_hitboxes());
    }

    #[test]
    fn zero_or_negative_dt_does_nothing() {
        let mut sim = bare_sim();
        press(&mut sim, Command::MoveForward);
        sim.update(0.0);
        sim.update(-1.0);
        assert_eq!(sim.ticks(), 0);
        assert_eq!(sim.player().pos(), Vec3::ZERO);
    }

    #[test]
    fn from_manifest_uses_named_mesh() {
        let mesh = TerrainMesh::new(
            vec![
                Vec3::new(-30.0, 0.0, -30.0),
                Vec3::new(30.0, 0.0, -30.0),
                Vec3::new(30.0, 0.0, 30.0),
                Vec3::new(-30.0, 0.0, 30.0),
            ],
            vec![[0, 1, 2], [0, 2, 3]],
        );
        let meshes = InMemoryMeshSource::new().with_mesh("dunes", mesh);
        let json = r#"{
            "terrain": { "mesh": "dunes", "scale": 2.0, "offset": [0.0, 4.0, 0.0] },
            "seed": 7
        }"#;
        let sim = Simulation::from_manifest(json, &meshes).unwrap();
        assert!(!sim.terrain().is_flat());
        assert_eq!(sim.terrain().bounds().max_x, 60.0);
        assert_eq!(sim.player().pos(), Vec3::new(0.0, 4.0, 0.0));
    }

    #[test]
    fn missing_mesh_falls_back_to_flat() {
        let json = r#"{ "terrain": { "mesh": "nowhere" } }"#;
        let sim = Simulation::from_manifest(json, &InMemoryMeshSource::new()).unwrap();
        assert!(sim.terrain().is_flat());
    }

    #[test]
    fn bad_manifest_is_an_error() {
        assert!(Simulation::from_manifest("[]", &InMemoryMeshSource::new()).is_err());
    }
}
