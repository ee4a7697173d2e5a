use glam::{Vec2, Vec3};
use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::api::types::SimEvent;
use crate::components::instance::{heading_direction, wrap_degrees};
use crate::core::registry::InstanceRegistry;
use crate::player::energy::{EnergyBudget, EnergyConfig, EnergyEvent};
use crate::terrain::GroundQuery;

/// Movement and pickup tuning for the player.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Ground units per second.
    pub speed: f32,
    /// Degrees per second.
    pub turn_rate: f32,
    /// Collision radius against obstacles.
    pub radius: f32,
    /// Suns closer than this recharge the meter.
    pub sun_detection_radius: f32,
    pub can_pickup_radius: f32,
    pub sun_pickup_radius: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            speed: 5.0,
            turn_rate: 90.0,
            radius: 1.0,
            sun_detection_radius: 7.0,
            can_pickup_radius: 3.0,
            sun_pickup_radius: 3.0,
        }
    }
}

/// The player-controlled robot.
///
/// Position `y` always comes from the ground; only `x`, `z` and heading are driven by
/// commands. Moves that leave the footprint or hit an obstacle are dropped whole.
#[derive(Debug, Clone)]
pub struct PlayerAgent {
    config: PlayerConfig,
    pos: Vec3,
    /// Degrees, [0, 360). 0 faces +z.
    heading: f32,
    /// Set by any accepted move or turn, cleared after each energy update.
    is_moving: bool,
    energy: EnergyBudget,
    cans_collected: u32,
    suns_collected: u32,
}

impl PlayerAgent {
    pub fn new(config: PlayerConfig, energy: EnergyConfig) -> Self {
        Self {
            config,
            pos: Vec3::ZERO,
            heading: 0.0,
            is_moving: false,
            energy: EnergyBudget::new(energy),
            cans_collected: 0,
            suns_collected: 0,
        }
    }

    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }

    pub fn pos(&self) -> Vec3 {
        self.pos
    }

    pub fn ground_pos(&self) -> Vec2 {
        Vec2::new(self.pos.x, self.pos.z)
    }

    pub fn heading(&self) -> f32 {
        self.heading
    }

    pub fn is_moving(&self) -> bool {
        self.is_moving
    }

    pub fn energy(&self) -> &EnergyBudget {
        &self.energy
    }

    pub fn energy_mut(&mut self) -> &mut EnergyBudget {
        &mut self.energy
    }

    /// Cans picked up this session.
    pub fn score(&self) -> u32 {
        self.cans_collected
    }

    pub fn suns_collected(&self) -> u32 {
        self.suns_collected
    }

    /// Center on the ground, face north, full energy.
    pub fn reset_to_origin<G: GroundQuery + ?Sized>(&mut self, ground: &G) {
        let center = ground.bounds().center();
        self.heading = 0.0;
        self.is_moving = false;
        self.energy.reset();
        self.teleport(center.x, center.y, ground);
        debug!("player reset to ({:.2}, {:.2}, {:.2})", self.pos.x, self.pos.y, self.pos.z);
    }

    pub fn reset_score(&mut self) {
        self.cans_collected = 0;
        self.suns_collected = 0;
    }

    /// Place at (x, z) and re-ground. No collision checks.
    pub fn teleport<G: GroundQuery + ?Sized>(&mut self, x: f32, z: f32, ground: &G) {
        self.pos = Vec3::new(x, ground.height_at(x, z), z);
    }

    pub fn set_heading(&mut self, heading: f32) {
        self.heading = wrap_degrees(heading);
    }

    pub fn move_forward<G: GroundQuery + ?Sized>(
        &mut self,
        dt: f32,
        ground: &G,
        obstacles: &[&InstanceRegistry],
    ) -> bool {
        self.try_move(self.config.speed * dt, ground, obstacles)
    }

    pub fn move_backward<G: GroundQuery + ?Sized>(
        &mut self,
        dt: f32,
        ground: &G,
        obstacles: &[&InstanceRegistry],
    ) -> bool {
        self.try_move(-self.config.speed * dt, ground, obstacles)
    }

    pub fn rotate_left(&mut self, dt: f32) {
        self.turn(self.config.turn_rate * dt);
    }

    pub fn rotate_right(&mut self, dt: f32) {
        self.turn(-self.config.turn_rate * dt);
    }

    fn turn(&mut self, degrees: f32) {
        self.heading = wrap_degrees(self.heading + degrees);
        self.is_moving = true;
    }

    fn try_move<G: GroundQuery + ?Sized>(
        &mut self,
        distance: f32,
        ground: &G,
        obstacles: &[&InstanceRegistry],
    ) -> bool {
        if self.energy.is_empty() {
            debug!("move ignored: out of energy");
            return false;
        }

        let candidate = self.ground_pos() + heading_direction(self.heading) * distance;

        if !ground.is_within_footprint(candidate.x, candidate.y) {
            debug!("move rejected: ({:.2}, {:.2}) is off the terrain", candidate.x, candidate.y);
            return false;
        }
        if obstacles
            .iter()
            .any(|reg| reg.blocks(candidate.x, candidate.y, self.config.radius))
        {
            debug!("move rejected: ({:.2}, {:.2}) hits an obstacle", candidate.x, candidate.y);
            return false;
        }

        self.teleport(candidate.x, candidate.y, ground);
        self.is_moving = true;
        true
    }

    /// Whether any active sun is within the detection radius.
    pub fn is_near_sun(&self, suns: &InstanceRegistry) -> bool {
        suns.any_within(self.pos.x, self.pos.z, self.config.sun_detection_radius)
    }

    /// Once-per-tick energy step, after movement has been resolved.
    ///
    /// Integrates the meter, then tries sun and can pickups, then clears the moving flag.
    /// Energy crossings and pickups are pushed onto `events`.
    pub fn update_energy_system(
        &mut self,
        dt: f32,
        suns: &mut InstanceRegistry,
        cans: &mut InstanceRegistry,
        events: &mut Vec<SimEvent>,
    ) {
        let near_sun = self.is_near_sun(suns);
        let mut energy_events = Vec::new();
        self.energy.update(dt, self.is_moving, near_sun, &mut energy_events);
        trace!(
            "energy {:.2} (moving: {}, near sun: {})",
            self.energy.current(),
            self.is_moving,
            near_sun
        );

        if suns.try_collect(self.pos.x, self.pos.z, self.config.sun_pickup_radius) {
            self.suns_collected += 1;
            let bonus = self.energy.config().sun_bonus;
            self.energy.refill(bonus, &mut energy_events);
            events.push(SimEvent::SunCollected {
                percent: self.energy.percent(),
                remaining: suns.active_count(),
            });
        }

        if cans.try_collect(self.pos.x, self.pos.z, self.config.can_pickup_radius) {
            self.cans_collected += 1;
            events.push(SimEvent::CanCollected {
                score: self.cans_collected,
                remaining: cans.active_count(),
            });
        }

        let percent = self.energy.percent();
        events.extend(energy_events.into_iter().map(|e| match e {
            EnergyEvent::Empty => SimEvent::EnergyEmpty,
            EnergyEvent::Low => SimEvent::EnergyLow { percent },
            EnergyEvent::Recovered => SimEvent::EnergyRecovered { percent },
        }));

        self.is_moving = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::{InstanceId, InstanceKind};
    use crate::components::instance::Instance;
    use crate::terrain::FlatGround;

    fn ground() -> FlatGround {
        FlatGround {
            half_extent: 20.0,
            height: 1.0,
        }
    }

    fn player() -> PlayerAgent {
        let mut p = PlayerAgent::new(PlayerConfig::default(), EnergyConfig::default());
        p.reset_to_origin(&ground());
        p
    }

    fn registry(kind: InstanceKind, radius: f32, at: &[(f32, f32)]) -> InstanceRegistry {
        let mut reg = InstanceRegistry::new(kind, radius);
        for (i, &(x, z)) in at.iter().enumerate() {
            reg.spawn(Instance::new(InstanceId(i as u32), kind).with_pos(Vec3::new(x, 0.0, z)));
        }
        reg
    }

    #[test]
    fn reset_centers_and_grounds() {
        let p = player();
        assert_eq!(p.pos(), Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(p.heading(), 0.0);
        assert_eq!(p.energy().percent(), 100.0);
    }

    #[test]
    fn forward_moves_along_heading() {
        let mut p = player();
        assert!(p.move_forward(0.2, &ground(), &[]));
        assert!((p.pos().z - 1.0).abs() < 1e-5);
        assert!(p.pos().x.abs() < 1e-5);
        assert!(p.is_moving());

        assert!(p.move_backward(0.4, &ground(), &[]));
        assert!((p.pos().z + 1.0).abs() < 1e-5);
    }

    #[test]
    fn blocked_by_cactus() {
        let mut p = player();
        let cacti = registry(InstanceKind::Cactus, 2.0, &[(0.0, 2.0)]);
        assert!(!p.move_forward(0.2, &ground(), &[&cacti]));
        assert_eq!(p.ground_pos(), Vec2::ZERO);
        assert!(!p.is_moving());
    }

    #[test]
    fn blocked_at_footprint_edge() {
        let mut p = player();
        p.teleport(0.0, 21.5, &ground());
        // 21.5 + 1.0 is past 20 + margin 2
        assert!(!p.move_forward(0.2, &ground(), &[]));
        assert_eq!(p.pos().z, 21.5);
    }

    #[test]
    fn no_movement_when_empty() {
        let mut p = player();
        p.energy_mut().set_current(0.0);
        assert!(!p.move_forward(0.2, &ground(), &[]));
        assert_eq!(p.ground_pos(), Vec2::ZERO);
    }

    #[test]
    fn rotation_always_succeeds_and_wraps() {
        let mut p = player();
        p.energy_mut().set_current(0.0);
        p.rotate_right(1.0);
        assert_eq!(p.heading(), 270.0);
        p.rotate_left(2.0);
        assert_eq!(p.heading(), 90.0);
        assert!(p.is_moving());

        assert!((0.0..360.0).contains(&p.heading()));
    }

    #[test]
    fn energy_step_clears_moving_flag() {
        let mut p = player();
        let mut suns = registry(InstanceKind::Sun, 1.5, &[]);
        let mut cans = registry(InstanceKind::Can, 0.5, &[]);
        let mut events = Vec::new();

        p.rotate_left(0.1);
        p.update_energy_system(1.0, &mut suns, &mut cans, &mut events);
        assert!(!p.is_moving());
        assert!((p.energy().current() - 98.5).abs() < 1e-4);

        p.update_energy_system(1.0, &mut suns, &mut cans, &mut events);
        assert!((p.energy().current() - 98.4).abs() < 1e-4);
        assert!(events.is_empty());
    }

    #[test]
    fn sun_nearby_recharges_and_pickup_refills() {
        let mut p = player();
        p.energy_mut().set_current(10.0);
        let mut suns = registry(InstanceKind::Sun, 1.5, &[(0.0, 6.0), (2.0, 0.0)]);
        let mut cans = registry(InstanceKind::Can, 0.5, &[]);
        let mut events = Vec::new();

        p.update_energy_system(1.0, &mut suns, &mut cans, &mut events);
        // +25 near sun, +30 for the pickup at (2, 0)
        assert!((p.energy().current() - 65.0).abs() < 1e-4);
        assert_eq!(suns.active_count(), 1);
        assert_eq!(p.suns_collected(), 1);
        assert!(events
            .iter()
            .any(|e| matches!(e, SimEvent::SunCollected { remaining: 1, .. })));
        assert!(events
            .iter()
            .any(|e| matches!(e, SimEvent::EnergyRecovered { .. })));
    }

    #[test]
    fn can_pickup_scores_once() {
        let mut p = player();
        let mut suns = registry(InstanceKind::Sun, 1.5, &[]);
        let mut cans = registry(InstanceKind::Can, 0.5, &[(1.0, 1.0), (15.0, 15.0)]);
        let mut events = Vec::new();

        p.update_energy_system(0.1, &mut suns, &mut cans, &mut events);
        p.update_energy_system(0.1, &mut suns, &mut cans, &mut events);
        assert_eq!(p.score(), 1);
        assert_eq!(
            events,
            vec![SimEvent::CanCollected {
                score: 1,
                remaining: 1
            }]
        );
    }
}
