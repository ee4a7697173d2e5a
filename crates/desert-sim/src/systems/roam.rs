//! Tumbleweed roaming: wander, hop, and turn back at the terrain edge.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::components::instance::{heading_direction, wrap_degrees, RoamState};
use crate::core::registry::InstanceRegistry;
use crate::terrain::GroundQuery;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoamConfig {
    /// Ground units per second.
    pub speed: f32,
    /// Seconds between heading changes, drawn from this range each time.
    pub direction_interval: (f32, f32),
    /// Seconds on the ground between hops.
    pub jump_interval: (f32, f32),
    /// Initial upward speed of a hop.
    pub jump_velocity: f32,
    pub gravity: f32,
    /// Height above the ground the instance rests at.
    pub rest_height: f32,
    /// Rolling spin in degrees per second.
    pub roll_speed: f32,
}

impl Default for RoamConfig {
    fn default() -> Self {
        Self {
            speed: 2.0,
            direction_interval: (2.0, 5.0),
            jump_interval: (1.0, 3.0),
            jump_velocity: 4.0,
            gravity: 9.8,
            rest_height: 0.5,
            roll_speed: 120.0,
        }
    }
}

impl RoamConfig {
    /// Fresh motion state with randomized heading and timers.
    pub fn initial_state<R: Rng + ?Sized>(&self, rng: &mut R) -> RoamState {
        RoamState::new(
            rng.gen::<f32>() * 360.0,
            draw(self.direction_interval, rng),
            draw(self.jump_interval, rng),
        )
    }
}

fn draw<R: Rng + ?Sized>((lo, hi): (f32, f32), rng: &mut R) -> f32 {
    lo + rng.gen::<f32>() * (hi - lo)
}

/// Advance one roaming state by `dt`. Returns the new ground position.
fn step<G, R>(
    roam: &mut RoamState,
    x: f32,
    z: f32,
    ground: &G,
    config: &RoamConfig,
    rng: &mut R,
    dt: f32,
) -> (f32, f32)
where
    G: GroundQuery + ?Sized,
    R: Rng + ?Sized,
{
    roam.direction_timer += dt;
    if roam.direction_timer >= roam.direction_interval {
        roam.heading = wrap_degrees(rng.gen::<f32>() * 360.0);
        roam.direction_timer = 0.0;
        roam.direction_interval = draw(config.direction_interval, rng);
    }

    let next = Vec2::new(x, z) + heading_direction(roam.heading) * config.speed * dt;
    let (x, z) = if ground.is_within_footprint(next.x, next.y) {
        (next.x, next.y)
    } else {
        // Bounce off the edge: turn around, stay put this tick.
        roam.heading = wrap_degrees(roam.heading + 180.0);
        (x, z)
    };

    if !roam.jumping {
        roam.jump_timer += dt;
        if roam.jump_timer >= roam.jump_interval {
            roam.jumping = true;
            roam.vertical_velocity = config.jump_velocity;
            roam.jump_timer = 0.0;
            roam.jump_interval = draw(config.jump_interval, rng);
        }
    }

    if roam.jumping {
        roam.hop += roam.vertical_velocity * dt;
        roam.vertical_velocity -= config.gravity * dt;
        if roam.hop <= 0.0 && roam.vertical_velocity < 0.0 {
            roam.hop = 0.0;
            roam.vertical_velocity = 0.0;
            roam.jumping = false;
        }
    }

    (x, z)
}

/// Move every roaming instance in the registry and re-ground it.
pub fn tick_roaming<G, R>(
    registry: &mut InstanceRegistry,
    ground: &G,
    config: &RoamConfig,
    rng: &mut R,
    dt: f32,
) where
    G: GroundQuery + ?Sized,
    R: Rng + ?Sized,
{
    for instance in registry.iter_mut() {
        if !instance.is_active() {
            continue;
        }
        let Some(roam) = instance.roam.as_mut() else {
            continue;
        };

        let (x, z) = step(roam, instance.pos.x, instance.pos.z, ground, config, rng, dt);
        let hop = roam.hop;

        instance.pos.x = x;
        instance.pos.z = z;
        instance.pos.y = ground.height_at(x, z) + config.rest_height + hop;
        instance.rotation = wrap_degrees(instance.rotation + config.roll_speed * dt);
    }
}
