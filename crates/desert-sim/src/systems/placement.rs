//! Rejection-sampling scatter used for every prop kind.

use glam::Vec2;
use log::{trace, warn};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::components::instance::wrap_degrees;
use crate::terrain::GroundQuery;

/// Spacing and size rules for one prop kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementConstraints {
    /// Inclusive instance count range; the target is drawn once per placement.
    pub count_range: (u32, u32),
    /// Inclusive per-instance scale range.
    pub scale_range: (f32, f32),
    /// Keep-out radius around `origin`.
    pub min_distance_from_origin: f32,
    /// Minimum ground distance between two accepted placements.
    pub min_distance_between: f32,
    /// Attempt budget as a multiple of the target count.
    pub attempts_per_instance: u32,
    /// Center of the keep-out zone (normally the player spawn).
    pub origin: Vec2,
}

impl Default for PlacementConstraints {
    fn default() -> Self {
        Self {
            count_range: (10, 15),
            scale_range: (0.8, 1.2),
            min_distance_from_origin: 5.0,
            min_distance_between: 4.0,
            attempts_per_instance: 10,
            origin: Vec2::ZERO,
        }
    }
}

impl PlacementConstraints {
    pub fn with_count(mut self, min: u32, max: u32) -> Self {
        self.count_range = (min, max);
        self
    }

    pub fn with_scale(mut self, min: f32, max: f32) -> Self {
        self.scale_range = (min, max);
        self
    }

    pub fn with_spacing(mut self, from_origin: f32, between: f32) -> Self {
        self.min_distance_from_origin = from_origin;
        self.min_distance_between = between;
        self
    }

    pub fn with_origin(mut self, origin: Vec2) -> Self {
        self.origin = origin;
        self
    }
}

/// One accepted placement, resolved against the ground.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementResult {
    pub x: f32,
    pub z: f32,
    pub ground_height: f32,
    pub scale: f32,
    /// Degrees, [0, 360).
    pub rotation: f32,
}

impl PlacementResult {
    pub fn ground_pos(&self) -> Vec2 {
        Vec2::new(self.x, self.z)
    }
}

/// Scatter instances over the ground.
///
/// Draws a target count from `count_range`, then samples candidates uniformly inside the
/// ground bounds until the target is met or `target * attempts_per_instance` draws are
/// used up. Candidates outside the footprint, too close to the origin, or too close to an
/// already accepted placement are rejected. A short result is not an error.
pub fn place<G, R>(ground: &G, constraints: &PlacementConstraints, rng: &mut R) -> Vec<PlacementResult>
where
    G: GroundQuery + ?Sized,
    R: Rng + ?Sized,
{
    let (lo, hi) = ordered(constraints.count_range.0, constraints.count_range.1);
    let target = rng.gen_range(lo..=hi) as usize;
    let max_attempts = target * constraints.attempts_per_instance as usize;

    let bounds = ground.bounds();
    let (min_scale, max_scale) = ordered(constraints.scale_range.0, constraints.scale_range.1);

    let mut accepted: Vec<PlacementResult> = Vec::with_capacity(target);
    let mut attempts = 0;

    while accepted.len() < target && attempts < max_attempts {
        attempts += 1;

        let x = bounds.min_x + rng.gen::<f32>() * bounds.width();
        let z = bounds.min_z + rng.gen::<f32>() * bounds.depth();
        let candidate = Vec2::new(x, z);

        if !ground.is_within_footprint(x, z) {
            continue;
        }
        if candidate.distance(constraints.origin) < constraints.min_distance_from_origin {
            continue;
        }
        if accepted
            .iter()
            .any(|p| p.ground_pos().distance(candidate) < constraints.min_distance_between)
        {
            continue;
        }

        accepted.push(PlacementResult {
            x,
            z,
            ground_height: ground.height_at(x, z),
            scale: min_scale + rng.gen::<f32>() * (max_scale - min_scale),
            rotation: wrap_degrees(rng.gen::<f32>() * 360.0),
        });
    }

    if accepted.len() < target {
        warn!(
            "placement: accepted {} of {} after {} attempts",
            accepted.len(),
            target,
            attempts
        );
    } else {
        trace!("placement: {} placed in {} attempts", target, attempts);
    }

    accepted
}

fn ordered<T: PartialOrd>(a: T, b: T) -> (T, T) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
