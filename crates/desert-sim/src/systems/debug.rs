//! Debug rendering: opt-in hitbox visualization.
//!
//! Build outlines each frame from the current colliders and hand them to the host as
//! line strips. Nothing here affects the simulation.

use std::f32::consts::TAU;

use crate::core::registry::Collider;
use crate::terrain::GroundQuery;

/// Lift above the ground so outlines don't z-fight with the terrain.
pub const OUTLINE_LIFT: f32 = 0.05;

/// A closed line strip in world space.
#[derive(Debug, Clone, PartialEq)]
pub struct DebugLine {
    pub points: Vec<[f32; 3]>,
}

impl DebugLine {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Ground-hugging circle outlines for every collider.
///
/// Each outline has `segments + 1` points; the last repeats the first to close the loop.
/// Fewer than 3 segments is raised to 3.
pub fn hitbox_outlines<G: GroundQuery + ?Sized>(
    colliders: &[Collider],
    ground: &G,
    segments: usize,
) -> Vec<DebugLine> {
    let segments = segments.max(3);
    colliders
        .iter()
        .map(|c| DebugLine {
            points: circle_outline(c, ground, segments),
        })
        .collect()
}

fn circle_outline<G: GroundQuery + ?Sized>(c: &Collider, ground: &G, segments: usize) -> Vec<[f32; 3]> {
    let mut points = Vec::with_capacity(segments + 1);
    for i in 0..segments {
        let angle = (i as f32 / segments as f32) * TAU;
        let x = c.x + angle.cos() * c.radius;
        let z = c.z + angle.sin() * c.radius;
        points.push([x, ground.height_at(x, z) + OUTLINE_LIFT, z]);
    }
    // Close the loop
    if let Some(&first) = points.first() {
        points.push(first);
    }
    points
}

/// Flatten outlines into `[x, y, z]` floats plus per-line point counts for the host.
pub fn flatten_lines(lines: &[DebugLine], floats: &mut Vec<f32>, counts: &mut Vec<u32>) {
    floats.clear();
    counts.clear();
    for line in lines {
        counts.push(line.points.len() as u32);
        floats.extend(line.points.iter().flatten());
    }
}
