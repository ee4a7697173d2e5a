use glam::Vec3;
use log::debug;

use crate::api::types::{InstanceId, InstanceKind};
use crate::components::instance::Instance;

/// Circle on the ground plane used for obstacle tests and hitbox drawing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Collider {
    pub x: f32,
    pub z: f32,
    pub radius: f32,
}

impl Collider {
    /// True when a circle of `radius` at (x, z) overlaps this collider.
    pub fn overlaps(&self, x: f32, z: f32, radius: f32) -> bool {
        let dx = x - self.x;
        let dz = z - self.z;
        (dx * dx + dz * dz).sqrt() < radius + self.radius
    }
}

/// Flat storage for all instances of one kind.
///
/// The instance count is fixed once placement is done; pickups and respawns only
/// toggle flags.
#[derive(Debug, Clone)]
pub struct InstanceRegistry {
    kind: InstanceKind,
    instances: Vec<Instance>,
    /// Collider radius of an instance at scale 1.
    collider_radius: f32,
}

impl InstanceRegistry {
    pub fn new(kind: InstanceKind, collider_radius: f32) -> Self {
        Self {
            kind,
            instances: Vec::with_capacity(32),
            collider_radius,
        }
    }

    pub fn kind(&self) -> InstanceKind {
        self.kind
    }

    pub fn collider_radius(&self) -> f32 {
        self.collider_radius
    }

    /// Add an instance. Only used during level setup.
    pub fn spawn(&mut self, instance: Instance) {
        debug_assert_eq!(instance.kind, self.kind);
        self.instances.push(instance);
    }

    pub fn get(&self, id: InstanceId) -> Option<&Instance> {
        self.instances.iter().find(|i| i.id == id)
    }

    pub fn get_mut(&mut self, id: InstanceId) -> Option<&mut Instance> {
        self.instances.iter_mut().find(|i| i.id == id)
    }

    /// All instances, collected or not, in placement order.
    pub fn as_slice(&self) -> &[Instance] {
        &self.instances
    }

    pub fn iter(&self) -> impl Iterator<Item = &Instance> {
        self.instances.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Instance> {
        self.instances.iter_mut()
    }

    pub fn iter_active(&self) -> impl Iterator<Item = &Instance> {
        self.instances.iter().filter(|i| i.is_active())
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    pub fn active_count(&self) -> usize {
        self.iter_active().count()
    }

    /// Collision circles of active instances.
    pub fn collision_data(&self) -> Vec<Collider> {
        self.iter_active()
            .map(|i| Collider {
                x: i.pos.x,
                z: i.pos.z,
                radius: self.collider_radius * i.scale,
            })
            .collect()
    }

    /// World positions of active instances.
    pub fn positions(&self) -> Vec<Vec3> {
        self.iter_active().map(|i| i.pos).collect()
    }

    /// Whether a circle at (x, z) overlaps any active instance.
    pub fn blocks(&self, x: f32, z: f32, radius: f32) -> bool {
        self.iter_active().any(|i| {
            Collider {
                x: i.pos.x,
                z: i.pos.z,
                radius: self.collider_radius * i.scale,
            }
            .overlaps(x, z, radius)
        })
    }

    /// Whether any active instance lies within `radius` of (x, z).
    pub fn any_within(&self, x: f32, z: f32, radius: f32) -> bool {
        self.iter_active().any(|i| i.distance_to(x, z) <= radius)
    }

    /// Mark every active instance within `radius` of (x, z) as collected.
    /// Returns whether at least one was picked up; always false for non-collectible kinds.
    pub fn try_collect(&mut self, x: f32, z: f32, radius: f32) -> bool {
        if !self.kind.is_collectible() {
            return false;
        }
        let mut collected_any = false;
        for instance in self.instances.iter_mut().filter(|i| i.is_active()) {
            if instance.distance_to(x, z) <= radius {
                instance.collected = true;
                collected_any = true;
                debug!("{} {} collected", self.kind.name(), instance.id.0);
            }
        }
        collected_any
    }

    /// Re-activate everything and return it to its placement. Positions are never re-randomized.
    pub fn respawn(&mut self) {
        for instance in &mut self.instances {
            instance.reset();
        }
    }
}
