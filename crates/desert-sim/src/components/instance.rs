use glam::{Vec2, Vec3};

use crate::api::types::{InstanceId, InstanceKind};

/// Wrap an angle in degrees into [0, 360).
pub fn wrap_degrees(angle: f32) -> f32 {
    if !angle.is_finite() {
        return 0.0;
    }
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Unit direction on the ground plane for a heading in degrees.
/// Heading 0 faces +z, 90 faces +x.
pub fn heading_direction(heading_degrees: f32) -> Vec2 {
    let rad = heading_degrees.to_radians();
    Vec2::new(rad.sin(), rad.cos())
}

/// Independent local motion of a roaming instance (tumbleweeds).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoamState {
    /// Direction of travel in degrees, [0, 360).
    pub heading: f32,
    /// Time since the last heading change.
    pub direction_timer: f32,
    /// Time until the next heading change, redrawn after every change.
    pub direction_interval: f32,
    /// Time since landing from the last jump.
    pub jump_timer: f32,
    pub jump_interval: f32,
    /// Height above rest height; never negative.
    pub hop: f32,
    pub vertical_velocity: f32,
    pub jumping: bool,
}

impl RoamState {
    pub fn new(heading: f32, direction_interval: f32, jump_interval: f32) -> Self {
        Self {
            heading: wrap_degrees(heading),
            direction_timer: 0.0,
            direction_interval,
            jump_timer: 0.0,
            jump_interval,
            hop: 0.0,
            vertical_velocity: 0.0,
            jumping: false,
        }
    }
}

/// Spin and pulse phase of an animated collectible (suns).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PulseState {
    /// Radians, [0, TAU).
    pub phase: f32,
}

/// One placed occurrence of a prop.
///
/// Shared base record plus optional kind-specific components; the instance is never
/// removed, only flagged as collected.
#[derive(Debug, Clone, PartialEq)]
pub struct Instance {
    pub id: InstanceId,
    pub kind: InstanceKind,
    /// World position. `x`/`z` are authoritative, `y` is the cached ground sample
    /// plus any hover or hop offset.
    pub pos: Vec3,
    /// Degrees, [0, 360).
    pub rotation: f32,
    pub scale: f32,
    /// Set when picked up; only meaningful for collectible kinds.
    pub collected: bool,
    /// Where the instance was placed; restored on respawn.
    pub home: Vec3,
    pub roam: Option<RoamState>,
    pub pulse: Option<PulseState>,
}

impl Instance {
    pub fn new(id: InstanceId, kind: InstanceKind) -> Self {
        Self {
            id,
            kind,
            pos: Vec3::ZERO,
            rotation: 0.0,
            scale: 1.0,
            collected: false,
            home: Vec3::ZERO,
            roam: None,
            pulse: None,
        }
    }

    // -- Builder pattern --

    /// Place the instance; also records the position as its home.
    pub fn with_pos(mut self, pos: Vec3) -> Self {
        self.pos = pos;
        self.home = pos;
        self
    }

    pub fn with_rotation(mut self, rotation: f32) -> Self {
        self.rotation = wrap_degrees(rotation);
        self
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_roam(mut self, roam: RoamState) -> Self {
        self.roam = Some(roam);
        self
    }

    pub fn with_pulse(mut self, pulse: PulseState) -> Self {
        self.pulse = Some(pulse);
        self
    }

    /// Active instances take part in collision, pickup and rendering.
    pub fn is_active(&self) -> bool {
        !self.collected
    }

    pub fn ground_pos(&self) -> Vec2 {
        Vec2::new(self.pos.x, self.pos.z)
    }

    /// Ground-plane distance to a point.
    pub fn distance_to(&self, x: f32, z: f32) -> f32 {
        self.ground_pos().distance(Vec2::new(x, z))
    }

    /// Put the instance back where it was placed, with its local motion at rest.
    pub fn reset(&mut self) {
        self.collected = false;
        self.pos = self.home;
        if let Some(roam) = self.roam.as_mut() {
            roam.hop = 0.0;
            roam.vertical_velocity = 0.0;
            roam.jumping = false;
            roam.jump_timer = 0.0;
            roam.direction_timer = 0.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_degrees_into_range() {
        assert_eq!(wrap_degrees(370.0), 10.0);
        assert_eq!(wrap_degrees(-90.0), 270.0);
        assert_eq!(wrap_degrees(360.0), 0.0);
        assert_eq!(wrap_degrees(0.0), 0.0);
        assert_eq!(wrap_degrees(f32::NAN), 0.0);
        let tiny = wrap_degrees(-1e-9);
        assert!((0.0..360.0).contains(&tiny));
    }

    #[test]
    fn heading_zero_faces_positive_z() {
        let dir = heading_direction(0.0);
        assert!(dir.x.abs() < 1e-6);
        assert!((dir.y - 1.0).abs() < 1e-6);

        let east = heading_direction(90.0);
        assert!((east.x - 1.0).abs() < 1e-6);
    }

    #[test]
    fn builder_sets_home() {
        let inst = Instance::new(InstanceId(3), InstanceKind::Can)
            .with_pos(Vec3::new(5.0, 1.0, 5.0))
            .with_rotation(400.0)
            .with_scale(2.0);
        assert_eq!(inst.home, inst.pos);
        assert_eq!(inst.rotation, 40.0);
        assert!(inst.is_active());
        assert_eq!(inst.distance_to(5.0, 8.0), 3.0);
    }

    #[test]
    fn reset_restores_home_and_flag() {
        let mut inst = Instance::new(InstanceId(1), InstanceKind::Tumbleweed)
            .with_pos(Vec3::new(1.0, 0.0, 1.0))
            .with_roam(RoamState::new(0.0, 3.0, 2.0));
        inst.pos = Vec3::new(9.0, 2.0, 9.0);
        inst.collected = true;
        inst.roam.as_mut().unwrap().jumping = true;
        inst.reset();
        assert_eq!(inst.pos, Vec3::new(1.0, 0.0, 1.0));
        assert!(inst.is_active());
        assert!(!inst.roam.unwrap().jumping);
    }
}
