//! Sun animation: constant spin plus a sinusoidal scale pulse.

use std::f32::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::components::instance::{wrap_degrees, Instance};
use crate::core::registry::InstanceRegistry;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PulseConfig {
    /// Degrees per second around the vertical axis.
    pub spin_speed: f32,
    /// Radians per second of pulse phase.
    pub pulse_speed: f32,
    /// Peak fractional scale change. 0.15 means the instance swings between 85% and 115%.
    pub pulse_amplitude: f32,
}

impl Default for PulseConfig {
    fn default() -> Self {
        Self {
            spin_speed: 45.0,
            pulse_speed: 2.0,
            pulse_amplitude: 0.15,
        }
    }
}

/// Spin and advance the pulse of every active pulsing instance.
///
/// Call once per simulation step.
pub fn tick_pulses(registry: &mut InstanceRegistry, config: &PulseConfig, dt: f32) {
    for instance in registry.iter_mut() {
        if !instance.is_active() {
            continue;
        }
        let Some(pulse) = instance.pulse.as_mut() else {
            continue;
        };
        pulse.phase = (pulse.phase + config.pulse_speed * dt).rem_euclid(TAU);
        instance.rotation = wrap_degrees(instance.rotation + config.spin_speed * dt);
    }
}

/// Scale to draw an instance at. Non-pulsing instances draw at their placed scale.
pub fn render_scale(instance: &Instance, config: &PulseConfig) -> f32 {
    match instance.pulse {
        Some(pulse) => instance.scale * (1.0 + config.pulse_amplitude * pulse.phase.sin()),
        None => instance.scale,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::{InstanceId, InstanceKind};
    use crate::components::instance::PulseState;
    use glam::Vec3;

    fn suns() -> InstanceRegistry {
        let mut reg = InstanceRegistry::new(InstanceKind::Sun, 1.0);
        reg.spawn(
            Instance::new(InstanceId(1), InstanceKind::Sun)
                .with_pos(Vec3::new(3.0, 4.0, 5.0))
                .with_scale(2.0)
                .with_pulse(PulseState { phase: 0.0 }),
        );
        reg
    }

    #[test]
    fn spins_and_wraps() {
        let mut reg = suns();
        let cfg = PulseConfig::default();
        tick_pulses(&mut reg, &cfg, 1.0);
        assert_eq!(reg.as_slice()[0].rotation, 45.0);

        for _ in 0..8 {
            tick_pulses(&mut reg, &cfg, 1.0);
        }
        let inst = &reg.as_slice()[0];
        assert!((0.0..360.0).contains(&inst.rotation));
        assert!((inst.rotation - 45.0).abs() < 1e-3);
    }

    #[test]
    fn phase_stays_within_one_turn() {
        let mut reg = suns();
        let cfg = PulseConfig::default();
        for _ in 0..100 {
            tick_pulses(&mut reg, &cfg, 0.7);
            let phase = reg.as_slice()[0].pulse.unwrap().phase;
            assert!((0.0..TAU).contains(&phase));
        }
    }

    #[test]
    fn render_scale_swings_around_placed_scale() {
        let cfg = PulseConfig::default();
        let mut inst = suns().as_slice()[0].clone();
        assert_eq!(render_scale(&inst, &cfg), 2.0);

        inst.pulse = Some(PulseState {
            phase: std::f32::consts::FRAC_PI_2,
        });
        assert!((render_scale(&inst, &cfg) - 2.3).abs() < 1e-5);

        inst.pulse = None;
        assert_eq!(render_scale(&inst, &cfg), 2.0);
    }

    #[test]
    fn position_is_untouched() {
        let mut reg = suns();
        tick_pulses(&mut reg, &PulseConfig::default(), 1.0);
        assert_eq!(reg.as_slice()[0].pos, Vec3::new(3.0, 4.0, 5.0));
    }

    #[test]
    fn collected_suns_freeze() {
        let mut reg = suns();
        reg.try_collect(3.0, 5.0, 1.0);
        tick_pulses(&mut reg, &PulseConfig::default(), 1.0);
        assert_eq!(reg.as_slice()[0].rotation, 0.0);
    }
}
