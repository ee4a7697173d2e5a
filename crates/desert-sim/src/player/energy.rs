use serde::{Deserialize, Serialize};

/// Tuning for the player's energy meter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnergyConfig {
    pub max: f32,
    /// Drain per second while moving or turning.
    pub move_drain: f32,
    /// Drain per second while standing still.
    pub idle_drain: f32,
    /// Gain per second while near a sun. Dominates both drains.
    pub recharge: f32,
    /// Flat refill for picking up a sun.
    pub sun_bonus: f32,
    /// Fraction of `max` at or below which energy counts as low.
    pub low_fraction: f32,
}

impl Default for EnergyConfig {
    fn default() -> Self {
        Self {
            max: 100.0,
            move_drain: 1.5,
            idle_drain: 0.1,
            recharge: 25.0,
            sun_bonus: 30.0,
            low_fraction: 0.2,
        }
    }
}

/// Threshold crossings reported by [`EnergyBudget`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnergyEvent {
    /// Went from above zero to zero.
    Empty,
    /// Went from above the low threshold to at or below it.
    Low,
    /// Went from at or below the low threshold to above it.
    Recovered,
}

/// Continuous drain/recharge meter with edge-triggered threshold events.
///
/// `current` stays within `[0, max]` after every mutation. The empty and low flags are
/// levels; events fire only when a mutation crosses them.
#[derive(Debug, Clone, PartialEq)]
pub struct EnergyBudget {
    config: EnergyConfig,
    current: f32,
}

impl EnergyBudget {
    pub fn new(config: EnergyConfig) -> Self {
        Self {
            current: config.max,
            config,
        }
    }

    pub fn config(&self) -> &EnergyConfig {
        &self.config
    }

    pub fn current(&self) -> f32 {
        self.current
    }

    pub fn max(&self) -> f32 {
        self.config.max
    }

    /// 0.0 to 100.0.
    pub fn percent(&self) -> f32 {
        if self.config.max > 0.0 {
            self.current / self.config.max * 100.0
        } else {
            0.0
        }
    }

    pub fn low_threshold(&self) -> f32 {
        self.config.max * self.config.low_fraction
    }

    pub fn is_empty(&self) -> bool {
        self.current <= 0.0
    }

    pub fn is_low(&self) -> bool {
        self.current <= self.low_threshold()
    }

    /// Integrate one step. Near a sun the meter recharges; otherwise it drains at the
    /// moving or idle rate. Crossing events are pushed onto `events`.
    pub fn update(&mut self, dt: f32, is_moving: bool, is_near_sun: bool, events: &mut Vec<EnergyEvent>) {
        let rate = if is_near_sun {
            self.config.recharge
        } else if is_moving {
            -self.config.move_drain
        } else {
            -self.config.idle_drain
        };
        self.apply(rate * dt, events);
    }

    /// Add a flat amount (sun pickup), clamped to max.
    pub fn refill(&mut self, amount: f32, events: &mut Vec<EnergyEvent>) {
        self.apply(amount, events);
    }

    /// Back to full without reporting any crossing.
    pub fn reset(&mut self) {
        self.current = self.config.max;
    }

    /// Force a level, clamped. Used by tests and tooling; reports no crossing.
    pub fn set_current(&mut self, value: f32) {
        self.current = value.clamp(0.0, self.config.max);
    }

    fn apply(&mut self, delta: f32, events: &mut Vec<EnergyEvent>) {
        let was_empty = self.is_empty();
        let was_low = self.is_low();

        self.current = (self.current + delta).clamp(0.0, self.config.max);

        let now_empty = self.is_empty();
        let now_low = self.is_low();

        if !was_low && now_low {
            events.push(EnergyEvent::Low);
        }
        if !was_empty && now_empty {
            events.push(EnergyEvent::Empty);
        }
        if was_low && !now_low {
            events.push(EnergyEvent::Recovered);
        }
    }
}
