use log::warn;

/// Fixed timestep accumulator.
/// Turns variable frame times into a whole number of equal simulation steps.
#[derive(Debug, Clone)]
pub struct FixedTimestep {
    /// The fixed delta time per step.
    dt: f32,
    /// Frame time not yet consumed by a whole step.
    accumulator: f32,
    /// Upper bound on steps per frame; excess time is dropped.
    max_steps: u32,
}

impl FixedTimestep {
    pub const DEFAULT_MAX_STEPS: u32 = 10;
    /// Step length used when the configured one is unusable.
    pub const DEFAULT_DT: f32 = 1.0 / 60.0;

    pub fn new(dt: f32) -> Self {
        Self::with_max_steps(dt, Self::DEFAULT_MAX_STEPS)
    }

    /// A zero, negative or non-finite `dt` is replaced by [`Self::DEFAULT_DT`].
    pub fn with_max_steps(dt: f32, max_steps: u32) -> Self {
        let dt = if dt.is_finite() && dt > 0.0 {
            dt
        } else {
            warn!("fixed_dt {dt} is not a positive step; using {}", Self::DEFAULT_DT);
            Self::DEFAULT_DT
        };
        Self {
            dt,
            accumulator: 0.0,
            max_steps: max_steps.max(1),
        }
    }

    /// Add frame time. Returns the number of fixed steps to run this frame.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        if !(frame_dt > 0.0) {
            return 0;
        }
        self.accumulator = (self.accumulator + frame_dt).min(self.dt * self.max_steps as f32);
        let steps = (self.accumulator / self.dt) as u32;
        self.accumulator -= steps as f32 * self.dt;
        steps
    }

    /// Fraction of a step left in the accumulator (0.0 to 1.0), for render interpolation.
    pub fn alpha(&self) -> f32 {
        self.accumulator / self.dt
    }

    /// The fixed delta time.
    pub fn dt(&self) -> f32 {
        self.dt
    }

    /// Drop any partial step, e.g. after a restart.
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}
