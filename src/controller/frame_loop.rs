//! Fixed-timestep tick scheduling.
//!
//! Frames arrive at whatever rate the platform delivers them; the scene only
//! ever sees whole ticks of `step` seconds.

/// Longest frame delta accepted before it is clamped, seconds.
pub const MAX_FRAME_DT: f32 = 0.25;
/// Upper bound on catch-up ticks run for a single frame.
pub const MAX_TICKS_PER_FRAME: u32 = 5;

#[derive(Debug, Clone)]
pub struct FixedTimestep {
    step: f32,
    accumulator: f32,
    tick_count: u64,
}

impl FixedTimestep {
    pub fn new(tick_rate_hz: u32) -> Self {
        Self {
            step: 1.0 / tick_rate_hz.max(1) as f32,
            accumulator: 0.0,
            tick_count: 0,
        }
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Feed one frame's elapsed time and get back how many ticks to run.
    ///
    /// Time beyond `MAX_TICKS_PER_FRAME` ticks is dropped so a stalled tab
    /// does not trigger a burst of catch-up simulation.
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        self.accumulator += frame_dt.clamp(0.0, MAX_FRAME_DT);
        let mut ticks = 0;
        while self.accumulator >= self.step && ticks < MAX_TICKS_PER_FRAME {
            self.accumulator -= self.step;
            ticks += 1;
        }
        if ticks == MAX_TICKS_PER_FRAME {
            self.accumulator = self.accumulator.min(self.step);
        }
        self.tick_count += ticks as u64;
        ticks
    }
}
