/// Fixed timestep accumulator.
/// Turns variable frame times into a whole number of equal game steps.
#[derive(Debug, Clone)]
pub struct FixedTimestep {
    dt: f32,
    accumulator: f32,
    max_steps: u32,
}

impl FixedTimestep {
    pub fn new(dt: f32, max_steps: u32) -> Self {
        Self {
            dt,
            accumulator: 0.0,
            max_steps: max_steps.max(1),
        }
    }

    /// Add frame time to the accumulator. Returns the number of fixed steps to run.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        // Negative deltas come from clock adjustments; treat them as no time.
        self.accumulator += frame_dt.max(0.0);
        // A backgrounded tab can hand us seconds at once; never run more than max_steps.
        self.accumulator = self.accumulator.min(self.dt * self.max_steps as f32);
        let steps = (self.accumulator / self.dt) as u32;
        self.accumulator -= steps as f32 * self.dt;
        steps
    }

    /// The fixed delta time.
    pub fn dt(&self) -> f32 {
        self.dt
    }
}

/// What a countdown did during one `tick`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownTick {
    /// Less than a whole second passed since the last decrement.
    Idle,
    /// One second elapsed; carries the new remaining value (always > 0).
    Second(u32),
    /// The countdown reached zero. Reported exactly once.
    Finished,
    /// The countdown is not running.
    Stopped,
}

/// Whole-second countdown driven by fixed steps.
///
/// Owns the only repeating timer of a phase. Starting it again replaces
/// the previous count, so two timers can never decrement the same value.
#[derive(Debug, Clone, Default)]
pub struct Countdown {
    remaining: u32,
    elapsed: f32,
    running: bool,
}

impl Countdown {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start counting down from `seconds`, cancelling any count in progress.
    pub fn start(&mut self, seconds: u32) {
        self.remaining = seconds;
        self.elapsed = 0.0;
        self.running = true;
    }

    /// Stop without finishing. A cancelled countdown never reports `Finished`.
    pub fn cancel(&mut self) {
        self.running = false;
        self.elapsed = 0.0;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Seconds left. Zero once finished or never started.
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Advance by `dt` seconds. At most one second is consumed per call.
    pub fn tick(&mut self, dt: f32) -> CountdownTick {
        if !self.running {
            return CountdownTick::Stopped;
        }
        if self.remaining == 0 {
            self.running = false;
            return CountdownTick::Finished;
        }
        self.elapsed += dt;
        if self.elapsed < 1.0 {
            return CountdownTick::Idle;
        }
        self.elapsed -= 1.0;
        self.remaining -= 1;
        if self.remaining == 0 {
            self.running = false;
            CountdownTick::Finished
        } else {
            CountdownTick::Second(self.remaining)
        }
    }
}
