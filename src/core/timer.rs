/// Self-contained timers - accumulate delta time and decide when to fire

/// Fixed rate timer - fires at specific Hz
#[derive(Debug, Clone, Copy)]
pub struct FixedHz {
    interval: f32,
    accumulator: f32,
}

impl FixedHz {
    /// Create timer that fires at given frequency; non-positive rates never fire
    pub fn new(hz: f32) -> Self {
        let interval = if hz > 0.0 { 1.0 / hz } else { f32::INFINITY };
        Self {
            interval,
            accumulator: 0.0,
        }
    }

    /// Update with delta, returns true if should fire
    pub fn tick(&mut self, delta: f32) -> bool {
        self.accumulator += delta.max(0.0);

        if self.accumulator >= self.interval {
            // a long stall fires once, not once per missed interval
            self.accumulator %= self.interval;
            true
        } else {
            false
        }
    }

    pub fn interval(&self) -> f32 {
        self.interval
    }
}

/// Frames-per-second over the window between two reads
#[derive(Debug, Clone, Copy, Default)]
pub struct RateMeter {
    frames: u32,
    elapsed: f32,
}

impl RateMeter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, delta: f32) {
        self.frames = self.frames.saturating_add(1);
        self.elapsed += delta.max(0.0);
    }

    /// Average rate since the last call, then start a new window
    pub fn take_rate(&mut self) -> f32 {
        let rate = if self.elapsed > 0.0 {
            self.frames as f32 / self.elapsed
        } else {
            0.0
        };
        *self = Self::default();
        rate
    }
}
