use std::time::Instant;

use crate::frame::FrameInfo;

/// Frame clock - hands out numbered frames with delta and total time
#[derive(Debug)]
pub struct Clock {
    start: Instant,
    last_tick: Instant,
    frame_number: u64,
}

impl Clock {
    /// Create new clock starting now
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last_tick: now,
            frame_number: 0,
        }
    }

    /// Advance one frame. Delta is in seconds since the previous tick.
    pub fn tick(&mut self) -> FrameInfo {
        self.tick_at(Instant::now())
    }

    pub fn tick_at(&mut self, now: Instant) -> FrameInfo {
        let delta = now.saturating_duration_since(self.last_tick).as_secs_f32();
        let time = now.saturating_duration_since(self.start).as_secs_f32();
        let info = FrameInfo::new(self.frame_number, time, delta);

        self.frame_number += 1;
        self.last_tick = now;
        info
    }

    /// Reset delta measurement to now; frame numbering continues
    pub fn reset(&mut self) {
        self.last_tick = Instant::now();
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_number
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}
