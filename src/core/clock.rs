use std::time::Instant;

use crate::frame::FrameInfo;

/// Wall clock for the real-time frame loop.
/// Each tick yields the frame number, total time and delta since the last tick.
#[derive(Debug)]
pub struct Clock {
    start: Instant,
    last_tick: Instant,
    frame: u64,
}

impl Clock {
    /// Create new clock starting now
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last_tick: now,
            frame: 0,
        }
    }

    /// Advance the clock and describe the frame that just began
    pub fn tick(&mut self) -> FrameInfo {
        let now = Instant::now();
        let delta = now.duration_since(self.last_tick).as_secs_f32();
        let time = now.duration_since(self.start).as_secs_f32();
        self.last_tick = now;

        let info = FrameInfo::new(self.frame, time, delta);
        self.frame += 1;
        info
    }

    /// Restart delta measurement, e.g. after the window was hidden.
    /// Frame numbering continues.
    pub fn reset(&mut self) {
        self.last_tick = Instant::now();
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}
