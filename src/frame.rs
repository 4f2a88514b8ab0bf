/// Frame metadata - carries frame number and timing info
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInfo {
    pub number: u64,
    /// Seconds since the first frame
    pub time: f32,
    /// Seconds since the previous frame
    pub delta: f32,
}

impl FrameInfo {
    pub fn new(number: u64, time: f32, delta: f32) -> Self {
        Self { number, time, delta }
    }
}

/// Deterministic frame source for headless runs and tests.
/// Yields `count` frames spaced exactly `1 / fps` apart.
#[derive(Debug, Clone)]
pub struct FixedStepFrames {
    delta: f32,
    next: u64,
    count: u64,
}

impl FixedStepFrames {
    pub fn new(fps: f32, count: u64) -> Self {
        Self {
            delta: 1.0 / fps,
            next: 0,
            count,
        }
    }

    pub fn delta(&self) -> f32 {
        self.delta
    }
}

impl Iterator for FixedStepFrames {
    type Item = FrameInfo;

    fn next(&mut self) -> Option<FrameInfo> {
        if self.next >= self.count {
            return None;
        }
        let number = self.next;
        self.next += 1;
        // Time computed from the frame number so it does not drift
        let time = (number + 1) as f64 * self.delta as f64;
        Some(FrameInfo::new(number, time as f32, self.delta))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.count - self.next) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for FixedStepFrames {}
