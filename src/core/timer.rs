/// Frame-delta driven timers used by the session layer.

/// Fires at most once per `min_interval` seconds of accumulated frame time.
#[derive(Debug, Clone, Copy)]
pub struct Throttled {
    min_interval: f32,
    since_last: f32,
}

impl Throttled {
    pub fn new(min_interval: f32) -> Self {
        Self {
            min_interval,
            since_last: min_interval, // first tick fires
        }
    }

    /// Returns true when the interval has elapsed. Negative deltas count as zero.
    pub fn try_tick(&mut self, delta: f32) -> bool {
        self.since_last += delta.max(0.0);

        if self.since_last >= self.min_interval {
            self.since_last = 0.0;
            true
        } else {
            false
        }
    }
}

/// A value that disappears after `lifetime` seconds.
///
/// Setting a new value restarts the clock, so a fresh status message always
/// gets its full time on screen.
#[derive(Debug, Clone)]
pub struct Expiring<T> {
    value: Option<T>,
    lifetime: f32,
    remaining: f32,
}

impl<T> Expiring<T> {
    pub fn new(lifetime: f32) -> Self {
        Self {
            value: None,
            lifetime,
            remaining: 0.0,
        }
    }

    pub fn set(&mut self, value: T) {
        self.value = Some(value);
        self.remaining = self.lifetime;
    }

    /// Advance by `delta`; returns true on the frame the value expires
    pub fn tick(&mut self, delta: f32) -> bool {
        if self.value.is_none() {
            return false;
        }

        self.remaining -= delta.max(0.0);
        if self.remaining <= 0.0 {
            self.value = None;
            true
        } else {
            false
        }
    }

    pub fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn is_set(&self) -> bool {
        self.value.is_some()
    }

    /// Seconds left before the value is dropped, zero when empty
    pub fn remaining(&self) -> f32 {
        if self.value.is_some() {
            self.remaining.max(0.0)
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn throttled_enforces_minimum() {
        let mut timer = Throttled::new(1.0);

        assert!(timer.try_tick(0.016)); // First fire immediate
        assert!(!timer.try_tick(0.5));
        assert!(timer.try_tick(0.6));
        assert!(!timer.try_tick(0.0));
        assert!(!timer.try_tick(-5.0));
    }

    #[test]
    fn expiring_value_clears_after_lifetime() {
        let mut status = Expiring::new(3.0);
        assert!(!status.tick(1.0)); // Empty
        assert_eq!(status.get(), None::<&&str>);

        status.set("Flight mode: Overlook");
        assert!(!status.tick(1.5));
        assert_eq!(status.get(), Some(&"Flight mode: Overlook"));
        assert_eq!(status.remaining(), 1.5);

        assert!(status.tick(1.6));
        assert!(!status.is_set());
        assert!(!status.tick(0.1));
    }

    #[test]
    fn expiring_set_restarts_lifetime() {
        let mut status = Expiring::new(3.0);
        status.set(1);
        status.tick(2.0);

        status.set(2);
        assert_eq!(status.remaining(), 3.0);
        assert!(!status.tick(2.0));
        assert_eq!(status.get(), Some(&2));
        assert!(status.tick(1.0));
    }
}
