/// Repeating autoplay schedule owned by the carousel.
///
/// When disarmed nothing accumulates; arming always starts a fresh, full
/// interval rather than resuming the previous one.
#[derive(Debug, Clone)]
pub struct AutoplayTimer {
    interval: f32,
    elapsed: Option<f32>,
}

impl AutoplayTimer {
    pub fn new(interval: f32) -> Self {
        Self { interval, elapsed: None }
    }

    pub fn arm(&mut self) {
        self.elapsed = Some(0.0);
    }

    pub fn disarm(&mut self) {
        self.elapsed = None;
    }

    pub fn is_armed(&self) -> bool {
        self.elapsed.is_some()
    }

    /// Time left until the next fire, if armed.
    #[cfg(test)]
    pub fn remaining(&self) -> Option<f32> {
        self.elapsed.map(|e| (self.interval - e).max(0.0))
    }

    /// Advance by `dt` seconds. Returns true when the interval elapsed.
    ///
    /// At most one fire is reported per tick. The overshoot within the current
    /// interval carries over so the cadence does not drift with the frame rate;
    /// whole intervals missed during a long frame are dropped.
    pub fn tick(&mut self, dt: f32) -> bool {
        let Some(elapsed) = self.elapsed.as_mut() else {
            return false;
        };
        *elapsed += dt;
        if *elapsed >= self.interval {
            *elapsed %= self.interval;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disarmed_timer_never_fires() {
        let mut timer = AutoplayTimer::new(3.0);
        assert!(!timer.tick(10.0));
        assert!(!timer.is_armed());
        assert_eq!(timer.remaining(), None);
    }

    #[test]
    fn fires_on_cadence_and_repeats() {
        let mut timer = AutoplayTimer::new(3.0);
        timer.arm();
        assert!(!timer.tick(2.0));
        assert!(timer.tick(1.0));
        assert!(timer.is_armed());
        assert!(!timer.tick(2.5));
        assert!(timer.tick(0.5));
    }

    #[test]
    fn long_frame_fires_once_and_keeps_phase() {
        let mut timer = AutoplayTimer::new(3.0);
        timer.arm();
        assert!(timer.tick(10.0));
        assert!(!timer.tick(1.0 / 60.0));
        let remaining = timer.remaining().unwrap();
        assert!((remaining - (2.0 - 1.0 / 60.0)).abs() < 1e-5);
        assert!(timer.tick(2.0));
    }

    #[test]
    fn rearming_restarts_full_interval() {
        let mut timer = AutoplayTimer::new(3.0);
        timer.arm();
        timer.tick(2.5);
        timer.disarm();
        timer.arm();
        assert_eq!(timer.remaining(), Some(3.0));
        assert!(!timer.tick(2.9));
    }
}
