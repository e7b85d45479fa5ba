use std::f32::consts::PI;
use crate::state::{Direction, Trigger};

/// Default easing of the slide offset: slow start, slow finish.
pub fn swing(p: f32) -> f32 {
    0.5 - (p * PI).cos() / 2.0
}

/// One in-flight animation of the head slide's offset.
#[derive(Debug, Clone)]
pub struct Transition {
    pub trigger: Trigger,
    from: f32,
    to: f32,
    elapsed: f32,
    duration: f32,
}

impl Transition {
    pub fn new(trigger: Trigger, from: f32, to: f32, duration: f32) -> Self {
        Self { trigger, from, to, elapsed: 0.0, duration }
    }

    pub fn direction(&self) -> Direction {
        self.trigger.direction()
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    /// Advance by `dt` and return the offset for this frame.
    pub fn advance(&mut self, dt: f32) -> f32 {
        self.elapsed = (self.elapsed + dt).min(self.duration);
        self.offset()
    }

    pub fn offset(&self) -> f32 {
        if self.is_finished() {
            return self.to;
        }
        let p = self.elapsed / self.duration;
        raylib::core::math::lerp(self.from, self.to, swing(p))
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swing_endpoints_and_midpoint() {
        assert!(swing(0.0).abs() < 1e-6);
        assert!((swing(1.0) - 1.0).abs() < 1e-6);
        assert!((swing(0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn swing_is_monotonic() {
        let mut last = swing(0.0);
        for i in 1..=100 {
            let v = swing(i as f32 / 100.0);
            assert!(v >= last);
            last = v;
        }
    }

    #[test]
    fn advance_clamps_at_target() {
        let mut t = Transition::new(Trigger::Next, 0.0, -300.0, 1.0);
        let mid = t.advance(0.5);
        assert!(mid < 0.0 && mid > -300.0);
        assert!(!t.is_finished());
        assert_eq!(t.advance(5.0), -300.0);
        assert!(t.is_finished());
    }

    #[test]
    fn zero_duration_finishes_immediately() {
        let mut t = Transition::new(Trigger::Previous, -300.0, 0.0, 0.0);
        assert!(t.is_finished());
        assert_eq!(t.advance(0.0), 0.0);
        assert_eq!(t.direction(), Direction::Backward);
    }
}
