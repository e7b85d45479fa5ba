pub mod engine;
pub mod timer;
pub mod track;
pub mod transition;

use thiserror::Error;
use crate::constants::*;
use crate::state::{OverlapPolicy, Trigger};

pub use engine::Carousel;
pub use track::{SlideTrack, TrackSlide};

#[derive(Error, Debug, PartialEq)]
pub enum CarouselError {
    #[error("manual controls are disabled on a passive carousel")]
    ControlsDisabled,
    #[error("invalid carousel settings: {0}")]
    InvalidSettings(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CarouselSettings {
    /// Seconds between autoplay transitions.
    pub interval: f32,
    /// Seconds one transition takes.
    pub duration: f32,
    pub overlap: OverlapPolicy,
    pub queue_capacity: usize,
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self {
            interval: AUTOPLAY_INTERVAL,
            duration: TRANSITION_DURATION,
            overlap: OverlapPolicy::default(),
            queue_capacity: QUEUE_CAPACITY,
        }
    }
}

impl CarouselSettings {
    pub fn validate(&self) -> Result<(), CarouselError> {
        if !(self.interval > 0.0) {
            return Err(CarouselError::InvalidSettings(format!(
                "interval must be positive, got {}",
                self.interval
            )));
        }
        if !(self.duration >= 0.0) {
            return Err(CarouselError::InvalidSettings(format!(
                "duration must not be negative, got {}",
                self.duration
            )));
        }
        if self.queue_capacity == 0 {
            return Err(CarouselError::InvalidSettings("queue capacity must be at least 1".into()));
        }
        Ok(())
    }
}

/// Observable outcome of driving the carousel.
#[derive(Debug, Clone, PartialEq)]
pub enum CarouselEvent<T> {
    TransitionStarted { trigger: Trigger, slide: T },
    TransitionCompleted { trigger: Trigger, slide: T },
    TriggerQueued { trigger: Trigger },
    TriggerRejected { trigger: Trigger },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_are_valid() {
        let settings = CarouselSettings::default();
        assert_eq!(settings.interval, 3.0);
        assert_eq!(settings.duration, 1.0);
        assert_eq!(settings.overlap, OverlapPolicy::Reject);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn rejects_bad_settings() {
        let zero_interval = CarouselSettings { interval: 0.0, ..Default::default() };
        assert!(matches!(zero_interval.validate(), Err(CarouselError::InvalidSettings(_))));

        let nan_duration = CarouselSettings { duration: f32::NAN, ..Default::default() };
        assert!(nan_duration.validate().is_err());

        let no_queue = CarouselSettings { queue_capacity: 0, ..Default::default() };
        assert!(no_queue.validate().is_err());
    }
}
