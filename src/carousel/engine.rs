use std::collections::VecDeque;
use log::{debug, trace};
use crate::carousel::timer::AutoplayTimer;
use crate::carousel::track::{SlideTrack, TrackSlide};
use crate::carousel::transition::Transition;
use crate::carousel::{CarouselError, CarouselEvent, CarouselSettings};
use crate::state::{CarouselState, Direction, OverlapPolicy, Trigger, Variant};

/// Slide sequencing state machine.
///
/// Owns the slide order, the autoplay schedule and at most one in-flight
/// transition. Time only moves through [`Carousel::update`], so callers (the
/// render loop, tests) decide how fast the clock runs.
pub struct Carousel<T> {
    track: SlideTrack<T>,
    variant: Variant,
    settings: CarouselSettings,
    timer: AutoplayTimer,
    transition: Option<Transition>,
    pending: VecDeque<Trigger>,
    events: Vec<CarouselEvent<T>>,
}

impl<T: Clone> Carousel<T> {
    pub fn new(
        slides: impl IntoIterator<Item = TrackSlide<T>>,
        variant: Variant,
        settings: CarouselSettings,
    ) -> Result<Self, CarouselError> {
        settings.validate()?;

        let mut timer = AutoplayTimer::new(settings.interval);
        timer.arm();

        Ok(Self {
            track: SlideTrack::new(slides),
            variant,
            settings,
            timer,
            transition: None,
            pending: VecDeque::new(),
            events: Vec::new(),
        })
    }

    pub fn state(&self) -> CarouselState {
        if self.transition.is_some() {
            CarouselState::Transitioning
        } else {
            CarouselState::Idle
        }
    }

    pub fn track(&self) -> &SlideTrack<T> {
        &self.track
    }

    pub fn order(&self) -> Vec<T> {
        self.track.order()
    }

    pub fn head(&self) -> Option<&T> {
        self.track.head().map(|s| &s.id)
    }

    #[cfg(test)]
    pub fn is_timer_armed(&self) -> bool {
        self.timer.is_armed()
    }

    #[cfg(test)]
    pub fn timer_remaining(&self) -> Option<f32> {
        self.timer.remaining()
    }

    #[cfg(test)]
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Slide the visible slide out and reveal the next one.
    pub fn next(&mut self) -> Result<(), CarouselError> {
        self.manual(Trigger::Next)
    }

    /// Slide the last slide in from the left.
    pub fn previous(&mut self) -> Result<(), CarouselError> {
        self.manual(Trigger::Previous)
    }

    /// Advance the clock by `dt` seconds and collect what happened since the last call.
    pub fn update(&mut self, dt: f32) -> Vec<CarouselEvent<T>> {
        // A timer re-armed by a completing transition starts counting next frame.
        let was_armed = self.timer.is_armed();

        if let Some(transition) = self.transition.as_mut() {
            let offset = transition.advance(dt);
            if let Some(head) = self.track.head_mut() {
                head.offset = offset;
            }
            if transition.is_finished() {
                self.complete();
            }
        }

        if was_armed && self.timer.tick(dt) {
            trace!("autoplay timer fired");
            self.request(Trigger::Autoplay);
        }

        std::mem::take(&mut self.events)
    }

    /// Jump an in-flight transition to its end.
    pub fn finish_transition(&mut self) -> Vec<CarouselEvent<T>> {
        if self.transition.is_some() {
            self.complete();
        }
        std::mem::take(&mut self.events)
    }

    fn manual(&mut self, trigger: Trigger) -> Result<(), CarouselError> {
        if self.variant == Variant::Passive {
            return Err(CarouselError::ControlsDisabled);
        }
        self.request(trigger);
        Ok(())
    }

    fn request(&mut self, trigger: Trigger) {
        if self.transition.is_none() {
            self.start(trigger);
            return;
        }

        match self.settings.overlap {
            OverlapPolicy::Queue if self.pending.len() < self.settings.queue_capacity => {
                debug!("queueing {:?} behind the running transition", trigger);
                self.pending.push_back(trigger);
                self.events.push(CarouselEvent::TriggerQueued { trigger });
            }
            _ => {
                debug!("rejecting {:?}, a transition is already running", trigger);
                self.events.push(CarouselEvent::TriggerRejected { trigger });
            }
        }
    }

    fn start(&mut self, trigger: Trigger) {
        let Some(width) = self.track.head().map(|s| s.width) else {
            return;
        };

        if trigger.is_manual() {
            self.timer.disarm();
        }

        let (from, to) = match trigger.direction() {
            Direction::Forward => (0.0, -width),
            Direction::Backward => {
                // Park the tail left of the current head before it slides in.
                if let Some(moved) = self.track.rotate_backward() {
                    moved.offset = -width;
                }
                (-width, 0.0)
            }
        };

        let Some(head) = self.track.head() else {
            return;
        };
        let slide = head.id.clone();

        debug!("starting {:?} transition, offset {} -> {}", trigger, from, to);
        self.transition = Some(Transition::new(trigger, from, to, self.settings.duration));
        self.events.push(CarouselEvent::TransitionStarted { trigger, slide });
    }

    fn complete(&mut self) {
        let Some(transition) = self.transition.take() else {
            return;
        };
        let trigger = transition.trigger;

        if let Some(head) = self.track.head_mut() {
            head.offset = transition.target();
        }

        let moved = match transition.direction() {
            Direction::Forward => self.track.rotate_forward().map(|slide| {
                slide.offset = 0.0;
                slide.id.clone()
            }),
            Direction::Backward => self.track.head().map(|slide| slide.id.clone()),
        };

        if trigger.is_manual() {
            self.timer.arm();
        }

        if let Some(slide) = moved {
            self.events.push(CarouselEvent::TransitionCompleted { trigger, slide });
        }

        if let Some(next) = self.pending.pop_front() {
            self.start(next);
        }
    }
}
