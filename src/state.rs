use clap::ValueEnum;

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum CarouselState {
    Idle,          // Head slide resting at offset 0, autoplay running
    Transitioning, // One slide offset animation in flight
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Direction {
    Forward,  // Head slides out to the left, then moves to the tail
    Backward, // Tail moves to the head, then slides in from the left
}

/// What started a transition.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Trigger {
    Autoplay,
    Next,
    Previous,
}

impl Trigger {
    pub fn direction(self) -> Direction {
        match self {
            Trigger::Autoplay | Trigger::Next => Direction::Forward,
            Trigger::Previous => Direction::Backward,
        }
    }

    /// Manual triggers suspend autoplay and re-arm it once they complete.
    pub fn is_manual(self) -> bool {
        !matches!(self, Trigger::Autoplay)
    }
}

/// Handling of triggers that arrive while a transition is in flight.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, ValueEnum)]
pub enum OverlapPolicy {
    /// Drop the trigger.
    #[default]
    Reject,
    /// Start it once the current transition completes.
    Queue,
}

/// Carousel flavour: with manual controls or timer only.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Variant {
    Autoplay,
    Passive,
}
