use std::path::PathBuf;
use clap::Parser;
use crate::carousel::CarouselSettings;
use crate::constants::*;
use crate::state::{OverlapPolicy, Variant};

/// Horizontal image carousel.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// Directory containing the images to cycle through
    pub image_directory: PathBuf,

    /// Timer only: no arrows, clicks or keys
    #[arg(long)]
    pub passive: bool,

    /// Seconds between autoplay transitions
    #[arg(long, default_value_t = AUTOPLAY_INTERVAL)]
    pub interval: f32,

    /// Seconds one transition takes
    #[arg(long, default_value_t = TRANSITION_DURATION)]
    pub duration: f32,

    /// What to do with clicks that arrive while a slide is still moving
    #[arg(long, value_enum, default_value_t = OverlapPolicy::Reject)]
    pub overlap: OverlapPolicy,

    /// Pending triggers kept when --overlap=queue
    #[arg(long, default_value_t = QUEUE_CAPACITY)]
    pub queue_capacity: usize,

    /// Shuffle the images instead of sorting them by file name
    #[arg(long)]
    pub shuffle: bool,

    /// Also encode the rendered frames to this video file (requires ffmpeg)
    #[arg(long)]
    pub record: Option<PathBuf>,

    /// Stop after this many frames
    #[arg(long)]
    pub frames: Option<u64>,

    /// Window width
    #[arg(long, default_value_t = RENDER_WIDTH / 2)]
    pub width: i32,

    /// Window height
    #[arg(long, default_value_t = RENDER_HEIGHT / 2)]
    pub height: i32,
}

impl Args {
    pub fn variant(&self) -> Variant {
        if self.passive { Variant::Passive } else { Variant::Autoplay }
    }

    pub fn settings(&self) -> CarouselSettings {
        CarouselSettings {
            interval: self.interval,
            duration: self.duration,
            overlap: self.overlap,
            queue_capacity: self.queue_capacity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_autoplay_carousel() {
        let args = Args::try_parse_from(["carousel", "photos"]).unwrap();
        assert_eq!(args.image_directory, PathBuf::from("photos"));
        assert_eq!(args.variant(), Variant::Autoplay);
        assert_eq!(args.settings(), CarouselSettings::default());
        assert!(args.record.is_none());
    }

    #[test]
    fn parses_passive_queue_and_timings() {
        let args = Args::try_parse_from([
            "carousel", "photos", "--passive", "--interval", "5", "--duration", "0.5",
            "--overlap", "queue", "--queue-capacity", "2",
        ])
        .unwrap();
        assert_eq!(args.variant(), Variant::Passive);
        let settings = args.settings();
        assert_eq!(settings.interval, 5.0);
        assert_eq!(settings.duration, 0.5);
        assert_eq!(settings.overlap, OverlapPolicy::Queue);
        assert_eq!(settings.queue_capacity, 2);
    }

    #[test]
    fn directory_is_required() {
        assert!(Args::try_parse_from(["carousel"]).is_err());
    }
}
