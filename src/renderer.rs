use std::path::PathBuf;
use anyhow::{bail, Context};
use log::{debug, info, warn};
use raylib::prelude::*;
use crate::carousel::{Carousel, CarouselEvent, CarouselSettings, TrackSlide};
use crate::constants::*;
use crate::slide::Slide;
use crate::state::{CarouselState, Variant};
use crate::texture_loader::load_texture_with_exif_rotation;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Control {
    Previous,
    Next,
}

/// Hit boxes of the previous/next arrows inside `viewport`.
pub fn arrow_rects(viewport: Rectangle) -> (Rectangle, Rectangle) {
    let cy = viewport.y + viewport.height * 0.5;
    let size = ARROW_SIZE * 2.0;
    let left = Rectangle::new(viewport.x + ARROW_MARGIN, cy - ARROW_SIZE, size, size);
    let right = Rectangle::new(
        viewport.x + viewport.width - ARROW_MARGIN - size,
        cy - ARROW_SIZE,
        size,
        size,
    );
    (left, right)
}

/// Map a click at `point` (render coordinates) to a control.
///
/// Arrows take priority over the visible slide, which acts as "next".
pub fn hit_test(point: Vector2, viewport: Rectangle, head_width: f32) -> Option<Control> {
    let (left, right) = arrow_rects(viewport);
    if left.check_collision_point_rec(point) {
        return Some(Control::Previous);
    }
    if right.check_collision_point_rec(point) {
        return Some(Control::Next);
    }
    let head = Rectangle::new(viewport.x, viewport.y, head_width.min(viewport.width), viewport.height);
    if head.check_collision_point_rec(point) {
        return Some(Control::Next);
    }
    None
}

/// Arrow opacity: dimmed while a slide is moving.
pub fn arrow_alpha(state: CarouselState) -> u8 {
    match state {
        CarouselState::Idle => 204,
        CarouselState::Transitioning => 96,
    }
}

pub struct CarouselEngine {
    slides: Vec<Slide>,
    carousel: Option<Carousel<usize>>,
    variant: Variant,
    settings: CarouselSettings,
    viewport: Rectangle,
}

impl CarouselEngine {
    pub fn new(variant: Variant, settings: CarouselSettings) -> anyhow::Result<Self> {
        settings.validate().context("invalid carousel configuration")?;

        Ok(Self {
            slides: Vec::new(),
            carousel: None,
            variant,
            settings,
            viewport: Rectangle::new(0.0, 0.0, RENDER_WIDTH as f32, RENDER_HEIGHT as f32),
        })
    }

    fn head_width(&self) -> f32 {
        self.carousel
            .as_ref()
            .and_then(|c| c.track().head())
            .map(|s| s.width)
            .unwrap_or(0.0)
    }

    fn apply(&mut self, control: Control) {
        let Some(carousel) = self.carousel.as_mut() else {
            return;
        };
        let result = match control {
            Control::Previous => carousel.previous(),
            Control::Next => carousel.next(),
        };
        if let Err(e) = result {
            debug!("ignoring {:?}: {}", control, e);
        }
    }

    fn log_events(carousel: &Carousel<usize>, events: &[CarouselEvent<usize>]) {
        for event in events {
            match event {
                CarouselEvent::TransitionStarted { trigger, slide } => {
                    debug!("{:?} transition started on slide {}", trigger, slide)
                }
                CarouselEvent::TransitionCompleted { trigger, slide } => {
                    debug!(
                        "{:?} transition completed on slide {}, order now {:?}",
                        trigger,
                        slide,
                        carousel.order()
                    )
                }
                CarouselEvent::TriggerQueued { trigger } => debug!("{:?} queued", trigger),
                CarouselEvent::TriggerRejected { trigger } => debug!("{:?} rejected", trigger),
            }
        }
    }

    fn draw_arrows(d: &mut impl RaylibDraw, viewport: Rectangle, state: CarouselState) {
        let (left, right) = arrow_rects(viewport);
        let color = Color::new(255, 255, 255, arrow_alpha(state));

        let cy = left.y + left.height * 0.5;
        d.draw_triangle(
            Vector2::new(left.x, cy),
            Vector2::new(left.x + left.width, left.y + left.height),
            Vector2::new(left.x + left.width, left.y),
            color,
        );

        let cy = right.y + right.height * 0.5;
        d.draw_triangle(
            Vector2::new(right.x + right.width, cy),
            Vector2::new(right.x, right.y),
            Vector2::new(right.x, right.y + right.height),
            color,
        );
    }
}

impl crate::engine::Engine for CarouselEngine {
    fn initialize(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread, paths: Vec<PathBuf>) -> anyhow::Result<()> {
        let frame = Vector2::new(self.viewport.width, self.viewport.height);

        for path in paths {
            match load_texture_with_exif_rotation(rl, thread, &path) {
                Ok(texture) => self.slides.push(Slide::new(texture, frame)),
                Err(e) => warn!("skipping image: {}", e),
            }
        }

        if self.slides.is_empty() {
            bail!("no slides were loaded");
        }

        let track = self.slides.iter().enumerate().map(|(i, slide)| TrackSlide::new(i, slide.width()));
        self.carousel = Some(Carousel::new(track, self.variant, self.settings.clone())?);
        info!("carousel ready with {} slides ({:?})", self.slides.len(), self.variant);
        Ok(())
    }

    fn handle_input(&mut self, rl: &RaylibHandle) {
        if self.variant == Variant::Passive {
            return;
        }

        if rl.is_key_pressed(KeyboardKey::KEY_RIGHT) {
            self.apply(Control::Next);
        }
        if rl.is_key_pressed(KeyboardKey::KEY_LEFT) {
            self.apply(Control::Previous);
        }

        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            // Window coordinates to render texture coordinates
            let mouse = rl.get_mouse_position();
            let point = Vector2::new(
                mouse.x * RENDER_WIDTH as f32 / rl.get_screen_width() as f32,
                mouse.y * RENDER_HEIGHT as f32 / rl.get_screen_height() as f32,
            );
            if let Some(control) = hit_test(point, self.viewport, self.head_width()) {
                self.apply(control);
            }
        }
    }

    fn render_frame(&mut self, dt: f32, rl: &mut RaylibHandle, thread: &RaylibThread, framebuffer: &mut RenderTexture2D) -> bool {
        let Some(carousel) = self.carousel.as_mut() else {
            return false;
        };
        let events = carousel.update(dt);
        Self::log_events(carousel, &events);

        let viewport = self.viewport;
        let slides = &self.slides;
        let carousel = &*carousel;
        let with_arrows = self.variant == Variant::Autoplay;

        rl.draw_texture_mode(thread, framebuffer, |mut tmd| {
            let mut d = tmd.begin_drawing(thread);
            d.clear_background(Color::BLACK);

            {
                let mut s = d.begin_scissor_mode(
                    viewport.x as i32,
                    viewport.y as i32,
                    viewport.width as i32,
                    viewport.height as i32,
                );

                // Slides sit side by side; each offset shifts its slide and all that follow.
                let right_edge = viewport.x + viewport.width;
                let mut x = viewport.x;
                for track_slide in carousel.track().iter() {
                    x += track_slide.offset;
                    if x >= right_edge {
                        break;
                    }
                    if x + track_slide.width > viewport.x {
                        if let Some(slide) = slides.get(track_slide.id) {
                            slide.draw(&mut s, x, viewport.y);
                        }
                    }
                    x += track_slide.width;
                }
            }

            if with_arrows {
                Self::draw_arrows(&mut d, viewport, carousel.state());
            }
        });

        true
    }

    fn finish(&mut self) {
        let Some(carousel) = self.carousel.as_mut() else {
            return;
        };
        let events = carousel.finish_transition();
        Self::log_events(carousel, &events);
        if let Some(head) = carousel.head() {
            info!("carousel stopped on slide {}", head);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Engine;

    fn viewport() -> Rectangle {
        Rectangle::new(0.0, 0.0, 1920.0, 1080.0)
    }

    #[test]
    fn arrows_sit_on_opposite_edges() {
        let (left, right) = arrow_rects(viewport());
        assert_eq!(left.x, ARROW_MARGIN);
        assert_eq!(right.x + right.width, 1920.0 - ARROW_MARGIN);
        assert_eq!(left.y, right.y);
    }

    #[test]
    fn arrow_clicks_map_to_controls() {
        let (left, right) = arrow_rects(viewport());
        let in_left = Vector2::new(left.x + 5.0, left.y + 5.0);
        let in_right = Vector2::new(right.x + 5.0, right.y + 5.0);
        assert_eq!(hit_test(in_left, viewport(), 1920.0), Some(Control::Previous));
        assert_eq!(hit_test(in_right, viewport(), 1920.0), Some(Control::Next));
    }

    #[test]
    fn arrows_dim_while_transitioning() {
        assert!(arrow_alpha(CarouselState::Transitioning) < arrow_alpha(CarouselState::Idle));
    }

    #[test]
    fn new_rejects_invalid_settings_without_a_carousel() {
        let bad = CarouselSettings { interval: 0.0, ..Default::default() };
        assert!(CarouselEngine::new(Variant::Autoplay, bad).is_err());

        let engine = CarouselEngine::new(Variant::Passive, CarouselSettings::default()).unwrap();
        assert!(engine.carousel.is_none());
        assert_eq!(engine.head_width(), 0.0);
    }

    #[test]
    fn finish_completes_the_running_transition() {
        let mut engine = CarouselEngine::new(Variant::Autoplay, CarouselSettings::default()).unwrap();
        let track = [TrackSlide::new(0, 300.0), TrackSlide::new(1, 300.0), TrackSlide::new(2, 300.0)];
        engine.carousel = Some(Carousel::new(track, Variant::Autoplay, CarouselSettings::default()).unwrap());

        engine.apply(Control::Next);
        engine.finish();

        let carousel = engine.carousel.as_ref().unwrap();
        assert_eq!(carousel.state(), CarouselState::Idle);
        assert_eq!(carousel.order(), vec![1, 2, 0]);
    }

    #[test]
    fn clicking_the_visible_slide_advances() {
        assert_eq!(hit_test(Vector2::new(600.0, 100.0), viewport(), 1200.0), Some(Control::Next));
        assert_eq!(hit_test(Vector2::new(1500.0, 100.0), viewport(), 1200.0), None);
    }
}
