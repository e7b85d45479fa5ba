use raylib::prelude::*;

/// A loaded picture and the frame it occupies in the carousel strip.
///
/// The texture is scaled to fit the viewport, and the frame width is what the
/// carousel reads as the slide width.
pub struct Slide {
    image: Texture2D,
    scale: f32,
    frame: Vector2,
}

/// Scale that fits `(width, height)` inside `(max_width, max_height)` without upscaling.
pub fn fit_scale(width: f32, height: f32, max_width: f32, max_height: f32) -> f32 {
    if width <= 0.0 || height <= 0.0 {
        return 1.0;
    }
    (max_width / width).min(max_height / height).min(1.0)
}

impl Slide {
    pub fn new(image: Texture2D, viewport: Vector2) -> Self {
        let tex_width = image.width() as f32;
        let tex_height = image.height() as f32;
        let scale = fit_scale(tex_width, tex_height, viewport.x, viewport.y);

        Self {
            image,
            scale,
            frame: Vector2::new(tex_width * scale, viewport.y),
        }
    }

    pub fn width(&self) -> f32 {
        self.frame.x
    }

    pub fn draw(&self, d: &mut impl RaylibDraw, x: f32, y: f32) {
        let tex_width = self.image.width() as f32;
        let tex_height = self.image.height() as f32;
        let scaled_height = tex_height * self.scale;

        // Centered vertically inside the frame
        let dest = Rectangle::new(
            x,
            y + (self.frame.y - scaled_height) * 0.5,
            self.frame.x,
            scaled_height,
        );

        d.draw_texture_pro(
            &self.image,
            Rectangle::new(0.0, 0.0, tex_width, tex_height),
            dest,
            Vector2::new(0.0, 0.0),
            0.0,
            Color::WHITE,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_scale_shrinks_to_the_tighter_axis() {
        assert_eq!(fit_scale(3840.0, 1080.0, 1920.0, 1080.0), 0.5);
        assert_eq!(fit_scale(1000.0, 2160.0, 1920.0, 1080.0), 0.5);
    }

    #[test]
    fn fit_scale_never_upscales() {
        assert_eq!(fit_scale(640.0, 480.0, 1920.0, 1080.0), 1.0);
        assert_eq!(fit_scale(0.0, 480.0, 1920.0, 1080.0), 1.0);
    }
}
