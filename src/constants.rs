pub const RENDER_WIDTH: i32 = 1920;           // Width of the render texture
pub const RENDER_HEIGHT: i32 = 1080;          // Height of the render texture
pub const FPS: u32 = 60;                      // Frames per second
pub const FRAME_TIME: f32 = 1.0 / FPS as f32; // Time per frame (seconds)

pub const AUTOPLAY_INTERVAL: f32 = 3.0;       // Time between autoplay transitions (seconds)
pub const TRANSITION_DURATION: f32 = 1.0;     // Duration of one slide transition (seconds)
pub const QUEUE_CAPACITY: usize = 4;          // Pending triggers kept when overlap policy is Queue

pub const ARROW_SIZE: f32 = 48.0;             // Half height of the previous/next arrows
pub const ARROW_MARGIN: f32 = 24.0;           // Distance between arrows and viewport edge
