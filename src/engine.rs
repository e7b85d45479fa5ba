use raylib::prelude::*;
use std::path::PathBuf;

pub trait Engine {
    fn initialize(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread, paths: Vec<PathBuf>) -> anyhow::Result<()>;
    fn handle_input(&mut self, rl: &RaylibHandle);
    fn render_frame(&mut self, dt: f32, rl: &mut RaylibHandle, thread: &RaylibThread, framebuffer: &mut RenderTexture2D) -> bool;
    /// Settle any in-flight animation before the window closes.
    fn finish(&mut self);
}
