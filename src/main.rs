use anyhow::Context;
use clap::Parser;
use log::{error, info};
use raylib::prelude::*;

mod carousel;
mod cli;
mod constants;
mod engine;
mod ffmpeg;
mod renderer;
mod slide;
mod state;
mod texture_loader;

use crate::cli::Args;
use crate::constants::*;
use crate::engine::Engine;
use crate::ffmpeg::Ffmpeg;
use crate::renderer::CarouselEngine;
use crate::texture_loader::load_sorted_image_paths;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run(Args::parse()) {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let mut engine = CarouselEngine::new(args.variant(), args.settings())?;

    let image_paths = load_sorted_image_paths(&args.image_directory, args.shuffle)
        .with_context(|| format!("loading images from {:?}", args.image_directory))?;
    info!("found {} images in {:?}", image_paths.len(), args.image_directory);

    let (mut rl, thread) = raylib::init()
        .size(args.width, args.height)
        .title("Image Carousel")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    engine.initialize(&mut rl, &thread, image_paths)?;

    let mut recorder = args
        .record
        .as_deref()
        .map(|path| Ffmpeg::new(RENDER_WIDTH, RENDER_HEIGHT, FPS, path))
        .transpose()?;

    let mut framebuffer = rl
        .load_render_texture(&thread, RENDER_WIDTH as u32, RENDER_HEIGHT as u32)
        .map_err(|e| anyhow::anyhow!("failed to create render texture: {}", e))?;

    let mut frame: u64 = 0;
    while !rl.window_should_close() {
        if args.frames.is_some_and(|limit| frame >= limit) {
            break;
        }

        // A recording needs a fixed clock so its timing does not depend on render speed
        let dt = if recorder.is_some() { FRAME_TIME } else { rl.get_frame_time() };

        engine.handle_input(&rl);
        if !engine.render_frame(dt, &mut rl, &thread, &mut framebuffer) {
            break;
        }

        {
            let mut d = rl.begin_drawing(&thread);
            let sw = d.get_screen_width() as f32;
            let sh = d.get_screen_height() as f32;

            // Render textures are stored upside down
            d.draw_texture_pro(
                &framebuffer,
                Rectangle::new(0.0, 0.0, framebuffer.width() as f32, -(framebuffer.height() as f32)),
                Rectangle::new(0.0, 0.0, sw, sh),
                Vector2::new(0.0, 0.0),
                0.0,
                Color::WHITE,
            );
        }

        if let Some(ffmpeg) = recorder.as_mut() {
            let image = framebuffer
                .load_image()
                .map_err(|e| anyhow::anyhow!("failed to read back frame: {}", e))?;
            ffmpeg.write(&image)?;
        }

        frame += 1;
    }

    engine.finish();

    if let Some(ffmpeg) = recorder {
        info!("recorded {} frames", ffmpeg.frames());
    }
    Ok(())
}
