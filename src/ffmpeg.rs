use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Child, ChildStdin, Command, Stdio};
use log::{debug, warn};
use raylib::prelude::*;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecorderError {
    #[error("failed to start ffmpeg for {path:?}: {source}")]
    Spawn {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("ffmpeg stdin is not available")]
    NoStdin,
    #[error("failed to write frame to ffmpeg: {0}")]
    Write(#[from] std::io::Error),
}

/// Pipes raw RGBA frames into an `ffmpeg` child process encoding H.264.
pub struct Ffmpeg {
    process: Child,
    stdin: Option<ChildStdin>,
    frames: u64,
}

/// Copy an RGBA buffer row by row from bottom to top.
///
/// Render textures come back upside down, ffmpeg wants the top row first.
pub fn flip_rows(pixels: &[u8], width: usize, height: usize, mut sink: impl FnMut(&[u8]) -> std::io::Result<()>) -> std::io::Result<()> {
    let stride = width * 4;
    for y in (0..height).rev() {
        sink(&pixels[y * stride..(y + 1) * stride])?;
    }
    Ok(())
}

impl Ffmpeg {
    pub fn new(width: i32, height: i32, fps: u32, video_path: &Path) -> Result<Ffmpeg, RecorderError> {
        let mut process = Command::new("ffmpeg")
            .stdin(Stdio::piped())
            .args(["-loglevel", "error"])
            .arg("-y")
            .args(["-f", "rawvideo"])
            .args(["-pixel_format", "rgba"])
            .args(["-video_size", &format!("{}x{}", width, height)])
            .args(["-framerate", &format!("{}", fps)])
            .args(["-i", "-"])
            .args(["-c:v", "libx264"])
            .args(["-pix_fmt", "yuv420p"])
            .arg(video_path)
            .spawn()
            .map_err(|source| RecorderError::Spawn { path: video_path.to_path_buf(), source })?;
        let stdin = process.stdin.take().ok_or(RecorderError::NoStdin)?;
        debug!("recording to {:?}", video_path);
        Ok(Ffmpeg { process, stdin: Some(stdin), frames: 0 })
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn write(&mut self, image: &Image) -> Result<(), RecorderError> {
        let stdin = self.stdin.as_mut().ok_or(RecorderError::NoStdin)?;
        let width = image.width() as usize;
        let height = image.height() as usize;

        // SAFETY: an uncompressed RGBA image owns width * height * 4 bytes at `data()`.
        let pixels = unsafe { std::slice::from_raw_parts(image.data() as *const u8, width * height * 4) };

        flip_rows(pixels, width, height, |row| stdin.write_all(row))?;
        self.frames += 1;
        Ok(())
    }
}

impl Drop for Ffmpeg {
    fn drop(&mut self) {
        // Closing stdin tells ffmpeg the stream ended
        self.stdin = None;
        match self.process.wait() {
            Ok(status) if !status.success() => warn!("ffmpeg exited with {}", status),
            Ok(_) => debug!("ffmpeg finished after {} frames", self.frames),
            Err(e) => warn!("failed to wait for ffmpeg: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_come_out_bottom_first() {
        // 1x3 image, one RGBA pixel per row
        let pixels: Vec<u8> = (0..12).collect();
        let mut out = Vec::new();
        flip_rows(&pixels, 1, 3, |row| {
            out.extend_from_slice(row);
            Ok(())
        })
        .unwrap();
        assert_eq!(out, vec![8, 9, 10, 11, 4, 5, 6, 7, 0, 1, 2, 3]);
    }
}
