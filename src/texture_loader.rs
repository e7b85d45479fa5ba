use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use exif::{In, Reader, Tag, Value};
use log::{debug, warn};
use rand::seq::SliceRandom;
use raylib::prelude::*;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("no image files found in directory {0:?}")]
    NoImages(PathBuf),
    #[error("failed to decode {path:?}: {reason}")]
    Decode { path: PathBuf, reason: String },
    #[error("failed to upload texture for {path:?}: {reason}")]
    Texture { path: PathBuf, reason: String },
}

fn is_supported(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| matches!(ext.to_lowercase().as_str(), "png" | "jpg" | "jpeg" | "bmp" | "gif"))
        .unwrap_or(false)
}

// --- Load and Sort Image Paths ---
pub fn load_sorted_image_paths(dir_path: &Path, shuffle: bool) -> Result<Vec<PathBuf>, LoadError> {
    let io_err = |source| LoadError::Io { path: dir_path.to_path_buf(), source };

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir_path).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        if path.is_file() && is_supported(&path) {
            paths.push(path);
        }
    }

    if paths.is_empty() {
        return Err(LoadError::NoImages(dir_path.to_path_buf()));
    }

    if shuffle {
        paths.shuffle(&mut rand::rng());
    } else {
        paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    }
    Ok(paths)
}

/// EXIF orientation tag of a JPEG, 1 (upright) when absent or unreadable.
fn read_orientation(image_path: &Path, file_bytes: &[u8]) -> u16 {
    match Reader::new().read_from_container(&mut Cursor::new(file_bytes)) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| match &field.value {
                Value::Short(values) => values.first().copied(),
                _ => None,
            })
            .unwrap_or(1),
        Err(e) => {
            warn!("could not read EXIF data for {:?}: {}", image_path, e);
            1
        }
    }
}

// --- Load Image, Apply EXIF Rotation, Create Texture ---
pub fn load_texture_with_exif_rotation(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    image_path: &Path,
) -> Result<Texture2D, LoadError> {
    let file_bytes = fs::read(image_path)
        .map_err(|source| LoadError::Io { path: image_path.to_path_buf(), source })?;

    let extension = image_path.extension().and_then(|s| s.to_str()).unwrap_or("").to_lowercase();

    // EXIF is only reliable for JPEG
    let orientation = if extension == "jpg" || extension == "jpeg" {
        read_orientation(image_path, &file_bytes)
    } else {
        1
    };

    let mut image = Image::load_image_from_mem(&format!(".{}", extension), &file_bytes)
        .map_err(|e| LoadError::Decode { path: image_path.to_path_buf(), reason: e.to_string() })?;

    // 3 = 180 deg, 6 = 90 deg CW, 8 = 90 deg CCW. Flipped orientations are ignored.
    match orientation {
        3 => {
            image.rotate_cw();
            image.rotate_cw();
        }
        6 => image.rotate_cw(),
        8 => image.rotate_ccw(),
        _ => {}
    }
    if orientation != 1 {
        debug!("applied EXIF orientation {} to {:?}", orientation, image_path);
    }

    let texture = rl.load_texture_from_image(thread, &image)
        .map_err(|e| LoadError::Texture { path: image_path.to_path_buf(), reason: e.to_string() })?;

    Ok(texture)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("carousel-loader-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn lists_supported_images_sorted_by_name() {
        let dir = scratch_dir("sorted");
        for name in ["c.JPG", "a.png", "notes.txt", "b.gif"] {
            fs::write(dir.join(name), b"").unwrap();
        }
        fs::create_dir(dir.join("nested.png")).unwrap();

        let paths = load_sorted_image_paths(&dir, false).unwrap();
        let names: Vec<_> = paths.iter().map(|p| p.file_name().unwrap().to_str().unwrap()).collect();
        assert_eq!(names, vec!["a.png", "b.gif", "c.JPG"]);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn shuffle_keeps_the_same_set() {
        let dir = scratch_dir("shuffle");
        for name in ["1.png", "2.png", "3.png", "4.png"] {
            fs::write(dir.join(name), b"").unwrap();
        }

        let mut paths = load_sorted_image_paths(&dir, true).unwrap();
        paths.sort();
        assert_eq!(paths.len(), 4);
        assert!(paths[0].ends_with("1.png"));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn empty_directory_is_an_error() {
        let dir = scratch_dir("empty");
        assert!(matches!(load_sorted_image_paths(&dir, false), Err(LoadError::NoImages(_))));
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_directory_is_an_io_error() {
        let dir = std::env::temp_dir().join("carousel-loader-does-not-exist");
        assert!(matches!(load_sorted_image_paths(&dir, false), Err(LoadError::Io { .. })));
    }

    #[test]
    fn non_exif_bytes_default_to_upright() {
        assert_eq!(read_orientation(Path::new("x.jpg"), b"not a jpeg"), 1);
    }
}
