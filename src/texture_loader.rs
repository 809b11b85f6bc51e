use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use exif::{In, Reader, Tag, Value};
use hero_carousel::MediaKind;
use raylib::prelude::*;

#[derive(Debug, Clone)]
pub struct MediaEntry {
    pub path: PathBuf,
    pub kind: MediaKind,
}

// --- List slide files, sorted by name ---
pub fn load_sorted_media_paths(dir_path: &Path) -> Result<Vec<MediaEntry>> {
    let entries = fs::read_dir(dir_path)
        .with_context(|| format!("Failed to read directory {}", dir_path.display()))?;

    let mut media = Vec::new();
    for entry in entries {
        let path = entry.context("Failed to read directory entry")?.path();
        if !path.is_file() {
            continue;
        }
        if let Some(kind) = MediaKind::from_path(&path) {
            media.push(MediaEntry { path, kind });
        }
    }
    media.sort_by(|a, b| a.path.file_name().cmp(&b.path.file_name()));
    Ok(media)
}

// EXIF orientation of a JPEG, 1 (upright) when absent or unreadable
fn exif_orientation(image_path: &Path, file_bytes: &[u8]) -> u16 {
    match Reader::new().read_from_container(&mut Cursor::new(file_bytes)) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| match &field.value {
                Value::Short(values) => values.first().copied(),
                _ => None,
            })
            .unwrap_or(1),
        Err(e) => {
            tracing::warn!(path = %image_path.display(), error = %e, "Could not read EXIF data");
            1
        }
    }
}

// --- Load Image, Apply EXIF Rotation, Create Texture ---
pub fn load_texture_with_exif_rotation(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    image_path: &Path,
) -> Result<Texture2D> {
    let file_bytes = fs::read(image_path)
        .with_context(|| format!("Failed to read file {}", image_path.display()))?;

    let extension = image_path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase();

    // Only JPEG carries orientation reliably
    let orientation = if extension == "jpg" || extension == "jpeg" {
        exif_orientation(image_path, &file_bytes)
    } else {
        1
    };

    let mut image = Image::load_image_from_mem(&format!(".{}", extension), &file_bytes)
        .map_err(|e| anyhow!("Failed to decode {}: {}", image_path.display(), e))?;

    // 3 = 180 deg, 6 = 90 deg CW, 8 = 90 deg CCW. Flipped variants are ignored.
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
        tracing::debug!(path = %image_path.display(), orientation, "Applied EXIF rotation");
    }

    rl.load_texture_from_image(thread, &image)
        .map_err(|e| anyhow!("Failed to create texture for {}: {}", image_path.display(), e))
}

// Black texture that video frames are uploaded into
pub fn blank_texture(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    width: i32,
    height: i32,
) -> Result<Texture2D> {
    let image = Image::gen_image_color(width, height, Color::BLACK);
    rl.load_texture_from_image(thread, &image)
        .map_err(|e| anyhow!("Failed to create {}x{} video texture: {}", width, height, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_supported_files_in_name_order() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["03-charging.png", "01-intro.mp4", "notes.txt", "02-cabin.JPG"] {
            fs::write(dir.path().join(name), b"").unwrap();
        }
        fs::create_dir(dir.path().join("04-folder.png")).unwrap();

        let media = load_sorted_media_paths(dir.path()).unwrap();
        let names: Vec<_> = media
            .iter()
            .map(|m| m.path.file_name().unwrap().to_str().unwrap().to_string())
            .collect();

        assert_eq!(names, ["01-intro.mp4", "02-cabin.JPG", "03-charging.png"]);
        assert_eq!(media[0].kind, MediaKind::Video);
        assert_eq!(media[1].kind, MediaKind::Static);
    }

    #[test]
    fn empty_directory_gives_no_slides() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_sorted_media_paths(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_sorted_media_paths(&dir.path().join("missing")).is_err());
    }
}
