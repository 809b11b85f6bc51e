use std::path::Path;

use crate::error::MediaError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Video,
    Static,
}

impl MediaKind {
    /// Classify a file by extension. `None` for files the carousel can't show.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "png" | "jpg" | "jpeg" | "bmp" | "gif" => Some(Self::Static),
            "mp4" | "webm" | "mov" | "mkv" => Some(Self::Video),
            _ => None,
        }
    }
}

/// Something on a slide that can play.
pub trait Media {
    fn play(&mut self) -> Result<(), MediaError>;
    fn pause(&mut self);
    /// Return to the first frame.
    fn rewind(&mut self);
}
