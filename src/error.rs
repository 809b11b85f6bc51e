use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while setting up a carousel.
#[derive(Debug, Error)]
pub enum CarouselError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

/// Playback failures. The carousel swallows these; they only exist so media
/// backends can report why a slide stayed still.
#[derive(Debug, Error)]
pub enum MediaError {
    #[error("Failed to start playback of {path}: {source}")]
    Spawn {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Playback of {0} produced no output stream")]
    MissingOutput(PathBuf),
}
