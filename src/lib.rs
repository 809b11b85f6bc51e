//! Auto-advancing media carousel: hover pause, swipe, arrow keys and
//! indicator navigation over a fixed list of video and image slides.
//!
//! The library is window-free. [`carousel`] holds the state machine,
//! [`stage`] the per-slide presentation it drives.

pub mod carousel;
pub mod config;
pub mod constants;
pub mod error;
pub mod gesture;
pub mod media;
pub mod stage;
pub mod state;
pub mod timer;

pub use carousel::{Carousel, Input, Key, Transition};
pub use config::{CarouselConfig, KeyboardScope, Preset, TransitionStyle};
pub use error::{CarouselError, MediaError};
pub use media::{Media, MediaKind};
pub use stage::Stage;
pub use state::Direction;
