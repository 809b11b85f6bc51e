pub const WINDOW_WIDTH: i32 = 1280;           // Default window width
pub const WINDOW_HEIGHT: i32 = 720;           // Default window height
pub const FPS: u32 = 60;                      // Frames per second

pub const VIDEO_FRAME_WIDTH: i32 = 1280;      // Size video slides are decoded to
pub const VIDEO_FRAME_HEIGHT: i32 = 720;

pub const SHOWCASE_AUTO_ADVANCE_MS: u64 = 6000; // Time each slide stays up (showcase carousel)
pub const HERO_AUTO_ADVANCE_MS: u64 = 8000;     // Time each slide stays up (hero banner)
pub const TRANSITION_MS: u64 = 500;             // Enter/exit animation length
pub const SWIPE_THRESHOLD_PX: f32 = 50.0;       // Minimum horizontal travel for a swipe

pub const ERROR_SCREEN_SECS: u64 = 5;         // How long load errors stay on screen
