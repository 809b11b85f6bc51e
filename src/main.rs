use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use hero_carousel::constants::*;
use hero_carousel::{CarouselConfig, KeyboardScope, Preset, TransitionStyle};
use raylib::prelude::*;
use tracing_subscriber::EnvFilter;

mod engine;
mod ffmpeg;
mod layout;
mod slide;
mod texture_loader;

use crate::engine::CarouselEngine;
use crate::texture_loader::load_sorted_media_paths;

/// Auto-advancing carousel of the images and videos in a directory.
#[derive(Parser, Debug)]
#[command(name = "hero-carousel", version, about)]
struct Cli {
    /// Directory holding the slides, shown in file name order
    media_dir: PathBuf,

    /// TOML file with carousel settings (replaces the preset)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Built-in settings to start from
    #[arg(long, value_enum, default_value_t = Preset::Showcase)]
    preset: Preset,

    /// Milliseconds each slide stays up before auto-advancing
    #[arg(long)]
    delay_ms: Option<u64>,

    #[arg(long, value_enum)]
    transition: Option<TransitionStyle>,

    /// Where arrow keys are listened for
    #[arg(long, value_enum)]
    keyboard_scope: Option<KeyboardScope>,

    #[arg(long, default_value_t = WINDOW_WIDTH)]
    width: i32,

    #[arg(long, default_value_t = WINDOW_HEIGHT)]
    height: i32,
}

impl Cli {
    fn resolve_config(&self) -> Result<CarouselConfig> {
        let mut config = match &self.config {
            Some(path) => CarouselConfig::load(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => CarouselConfig::from_preset(self.preset),
        };
        if let Some(delay_ms) = self.delay_ms {
            config.auto_advance_ms = delay_ms;
        }
        if let Some(transition) = self.transition {
            config.transition = transition;
        }
        if let Some(scope) = self.keyboard_scope {
            config.keyboard_scope = scope;
        }
        config.validate()?;
        Ok(config)
    }
}

// Keep a message on screen for a while, or until the window is closed
fn show_error(rl: &mut RaylibHandle, thread: &RaylibThread, message: &str) {
    let shown_at = Instant::now();
    while !rl.window_should_close() && shown_at.elapsed() < Duration::from_secs(ERROR_SCREEN_SECS) {
        let mut d = rl.begin_drawing(thread);
        d.clear_background(Color::BLACK);
        d.draw_text(message, 20, 20, 20, Color::RED);
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = cli.resolve_config()?;
    tracing::info!(
        media_dir = %cli.media_dir.display(),
        auto_advance_ms = config.auto_advance_ms,
        transition = ?config.transition,
        keyboard_scope = ?config.keyboard_scope,
        "Starting carousel"
    );

    let (mut rl, thread) = raylib::init()
        .size(cli.width, cli.height)
        .title("Hero Carousel")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    // --- Load Slides ---
    let entries = match load_sorted_media_paths(&cli.media_dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::error!(error = %e, "Could not list slides");
            show_error(&mut rl, &thread, &format!("Error: {:#}", e));
            return Ok(());
        }
    };

    let Some(mut engine) = CarouselEngine::initialize(&mut rl, &thread, entries, &config) else {
        tracing::warn!(media_dir = %cli.media_dir.display(), "No slides loaded");
        show_error(&mut rl, &thread, "Error: No slides loaded.");
        return Ok(());
    };
    tracing::info!(slides = engine.slide_count(), "Slides loaded");

    // --- Main Loop ---
    while !rl.window_should_close() {
        engine.render_frame(&mut rl, &thread);
    }

    Ok(())
}
