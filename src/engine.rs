use std::time::Duration;

use hero_carousel::constants::{VIDEO_FRAME_HEIGHT, VIDEO_FRAME_WIDTH};
use hero_carousel::{Carousel, CarouselConfig, Input, Key, MediaKind, Stage, Transition};
use raylib::prelude::*;

use crate::ffmpeg::VideoClip;
use crate::layout::{Control, Layout};
use crate::slide::SlideSprite;
use crate::texture_loader::{MediaEntry, blank_texture, load_texture_with_exif_rotation};

const BUTTON_FILL: Color = Color { r: 0, g: 0, b: 0, a: 110 };
const DOT_IDLE: Color = Color { r: 255, g: 255, b: 255, a: 120 };
const DOT_TRACK: Color = Color { r: 255, g: 255, b: 255, a: 70 };

/// Carousel on a raylib window: turns window input into carousel inputs and
/// draws the stage every frame.
pub struct CarouselEngine {
    carousel: Carousel,
    stage: Stage<VideoClip>,
    sprites: Vec<SlideSprite>,
    layout: Layout,
    clock: Duration,
    pointer_inside: bool,
}

impl CarouselEngine {
    /// Load every entry as a slide. `None` when nothing could be loaded.
    pub fn initialize(
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        entries: Vec<MediaEntry>,
        config: &CarouselConfig,
    ) -> Option<Self> {
        let mut sprites = Vec::new();
        let mut media = Vec::new();

        for entry in entries {
            let loaded = match entry.kind {
                MediaKind::Static => load_texture_with_exif_rotation(rl, thread, &entry.path)
                    .map(|texture| (texture, None)),
                MediaKind::Video => blank_texture(rl, thread, VIDEO_FRAME_WIDTH, VIDEO_FRAME_HEIGHT)
                    .map(|texture| {
                        let clip = VideoClip::new(entry.path.clone(), VIDEO_FRAME_WIDTH, VIDEO_FRAME_HEIGHT);
                        (texture, Some(clip))
                    }),
            };
            match loaded {
                Ok((texture, clip)) => {
                    sprites.push(SlideSprite::new(texture));
                    media.push(clip);
                }
                Err(e) => tracing::warn!(path = %entry.path.display(), error = %e, "Skipping slide"),
            }
        }

        let (carousel, initial) = Carousel::new(sprites.len(), config, Duration::ZERO)?;
        let mut stage = Stage::new(media, config);
        stage.apply(&initial);

        let layout = Layout::compute(
            rl.get_screen_width() as f32,
            rl.get_screen_height() as f32,
            carousel.len(),
        );

        Some(Self {
            carousel,
            stage,
            sprites,
            layout,
            clock: Duration::ZERO,
            pointer_inside: false,
        })
    }

    pub fn slide_count(&self) -> usize {
        self.carousel.len()
    }

    fn collect_inputs(&mut self, rl: &RaylibHandle) -> Vec<Input> {
        let mut inputs = Vec::new();

        let inside = rl.is_cursor_on_screen();
        if inside != self.pointer_inside {
            self.pointer_inside = inside;
            inputs.push(if inside { Input::HoverEnter } else { Input::HoverLeave });
        }

        if rl.is_key_pressed(KeyboardKey::KEY_LEFT) {
            inputs.push(Input::Key(Key::ArrowLeft));
        }
        if rl.is_key_pressed(KeyboardKey::KEY_RIGHT) {
            inputs.push(Input::Key(Key::ArrowRight));
        }

        // A press on a control clicks it; anywhere else it may start a swipe
        let mouse = rl.get_mouse_position();
        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            inputs.push(match self.layout.hit_test(mouse) {
                Some(Control::Indicator(i)) => Input::Select(i),
                Some(Control::Previous) => Input::Previous,
                Some(Control::Next) => Input::Next,
                None => Input::TouchStart(mouse.x),
            });
        }
        if rl.is_mouse_button_released(MouseButton::MOUSE_BUTTON_LEFT) {
            inputs.push(Input::TouchEnd(mouse.x));
        }

        inputs.push(Input::Tick);
        inputs
    }

    fn apply(&mut self, transition: Transition) {
        tracing::debug!(
            from = transition.from,
            to = transition.to,
            direction = ?transition.direction,
            "Slide transition"
        );
        self.stage.apply(&transition);

        // The target video restarts from its first frame
        let restarted_video = self
            .stage
            .slides()
            .get(transition.to)
            .is_some_and(|slide| slide.media().is_some());
        if restarted_video {
            if let Some(sprite) = self.sprites.get_mut(transition.to) {
                if let Err(e) = sprite.clear() {
                    tracing::debug!(error = %e, "Could not blank video slide");
                }
            }
        }
    }

    fn upload_video_frames(&mut self) {
        for (slide, sprite) in self.stage.slides().iter().zip(self.sprites.iter_mut()) {
            if !slide.is_visible() {
                continue;
            }
            if let Some(frame) = slide.media().and_then(VideoClip::take_frame) {
                if let Err(e) = sprite.upload_frame(&frame) {
                    tracing::debug!(error = %e, "Dropped video frame");
                }
            }
        }
    }

    pub fn render_frame(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread) {
        let dt = Duration::from_secs_f32(rl.get_frame_time());
        self.clock += dt;

        self.layout = Layout::compute(
            rl.get_screen_width() as f32,
            rl.get_screen_height() as f32,
            self.carousel.len(),
        );

        let was_hovering = self.carousel.is_hovering();
        for input in self.collect_inputs(rl) {
            if let Some(transition) = self.carousel.handle(input, self.clock) {
                self.apply(transition);
            }
        }
        if was_hovering != self.carousel.is_hovering() {
            tracing::debug!(hovering = self.carousel.is_hovering(), "Auto-advance paused state changed");
        }

        self.stage.update(dt);
        self.upload_video_frames();

        let progress = self.carousel.progress(self.clock);
        let mut d = rl.begin_drawing(thread);
        d.clear_background(Color::BLACK);

        // Outgoing slides first so the active one ends up on top
        for pass_active in [false, true] {
            for (slide, sprite) in self.stage.slides().iter().zip(self.sprites.iter()) {
                if slide.is_visible() && slide.is_active() == pass_active {
                    sprite.draw(&mut d, slide.motion());
                }
            }
        }

        self.draw_controls(&mut d, progress);
    }

    fn draw_controls(&self, d: &mut RaylibDrawHandle, progress: Option<f32>) {
        let font_size = 32;
        for (rect, label) in [(self.layout.previous(), "<"), (self.layout.next(), ">")] {
            d.draw_rectangle_rec(rect, BUTTON_FILL);
            d.draw_text(
                label,
                (rect.x + rect.width * 0.5 - font_size as f32 * 0.25) as i32,
                (rect.y + (rect.height - font_size as f32) * 0.5) as i32,
                font_size,
                Color::WHITE,
            );
        }

        for (rect, indicator) in self.layout.indicators().iter().zip(self.stage.indicators()) {
            if !indicator.active {
                let radius = rect.width * 0.5;
                d.draw_circle((rect.x + radius) as i32, (rect.y + radius) as i32, radius, DOT_IDLE);
                continue;
            }

            // Active dot is lifted and enlarged, filled with the elapsed share
            // of the auto-advance interval
            let lifted = Rectangle::new(
                rect.x - rect.width * 0.05,
                rect.y - 5.0 - rect.height * 0.05,
                rect.width * 1.1,
                rect.height * 1.1,
            );
            d.draw_rectangle_rec(lifted, DOT_TRACK);

            let fill = if indicator.animating { progress.unwrap_or(1.0) } else { 1.0 };
            d.draw_rectangle_rec(
                Rectangle::new(lifted.x, lifted.y, lifted.width * fill, lifted.height),
                Color::WHITE,
            );
        }
    }
}
