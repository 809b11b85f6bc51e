//! Presentation model: what each slide and indicator looks like right now.
//!
//! The carousel decides *which* slide is active; the stage turns each
//! [`Transition`] into active flags, enter/exit motions and media playback.

use std::time::Duration;

use crate::carousel::Transition;
use crate::config::{CarouselConfig, TransitionStyle};
use crate::media::Media;
use crate::state::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionKind {
    EnterFromRight,
    EnterFromLeft,
    ExitToLeft,
    ExitToRight,
}

impl MotionKind {
    fn enter(direction: Direction) -> Self {
        match direction {
            Direction::Forward => Self::EnterFromRight,
            Direction::Backward => Self::EnterFromLeft,
        }
    }

    fn exit(direction: Direction) -> Self {
        match direction {
            Direction::Forward => Self::ExitToLeft,
            Direction::Backward => Self::ExitToRight,
        }
    }

    /// Horizontal offset, in slide widths, at progress `t` in `[0, 1]`.
    pub fn offset(&self, t: f32) -> f32 {
        match self {
            Self::EnterFromRight => 1.0 - t,
            Self::EnterFromLeft => t - 1.0,
            Self::ExitToLeft => -t,
            Self::ExitToRight => t,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub kind: MotionKind,
    elapsed: Duration,
    duration: Duration,
}

impl Motion {
    fn new(kind: MotionKind, duration: Duration) -> Self {
        Self { kind, elapsed: Duration::ZERO, duration }
    }

    pub fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

#[derive(Debug)]
pub struct SlideView<M> {
    media: Option<M>,
    active: bool,
    motion: Option<Motion>,
}

impl<M> SlideView<M> {
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn motion(&self) -> Option<&Motion> {
        self.motion.as_ref()
    }

    /// Active, or still on its way out.
    pub fn is_visible(&self) -> bool {
        self.active || self.motion.is_some()
    }

    pub fn media(&self) -> Option<&M> {
        self.media.as_ref()
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct IndicatorView {
    pub active: bool,
    /// Shows the auto-advance progress.
    pub animating: bool,
}

#[derive(Debug)]
pub struct Stage<M> {
    slides: Vec<SlideView<M>>,
    indicators: Vec<IndicatorView>,
    style: TransitionStyle,
    transition_duration: Duration,
}

impl<M: Media> Stage<M> {
    /// One slide per entry; `None` marks a still slide.
    pub fn new(media: Vec<Option<M>>, config: &CarouselConfig) -> Self {
        let indicators = vec![IndicatorView::default(); media.len()];
        let slides = media
            .into_iter()
            .map(|media| SlideView { media, active: false, motion: None })
            .collect();
        Self {
            slides,
            indicators,
            style: config.transition,
            transition_duration: config.transition_duration(),
        }
    }

    pub fn slides(&self) -> &[SlideView<M>] {
        &self.slides
    }

    pub fn indicators(&self) -> &[IndicatorView] {
        &self.indicators
    }

    fn motion(&self, kind: MotionKind) -> Option<Motion> {
        match self.style {
            TransitionStyle::Slide => Some(Motion::new(kind, self.transition_duration)),
            TransitionStyle::Cut => None,
        }
    }

    pub fn apply(&mut self, transition: &Transition) {
        if transition.to >= self.slides.len() {
            return;
        }

        // Nothing keeps playing off screen
        for slide in self.slides.iter_mut() {
            if let Some(media) = slide.media.as_mut() {
                media.pause();
                media.rewind();
            }
        }

        let enter = self.motion(MotionKind::enter(transition.direction));
        let exit = self.motion(MotionKind::exit(transition.direction));

        for (i, slide) in self.slides.iter_mut().enumerate() {
            if i == transition.to {
                slide.active = true;
                if !transition.is_reselect() {
                    slide.motion = enter;
                }
                if let Some(media) = slide.media.as_mut() {
                    // Playback may be refused; the slide still shows
                    let _ = media.play();
                }
            } else if slide.active {
                slide.active = false;
                slide.motion = if i == transition.from { exit } else { None };
            }
        }

        for (i, indicator) in self.indicators.iter_mut().enumerate() {
            indicator.active = i == transition.to;
            indicator.animating = indicator.active;
        }
    }

    /// Advance running motions by `dt` and drop the finished ones.
    pub fn update(&mut self, dt: Duration) {
        for slide in self.slides.iter_mut() {
            if let Some(motion) = slide.motion.as_mut() {
                motion.elapsed += dt;
                if motion.is_finished() {
                    slide.motion = None;
                }
            }
        }
    }
}
