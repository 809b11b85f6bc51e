//! The carousel state machine.
//!
//! [`step`] is a pure function from `(state, input, now)` to the next state and
//! the transition to render, if any. [`Carousel`] owns one state and feeds it.
//! `now` is the time elapsed since the widget was created; the auto-advance
//! timer is a deadline on that clock, so nothing here sleeps or spawns.

use std::time::Duration;

use crate::config::{CarouselConfig, KeyboardScope};
use crate::gesture::{Swipe, classify_swipe};
use crate::state::{CarouselState, Direction};
use crate::timer::AutoAdvanceTimer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
}

/// Everything the carousel reacts to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Input {
    /// Indicator `i` was clicked.
    Select(usize),
    /// Previous button.
    Previous,
    /// Next button.
    Next,
    Key(Key),
    TouchStart(f32),
    TouchEnd(f32),
    HoverEnter,
    HoverLeave,
    /// Clock update; advances the carousel when the timer is due.
    Tick,
}

/// A change of active slide for the presentation layer to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: usize,
    pub to: usize,
    pub direction: Direction,
}

impl Transition {
    /// The target was already active: skip animations, still restart media.
    pub fn is_reselect(&self) -> bool {
        self.from == self.to
    }
}

/// Fixed facts about one carousel instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselParams {
    pub len: usize,
    pub swipe_threshold_px: f32,
    pub keyboard_scope: KeyboardScope,
}

/// Activate `index`. Caller guarantees `index < len`.
pub fn go_to(state: &mut CarouselState, index: usize, direction: Direction) -> Transition {
    let transition = Transition {
        from: state.current_index,
        to: index,
        direction,
    };
    state.current_index = index;
    transition
}

/// Cancel and reschedule the auto-advance. Stays stopped while hovering.
fn reset_timer(state: &mut CarouselState, now: Duration) {
    state.timer.stop();
    if !state.is_hovering {
        state.timer.start(now);
    }
}

pub fn advance(state: &mut CarouselState, len: usize, now: Duration) -> Transition {
    let index = (state.current_index + 1) % len;
    let transition = go_to(state, index, Direction::Forward);
    reset_timer(state, now);
    transition
}

pub fn retreat(state: &mut CarouselState, len: usize, now: Duration) -> Transition {
    let index = (state.current_index + len - 1) % len;
    let transition = go_to(state, index, Direction::Backward);
    reset_timer(state, now);
    transition
}

pub fn step(
    mut state: CarouselState,
    params: &CarouselParams,
    input: Input,
    now: Duration,
) -> (CarouselState, Option<Transition>) {
    if params.len == 0 {
        return (state, None);
    }

    let transition = match input {
        Input::Select(index) if index < params.len => {
            let direction = if index > state.current_index {
                Direction::Forward
            } else {
                Direction::Backward
            };
            let transition = go_to(&mut state, index, direction);
            reset_timer(&mut state, now);
            Some(transition)
        }
        Input::Select(_) => None,
        Input::Next => Some(advance(&mut state, params.len, now)),
        Input::Previous => Some(retreat(&mut state, params.len, now)),
        Input::Key(_) if params.keyboard_scope == KeyboardScope::Hover && !state.is_hovering => None,
        Input::Key(Key::ArrowRight) => Some(advance(&mut state, params.len, now)),
        Input::Key(Key::ArrowLeft) => Some(retreat(&mut state, params.len, now)),
        Input::TouchStart(x) => {
            state.touch_start_x = Some(x);
            None
        }
        Input::TouchEnd(end_x) => {
            let swipe = state
                .touch_start_x
                .take()
                .and_then(|start_x| classify_swipe(start_x, end_x, params.swipe_threshold_px));
            match swipe {
                Some(Swipe::Next) => Some(advance(&mut state, params.len, now)),
                Some(Swipe::Previous) => Some(retreat(&mut state, params.len, now)),
                None => None,
            }
        }
        Input::HoverEnter => {
            state.is_hovering = true;
            state.timer.stop();
            None
        }
        Input::HoverLeave => {
            state.is_hovering = false;
            state.timer.start(now);
            None
        }
        Input::Tick => {
            if !state.is_hovering && state.timer.is_due(now) {
                Some(advance(&mut state, params.len, now))
            } else {
                None
            }
        }
    };

    (state, transition)
}

/// One carousel instance.
#[derive(Debug, Clone)]
pub struct Carousel {
    state: CarouselState,
    params: CarouselParams,
}

impl Carousel {
    /// Build a carousel over `len` slides, started at `now`.
    ///
    /// Returns `None` for an empty carousel, which does nothing at all.
    /// Otherwise also returns the initial activation of slide 0.
    pub fn new(len: usize, config: &CarouselConfig, now: Duration) -> Option<(Self, Transition)> {
        if len == 0 {
            return None;
        }

        let mut state = CarouselState::new(AutoAdvanceTimer::new(config.auto_advance_delay()));
        let initial = go_to(&mut state, 0, Direction::Forward);
        state.timer.start(now);

        let params = CarouselParams {
            len,
            swipe_threshold_px: config.swipe_threshold_px,
            keyboard_scope: config.keyboard_scope,
        };
        Some((Self { state, params }, initial))
    }

    pub fn handle(&mut self, input: Input, now: Duration) -> Option<Transition> {
        let (state, transition) = step(self.state, &self.params, input, now);
        self.state = state;
        transition
    }

    /// Jump straight to `index` without touching the timer.
    pub fn go_to(&mut self, index: usize, direction: Direction) -> Option<Transition> {
        if index >= self.params.len {
            return None;
        }
        Some(go_to(&mut self.state, index, direction))
    }

    pub fn advance(&mut self, now: Duration) -> Transition {
        advance(&mut self.state, self.params.len, now)
    }

    pub fn retreat(&mut self, now: Duration) -> Transition {
        retreat(&mut self.state, self.params.len, now)
    }

    pub fn len(&self) -> usize {
        self.params.len
    }

    /// Always false: empty carousels are never built.
    pub fn is_empty(&self) -> bool {
        self.params.len == 0
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    pub fn is_hovering(&self) -> bool {
        self.state.is_hovering
    }

    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    /// Elapsed fraction of the auto-advance interval; `None` while paused.
    pub fn progress(&self, now: Duration) -> Option<f32> {
        self.state.timer.progress(now)
    }
}
