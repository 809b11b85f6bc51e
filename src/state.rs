use crate::timer::AutoAdvanceTimer;

/// Which way the carousel moved. Only picks enter/exit animations.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Direction {
    Forward,
    Backward,
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub struct CarouselState {
    pub current_index: usize,
    pub is_hovering: bool,
    pub timer: AutoAdvanceTimer,
    pub touch_start_x: Option<f32>, // Pointer x recorded at touch start
}

impl CarouselState {
    pub fn new(timer: AutoAdvanceTimer) -> Self {
        Self {
            current_index: 0,
            is_hovering: false,
            timer,
            touch_start_x: None,
        }
    }
}
