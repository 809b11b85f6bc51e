/// Result of a completed horizontal swipe.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Swipe {
    /// Finger moved leftward: show the next slide.
    Next,
    /// Finger moved rightward: show the previous slide.
    Previous,
}

/// Classify a touch that started at `start_x` and ended at `end_x`.
///
/// Travel must strictly exceed `threshold`; taps and jitter give `None`.
pub fn classify_swipe(start_x: f32, end_x: f32, threshold: f32) -> Option<Swipe> {
    let diff = start_x - end_x;
    if diff.abs() <= threshold {
        return None;
    }
    if diff > 0.0 { Some(Swipe::Next) } else { Some(Swipe::Previous) }
}
