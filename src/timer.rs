use std::time::Duration;

/// Repeating auto-advance timer, expressed as a deadline on the carousel clock.
///
/// At most one deadline exists; `start` replaces it and `stop` is idempotent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoAdvanceTimer {
    delay: Duration,
    deadline: Option<Duration>,
}

impl AutoAdvanceTimer {
    pub fn new(delay: Duration) -> Self {
        Self { delay, deadline: None }
    }

    pub fn deadline(&self) -> Option<Duration> {
        self.deadline
    }

    pub fn is_running(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn start(&mut self, now: Duration) {
        self.deadline = Some(now + self.delay);
    }

    pub fn stop(&mut self) {
        self.deadline = None;
    }

    /// True once the deadline has been reached.
    pub fn is_due(&self, now: Duration) -> bool {
        self.deadline.is_some_and(|deadline| now >= deadline)
    }

    /// Fraction of the current interval already elapsed, in `[0, 1]`.
    pub fn progress(&self, now: Duration) -> Option<f32> {
        let deadline = self.deadline?;
        let remaining = deadline.saturating_sub(now);
        let elapsed = self.delay.saturating_sub(remaining);
        Some((elapsed.as_secs_f32() / self.delay.as_secs_f32()).clamp(0.0, 1.0))
    }
}
