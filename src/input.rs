use crate::constants::{PROGRAMMATIC_ECHO_SECS, SNAP_IDLE_SECS};

/// Tracks scroll gestures so snapping waits for the user to stop, and so
/// our own snap scrolling is not mistaken for user input.
///
/// Times are seconds on any monotonic clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct GestureTracker {
    last_user_scroll: Option<f64>,
    suppress_until: f64,
    snapped: bool,
}

impl GestureTracker {
    /// A `scroll` event. Ignored while our own scroll is echoing back.
    pub fn on_scroll_event(&mut self, now: f64) {
        if now < self.suppress_until {
            return;
        }
        self.on_user_input(now);
    }

    /// Wheel, touch or key input: always the user.
    pub fn on_user_input(&mut self, now: f64) {
        self.last_user_scroll = Some(now);
        self.snapped = false;
    }

    /// We just moved the page ourselves.
    pub fn mark_programmatic(&mut self, now: f64) {
        self.suppress_until = now + PROGRAMMATIC_ECHO_SECS;
    }

    pub fn user_active(&self, now: f64) -> bool {
        self.last_user_scroll
            .is_some_and(|t| now - t < SNAP_IDLE_SECS)
    }

    /// True once per gesture, after it has gone quiet.
    pub fn should_snap(&self, now: f64) -> bool {
        !self.snapped
            && self
                .last_user_scroll
                .is_some_and(|t| now - t >= SNAP_IDLE_SECS)
    }

    pub fn snap_planned(&mut self) {
        self.snapped = true;
    }

    /// Forget the current gesture (navigation resets scroll).
    pub fn reset(&mut self) {
        *self = GestureTracker::default();
    }
}
