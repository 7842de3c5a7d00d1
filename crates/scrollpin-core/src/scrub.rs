use crate::constants::{SCRUB_LAG_SECS, SCRUB_SETTLE_EPSILON};

/// Lets rendered progress trail the raw scroll progress, the way a scrubbed
/// timeline catches up after a fling instead of tracking every wheel tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrubSmoother {
    lag_secs: f32,
    current: Option<f32>,
}

impl ScrubSmoother {
    pub fn new(lag_secs: f32) -> Self {
        Self {
            lag_secs: lag_secs.max(0.0),
            current: None,
        }
    }

    pub fn current(&self) -> Option<f32> {
        self.current
    }

    /// Advance toward `target` by `dt_secs` and return the smoothed value.
    pub fn step(&mut self, target: f32, dt_secs: f32) -> f32 {
        let next = match self.current {
            None => target,
            Some(_) if self.lag_secs <= 0.0 => target,
            Some(cur) => {
                // Three time constants fit inside the lag, so it is ~95% caught up
                let tau = self.lag_secs / 3.0;
                let alpha = 1.0 - (-dt_secs.max(0.0) / tau).exp();
                let v = cur + (target - cur) * alpha;
                if (target - v).abs() < SCRUB_SETTLE_EPSILON {
                    target
                } else {
                    v
                }
            }
        };
        self.current = Some(next);
        next
    }

    /// Skip smoothing entirely, e.g. after navigation resets scroll.
    pub fn jump(&mut self, target: f32) {
        self.current = Some(target);
    }

    pub fn is_settled(&self, target: f32) -> bool {
        self.current.map_or(true, |c| c == target)
    }
}

impl Default for ScrubSmoother {
    fn default() -> Self {
        Self::new(SCRUB_LAG_SECS)
    }
}
