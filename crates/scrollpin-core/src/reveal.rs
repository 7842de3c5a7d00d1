use crate::constants::REVEAL_START_VIEWPORT;
use crate::easing::Ease;
use crate::layout::Viewport;
use crate::timeline::ElementId;
use crate::visual::{VisualSpec, VisualState};

/// A non-pinned element that plays a timed entrance the first time its top
/// scrolls to 80% of the viewport height. It never replays.
///
/// With a delay the element holds its `from` state for that long after
/// firing, which is how load-time sequences stagger their elements.
#[derive(Clone, Debug, PartialEq)]
pub struct RevealTrigger {
    element: ElementId,
    top: f32,
    from: VisualSpec,
    duration_secs: f32,
    delay_secs: f32,
    ease: Ease,
    elapsed_secs: Option<f32>,
}

impl RevealTrigger {
    pub fn new(element: impl Into<ElementId>, top: f32, from: VisualSpec, duration_secs: f32) -> Self {
        Self {
            element: element.into(),
            top,
            from,
            duration_secs: duration_secs.max(0.0),
            delay_secs: 0.0,
            ease: Ease::Power2Out,
            elapsed_secs: None,
        }
    }

    pub fn with_delay(mut self, delay_secs: f32) -> Self {
        self.delay_secs = delay_secs.max(0.0);
        self
    }

    /// Start the entrance now, regardless of scroll.
    pub fn fire(&mut self) {
        if self.elapsed_secs.is_none() {
            self.elapsed_secs = Some(0.0);
        }
    }

    pub fn element(&self) -> &ElementId {
        &self.element
    }

    /// Follow the element after a relayout. A fired trigger stays fired.
    pub fn set_top(&mut self, top: f32) {
        self.top = top;
    }

    pub fn has_fired(&self) -> bool {
        self.elapsed_secs.is_some()
    }

    /// Returns `true` only on the call that fires the trigger.
    pub fn check(&mut self, scroll: f32, viewport: Viewport) -> bool {
        if self.has_fired() {
            return false;
        }
        if self.top <= scroll + viewport.height * REVEAL_START_VIEWPORT {
            self.elapsed_secs = Some(0.0);
            return true;
        }
        false
    }

    pub fn advance(&mut self, dt_secs: f32) {
        if let Some(e) = self.elapsed_secs.as_mut() {
            *e += dt_secs.max(0.0);
        }
    }

    pub fn is_done(&self) -> bool {
        self.elapsed_secs
            .is_some_and(|e| e >= self.delay_secs + self.duration_secs)
    }

    pub fn sample(&self, viewport: Viewport) -> VisualState {
        let from = self.from.resolve(viewport);
        match self.elapsed_secs.map(|e| e - self.delay_secs) {
            None => from,
            Some(active) if active < 0.0 => from,
            Some(_) if self.duration_secs <= 0.0 => VisualState::RESTING,
            Some(active) => {
                let t = self.ease.apply(active / self.duration_secs);
                VisualState::lerp(&from, &VisualState::RESTING, t)
            }
        }
    }
}

/// Animated stat counter: counts up from zero once its trigger fires.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CountUp {
    pub target: u32,
    pub duration_secs: f32,
    elapsed_secs: f32,
}

impl CountUp {
    pub fn new(target: u32, duration_secs: f32) -> Self {
        Self {
            target,
            duration_secs: duration_secs.max(0.0),
            elapsed_secs: 0.0,
        }
    }

    pub fn advance(&mut self, dt_secs: f32) -> u32 {
        self.elapsed_secs += dt_secs.max(0.0);
        self.value()
    }

    pub fn value(&self) -> u32 {
        if self.duration_secs <= 0.0 {
            return self.target;
        }
        let t = Ease::Power2Out.apply(self.elapsed_secs / self.duration_secs);
        (self.target as f32 * t).floor() as u32
    }
}
