use crate::layout::Viewport;
use crate::range::PinnedRange;
use crate::timeline::{Phase, SectionTimeline};
use crate::visual::VisualState;

/// How the section has been traversed so far.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Traversal {
    /// Never scrolled past `start`.
    Fresh,
    /// Scroll is (or was last seen) beyond `start`.
    Active,
    /// Scrolled back to or above `start` after having been active.
    LeftBack,
}

/// Output of one controller update; `states` is aligned with the timeline's
/// tracks.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionFrame {
    pub progress: f32,
    pub phase: Phase,
    pub states: Vec<VisualState>,
}

/// Drives one pinned section's timeline from the shared scroll position.
#[derive(Clone, Debug)]
pub struct SectionController {
    range: PinnedRange,
    timeline: SectionTimeline,
    traversal: Traversal,
}

impl SectionController {
    pub fn new(range: PinnedRange, timeline: SectionTimeline) -> Self {
        Self {
            range,
            timeline,
            traversal: Traversal::Fresh,
        }
    }

    pub fn range(&self) -> PinnedRange {
        self.range
    }

    pub fn timeline(&self) -> &SectionTimeline {
        &self.timeline
    }

    pub fn traversal(&self) -> Traversal {
        self.traversal
    }

    /// New geometry after a resize; traversal history is kept.
    pub fn set_range(&mut self, range: PinnedRange) {
        self.range = range;
    }

    pub fn update(&mut self, scroll: f32, viewport: Viewport) -> SectionFrame {
        let progress = self.range.progress(scroll);
        let past_start = scroll > self.range.start();

        self.traversal = match (self.traversal, past_start) {
            (_, true) => Traversal::Active,
            (Traversal::Active, false) | (Traversal::LeftBack, false) => {
                if self.traversal == Traversal::Active {
                    log::debug!("[section] {} left back, resetting", self.timeline.name());
                }
                Traversal::LeftBack
            }
            (Traversal::Fresh, false) => Traversal::Fresh,
        };

        let phase = if !past_start {
            Phase::Before
        } else if scroll >= self.range.end() {
            Phase::After
        } else {
            Phase::for_progress(progress)
        };

        // Backward exits snap everything to rest instead of replaying the entrance in reverse
        let states = match self.traversal {
            Traversal::LeftBack => self.timeline.resting_states(),
            _ => self.timeline.sample(progress, viewport),
        };

        SectionFrame {
            progress,
            phase,
            states,
        }
    }

    /// Forget traversal history (used when the page is remounted).
    pub fn reset(&mut self) {
        self.traversal = Traversal::Fresh;
    }
}
