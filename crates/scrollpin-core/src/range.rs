use crate::error::{ChoreoError, Result};

/// Scroll offsets (document px) over which one section stays pinned.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinnedRange {
    start: f32,
    end: f32,
}

impl PinnedRange {
    pub fn new(start: f32, end: f32) -> Result<Self> {
        if !start.is_finite() || !end.is_finite() || end < start {
            return Err(ChoreoError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// A section with no extended scroll distance.
    pub fn collapsed(start: f32) -> Result<Self> {
        Self::new(start, start)
    }

    #[inline]
    pub fn start(&self) -> f32 {
        self.start
    }

    #[inline]
    pub fn end(&self) -> f32 {
        self.end
    }

    #[inline]
    pub fn len(&self) -> f32 {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.end == self.start
    }

    /// How far `scroll` has advanced through the range, clamped to `[0, 1]`.
    pub fn progress(&self, scroll: f32) -> f32 {
        if scroll.is_nan() {
            return 0.0;
        }
        let len = self.len();
        if len <= 0.0 {
            return if scroll > self.start { 1.0 } else { 0.0 };
        }
        ((scroll - self.start) / len).clamp(0.0, 1.0)
    }

    #[inline]
    pub fn contains(&self, scroll: f32) -> bool {
        scroll >= self.start && scroll <= self.end
    }
}

/// A pinned range expressed as fractions of the total scrollable distance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NormalizedRange {
    pub start_frac: f32,
    pub end_frac: f32,
    pub center_frac: f32,
}

impl NormalizedRange {
    /// `None` when there is nothing to scroll.
    pub fn from_range(range: &PinnedRange, max_scroll: f32) -> Option<Self> {
        if !(max_scroll > 0.0) || !max_scroll.is_finite() {
            return None;
        }
        let start_frac = (range.start() / max_scroll).clamp(0.0, 1.0);
        let end_frac = (range.end() / max_scroll).clamp(0.0, 1.0);
        Some(Self {
            start_frac,
            end_frac,
            center_frac: start_frac + (end_frac - start_frac) * 0.5,
        })
    }

    /// Whether `v` lies within the zone widened by `tolerance` on both sides.
    #[inline]
    pub fn contains_with_tolerance(&self, v: f32, tolerance: f32) -> bool {
        v >= self.start_frac - tolerance && v <= self.end_frac + tolerance
    }
}
