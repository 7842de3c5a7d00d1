//! Page geometry: where pinned ranges land in document space.
//!
//! The host measures sections; this module only does the arithmetic that
//! turns those measurements into [`PinnedRange`]s and a scrollable distance.

use fnv::FnvHashMap;

use crate::constants::PIN_LENGTH_VIEWPORTS;
use crate::error::Result;
use crate::range::PinnedRange;
use crate::timeline::ElementId;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// Resizes below one pixel in either axis are not worth a recompute.
    pub fn differs_materially(&self, other: &Viewport) -> bool {
        (self.width - other.width).abs() >= 1.0 || (self.height - other.height).abs() >= 1.0
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280.0, 800.0)
    }
}

/// One section as measured by the host, before pin spacing is inserted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionGeometry {
    pub height: f32,
    pub pinned: bool,
}

impl SectionGeometry {
    /// A full-viewport pinned section.
    pub fn pinned(viewport: Viewport) -> Self {
        Self {
            height: viewport.height,
            pinned: true,
        }
    }

    pub fn flowing(height: f32) -> Self {
        Self {
            height: height.max(0.0),
            pinned: false,
        }
    }
}

/// Pin from `top` for `pin_length_viewports` viewport heights.
pub fn pin_range(top: f32, viewport: Viewport, pin_length_viewports: f32) -> Result<PinnedRange> {
    PinnedRange::new(top, top + viewport.height * pin_length_viewports.max(0.0))
}

#[inline]
pub fn max_scroll(document_height: f32, viewport: Viewport) -> f32 {
    (document_height - viewport.height).max(0.0)
}

/// Stacked page geometry with pin spacers applied.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageLayout {
    /// Document offset of each section's top, in input order.
    pub tops: Vec<f32>,
    /// One entry per input section; `None` for flowing sections.
    pub pins: Vec<Option<PinnedRange>>,
    pub document_height: f32,
    pub max_scroll: f32,
    /// Measured document tops of individual reveal elements. Reveals without
    /// an entry fall back to their section's top.
    pub element_tops: FnvHashMap<ElementId, f32>,
}

impl PageLayout {
    pub fn from_sections(sections: &[SectionGeometry], viewport: Viewport) -> Result<Self> {
        Self::with_pin_length(sections, viewport, PIN_LENGTH_VIEWPORTS)
    }

    pub fn with_pin_length(
        sections: &[SectionGeometry],
        viewport: Viewport,
        pin_length_viewports: f32,
    ) -> Result<Self> {
        let mut tops = Vec::with_capacity(sections.len());
        let mut pins = Vec::with_capacity(sections.len());
        let mut cursor = 0.0_f32;
        for s in sections {
            tops.push(cursor);
            if s.pinned {
                let range = pin_range(cursor, viewport, pin_length_viewports)?;
                // The spacer keeps the section fixed while scroll runs through it
                cursor += s.height + range.len();
                pins.push(Some(range));
            } else {
                cursor += s.height;
                pins.push(None);
            }
        }
        Ok(Self {
            tops,
            pins,
            document_height: cursor,
            max_scroll: max_scroll(cursor, viewport),
            element_tops: FnvHashMap::default(),
        })
    }

    /// Build directly from already-known pixel ranges (tests, native sweeps).
    pub fn from_ranges(ranges: &[PinnedRange], max_scroll: f32) -> Self {
        Self {
            tops: ranges.iter().map(|r| r.start()).collect(),
            pins: ranges.iter().copied().map(Some).collect(),
            document_height: max_scroll,
            max_scroll: max_scroll.max(0.0),
            element_tops: FnvHashMap::default(),
        }
    }

    pub fn set_element_top(&mut self, element: impl Into<ElementId>, top: f32) {
        self.element_tops.insert(element.into(), top);
    }

    pub fn element_top(&self, element: &ElementId) -> Option<f32> {
        self.element_tops.get(element).copied()
    }

    /// Trigger line for `element` inside section `section`.
    pub fn reveal_top(&self, element: &ElementId, section: Option<usize>) -> Option<f32> {
        self.element_top(element)
            .or_else(|| section.and_then(|i| self.tops.get(i).copied()))
    }

    pub fn pinned_ranges(&self) -> impl Iterator<Item = PinnedRange> + '_ {
        self.pins.iter().flatten().copied()
    }
}
