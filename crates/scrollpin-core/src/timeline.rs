//! Keyframe tracks and per-section timelines.
//!
//! A timeline is addressed by progress through its section's pinned range:
//! `0` is where pinning starts, `1` is where it releases. Entrance keyframes
//! live in `[0, ENTRANCE_END]`, exit keyframes in `[EXIT_START, 1]`, and the
//! band between them always samples to [`VisualState::RESTING`].

use smallvec::SmallVec;
use std::fmt;

use crate::constants::{ENTRANCE_END, EXIT_START};
use crate::easing::Ease;
use crate::error::{ChoreoError, Result};
use crate::layout::Viewport;
use crate::visual::{VisualSpec, VisualState};

/// Identifies an animated element inside its section (the DOM `id`).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(String);

impl ElementId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ElementId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for ElementId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A visual state pinned to a point on the timeline. `ease` shapes the
/// segment that ends at this keyframe.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Keyframe {
    pub at: f32,
    pub spec: VisualSpec,
    pub ease: Ease,
}

impl Keyframe {
    pub fn new(at: f32, spec: VisualSpec, ease: Ease) -> Self {
        Self { at, spec, ease }
    }
}

/// Where a section is in its choreography.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Before,
    Entrance,
    Settle,
    Exit,
    After,
}

impl Phase {
    pub fn for_progress(p: f32) -> Phase {
        if p < ENTRANCE_END {
            Phase::Entrance
        } else if p <= EXIT_START {
            Phase::Settle
        } else {
            Phase::Exit
        }
    }
}

/// Keyframes for a single element.
#[derive(Clone, Debug, PartialEq)]
pub struct Track {
    element: ElementId,
    keyframes: SmallVec<[Keyframe; 4]>,
}

impl Track {
    pub fn new(element: impl Into<ElementId>, keyframes: &[Keyframe]) -> Result<Self> {
        let element = element.into();
        for kf in keyframes {
            if !(0.0..=1.0).contains(&kf.at) {
                return Err(ChoreoError::KeyframeOutOfRange {
                    element: element.to_string(),
                    at: kf.at,
                });
            }
        }
        if let Some(index) = keyframes.windows(2).position(|w| w[1].at < w[0].at) {
            return Err(ChoreoError::KeyframesOutOfOrder {
                element: element.to_string(),
                index: index + 1,
            });
        }
        Ok(Self {
            element,
            keyframes: keyframes.iter().copied().collect(),
        })
    }

    pub fn element(&self) -> &ElementId {
        &self.element
    }

    pub fn keyframes(&self) -> &[Keyframe] {
        &self.keyframes
    }

    /// Piecewise interpolation between the keyframes bracketing `p`.
    pub fn sample(&self, p: f32, viewport: Viewport) -> VisualState {
        let kfs = &self.keyframes;
        let (first, last) = match (kfs.first(), kfs.last()) {
            (Some(f), Some(l)) => (f, l),
            _ => return VisualState::RESTING,
        };
        if p <= first.at {
            return first.spec.resolve(viewport);
        }
        if p >= last.at {
            return last.spec.resolve(viewport);
        }
        // `p` is strictly inside, so some segment brackets it
        let i = kfs.partition_point(|kf| kf.at <= p);
        let (a, b) = (&kfs[i - 1], &kfs[i]);
        let span = b.at - a.at;
        if span <= 0.0 {
            return b.spec.resolve(viewport);
        }
        let t = b.ease.apply((p - a.at) / span);
        VisualState::lerp(&a.spec.resolve(viewport), &b.spec.resolve(viewport), t)
    }
}

/// Fluent authoring for the usual entrance / hold / exit shape.
#[derive(Clone, Debug)]
pub struct TrackBuilder {
    element: ElementId,
    entrance: Option<(VisualSpec, f32)>,
    exit: Option<(VisualSpec, f32)>,
}

impl TrackBuilder {
    pub fn new(element: impl Into<ElementId>) -> Self {
        Self {
            element: element.into(),
            entrance: None,
            exit: None,
        }
    }

    /// Animate linearly from `from` at `at` to resting by `ENTRANCE_END`.
    pub fn enter_from(mut self, from: VisualSpec, at: f32) -> Self {
        self.entrance = Some((from, at));
        self
    }

    /// Animate from resting at `at` to `to` at `1.0`, easing in.
    pub fn exit_to(mut self, to: VisualSpec, at: f32) -> Self {
        self.exit = Some((to, at));
        self
    }

    pub fn build(self) -> Result<Track> {
        let mut keyframes: SmallVec<[Keyframe; 4]> = SmallVec::new();
        if let Some((from, at)) = self.entrance {
            if !(0.0..=ENTRANCE_END).contains(&at) {
                return Err(ChoreoError::KeyframeOutsidePhase {
                    element: self.element.to_string(),
                    at,
                    phase: "entrance",
                });
            }
            keyframes.push(Keyframe::new(at, from, Ease::Linear));
            keyframes.push(Keyframe::new(ENTRANCE_END, VisualSpec::RESTING, Ease::Linear));
        }
        if let Some((to, at)) = self.exit {
            if !(EXIT_START..=1.0).contains(&at) {
                return Err(ChoreoError::KeyframeOutsidePhase {
                    element: self.element.to_string(),
                    at,
                    phase: "exit",
                });
            }
            keyframes.push(Keyframe::new(at, VisualSpec::RESTING, Ease::Linear));
            keyframes.push(Keyframe::new(1.0, to, Ease::Power2In));
        }
        Track::new(self.element, &keyframes)
    }
}

/// All tracks belonging to one pinned section.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SectionTimeline {
    name: String,
    tracks: Vec<Track>,
}

impl SectionTimeline {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tracks: Vec::new(),
        }
    }

    pub fn with_track(mut self, track: Track) -> Self {
        self.tracks.push(track);
        self
    }

    pub fn push(&mut self, track: Track) {
        self.tracks.push(track);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Visual state of every track at progress `p`, in track order.
    pub fn sample(&self, p: f32, viewport: Viewport) -> Vec<VisualState> {
        let mut out = Vec::with_capacity(self.tracks.len());
        self.sample_into(p, viewport, &mut out);
        out
    }

    pub fn sample_into(&self, p: f32, viewport: Viewport, out: &mut Vec<VisualState>) {
        out.clear();
        let p = if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) };
        if Phase::for_progress(p) == Phase::Settle {
            out.resize(self.tracks.len(), VisualState::RESTING);
            return;
        }
        out.extend(self.tracks.iter().map(|t| t.sample(p, viewport)));
    }

    pub fn resting_states(&self) -> Vec<VisualState> {
        vec![VisualState::RESTING; self.tracks.len()]
    }
}
