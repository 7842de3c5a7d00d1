//! Global snap: pulls scroll that lands in or near a pinned zone to that
//! zone's center, and leaves the free-scroll gaps between zones alone.
//!
//! # Invariants
//!
//! 1. No rule exists while the registry is empty or nothing can scroll.
//! 2. Positions outside every widened zone snap to themselves.
//! 3. A rule remembers the registry epoch it was built from; callers holding
//!    an older epoch get nothing back rather than a stale target.

use crate::constants::{
    SNAP_DELAY_SECS, SNAP_DURATION_MAX_SECS, SNAP_DURATION_MIN_SECS, SNAP_FULL_DURATION_DISTANCE,
    SNAP_TOLERANCE,
};
use crate::easing::Ease;
use crate::range::{NormalizedRange, PinnedRange};
use crate::registry::PinRegistry;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SnapConfig {
    pub tolerance: f32,
    pub duration_min_secs: f32,
    pub duration_max_secs: f32,
    pub delay_secs: f32,
    pub ease: Ease,
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self {
            tolerance: SNAP_TOLERANCE,
            duration_min_secs: SNAP_DURATION_MIN_SECS,
            duration_max_secs: SNAP_DURATION_MAX_SECS,
            delay_secs: SNAP_DELAY_SECS,
            ease: Ease::Power2Out,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SnapRule {
    zones: Vec<NormalizedRange>,
    config: SnapConfig,
    max_scroll: f32,
    epoch: u64,
}

impl SnapRule {
    /// Build a rule from `ranges` in any order. Returns `None` when there is
    /// nothing to snap to.
    pub fn compute(
        ranges: &[PinnedRange],
        max_scroll: f32,
        config: SnapConfig,
        epoch: u64,
    ) -> Option<Self> {
        if ranges.is_empty() || !(max_scroll > 0.0) {
            return None;
        }
        let mut sorted = ranges.to_vec();
        // Stable: equal starts keep their incoming order
        sorted.sort_by(|a, b| a.start().total_cmp(&b.start()));
        let zones: Vec<NormalizedRange> = sorted
            .iter()
            .filter_map(|r| NormalizedRange::from_range(r, max_scroll))
            .collect();
        if zones.is_empty() {
            return None;
        }
        Some(Self {
            zones,
            config,
            max_scroll,
            epoch,
        })
    }

    pub fn zones(&self) -> &[NormalizedRange] {
        &self.zones
    }

    pub fn max_scroll(&self) -> f32 {
        self.max_scroll
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn config(&self) -> &SnapConfig {
        &self.config
    }

    pub fn in_pinned_zone(&self, v: f32) -> bool {
        self.zones
            .iter()
            .any(|z| z.contains_with_tolerance(v, self.config.tolerance))
    }

    /// Snap target for normalized scroll `v`.
    pub fn snap_to(&self, v: f32) -> f32 {
        if !self.in_pinned_zone(v) {
            return v;
        }
        // Nearest center wins; ties go to the earlier zone
        self.zones
            .iter()
            .map(|z| z.center_frac)
            .fold(self.zones[0].center_frac, |best, c| {
                if (c - v).abs() < (best - v).abs() {
                    c
                } else {
                    best
                }
            })
    }

    /// Longer hops take longer, within the configured bounds.
    pub fn duration_secs(&self, from: f32, to: f32) -> f32 {
        let c = &self.config;
        let t = ((to - from).abs() / SNAP_FULL_DURATION_DISTANCE).min(1.0);
        c.duration_min_secs + (c.duration_max_secs - c.duration_min_secs) * t
    }
}

/// Eased scroll animation toward a snap target, in document px.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SnapTween {
    pub from: f32,
    pub to: f32,
    pub duration_secs: f32,
    pub delay_secs: f32,
    pub ease: Ease,
    elapsed_secs: f32,
}

impl SnapTween {
    pub fn new(from: f32, to: f32, duration_secs: f32, delay_secs: f32, ease: Ease) -> Self {
        Self {
            from,
            to,
            duration_secs: duration_secs.max(0.0),
            delay_secs: delay_secs.max(0.0),
            ease,
            elapsed_secs: 0.0,
        }
    }

    /// Advance by `dt_secs` and return the scroll offset to apply.
    pub fn step(&mut self, dt_secs: f32) -> f32 {
        self.elapsed_secs += dt_secs.max(0.0);
        self.value()
    }

    pub fn value(&self) -> f32 {
        let active = self.elapsed_secs - self.delay_secs;
        if active <= 0.0 {
            return self.from;
        }
        if self.duration_secs <= 0.0 || active >= self.duration_secs {
            return self.to;
        }
        let t = self.ease.apply(active / self.duration_secs);
        self.from + (self.to - self.from) * t
    }

    pub fn is_done(&self) -> bool {
        self.elapsed_secs - self.delay_secs >= self.duration_secs
    }
}

/// The snap tween in flight, if any, carried across frames.
#[derive(Clone, Debug, Default)]
pub struct SnapPlayer {
    tween: Option<SnapTween>,
}

impl SnapPlayer {
    pub fn is_running(&self) -> bool {
        self.tween.is_some()
    }

    pub fn start(&mut self, tween: SnapTween) {
        self.tween = Some(tween);
    }

    /// Returns whether a tween was running.
    pub fn cancel(&mut self) -> bool {
        self.tween.take().is_some()
    }

    /// Advance the running tween. The returned offset is what the page
    /// scrolls to this frame, so callers use it instead of re-reading.
    pub fn step(&mut self, dt_secs: f32) -> Option<f32> {
        let tween = self.tween.as_mut()?;
        let y = tween.step(dt_secs);
        if tween.is_done() {
            self.tween = None;
        }
        Some(y)
    }
}

/// Sole owner of the page-wide snap rule.
#[derive(Debug, Default)]
pub struct SnapCoordinator {
    config: SnapConfig,
    rule: Option<SnapRule>,
    seen: Option<(u64, f32)>,
}

impl SnapCoordinator {
    pub fn new(config: SnapConfig) -> Self {
        Self {
            config,
            rule: None,
            seen: None,
        }
    }

    pub fn rule(&self) -> Option<&SnapRule> {
        self.rule.as_ref()
    }

    /// Rebuild the rule if the registry or scrollable distance moved since
    /// the last build. Returns whether a rebuild happened.
    pub fn refresh(&mut self, registry: &PinRegistry, max_scroll: f32) -> bool {
        let key = (registry.epoch(), max_scroll);
        if self.seen == Some(key) {
            return false;
        }
        self.seen = Some(key);
        self.rule = SnapRule::compute(
            &registry.sorted_ranges(),
            max_scroll,
            self.config,
            registry.epoch(),
        );
        match &self.rule {
            Some(rule) => log::info!(
                "[snap] rule rebuilt: zones={} max_scroll={:.0} epoch={}",
                rule.zones().len(),
                max_scroll,
                rule.epoch()
            ),
            None => log::info!("[snap] no pinned zones; free scroll"),
        }
        true
    }

    /// Drop the rule until the next refresh.
    pub fn clear(&mut self) {
        self.rule = None;
        self.seen = None;
    }

    /// Normalized target for `v`; `v` itself when no rule is installed.
    pub fn target(&self, v: f32) -> f32 {
        self.rule.as_ref().map_or(v, |r| r.snap_to(v))
    }

    /// Like [`target`](Self::target), but refuses requests made against a
    /// different registry epoch than the installed rule's.
    pub fn target_for(&self, v: f32, epoch: u64) -> Option<f32> {
        match (&self.rule, self.seen) {
            (Some(rule), _) if rule.epoch() == epoch => Some(rule.snap_to(v)),
            (None, Some((seen_epoch, _))) if seen_epoch == epoch => Some(v),
            _ => None,
        }
    }

    /// Plan a snap from `scroll_px`. `None` if already settled or stale.
    pub fn plan(&self, scroll_px: f32, epoch: u64) -> Option<SnapTween> {
        let rule = self.rule.as_ref().filter(|r| r.epoch() == epoch)?;
        let max = rule.max_scroll();
        let v = (scroll_px / max).clamp(0.0, 1.0);
        let target = rule.snap_to(v);
        let to_px = target * max;
        if (to_px - scroll_px).abs() < 0.5 {
            return None;
        }
        Some(SnapTween::new(
            scroll_px,
            to_px,
            rule.duration_secs(v, target),
            rule.config().delay_secs,
            rule.config().ease,
        ))
    }
}
