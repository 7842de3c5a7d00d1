//! One page's worth of cooperating controllers.
//!
//! The stage owns the page-scoped [`PinRegistry`], one [`SectionController`]
//! per registered handle and the [`SnapCoordinator`]. Each section observes
//! the shared scroll position independently; the coordinator is the only
//! thing that looks across sections.
//!
//! # Ordering
//!
//! Within one scroll update every section timeline is sampled before the
//! snap target is evaluated. Frames carry the page epoch they were built
//! for, and [`Stage::apply`] drops any frame whose page has since been torn
//! down.

use fnv::FnvHashSet;

use crate::constants::SCRUB_LAG_SECS;
use crate::controller::{SectionController, SectionFrame};
use crate::error::Result;
use crate::layout::{PageLayout, Viewport};
use crate::page::Page;
use crate::range::PinnedRange;
use crate::registry::{PinHandle, PinRegistry};
use crate::reveal::RevealTrigger;
use crate::sections::{blueprints_for, intro_for, SectionKind};
use crate::snap::{SnapConfig, SnapCoordinator, SnapTween};
use crate::timeline::{ElementId, SectionTimeline};
use crate::visual::VisualState;

/// Adapter that pushes computed visual states onto real elements.
pub trait VisualSink {
    /// Apply `state` to `element`. Returns `false` when the element is not
    /// mounted, which is not an error.
    fn apply(&mut self, element: &ElementId, state: &VisualState) -> bool;

    /// Remove any state previously applied to `element`.
    fn clear(&mut self, element: &ElementId) -> bool;
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StageConfig {
    pub snap: SnapConfig,
    pub scrub_lag_secs: f32,
}

impl Default for StageConfig {
    fn default() -> Self {
        Self {
            snap: SnapConfig::default(),
            scrub_lag_secs: SCRUB_LAG_SECS,
        }
    }
}

#[derive(Debug)]
struct MountedReveal {
    /// Index into the layout's sections, when the reveal tracks one.
    section: Option<usize>,
    trigger: RevealTrigger,
}

#[derive(Debug)]
struct MountedSection {
    handle: PinHandle,
    controller: SectionController,
}

#[derive(Clone, Debug, PartialEq)]
pub struct StageFrame {
    pub page_epoch: u64,
    pub scroll: f32,
    pub sections: Vec<(PinHandle, SectionFrame)>,
    /// Normalized snap target for `scroll`, if the rule is current.
    pub snap_target: Option<f32>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationOutcome {
    pub from: Option<Page>,
    pub to: Page,
    pub scroll_to_top: bool,
    /// Elements of the previous page whose applied state must be cleared.
    pub released: Vec<ElementId>,
}

#[derive(Debug)]
pub struct Stage {
    config: StageConfig,
    viewport: Viewport,
    page: Option<Page>,
    page_epoch: u64,
    registry: PinRegistry,
    sections: Vec<MountedSection>,
    reveals: Vec<MountedReveal>,
    coordinator: SnapCoordinator,
    max_scroll: f32,
}

impl Stage {
    pub fn new(config: StageConfig, viewport: Viewport) -> Self {
        Self {
            config,
            viewport,
            page: None,
            page_epoch: 0,
            registry: PinRegistry::new(),
            sections: Vec::new(),
            reveals: Vec::new(),
            coordinator: SnapCoordinator::new(config.snap),
            max_scroll: 0.0,
        }
    }

    pub fn config(&self) -> &StageConfig {
        &self.config
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn page(&self) -> Option<Page> {
        self.page
    }

    pub fn page_epoch(&self) -> u64 {
        self.page_epoch
    }

    pub fn registry(&self) -> &PinRegistry {
        &self.registry
    }

    pub fn coordinator(&self) -> &SnapCoordinator {
        &self.coordinator
    }

    pub fn max_scroll(&self) -> f32 {
        self.max_scroll
    }

    pub fn handles(&self) -> Vec<PinHandle> {
        self.sections.iter().map(|s| s.handle).collect()
    }

    pub fn controller(&self, handle: PinHandle) -> Option<&SectionController> {
        self.sections
            .iter()
            .find(|s| s.handle == handle)
            .map(|s| &s.controller)
    }

    /// Tear down whatever is mounted, then register `timelines` against the
    /// pinned ranges of `layout` in order.
    pub fn mount(&mut self, page: Page, layout: &PageLayout, timelines: Vec<SectionTimeline>) {
        self.teardown();
        self.page = Some(page);
        self.max_scroll = layout.max_scroll;

        let ranges: Vec<PinnedRange> = layout.pinned_ranges().collect();
        if ranges.len() != timelines.len() {
            log::warn!(
                "[stage] {}: {} pinned ranges for {} timelines; extras ignored",
                page.id(),
                ranges.len(),
                timelines.len()
            );
        }
        self.registry.expect(ranges.len().min(timelines.len()));
        for (timeline, range) in timelines.into_iter().zip(ranges) {
            self.register_section(range, timeline);
        }
        // Pages without pinned sections still get an (empty) current rule
        self.refresh_snap();
        log::info!(
            "[stage] mounted {} sections={} max_scroll={:.0}",
            page.id(),
            self.sections.len(),
            self.max_scroll
        );
    }

    /// Mount `page` from its authored blueprints. Sections whose timeline
    /// fails to build are mounted unanimated rather than dropped, so the
    /// remaining ranges still line up with the layout.
    pub fn mount_page(&mut self, page: Page, layout: &PageLayout) {
        let blueprints = blueprints_for(page);
        let mut timelines = Vec::new();
        let mut reveals = Vec::new();
        for (i, bp) in blueprints.iter().enumerate() {
            match bp.kind {
                SectionKind::Pinned(build) => match build() {
                    Ok(tl) => timelines.push(tl),
                    Err(e) => {
                        log::error!("[stage] {} timeline rejected: {}", bp.name, e);
                        timelines.push(SectionTimeline::new(bp.name));
                    }
                },
                SectionKind::Flowing(specs) => {
                    reveals.extend(specs.iter().map(|r| {
                        let element = ElementId::from(r.element);
                        let top = layout.reveal_top(&element, Some(i)).unwrap_or(0.0);
                        MountedReveal {
                            section: Some(i),
                            trigger: RevealTrigger::new(element, top, r.from, r.duration_secs)
                                .with_delay(r.delay_secs),
                        }
                    }));
                }
            }
        }
        // The load sequence runs immediately; scroll position is irrelevant
        reveals.extend(intro_for(page).iter().map(|r| {
            let mut trigger =
                RevealTrigger::new(r.element, 0.0, r.from, r.duration_secs).with_delay(r.delay_secs);
            trigger.fire();
            MountedReveal {
                section: None,
                trigger,
            }
        }));
        self.mount(page, layout, timelines);
        self.reveals = reveals;
    }

    /// Register one section; the snap rule follows reactively.
    pub fn register_section(&mut self, range: PinnedRange, timeline: SectionTimeline) -> PinHandle {
        let handle = self.registry.register(range);
        self.sections.push(MountedSection {
            handle,
            controller: SectionController::new(range, timeline),
        });
        self.refresh_snap();
        handle
    }

    /// Release one section's bindings and its range.
    pub fn unregister_section(&mut self, handle: PinHandle) -> Option<SectionTimeline> {
        self.registry.unregister(handle);
        let idx = self.sections.iter().position(|s| s.handle == handle)?;
        let removed = self.sections.remove(idx);
        self.refresh_snap();
        Some(removed.controller.timeline().clone())
    }

    /// Track a reveal positioned by the host rather than by a section top.
    pub fn add_reveal(&mut self, trigger: RevealTrigger) {
        self.reveals.push(MountedReveal {
            section: None,
            trigger,
        });
    }

    fn refresh_snap(&mut self) {
        if self.registry.is_complete() {
            self.coordinator.refresh(&self.registry, self.max_scroll);
        } else {
            // Half-registered pages scroll freely until the last section lands
            self.coordinator.clear();
        }
    }

    /// Drop everything mounted. Returns the elements whose applied state
    /// must be cleared by the host.
    pub fn teardown(&mut self) -> Vec<ElementId> {
        let mut released: Vec<ElementId> = Vec::new();
        for s in self.sections.drain(..) {
            self.registry.unregister(s.handle);
            released.extend(s.controller.timeline().tracks().iter().map(|t| t.element().clone()));
        }
        released.extend(self.reveals.drain(..).map(|r| r.trigger.element().clone()));
        self.registry.clear();
        self.coordinator.clear();
        self.max_scroll = 0.0;
        if let Some(page) = self.page.take() {
            log::info!("[stage] tore down {} released={}", page.id(), released.len());
        }
        self.page_epoch += 1;
        released
    }

    /// Page change: tear down, mount the new page, ask the host to scroll to
    /// the top.
    pub fn navigate(&mut self, page: Page, layout: &PageLayout) -> NavigationOutcome {
        let from = self.page;
        log::info!(
            "[nav] {} -> {}",
            from.map_or("none", Page::id),
            page.id()
        );
        let released = self.teardown();
        self.mount_page(page, layout);
        NavigationOutcome {
            from,
            to: page,
            scroll_to_top: true,
            released,
        }
    }

    /// Viewport changed: swap in freshly measured ranges and rebuild snap.
    pub fn resize(&mut self, viewport: Viewport, layout: &PageLayout) -> Result<()> {
        self.viewport = viewport;
        self.max_scroll = layout.max_scroll;
        for (section, range) in self.sections.iter_mut().zip(layout.pinned_ranges()) {
            self.registry.update(section.handle, range)?;
            section.controller.set_range(range);
        }
        for r in &mut self.reveals {
            if let Some(top) = layout.reveal_top(r.trigger.element(), r.section) {
                r.trigger.set_top(top);
            }
        }
        self.refresh_snap();
        Ok(())
    }

    /// Sample every section at `scroll`, then evaluate snap.
    pub fn on_scroll(&mut self, scroll: f32) -> StageFrame {
        let viewport = self.viewport;
        let sections = self
            .sections
            .iter_mut()
            .map(|s| (s.handle, s.controller.update(scroll, viewport)))
            .collect();
        for r in &mut self.reveals {
            if r.trigger.check(scroll, viewport) {
                log::debug!("[stage] reveal {}", r.trigger.element());
            }
        }
        let snap_target = if self.max_scroll > 0.0 {
            let v = (scroll / self.max_scroll).clamp(0.0, 1.0);
            self.coordinator.target_for(v, self.registry.epoch())
        } else {
            None
        };
        StageFrame {
            page_epoch: self.page_epoch,
            scroll,
            sections,
            snap_target,
        }
    }

    pub fn advance_reveals(&mut self, dt_secs: f32) {
        for r in &mut self.reveals {
            r.trigger.advance(dt_secs);
        }
    }

    /// Snap tween for a scroll gesture that came to rest at `scroll`.
    pub fn plan_snap(&self, scroll: f32) -> Option<SnapTween> {
        if !self.registry.is_complete() {
            return None;
        }
        self.coordinator.plan(scroll, self.registry.epoch())
    }

    /// Push `frame` and the current reveal states through `sink`. Stale
    /// frames are dropped. Returns how many elements were updated.
    ///
    /// An element driven by both a pinned track and a reveal (the hero's load
    /// sequence) follows the pinned track whenever that track is away from
    /// rest, so exits are never overwritten.
    pub fn apply(&self, frame: &StageFrame, sink: &mut dyn VisualSink) -> usize {
        if frame.page_epoch != self.page_epoch {
            log::debug!(
                "[stage] dropping frame for epoch {} (now {})",
                frame.page_epoch,
                self.page_epoch
            );
            return 0;
        }
        let mut applied = 0;
        let mut moving: FnvHashSet<&ElementId> = FnvHashSet::default();
        for (handle, sf) in &frame.sections {
            let Some(controller) = self.controller(*handle) else {
                continue;
            };
            for (track, state) in controller.timeline().tracks().iter().zip(&sf.states) {
                if !state.is_resting() {
                    moving.insert(track.element());
                }
                if sink.apply(track.element(), state) {
                    applied += 1;
                }
            }
        }
        for r in &self.reveals {
            if moving.contains(r.trigger.element()) {
                continue;
            }
            if sink.apply(r.trigger.element(), &r.trigger.sample(self.viewport)) {
                applied += 1;
            }
        }
        applied
    }
}
