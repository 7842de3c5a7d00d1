//! Authored choreography for every page's sections.
//!
//! Element ids match the DOM ids the web front-end looks up, so a track
//! whose element is missing from the markup simply never renders.

use crate::constants::{ENTRANCE_STAGGER, EXIT_STAGGER};
use crate::error::Result;
use crate::page::Page;
use crate::timeline::{SectionTimeline, TrackBuilder};
use crate::visual::{Length, VisualSpec};

pub const HERO_SATELLITES: usize = 6;
pub const AI_CARDS: usize = 10;
pub const CTA_SATELLITES: usize = 4;

/// Timed one-shot entrance for a flowing (non-pinned) element, or for an
/// element of a page's load sequence.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealSpec {
    pub element: &'static str,
    pub from: VisualSpec,
    pub duration_secs: f32,
    /// Hold before the entrance starts, counted from when it fires.
    pub delay_secs: f32,
}

#[derive(Clone, Copy, Debug)]
pub enum SectionKind {
    Pinned(fn() -> Result<SectionTimeline>),
    Flowing(&'static [RevealSpec]),
}

#[derive(Clone, Copy, Debug)]
pub struct SectionBlueprint {
    /// DOM id of the section root.
    pub name: &'static str,
    pub kind: SectionKind,
}

impl SectionBlueprint {
    pub fn is_pinned(&self) -> bool {
        matches!(self.kind, SectionKind::Pinned(_))
    }
}

const fn rise(element: &'static str, px: f32, duration_secs: f32) -> RevealSpec {
    RevealSpec {
        element,
        from: VisualSpec {
            y: Length::Px(px),
            ..VisualSpec::HIDDEN
        },
        duration_secs,
        delay_secs: 0.0,
    }
}

const fn intro(element: &'static str, from: VisualSpec, duration_secs: f32, delay_secs: f32) -> RevealSpec {
    RevealSpec {
        element,
        from,
        duration_secs,
        delay_secs,
    }
}

const fn satellite_from(left: bool) -> VisualSpec {
    VisualSpec {
        x: Length::Px(if left { -60.0 } else { 60.0 }),
        scale: 0.9,
        ..VisualSpec::HIDDEN
    }
}

// Offsets overlap like a sequenced timeline: each element starts before the
// previous one has finished.
const HERO_INTRO: &[RevealSpec] = &[
    intro(
        "hero-card",
        VisualSpec {
            y: Length::Px(40.0),
            scale: 0.98,
            ..VisualSpec::HIDDEN
        },
        0.8,
        0.0,
    ),
    intro("hero-headline", VisualSpec { y: Length::Px(24.0), ..VisualSpec::HIDDEN }, 0.6, 0.4),
    intro("hero-subheadline", VisualSpec { y: Length::Px(20.0), ..VisualSpec::HIDDEN }, 0.5, 0.7),
    intro("hero-cta", VisualSpec { y: Length::Px(16.0), ..VisualSpec::HIDDEN }, 0.5, 1.0),
    intro("hero-image", VisualSpec { x: Length::Px(30.0), ..VisualSpec::HIDDEN }, 0.7, 0.9),
    intro("hero-satellite-0", satellite_from(true), 0.5, 1.2),
    intro("hero-satellite-1", satellite_from(true), 0.5, 1.35),
    intro("hero-satellite-2", satellite_from(true), 0.5, 1.55),
    intro("hero-satellite-3", satellite_from(false), 0.5, 1.8),
    intro("hero-satellite-4", satellite_from(false), 0.5, 2.1),
    intro("hero-satellite-5", satellite_from(false), 0.5, 2.45),
];

const SOCIAL_PROOF_REVEALS: &[RevealSpec] = &[
    rise("social-logos", 20.0, 0.6),
    rise("social-stats", 40.0, 0.6),
    rise("social-testimonials", 60.0, 0.7),
];

const CONTACT_REVEALS: &[RevealSpec] = &[rise("contact-hero", 30.0, 0.8), rise("contact-form", 40.0, 0.7)];

const ABOUT_REVEALS: &[RevealSpec] = &[rise("about-hero", 30.0, 0.8), rise("about-story", 40.0, 0.7)];

const AI_TOOLS_REVEALS: &[RevealSpec] =
    &[rise("ai-tools-hero", 30.0, 0.8), rise("ai-tools-grid", 40.0, 0.7)];

const CREATORS_REVEALS: &[RevealSpec] =
    &[rise("creators-hero", 30.0, 0.8), rise("creators-benefits", 40.0, 0.7)];

const BRANDS_REVEALS: &[RevealSpec] = &[rise("brands-hero", 30.0, 0.8), rise("brands-benefits", 40.0, 0.7)];

const HOME: &[SectionBlueprint] = &[
    SectionBlueprint {
        name: "hero",
        kind: SectionKind::Pinned(hero),
    },
    SectionBlueprint {
        name: "ai-constellation",
        kind: SectionKind::Pinned(ai_constellation),
    },
    SectionBlueprint {
        name: "collaboration",
        kind: SectionKind::Pinned(collaboration),
    },
    SectionBlueprint {
        name: "social-proof",
        kind: SectionKind::Flowing(SOCIAL_PROOF_REVEALS),
    },
    SectionBlueprint {
        name: "cta",
        kind: SectionKind::Pinned(cta),
    },
];

/// Sections mounted by `page`, top to bottom.
pub fn blueprints_for(page: Page) -> &'static [SectionBlueprint] {
    const fn flowing(name: &'static str, reveals: &'static [RevealSpec]) -> [SectionBlueprint; 1] {
        [SectionBlueprint {
            name,
            kind: SectionKind::Flowing(reveals),
        }]
    }
    const ABOUT: &[SectionBlueprint] = &flowing("about", ABOUT_REVEALS);
    const AI_TOOLS: &[SectionBlueprint] = &flowing("ai-tools", AI_TOOLS_REVEALS);
    const CREATORS: &[SectionBlueprint] = &flowing("creators", CREATORS_REVEALS);
    const BRANDS: &[SectionBlueprint] = &flowing("brands", BRANDS_REVEALS);
    const CONTACT: &[SectionBlueprint] = &flowing("contact", CONTACT_REVEALS);

    match page {
        Page::Home => HOME,
        Page::About => ABOUT,
        Page::AiTools => AI_TOOLS,
        Page::Creators => CREATORS,
        Page::Brands => BRANDS,
        Page::Contact => CONTACT,
        Page::Login => &[],
    }
}

/// Elements that play their entrance as soon as `page` mounts.
pub fn intro_for(page: Page) -> &'static [RevealSpec] {
    match page {
        Page::Home => HERO_INTRO,
        _ => &[],
    }
}

/// Hero's entrance is the load sequence in [`intro_for`]; while pinned it
/// only exits.
pub fn hero() -> Result<SectionTimeline> {
    let mut tl = SectionTimeline::new("hero").with_track(
        TrackBuilder::new("hero-card")
            .exit_to(VisualSpec::HIDDEN.x(Length::Vw(-18.0)), 0.7)
            .build()?,
    );
    for i in 0..HERO_SATELLITES {
        let dx = if i < 3 { -12.0 } else { 12.0 };
        tl.push(
            TrackBuilder::new(format!("hero-satellite-{i}"))
                .exit_to(VisualSpec::HIDDEN.x(Length::Vw(dx)), 0.7 + i as f32 * ENTRANCE_STAGGER)
                .build()?,
        );
    }
    Ok(tl)
}

pub fn ai_constellation() -> Result<SectionTimeline> {
    let mut tl = SectionTimeline::new("ai-constellation").with_track(
        TrackBuilder::new("ai-headline")
            .enter_from(VisualSpec::HIDDEN.y(Length::Px(-30.0)), 0.0)
            .exit_to(VisualSpec::HIDDEN.y(Length::Px(-20.0)), 0.75)
            .build()?,
    );
    for i in 0..AI_CARDS {
        // Top row and the left half of the middle row come from the left,
        // the bottom pair rises from below
        let (from, to) = if i >= 8 {
            (
                VisualSpec::HIDDEN.y(Length::Vh(35.0)).scale(0.92),
                VisualSpec::HIDDEN.y(Length::Vh(20.0)),
            )
        } else if i < 5 {
            (
                VisualSpec::HIDDEN.x(Length::Vw(-40.0)).scale(0.92),
                VisualSpec::HIDDEN.x(Length::Vw(-25.0)),
            )
        } else {
            (
                VisualSpec::HIDDEN.x(Length::Vw(40.0)).scale(0.92),
                VisualSpec::HIDDEN.x(Length::Vw(25.0)),
            )
        };
        tl.push(
            TrackBuilder::new(format!("ai-card-{i}"))
                .enter_from(from, i as f32 * ENTRANCE_STAGGER)
                .exit_to(to, 0.7 + i as f32 * EXIT_STAGGER)
                .build()?,
        );
    }
    Ok(tl)
}

pub fn collaboration() -> Result<SectionTimeline> {
    Ok(SectionTimeline::new("collaboration")
        .with_track(
            TrackBuilder::new("collab-headline")
                .enter_from(VisualSpec::HIDDEN.y(Length::Px(-20.0)), 0.0)
                .exit_to(VisualSpec::HIDDEN.y(Length::Px(-15.0)), 0.75)
                .build()?,
        )
        .with_track(
            TrackBuilder::new("collab-left")
                .enter_from(VisualSpec::HIDDEN.x(Length::Vw(-50.0)).scale(0.96), 0.05)
                .exit_to(VisualSpec::HIDDEN.x(Length::Vw(-20.0)), 0.7)
                .build()?,
        )
        .with_track(
            TrackBuilder::new("collab-right")
                .enter_from(VisualSpec::HIDDEN.x(Length::Vw(50.0)).scale(0.96), 0.05)
                .exit_to(VisualSpec::HIDDEN.x(Length::Vw(20.0)), 0.7)
                .build()?,
        )
        .with_track(
            TrackBuilder::new("collab-bridge")
                .enter_from(VisualSpec::HIDDEN.scale(0.6).rotation(-8.0), 0.1)
                .exit_to(VisualSpec::HIDDEN.scale(0.85), 0.72)
                .build()?,
        ))
}

pub fn cta() -> Result<SectionTimeline> {
    let mut tl = SectionTimeline::new("cta")
        .with_track(
            TrackBuilder::new("cta-card")
                .enter_from(VisualSpec::HIDDEN.y(Length::Vh(60.0)).scale(0.96), 0.0)
                .exit_to(VisualSpec::HIDDEN.y(Length::Vh(-18.0)), 0.7)
                .build()?,
        )
        .with_track(
            TrackBuilder::new("cta-headline")
                .enter_from(VisualSpec::HIDDEN.y(Length::Px(18.0)), 0.1)
                .exit_to(VisualSpec::HIDDEN.y(Length::Px(-12.0)), 0.75)
                .build()?,
        );
    for i in 0..CTA_SATELLITES {
        let side = if i < 2 { -1.0 } else { 1.0 };
        tl.push(
            TrackBuilder::new(format!("cta-satellite-{i}"))
                .enter_from(VisualSpec::HIDDEN.x(Length::Vw(30.0 * side)), 0.05 + i as f32 * 0.03)
                .exit_to(VisualSpec::HIDDEN.x(Length::Vw(15.0 * side)), 0.72 + i as f32 * ENTRANCE_STAGGER)
                .build()?,
        );
    }
    Ok(tl)
}
