// Host-side tests for keyframe tracks, section timelines and the controller.

use scrollpin_core::*;

const VP: Viewport = Viewport {
    width: 1280.0,
    height: 800.0,
};

fn simple_timeline() -> SectionTimeline {
    SectionTimeline::new("section")
        .with_track(
            TrackBuilder::new("card")
                .enter_from(VisualSpec::HIDDEN.y(Length::Px(40.0)).scale(0.9), 0.0)
                .exit_to(VisualSpec::HIDDEN.x(Length::Vw(-20.0)), 0.7)
                .build()
                .unwrap(),
        )
        .with_track(
            TrackBuilder::new("headline")
                .enter_from(VisualSpec::HIDDEN.y(Length::Px(-20.0)), 0.1)
                .exit_to(VisualSpec::HIDDEN.y(Length::Px(-15.0)), 0.75)
                .build()
                .unwrap(),
        )
}

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

#[test]
fn progress_is_clamped_to_unit_interval() {
    let r = PinnedRange::new(100.0, 900.0).unwrap();
    for s in [-500.0, 0.0, 100.0, 300.0, 500.0, 900.0, 1200.0, 1e9] {
        let p = r.progress(s);
        assert!((0.0..=1.0).contains(&p), "p={p} for s={s}");
    }
    assert_eq!(r.progress(50.0), 0.0);
    assert_eq!(r.progress(100.0), 0.0);
    assert_eq!(r.progress(900.0), 1.0);
    assert_eq!(r.progress(2000.0), 1.0);
    assert!(approx(r.progress(500.0), 0.5));
}

#[test]
fn collapsed_range_never_divides_by_zero() {
    let r = PinnedRange::collapsed(400.0).unwrap();
    assert_eq!(r.progress(400.0), 0.0);
    assert_eq!(r.progress(399.0), 0.0);
    assert_eq!(r.progress(401.0), 1.0);
    assert!(!r.progress(f32::NAN).is_nan());
}

#[test]
fn inverted_range_is_rejected() {
    assert!(matches!(
        PinnedRange::new(10.0, 5.0),
        Err(ChoreoError::InvalidRange { .. })
    ));
    assert!(PinnedRange::new(f32::NAN, 5.0).is_err());
}

#[test]
fn settle_band_is_resting_for_every_element() {
    let tl = simple_timeline();
    let mut p = 0.3;
    while p <= 0.7 {
        for state in tl.sample(p, VP) {
            assert_eq!(state, VisualState::RESTING, "drift at p={p}");
        }
        p += 0.01;
    }
    for state in tl.sample(0.7, VP) {
        assert_eq!(state, VisualState::RESTING);
    }
}

#[test]
fn entrance_interpolates_linearly() {
    let tl = simple_timeline();
    let states = tl.sample(0.0, VP);
    assert_eq!(states[0].opacity, 0.0);
    assert!(approx(states[0].offset.y, 40.0));
    assert!(approx(states[0].scale, 0.9));

    let mid = tl.sample(0.15, VP);
    assert!(approx(mid[0].opacity, 0.5));
    assert!(approx(mid[0].offset.y, 20.0));
    assert!(approx(mid[0].scale, 0.95));

    // Headline has not started yet at 0.05; it holds its from-state
    let early = tl.sample(0.05, VP);
    assert_eq!(early[1].opacity, 0.0);
    assert!(approx(early[1].offset.y, -20.0));
}

#[test]
fn exit_eases_in_and_resolves_viewport_units() {
    let tl = simple_timeline();
    let end = tl.sample(1.0, VP);
    assert!(approx(end[0].offset.x, -256.0));
    assert_eq!(end[0].opacity, 0.0);

    // Power2 in: halfway through the exit only a quarter of the motion is done
    let half = tl.sample(0.85, VP);
    assert!(approx(half[0].offset.x, -64.0));
    assert!(approx(half[0].opacity, 0.75));

    let narrow = Viewport::new(640.0, 800.0);
    assert!(approx(tl.sample(1.0, narrow)[0].offset.x, -128.0));
}

#[test]
fn builder_rejects_keyframes_outside_their_phase() {
    let late_entrance = TrackBuilder::new("x")
        .enter_from(VisualSpec::HIDDEN, 0.4)
        .build();
    assert!(matches!(
        late_entrance,
        Err(ChoreoError::KeyframeOutsidePhase { phase: "entrance", .. })
    ));

    let early_exit = TrackBuilder::new("x").exit_to(VisualSpec::HIDDEN, 0.5).build();
    assert!(matches!(
        early_exit,
        Err(ChoreoError::KeyframeOutsidePhase { phase: "exit", .. })
    ));
}

#[test]
fn track_rejects_out_of_order_keyframes() {
    let kfs = [
        Keyframe::new(0.2, VisualSpec::HIDDEN, Ease::Linear),
        Keyframe::new(0.1, VisualSpec::RESTING, Ease::Linear),
    ];
    assert!(matches!(
        Track::new("x", &kfs),
        Err(ChoreoError::KeyframesOutOfOrder { index: 1, .. })
    ));
    let out_of_range = [Keyframe::new(1.5, VisualSpec::RESTING, Ease::Linear)];
    assert!(matches!(
        Track::new("x", &out_of_range),
        Err(ChoreoError::KeyframeOutOfRange { .. })
    ));
}

#[test]
fn empty_track_samples_to_resting() {
    let t = Track::new("bare", &[]).unwrap();
    assert_eq!(t.sample(0.0, VP), VisualState::RESTING);
    assert_eq!(t.sample(0.9, VP), VisualState::RESTING);
}

#[test]
fn same_scroll_twice_gives_same_frame() {
    let range = PinnedRange::new(0.0, 800.0).unwrap();
    let mut c = SectionController::new(range, simple_timeline());
    for s in [0.0, 120.0, 400.0, 700.0, 900.0, 0.0] {
        let a = c.update(s, VP);
        let b = c.update(s, VP);
        assert_eq!(a, b, "frames differ at s={s}");
    }
}

#[test]
fn scrolling_back_above_start_resets_to_resting() {
    let range = PinnedRange::new(1000.0, 1800.0).unwrap();
    let mut c = SectionController::new(range, simple_timeline());

    // Before ever entering, the section shows its entrance from-state
    let fresh = c.update(900.0, VP);
    assert_eq!(fresh.phase, Phase::Before);
    assert_eq!(fresh.states[0].opacity, 0.0);
    assert_eq!(c.traversal(), Traversal::Fresh);

    // Part-way into the entrance
    let entering = c.update(1080.0, VP);
    assert_eq!(entering.phase, Phase::Entrance);
    assert!(entering.states[0].opacity > 0.0 && entering.states[0].opacity < 1.0);

    // Back above start: resting, not the reversed entrance
    let back = c.update(950.0, VP);
    assert_eq!(c.traversal(), Traversal::LeftBack);
    assert!(back.states.iter().all(VisualState::is_resting));
    assert_eq!(back.progress, 0.0);

    // Entering again samples normally
    let again = c.update(1080.0, VP);
    assert_eq!(again, entering);
}

#[test]
fn phases_follow_progress() {
    let range = PinnedRange::new(0.0, 1000.0).unwrap();
    let mut c = SectionController::new(range, simple_timeline());
    assert_eq!(c.update(0.0, VP).phase, Phase::Before);
    assert_eq!(c.update(100.0, VP).phase, Phase::Entrance);
    assert_eq!(c.update(500.0, VP).phase, Phase::Settle);
    assert_eq!(c.update(850.0, VP).phase, Phase::Exit);
    assert_eq!(c.update(1000.0, VP).phase, Phase::After);
}

#[test]
fn ease_curves_hit_endpoints() {
    for ease in [Ease::Linear, Ease::Power2In, Ease::Power2Out] {
        assert_eq!(ease.apply(0.0), 0.0);
        assert_eq!(ease.apply(1.0), 1.0);
        assert_eq!(ease.apply(-1.0), 0.0);
        assert_eq!(ease.apply(2.0), 1.0);
    }
    assert!(Ease::Power2In.apply(0.5) < 0.5);
    assert!(Ease::Power2Out.apply(0.5) > 0.5);
}

#[test]
fn authored_home_sections_build() {
    let hero = sections::hero().unwrap();
    assert_eq!(hero.tracks().len(), 1 + sections::HERO_SATELLITES);
    // Hero only exits: resting from the top of its range
    assert!(hero.sample(0.0, VP).iter().all(VisualState::is_resting));

    let ai = sections::ai_constellation().unwrap();
    assert_eq!(ai.tracks().len(), 1 + sections::AI_CARDS);
    let collab = sections::collaboration().unwrap();
    assert_eq!(collab.tracks().len(), 4);
    let cta = sections::cta().unwrap();
    assert_eq!(cta.tracks().len(), 2 + sections::CTA_SATELLITES);

    for tl in [&ai, &collab, &cta] {
        assert!(tl.sample(0.5, VP).iter().all(VisualState::is_resting));
        assert!(tl.sample(1.0, VP).iter().all(|s| s.opacity == 0.0));
    }
}
