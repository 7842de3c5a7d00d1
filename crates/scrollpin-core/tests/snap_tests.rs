// Host-side tests for the pin registry and the global snap rule.

use scrollpin_core::*;

fn range(start: f32, end: f32) -> PinnedRange {
    PinnedRange::new(start, end).unwrap()
}

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-5
}

fn two_zone_rule() -> SnapRule {
    SnapRule::compute(
        &[range(0.0, 100.0), range(500.0, 600.0)],
        1000.0,
        SnapConfig::default(),
        0,
    )
    .unwrap()
}

#[test]
fn normalized_centers() {
    let rule = two_zone_rule();
    let centers: Vec<f32> = rule.zones().iter().map(|z| z.center_frac).collect();
    assert!(approx(centers[0], 0.05));
    assert!(approx(centers[1], 0.55));
}

#[test]
fn snap_pulls_into_nearest_center() {
    let rule = two_zone_rule();
    assert!(approx(rule.snap_to(0.06), 0.05));
    assert!(approx(rule.snap_to(0.54), 0.55));
    // Tolerance reaches just past the pinned zone
    assert!(approx(rule.snap_to(0.115), 0.05));
    assert!(approx(rule.snap_to(0.485), 0.55));
}

#[test]
fn free_scroll_between_zones_is_untouched() {
    let rule = two_zone_rule();
    assert_eq!(rule.snap_to(0.30), 0.30);
    assert_eq!(rule.snap_to(0.13), 0.13);
    assert_eq!(rule.snap_to(0.9), 0.9);
}

#[test]
fn no_rule_without_ranges_or_scroll() {
    assert!(SnapRule::compute(&[], 1000.0, SnapConfig::default(), 0).is_none());
    assert!(SnapRule::compute(&[range(0.0, 100.0)], 0.0, SnapConfig::default(), 0).is_none());
}

#[test]
fn zones_are_sorted_by_start() {
    let rule = SnapRule::compute(
        &[range(500.0, 600.0), range(0.0, 100.0)],
        1000.0,
        SnapConfig::default(),
        0,
    )
    .unwrap();
    assert!(approx(rule.zones()[0].center_frac, 0.05));
    assert!(approx(rule.zones()[1].center_frac, 0.55));
}

#[test]
fn equidistant_centers_prefer_the_earlier_zone() {
    let rule = SnapRule::compute(
        &[range(0.0, 256.0), range(256.0, 512.0)],
        1024.0,
        SnapConfig::default(),
        0,
    )
    .unwrap();
    // Centers at 0.125 and 0.375; 0.25 sits exactly between them
    assert_eq!(rule.snap_to(0.25), 0.125);
}

#[test]
fn registry_sorts_stably_by_start() {
    let mut reg = PinRegistry::new();
    let late = reg.register(range(500.0, 600.0));
    let first = reg.register(range(0.0, 100.0));
    let second = reg.register(range(0.0, 50.0));
    assert_ne!(first, second);
    assert_eq!(
        reg.sorted_ranges(),
        vec![range(0.0, 100.0), range(0.0, 50.0), range(500.0, 600.0)]
    );
    assert!(reg.unregister(late));
    assert!(!reg.unregister(late));
    assert_eq!(reg.len(), 2);
}

#[test]
fn registry_epoch_moves_on_every_change() {
    let mut reg = PinRegistry::new();
    let e0 = reg.epoch();
    let h = reg.register(range(0.0, 100.0));
    let e1 = reg.epoch();
    assert!(e1 > e0);
    reg.update(h, range(0.0, 100.0)).unwrap();
    assert_eq!(reg.epoch(), e1, "no-op update keeps the epoch");
    reg.update(h, range(0.0, 200.0)).unwrap();
    assert!(reg.epoch() > e1);
    reg.unregister(h);
    assert!(matches!(
        reg.update(h, range(0.0, 1.0)),
        Err(ChoreoError::UnknownHandle(_))
    ));
}

#[test]
fn registration_barrier() {
    let mut reg = PinRegistry::new();
    assert!(reg.is_complete());
    reg.expect(2);
    assert!(!reg.is_complete());
    reg.register(range(0.0, 100.0));
    assert!(!reg.is_complete());
    reg.register(range(200.0, 300.0));
    assert!(reg.is_complete());
    reg.clear();
    assert!(reg.is_empty());
    assert!(reg.is_complete());
}

#[test]
fn coordinator_rebuilds_only_when_inputs_change() {
    let mut reg = PinRegistry::new();
    reg.register(range(0.0, 100.0));
    let mut coord = SnapCoordinator::new(SnapConfig::default());
    assert!(coord.refresh(&reg, 1000.0));
    assert!(!coord.refresh(&reg, 1000.0));
    // Resize changes max scroll
    assert!(coord.refresh(&reg, 2000.0));
    assert!(approx(coord.rule().unwrap().zones()[0].center_frac, 0.025));
    reg.register(range(1000.0, 1100.0));
    assert!(coord.refresh(&reg, 2000.0));
    assert_eq!(coord.rule().unwrap().zones().len(), 2);
}

#[test]
fn coordinator_discards_stale_requests() {
    let mut reg = PinRegistry::new();
    let h = reg.register(range(0.0, 100.0));
    let mut coord = SnapCoordinator::new(SnapConfig::default());
    coord.refresh(&reg, 1000.0);
    let old = reg.epoch();
    assert!(coord.target_for(0.06, old).is_some());

    reg.unregister(h);
    coord.refresh(&reg, 1000.0);
    assert!(coord.rule().is_none());
    assert_eq!(coord.target_for(0.06, old), None);
    // Empty registry: free scroll for current requests
    assert_eq!(coord.target_for(0.06, reg.epoch()), Some(0.06));
    assert_eq!(coord.target(0.06), 0.06);
}

#[test]
fn snap_tween_is_bounded_and_eased() {
    let rule = two_zone_rule();
    let short = rule.duration_secs(0.06, 0.05);
    let long = rule.duration_secs(0.62, 0.55);
    assert!(short >= SNAP_DURATION_MIN_SECS && short <= SNAP_DURATION_MAX_SECS);
    assert!(long >= short);
    assert!(approx(rule.duration_secs(0.0, 0.9), SNAP_DURATION_MAX_SECS));

    let mut tween = SnapTween::new(600.0, 550.0, 0.2, 0.0, Ease::Power2Out);
    let first = tween.step(0.05);
    assert!(first < 600.0 && first > 550.0);
    // Ease-out covers more than a linear share early on
    assert!(600.0 - first > 50.0 * 0.25);
    assert_eq!(tween.step(1.0), 550.0);
    assert!(tween.is_done());
}

#[test]
fn coordinator_plans_snaps_in_pixels() {
    let mut reg = PinRegistry::new();
    reg.register(range(0.0, 100.0));
    reg.register(range(500.0, 600.0));
    let mut coord = SnapCoordinator::new(SnapConfig::default());
    coord.refresh(&reg, 1000.0);

    let tween = coord.plan(540.0, reg.epoch()).unwrap();
    assert!((tween.to - 550.0).abs() < 0.01);
    assert!(coord.plan(300.0, reg.epoch()).is_none());
    assert!(coord.plan(550.0, reg.epoch()).is_none());
    assert!(coord.plan(540.0, reg.epoch() + 1).is_none());
}

#[test]
fn player_reports_each_written_offset_then_goes_idle() {
    let mut player = SnapPlayer::default();
    assert_eq!(player.step(0.016), None);

    player.start(SnapTween::new(600.0, 550.0, 0.2, 0.0, Ease::Power2Out));
    let mut written = Vec::new();
    while let Some(y) = player.step(0.05) {
        written.push(y);
    }
    assert!(written.windows(2).all(|w| w[1] <= w[0]));
    assert_eq!(written.last().copied(), Some(550.0));
    assert!(!player.is_running());
    assert_eq!(player.step(0.05), None);
}

#[test]
fn player_cancel_drops_the_tween() {
    let mut player = SnapPlayer::default();
    assert!(!player.cancel());
    player.start(SnapTween::new(0.0, 1040.0, 0.5, 0.0, Ease::Power2Out));
    assert!(player.step(0.1).is_some_and(|y| y > 0.0 && y < 1040.0));
    assert!(player.cancel());
    assert_eq!(player.step(0.1), None);
}
