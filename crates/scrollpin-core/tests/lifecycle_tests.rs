// Host-side tests for pages, reveals, scrub smoothing and the contact form.

use scrollpin_core::*;

#[test]
fn page_ids_round_trip_and_fall_back_home() {
    for page in Page::ALL {
        assert_eq!(Page::from_id(page.id()), page);
    }
    assert_eq!(Page::from_id("pricing"), Page::Home);
    assert!(!Page::Login.shows_chrome());
    assert!(Page::Contact.shows_chrome());
}

#[test]
fn only_home_pins_sections() {
    for page in Page::ALL {
        let pinned = sections::blueprints_for(page)
            .iter()
            .filter(|bp| bp.is_pinned())
            .count();
        if page == Page::Home {
            assert_eq!(pinned, 4);
        } else {
            assert_eq!(pinned, 0, "{} should not pin", page.id());
        }
    }
}

#[test]
fn reveal_fires_at_eighty_percent_of_viewport() {
    let vp = Viewport::new(1000.0, 1000.0);
    let mut r = RevealTrigger::new("stats", 1800.0, VisualSpec::HIDDEN.y(Length::Px(40.0)), 0.6);
    assert!(!r.check(999.0, vp));
    assert!(r.check(1000.0, vp));
    assert!(!r.check(1200.0, vp), "fires only once");
    assert!(r.has_fired());

    let start = r.sample(vp);
    assert_eq!(start.opacity, 0.0);
    r.advance(0.3);
    let mid = r.sample(vp);
    assert!(mid.opacity > 0.5, "ease-out is past halfway at half time");
    r.advance(0.3);
    assert!(r.is_done());
    assert_eq!(r.sample(vp), VisualState::RESTING);
}

#[test]
fn delayed_reveal_holds_until_its_slot() {
    let vp = Viewport::new(1000.0, 1000.0);
    let mut r = RevealTrigger::new("hero-cta", 0.0, VisualSpec::HIDDEN.y(Length::Px(16.0)), 0.5)
        .with_delay(1.0);
    r.fire();
    assert!(r.has_fired());
    r.advance(0.9);
    assert_eq!(r.sample(vp).opacity, 0.0);
    assert!(!r.is_done());
    r.advance(0.35);
    assert!(r.sample(vp).opacity > 0.0);
    r.advance(0.5);
    assert!(r.is_done());
    assert_eq!(r.sample(vp), VisualState::RESTING);
    // A second fire does not restart the sequence
    r.fire();
    assert!(r.is_done());
}

#[test]
fn count_up_reaches_target() {
    let mut c = CountUp::new(250, 1.5);
    assert_eq!(c.value(), 0);
    let mid = c.advance(0.75);
    assert!(mid > 125 && mid < 250);
    assert_eq!(c.advance(5.0), 250);
}

#[test]
fn scrub_trails_then_settles() {
    let mut s = ScrubSmoother::new(0.6);
    assert_eq!(s.step(0.0, 0.016), 0.0);
    let a = s.step(1.0, 0.016);
    assert!(a > 0.0 && a < 0.2);
    let mut v = a;
    for _ in 0..240 {
        v = s.step(1.0, 0.016);
    }
    assert_eq!(v, 1.0);
    assert!(s.is_settled(1.0));

    s.jump(0.25);
    assert_eq!(s.current(), Some(0.25));
}

#[test]
fn zero_lag_scrub_passes_through() {
    let mut s = ScrubSmoother::new(0.0);
    s.step(0.0, 0.016);
    assert_eq!(s.step(0.8, 0.016), 0.8);
}

#[test]
fn normalized_range_guards_zero_scroll() {
    let r = PinnedRange::new(0.0, 100.0).unwrap();
    assert!(NormalizedRange::from_range(&r, 0.0).is_none());
    assert!(NormalizedRange::from_range(&r, f32::NAN).is_none());
    let n = NormalizedRange::from_range(&r, 50.0).unwrap();
    assert_eq!(n.end_frac, 1.0, "fractions stay inside the unit interval");
}

#[test]
fn short_documents_have_no_scroll() {
    let vp = Viewport::new(1280.0, 800.0);
    assert_eq!(max_scroll(600.0, vp), 0.0);
    assert_eq!(max_scroll(2000.0, vp), 1200.0);
    assert!(!vp.differs_materially(&Viewport::new(1280.4, 800.0)));
    assert!(vp.differs_materially(&Viewport::new(1280.0, 760.0)));
}

#[test]
fn contact_form_resets_after_three_seconds() {
    let mut form = ContactForm::new();
    assert!(form.set_field("name", "Ada"));
    assert!(form.set_field("email", "ada@example.com"));
    assert!(!form.set_field("phone", "555"));
    form.contact_type = ContactType::Brand;

    form.submit();
    assert!(form.is_submitted());
    assert!(!form.tick(1.0));
    assert!(!form.tick(1.5));
    assert_eq!(form.name, "Ada");
    assert!(form.tick(0.6));

    assert!(!form.is_submitted());
    assert!(form.name.is_empty());
    assert!(form.email.is_empty());
    assert_eq!(form.contact_type, ContactType::Brand);
    assert!(!form.tick(10.0));
}

#[test]
fn contact_type_ids() {
    for t in [ContactType::Creator, ContactType::Brand, ContactType::Business] {
        assert_eq!(ContactType::from_id(t.id()), Some(t));
    }
    assert_eq!(ContactType::from_id("press"), None);
}
