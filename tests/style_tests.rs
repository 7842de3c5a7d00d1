// Host-side tests for CSS formatting of visual states.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod style {
    include!("../src/style.rs");
}

use glam::Vec2;
use scrollpin_core::VisualState;
use style::*;

#[test]
fn resting_state_has_no_transform() {
    assert_eq!(transform_css(&VisualState::RESTING), None);
    assert_eq!(opacity_css(&VisualState::RESTING), "1");
}

#[test]
fn transform_lists_only_active_parts() {
    let s = VisualState {
        offset: Vec2::new(0.0, 40.0),
        opacity: 0.5,
        scale: 1.0,
        rotation_deg: 0.0,
    };
    assert_eq!(
        transform_css(&s).as_deref(),
        Some("translate3d(0.00px, 40.00px, 0)")
    );

    let s = VisualState {
        offset: Vec2::ZERO,
        opacity: 1.0,
        scale: 0.5,
        rotation_deg: -12.0,
    };
    assert_eq!(
        transform_css(&s).as_deref(),
        Some("scale(0.5000) rotate(-12.00deg)")
    );
}

#[test]
fn opacity_is_clamped_and_trimmed() {
    let mut s = VisualState::RESTING;
    s.opacity = 0.25;
    assert_eq!(opacity_css(&s), "0.25");
    s.opacity = -1.0;
    assert_eq!(opacity_css(&s), "0");
    s.opacity = 3.0;
    assert_eq!(opacity_css(&s), "1");
}

#[test]
fn pin_height_adds_pin_length() {
    assert_eq!(pin_height_css(800.0, 1040.0), "1840px");
    assert_eq!(pin_height_css(800.0, -5.0), "800px");
}

#[test]
fn overlay_hidden_reads_class_or_inline_display() {
    assert!(overlay_hidden(true, None));
    assert!(overlay_hidden(false, Some("display: none;")));
    assert!(overlay_hidden(false, Some("opacity:1;display:none")));
    assert!(!overlay_hidden(false, Some("display: block")));
    assert!(!overlay_hidden(false, None));
}
