// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use scrollpin_core::constants as choreo;

#[test]
#[allow(clippy::assertions_on_constants)]
fn timing_constants_are_sane() {
    assert!(SNAP_IDLE_SECS > 0.0);
    assert!(PROGRAMMATIC_ECHO_SECS > 0.0);
    // Echo suppression must end well before a gesture counts as idle
    assert!(PROGRAMMATIC_ECHO_SECS < SNAP_IDLE_SECS);
    assert!(MAX_FRAME_DT_SECS > 0.0 && MAX_FRAME_DT_SECS < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn phase_bands_are_ordered() {
    assert!(0.0 < choreo::ENTRANCE_END);
    assert!(choreo::ENTRANCE_END < choreo::EXIT_START);
    assert!(choreo::EXIT_START < 1.0);
    assert!(choreo::SNAP_DURATION_MIN_SECS <= choreo::SNAP_DURATION_MAX_SECS);
}

#[test]
fn dom_hooks_are_distinct() {
    let ids = [
        LOADING_OVERLAY_ID,
        SITE_NAV_ID,
        SITE_FOOTER_ID,
        CONTACT_FORM_ID,
        CONTACT_SUCCESS_ID,
    ];
    for (i, a) in ids.iter().enumerate() {
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
    assert!(CONTACT_FIELDS.contains(&"email"));
}
