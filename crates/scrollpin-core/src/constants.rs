// Shared choreography tuning constants used by both web and native frontends.

// Section phases, as fractions of a section's own pinned range
pub const ENTRANCE_END: f32 = 0.3; // entrance keyframes must finish by here
pub const EXIT_START: f32 = 0.7; // exit keyframes may not begin before here

// Pinning
pub const PIN_LENGTH_VIEWPORTS: f32 = 1.3; // pin distance is `+=130%` of viewport height

// Global snap
pub const SNAP_TOLERANCE: f32 = 0.02; // normalized slack around each pinned zone
pub const SNAP_DURATION_MIN_SECS: f32 = 0.15;
pub const SNAP_DURATION_MAX_SECS: f32 = 0.35;
pub const SNAP_DELAY_SECS: f32 = 0.0;
pub const SNAP_FULL_DURATION_DISTANCE: f32 = 0.1; // normalized distance that earns the max duration

// Scrub smoothing: rendered progress trails scroll progress by about this long
pub const SCRUB_LAG_SECS: f32 = 0.6;
pub const SCRUB_SETTLE_EPSILON: f32 = 1e-4;

// One-shot reveals fire when an element's top crosses 80% of the viewport
pub const REVEAL_START_VIEWPORT: f32 = 0.8;
pub const COUNT_UP_SECS: f32 = 1.5; // stat counters, eased power2.out

// Page lifecycle
pub const SETTLE_DELAY_SECS: f32 = 0.5; // fallback before the first snap computation
pub const LOADING_OVERLAY_SECS: f32 = 0.5;
pub const CONTACT_RESET_SECS: f32 = 3.0;

// Stagger steps used by the authored home page sections
pub const ENTRANCE_STAGGER: f32 = 0.02;
pub const EXIT_STAGGER: f32 = 0.015;
