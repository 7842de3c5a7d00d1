/// Web-side timing and DOM hook constants.
///
/// Choreography tuning (phases, snap tolerance, pin length) lives in
/// `scrollpin_core::constants`; these only concern the browser glue.
// A gesture counts as finished after this much scroll silence
pub const SNAP_IDLE_SECS: f64 = 0.15;

// Scroll events this soon after we moved the page ourselves are our own echo
pub const PROGRAMMATIC_ECHO_SECS: f64 = 0.05;

// Long frames (tab switch, debugger) are clamped so tweens do not jump
pub const MAX_FRAME_DT_SECS: f32 = 0.1;

// DOM hooks
pub const LOADING_OVERLAY_ID: &str = "loading-overlay";
pub const SITE_NAV_ID: &str = "site-nav";
pub const SITE_FOOTER_ID: &str = "site-footer";
pub const CONTACT_FORM_ID: &str = "contact-form";
pub const CONTACT_SUCCESS_ID: &str = "contact-success";
pub const PAGE_ATTR: &str = "data-page";
pub const NAV_ATTR: &str = "data-nav";
pub const CONTACT_TYPE_ATTR: &str = "data-contact-type";
pub const PIN_INNER_ATTR: &str = "data-pin-inner";
pub const COUNT_TO_ATTR: &str = "data-count-to";
pub const COUNT_SUFFIX_ATTR: &str = "data-count-suffix";
pub const CONTACT_FIELDS: [&str; 4] = ["name", "email", "company", "message"];
