// Pure CSS formatting for visual states; no web-sys in here so host tests
// can include it directly.
use scrollpin_core::VisualState;

/// CSS `transform` for `state`, or `None` when it is the identity.
pub fn transform_css(state: &VisualState) -> Option<String> {
    let mut parts: Vec<String> = Vec::with_capacity(3);
    if state.offset.x != 0.0 || state.offset.y != 0.0 {
        parts.push(format!(
            "translate3d({:.2}px, {:.2}px, 0)",
            state.offset.x, state.offset.y
        ));
    }
    if state.scale != 1.0 {
        parts.push(format!("scale({:.4})", state.scale));
    }
    if state.rotation_deg != 0.0 {
        parts.push(format!("rotate({:.2}deg)", state.rotation_deg));
    }
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" "))
    }
}

/// CSS `opacity`, clamped and trimmed to three decimals.
pub fn opacity_css(state: &VisualState) -> String {
    let o = state.opacity.clamp(0.0, 1.0);
    let s = format!("{:.3}", o);
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Inline height that gives a pinned section room to stay fixed while
/// `pin_px` of scroll passes through it.
pub fn pin_height_css(viewport_height: f32, pin_px: f32) -> String {
    format!("{:.0}px", (viewport_height + pin_px.max(0.0)).max(0.0))
}

/// Whether an element counts as hidden given its `hidden` class and inline
/// `style` attribute. Inline `display: none` wins regardless of spacing.
pub fn overlay_hidden(has_hidden_class: bool, inline_style: Option<&str>) -> bool {
    has_hidden_class
        || inline_style.is_some_and(|s| {
            s.split(';').any(|decl| {
                let mut kv = decl.splitn(2, ':');
                let key = kv.next().map(str::trim);
                let value = kv.next().map(str::trim);
                key == Some("display") && value == Some("none")
            })
        })
}
