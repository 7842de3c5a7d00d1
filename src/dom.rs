use fnv::FnvHashMap;
use scrollpin_core::sections::{blueprints_for, SectionKind};
use scrollpin_core::{
    max_scroll, ElementId, Page, PageLayout, SectionGeometry, Viewport, VisualSink, VisualState,
};
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::{PAGE_ATTR, PIN_INNER_ATTR, SITE_FOOTER_ID, SITE_NAV_ID};
use crate::style;

/// All elements matching `selector`, skipping non-element nodes.
pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .collect()
}

pub fn viewport(window: &web::Window) -> Viewport {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    Viewport::new(w as f32, h as f32)
}

pub fn scroll_y(window: &web::Window) -> f32 {
    window.scroll_y().unwrap_or(0.0) as f32
}

/// Document top of `el` from its offset chain. Unlike the bounding rect
/// this ignores CSS transforms, so an element parked at its reveal offset
/// still reports where it will come to rest.
pub fn document_top(el: &web::Element) -> f32 {
    let mut top = 0.0_f64;
    let mut cur = el.clone().dyn_into::<web::HtmlElement>().ok();
    while let Some(e) = cur {
        top += e.offset_top() as f64;
        cur = e
            .offset_parent()
            .and_then(|p| p.dyn_into::<web::HtmlElement>().ok());
    }
    top as f32
}

/// Show the `[data-page]` root for `page`, hide the others, and toggle the
/// site chrome for pages that go without it.
pub fn show_page(document: &web::Document, page: Page) {
    for el in query_all(document, &format!("[{}]", PAGE_ATTR)) {
        let matches = el.get_attribute(PAGE_ATTR).as_deref() == Some(page.id());
        _ = el.toggle_attribute_with_force("hidden", !matches);
    }
    for id in [SITE_NAV_ID, SITE_FOOTER_ID] {
        if let Some(el) = document.get_element_by_id(id) {
            _ = el.toggle_attribute_with_force("hidden", !page.shows_chrome());
        }
    }
}

/// Measure `page`'s sections and lay out pin spacing.
///
/// Pinned sections get an inline height of one viewport plus their pin
/// length; their `[data-pin-inner]` child is made sticky so it stays in
/// view while the pin runs. The scrollable distance is read back from the
/// document afterwards, since nav and footer sit outside the sections.
pub fn measure_layout(
    document: &web::Document,
    page: Page,
    viewport: Viewport,
) -> anyhow::Result<PageLayout> {
    let blueprints = blueprints_for(page);
    let geometry: Vec<SectionGeometry> = blueprints
        .iter()
        .map(|bp| {
            if bp.is_pinned() {
                SectionGeometry::pinned(viewport)
            } else {
                let h = document
                    .get_element_by_id(bp.name)
                    .map(|el| el.get_bounding_client_rect().height() as f32)
                    .unwrap_or(0.0);
                SectionGeometry::flowing(h)
            }
        })
        .collect();
    let mut layout = PageLayout::from_sections(&geometry, viewport)?;

    for (bp, pin) in blueprints.iter().zip(&layout.pins) {
        let (Some(range), Some(el)) = (pin, document.get_element_by_id(bp.name)) else {
            continue;
        };
        let Ok(section) = el.dyn_into::<web::HtmlElement>() else {
            continue;
        };
        let height = style::pin_height_css(viewport.height, range.len());
        section
            .style()
            .set_property("height", &height)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        if let Ok(Some(inner)) = section.query_selector(&format!("[{}]", PIN_INNER_ATTR)) {
            if let Ok(inner) = inner.dyn_into::<web::HtmlElement>() {
                let s = inner.style();
                _ = s.set_property("position", "sticky");
                _ = s.set_property("top", "0");
                _ = s.set_property("height", &format!("{:.0}px", viewport.height));
            }
        }
    }

    // Each reveal triggers on its own top, measured once spacing is in place
    for bp in blueprints {
        let SectionKind::Flowing(specs) = bp.kind else {
            continue;
        };
        for r in specs {
            if let Some(el) = document.get_element_by_id(r.element) {
                layout.set_element_top(r.element, document_top(&el));
            }
        }
    }

    // Reading scrollHeight forces the reflow that picks up the spacing
    if let Some(root) = document.document_element() {
        let doc_h = root.scroll_height() as f32;
        if doc_h > 0.0 {
            layout.document_height = doc_h;
            layout.max_scroll = max_scroll(doc_h, viewport);
        }
    }
    log::info!(
        "[dom] measured {} sections={} reveals={} max_scroll={:.0} viewport={:.0}x{:.0}",
        page.id(),
        geometry.len(),
        layout.element_tops.len(),
        layout.max_scroll,
        viewport.width,
        viewport.height
    );
    Ok(layout)
}

/// Writes visual states as inline `transform`/`opacity` styles.
///
/// Elements are looked up once and remembered (a miss is remembered too,
/// so absent elements cost nothing per frame). Writes that would not
/// change anything are skipped.
pub struct DomSink {
    document: web::Document,
    elements: FnvHashMap<ElementId, Option<web::HtmlElement>>,
    last: FnvHashMap<ElementId, VisualState>,
}

impl DomSink {
    pub fn new(document: web::Document) -> Self {
        Self {
            document,
            elements: FnvHashMap::default(),
            last: FnvHashMap::default(),
        }
    }

    /// Forget cached lookups, e.g. after the page swapped.
    pub fn invalidate(&mut self) {
        self.elements.clear();
        self.last.clear();
    }

    fn lookup(&mut self, element: &ElementId) -> Option<web::HtmlElement> {
        let doc = &self.document;
        self.elements
            .entry(element.clone())
            .or_insert_with(|| {
                doc.get_element_by_id(element.as_str())
                    .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
            })
            .clone()
    }
}

impl VisualSink for DomSink {
    fn apply(&mut self, element: &ElementId, state: &VisualState) -> bool {
        if self.last.get(element) == Some(state) {
            return true;
        }
        let Some(el) = self.lookup(element) else {
            return false;
        };
        let css = el.style();
        let transform = style::transform_css(state);
        _ = match transform {
            Some(t) => css.set_property("transform", &t),
            None => css.remove_property("transform").map(|_| ()),
        };
        _ = css.set_property("opacity", &style::opacity_css(state));
        self.last.insert(element.clone(), *state);
        true
    }

    fn clear(&mut self, element: &ElementId) -> bool {
        self.last.remove(element);
        let Some(el) = self.lookup(element) else {
            return false;
        };
        let css = el.style();
        _ = css.remove_property("transform");
        _ = css.remove_property("opacity");
        true
    }
}
