use scrollpin_core::{CountUp, Page, RevealTrigger, Viewport, VisualSpec, COUNT_UP_SECS};
use web_sys as web;

use crate::constants::{COUNT_SUFFIX_ATTR, COUNT_TO_ATTR, PAGE_ATTR};
use crate::dom;

/// A `[data-count-to]` element that counts up once it scrolls into view.
pub struct StatCounter {
    el: web::Element,
    suffix: String,
    trigger: RevealTrigger,
    count: CountUp,
    shown: Option<u32>,
}

impl StatCounter {
    /// Re-read the element's position after a relayout.
    pub fn remeasure(&mut self) {
        self.trigger.set_top(dom::document_top(&self.el));
    }

    pub fn update(&mut self, scroll: f32, viewport: Viewport, dt_sec: f32) {
        if self.trigger.check(scroll, viewport) {
            log::debug!("[counter] {} started", self.trigger.element());
        } else if self.trigger.has_fired() {
            self.count.advance(dt_sec);
        }
        let value = if self.trigger.has_fired() {
            self.count.value()
        } else {
            0
        };
        if self.shown != Some(value) {
            self.el
                .set_text_content(Some(&format!("{}{}", value, self.suffix)));
            self.shown = Some(value);
        }
    }
}

/// Counters inside `page`'s root.
pub fn collect(document: &web::Document, page: Page) -> Vec<StatCounter> {
    let selector = format!("[{}=\"{}\"] [{}]", PAGE_ATTR, page.id(), COUNT_TO_ATTR);
    dom::query_all(document, &selector)
        .into_iter()
        .enumerate()
        .filter_map(|(i, el)| {
            let target: u32 = el.get_attribute(COUNT_TO_ATTR)?.trim().parse().ok()?;
            let suffix = el.get_attribute(COUNT_SUFFIX_ATTR).unwrap_or_default();
            let top = dom::document_top(&el);
            Some(StatCounter {
                trigger: RevealTrigger::new(format!("counter-{}", i), top, VisualSpec::RESTING, 0.0),
                count: CountUp::new(target, COUNT_UP_SECS),
                el,
                suffix,
                shown: None,
            })
        })
        .collect()
}
