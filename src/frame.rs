use instant::Instant;
use scrollpin_core::{Page, ScrubSmoother, SnapPlayer, Stage, VisualSink, SETTLE_DELAY_SECS};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::MAX_FRAME_DT_SECS;
use crate::counters::{self, StatCounter};
use crate::dom::{self, DomSink};
use crate::events::{self, EventWiring};

pub struct FrameContext {
    pub window: web::Window,
    pub document: web::Document,
    pub stage: Stage,
    pub sink: DomSink,
    pub wiring: EventWiring,
    pub scrub: ScrubSmoother,
    pub snap: SnapPlayer,
    pub counters: Vec<StatCounter>,
    /// No snapping before this (clock seconds) while fonts and images settle.
    pub settle_until: f64,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant)
            .as_secs_f32()
            .min(MAX_FRAME_DT_SECS);
        self.last_instant = now;
        let t = self.wiring.now_secs();

        let pending_page = self.wiring.pending_page.borrow_mut().take();
        if let Some(page) = pending_page {
            self.navigate(page);
        }
        if self.wiring.pending_resize.replace(false) {
            self.relayout();
        }

        let raw = dom::scroll_y(&self.window);
        let scroll = self.drive_snap(raw, t, dt_sec);

        // Snap planning reads the raw offset; choreography follows the
        // smoothed one, including whatever the snap tween wrote this frame
        let smoothed = self.scrub.step(scroll, dt_sec);
        self.stage.advance_reveals(dt_sec);
        let frame = self.stage.on_scroll(smoothed);
        self.stage.apply(&frame, &mut self.sink);
        let viewport = self.stage.viewport();
        for c in &mut self.counters {
            c.update(scroll, viewport, dt_sec);
        }

        let reset = self.wiring.contact.borrow_mut().tick(dt_sec);
        if reset {
            events::reset_contact_form(&self.document, &self.wiring.contact.borrow());
        }
    }

    /// Advance or plan the snap tween. Returns the scroll offset in effect
    /// for the rest of the frame.
    fn drive_snap(&mut self, raw: f32, t: f64, dt_sec: f32) -> f32 {
        let mut gesture = self.wiring.gesture.borrow_mut();
        if gesture.user_active(t) {
            if self.snap.cancel() {
                log::debug!("[snap] tween cancelled by user input");
            }
            return raw;
        }
        if let Some(y) = self.snap.step(dt_sec) {
            gesture.mark_programmatic(t);
            self.window.scroll_to_with_x_and_y(0.0, y as f64);
            return y;
        }
        if t >= self.settle_until && gesture.should_snap(t) {
            gesture.snap_planned();
            if let Some(tween) = self.stage.plan_snap(raw) {
                log::debug!(
                    "[snap] {:.0} -> {:.0} over {:.2}s",
                    tween.from,
                    tween.to,
                    tween.duration_secs
                );
                self.snap.start(tween);
            }
        }
        raw
    }

    fn navigate(&mut self, page: Page) {
        self.snap.cancel();
        self.wiring.gesture.borrow_mut().reset();
        dom::show_page(&self.document, page);
        _ = self.window.location().set_hash(&format!("/{}", page.id()));
        self.window.scroll_to_with_x_and_y(0.0, 0.0);
        self.scrub.jump(0.0);

        let viewport = dom::viewport(&self.window);
        let released = match dom::measure_layout(&self.document, page, viewport) {
            Ok(layout) => {
                let outcome = self.stage.navigate(page, &layout);
                outcome.released
            }
            Err(e) => {
                log::error!("[nav] layout for {} failed: {:?}", page.id(), e);
                self.stage.teardown()
            }
        };
        for el in &released {
            self.sink.clear(el);
        }
        self.sink.invalidate();
        self.counters = counters::collect(&self.document, page);
        self.settle_until = self.wiring.now_secs() + SETTLE_DELAY_SECS as f64;
    }

    fn relayout(&mut self) {
        let viewport = dom::viewport(&self.window);
        if !viewport.differs_materially(&self.stage.viewport()) {
            return;
        }
        let Some(page) = self.stage.page() else {
            return;
        };
        let result = dom::measure_layout(&self.document, page, viewport).and_then(|layout| {
            self.stage.resize(viewport, &layout)?;
            Ok(())
        });
        match result {
            Ok(()) => {
                for c in &mut self.counters {
                    c.remeasure();
                }
                log::info!(
                    "[stage] resized to {:.0}x{:.0}",
                    viewport.width,
                    viewport.height
                );
            }
            Err(e) => log::error!("[stage] resize failed: {:?}", e),
        }
    }
}

/// First mount, done outside the loop so the page is laid out before the
/// loading overlay goes away.
pub fn mount_initial(ctx: &mut FrameContext, page: Page) -> anyhow::Result<()> {
    dom::show_page(&ctx.document, page);
    let layout = dom::measure_layout(&ctx.document, page, ctx.stage.viewport())?;
    ctx.stage.mount_page(page, &layout);
    ctx.scrub.jump(dom::scroll_y(&ctx.window));
    ctx.counters = counters::collect(&ctx.document, page);
    ctx.settle_until = ctx.wiring.now_secs() + SETTLE_DELAY_SECS as f64;
    Ok(())
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
