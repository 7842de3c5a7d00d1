#![cfg(target_arch = "wasm32")]
use instant::Instant;
use scrollpin_core::{ContactForm, Page, ScrubSmoother, SnapPlayer, Stage, StageConfig};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod counters;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod style;

/// Page named by the URL fragment, e.g. `#/creators`; home otherwise.
fn initial_page(window: &web::Window) -> Page {
    window
        .location()
        .hash()
        .map(|h| Page::from_id(h.trim_start_matches(['#', '/'])))
        .unwrap_or_default()
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("scrollpin-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    overlay::show(&document);

    let config = StageConfig::default();
    let scrub = ScrubSmoother::new(config.scrub_lag_secs);
    let stage = Stage::new(config, dom::viewport(&window));

    let wiring = events::EventWiring {
        clock: Instant::now(),
        gesture: Rc::default(),
        pending_page: Rc::new(RefCell::new(None)),
        pending_resize: Rc::new(Cell::new(false)),
        contact: Rc::new(RefCell::new(ContactForm::new())),
    };
    events::wire_all(&window, &document, &wiring);

    let mut ctx = frame::FrameContext {
        window: window.clone(),
        document: document.clone(),
        stage,
        sink: dom::DomSink::new(document.clone()),
        wiring,
        scrub,
        snap: SnapPlayer::default(),
        counters: Vec::new(),
        settle_until: 0.0,
        last_instant: Instant::now(),
    };
    let page = initial_page(&window);
    frame::mount_initial(&mut ctx, page)?;
    log::info!("[stage] initial page {}", page.id());

    frame::start_loop(Rc::new(RefCell::new(ctx)));
    if !overlay::is_hidden(&document) {
        overlay::hide_after(&document, scrollpin_core::LOADING_OVERLAY_SECS);
    }
    Ok(())
}
