use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::LOADING_OVERLAY_ID;
use crate::style;

/// Toggle the loading overlay. The `hidden` class is the normal switch; the
/// inline `display` covers pages whose stylesheet has not loaded yet.
fn set_visible(document: &web::Document, visible: bool) {
    let Some(el) = document.get_element_by_id(LOADING_OVERLAY_ID) else {
        return;
    };
    _ = el.class_list().toggle_with_force("hidden", !visible);
    if let Ok(el) = el.dyn_into::<web::HtmlElement>() {
        let css = el.style();
        _ = if visible {
            css.remove_property("display").map(|_| ())
        } else {
            css.set_property("display", "none")
        };
    }
}

pub fn show(document: &web::Document) {
    set_visible(document, true);
}

pub fn hide(document: &web::Document) {
    set_visible(document, false);
}

pub fn is_hidden(document: &web::Document) -> bool {
    // Markup without an overlay has nothing left to hide
    let Some(el) = document.get_element_by_id(LOADING_OVERLAY_ID) else {
        return true;
    };
    style::overlay_hidden(
        el.class_list().contains("hidden"),
        el.get_attribute("style").as_deref(),
    )
}

/// Hide the loading overlay once `secs` have passed.
pub fn hide_after(document: &web::Document, secs: f32) {
    let Some(window) = web::window() else {
        hide(document);
        return;
    };
    let doc = document.clone();
    let closure = Closure::once(move || {
        hide(&doc);
        log::info!("[overlay] loading overlay hidden");
    });
    if window
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            (secs * 1000.0) as i32,
        )
        .is_err()
    {
        hide(document);
    }
    closure.forget();
}
