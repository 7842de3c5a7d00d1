use instant::Instant;
use scrollpin_core::{ContactForm, ContactType, Page};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::{
    CONTACT_FIELDS, CONTACT_FORM_ID, CONTACT_SUCCESS_ID, CONTACT_TYPE_ATTR, NAV_ATTR,
};
use crate::dom;
use crate::input::GestureTracker;

/// State shared between DOM listeners and the frame loop. Listeners only
/// record what happened; the frame loop does the work, so a navigation or
/// resize is never interleaved with a half-applied frame.
#[derive(Clone)]
pub struct EventWiring {
    pub clock: Instant,
    pub gesture: Rc<RefCell<GestureTracker>>,
    pub pending_page: Rc<RefCell<Option<Page>>>,
    pub pending_resize: Rc<Cell<bool>>,
    pub contact: Rc<RefCell<ContactForm>>,
}

pub fn wire_all(window: &web::Window, document: &web::Document, w: &EventWiring) {
    wire_scroll(window, w);
    wire_user_intent(window, w);
    wire_resize(window, w);
    wire_nav_links(document, w);
    wire_contact_form(document, w);
}

impl EventWiring {
    /// Seconds since the page booted, on the clock the frame loop uses.
    pub fn now_secs(&self) -> f64 {
        self.clock.elapsed().as_secs_f64()
    }
}

fn listen(target: &web::EventTarget, event: &str, handler: impl FnMut(web::Event) + 'static) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
    {
        log::warn!("[events] could not listen for {}: {:?}", event, e);
    }
    closure.forget();
}

fn wire_scroll(window: &web::Window, w: &EventWiring) {
    let w = w.clone();
    listen(window, "scroll", move |_| {
        w.gesture.borrow_mut().on_scroll_event(w.now_secs());
    });
}

// Direct input always counts as the user, even mid-snap
fn wire_user_intent(window: &web::Window, w: &EventWiring) {
    for event in ["wheel", "touchmove", "keydown"] {
        let w = w.clone();
        listen(window, event, move |_| {
            w.gesture.borrow_mut().on_user_input(w.now_secs());
        });
    }
}

fn wire_resize(window: &web::Window, w: &EventWiring) {
    let pending = w.pending_resize.clone();
    listen(window, "resize", move |_| pending.set(true));
}

fn wire_nav_links(document: &web::Document, w: &EventWiring) {
    for el in dom::query_all(document, &format!("[{}]", NAV_ATTR)) {
        let Some(id) = el.get_attribute(NAV_ATTR) else {
            continue;
        };
        let page = Page::from_id(&id);
        let pending = w.pending_page.clone();
        listen(&el, "click", move |ev| {
            ev.prevent_default();
            *pending.borrow_mut() = Some(page);
        });
    }
}

fn wire_contact_form(document: &web::Document, w: &EventWiring) {
    for el in dom::query_all(document, &format!("[{}]", CONTACT_TYPE_ATTR)) {
        let Some(kind) = el.get_attribute(CONTACT_TYPE_ATTR).and_then(|id| ContactType::from_id(&id))
        else {
            continue;
        };
        let contact = w.contact.clone();
        let doc = document.clone();
        listen(&el, "click", move |ev| {
            ev.prevent_default();
            contact.borrow_mut().contact_type = kind;
            mark_contact_type(&doc, kind);
        });
    }

    let Some(form) = document.get_element_by_id(CONTACT_FORM_ID) else {
        return;
    };
    let contact = w.contact.clone();
    let doc = document.clone();
    listen(&form, "input", move |ev| {
        let Some(target) = ev.target() else {
            return;
        };
        if let Some((name, value)) = field_from_target(&target) {
            contact.borrow_mut().set_field(&name, &value);
        }
    });

    let contact = w.contact.clone();
    listen(&form, "submit", move |ev| {
        ev.prevent_default();
        let mut c = contact.borrow_mut();
        for name in CONTACT_FIELDS {
            if let Some(value) = read_field(&doc, name) {
                c.set_field(name, &value);
            }
        }
        c.submit();
        show_contact_success(&doc, true);
    });
}

fn field_from_target(target: &web::EventTarget) -> Option<(String, String)> {
    if let Some(input) = target.dyn_ref::<web::HtmlInputElement>() {
        return Some((input.name(), input.value()));
    }
    target
        .dyn_ref::<web::HtmlTextAreaElement>()
        .map(|area| (area.name(), area.value()))
}

fn field_element(document: &web::Document, name: &str) -> Option<web::Element> {
    document
        .query_selector(&format!("#{} [name='{}']", CONTACT_FORM_ID, name))
        .ok()
        .flatten()
}

fn read_field(document: &web::Document, name: &str) -> Option<String> {
    let el = field_element(document, name)?;
    if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
        return Some(input.value());
    }
    el.dyn_ref::<web::HtmlTextAreaElement>().map(|a| a.value())
}

fn mark_contact_type(document: &web::Document, kind: ContactType) {
    for el in dom::query_all(document, &format!("[{}]", CONTACT_TYPE_ATTR)) {
        let selected = el.get_attribute(CONTACT_TYPE_ATTR).as_deref() == Some(kind.id());
        _ = el.class_list().toggle_with_force("active", selected);
    }
}

/// Swap between the form and its thank-you panel.
pub fn show_contact_success(document: &web::Document, submitted: bool) {
    if let Some(el) = document.get_element_by_id(CONTACT_SUCCESS_ID) {
        _ = el.toggle_attribute_with_force("hidden", !submitted);
    }
    if let Some(el) = document.get_element_by_id(CONTACT_FORM_ID) {
        _ = el.toggle_attribute_with_force("hidden", submitted);
    }
}

/// Empty the form's inputs after the form state reset; the selected contact
/// type stays highlighted.
pub fn reset_contact_form(document: &web::Document, form: &ContactForm) {
    if let Some(el) = document.get_element_by_id(CONTACT_FORM_ID) {
        if let Ok(form_el) = el.dyn_into::<web::HtmlFormElement>() {
            form_el.reset();
        }
    }
    mark_contact_type(document, form.contact_type);
    show_contact_success(document, false);
}
