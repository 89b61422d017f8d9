//! Browser wiring for the page behaviors.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each submodule binds one behavior to the elements in [`PageElements`] and
//! defers every decision to the matching pure module. Listener closures live
//! for the page lifetime, so they are leaked with `Closure::forget`.
//!
//! DOM calls that can fail are logged and skipped; only a missing window,
//! document or body stops the controller.

mod carousel;
mod controller;
mod copy;
mod counter;
mod elements;
mod menu;
mod nav;
mod playback;
mod theme;
mod ticker;

pub use controller::PageController;
pub use elements::{CarouselElements, PageElements};
pub use theme::LocalStorage;

use std::cell::RefCell;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, Document, Element, Event, EventTarget, HtmlElement, NodeList};

thread_local! {
    static CONTROLLER: RefCell<Option<PageController>> = const { RefCell::new(None) };
}

/// Module start hook: mount the controller once the document is parsed.
///
/// # Errors
///
/// Fails if there is no window or document to attach to.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or(crate::error::PageError::NoWindow)?;
    let document = window.document().ok_or(crate::error::PageError::NoDocument)?;
    if document.ready_state() == web_sys::DocumentReadyState::Loading {
        listen_once(&document, "DOMContentLoaded", mount);
    } else {
        mount();
    }
    Ok(())
}

/// Bind any thumbnails added since the last call. Returns how many were new.
#[wasm_bindgen(js_name = initVideoPlayback)]
pub fn init_video_playback() -> u32 {
    CONTROLLER.with(|slot| slot.borrow().as_ref().map_or(0, PageController::init_video_playback))
}

fn mount() {
    match PageController::mount() {
        Ok(controller) => CONTROLLER.with(|slot| *slot.borrow_mut() = Some(controller)),
        Err(err) => web_sys::console::error_1(&JsValue::from_str(&format!("page controller failed to start: {err}"))),
    }
}

// ── Queries ─────────────────────────────────────────────────────

/// All elements under `document` matching `selector`, in document order.
pub(crate) fn query_document(document: &Document, selector: &str) -> Vec<HtmlElement> {
    match document.query_selector_all(selector) {
        Ok(list) => html_elements(&list),
        Err(err) => {
            log::warn!("bad selector {selector:?}: {err:?}");
            Vec::new()
        }
    }
}

/// All elements under `root` matching `selector`, in document order.
pub(crate) fn query_within(root: &Element, selector: &str) -> Vec<HtmlElement> {
    match root.query_selector_all(selector) {
        Ok(list) => html_elements(&list),
        Err(err) => {
            log::warn!("bad selector {selector:?}: {err:?}");
            Vec::new()
        }
    }
}

/// First element under `root` matching `selector`.
pub(crate) fn query_first(root: &Element, selector: &str) -> Option<HtmlElement> {
    match root.query_selector(selector) {
        Ok(found) => found.and_then(|el| el.dyn_into::<HtmlElement>().ok()),
        Err(err) => {
            log::warn!("bad selector {selector:?}: {err:?}");
            None
        }
    }
}

/// Nearest ancestor (or self) matching `selector`.
pub(crate) fn closest(el: &Element, selector: &str) -> Option<Element> {
    match el.closest(selector) {
        Ok(found) => found,
        Err(err) => {
            log::warn!("bad selector {selector:?}: {err:?}");
            None
        }
    }
}

fn html_elements(list: &NodeList) -> Vec<HtmlElement> {
    (0..list.length())
        .filter_map(|idx| list.get(idx))
        .filter_map(|node| node.dyn_ref::<HtmlElement>().cloned())
        .collect()
}

// ── Mutations ───────────────────────────────────────────────────

pub(crate) fn add_class(el: &Element, class: &str) {
    if let Err(err) = el.class_list().add_1(class) {
        log::warn!("add class {class}: {err:?}");
    }
}

pub(crate) fn remove_class(el: &Element, class: &str) {
    if let Err(err) = el.class_list().remove_1(class) {
        log::warn!("remove class {class}: {err:?}");
    }
}

pub(crate) fn has_class(el: &Element, class: &str) -> bool {
    el.class_list().contains(class)
}

pub(crate) fn set_style(el: &HtmlElement, property: &str, value: &str) {
    if let Err(err) = el.style().set_property(property, value) {
        log::warn!("set style {property}: {err:?}");
    }
}

pub(crate) fn set_attr(el: &Element, name: &str, value: &str) {
    if let Err(err) = el.set_attribute(name, value) {
        log::warn!("set attribute {name}: {err:?}");
    }
}

// ── Events ──────────────────────────────────────────────────────

/// Attach `handler` to `event` on `target` for the page lifetime.
pub(crate) fn listen(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) {
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    if let Err(err) = target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref()) {
        log::warn!("listen {event}: {err:?}");
    }
    cb.forget();
}

/// Like [`listen`], with `{ passive: true }` so scroll handlers never block scrolling.
pub(crate) fn listen_passive(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) {
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    if let Err(err) =
        target.add_event_listener_with_callback_and_add_event_listener_options(event, cb.as_ref().unchecked_ref(), &options)
    {
        log::warn!("listen {event}: {err:?}");
    }
    cb.forget();
}

fn listen_once(target: &EventTarget, event: &str, handler: impl FnOnce() + 'static) {
    let cb = Closure::once(handler);
    let options = AddEventListenerOptions::new();
    options.set_once(true);
    if let Err(err) =
        target.add_event_listener_with_callback_and_add_event_listener_options(event, cb.as_ref().unchecked_ref(), &options)
    {
        web_sys::console::error_1(&err);
    }
    cb.forget();
}
