//! Scroll-synced nav highlighting and smooth nav-link scrolling.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use super::{PageElements, add_class, listen, remove_class};
use crate::config::PageConfig;
use crate::consts::ACTIVE_CLASS;
use crate::debounce::Debouncer;
use crate::nav::{SectionOffset, current_section, is_link_for, scroll_target};

pub(super) fn bind(window: &Window, elements: &Rc<PageElements>, config: &Rc<PageConfig>) {
    let sync = {
        let window = window.clone();
        let elements = Rc::clone(elements);
        let lookahead = config.section_lookahead_px;
        Debouncer::new(config.nav_debounce_ms, move || sync_active_link(&window, &elements, lookahead))
    };
    {
        let sync = sync.clone();
        listen(window, "scroll", move |_| sync.call());
    }

    for link in &elements.nav_links {
        let window = window.clone();
        let elements = Rc::clone(elements);
        let config = Rc::clone(config);
        let link_el = link.clone();
        listen(link, "click", move |event| {
            event.prevent_default();
            let Some(href) = link_el.get_attribute("href") else {
                return;
            };
            let target = match elements.document.query_selector(&href) {
                Ok(Some(target)) => target,
                Ok(None) => return,
                Err(err) => {
                    log::debug!("nav href {href:?} is not a selector: {err:?}");
                    return;
                }
            };
            let Some(target) = target.dyn_ref::<HtmlElement>() else {
                return;
            };
            let top = scroll_target(&href, &config.home_href, f64::from(target.offset_top()), config.header_offset_px);
            smooth_scroll_to(&window, top);
        });
    }

    sync.call();
}

/// Mark the link for the current section active and clear the rest.
fn sync_active_link(window: &Window, elements: &PageElements, lookahead: f64) {
    let scroll_y = window.page_y_offset().unwrap_or(0.0);
    let offsets: Vec<SectionOffset> = elements
        .sections
        .iter()
        .map(|section| SectionOffset::new(section.id(), f64::from(section.offset_top())))
        .collect();
    let current = current_section(&offsets, scroll_y, lookahead);

    for link in &elements.nav_links {
        remove_class(link, ACTIVE_CLASS);
        let href = link.get_attribute("href").unwrap_or_default();
        if current.is_some_and(|id| is_link_for(&href, id)) {
            add_class(link, ACTIVE_CLASS);
        }
    }
}

fn smooth_scroll_to(window: &Window, top: f64) {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}
