//! Thumbnail activation: inline player on desktop, new tab on mobile.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, KeyboardEvent, Window};

use super::{add_class, closest, has_class, listen, query_document, query_first, query_within, remove_class, set_attr};
use crate::config::{PageConfig, Selectors};
use crate::consts::{PLAYING_CLASS, VIDEO_URL_ATTR};
use crate::playback::{Activation, is_activation_key, plan_activation};

/// Bind every thumbnail not already in `bound`. Returns how many were bound.
pub(super) fn bind_new(window: &Window, document: &Document, config: &Rc<PageConfig>, bound: &js_sys::WeakSet) -> u32 {
    let mut count = 0;
    for thumb in query_document(document, &config.selectors.thumbnail) {
        if bound.has(&thumb) {
            continue;
        }
        let Some(url) = thumb.get_attribute(VIDEO_URL_ATTR) else {
            log::debug!("thumbnail without {VIDEO_URL_ATTR}; skipped");
            continue;
        };
        bound.add(&thumb);

        let url = Rc::<str>::from(url);
        {
            let (window, config, url, target) = (window.clone(), Rc::clone(config), Rc::clone(&url), thumb.clone());
            listen(&thumb, "click", move |event| {
                event.prevent_default();
                activate(&window, &target, &url, &config);
            });
        }
        {
            let (window, config, url, target) = (window.clone(), Rc::clone(config), Rc::clone(&url), thumb.clone());
            listen(&thumb, "keydown", move |event: Event| {
                let Some(key_event) = event.dyn_ref::<KeyboardEvent>() else {
                    return;
                };
                if is_activation_key(&key_event.key()) {
                    event.prevent_default();
                    activate(&window, &target, &url, &config);
                }
            });
        }
        count += 1;
    }
    count
}

fn activate(window: &Window, thumb: &HtmlElement, url: &str, config: &PageConfig) {
    let viewport_width = window.inner_width().map_or(0.0, |width| width.as_f64().unwrap_or(0.0));
    match Activation::decide(viewport_width, config.mobile_breakpoint_px, url) {
        Activation::OpenExternal { url } => {
            if let Err(err) = window.open_with_url_and_target(&url, "_blank") {
                log::warn!("could not open {url}: {err:?}");
            }
        }
        Activation::PlayInline { src } => play_inline(thumb, &src, &config.selectors),
    }
}

fn play_inline(thumb: &HtmlElement, src: &str, selectors: &Selectors) {
    let Some(container) = closest(thumb, &selectors.video_container) else {
        return;
    };
    let Some(player) = query_first(&container, &selectors.video_player) else {
        return;
    };

    if let Some(track) = closest(thumb, &selectors.video_track) {
        let containers = query_within(&track, &selectors.video_container);
        let playing: Vec<usize> = containers
            .iter()
            .enumerate()
            .filter(|(_, candidate)| has_class(candidate, PLAYING_CLASS))
            .map(|(idx, _)| idx)
            .collect();
        let target = containers
            .iter()
            .position(|candidate| candidate.is_same_node(Some(&*container)))
            .unwrap_or(containers.len());
        for idx in plan_activation(&playing, target).stop {
            if let Some(other) = containers.get(idx) {
                stop(other, selectors);
            }
        }
    }

    set_attr(&player, "src", src);
    add_class(&container, PLAYING_CLASS);
}

fn stop(container: &Element, selectors: &Selectors) {
    if let Some(player) = query_first(container, &selectors.video_player) {
        set_attr(&player, "src", "");
    }
    remove_class(container, PLAYING_CLASS);
}
