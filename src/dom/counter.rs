//! Start each stat counter the first time it scrolls into view.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::config::PageConfig;
use crate::consts::TARGET_ATTR;
use crate::counter::{CounterAnimation, CounterFrame, parse_target};

pub(super) fn bind(stats: &[HtmlElement], config: &PageConfig) {
    if stats.is_empty() {
        return;
    }

    let duration_ms = config.counter_duration_ms;
    let tick_ms = config.counter_tick_ms;
    let on_intersect = Closure::wrap(Box::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let Some(entry) = entry.dyn_ref::<IntersectionObserverEntry>() else {
                continue;
            };
            if !entry.is_intersecting() {
                continue;
            }
            let stat = entry.target();
            // Counting happens once per element, ever.
            observer.unobserve(&stat);
            start(stat, duration_ms, tick_ms);
        }
    }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.counter_threshold));
    match IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            for stat in stats {
                observer.observe(stat);
            }
        }
        Err(err) => log::warn!("stat counters disabled: {err:?}"),
    }
    on_intersect.forget();
}

fn start(stat: Element, duration_ms: u32, tick_ms: u32) {
    let raw = stat.get_attribute(TARGET_ATTR).unwrap_or_default();
    let target = parse_target(&raw).unwrap_or_else(|| {
        log::warn!("stat counter target {raw:?} is not a number; counting to 0");
        0
    });

    let mut animation = CounterAnimation::new(target, duration_ms, tick_ms);
    let ticker = Rc::new(RefCell::new(None::<Interval>));
    let ticker_for_cb = Rc::clone(&ticker);
    let interval = Interval::new(tick_ms, move || {
        let frame = animation.tick();
        stat.set_text_content(Some(&frame.value().to_string()));
        if let CounterFrame::Done(_) = frame {
            ticker_for_cb.borrow_mut().take();
        }
    });
    *ticker.borrow_mut() = Some(interval);
}
