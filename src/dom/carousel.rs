//! Arrow controls and boundary dimming for each video carousel.

use gloo_timers::callback::Timeout;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use super::{CarouselElements, listen, listen_passive, set_style};
use crate::carousel::{ArrowState, Direction, TrackMetrics, scroll_step};
use crate::config::PageConfig;
use crate::debounce::Debouncer;

pub(super) fn bind(window: &Window, carousels: &[CarouselElements], config: &PageConfig) {
    for carousel in carousels {
        bind_one(window, carousel, config);
    }
}

fn bind_one(window: &Window, carousel: &CarouselElements, config: &PageConfig) {
    let step = scroll_step(
        carousel.first_item.as_ref().map(|item| f64::from(item.offset_width())),
        f64::from(carousel.track.client_width()),
        config.carousel_step_factor,
        config.carousel_fallback_factor,
    );

    for (arrow, direction) in [(&carousel.left_arrow, Direction::Left), (&carousel.right_arrow, Direction::Right)] {
        let track = carousel.track.clone();
        listen(arrow, "click", move |_| scroll_track_by(&track, direction.offset(step)));
    }

    let refresh = {
        let carousel = carousel.clone();
        move || refresh_arrows(&carousel)
    };

    let on_scroll = Debouncer::new(config.arrow_scroll_debounce_ms, refresh.clone());
    listen_passive(&carousel.track, "scroll", move |_| on_scroll.call());

    let on_resize = Debouncer::new(config.arrow_resize_debounce_ms, refresh.clone());
    listen(window, "resize", move |_| on_resize.call());

    // Layout may not be settled yet; measure once it has had a moment.
    Timeout::new(config.arrow_initial_delay_ms, refresh).forget();
}

fn refresh_arrows(carousel: &CarouselElements) {
    let track = &carousel.track;
    let state = ArrowState::measure(TrackMetrics {
        scroll_left: f64::from(track.scroll_left()),
        client_width: f64::from(track.client_width()),
        scroll_width: f64::from(track.scroll_width()),
    });
    set_style(&carousel.left_arrow, "opacity", state.left_opacity());
    set_style(&carousel.right_arrow, "opacity", state.right_opacity());
}

fn scroll_track_by(track: &HtmlElement, left: f64) {
    let options = ScrollToOptions::new();
    options.set_left(left);
    options.set_behavior(ScrollBehavior::Smooth);
    track.scroll_by_with_scroll_to_options(&options);
}
