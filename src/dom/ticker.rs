//! Pause the skill ticker while hovered, on devices that can hover.

use web_sys::{HtmlElement, Window};

use super::{listen, set_style};
use crate::consts::HOVER_MEDIA_QUERY;
use crate::ticker::PlayState;

pub(super) fn bind(window: &Window, ticker: Option<&HtmlElement>) {
    let Some(ticker) = ticker else {
        return;
    };
    let can_hover = match window.match_media(HOVER_MEDIA_QUERY) {
        Ok(query) => query.is_some_and(|mq| mq.matches()),
        Err(err) => {
            log::debug!("matchMedia failed: {err:?}");
            false
        }
    };
    if !can_hover {
        return;
    }

    for (event, inside) in [("mouseover", true), ("mouseout", false)] {
        let target = ticker.clone();
        listen(ticker, event, move |_| {
            set_style(&target, "animation-play-state", PlayState::on_pointer(inside).css_value());
        });
    }
}
