//! Hamburger menu for narrow viewports.

use web_sys::HtmlElement;

use super::{PageElements, add_class, has_class, listen, remove_class};
use crate::consts::{MENU_OPEN_CLASS, NAV_OPEN_CLASS};
use crate::nav::MenuState;

pub(super) fn bind(elements: &PageElements) {
    let (Some(hamburger), Some(main_nav)) = (&elements.hamburger, &elements.main_nav) else {
        return;
    };

    {
        let body = elements.body.clone();
        let main_nav = main_nav.clone();
        listen(hamburger, "click", move |_| {
            let next = menu_state(&body).toggled();
            apply(&body, &main_nav, next);
        });
    }

    for link in &elements.nav_links {
        let body = elements.body.clone();
        let main_nav = main_nav.clone();
        listen(link, "click", move |_| {
            if let Some(next) = menu_state(&body).close_on_link() {
                apply(&body, &main_nav, next);
            }
        });
    }
}

fn menu_state(body: &HtmlElement) -> MenuState {
    MenuState::from_open(has_class(body, NAV_OPEN_CLASS))
}

fn apply(body: &HtmlElement, main_nav: &HtmlElement, state: MenuState) {
    if state.is_open() {
        add_class(body, NAV_OPEN_CLASS);
        add_class(main_nav, MENU_OPEN_CLASS);
    } else {
        remove_class(body, NAV_OPEN_CLASS);
        remove_class(main_nav, MENU_OPEN_CLASS);
    }
}
