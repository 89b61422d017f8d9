//! Theme switcher binding and the `localStorage` preference store.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{HtmlElement, Storage, Window};

use super::{add_class, has_class, listen, remove_class};
use crate::consts::DARK_THEME_CLASS;
use crate::theme::{PreferenceStore, Theme, ThemeController};

/// [`PreferenceStore`] backed by `window.localStorage`.
///
/// Storage can be missing or throw (private browsing, disabled cookies);
/// both read as "no preference".
pub struct LocalStorage {
    storage: Option<Storage>,
}

impl LocalStorage {
    pub fn open(window: &Window) -> Self {
        let storage = match window.local_storage() {
            Ok(storage) => storage,
            Err(err) => {
                log::debug!("localStorage unavailable: {err:?}");
                None
            }
        };
        Self { storage }
    }
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).unwrap_or_default()
    }

    fn set(&self, key: &str, value: &str) -> bool {
        self.storage
            .as_ref()
            .is_some_and(|storage| storage.set_item(key, value).is_ok())
    }
}

/// Apply the saved theme, then flip it on every switcher click.
pub(super) fn bind(window: &Window, body: &HtmlElement, switcher: Option<&HtmlElement>) {
    let controller = ThemeController::load(LocalStorage::open(window));
    apply(body, controller.current());

    let Some(switcher) = switcher else {
        log::debug!("no theme switcher; theme toggle disabled");
        return;
    };

    let controller = Rc::new(RefCell::new(controller));
    let body = body.clone();
    listen(switcher, "click", move |_| {
        let mut controller = controller.borrow_mut();
        // Body class wins over the cached value.
        controller.sync(Theme::from_dark_class(has_class(&body, DARK_THEME_CLASS)));
        let next = controller.toggle();
        apply(&body, next);
    });
}

fn apply(body: &HtmlElement, theme: Theme) {
    remove_class(body, theme.toggled().class_name());
    add_class(body, theme.class_name());
}
