//! Copy-to-clipboard for contact items.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{Clipboard, HtmlAnchorElement, HtmlElement, Window};

use super::{PageElements, listen, set_style};
use crate::config::PageConfig;
use crate::consts::COPY_ATTR;
use crate::copy::{CopyToast, LinkKind, ToastStyle, copy_payload};
use crate::debounce::Debouncer;

pub(super) fn bind(window: &Window, elements: &PageElements, config: &PageConfig) {
    if elements.copy_items.is_empty() {
        return;
    }

    let toast = Rc::new(RefCell::new(CopyToast::default()));
    let hide = {
        let toast = Rc::clone(&toast);
        let message = elements.copy_message.clone();
        Debouncer::new(config.copy_message_ms, move || {
            let mut toast = toast.borrow_mut();
            if toast.hide() {
                render_toast(message.as_ref(), toast.style());
            }
        })
    };

    for item in &elements.copy_items {
        let item_el = item.clone();
        let window = window.clone();
        let toast = Rc::clone(&toast);
        let hide = hide.clone();
        let message = elements.copy_message.clone();
        listen(item, "click", move |event| {
            let href = item_el.dyn_ref::<HtmlAnchorElement>().map(HtmlAnchorElement::href);
            let kind = LinkKind::classify(&item_el.tag_name(), href.as_deref());
            if kind.allows_default() {
                log::debug!("live link clicked, copying as well");
            } else {
                event.prevent_default();
            }

            let Some(text) = copy_payload(item_el.get_attribute(COPY_ATTR).as_deref()).map(str::to_owned) else {
                return;
            };
            let window = window.clone();
            let toast = Rc::clone(&toast);
            let hide = hide.clone();
            let message = message.clone();
            spawn_local(async move {
                match write_clipboard(&window, &text).await {
                    Ok(()) => {
                        let style = {
                            let mut toast = toast.borrow_mut();
                            toast.show();
                            toast.style()
                        };
                        render_toast(message.as_ref(), style);
                        hide.call();
                    }
                    Err(err) => log::error!("failed to copy text: {err:?}"),
                }
            });
        });
    }
}

async fn write_clipboard(window: &Window, text: &str) -> Result<(), JsValue> {
    let clipboard = js_sys::Reflect::get(&window.navigator(), &JsValue::from_str("clipboard"))?.dyn_into::<Clipboard>()?;
    JsFuture::from(clipboard.write_text(text)).await?;
    Ok(())
}

fn render_toast(message: Option<&HtmlElement>, style: ToastStyle) {
    let Some(message) = message else {
        return;
    };
    set_style(message, "opacity", style.opacity);
    set_style(message, "transform", style.transform);
}
