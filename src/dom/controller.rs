//! Page behavior controller: loads config, queries elements once, binds
//! every behavior.

use std::rc::Rc;
use std::sync::Once;

use web_sys::{Document, Window};

use super::{PageElements, carousel, copy, counter, menu, nav, playback, theme, ticker};
use crate::config::PageConfig;
use crate::consts::CONFIG_ELEMENT_ID;
use crate::error::PageError;

/// Owns the element handles and configuration shared by the behaviors.
pub struct PageController {
    window: Window,
    elements: Rc<PageElements>,
    config: Rc<PageConfig>,
    /// Thumbnails that already have listeners, keyed by element identity.
    bound_thumbnails: js_sys::WeakSet,
}

impl PageController {
    /// Bind all behaviors to the current document.
    ///
    /// # Errors
    ///
    /// Fails only when there is no window, document or body. Missing
    /// optional elements leave their behavior unbound.
    pub fn mount() -> Result<Self, PageError> {
        let window = web_sys::window().ok_or(PageError::NoWindow)?;
        let document = window.document().ok_or(PageError::NoDocument)?;

        let (config, config_error) = match load_config(&document) {
            Ok(config) => (config, None),
            Err(err) => (PageConfig::default(), Some(err)),
        };
        init_logging(&config.log_level);
        if let Some(err) = config_error {
            log::warn!("{err}; using defaults");
        }

        let config = Rc::new(config);
        let elements = Rc::new(PageElements::query(&document, &config.selectors)?);

        menu::bind(&elements);
        theme::bind(&window, &elements.body, elements.theme_switcher.as_ref());
        nav::bind(&window, &elements, &config);
        carousel::bind(&window, &elements.carousels, &config);
        copy::bind(&window, &elements, &config);
        counter::bind(&elements.stat_numbers, &config);
        ticker::bind(&window, elements.skill_ticker.as_ref());

        let controller = Self { window, elements, config, bound_thumbnails: js_sys::WeakSet::new() };
        let thumbnails = controller.init_video_playback();

        log::info!(
            "page controller mounted: {} sections, {} carousels, {} stats, {} thumbnails",
            controller.elements.sections.len(),
            controller.elements.carousels.len(),
            controller.elements.stat_numbers.len(),
            thumbnails
        );
        Ok(controller)
    }

    /// Bind playback to thumbnails not seen before. Safe to call repeatedly.
    pub fn init_video_playback(&self) -> u32 {
        playback::bind_new(&self.window, &self.elements.document, &self.config, &self.bound_thumbnails)
    }
}

/// Read the optional JSON config block; absent means defaults.
fn load_config(document: &Document) -> Result<PageConfig, PageError> {
    match document.get_element_by_id(CONFIG_ELEMENT_ID) {
        Some(el) => PageConfig::from_json(&el.text_content().unwrap_or_default()),
        None => Ok(PageConfig::default()),
    }
}

fn init_logging(level: &str) {
    static INIT: Once = Once::new();
    let level = level.parse::<log::Level>().unwrap_or(log::Level::Info);
    INIT.call_once(|| {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(level).is_err() {
            web_sys::console::warn_1(&"console logger already installed".into());
        }
    });
}
