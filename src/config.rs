//! Tunable page constants and the selectors that bind behaviors to markup.
//!
//! DESIGN
//! ======
//! Defaults match the shipped page. A page may embed
//! `<script type="application/json" id="page-config">` with any subset of
//! these fields; missing fields keep their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::error::PageError;

/// CSS selectors for every element the controller looks up.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub theme_switcher: String,
    pub sections: String,
    pub main_nav: String,
    pub nav_links: String,
    pub hamburger: String,
    pub copy_message: String,
    pub copy_items: String,
    pub stat_numbers: String,
    pub skill_ticker: String,
    pub video_section: String,
    pub video_track: String,
    pub video_item: String,
    pub left_arrow: String,
    pub right_arrow: String,
    pub thumbnail: String,
    pub video_container: String,
    pub video_player: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            theme_switcher: ".theme-switcher".to_owned(),
            sections: "section".to_owned(),
            main_nav: ".main-nav".to_owned(),
            nav_links: ".main-nav a".to_owned(),
            hamburger: "#hamburger-menu".to_owned(),
            copy_message: "#copyMessage".to_owned(),
            copy_items: ".contact-item[data-copy]".to_owned(),
            stat_numbers: ".stat-number".to_owned(),
            skill_ticker: ".skill-ticker".to_owned(),
            video_section: ".video-section".to_owned(),
            video_track: ".video-slider".to_owned(),
            video_item: ".video-wrapper".to_owned(),
            left_arrow: ".left-arrow".to_owned(),
            right_arrow: ".right-arrow".to_owned(),
            thumbnail: ".video-thumbnail".to_owned(),
            video_container: ".video-container".to_owned(),
            video_player: ".video-iframe".to_owned(),
        }
    }
}

/// Timing, geometry and logging knobs for the page behaviors.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub selectors: Selectors,
    /// A section counts as current once the scroll position is within this
    /// many pixels above its top.
    pub section_lookahead_px: f64,
    /// Height of the fixed header subtracted from nav scroll targets.
    pub header_offset_px: f64,
    /// Nav href that always scrolls to the very top.
    pub home_href: String,
    /// Viewports at or below this width open videos externally.
    pub mobile_breakpoint_px: f64,
    pub nav_debounce_ms: u32,
    pub arrow_scroll_debounce_ms: u32,
    pub arrow_resize_debounce_ms: u32,
    pub arrow_initial_delay_ms: u32,
    /// Carousel step as a multiple of the first item's width.
    pub carousel_step_factor: f64,
    /// Carousel step as a fraction of the track width when it has no items.
    pub carousel_fallback_factor: f64,
    pub copy_message_ms: u32,
    pub counter_duration_ms: u32,
    pub counter_tick_ms: u32,
    /// Fraction of a stat element that must be visible to start counting.
    pub counter_threshold: f64,
    /// `log` level name for console output (`error` .. `trace`).
    pub log_level: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            selectors: Selectors::default(),
            section_lookahead_px: 100.0,
            header_offset_px: 80.0,
            home_href: "#home".to_owned(),
            mobile_breakpoint_px: 768.0,
            nav_debounce_ms: 10,
            arrow_scroll_debounce_ms: 50,
            arrow_resize_debounce_ms: 200,
            arrow_initial_delay_ms: 100,
            carousel_step_factor: 1.5,
            carousel_fallback_factor: 0.8,
            copy_message_ms: 2000,
            counter_duration_ms: 2000,
            counter_tick_ms: 10,
            counter_threshold: 0.5,
            log_level: "info".to_owned(),
        }
    }
}

impl PageConfig {
    /// Parse a JSON override document and validate the result.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::ConfigParse`] for malformed JSON and
    /// [`PageError::ConfigValue`] for values the behaviors cannot run with.
    pub fn from_json(raw: &str) -> Result<Self, PageError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would stall or invert a behavior.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::ConfigValue`] naming the first offending field.
    pub fn validate(&self) -> Result<(), PageError> {
        if self.counter_tick_ms == 0 {
            return Err(PageError::ConfigValue { field: "counter_tick_ms", reason: "must be greater than zero" });
        }
        if self.counter_duration_ms < self.counter_tick_ms {
            return Err(PageError::ConfigValue {
                field: "counter_duration_ms",
                reason: "must be at least one tick long",
            });
        }
        if !(0.0..=1.0).contains(&self.counter_threshold) {
            return Err(PageError::ConfigValue { field: "counter_threshold", reason: "must be within 0.0..=1.0" });
        }
        if self.carousel_step_factor <= 0.0 {
            return Err(PageError::ConfigValue { field: "carousel_step_factor", reason: "must be positive" });
        }
        if self.carousel_fallback_factor <= 0.0 {
            return Err(PageError::ConfigValue { field: "carousel_fallback_factor", reason: "must be positive" });
        }
        Ok(())
    }
}
