//! Scroll-synced navigation and the mobile menu toggle.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// A navigable section as measured from the layout.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionOffset {
    pub id: String,
    /// Distance from the document top, in CSS pixels.
    pub top: f64,
}

impl SectionOffset {
    #[must_use]
    pub fn new(id: impl Into<String>, top: f64) -> Self {
        Self { id: id.into(), top }
    }
}

/// The section the reader is currently in.
///
/// The last section in document order whose top, less `lookahead`, is at or
/// above `scroll_y`. Later sections win ties even when offsets are not
/// monotonic.
#[must_use]
pub fn current_section(sections: &[SectionOffset], scroll_y: f64, lookahead: f64) -> Option<&str> {
    sections
        .iter()
        .rev()
        .find(|section| scroll_y >= section.top - lookahead)
        .map(|section| section.id.as_str())
}

/// Whether a nav link's `href` points at the section `id`.
///
/// Sections without an id never match, so a bare `#` link stays inactive.
#[must_use]
pub fn is_link_for(href: &str, id: &str) -> bool {
    !id.is_empty() && href.strip_prefix('#').is_some_and(|target| target == id)
}

/// Window scroll position for a nav click.
///
/// The home link always goes to the very top; other targets stop
/// `header_offset` pixels above the section so the fixed header does not
/// cover its heading.
#[must_use]
pub fn scroll_target(href: &str, home_href: &str, target_top: f64, header_offset: f64) -> f64 {
    if href == home_href { 0.0 } else { target_top - header_offset }
}

/// Open/closed state of the hamburger menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    #[must_use]
    pub fn from_open(open: bool) -> Self {
        if open { Self::Open } else { Self::Closed }
    }

    #[must_use]
    pub fn is_open(self) -> bool {
        self == Self::Open
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Open => Self::Closed,
            Self::Closed => Self::Open,
        }
    }

    /// State after a nav link click, or `None` when nothing changes.
    #[must_use]
    pub fn close_on_link(self) -> Option<Self> {
        match self {
            Self::Open => Some(Self::Closed),
            Self::Closed => None,
        }
    }
}
