//! Copy-to-clipboard contact items and the confirmation toast.

#[cfg(test)]
#[path = "copy_test.rs"]
mod copy_test;

/// How a clicked copy element relates to default navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkKind {
    /// A `mailto:` or `tel:` anchor; the browser should still follow it.
    Live,
    /// Anything else; default navigation is suppressed.
    Inert,
}

impl LinkKind {
    /// Classify an element by tag name and (for anchors) resolved `href`.
    ///
    /// The scheme is matched case-insensitively after trimming whitespace.
    #[must_use]
    pub fn classify(tag_name: &str, href: Option<&str>) -> Self {
        let is_anchor = tag_name.eq_ignore_ascii_case("a");
        match href {
            Some(href) if is_anchor && LIVE_SCHEMES.iter().any(|scheme| has_scheme(href.trim(), scheme)) => {
                Self::Live
            }
            _ => Self::Inert,
        }
    }

    #[must_use]
    pub fn allows_default(self) -> bool {
        self == Self::Live
    }
}

const LIVE_SCHEMES: [&str; 2] = ["mailto:", "tel:"];

fn has_scheme(href: &str, scheme: &str) -> bool {
    href.get(..scheme.len()).is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
}

/// Text to put on the clipboard, or `None` when the payload is empty.
#[must_use]
pub fn copy_payload(raw: Option<&str>) -> Option<&str> {
    raw.filter(|text| !text.is_empty())
}

/// Confirmation toast. Shown on each successful copy; hidden by the
/// debounced timer that follows the last one.
#[derive(Clone, Copy, Debug, Default)]
pub struct CopyToast {
    visible: bool,
}

/// Inline styles for the toast element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToastStyle {
    pub opacity: &'static str,
    pub transform: &'static str,
}

pub const TOAST_SHOWN: ToastStyle = ToastStyle { opacity: "1", transform: "translateX(-50%) translateY(0)" };
pub const TOAST_HIDDEN: ToastStyle = ToastStyle { opacity: "0", transform: "translateX(-50%) translateY(10px)" };

impl CopyToast {
    pub fn show(&mut self) {
        self.visible = true;
    }

    /// Hide unconditionally. Returns `true` if the toast was showing.
    pub fn hide(&mut self) -> bool {
        std::mem::replace(&mut self.visible, false)
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn style(&self) -> ToastStyle {
        if self.visible { TOAST_SHOWN } else { TOAST_HIDDEN }
    }
}
