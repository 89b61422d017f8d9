//! Video carousel geometry: arrow step size and boundary affordance.

#[cfg(test)]
#[path = "carousel_test.rs"]
mod carousel_test;

use crate::consts::{ARROW_DIMMED_OPACITY, ARROW_ENABLED_OPACITY};

/// The track counts as scrolled away from the start only past this many pixels.
pub const START_SLOP_PX: f64 = 1.0;

/// The track counts as at its end within this many pixels of max scroll.
pub const END_SLOP_PX: f64 = 5.0;

/// Horizontal distance one arrow click scrolls the track.
///
/// `first_item_width` is `None` for an empty track, in which case the step
/// is a fraction of the track's visible width.
#[must_use]
pub fn scroll_step(first_item_width: Option<f64>, track_width: f64, step_factor: f64, fallback_factor: f64) -> f64 {
    match first_item_width {
        Some(width) => width * step_factor,
        None => track_width * fallback_factor,
    }
}

/// Scroll metrics read from the track element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackMetrics {
    pub scroll_left: f64,
    pub client_width: f64,
    pub scroll_width: f64,
}

/// Which arrows can still move the track.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArrowState {
    pub can_scroll_left: bool,
    pub can_scroll_right: bool,
}

impl ArrowState {
    #[must_use]
    pub fn measure(metrics: TrackMetrics) -> Self {
        let at_end = metrics.scroll_left + metrics.client_width >= metrics.scroll_width - END_SLOP_PX;
        Self { can_scroll_left: metrics.scroll_left > START_SLOP_PX, can_scroll_right: !at_end }
    }

    #[must_use]
    pub fn left_opacity(self) -> &'static str {
        opacity(self.can_scroll_left)
    }

    #[must_use]
    pub fn right_opacity(self) -> &'static str {
        opacity(self.can_scroll_right)
    }
}

fn opacity(enabled: bool) -> &'static str {
    if enabled { ARROW_ENABLED_OPACITY } else { ARROW_DIMMED_OPACITY }
}

/// Arrow direction, as a sign on the scroll step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Signed `scrollBy` left offset for this direction.
    #[must_use]
    pub fn offset(self, step: f64) -> f64 {
        match self {
            Self::Left => -step,
            Self::Right => step,
        }
    }
}
