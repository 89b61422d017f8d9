#![allow(clippy::float_cmp)]

use super::*;

fn metrics(scroll_left: f64, client_width: f64, scroll_width: f64) -> TrackMetrics {
    TrackMetrics { scroll_left, client_width, scroll_width }
}

// =============================================================
// scroll_step
// =============================================================

#[test]
fn step_is_one_and_a_half_items() {
    assert_eq!(scroll_step(Some(320.0), 1000.0, 1.5, 0.8), 480.0);
}

#[test]
fn empty_track_falls_back_to_track_width() {
    assert_eq!(scroll_step(None, 1000.0, 1.5, 0.8), 800.0);
}

#[test]
fn direction_signs_step() {
    assert_eq!(Direction::Left.offset(480.0), -480.0);
    assert_eq!(Direction::Right.offset(480.0), 480.0);
}

// =============================================================
// ArrowState
// =============================================================

#[test]
fn at_start_dims_left_only() {
    let state = ArrowState::measure(metrics(0.0, 500.0, 2000.0));
    assert!(!state.can_scroll_left);
    assert!(state.can_scroll_right);
    assert_eq!(state.left_opacity(), "0.3");
    assert_eq!(state.right_opacity(), "1");
}

#[test]
fn one_pixel_still_counts_as_start() {
    let state = ArrowState::measure(metrics(1.0, 500.0, 2000.0));
    assert!(!state.can_scroll_left);
    let state = ArrowState::measure(metrics(1.5, 500.0, 2000.0));
    assert!(state.can_scroll_left);
}

#[test]
fn at_end_dims_right_only() {
    let state = ArrowState::measure(metrics(1500.0, 500.0, 2000.0));
    assert!(state.can_scroll_left);
    assert!(!state.can_scroll_right);
    assert_eq!(state.left_opacity(), "1");
    assert_eq!(state.right_opacity(), "0.3");
}

#[test]
fn within_five_pixels_of_end_counts_as_end() {
    assert!(!ArrowState::measure(metrics(1495.0, 500.0, 2000.0)).can_scroll_right);
    assert!(ArrowState::measure(metrics(1494.0, 500.0, 2000.0)).can_scroll_right);
}

#[test]
fn middle_enables_both() {
    let state = ArrowState::measure(metrics(700.0, 500.0, 2000.0));
    assert_eq!(state, ArrowState { can_scroll_left: true, can_scroll_right: true });
}

#[test]
fn track_that_fits_dims_both() {
    let state = ArrowState::measure(metrics(0.0, 800.0, 800.0));
    assert_eq!(state, ArrowState { can_scroll_left: false, can_scroll_right: false });
}
