use super::*;

fn run_to_completion(anim: &mut CounterAnimation) -> Vec<CounterFrame> {
    let mut frames = Vec::new();
    for _ in 0..10_000 {
        let frame = anim.tick();
        frames.push(frame);
        if matches!(frame, CounterFrame::Done(_)) {
            break;
        }
    }
    frames
}

// =============================================================
// CounterAnimation
// =============================================================

#[test]
fn target_100_ends_exactly_at_100_after_200_ticks() {
    let mut anim = CounterAnimation::new(100, 2000, 10);
    let frames = run_to_completion(&mut anim);
    assert_eq!(frames.len(), 200);
    assert_eq!(frames.last().copied(), Some(CounterFrame::Done(100)));
    assert!(anim.is_finished());
}

#[test]
fn stays_at_target_after_finishing() {
    let mut anim = CounterAnimation::new(100, 2000, 10);
    run_to_completion(&mut anim);
    assert_eq!(anim.tick(), CounterFrame::Done(100));
    assert_eq!(anim.tick().value(), 100);
}

#[test]
fn intermediate_values_round_up() {
    let mut anim = CounterAnimation::new(100, 2000, 10);
    // increment is 0.5 per tick
    assert_eq!(anim.tick(), CounterFrame::Progress(1));
    assert_eq!(anim.tick(), CounterFrame::Progress(1));
    assert_eq!(anim.tick(), CounterFrame::Progress(2));
}

#[test]
fn values_never_decrease_or_overshoot() {
    let mut anim = CounterAnimation::new(37, 2000, 10);
    let frames = run_to_completion(&mut anim);
    let mut last = 0;
    for frame in &frames {
        assert!(frame.value() >= last);
        assert!(frame.value() <= 37);
        last = frame.value();
    }
    assert_eq!(frames.last().copied(), Some(CounterFrame::Done(37)));
}

#[test]
fn zero_target_finishes_on_first_tick() {
    let mut anim = CounterAnimation::new(0, 2000, 10);
    assert_eq!(anim.tick(), CounterFrame::Done(0));
}

#[test]
fn large_target_finishes_near_expected_tick_count() {
    let mut anim = CounterAnimation::new(1_000_000, 2000, 10);
    let frames = run_to_completion(&mut anim);
    assert!((199..=201).contains(&frames.len()));
    assert_eq!(frames.last(), Some(&CounterFrame::Done(1_000_000)));
}

// =============================================================
// parse_target
// =============================================================

#[test]
fn parses_plain_integer() {
    assert_eq!(parse_target("100"), Some(100));
}

#[test]
fn ignores_suffix_and_leading_whitespace() {
    assert_eq!(parse_target("  250+"), Some(250));
    assert_eq!(parse_target("12.9"), Some(12));
}

#[test]
fn accepts_sign() {
    assert_eq!(parse_target("-5"), Some(-5));
    assert_eq!(parse_target("+7"), Some(7));
}

#[test]
fn rejects_non_numeric() {
    assert_eq!(parse_target("abc"), None);
    assert_eq!(parse_target(""), None);
    assert_eq!(parse_target("-"), None);
}
