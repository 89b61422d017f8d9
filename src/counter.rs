//! Count-up animation for stat numbers.
//!
//! A counter advances a fixed increment per tick so that it reaches its target
//! after `duration / tick` ticks. Intermediate values are rounded up; the
//! final frame shows the target exactly.

#[cfg(test)]
#[path = "counter_test.rs"]
mod counter_test;

/// Display value produced by one animation tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CounterFrame {
    /// Still counting; show this value.
    Progress(i64),
    /// Reached the target; show it and stop the timer.
    Done(i64),
}

impl CounterFrame {
    #[must_use]
    pub fn value(self) -> i64 {
        match self {
            Self::Progress(v) | Self::Done(v) => v,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CounterAnimation {
    target: i64,
    increment: f64,
    current: f64,
    finished: bool,
}

impl CounterAnimation {
    /// `tick_ms` must be non-zero; [`crate::config::PageConfig::validate`] guarantees it.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn new(target: i64, duration_ms: u32, tick_ms: u32) -> Self {
        let total_ticks = f64::from(duration_ms) / f64::from(tick_ms.max(1));
        Self { target, increment: target as f64 / total_ticks, current: 0.0, finished: false }
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advance one tick. Once finished, keeps returning the target.
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    pub fn tick(&mut self) -> CounterFrame {
        if self.finished {
            return CounterFrame::Done(self.target);
        }
        self.current += self.increment;
        if self.current >= self.target as f64 {
            self.finished = true;
            CounterFrame::Done(self.target)
        } else {
            CounterFrame::Progress(self.current.ceil() as i64)
        }
    }
}

/// Parse a `data-target` value the way browsers parse leading integers:
/// optional whitespace and sign, then digits, ignoring any suffix (`"250+"`).
#[must_use]
pub fn parse_target(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (sign, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (-1, &trimmed[1..]),
        Some(b'+') => (1, &trimmed[1..]),
        _ => (1, trimmed),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }
    rest[..digits_len].parse::<i64>().ok().map(|v| v * sign)
}
