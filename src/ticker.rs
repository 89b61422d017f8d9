//! Skill ticker hover pause.

#[cfg(test)]
#[path = "ticker_test.rs"]
mod ticker_test;

/// CSS `animation-play-state` of the ticker.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PlayState {
    #[default]
    Running,
    Paused,
}

impl PlayState {
    /// State while the pointer is (`inside == true`) or is not over the ticker.
    #[must_use]
    pub fn on_pointer(inside: bool) -> Self {
        if inside { Self::Paused } else { Self::Running }
    }

    #[must_use]
    pub fn css_value(self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Paused => "paused",
        }
    }
}
