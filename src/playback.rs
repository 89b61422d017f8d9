//! Thumbnail activation: inline playback on wide viewports, a new tab on
//! narrow ones, and at most one playing video per carousel.

#[cfg(test)]
#[path = "playback_test.rs"]
mod playback_test;

/// What activating a thumbnail should do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Activation {
    /// Open the video URL in a new browsing context; page state is untouched.
    OpenExternal { url: String },
    /// Load `src` into the thumbnail's inline player and mark it playing.
    PlayInline { src: String },
}

impl Activation {
    /// Viewports at or below `breakpoint` are treated as mobile.
    #[must_use]
    pub fn decide(viewport_width: f64, breakpoint: f64, video_url: &str) -> Self {
        if viewport_width <= breakpoint {
            Self::OpenExternal { url: video_url.to_owned() }
        } else {
            Self::PlayInline { src: autoplay_src(video_url) }
        }
    }
}

/// Append `autoplay=1` to the query string, keeping any fragment last.
#[must_use]
pub fn autoplay_src(url: &str) -> String {
    let (base, fragment) = match url.find('#') {
        Some(idx) => url.split_at(idx),
        None => (url, ""),
    };
    let separator = if base.contains('?') { '&' } else { '?' };
    format!("{base}{separator}autoplay=1{fragment}")
}

/// Keys that activate a focused thumbnail.
#[must_use]
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}

/// Containers to stop before starting `start`, by index within one carousel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActivationPlan {
    pub stop: Vec<usize>,
    pub start: usize,
}

/// Plan an inline start of container `target` given the containers currently
/// flagged playing. Every other playing container is stopped, so after the
/// plan is applied exactly one container in the carousel is playing.
#[must_use]
pub fn plan_activation(playing: &[usize], target: usize) -> ActivationPlan {
    let stop = playing.iter().copied().filter(|&idx| idx != target).collect();
    ActivationPlan { stop, start: target }
}
