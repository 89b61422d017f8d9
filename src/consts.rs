//! Marker class names, attribute names and fixed keys shared by the markup.

// ── Persistence ─────────────────────────────────────────────────

/// `localStorage` key holding the theme preference.
pub const THEME_STORAGE_KEY: &str = "theme";

// ── Marker classes ──────────────────────────────────────────────

pub const DARK_THEME_CLASS: &str = "dark-theme";
pub const LIGHT_THEME_CLASS: &str = "light-theme";

/// Set on the nav link whose section is currently in view.
pub const ACTIVE_CLASS: &str = "active";

/// Set on `<body>` while the mobile menu is open.
pub const NAV_OPEN_CLASS: &str = "nav-open";

/// Set on the nav element while the mobile menu is open.
pub const MENU_OPEN_CLASS: &str = "is-open";

/// Set on a video container while its inline player is running.
pub const PLAYING_CLASS: &str = "playing";

// ── Attributes ──────────────────────────────────────────────────

pub const COPY_ATTR: &str = "data-copy";
pub const TARGET_ATTR: &str = "data-target";
pub const VIDEO_URL_ATTR: &str = "data-video-url";

// ── Arrow affordance ────────────────────────────────────────────

pub const ARROW_ENABLED_OPACITY: &str = "1";
pub const ARROW_DIMMED_OPACITY: &str = "0.3";

/// Media query that gates the ticker hover pause.
pub const HOVER_MEDIA_QUERY: &str = "(hover: hover)";

/// Element id of the optional JSON configuration block.
pub const CONFIG_ELEMENT_ID: &str = "page-config";
