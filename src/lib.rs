//! # showreel
//!
//! Page behavior controller for the portfolio site, compiled to WebAssembly.
//!
//! The page markup is static HTML. This crate attaches the interactive
//! behaviors once the document is ready: theme switching, scroll-synced nav
//! highlighting, video carousels, copy-to-clipboard contact items, animated
//! stat counters, inline video playback, the mobile menu and the skill ticker.
//!
//! Every decision that does not need a browser lives in a plain module that
//! is tested natively. The `hydrate` feature adds [`dom`], which queries the
//! markup and forwards DOM events into those modules.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`theme`] | Light/dark preference, persistence through a [`theme::PreferenceStore`] |
//! | [`nav`] | Active-section detection, link scroll targets, mobile menu state |
//! | [`carousel`] | Scroll step and arrow boundary state for video strips |
//! | [`copy`] | Live-link detection and the copy confirmation toast |
//! | [`counter`] | Count-up animation for stat numbers |
//! | [`playback`] | One-video-per-carousel activation planning |
//! | [`ticker`] | Skill ticker hover pause state |
//! | [`config`] | Tunable selectors, offsets and durations |
//! | [`consts`] | Marker class names and fixed keys |
//! | [`error`] | Fatal setup errors |
//! | `debounce` | Trailing-edge timer shared by debounced handlers (`hydrate` only) |
//! | `dom` | Browser wiring (`hydrate` only) |

pub mod carousel;
pub mod config;
pub mod consts;
pub mod copy;
pub mod counter;
pub mod error;
pub mod nav;
pub mod playback;
pub mod theme;
pub mod ticker;

#[cfg(feature = "hydrate")]
pub mod debounce;
#[cfg(feature = "hydrate")]
pub mod dom;
