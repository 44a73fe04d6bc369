//! Viewport fitting for fixed design resolutions.
//!
//! Content authored against a fixed canvas (a 5120×1440 operations wall,
//! a 1920×1080 kiosk screen) is fitted into containers of arbitrary size:
//! contain or cover scaling, alignment of the leftover space, and a choice
//! between visually transforming a design-sized box or resizing it
//! outright. Pure geometry — no DOM, no rendering, `no_std` compatible.
//!
//! # Modules
//!
//! - [`fit`] — Fit modes (Contain, Cover), alignment, and the fit computation
//! - [`track`] — Owned fit state, resize updates, change notification
//! - [`scroll`] — Clamped scrolling for overflowing strips
//! - `style` (feature) — CSS and SVG rendering of fit results
//! - `params` (feature) — Screen configuration from query strings

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod fit;
#[cfg(feature = "params")]
pub mod params;
pub mod scroll;
#[cfg(feature = "style")]
pub mod style;
#[cfg(feature = "alloc")]
pub mod track;

// Re-exports: core types from fit module
pub use fit::{FitError, FitMode, Fitted, Frame, Rgba, Size, Sizing, XAlign, YAlign};
pub use scroll::StripScroller;
#[cfg(feature = "alloc")]
pub use track::{FitTracker, Subscription};
