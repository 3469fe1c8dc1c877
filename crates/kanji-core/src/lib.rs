//! Hardware-independent core library for the kanji clock watch face.
//!
//! This crate contains the platform-agnostic logic for a single
//! fixed-layout watch face that shows the time of day as four
//! kanji-numeral glyphs (HHMM) and the date below it. The face is
//! deliberately lazy about redrawing: a full repaint happens only on
//! activation, while the once-per-second host tick touches the display
//! only when the minute on screen actually changes.
//!
//! The host system (lifecycle manager, status bar, RTC, display driver,
//! font assets) is consumed through the narrow traits in [`host`] and
//! [`surface`], so the renderer compiles on both embedded targets and
//! desktop hosts (for the simulator and tests).

#![no_std]

#[cfg(test)]
extern crate std;

pub mod face;
pub mod glyphs;
pub mod host;
pub mod surface;
pub mod theme;

// Re-export commonly used items
pub use face::{KanjiFace, TICK_INTERVAL_MS};
pub use glyphs::{DIGIT_GLYPHS, glyph_for_digit};
pub use host::{ClockSource, StatusBar, TickScheduler, TimeFields};
pub use surface::{DISPLAY_HEIGHT_PX, DISPLAY_WIDTH_PX, DrawSurface, EgSurface, FontId, FontSet};
pub use theme::Theme;
