//! Face colors.
//!
//! RGB565 format (R 5 bits, G 6 bits, B 5 bits); 8-bit components are
//! converted with R>>3, G>>2, B>>3.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::RgbColor;

/// Highlight color for the time and date text - warm near-white
pub const BRIGHT: Rgb565 = Rgb565::new(230 >> 3, 233 >> 2, 236 >> 3);

/// Face background - black for minimum power on OLED panels
pub const BACKGROUND: Rgb565 = Rgb565::BLACK;

/// Color assignment for the watch face.
///
/// A deliberately small theme: the face draws everything in a single
/// highlight color over the surface background. Hosts that theme their
/// apps can override it at construction.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Color used for the time glyphs and the date string.
    pub bright: Rgb565,
}

impl Default for Theme {
    fn default() -> Self {
        Self { bright: BRIGHT }
    }
}
