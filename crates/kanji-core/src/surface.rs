//! Drawing surface abstraction and its embedded-graphics implementation.
//!
//! The watch face draws through [`DrawSurface`], a narrow stateful
//! contract (current font, current color, string blits) that matches
//! what low-power watch display drivers actually expose. [`EgSurface`]
//! adapts any embedded-graphics [`DrawTarget`] to that contract and is
//! the production path; tests substitute a recording mock instead.

use embedded_graphics::mono_font::{MonoFont, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Baseline, Text};

use crate::theme;

/// Display width in pixels.
pub const DISPLAY_WIDTH_PX: u32 = 240;

/// Display height in pixels.
pub const DISPLAY_HEIGHT_PX: u32 = 240;

/// Font slots the face draws with.
///
/// The actual font assets are host property (they live in flash next to
/// the display driver); the face only ever selects between the two
/// slots and reads their metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontId {
    /// Large kanji-numeral font for the four time digits.
    Large,
    /// Small font for the date line and the status bar.
    Small,
}

/// The two font assets a surface is constructed with.
#[derive(Debug, Clone, Copy)]
pub struct FontSet {
    pub large: &'static MonoFont<'static>,
    pub small: &'static MonoFont<'static>,
}

impl FontSet {
    pub fn get(&self, id: FontId) -> &'static MonoFont<'static> {
        match id {
            FontId::Large => self.large,
            FontId::Small => self.small,
        }
    }
}

/// Narrow drawing contract the watch face renders through.
///
/// Coordinates are surface-local pixels, origin top-left. Font and
/// color are surface state, set once and reused across string draws,
/// mirroring how the display driver batches its command stream.
pub trait DrawSurface {
    type Error;

    /// Clear the entire surface to the background color.
    fn fill(&mut self) -> Result<(), Self::Error>;

    /// Select the font used by subsequent [`draw_string`](Self::draw_string) calls.
    fn set_font(&mut self, font: FontId);

    /// Select the text color used by subsequent draws.
    fn set_color(&mut self, color: Rgb565);

    /// Widest glyph cell of the given font, in pixels.
    fn glyph_width(&self, font: FontId) -> u32;

    /// Draw `text` with the current font and color at `(x, y)` (top-left
    /// of the cell), painting the background across `width` pixels so a
    /// redraw fully overwrites whatever was in the cell before.
    fn draw_string(&mut self, text: &str, x: i32, y: i32, width: u32) -> Result<(), Self::Error>;
}

/// [`DrawSurface`] over any embedded-graphics draw target.
pub struct EgSurface<D> {
    display: D,
    fonts: FontSet,
    font: FontId,
    color: Rgb565,
    background: Rgb565,
}

impl<D: DrawTarget<Color = Rgb565>> EgSurface<D> {
    pub fn new(display: D, fonts: FontSet) -> Self {
        Self {
            display,
            fonts,
            font: FontId::Small,
            color: theme::BRIGHT,
            background: theme::BACKGROUND,
        }
    }

    /// Override the background color the surface clears and blits with.
    pub fn with_background(mut self, background: Rgb565) -> Self {
        self.background = background;
        self
    }

    /// Borrow the underlying draw target (e.g. to flush it to a window).
    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    /// Give the draw target back to the host.
    pub fn release(self) -> D {
        self.display
    }
}

impl<D: DrawTarget<Color = Rgb565>> DrawSurface for EgSurface<D> {
    type Error = D::Error;

    fn fill(&mut self) -> Result<(), Self::Error> {
        self.display.clear(self.background)
    }

    fn set_font(&mut self, font: FontId) {
        self.font = font;
    }

    fn set_color(&mut self, color: Rgb565) {
        self.color = color;
    }

    fn glyph_width(&self, font: FontId) -> u32 {
        self.fonts.get(font).character_size.width
    }

    fn draw_string(&mut self, text: &str, x: i32, y: i32, width: u32) -> Result<(), Self::Error> {
        let font = self.fonts.get(self.font);

        // Blank the cell first so partial updates overwrite stale
        // glyphs without needing a full clear.
        Rectangle::new(Point::new(x, y), Size::new(width, font.character_size.height))
            .into_styled(PrimitiveStyle::with_fill(self.background))
            .draw(&mut self.display)?;

        let style = MonoTextStyleBuilder::new()
            .font(font)
            .text_color(self.color)
            .background_color(self.background)
            .build();
        Text::with_baseline(text, Point::new(x, y), style, Baseline::Top).draw(&mut self.display)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::mock_display::MockDisplay;
    use embedded_graphics::mono_font::ascii::{FONT_6X10, FONT_10X20};

    fn surface() -> EgSurface<MockDisplay<Rgb565>> {
        let mut display = MockDisplay::new();
        display.set_allow_overdraw(true);
        display.set_allow_out_of_bounds_drawing(true);
        EgSurface::new(
            display,
            FontSet {
                large: &FONT_10X20,
                small: &FONT_6X10,
            },
        )
    }

    #[test]
    fn glyph_width_tracks_font_metrics() {
        let surface = surface();
        assert_eq!(surface.glyph_width(FontId::Large), 10);
        assert_eq!(surface.glyph_width(FontId::Small), 6);
    }

    #[test]
    fn fill_paints_the_whole_target() {
        let mut surface = surface();
        surface.fill().unwrap();

        let display = surface.release();
        assert_eq!(display.affected_area().size, display.size());
    }

    #[test]
    fn draw_string_touches_the_requested_cell() {
        let mut surface = surface();
        surface.set_font(FontId::Small);
        surface.draw_string("7", 2, 4, 6).unwrap();

        let area = surface.display().affected_area();
        assert_eq!(area.top_left, Point::new(2, 4));
        assert_eq!(area.size, Size::new(6, 10));
    }
}
