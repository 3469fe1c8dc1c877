//! Font assets for the simulator.
//!
//! Real watch firmware ships its kanji font in flash next to the
//! display driver; the simulator bundles a hand-drawn 16×16 bitmap
//! covering exactly the ten numerals the face needs. Glyphs are
//! stacked vertically in the raw image, one 16×16 cell per digit.

use embedded_graphics::geometry::Size;
use embedded_graphics::image::ImageRaw;
use embedded_graphics::mono_font::mapping::StrGlyphMapping;
use embedded_graphics::mono_font::{DecorationDimensions, MonoFont};
use embedded_graphics::pixelcolor::BinaryColor;

static GLYPH_MAPPING: StrGlyphMapping<'static> = StrGlyphMapping::new("〇一二三四五六七八九", 0);

/// 16×16 kanji numerals 〇 through 九, two bytes per row, MSB left.
#[rustfmt::skip]
const KANJI_16X16_DATA: &[u8] = &[
    // 〇
    0b00000000, 0b00000000,
    0b00000111, 0b11100000,
    0b00011100, 0b00111000,
    0b00110000, 0b00001100,
    0b01100000, 0b00000110,
    0b01100000, 0b00000110,
    0b01100000, 0b00000110,
    0b01100000, 0b00000110,
    0b01100000, 0b00000110,
    0b01100000, 0b00000110,
    0b00110000, 0b00001100,
    0b00011100, 0b00111000,
    0b00000111, 0b11100000,
    0b00000000, 0b00000000,
    0b00000000, 0b00000000,
    0b00000000, 0b00000000,
    // 一
    0b00000000, 0b00000000,
    0b00000000, 0b00000000,
    0b00000000, 0b00000000,
    0b00000000, 0b00000000,
    0b00000000, 0b00000000,
    0b00000000, 0b00000000,
    0b01111111, 0b11111110,
    0b01111111, 0b11111110,
    0b00000000, 0b00000000,
    0b00000000, 0b00000000,
    0b00000000, 0b00000000,
    0b00000000, 0b00000000,
    0b00000000, 0b00000000,
    0b00000000, 0b00000000,
    0b00000000, 0b00000000,
    0b00000000, 0b00000000,
    // 二
    0b00000000, 0b00000000,
    0b00000000, 0b00000000,
    0b00000000, 0b00000000,
    0b00011111, 0b11111000,
    0b00011111, 0b11111000,
    0b00000000, 0b00000000,
    0b00000000, 0b00000000,
    0b00000000, 0b00000000,
    0b00000000, 0b00000000,
    0b00000000, 0b00000000,
    0b01111111, 0b11111110,
    0b01111111, 0b11111110,
    0b00000000, 0b00000000,
    0b00000000, 0b00000000,
    0b00000000, 0b00000000,
    0b00000000, 0b00000000,
    // 三
    0b00000000, 0b00000000,
    0b00000000, 0b00000000,
    0b00111111, 0b11111100,
    0b00111111, 0b11111100,
    0b00000000, 0b00000000,
    0b00000000, 0b00000000,
    0b00011111, 0b11111000,
    0b00011111, 0b11111000,
    0b00000000, 0b00000000,
    0b00000000, 0b00000000,
    0b00000000, 0b00000000,
    0b01111111, 0b11111110,
    0b01111111, 0b11111110,
    0b00000000, 0b00000000,
    0b00000000, 0b00000000,
    0b00000000, 0b00000000,
    // 四
    0b00000000, 0b00000000,
    0b00000000, 0b00000000,
    0b01111111, 0b11111110,
    0b01100110, 0b01100110,
    0b01100110, 0b01100110,
    0b01100110, 0b01100110,
    0b01100110, 0b01100110,
    0b01100110, 0b01100110,
    0b01100110, 0b01100110,
    0b01100000, 0b00000110,
    0b01100000, 0b00000110,
    0b01111111, 0b11111110,
    0b01111111, 0b11111110,
    0b00000000, 0b00000000,
    0b00000000, 0b00000000,
    0b00000000, 0b00000000,
    // 五
    0b00000000, 0b00000000,
    0b00111111, 0b11111100,
    0b00111111, 0b11111100,
    0b00000110, 0b00000000,
    0b00000110, 0b00000000,
    0b00000110, 0b00000000,
    0b00011111, 0b11111000,
    0b00011111, 0b11111000,
    0b00000000, 0b01100000,
    0b00000000, 0b01100000,
    0b00000000, 0b01100000,
    0b01111111, 0b11111110,
    0b01111111, 0b11111110,
    0b00000000, 0b00000000,
    0b00000000, 0b00000000,
    0b00000000, 0b00000000,
    // 六
    0b00000000, 0b00000000,
    0b00000001, 0b10000000,
    0b00000001, 0b10000000,
    0b00000000, 0b00000000,
    0b01111111, 0b11111110,
    0b01111111, 0b11111110,
    0b00000110, 0b01100000,
    0b00001100, 0b00110000,
    0b00001100, 0b00110000,
    0b00011000, 0b00011000,
    0b00011000, 0b00011000,
    0b00110000, 0b00001100,
    0b00110000, 0b00001100,
    0b00000000, 0b00000000,
    0b00000000, 0b00000000,
    0b00000000, 0b00000000,
    // 七
    0b00000000, 0b00000000,
    0b00000011, 0b00000000,
    0b00000011, 0b00000000,
    0b00000011, 0b00000000,
    0b01111111, 0b11111110,
    0b01111111, 0b11111110,
    0b00000011, 0b00000000,
    0b00000011, 0b00000000,
    0b00000011, 0b00000000,
    0b00000011, 0b00000000,
    0b00000011, 0b00000000,
    0b00000011, 0b11111111,
    0b00000011, 0b11111111,
    0b00000000, 0b00000000,
    0b00000000, 0b00000000,
    0b00000000, 0b00000000,
    // 八
    0b00000000, 0b00000000,
    0b00000000, 0b00000000,
    0b00000010, 0b01000000,
    0b00000010, 0b01000000,
    0b00000110, 0b01100000,
    0b00000110, 0b01100000,
    0b00001100, 0b00110000,
    0b00001100, 0b00110000,
    0b00011000, 0b00011000,
    0b00011000, 0b00011000,
    0b00110000, 0b00001100,
    0b00110000, 0b00001100,
    0b01100000, 0b00000110,
    0b00000000, 0b00000000,
    0b00000000, 0b00000000,
    0b00000000, 0b00000000,
    // 九
    0b00000000, 0b00000000,
    0b00000110, 0b00000000,
    0b00000110, 0b00000000,
    0b01111111, 0b11111110,
    0b01111111, 0b11111110,
    0b00001100, 0b00110000,
    0b00001100, 0b00110000,
    0b00011000, 0b00110000,
    0b00011000, 0b00110000,
    0b00110000, 0b00110011,
    0b00110000, 0b00110011,
    0b01100000, 0b00111111,
    0b01100000, 0b00111111,
    0b00000000, 0b00000000,
    0b00000000, 0b00000000,
    0b00000000, 0b00000000,
];

/// Large font slot: the ten kanji numerals.
pub const KANJI_16X16: MonoFont<'static> = MonoFont {
    image: ImageRaw::<BinaryColor>::new(KANJI_16X16_DATA, 16),
    glyph_mapping: &GLYPH_MAPPING,
    character_size: Size::new(16, 16),
    character_spacing: 0,
    baseline: 13,
    underline: DecorationDimensions::new(15, 1),
    strikethrough: DecorationDimensions::new(8, 1),
};
