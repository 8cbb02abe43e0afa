//! Fixed 8x8 bitmap font for the sixteen lowercase hex digits.
//!
//! Each glyph is eight row masks, top row first; bit 7 is the leftmost pixel.
//! Row 0 and row 7 are blank, leaving a one pixel gutter between cells.

/// One 8x8 monochrome glyph.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Glyph(pub [u8; 8]);

impl Glyph {
    /// Whether the pixel at local offset `(dx, dy)` is set.
    pub fn is_set(&self, dx: u32, dy: u32) -> bool {
        if dx >= 8 || dy >= 8 {
            return false;
        }
        self.0[dy as usize] & (0x80 >> dx) != 0
    }

    /// Local offsets of all set pixels, row-major.
    pub fn set_pixels(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        (0..8u32).flat_map(move |dy| {
            (0..8u32)
                .filter(move |&dx| self.is_set(dx, dy))
                .map(move |dx| (dx, dy))
        })
    }
}

/// Symbols in glyph-table order.
pub const HEX_SYMBOLS: &[u8; 16] = b"0123456789abcdef";

static FONT: [Glyph; 16] = [
    Glyph([0x00, 0x3C, 0x66, 0x6E, 0x76, 0x66, 0x3C, 0x00]), // 0
    Glyph([0x00, 0x18, 0x38, 0x18, 0x18, 0x18, 0x3C, 0x00]), // 1
    Glyph([0x00, 0x3C, 0x66, 0x0C, 0x18, 0x30, 0x7E, 0x00]), // 2
    Glyph([0x00, 0x3C, 0x66, 0x1C, 0x06, 0x66, 0x3C, 0x00]), // 3
    Glyph([0x00, 0x0C, 0x1C, 0x2C, 0x4C, 0x7E, 0x0C, 0x00]), // 4
    Glyph([0x00, 0x7E, 0x60, 0x7C, 0x06, 0x66, 0x3C, 0x00]), // 5
    Glyph([0x00, 0x3C, 0x60, 0x7C, 0x66, 0x66, 0x3C, 0x00]), // 6
    Glyph([0x00, 0x7E, 0x06, 0x0C, 0x18, 0x30, 0x30, 0x00]), // 7
    Glyph([0x00, 0x3C, 0x66, 0x3C, 0x66, 0x66, 0x3C, 0x00]), // 8
    Glyph([0x00, 0x3C, 0x66, 0x66, 0x3E, 0x06, 0x3C, 0x00]), // 9
    Glyph([0x00, 0x3C, 0x06, 0x3E, 0x66, 0x66, 0x3E, 0x00]), // a
    Glyph([0x00, 0x60, 0x60, 0x7C, 0x66, 0x66, 0x7C, 0x00]), // b
    Glyph([0x00, 0x3C, 0x60, 0x60, 0x60, 0x60, 0x3C, 0x00]), // c
    Glyph([0x00, 0x06, 0x06, 0x3E, 0x66, 0x66, 0x3E, 0x00]), // d
    Glyph([0x00, 0x3C, 0x66, 0x7E, 0x60, 0x60, 0x3C, 0x00]), // e
    Glyph([0x00, 0x1C, 0x30, 0x30, 0x7C, 0x30, 0x30, 0x00]), // f
];

/// Table rank of a hex symbol, or `None` for anything outside `0-9a-f`.
pub fn symbol_rank(symbol: u8) -> Option<usize> {
    match symbol {
        b'0'..=b'9' => Some(usize::from(symbol - b'0')),
        b'a'..=b'f' => Some(usize::from(symbol - b'a') + 10),
        _ => None,
    }
}

/// Glyph for a hex symbol. Uppercase digits are not recognized.
pub fn glyph_for(symbol: u8) -> Option<&'static Glyph> {
    symbol_rank(symbol).map(|rank| &FONT[rank])
}

#[cfg(test)]
#[path = "../../tests/unit/glyph/font.rs"]
mod tests;
