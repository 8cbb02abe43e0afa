/// Canvas width in pixels.
pub const CANVAS_WIDTH: u32 = 640;
/// Canvas height in pixels.
pub const CANVAS_HEIGHT: u32 = 480;
/// Glyph cell width in pixels.
pub const GLYPH_WIDTH: u32 = 8;
/// Glyph cell height in pixels.
pub const GLYPH_HEIGHT: u32 = 8;
/// Glyph columns per frame.
pub const COLS: usize = (CANVAS_WIDTH / GLYPH_WIDTH) as usize;
/// Glyph rows per frame.
pub const ROWS: usize = (CANVAS_HEIGHT / GLYPH_HEIGHT) as usize;
/// Hex symbols that fit on one frame.
pub const FRAME_CHARS: usize = COLS * ROWS;
/// Inter-frame delay in centiseconds.
pub const DEFAULT_DELAY_CS: u16 = 30;

const _: () = assert!(CANVAS_WIDTH % GLYPH_WIDTH == 0 && CANVAS_HEIGHT % GLYPH_HEIGHT == 0);

/// Zero-based position of a frame in the output animation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrameIndex(pub u64);

impl FrameIndex {
    /// The frame after this one.
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

/// Output color scheme: palette plus the policy used to paint glyph pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ColorMode {
    /// 256-entry gradient palette, glyph pixels shift brightness every frame.
    #[default]
    Gradient,
    /// Black and white, 1-bit.
    Mono,
}

/// Cell coordinates on the glyph grid of one frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridPos {
    pub col: usize,
    pub row: usize,
}

impl GridPos {
    /// Grid cell for chunk position `i`, filled left-to-right then top-to-bottom.
    pub fn from_index(i: usize) -> Self {
        Self {
            col: i % COLS,
            row: i / COLS,
        }
    }

    /// Top-left pixel of the cell.
    pub fn pixel_origin(self) -> (u32, u32) {
        (
            self.col as u32 * GLYPH_WIDTH,
            self.row as u32 * GLYPH_HEIGHT,
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
