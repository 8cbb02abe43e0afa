use crate::{
    foundation::core::{ColorMode, FrameIndex},
    glyph::font::glyph_for,
    render::frame::IndexedFrame,
};

/// Palette index reserved for the solid background.
pub const BACKGROUND_INDEX: u8 = 0;

const GRADIENT_BASE: u64 = 32;
const GRADIENT_SPAN: u64 = 223;

/// How set glyph pixels are colored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorPolicy {
    /// Every set pixel gets the same palette index.
    Monochrome { foreground: u8 },
    /// Brightness walks diagonally across each glyph and advances one step per frame.
    AnimatedGradient,
}

impl ColorPolicy {
    pub fn for_mode(mode: ColorMode) -> Self {
        match mode {
            ColorMode::Gradient => Self::AnimatedGradient,
            ColorMode::Mono => Self::Monochrome { foreground: 1 },
        }
    }

    /// Palette index for the glyph pixel at local offset `(dx, dy)` on `frame`.
    ///
    /// The gradient stays within `32..=254`, never touching the background index.
    pub fn index_for(self, frame: FrameIndex, dx: u32, dy: u32) -> u8 {
        match self {
            Self::Monochrome { foreground } => foreground,
            Self::AnimatedGradient => {
                let step = (frame.0 % GRADIENT_SPAN) + u64::from(dx) + u64::from(dy);
                (GRADIENT_BASE + step % GRADIENT_SPAN) as u8
            }
        }
    }
}

/// Plot the glyph for `symbol` with its top-left corner at `origin`.
///
/// Unknown symbols are ignored. Pixels past the canvas edge are clipped.
pub fn draw_glyph(
    frame: &mut IndexedFrame,
    origin: (u32, u32),
    symbol: u8,
    frame_index: FrameIndex,
    policy: ColorPolicy,
) {
    let Some(glyph) = glyph_for(symbol) else {
        return;
    };
    let (ox, oy) = origin;
    for (dx, dy) in glyph.set_pixels() {
        let (Some(x), Some(y)) = (ox.checked_add(dx), oy.checked_add(dy)) else {
            continue;
        };
        frame.set_index(x, y, policy.index_for(frame_index, dx, dy));
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
