use image::{GrayImage, Luma, Rgb, RgbImage};

use crate::{
    foundation::core::{CANVAS_HEIGHT, CANVAS_WIDTH, FRAME_CHARS, FrameIndex, GridPos},
    palette::Palette,
    render::raster::{ColorPolicy, draw_glyph},
};

/// One canvas-sized frame of palette indices, row-major, top-to-bottom.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexedFrame {
    pixels: GrayImage,
}

impl IndexedFrame {
    /// Full canvas filled with the background index.
    pub fn blank() -> Self {
        Self {
            pixels: GrayImage::new(CANVAS_WIDTH, CANVAS_HEIGHT),
        }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Palette index at `(x, y)`; out-of-bounds reads as background.
    pub fn index_at(&self, x: u32, y: u32) -> u8 {
        self.pixels.get_pixel_checked(x, y).map_or(0, |p| p.0[0])
    }

    /// Writes are dropped outside the canvas.
    pub fn set_index(&mut self, x: u32, y: u32, index: u8) {
        if x < self.pixels.width() && y < self.pixels.height() {
            self.pixels.put_pixel(x, y, Luma([index]));
        }
    }

    /// Raw index bytes in row-major order.
    pub fn as_indices(&self) -> &[u8] {
        self.pixels.as_raw()
    }

    /// Expand indices through `palette`. Indices missing from the palette render black.
    pub fn to_rgb_image(&self, palette: &Palette) -> RgbImage {
        RgbImage::from_fn(self.width(), self.height(), |x, y| {
            Rgb(palette.get(self.index_at(x, y)).unwrap_or([0, 0, 0]))
        })
    }
}

/// Rasterize one chunk of hex symbols onto a fresh frame.
///
/// Symbol `i` lands in grid cell `i % COLS, i / COLS`. Anything past one frame's worth of
/// cells is ignored.
#[tracing::instrument(level = "trace", skip(symbols), fields(len = symbols.len()))]
pub fn build_frame(symbols: &[u8], frame_index: FrameIndex, policy: ColorPolicy) -> IndexedFrame {
    let mut frame = IndexedFrame::blank();
    for (i, &symbol) in symbols.iter().take(FRAME_CHARS).enumerate() {
        let origin = GridPos::from_index(i).pixel_origin();
        draw_glyph(&mut frame, origin, symbol, frame_index, policy);
    }
    frame
}

#[cfg(test)]
#[path = "../../tests/unit/render/frame.rs"]
mod tests;
