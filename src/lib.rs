//! hexgif turns arbitrary files into animated GIFs of hexadecimal glyphs.
//!
//! Every input byte becomes two lowercase hex digits, and every digit becomes one 8x8 glyph
//! cell on a fixed 640x480 canvas (80 columns by 60 rows, 4800 cells per frame).
//!
//! # Pipeline overview
//!
//! 1. **Serialize**: input files -> [`HexBuffer`] (unopenable files are skipped)
//! 2. **Chunk**: [`HexBuffer`] -> frame-sized [`Chunk`]s, in order
//! 3. **Rasterize**: [`Chunk`] -> [`IndexedFrame`] via the glyph font and a [`ColorPolicy`]
//! 4. **Encode**: frames -> GIF container with one global [`Palette`]
//!
//! There is no decoder.
#![forbid(unsafe_code)]

mod chunk;
mod encode {
    pub(crate) mod container;
    pub(crate) mod sink;
}
mod foundation {
    pub(crate) mod core;
    pub(crate) mod error;
}
mod glyph {
    pub(crate) mod font;
}
mod hex {
    pub(crate) mod serializer;
}
mod palette;
mod pipeline;
mod render {
    pub(crate) mod frame;
    pub(crate) mod raster;
}

pub use chunk::{Chunk, chunks, frame_count};
pub use encode::container::{EncodeConfig, GifEncoder, default_gif_config, ensure_parent_dir};
pub use encode::sink::{FrameCollector, FrameSink};
pub use foundation::core::{
    CANVAS_HEIGHT, CANVAS_WIDTH, COLS, ColorMode, DEFAULT_DELAY_CS, FRAME_CHARS, FrameIndex,
    GLYPH_HEIGHT, GLYPH_WIDTH, GridPos, ROWS,
};
pub use foundation::error::{HexGifError, HexGifResult};
pub use glyph::font::{Glyph, HEX_SYMBOLS, glyph_for, symbol_rank};
pub use hex::serializer::{HexBuffer, SourceOutcome, append_reader, serialize_files};
pub use palette::Palette;
pub use pipeline::{EncodeSummary, drive_frames, encode_files, encode_hex_to_writer};
pub use render::frame::{IndexedFrame, build_frame};
pub use render::raster::{BACKGROUND_INDEX, ColorPolicy, draw_glyph};
