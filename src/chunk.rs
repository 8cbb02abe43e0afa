use crate::foundation::core::{FRAME_CHARS, FrameIndex};

/// A run of hex symbols that fills (at most) one frame's glyph grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Chunk<'a> {
    pub index: FrameIndex,
    pub symbols: &'a [u8],
}

/// Frames needed for `hex_len` symbols: `ceil(hex_len / FRAME_CHARS)`.
pub fn frame_count(hex_len: usize) -> u64 {
    hex_len.div_ceil(FRAME_CHARS) as u64
}

/// Split `symbols` into frame-sized chunks, numbered from 0.
///
/// All chunks hold `FRAME_CHARS` symbols except the last, which holds the remainder.
/// Empty input yields no chunks.
pub fn chunks(symbols: &[u8]) -> impl Iterator<Item = Chunk<'_>> {
    symbols
        .chunks(FRAME_CHARS)
        .scan(FrameIndex(0), |next, symbols| {
            let index = *next;
            *next = index.next();
            Some(Chunk { index, symbols })
        })
}

#[cfg(test)]
#[path = "../tests/unit/chunk.rs"]
mod tests;
