use std::{io::Write, path::Path};

use crate::{
    chunk::{chunks, frame_count},
    encode::{
        container::{EncodeConfig, GifEncoder},
        sink::FrameSink,
    },
    foundation::{core::ColorMode, error::HexGifResult},
    hex::serializer::{HexBuffer, SourceOutcome, serialize_files},
    palette::Palette,
    render::{frame::build_frame, raster::ColorPolicy},
};

/// What one `encode_files` run consumed and produced.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EncodeSummary {
    pub inputs_read: usize,
    pub inputs_skipped: usize,
    pub bytes_in: u64,
    pub hex_len: usize,
    pub frames: u64,
}

/// Render every chunk of `symbols` in order and hand each frame to `sink`.
///
/// Returns the number of frames emitted, which is zero for empty input.
pub fn drive_frames(
    symbols: &[u8],
    policy: ColorPolicy,
    sink: &mut dyn FrameSink,
) -> HexGifResult<u64> {
    let mut emitted = 0u64;
    for chunk in chunks(symbols) {
        let frame = build_frame(chunk.symbols, chunk.index, policy);
        sink.emit(chunk.index, &frame)?;
        tracing::debug!(frame = chunk.index.0, glyphs = chunk.symbols.len(), "emitted frame");
        emitted += 1;
    }
    debug_assert_eq!(emitted, frame_count(symbols.len()));
    Ok(emitted)
}

/// Encode an already serialized hex buffer as a GIF into `writer`.
pub fn encode_hex_to_writer<W: Write>(
    hex: &HexBuffer,
    mode: ColorMode,
    delay_cs: u16,
    repeat: bool,
    writer: W,
) -> HexGifResult<(W, u64)> {
    let mut encoder = GifEncoder::new(writer, &Palette::for_mode(mode), delay_cs, repeat)?;
    let frames = drive_frames(hex.as_symbols(), ColorPolicy::for_mode(mode), &mut encoder)?;
    Ok((encoder.finish()?, frames))
}

/// Serialize `inputs`, then write the animation to `cfg.out_path`.
///
/// Inputs are fully read before the output is opened; unreadable inputs are skipped.
#[tracing::instrument(skip(cfg, inputs), fields(out = %cfg.out_path.display(), mode = ?cfg.mode))]
pub fn encode_files<P: AsRef<Path>>(
    cfg: &EncodeConfig,
    inputs: &[P],
) -> HexGifResult<EncodeSummary> {
    cfg.validate()?;

    let (hex, outcomes) = serialize_files(inputs)?;

    let mut encoder = GifEncoder::create(cfg)?;
    drive_frames(
        hex.as_symbols(),
        ColorPolicy::for_mode(cfg.mode),
        &mut encoder,
    )?;
    let frames = encoder.frames_written();
    encoder.finish()?;

    let summary = EncodeSummary {
        inputs_read: outcomes.iter().filter(|o| !o.is_skipped()).count(),
        inputs_skipped: outcomes.iter().filter(|o| o.is_skipped()).count(),
        bytes_in: outcomes.iter().map(SourceOutcome::bytes).sum(),
        hex_len: hex.len(),
        frames,
    };
    tracing::info!(
        inputs_read = summary.inputs_read,
        inputs_skipped = summary.inputs_skipped,
        bytes_in = summary.bytes_in,
        frames = summary.frames,
        "encoded gif"
    );
    Ok(summary)
}

#[cfg(test)]
#[path = "../tests/unit/pipeline.rs"]
mod tests;
