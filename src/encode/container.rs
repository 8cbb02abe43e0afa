use std::{
    borrow::Cow,
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::{
    encode::sink::FrameSink,
    foundation::{
        core::{CANVAS_HEIGHT, CANVAS_WIDTH, ColorMode, DEFAULT_DELAY_CS, FrameIndex},
        error::{HexGifError, HexGifResult},
    },
    palette::Palette,
    render::frame::IndexedFrame,
};

#[derive(Clone, Debug)]
pub struct EncodeConfig {
    pub out_path: PathBuf,
    pub mode: ColorMode,
    /// Delay after each frame, in centiseconds.
    pub delay_cs: u16,
    /// Write a NETSCAPE loop extension so viewers repeat forever.
    pub repeat: bool,
}

impl EncodeConfig {
    pub fn validate(&self) -> HexGifResult<()> {
        if self.out_path.as_os_str().is_empty() {
            return Err(HexGifError::validation("output path must not be empty"));
        }
        if self.out_path.is_dir() {
            return Err(HexGifError::validation(format!(
                "output path '{}' is a directory",
                self.out_path.display()
            )));
        }
        Ok(())
    }

    pub fn with_mode(mut self, mode: ColorMode) -> Self {
        self.mode = mode;
        self
    }
}

pub fn default_gif_config(out_path: impl Into<PathBuf>) -> EncodeConfig {
    EncodeConfig {
        out_path: out_path.into(),
        mode: ColorMode::default(),
        delay_cs: DEFAULT_DELAY_CS,
        repeat: false,
    }
}

pub fn ensure_parent_dir(path: &Path) -> HexGifResult<()> {
    if let Some(parent) = path.parent() {
        use anyhow::Context as _;
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

/// Animated GIF writer: global palette once, then one full-canvas image per frame.
pub struct GifEncoder<W: Write> {
    inner: gif::Encoder<W>,
    delay_cs: u16,
    frames: u64,
}

impl GifEncoder<BufWriter<File>> {
    /// Create (or truncate) the output file named by `cfg`.
    pub fn create(cfg: &EncodeConfig) -> HexGifResult<Self> {
        cfg.validate()?;
        ensure_parent_dir(&cfg.out_path)?;

        let file = File::create(&cfg.out_path).map_err(|e| {
            HexGifError::encode(format!(
                "failed to open output '{}': {e}",
                cfg.out_path.display()
            ))
        })?;

        Self::new(
            BufWriter::new(file),
            &Palette::for_mode(cfg.mode),
            cfg.delay_cs,
            cfg.repeat,
        )
    }
}

impl<W: Write> GifEncoder<W> {
    /// Writes the header and global color table immediately.
    pub fn new(writer: W, palette: &Palette, delay_cs: u16, repeat: bool) -> HexGifResult<Self> {
        if palette.is_empty() || palette.len() > 256 {
            return Err(HexGifError::validation(format!(
                "palette must hold 1..=256 colors, got {}",
                palette.len()
            )));
        }

        let mut inner = gif::Encoder::new(
            writer,
            CANVAS_WIDTH as u16,
            CANVAS_HEIGHT as u16,
            &palette.as_rgb_bytes(),
        )?;
        if repeat {
            inner.set_repeat(gif::Repeat::Infinite)?;
        }

        Ok(Self {
            inner,
            delay_cs,
            frames: 0,
        })
    }

    pub fn frames_written(&self) -> u64 {
        self.frames
    }

    pub fn encode_frame(&mut self, frame: &IndexedFrame) -> HexGifResult<()> {
        if frame.width() != CANVAS_WIDTH || frame.height() != CANVAS_HEIGHT {
            return Err(HexGifError::validation(format!(
                "frame size mismatch: got {}x{}, expected {}x{}",
                frame.width(),
                frame.height(),
                CANVAS_WIDTH,
                CANVAS_HEIGHT
            )));
        }

        let mut out = gif::Frame::default();
        out.width = CANVAS_WIDTH as u16;
        out.height = CANVAS_HEIGHT as u16;
        out.delay = self.delay_cs;
        out.buffer = Cow::Borrowed(frame.as_indices());
        self.inner.write_frame(&out)?;
        self.frames += 1;
        Ok(())
    }

    /// Write the trailer, flush, and hand back the writer.
    pub fn finish(self) -> HexGifResult<W> {
        let mut writer = self
            .inner
            .into_inner()
            .map_err(|e| HexGifError::encode(format!("failed to finalize gif: {e}")))?;
        writer
            .flush()
            .map_err(|e| HexGifError::encode(format!("failed to flush gif output: {e}")))?;
        Ok(writer)
    }
}

impl<W: Write> FrameSink for GifEncoder<W> {
    fn emit(&mut self, index: FrameIndex, frame: &IndexedFrame) -> HexGifResult<()> {
        tracing::trace!(frame = index.0, "writing gif frame");
        self.encode_frame(frame)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/container.rs"]
mod tests;
