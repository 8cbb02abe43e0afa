use std::{
    fs::File,
    io::{ErrorKind, Read},
    path::{Path, PathBuf},
};

use crate::foundation::error::{HexGifError, HexGifResult};

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";
const INITIAL_CAPACITY: usize = 1024;
const READ_CHUNK: usize = 64 * 1024;

/// Lowercase hex expansion of every input byte, two symbols per byte, in input order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HexBuffer {
    symbols: Vec<u8>,
}

impl HexBuffer {
    pub fn new() -> Self {
        Self {
            symbols: Vec::with_capacity(INITIAL_CAPACITY),
        }
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// ASCII symbols, each one of `0-9a-f`.
    pub fn as_symbols(&self) -> &[u8] {
        &self.symbols
    }

    /// Symbols as text. Always valid since only hex digits are ever stored.
    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.symbols).unwrap_or_default()
    }

    /// Append the two-digit encoding of one byte.
    pub fn push_byte(&mut self, byte: u8) -> HexGifResult<()> {
        self.extend_from_bytes(std::slice::from_ref(&byte))
    }

    /// Append the encoding of `bytes`. Growth is amortized by `Vec`'s doubling; a failed
    /// reservation leaves the buffer untouched and reports [`HexGifError::Allocation`].
    pub fn extend_from_bytes(&mut self, bytes: &[u8]) -> HexGifResult<()> {
        let needed = bytes.len().checked_mul(2).ok_or_else(|| {
            HexGifError::allocation(format!("{} input bytes overflow hex length", bytes.len()))
        })?;
        self.symbols.try_reserve(needed).map_err(|e| {
            HexGifError::allocation(format!(
                "failed to grow hex buffer past {} symbols: {e}",
                self.symbols.len()
            ))
        })?;
        for &b in bytes {
            self.symbols.push(HEX_DIGITS[usize::from(b >> 4)]);
            self.symbols.push(HEX_DIGITS[usize::from(b & 0x0F)]);
        }
        Ok(())
    }
}

/// What happened to one input path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SourceOutcome {
    /// Opened and read to the end.
    Read { path: PathBuf, bytes: u64 },
    /// Could not be opened; contributed nothing.
    Skipped { path: PathBuf, reason: String },
    /// Opened, then a read failed; the bytes before the failure were kept.
    Truncated {
        path: PathBuf,
        bytes: u64,
        reason: String,
    },
}

impl SourceOutcome {
    pub fn path(&self) -> &Path {
        match self {
            Self::Read { path, .. } | Self::Skipped { path, .. } | Self::Truncated { path, .. } => {
                path
            }
        }
    }

    /// Bytes this input contributed to the hex buffer.
    pub fn bytes(&self) -> u64 {
        match self {
            Self::Read { bytes, .. } | Self::Truncated { bytes, .. } => *bytes,
            Self::Skipped { .. } => 0,
        }
    }

    /// True when the input contributed nothing: it failed to open, or it opened but the
    /// first read failed (a directory, for instance).
    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped { .. } | Self::Truncated { bytes: 0, .. })
    }
}

/// Append the full contents of `reader` to `hex`.
///
/// IO errors end the read and are returned alongside the byte count; only allocation
/// failure is an `Err`.
pub fn append_reader<R: Read>(
    hex: &mut HexBuffer,
    mut reader: R,
) -> HexGifResult<(u64, Option<std::io::Error>)> {
    let mut buf = vec![0u8; READ_CHUNK];
    let mut total = 0u64;
    loop {
        match reader.read(&mut buf) {
            Ok(0) => return Ok((total, None)),
            Ok(n) => {
                hex.extend_from_bytes(&buf[..n])?;
                total += n as u64;
            }
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Ok((total, Some(e))),
        }
    }
}

/// Serialize `paths` in order into one hex buffer.
///
/// Unopenable paths are skipped without failing the run.
#[tracing::instrument(skip(paths), fields(inputs = paths.len()))]
pub fn serialize_files<P: AsRef<Path>>(
    paths: &[P],
) -> HexGifResult<(HexBuffer, Vec<SourceOutcome>)> {
    let mut hex = HexBuffer::new();
    let mut outcomes = Vec::with_capacity(paths.len());

    for path in paths {
        let path = path.as_ref();
        let file = match File::open(path) {
            Ok(f) => f,
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "skipping unreadable input");
                outcomes.push(SourceOutcome::Skipped {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                });
                continue;
            }
        };

        let (bytes, err) = append_reader(&mut hex, file)?;
        match err {
            None => {
                tracing::debug!(path = %path.display(), bytes, "read input");
                outcomes.push(SourceOutcome::Read {
                    path: path.to_path_buf(),
                    bytes,
                });
            }
            Some(e) => {
                tracing::debug!(path = %path.display(), bytes, error = %e, "input read stopped early");
                outcomes.push(SourceOutcome::Truncated {
                    path: path.to_path_buf(),
                    bytes,
                    reason: e.to_string(),
                });
            }
        }
    }

    Ok((hex, outcomes))
}

#[cfg(test)]
#[path = "../../tests/unit/hex/serializer.rs"]
mod tests;
