/// Convenience result type used across hexgif.
pub type HexGifResult<T> = Result<T, HexGifError>;

/// Top-level error taxonomy used by library APIs.
///
/// Unreadable inputs are not errors: the serializer reports them as
/// [`crate::SourceOutcome::Skipped`] and carries on.
#[derive(thiserror::Error, Debug)]
pub enum HexGifError {
    /// Invalid user-provided configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// The hex buffer could not grow to hold more input.
    #[error("allocation error: {0}")]
    Allocation(String),

    /// The output container could not be opened, written or finalized.
    #[error("encode error: {0}")]
    Encode(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl HexGifError {
    /// Build a [`HexGifError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`HexGifError::Allocation`] value.
    pub fn allocation(msg: impl Into<String>) -> Self {
        Self::Allocation(msg.into())
    }

    /// Build a [`HexGifError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}

impl From<gif::EncodingError> for HexGifError {
    fn from(e: gif::EncodingError) -> Self {
        Self::Encode(e.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
