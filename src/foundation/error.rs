/// Convenience result type used across Spritely.
pub type SpritelyResult<T> = Result<T, SpritelyError>;

/// Top-level error taxonomy used by pipeline APIs.
#[derive(thiserror::Error, Debug)]
pub enum SpritelyError {
    /// Invalid caller-provided data (unknown strategy, empty frame list,
    /// out-of-range frame count or fps).
    #[error("validation error: {0}")]
    Validation(String),

    /// Source file missing, unreadable, or decoded to zero frames.
    #[error("decode error: {0}")]
    Decode(String),

    /// Output file could not be written.
    #[error("encode error: {0}")]
    Encode(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SpritelyError {
    /// Build a [`SpritelyError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SpritelyError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`SpritelyError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
