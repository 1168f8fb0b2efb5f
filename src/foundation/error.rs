/// Convenience result type used across the crate.
pub type BubbleResult<T> = Result<T, BubbleError>;

/// Error taxonomy for configuration and scene handling.
///
/// Placement itself never fails: degenerate geometry is absorbed numerically and
/// missing inputs skip layout. Errors only come from rejecting configuration values
/// and from (de)serializing scenes.
#[derive(thiserror::Error, Debug)]
pub enum BubbleError {
    /// Invalid user-provided configuration or scene data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BubbleError {
    /// Build a [`BubbleError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`BubbleError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for BubbleError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
