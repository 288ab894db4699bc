use thiserror::Error;

/// Errors that can occur while extracting candidates from one source unit.
///
/// Any of these fails only the unit that produced it; the coordinator logs
/// the error and moves on to the next unit.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// I/O error while reading the unit
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The unit's content is not in the expected format (bad JSON, not an archive, ...)
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// The unit's content could not be decoded (corrupt image data)
    #[error("Decode failed: {0}")]
    Decode(String),

    /// A named resource was not present in its container
    #[error("Resource {resource} not found in {container}")]
    MissingResource { container: String, resource: String },

    /// Generic extraction error with message
    #[error("{0}")]
    Other(String),
}

impl ExtractError {
    pub fn invalid_format(msg: impl Into<String>) -> Self {
        Self::InvalidFormat(msg.into())
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }
}

/// Error reported by a publish sink. Never propagated past the coordinator.
#[derive(Debug, Error)]
#[error("failed to publish {key}: {reason}")]
pub struct PublishError {
    pub key: String,
    pub reason: String,
}

impl PublishError {
    pub fn new(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            reason: reason.into(),
        }
    }
}
