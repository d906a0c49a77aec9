use thiserror::Error;

/// Result type alias using TufDiffError
pub type Result<T> = std::result::Result<T, TufDiffError>;

/// Canonical error taxonomy for root-metadata comparison.
///
/// Each variant maps to a stable error code that can be used for
/// programmatic error handling, testing, and external API responses.
/// Recoverable anomalies (dangling key references, duplicate signature
/// entries, missing owner metadata) are handled locally by the differs
/// and never surface here.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TufDiffError {
    /// Both documents carry the same version; a self-comparison is meaningless
    #[error("cannot compare root version {version} to itself")]
    InvalidComparison { version: u64 },

    /// Document bytes are not valid UTF-8 JSON, or a field has the wrong type
    #[error("malformed root metadata: {reason}")]
    MalformedMetadata { reason: String },

    /// A required root metadata field is absent
    #[error("required root metadata field is absent: {field}")]
    MissingField { field: String },

    /// The requested root version does not exist in the history
    #[error("root version {version} not found")]
    NotFound { version: u64 },

    /// JSON encoding/decoding failure outside of document parsing
    #[error("serialization error: {message}")]
    Serialization { message: String },

    /// Filesystem failure while resolving the version history
    #[error("I/O error: {message}")]
    Io { message: String },
}

impl TufDiffError {
    /// Get the stable error code for this error
    pub fn code(&self) -> &'static str {
        match self {
            TufDiffError::InvalidComparison { .. } => "ERR_INVALID_COMPARISON",
            TufDiffError::MalformedMetadata { .. } => "ERR_MALFORMED_METADATA",
            TufDiffError::MissingField { .. } => "ERR_MISSING_FIELD",
            TufDiffError::NotFound { .. } => "ERR_NOT_FOUND",
            TufDiffError::Serialization { .. } => "ERR_SERIALIZATION",
            TufDiffError::Io { .. } => "ERR_IO",
        }
    }
}

impl From<serde_json::Error> for TufDiffError {
    fn from(err: serde_json::Error) -> Self {
        TufDiffError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for TufDiffError {
    fn from(err: std::io::Error) -> Self {
        TufDiffError::Io {
            message: err.to_string(),
        }
    }
}
