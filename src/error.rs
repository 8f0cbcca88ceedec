//! Error handling module for macinit
//!
//! Provides the library's error type using thiserror. Bad selections are never
//! errors here: the generator reports them inside `GenerationResult`. These
//! variants cover catalog construction, value parsing and share codes. File
//! I/O is reported through `anyhow` with context by `config_file`.

use thiserror::Error;

/// Main error type for macinit
#[derive(Error, Debug)]
pub enum MacInitError {
    /// Two catalog entries of the same kind share an id
    #[error("Duplicate {kind} id in catalog: {id}")]
    DuplicateId { kind: &'static str, id: String },

    /// A share code that is not valid URL-safe base64 JSON
    #[error("Invalid share code: {0}")]
    ShareCode(String),

    /// Validation errors (command-line input, tweak assignments)
    #[error("Validation error: {0}")]
    Validation(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for macinit operations
pub type Result<T> = std::result::Result<T, MacInitError>;

impl MacInitError {
    /// Create a share code error
    pub fn share_code(msg: impl Into<String>) -> Self {
        Self::ShareCode(msg.into())
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub(crate) fn duplicate(kind: &'static str, id: impl Into<String>) -> Self {
        Self::DuplicateId {
            kind,
            id: id.into(),
        }
    }
}
