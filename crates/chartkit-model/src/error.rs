//! Error types for chart model serialization.

use std::fmt;

/// Result type alias for serialization operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading or writing a chart model.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The document root names a type outside the allow-list, or a type the
    /// entry point does not produce.
    #[error("Disallowed root type '{name}'")]
    DisallowedType { name: String },

    /// Malformed XML.
    #[error("XML error: {0}")]
    Xml(String),

    /// Malformed JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Well-formed input that does not describe a valid model.
    #[error("Malformed chart document: {message}")]
    Malformed { message: String },
}

impl Error {
    /// Create a disallowed type error.
    pub fn disallowed(name: impl Into<String>) -> Self {
        Self::DisallowedType { name: name.into() }
    }

    /// Create an XML error from any displayable reader or writer failure.
    pub fn xml(error: impl fmt::Display) -> Self {
        Self::Xml(error.to_string())
    }

    /// Create a malformed document error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed {
            message: message.into(),
        }
    }
}
