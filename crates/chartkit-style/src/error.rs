//! Error types for the style parser.
//!
//! Property-level failures are never errors: a reader that cannot handle its
//! input reports absence with `None`. These errors cover stylesheet text that
//! cannot be tokenized or structured at all.

/// Result type alias for style operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while parsing style text.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// CSS parsing error.
    #[error("CSS parse error at line {line}, column {column}: {message}")]
    Parse {
        message: String,
        line: u32,
        column: u32,
    },

    /// Selector parsing error.
    #[error("Invalid selector '{selector}': {message}")]
    InvalidSelector { selector: String, message: String },

    /// The element id does not refer to a live element of the document.
    #[error("Invalid element id")]
    InvalidElementId,

    /// The root element cannot be removed or re-parented.
    #[error("Operation not permitted on the document root")]
    RootElement,
}

impl Error {
    /// Create a parse error.
    pub fn parse(message: impl Into<String>, line: u32, column: u32) -> Self {
        Self::Parse {
            message: message.into(),
            line,
            column,
        }
    }

    /// Create a selector error.
    pub fn invalid_selector(selector: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidSelector {
            selector: selector.into(),
            message: message.into(),
        }
    }
}
