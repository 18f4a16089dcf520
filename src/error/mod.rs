//! Error handling for the GEDCOM library.
//!
//! Irregular genealogical data is never an error: malformed names, missing
//! dates and dangling pointers all have fallbacks. Errors are reserved for
//! invalid configuration and for the input surfaces (reading and parsing
//! files, writing JSON).

use std::io;

pub mod util;

/// Specialized error type for GEDCOM operations
#[derive(Debug, thiserror::Error)]
pub enum GedcomError {
    /// Invalid engine or transform configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Malformed GEDCOM line
    #[error("Parse error on line {line}: {message}")]
    Parse {
        /// 1-based line number of the offending line
        line: usize,
        /// What was wrong with the line
        message: String,
    },

    /// Error opening or reading a file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Error producing JSON output
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GedcomError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a parse error for a line
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }

    /// Whether the error was caused by configuration rather than input data
    #[must_use]
    pub const fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

/// Result type for GEDCOM operations
pub type Result<T> = std::result::Result<T, GedcomError>;
