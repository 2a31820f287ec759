//! Typed errors for wordplay operations.
//!
//! The text routines themselves are total; errors only come from missing
//! input, allocation failure, and the configuration/I/O layer around them.

use std::collections::TryReserveError;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for the library.
#[derive(Debug)]
pub enum TextError {
    /// No input text was supplied.
    InvalidInput { reason: String },

    /// The output buffer could not be reserved.
    Allocation(TryReserveError),

    /// A configuration file could not be parsed or failed validation.
    Config { path: PathBuf, message: String },

    /// I/O error with path context.
    Io {
        path: PathBuf,
        operation: &'static str,
        source: io::Error,
    },
}

impl TextError {
    /// Shorthand for [`TextError::InvalidInput`].
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// True for the precondition violation raised when no text is given.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }
}

impl fmt::Display for TextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput { reason } => write!(f, "Invalid input: {reason}"),
            Self::Allocation(e) => write!(f, "Failed to allocate output buffer: {e}"),
            Self::Config { path, message } => {
                write!(f, "Configuration error in '{}': {message}", path.display())
            }
            Self::Io {
                path,
                operation,
                source,
            } => write!(
                f,
                "I/O error during {operation} on '{}': {source}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for TextError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Allocation(e) => Some(e),
            Self::Io { source, .. } => Some(source),
            Self::InvalidInput { .. } | Self::Config { .. } => None,
        }
    }
}

impl From<TryReserveError> for TextError {
    fn from(e: TryReserveError) -> Self {
        Self::Allocation(e)
    }
}
