//! Resolving where command input text comes from.
//!
//! Precedence: positional argument, then `--file`, then piped stdin.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::TextError;

/// A place to read input text from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Text given directly on the command line
    Argument(String),
    /// Text read from a file
    File(PathBuf),
    /// Text piped on standard input
    Stdin,
}

impl InputSource {
    /// Pick a source from CLI arguments.
    ///
    /// `stdin_is_tty` is passed in so callers decide how to detect a
    /// terminal. Returns [`TextError::InvalidInput`] when no source is
    /// available.
    pub fn resolve(
        text: Option<String>,
        file: Option<PathBuf>,
        stdin_is_tty: bool,
    ) -> Result<Self, TextError> {
        match (text, file) {
            (Some(text), _) => Ok(Self::Argument(text)),
            (None, Some(path)) => Ok(Self::File(path)),
            (None, None) if !stdin_is_tty => Ok(Self::Stdin),
            (None, None) => Err(TextError::invalid_input(
                "no text given; pass TEXT, --file PATH, or pipe text on stdin",
            )),
        }
    }

    /// Read the full text. File and stdin contents lose one trailing
    /// line terminator; arguments are returned untouched.
    pub fn read(&self) -> Result<String, TextError> {
        match self {
            Self::Argument(text) => Ok(text.clone()),
            Self::File(path) => {
                debug!(path = %path.display(), "reading input file");
                let content = fs::read_to_string(path).map_err(|source| TextError::Io {
                    path: path.clone(),
                    operation: "read",
                    source,
                })?;
                Ok(strip_line_terminator(content))
            }
            Self::Stdin => {
                debug!("reading input from stdin");
                let mut content = String::new();
                io::stdin()
                    .read_to_string(&mut content)
                    .map_err(|source| TextError::Io {
                        path: Path::new("<stdin>").to_path_buf(),
                        operation: "read",
                        source,
                    })?;
                Ok(strip_line_terminator(content))
            }
        }
    }
}

/// Remove exactly one trailing `\n` or `\r\n`.
pub fn strip_line_terminator(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}

/// Split text into the units a command operates on: the whole text, or
/// each line when `per_line` is set.
pub fn split_units(text: &str, per_line: bool) -> Vec<&str> {
    if per_line {
        text.lines().collect()
    } else {
        vec![text]
    }
}
