//! Crate-level error types.

use std::fmt;

/// Errors produced by the canvas3d crate.
///
/// The interaction core itself never fails — missing targets, degenerate
/// gestures, and out-of-range values are absorbed where they occur.
/// Errors only arise on the configuration load/save surface.
#[derive(Debug)]
pub enum CanvasError {
    /// Generic I/O failure while reading or writing an options file.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for CanvasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for CanvasError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::OptionsParse(_) => None,
        }
    }
}

impl From<std::io::Error> for CanvasError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
