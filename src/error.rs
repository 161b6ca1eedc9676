//! Error types for the color engine.

use thiserror::Error;

/// Errors produced by the pure conversion and parsing functions.
///
/// Live text entry never surfaces these: the model validates first and
/// ignores anything it cannot use.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The text is not a 3 or 6 digit hexadecimal color.
    #[error("invalid hex color format: {0:?}")]
    InvalidFormat(String),
    /// The progress status tag is not one of `success`, `warning`, `error`.
    #[error("unknown progress status: {0:?}")]
    UnknownStatus(String),
}
