//! Error types for colour code parsing.

use thiserror::Error;

/// Error type returned when a colour code string cannot be converted.
///
/// Every variant carries the offending input so callers can report
/// exactly which string was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The string does not match the expected pattern for its claimed
    /// representation (hex, RGB or HSL).
    #[error("invalid colour code: {0:?}")]
    InvalidFormat(String),
    /// The string has no parenthesised component list to split.
    #[error("expected a parenthesised component list: {0:?}")]
    MalformedStructure(String),
}
