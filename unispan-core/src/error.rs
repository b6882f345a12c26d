//! Set error types (deterministic only)

use thiserror::Error;

/// Errors raised by set construction and span argument validation.
///
/// All of these are programmer-error-class failures: they are detected
/// before any mutation or scan takes place, so a failed call leaves the
/// set and the caller's indices untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SetError {
    /// Malformed code point range arguments
    #[error("invalid code point range: U+{start:04X}..U+{end:04X}")]
    InvalidRange { start: u32, end: u32 },

    /// Text index outside `[0, len]`
    #[error("text index {index} out of bounds for length {len}")]
    InvalidIndex { index: usize, len: usize },

    /// Zero-length strings cannot be set elements
    #[error("zero-length strings cannot be set elements")]
    EmptyString,

    /// Mutation attempted on a frozen set
    #[error("cannot mutate a frozen set")]
    Frozen,
}

/// Result type for set operations
pub type Result<T> = std::result::Result<T, SetError>;
