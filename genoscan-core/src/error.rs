//! Structured error types for genoscan.

use thiserror::Error;

/// Unified error type for all genoscan operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GenoscanError {
    /// A strict sequence constructor met a character outside its alphabet.
    #[error("invalid {alphabet} character '{character}' at position {position}")]
    InvalidCharacter {
        alphabet: &'static str,
        character: char,
        position: usize,
    },

    /// Invalid input (bad arguments, out-of-range values)
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience alias used throughout genoscan.
pub type Result<T> = std::result::Result<T, GenoscanError>;
