//! Error types for the greeting library.

use std::num::ParseIntError;

use thiserror::Error;

/// Errors that can occur when parsing text into a [`WorldCount`](crate::WorldCount).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseWorldCountError {
    /// The input was empty or only whitespace.
    #[error("world count is empty")]
    Empty,

    /// The input is not a whole number that fits in 32 bits.
    #[error("invalid world count '{input}': {source}")]
    Invalid {
        input: String,
        #[source]
        source: ParseIntError,
    },
}
