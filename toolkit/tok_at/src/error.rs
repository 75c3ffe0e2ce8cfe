//! Error type for response extraction.

use thiserror::Error;

/// Failure to extract a value from a response.
///
/// The tokenizer engine reports failure as plain "no match"; this layer
/// names what was being parsed and whether the input kept going past a
/// complete response.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResponseError {
    /// The input did not match the expected response shape.
    #[error("malformed {0} response")]
    Malformed(&'static str),
    /// A complete response matched, but unconsumed bytes remain.
    #[error("{0} trailing bytes after a complete response")]
    TrailingInput(usize),
}
