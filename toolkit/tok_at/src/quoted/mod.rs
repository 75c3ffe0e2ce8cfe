//! Quoted string extraction.

use std::cell::RefCell;

use tok_core::{at_least_one, byte, none_of, Cursor, Tokenizer};
use tracing::trace;

use crate::error::ResponseError;

/// Extract the body of a double-quoted string.
///
/// A quoted string is at least one character other than `"` between two
/// `"` delimiters; the returned value is the body without the quotes.
/// The quotes must close and nothing may follow them.
pub fn parse_quoted(input: &str) -> Result<String, ResponseError> {
    let body = RefCell::new(String::new());

    let quoted = byte(b'"')
        .then(at_least_one(none_of("\"")).observe(|span| {
            *body.borrow_mut() = String::from_utf8_lossy(span.as_bytes()).into_owned();
        }))
        .then(byte(b'"'));

    let mut cursor = Cursor::from(input);
    if quoted.tokenize(&mut cursor).is_none() {
        trace!(pos = cursor.pos(), "no quoted string at input start");
        return Err(ResponseError::Malformed("quoted string"));
    }
    if !cursor.is_empty() {
        return Err(ResponseError::TrailingInput(cursor.len()));
    }
    Ok(body.into_inner())
}
