//! `+CGPADDR` response parsing.
//!
//! Grammar of the response, with the newline guards the modem wraps
//! around every answer:
//!
//! ```text
//! DIGIT             := '0' | '1' | .. | '9';
//! ipv4_octet        := DIGIT+;
//! ipv4_dotted_octet := '.' ipv4_octet;
//! ipv4_addr         := ipv4_octet ipv4_dotted_octet{3};
//! guard             := newline newline;
//! response          := guard '+CGPADDR: ' ipv4_addr guard;
//! ```
//!
//! Octets are not range-checked: the modem is trusted to report a real
//! address, and the extractor's job is locating it, not validating it.

use std::cell::RefCell;

use tok_core::{at_least_one, byte, digit, exactly, literal, newline, Cursor, Tokenizer};
use tracing::trace;

use crate::error::ResponseError;

/// Extract the IPv4 address from a `+CGPADDR` response.
///
/// The whole response must match, guards included, with nothing left
/// over; the returned string is the dotted address text between them.
pub fn parse_cgpaddr(input: &str) -> Result<String, ResponseError> {
    let ip = RefCell::new(String::new());

    let octet = at_least_one(digit());
    let dotted_octet = byte(b'.').then(octet);
    let ipv4_addr = octet.then(exactly(dotted_octet, 3)).observe(|span| {
        *ip.borrow_mut() = String::from_utf8_lossy(span.as_bytes()).into_owned();
    });
    let guard = exactly(newline(), 2);
    let response = guard
        .then(literal("+CGPADDR: "))
        .then(ipv4_addr)
        .then(guard);

    let mut cursor = Cursor::from(input);
    if response.tokenize(&mut cursor).is_none() {
        trace!(pos = cursor.pos(), "+CGPADDR response shape mismatch");
        return Err(ResponseError::Malformed("+CGPADDR"));
    }
    if !cursor.is_empty() {
        trace!(remaining = cursor.len(), "trailing bytes after +CGPADDR response");
        return Err(ResponseError::TrailingInput(cursor.len()));
    }
    Ok(ip.into_inner())
}
