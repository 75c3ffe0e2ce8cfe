//! Composable lexical tokenizers over borrowed byte buffers.
//!
//! This crate builds tokenizers by composing small matching values instead
//! of writing scanning loops by hand. A [`Tokenizer`] consumes a prefix of
//! the input through a [`Cursor`] and either succeeds with a [`Span`] of
//! the consumed bytes or fails with `None`, leaving the cursor exactly
//! where it was. Complex tokenizers ("an IPv4 address", "a quoted string",
//! "a signed integer") are composed from atomic byte-class matchers with
//! sequencing, ordered choice, and repetition operators.
//!
//! # Consumption Contract
//!
//! Every tokenizer in this crate obeys the same two rules:
//!
//! - **Exact consumption on success**: the cursor advances by exactly the
//!   length of the returned span, and the span is a prefix of what the
//!   cursor saw before the call.
//! - **Zero consumption on failure**: `None` means the cursor is untouched,
//!   so a caller can always retry a different alternative at the same
//!   position.
//!
//! [`Cursor`] is `Copy`; combinators snapshot it before speculative work
//! and assign the snapshot back on failure. No engine operation copies or
//! allocates buffer bytes — spans are borrowed views.
//!
//! # Observers
//!
//! Matched text reaches caller logic through observers: `Fn(Span)`
//! callbacks attached with [`Tokenizer::observe`]. Tokenizer values stay
//! immutable and shareable; accumulating observers capture caller-owned
//! `Cell`/`RefCell` state.
//!
//! ```
//! use std::cell::RefCell;
//! use tok_core::{at_least_one, byte, none_of, Cursor, Tokenizer};
//!
//! let body = RefCell::new(Vec::new());
//! let quoted = byte(b'"')
//!     .then(at_least_one(none_of("\"")).observe(|span| {
//!         body.borrow_mut().extend_from_slice(span.as_bytes());
//!     }))
//!     .then(byte(b'"'));
//!
//! let mut cursor = Cursor::from("\"this is a string\"");
//! let token = quoted.tokenize(&mut cursor);
//!
//! assert!(token.is_some());
//! assert_eq!(body.into_inner(), b"this is a string");
//! ```

mod combinators;
mod cursor;
mod matchers;
mod span;
mod tokenizer;

pub use combinators::{
    alternate, at_least_one, exactly, many, maybe, sequence, Alternate, AtLeastOne, Exactly, Many,
    Maybe, Sequence,
};
pub use cursor::Cursor;
pub use matchers::{
    alphabet, any_byte, byte, digit, hex_digit, literal, lower_alphabet, newline, none_of, one_of,
    satisfy, upper_alphabet, whitespace, Literal, NoneOf, OneOf, Satisfy,
};
pub use span::{MatchResult, Span};
pub use tokenizer::{Observe, Tokenizer};
