//! Atomic matchers: the leaf tokenizers everything else composes.
//!
//! All matchers here consume at most a fixed number of bytes and never
//! index past the end of the input — empty input is an ordinary failure,
//! not undefined behavior. Each matcher advances the cursor only after
//! its match is certain, so the zero-consumption-on-failure contract
//! holds without snapshots.

use crate::cursor::Cursor;
use crate::span::MatchResult;
use crate::tokenizer::Tokenizer;

/// Single-byte predicate matcher; see [`satisfy`].
#[derive(Clone, Copy, Debug)]
pub struct Satisfy<P> {
    pred: P,
}

impl<P: Fn(u8) -> bool> Tokenizer for Satisfy<P> {
    fn tokenize<'src>(&self, cursor: &mut Cursor<'src>) -> MatchResult<'src> {
        let b = cursor.peek()?;
        if !(self.pred)(b) {
            return None;
        }
        let start = cursor.pos();
        cursor.advance(1);
        Some(cursor.span_from(start))
    }
}

/// Match one byte satisfying `pred`, as a length-1 span.
pub fn satisfy<P: Fn(u8) -> bool>(pred: P) -> Satisfy<P> {
    Satisfy { pred }
}

/// Match one ASCII letter `[a-zA-Z]`.
pub fn alphabet() -> Satisfy<impl Fn(u8) -> bool + Copy> {
    satisfy(|b: u8| b.is_ascii_alphabetic())
}

/// Match one lower case ASCII letter `[a-z]`.
pub fn lower_alphabet() -> Satisfy<impl Fn(u8) -> bool + Copy> {
    satisfy(|b: u8| b.is_ascii_lowercase())
}

/// Match one upper case ASCII letter `[A-Z]`.
pub fn upper_alphabet() -> Satisfy<impl Fn(u8) -> bool + Copy> {
    satisfy(|b: u8| b.is_ascii_uppercase())
}

/// Match one decimal digit `[0-9]`.
pub fn digit() -> Satisfy<impl Fn(u8) -> bool + Copy> {
    satisfy(|b: u8| b.is_ascii_digit())
}

/// Match one hexadecimal digit `[0-9a-fA-F]`.
pub fn hex_digit() -> Satisfy<impl Fn(u8) -> bool + Copy> {
    satisfy(|b: u8| b.is_ascii_hexdigit())
}

/// Match one whitespace byte: space, tab, CR, or LF.
pub fn whitespace() -> Satisfy<impl Fn(u8) -> bool + Copy> {
    satisfy(|b: u8| b == b' ' || b == b'\t' || b == b'\r' || b == b'\n')
}

/// Match one line-break byte: CR or LF.
pub fn newline() -> Satisfy<impl Fn(u8) -> bool + Copy> {
    satisfy(|b: u8| b == b'\r' || b == b'\n')
}

/// Match any single byte.
pub fn any_byte() -> Satisfy<impl Fn(u8) -> bool + Copy> {
    satisfy(|_: u8| true)
}

/// Match exactly the byte `value`.
pub fn byte(value: u8) -> Satisfy<impl Fn(u8) -> bool + Copy> {
    satisfy(move |b: u8| b == value)
}

/// Fixed-sequence matcher; see [`literal`].
#[derive(Clone, Copy, Debug)]
pub struct Literal<'lit> {
    bytes: &'lit [u8],
}

impl Tokenizer for Literal<'_> {
    fn tokenize<'src>(&self, cursor: &mut Cursor<'src>) -> MatchResult<'src> {
        if !cursor.starts_with(self.bytes) {
            return None;
        }
        let start = cursor.pos();
        cursor.advance(self.bytes.len());
        Some(cursor.span_from(start))
    }
}

/// Match `text` byte-for-byte, case-sensitive.
///
/// The span on success is sliced from the input, not from `text`, so it
/// carries the match position like every other span. An empty `text`
/// matches anywhere with a zero-length span.
pub fn literal(text: &str) -> Literal<'_> {
    Literal {
        bytes: text.as_bytes(),
    }
}

/// Byte-set membership matcher; see [`one_of`].
#[derive(Clone, Copy, Debug)]
pub struct OneOf<'set> {
    set: &'set [u8],
}

impl Tokenizer for OneOf<'_> {
    fn tokenize<'src>(&self, cursor: &mut Cursor<'src>) -> MatchResult<'src> {
        let b = cursor.peek()?;
        memchr::memchr(b, self.set)?;
        let start = cursor.pos();
        cursor.advance(1);
        Some(cursor.span_from(start))
    }
}

/// Match one byte contained in `set`, as a length-1 span.
pub fn one_of(set: &str) -> OneOf<'_> {
    OneOf {
        set: set.as_bytes(),
    }
}

/// Byte-set exclusion matcher; see [`none_of`].
#[derive(Clone, Copy, Debug)]
pub struct NoneOf<'set> {
    set: &'set [u8],
}

impl Tokenizer for NoneOf<'_> {
    fn tokenize<'src>(&self, cursor: &mut Cursor<'src>) -> MatchResult<'src> {
        let b = cursor.peek()?;
        if memchr::memchr(b, self.set).is_some() {
            return None;
        }
        let start = cursor.pos();
        cursor.advance(1);
        Some(cursor.span_from(start))
    }
}

/// Match one byte **not** contained in `set`, as a length-1 span.
///
/// Fails on empty input, like every byte-consuming matcher.
pub fn none_of(set: &str) -> NoneOf<'_> {
    NoneOf {
        set: set.as_bytes(),
    }
}

#[cfg(test)]
mod tests;
