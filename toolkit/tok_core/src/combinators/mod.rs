//! Composition operators over tokenizers.
//!
//! Each operator takes one or more tokenizers and returns a new tokenizer
//! value; nothing executes until the composite is applied to a cursor.
//! Backtracking is cursor-snapshot based: [`Cursor`] is `Copy`, so an
//! operator records the pre-attempt state and assigns it back when the
//! attempt fails. Failure therefore never leaves partial consumption
//! behind, at any nesting depth.

use crate::cursor::Cursor;
use crate::span::MatchResult;
use crate::tokenizer::Tokenizer;

/// Greedily apply `inner` until it fails, the input runs out, or an
/// application stops consuming.
///
/// The zero-consumption stop condition keeps repetition total for inners
/// that can succeed on nothing (e.g. `maybe(x)`): the loop only continues
/// while each round consumes at least one byte.
fn accumulate<T: Tokenizer>(inner: &T, cursor: &mut Cursor<'_>) {
    while !cursor.is_empty() {
        match inner.tokenize(cursor) {
            Some(span) if !span.is_empty() => {}
            _ => break,
        }
    }
}

/// Sequence combinator; see [`sequence`].
#[derive(Clone, Copy, Debug)]
pub struct Sequence<A, B> {
    first: A,
    second: B,
}

impl<A: Tokenizer, B: Tokenizer> Tokenizer for Sequence<A, B> {
    fn tokenize<'src>(&self, cursor: &mut Cursor<'src>) -> MatchResult<'src> {
        let checkpoint = *cursor;
        self.first.tokenize(cursor)?;
        if self.second.tokenize(cursor).is_none() {
            *cursor = checkpoint;
            return None;
        }
        Some(cursor.span_from(checkpoint.pos()))
    }
}

/// Match `first` then `second` as one all-or-nothing composite.
///
/// A failure at either step restores the cursor to the position before
/// `first` ran. N-ary sequences are built by chaining
/// [`then`](Tokenizer::then); because every link snapshots its own start,
/// a failure at step k unwinds to the start of the whole chain, not just
/// the previous step. The composite span covers both matches contiguously.
pub fn sequence<A: Tokenizer, B: Tokenizer>(first: A, second: B) -> Sequence<A, B> {
    Sequence { first, second }
}

/// Alternation combinator; see [`alternate`].
#[derive(Clone, Copy, Debug)]
pub struct Alternate<A, B> {
    first: A,
    second: B,
}

impl<A: Tokenizer, B: Tokenizer> Tokenizer for Alternate<A, B> {
    fn tokenize<'src>(&self, cursor: &mut Cursor<'src>) -> MatchResult<'src> {
        if let Some(span) = self.first.tokenize(cursor) {
            return Some(span);
        }
        // First branch failed, so by contract the cursor is already back
        // at the starting position; the second branch attempts from there.
        self.second.tokenize(cursor)
    }
}

/// Ordered choice: try `first`; only if it fails, try `second` from the
/// same position.
///
/// Left-biased: when both branches would match, the result is `first`'s,
/// and `second` is never attempted. Not longest-match. If both fail, the
/// composite fails with the cursor unmoved.
pub fn alternate<A: Tokenizer, B: Tokenizer>(first: A, second: B) -> Alternate<A, B> {
    Alternate { first, second }
}

/// Zero-or-more combinator; see [`many`].
#[derive(Clone, Copy, Debug)]
pub struct Many<T> {
    inner: T,
}

impl<T: Tokenizer> Tokenizer for Many<T> {
    fn tokenize<'src>(&self, cursor: &mut Cursor<'src>) -> MatchResult<'src> {
        let start = cursor.pos();
        accumulate(&self.inner, cursor);
        Some(cursor.span_from(start))
    }
}

/// Match zero or more instances of `inner`, greedily.
///
/// Never fails: zero repetitions is a valid (empty) match. The aggregate
/// span covers every matched repetition; an observer attached to the
/// composite fires once on that aggregate, not per repetition. A byte
/// that matched is never given back to satisfy a later combinator.
pub fn many<T: Tokenizer>(inner: T) -> Many<T> {
    Many { inner }
}

/// One-or-more combinator; see [`at_least_one`].
#[derive(Clone, Copy, Debug)]
pub struct AtLeastOne<T> {
    inner: T,
}

impl<T: Tokenizer> Tokenizer for AtLeastOne<T> {
    fn tokenize<'src>(&self, cursor: &mut Cursor<'src>) -> MatchResult<'src> {
        let start = cursor.pos();
        self.inner.tokenize(cursor)?;
        accumulate(&self.inner, cursor);
        Some(cursor.span_from(start))
    }
}

/// Match one or more instances of `inner`, greedily.
///
/// Like [`many`], except the first application must succeed; otherwise
/// the composite fails with nothing consumed.
pub fn at_least_one<T: Tokenizer>(inner: T) -> AtLeastOne<T> {
    AtLeastOne { inner }
}

/// Exact-count combinator; see [`exactly`].
#[derive(Clone, Copy, Debug)]
pub struct Exactly<T> {
    inner: T,
    count: usize,
}

impl<T: Tokenizer> Tokenizer for Exactly<T> {
    fn tokenize<'src>(&self, cursor: &mut Cursor<'src>) -> MatchResult<'src> {
        let checkpoint = *cursor;
        for _ in 0..self.count {
            if self.inner.tokenize(cursor).is_none() {
                *cursor = checkpoint;
                return None;
            }
        }
        Some(cursor.span_from(checkpoint.pos()))
    }
}

/// Match exactly `count` instances of `inner`, all-or-nothing.
///
/// If any of the `count` attempts fails, the cursor rolls back to the
/// state before the first attempt. `exactly(inner, 0)` succeeds with a
/// zero-length span without ever invoking `inner`.
pub fn exactly<T: Tokenizer>(inner: T, count: usize) -> Exactly<T> {
    Exactly { inner, count }
}

/// Optional combinator; see [`maybe`].
#[derive(Clone, Copy, Debug)]
pub struct Maybe<T> {
    inner: T,
}

impl<T: Tokenizer> Tokenizer for Maybe<T> {
    fn tokenize<'src>(&self, cursor: &mut Cursor<'src>) -> MatchResult<'src> {
        let start = cursor.pos();
        match self.inner.tokenize(cursor) {
            Some(span) => Some(span),
            None => Some(cursor.span_from(start)),
        }
    }
}

/// Match `inner` if possible; otherwise succeed with a zero-length span.
///
/// Never fails. On the no-match branch the result is an empty span at the
/// current position, so an observer layered on top still fires and can
/// set default state.
pub fn maybe<T: Tokenizer>(inner: T) -> Maybe<T> {
    Maybe { inner }
}
