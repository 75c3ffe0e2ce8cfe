//! The tokenizer capability and the observe wrapper.

use crate::combinators::{alternate, sequence, Alternate, Sequence};
use crate::cursor::Cursor;
use crate::span::{MatchResult, Span};

/// A reusable, stateless matcher over a cursor.
///
/// Applying a tokenizer consumes a prefix of the input on success and
/// nothing on failure:
///
/// - `Some(span)` — the cursor advanced by exactly `span.len()`, and
///   `span` is the prefix it advanced over.
/// - `None` — the cursor is exactly where it was before the call.
///
/// Tokenizer values are built once (a pure expression, no execution) and
/// applied any number of times; the `&self` receiver keeps them freely
/// shareable across calls and threads. The only mutable state in a match
/// attempt is the cursor itself, plus whatever caller-owned state an
/// observer touches.
pub trait Tokenizer {
    /// Attempt a match at the cursor's current position.
    fn tokenize<'src>(&self, cursor: &mut Cursor<'src>) -> MatchResult<'src>;

    /// Sequence: this tokenizer, then `next`, as one all-or-nothing match.
    ///
    /// See [`sequence`] for the rollback contract.
    fn then<T>(self, next: T) -> Sequence<Self, T>
    where
        Self: Sized,
        T: Tokenizer,
    {
        sequence(self, next)
    }

    /// Ordered choice: this tokenizer, or `other` from the same position.
    ///
    /// See [`alternate`] for the left-bias contract.
    fn or<T>(self, other: T) -> Alternate<Self, T>
    where
        Self: Sized,
        T: Tokenizer,
    {
        alternate(self, other)
    }

    /// Invoke `observer` on the matched span whenever this tokenizer
    /// succeeds.
    ///
    /// The wrapper passes the result through unchanged and adds no
    /// consumption of its own; on failure the observer is not called.
    /// Attached to a repetition combinator, the observer fires once on
    /// the aggregate span — attach it to the inner tokenizer instead for
    /// a per-repetition effect.
    ///
    /// Observers fire at the moment the wrapped tokenizer succeeds. An
    /// enclosing combinator that later fails and rolls the cursor back
    /// does not undo the side effect.
    fn observe<F>(self, observer: F) -> Observe<Self, F>
    where
        Self: Sized,
        F: Fn(Span<'_>),
    {
        Observe {
            inner: self,
            observer,
        }
    }
}

/// Tokenizers compose by reference as well as by value, so a value can be
/// reused across several compositions without cloning.
impl<T: Tokenizer + ?Sized> Tokenizer for &T {
    fn tokenize<'src>(&self, cursor: &mut Cursor<'src>) -> MatchResult<'src> {
        (**self).tokenize(cursor)
    }
}

/// Post-match observe wrapper; see [`Tokenizer::observe`].
#[derive(Clone, Copy, Debug)]
pub struct Observe<T, F> {
    inner: T,
    observer: F,
}

impl<T, F> Tokenizer for Observe<T, F>
where
    T: Tokenizer,
    F: Fn(Span<'_>),
{
    fn tokenize<'src>(&self, cursor: &mut Cursor<'src>) -> MatchResult<'src> {
        let span = self.inner.tokenize(cursor)?;
        (self.observer)(span);
        Some(span)
    }
}

#[cfg(test)]
mod tests;
