//! Spans of matched input and the match result type.

/// Immutable view of a contiguous matched sub-range of the input buffer.
///
/// Carries the byte offset of the match in the original buffer plus a
/// borrowed slice of the matched bytes. Spans never own or copy buffer
/// content; they are only created from a live [`Cursor`](crate::Cursor)
/// at the moment a match succeeds, so a span cannot outlive its buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Span<'src> {
    /// Byte offset of the match in the original buffer.
    start: usize,
    /// The matched bytes.
    bytes: &'src [u8],
}

impl<'src> Span<'src> {
    /// Internal constructor; see [`Cursor::span_from`](crate::Cursor::span_from).
    pub(crate) fn new(start: usize, bytes: &'src [u8]) -> Self {
        Self { start, bytes }
    }

    /// Byte offset of the match in the original buffer.
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Byte offset one past the end of the match.
    #[inline]
    pub fn end(&self) -> usize {
        self.start + self.bytes.len()
    }

    /// Length of the match in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` for a zero-length match.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The matched bytes.
    #[inline]
    pub fn as_bytes(&self) -> &'src [u8] {
        self.bytes
    }

    /// The matched bytes as UTF-8 text.
    ///
    /// Matching is byte-oriented, so a span can start or end inside a
    /// multi-byte character (e.g. via [`any_byte`](crate::any_byte));
    /// the conversion is therefore checked rather than assumed.
    pub fn to_str(&self) -> Result<&'src str, std::str::Utf8Error> {
        std::str::from_utf8(self.bytes)
    }
}

/// Result of applying a tokenizer: `Some(span)` of the consumed bytes, or
/// `None` for no match (and no consumption). There is no partial-match
/// state — a tokenizer either fully commits a span or commits nothing.
pub type MatchResult<'src> = Option<Span<'src>>;
