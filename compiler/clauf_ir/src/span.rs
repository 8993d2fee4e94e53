//! Byte spans into a source buffer.

use std::fmt;

/// A byte offset that does not fit in a `u32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpanError {
    pub offset: usize,
}

impl fmt::Display for SpanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "byte offset {} is past the 4 GiB source limit", self.offset)
    }
}

impl std::error::Error for SpanError {}

/// Byte range into the source buffer, end exclusive.
///
/// Layout: 8 bytes (`start: u32`, `end: u32`). Inputs larger than
/// `u32::MAX` bytes are refused by the lexer before any span is built.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
#[repr(C)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    /// Placeholder span for synthesized nodes.
    pub const DUMMY: Span = Span { start: 0, end: 0 };

    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    pub fn try_from_range(range: std::ops::Range<usize>) -> Result<Self, SpanError> {
        let narrow = |offset: usize| u32::try_from(offset).map_err(|_| SpanError { offset });
        Ok(Span {
            start: narrow(range.start)?,
            end: narrow(range.end)?,
        })
    }

    /// Zero-length span at `offset`.
    #[inline]
    pub const fn point(offset: u32) -> Span {
        Span {
            start: offset,
            end: offset,
        }
    }

    #[inline]
    pub const fn len(&self) -> u32 {
        self.end - self.start
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    #[inline]
    pub fn contains(&self, offset: u32) -> bool {
        offset >= self.start && offset < self.end
    }

    /// Smallest span covering both `self` and `other`.
    #[inline]
    #[must_use]
    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    #[inline]
    pub fn to_range(&self) -> std::ops::Range<usize> {
        self.start as usize..self.end as usize
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::Span;
    crate::static_assert_size!(Span, 8);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_merge_covers_operands() {
        let left = Span::new(0, 1);
        let right = Span::new(8, 9);
        assert_eq!(left.merge(right), Span::new(0, 9));
        assert_eq!(right.merge(left), Span::new(0, 9));
    }

    #[test]
    fn test_span_contains_is_end_exclusive() {
        let span = Span::new(10, 20);
        assert!(span.contains(10));
        assert!(span.contains(19));
        assert!(!span.contains(20));
        assert!(!span.contains(9));
    }

    #[test]
    fn test_span_point() {
        let point = Span::point(42);
        assert!(point.is_empty());
        assert_eq!(point.len(), 0);
        assert_eq!(point.to_range(), 42..42);
    }

    #[test]
    fn test_span_try_from_range() {
        assert_eq!(Span::try_from_range(3..7), Ok(Span::new(3, 7)));

        let too_far = u32::MAX as usize + 1;
        assert_eq!(
            Span::try_from_range(too_far..too_far + 2),
            Err(SpanError { offset: too_far })
        );
        assert_eq!(
            Span::try_from_range(0..too_far),
            Err(SpanError { offset: too_far })
        );
    }

    #[test]
    fn test_span_error_display() {
        let msg = SpanError { offset: 4_294_967_296 }.to_string();
        assert_eq!(msg, "byte offset 4294967296 is past the 4 GiB source limit");
    }

    #[test]
    fn test_span_debug_display() {
        let span = Span::new(100, 200);
        assert_eq!(format!("{span:?}"), "100..200");
        assert_eq!(format!("{span}"), "100..200");
    }
}
