//! Positional line index over a newline-delimited buffer.
//!
//! The index stores only byte offsets (two integers per line) and never
//! copies line content. Lines are recovered by slicing the original buffer,
//! so the buffer must outlive every view taken through the index.

use std::ops::Range;

use memchr::memchr_iter;

/// Half-open byte range `[start, end)` of one non-empty line.
///
/// The newline separator is never part of the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineSpan {
    pub start: usize,
    pub end: usize,
}

#[allow(clippy::len_without_is_empty)]
impl LineSpan {
    /// Length of the span in bytes (always at least 1)
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Borrow the span's bytes from the buffer it was built over
    pub fn slice<'a>(&self, data: &'a [u8]) -> &'a [u8] {
        &data[self.range()]
    }
}

/// Ordered offsets of every non-empty line in a buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineIndex {
    spans: Vec<LineSpan>,
}

impl LineIndex {
    /// Scan `data` once for `\n` separators.
    ///
    /// Zero-length lines produce no entry. A non-empty final line without a
    /// trailing newline ends at `data.len()`.
    pub fn build(data: &[u8]) -> Self {
        let mut spans = Vec::new();
        let mut start = 0;

        for end in memchr_iter(b'\n', data) {
            if end > start {
                spans.push(LineSpan { start, end });
            }
            start = end + 1;
        }

        if start < data.len() {
            spans.push(LineSpan {
                start,
                end: data.len(),
            });
        }

        spans.shrink_to_fit();
        Self { spans }
    }

    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<LineSpan> {
        self.spans.get(position).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = LineSpan> + '_ {
        self.spans.iter().copied()
    }

    /// Sum of all indexed span lengths (separators and blank lines excluded)
    pub fn total_bytes(&self) -> usize {
        self.spans.iter().map(LineSpan::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines<'a>(index: &LineIndex, data: &'a [u8]) -> Vec<&'a [u8]> {
        index.iter().map(|span| span.slice(data)).collect()
    }

    #[test]
    fn test_build_skips_blank_line_and_keeps_unterminated_tail() {
        let data = b"a\n\nb\nc";
        let index = LineIndex::build(data);

        assert_eq!(index.len(), 3);
        assert_eq!(lines(&index, data), vec![&b"a"[..], b"b", b"c"]);
        assert_eq!(index.get(0), Some(LineSpan { start: 0, end: 1 }));
        assert_eq!(index.get(1), Some(LineSpan { start: 3, end: 4 }));
        assert_eq!(index.get(2), Some(LineSpan { start: 5, end: 6 }));
        assert_eq!(index.get(3), None);
    }

    #[test]
    fn test_build_trailing_newline() {
        let data = b"{\"a\":1}\n{\"b\":2}\n";
        let index = LineIndex::build(data);

        assert_eq!(index.len(), 2);
        assert_eq!(lines(&index, data), vec![&b"{\"a\":1}"[..], b"{\"b\":2}"]);
    }

    #[test]
    fn test_build_leading_and_repeated_newlines() {
        let data = b"\n\n\nx\n\n\ny\n\n";
        let index = LineIndex::build(data);

        assert_eq!(lines(&index, data), vec![&b"x"[..], b"y"]);
    }

    #[test]
    fn test_build_empty_and_blank_only() {
        assert!(LineIndex::build(b"").is_empty());
        assert!(LineIndex::build(b"\n").is_empty());
        assert!(LineIndex::build(b"\n\n\n\n").is_empty());
    }

    #[test]
    fn test_build_keeps_carriage_return_inside_span() {
        // CRLF input leaves the `\r` in the span; callers trim it
        let data = b"a\r\nb\r\n";
        let index = LineIndex::build(data);

        assert_eq!(lines(&index, data), vec![&b"a\r"[..], b"b\r"]);
    }

    #[test]
    fn test_spans_are_ordered_and_in_bounds() {
        let data = b"first\n\nsecond line\nthird\n\n\nfourth";
        let index = LineIndex::build(data);

        let mut previous_end = 0;
        for span in index.iter() {
            assert!(span.start < span.end);
            assert!(span.end <= data.len());
            assert!(span.start >= previous_end);
            assert!(!span.slice(data).contains(&b'\n'));
            previous_end = span.end;
        }
        assert_eq!(index.len(), 4);
    }

    #[test]
    fn test_total_bytes() {
        let index = LineIndex::build(b"ab\n\ncde\nf");
        assert_eq!(index.total_bytes(), 6);
        assert_eq!(LineIndex::build(b"").total_bytes(), 0);
    }
}
