use std::{fmt, ops::Range};

/// A byte range in the source document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    start: usize,
    end: usize,
}

impl Span {
    /// Create a new span from a byte range
    pub fn new(range: Range<usize>) -> Self {
        Self {
            start: range.start,
            end: range.end.max(range.start),
        }
    }

    /// Get the start offset of the span
    pub fn start(&self) -> usize {
        self.start
    }

    /// Get the end offset of the span
    pub fn end(&self) -> usize {
        self.end
    }

    /// Get the length of the span
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if the span is empty
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Convert a 1-based line and column (as reported by serde_json) into a
    /// zero-length span at that byte offset.
    ///
    /// Positions past the end of the source clamp to the source length.
    pub fn at_line_column(source: &str, line: usize, column: usize) -> Self {
        if line == 0 {
            return Self::new(0..0);
        }

        let line_start = source
            .split_inclusive('\n')
            .take(line - 1)
            .map(str::len)
            .sum::<usize>();

        let offset = (line_start + column.saturating_sub(1)).min(source.len());
        Self::new(offset..offset)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Self::new(range)
    }
}

/// Finds quoted string values in a JSON source so diagnostics can point at
/// them.
///
/// serde_json does not report positions for successfully parsed values, so
/// the locator searches for the literal `"value"` text instead. The n-th
/// occurrence is returned, which matches document order for ids and
/// references.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SourceLocator<'a> {
    source: &'a str,
}

impl<'a> SourceLocator<'a> {
    pub(crate) fn new(source: &'a str) -> Self {
        Self { source }
    }

    /// Span of the `nth` (zero-based) occurrence of `value` as a quoted string
    pub(crate) fn string(&self, value: &str, nth: usize) -> Span {
        let needle = format!("\"{value}\"");
        self.source
            .match_indices(needle.as_str())
            .nth(nth)
            .map(|(offset, matched)| Span::new(offset..offset + matched.len()))
            .unwrap_or_default()
    }

    /// Span of the first quoted occurrence of `value` after `after`
    pub(crate) fn string_after(&self, value: &str, after: Span) -> Span {
        let needle = format!("\"{value}\"");
        let from = after.end().min(self.source.len());
        self.source
            .get(from..)
            .and_then(|rest| rest.find(needle.as_str()))
            .map(|offset| Span::new(from + offset..from + offset + needle.len()))
            .unwrap_or_else(|| self.string(value, 0))
    }
}
