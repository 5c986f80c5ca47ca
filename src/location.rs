#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Mark {
    /// Offset in Unicode chars from the beginning of the input.
    pub offset: usize,
    /// Line, counting from 0.
    pub line: usize,
    /// Column, counting from 0.
    pub column: usize,
}

impl PartialOrd for Mark {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Mark {
    #[inline]
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.offset.cmp(&other.offset)
    }
}

impl Mark {
    #[inline]
    pub fn new(offset: usize, line: usize, column: usize) -> Self {
        Self {
            offset,
            line,
            column,
        }
    }

    #[inline]
    pub fn until(self, end: Self) -> Span {
        Span { start: self, end }
    }
}

impl std::fmt::Display for Mark {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.column + 1)
    }
}

/// Source range of an event. Carried through the encoder, never rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
    pub start: Mark,
    pub end: Mark,
}

impl From<std::ops::Range<Mark>> for Span {
    fn from(range: std::ops::Range<Mark>) -> Self {
        Self {
            start: range.start,
            end: range.end,
        }
    }
}

impl Span {
    #[inline]
    pub fn empty(mark: Mark) -> Self {
        Self {
            start: mark,
            end: mark,
        }
    }
}
