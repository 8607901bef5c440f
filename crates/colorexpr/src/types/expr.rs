use crate::types::color::ColorValue;
use crate::types::format::ColorFormat;

/// A contiguous range of characters within a line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Span {
    /// Character offset of the first character.
    pub start: usize,
    /// Length in characters.
    pub len: usize,
}

impl Span {
    pub fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    /// One past the last character.
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    /// Whether a cursor at `offset` touches this span.
    ///
    /// The end position counts: a cursor placed right after a literal still
    /// edits it.
    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset <= self.end()
    }
}

/// A color literal recognized in a line of text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorExpr {
    /// Where the literal sits in the line.
    pub span: Span,
    /// The decoded color.
    pub value: ColorValue,
    /// The notation the literal was written in.
    pub format: ColorFormat,
}
