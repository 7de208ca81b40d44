//! Attribute runs and styled chunks.

use crate::style::{AttributeSet, TextStyle};
use std::ops::Range;

/// A contiguous range of text sharing one attribute set.
#[derive(Clone, Debug, PartialEq)]
pub struct AttributeRun {
    /// Char range in the buffer.
    pub range: Range<usize>,
    /// Attributes in effect over the whole range.
    pub attributes: AttributeSet,
}

impl AttributeRun {
    /// Create a new run.
    #[must_use]
    pub fn new(range: Range<usize>, attributes: AttributeSet) -> Self {
        Self { range, attributes }
    }

    /// Check if this run overlaps with a char range.
    #[must_use]
    pub fn overlaps(&self, range: &Range<usize>) -> bool {
        self.range.start < range.end && range.start < self.range.end
    }

    /// Check if this run contains a position.
    #[must_use]
    pub fn contains(&self, pos: usize) -> bool {
        self.range.contains(&pos)
    }

    /// Get the length in chars.
    #[must_use]
    pub fn len(&self) -> usize {
        self.range.end.saturating_sub(self.range.start)
    }

    /// Check if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.range.start >= self.range.end
    }

    /// The part of this run inside `range`, if any.
    #[must_use]
    pub fn clipped(&self, range: &Range<usize>) -> Option<Self> {
        let start = self.range.start.max(range.start);
        let end = self.range.end.min(range.end);
        (start < end).then(|| Self::new(start..end, self.attributes.clone()))
    }
}

/// A chunk of text with an optional style, for building buffers in one go.
#[derive(Clone, Debug)]
pub struct StyledChunk<'a> {
    /// The text content.
    pub text: &'a str,
    /// The style to apply, `None` for unattributed text.
    pub style: Option<TextStyle>,
}

impl<'a> StyledChunk<'a> {
    /// Create a new styled chunk.
    #[must_use]
    pub fn new(text: &'a str, style: TextStyle) -> Self {
        Self {
            text,
            style: Some(style),
        }
    }

    /// Create an unstyled chunk.
    #[must_use]
    pub fn plain(text: &'a str) -> Self {
        Self { text, style: None }
    }
}
