//! Attributed string: rope-backed text with a run table of attribute sets.

use crate::style::{AttributeKey, AttributeSet, AttributeValue};
use crate::text::rope::RopeWrapper;
use crate::text::run::{AttributeRun, StyledChunk};
use std::fmt;
use std::ops::Range;

/// Mutable rich-text storage the run builder writes into.
///
/// Positions and lengths are char indices. Implementations must keep
/// attribute writes scoped to exactly the range they are given.
pub trait TextAttributeStore {
    /// Length in chars.
    fn len(&self) -> usize;

    /// Check if empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Insert `text` at char index `at` with no attributes and return the
    /// inserted range. `at` past the end appends.
    fn insert_plain(&mut self, at: usize, text: &str) -> Range<usize>;

    /// Set one attribute over exactly `range`.
    fn add_attribute(&mut self, range: Range<usize>, value: AttributeValue);

    /// Attributes in effect at a char index, `None` past the end.
    fn attributes_at(&self, index: usize) -> Option<&AttributeSet>;
}

/// Text buffer whose characters carry per-range display attributes.
///
/// Runs tile the whole buffer in order with no gaps and no empty runs.
/// Neighbouring runs with identical attribute sets are merged, so the run
/// table is the minimal description of the attributes.
///
/// # Examples
///
/// ```
/// use richstr::{AttributedString, Font, Rgba};
///
/// let mut text = AttributedString::new();
/// text.append_run("Error: ", &Font::bold_system(12.0), Some(Rgba::RED));
/// text.append_run("disk full", &Font::system(12.0), None);
///
/// assert_eq!(text.to_string(), "Error: disk full");
/// assert_eq!(text.runs().len(), 2);
/// assert_eq!(text.attributes_at(0).and_then(|a| a.foreground()), Some(Rgba::RED));
/// assert_eq!(text.attributes_at(8).and_then(|a| a.foreground()), None);
/// ```
#[derive(Clone, Debug, Default)]
pub struct AttributedString {
    rope: RopeWrapper,
    runs: Vec<AttributeRun>,
    revision: u64,
}

impl AttributedString {
    /// Create an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a buffer from styled chunks, in order.
    #[must_use]
    pub fn from_chunks(chunks: &[StyledChunk<'_>]) -> Self {
        let mut text = Self::new();
        for chunk in chunks {
            match &chunk.style {
                Some(style) => {
                    text.append_styled(chunk.text, style);
                }
                None => {
                    text.append_plain(chunk.text);
                }
            }
        }
        text
    }

    /// Length in chars.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rope.len_chars()
    }

    /// Length of the UTF-8 encoding in bytes.
    #[must_use]
    pub fn len_bytes(&self) -> usize {
        self.rope.len_bytes()
    }

    /// Check if the buffer has no text.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rope.is_empty()
    }

    /// Plain text content.
    #[must_use]
    pub fn as_string(&self) -> String {
        self.rope.to_string()
    }

    /// Plain text of a char range, clamped to the content.
    #[must_use]
    pub fn substring(&self, range: Range<usize>) -> String {
        self.rope.slice(range).to_string()
    }

    /// Runs in order.
    #[must_use]
    pub fn runs(&self) -> &[AttributeRun] {
        &self.runs
    }

    /// Runs overlapping `range`, clipped to it.
    #[must_use]
    pub fn runs_in(&self, range: Range<usize>) -> Vec<AttributeRun> {
        self.runs
            .iter()
            .filter_map(|run| run.clipped(&range))
            .collect()
    }

    /// Attributes in effect at a char index, `None` past the end.
    #[must_use]
    pub fn attributes_at(&self, index: usize) -> Option<&AttributeSet> {
        self.run_index_at(index).map(|i| &self.runs[i].attributes)
    }

    /// A single attribute at a char index.
    #[must_use]
    pub fn attribute_at(&self, index: usize, key: AttributeKey) -> Option<&AttributeValue> {
        self.attributes_at(index).and_then(|attrs| attrs.get(key))
    }

    /// Get the buffer revision (increments on every mutation).
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Append text with no attributes.
    pub fn append_plain(&mut self, text: &str) -> Range<usize> {
        let at = self.len();
        self.insert_plain(at, text)
    }

    /// Insert text with no attributes at char index `at`.
    ///
    /// Runs at or after `at` shift right. The inserted text never inherits
    /// attributes from its neighbours.
    pub fn insert_plain(&mut self, at: usize, text: &str) -> Range<usize> {
        let at = at.min(self.len());
        let inserted = text.chars().count();
        if inserted == 0 {
            return at..at;
        }

        self.split_at(at);
        self.rope.insert(at, text);

        let idx = self.runs.partition_point(|run| run.range.end <= at);
        for run in &mut self.runs[idx..] {
            run.range.start += inserted;
            run.range.end += inserted;
        }
        self.runs
            .insert(idx, AttributeRun::new(at..at + inserted, AttributeSet::new()));

        self.coalesce();
        self.bump_revision();
        at..at + inserted
    }

    /// Set one attribute over exactly `range`, leaving other keys and other
    /// ranges untouched. The range is clamped to the content.
    pub fn add_attribute(&mut self, range: Range<usize>, value: AttributeValue) {
        self.update_range(range, |attrs| {
            attrs.insert(value.clone());
        });
    }

    /// Remove one attribute key over exactly `range`.
    pub fn remove_attribute(&mut self, range: Range<usize>, key: AttributeKey) {
        self.update_range(range, |attrs| {
            attrs.remove(key);
        });
    }

    /// Append another attributed string, keeping its runs.
    pub fn append_attributed(&mut self, other: &Self) {
        if other.is_empty() {
            return;
        }
        let offset = self.len();
        for chunk in other.rope.chunks() {
            self.rope.append(chunk);
        }
        self.runs.extend(other.runs.iter().map(|run| {
            AttributeRun::new(
                run.range.start + offset..run.range.end + offset,
                run.attributes.clone(),
            )
        }));
        self.coalesce();
        self.bump_revision();
    }

    /// Remove all content and runs.
    pub fn clear(&mut self) {
        self.rope.clear();
        self.runs.clear();
        self.bump_revision();
    }

    fn update_range(&mut self, range: Range<usize>, mut apply: impl FnMut(&mut AttributeSet)) {
        let end = range.end.min(self.len());
        let start = range.start.min(end);
        if start == end {
            return;
        }

        self.split_at(start);
        self.split_at(end);
        for run in &mut self.runs {
            if run.range.start >= start && run.range.end <= end {
                apply(&mut run.attributes);
            }
        }

        self.coalesce();
        self.bump_revision();
    }

    fn run_index_at(&self, pos: usize) -> Option<usize> {
        let idx = self.runs.partition_point(|run| run.range.end <= pos);
        self.runs
            .get(idx)
            .filter(|run| run.contains(pos))
            .map(|_| idx)
    }

    /// Make `pos` a run boundary. No-op at 0, at the end, or on an existing
    /// boundary.
    fn split_at(&mut self, pos: usize) {
        let Some(idx) = self.run_index_at(pos) else {
            return;
        };
        let run = &mut self.runs[idx];
        if run.range.start == pos {
            return;
        }
        let tail = AttributeRun::new(pos..run.range.end, run.attributes.clone());
        run.range.end = pos;
        self.runs.insert(idx + 1, tail);
    }

    fn coalesce(&mut self) {
        let mut merged: Vec<AttributeRun> = Vec::with_capacity(self.runs.len());
        for run in self.runs.drain(..) {
            if run.is_empty() {
                continue;
            }
            match merged.last_mut() {
                Some(prev)
                    if prev.range.end == run.range.start
                        && prev.attributes.identical(&run.attributes) =>
                {
                    prev.range.end = run.range.end;
                }
                _ => merged.push(run),
            }
        }
        self.runs = merged;
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

impl TextAttributeStore for AttributedString {
    fn len(&self) -> usize {
        Self::len(self)
    }

    fn insert_plain(&mut self, at: usize, text: &str) -> Range<usize> {
        Self::insert_plain(self, at, text)
    }

    fn add_attribute(&mut self, range: Range<usize>, value: AttributeValue) {
        Self::add_attribute(self, range, value);
    }

    fn attributes_at(&self, index: usize) -> Option<&AttributeSet> {
        Self::attributes_at(self, index)
    }
}

impl From<&str> for AttributedString {
    fn from(text: &str) -> Self {
        let mut buffer = Self::new();
        buffer.append_plain(text);
        buffer
    }
}

impl fmt::Display for AttributedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for chunk in self.rope.chunks() {
            f.write_str(chunk)?;
        }
        Ok(())
    }
}

impl PartialEq for AttributedString {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self.runs == other.runs
            && self
                .rope
                .chunks()
                .flat_map(str::chars)
                .eq(other.rope.chunks().flat_map(str::chars))
    }
}
