//! Selection within a single-caret field.

use std::ops::Range;

/// A text selection with anchor (start point) and head (caret position),
/// as char offsets. The anchor stays fixed while the head moves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    /// Where the selection started (fixed point)
    pub anchor: usize,
    /// Where the caret is (moving point)
    pub head: usize,
}

impl Selection {
    pub fn new(anchor: usize, head: usize) -> Self {
        Self { anchor, head }
    }

    /// Create a collapsed selection (caret with no selection)
    pub fn collapsed(offset: usize) -> Self {
        Self {
            anchor: offset,
            head: offset,
        }
    }

    /// Check if selection is empty (anchor == head)
    pub fn is_empty(&self) -> bool {
        self.anchor == self.head
    }

    /// Minimum of anchor and head
    pub fn start(&self) -> usize {
        self.anchor.min(self.head)
    }

    /// Maximum of anchor and head
    pub fn end(&self) -> usize {
        self.anchor.max(self.head)
    }

    pub fn range(&self) -> Range<usize> {
        self.start()..self.end()
    }

    /// Check if selection is reversed (head before anchor)
    pub fn is_reversed(&self) -> bool {
        self.head < self.anchor
    }

    /// Select `range`, keeping the direction of this selection
    pub fn with_range(&self, range: Range<usize>) -> Self {
        if self.is_reversed() {
            Self::new(range.end, range.start)
        } else {
            Self::new(range.start, range.end)
        }
    }

    /// Clamp both ends to `len`
    pub fn clamped(&self, len: usize) -> Self {
        Self::new(self.anchor.min(len), self.head.min(len))
    }
}
