//! Host-independent text field model.
//!
//! Stands in for the element an [`Incrementable`](crate::widget::Incrementable)
//! is attached to: its text content, its selection, its attributes, and the
//! queue of change notifications listeners have not consumed yet.
//!
//! # Example
//!
//! ```
//! use incrementable::field::TextField;
//!
//! let mut field = TextField::input("width: 10px;");
//! field.set_caret(8);
//! field.set_attribute("step", "0.5");
//!
//! assert_eq!(field.attribute("step"), Some("0.5"));
//! assert_eq!(field.selection().head, 8);
//! ```

mod buffer;
mod change;
mod selection;

use std::collections::HashMap;
use std::ops::Range;

pub use buffer::{FieldBuffer, RopeBuffer, StringBuffer};
pub use change::ChangeEvent;
pub use selection::Selection;

/// A single-caret editable field.
#[derive(Debug, Clone, Default)]
pub struct TextField<B: FieldBuffer> {
    buffer: B,
    selection: Selection,
    attributes: HashMap<String, String>,
    changes: Vec<ChangeEvent>,
}

impl TextField<StringBuffer> {
    /// An input-like field backed by a `String`
    pub fn input(text: &str) -> Self {
        Self::new(StringBuffer::from_text(text))
    }
}

impl TextField<RopeBuffer> {
    /// A multi-line content field backed by a rope
    pub fn content(text: &str) -> Self {
        Self::new(RopeBuffer::from_text(text))
    }
}

impl<B: FieldBuffer> TextField<B> {
    pub fn new(buffer: B) -> Self {
        Self {
            buffer,
            selection: Selection::default(),
            attributes: HashMap::new(),
            changes: Vec::new(),
        }
    }

    pub fn buffer(&self) -> &B {
        &self.buffer
    }

    /// The field's current text
    pub fn text(&self) -> String {
        self.buffer.content()
    }

    pub fn len_chars(&self) -> usize {
        self.buffer.len_chars()
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn selected_text(&self) -> String {
        self.buffer.slice(self.selection.range())
    }

    /// Set the selection, clamped to the content
    pub fn set_selection(&mut self, selection: Selection) {
        self.selection = selection.clamped(self.len_chars());
    }

    /// Collapse the selection to a caret at `offset`
    pub fn set_caret(&mut self, offset: usize) {
        self.set_selection(Selection::collapsed(offset));
    }

    /// Select `range` (forward)
    pub fn select(&mut self, range: Range<usize>) {
        self.set_selection(Selection::new(range.start, range.end));
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
    }

    /// Replace `range` with `text` and queue the matching change notification.
    ///
    /// The selection is left for the caller to restore.
    pub fn replace(&mut self, range: Range<usize>, text: &str) -> ChangeEvent {
        let len = self.len_chars();
        let start = range.start.min(len);
        let end = range.end.clamp(start, len);

        let deleted = self.buffer.slice(start..end);
        self.buffer.replace(start..end, text);

        let event = ChangeEvent::new(start, deleted, text);
        self.changes.push(event.clone());
        event
    }

    /// Change notifications not yet consumed
    pub fn pending_changes(&self) -> &[ChangeEvent] {
        &self.changes
    }

    /// Take all pending change notifications
    pub fn drain_changes(&mut self) -> Vec<ChangeEvent> {
        std::mem::take(&mut self.changes)
    }
}
