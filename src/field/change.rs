//! Content-changed notifications emitted when a field is spliced.

use serde::Serialize;

/// A splice applied to a field, described the way an input event would be:
/// `deleted` was removed at `start` and `inserted` put in its place.
///
/// Listeners can treat it like a user edit (e.g. push it onto an undo stack).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangeEvent {
    /// Char offset where the splice starts
    pub start: usize,
    pub deleted: String,
    pub inserted: String,
}

impl ChangeEvent {
    pub fn new(start: usize, deleted: impl Into<String>, inserted: impl Into<String>) -> Self {
        Self {
            start,
            deleted: deleted.into(),
            inserted: inserted.into(),
        }
    }
}
