//! Headless host: replays key presses against a widget and reports the result.

use serde::Serialize;

use crate::field::{ChangeEvent, FieldBuffer};
use crate::keymap::Keystroke;
use crate::widget::Incrementable;

/// What happened to one key press
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyReport {
    pub key: String,
    pub handled: bool,
}

/// Final field state after a replay
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub text: String,
    pub anchor: usize,
    pub head: usize,
    pub keys: Vec<KeyReport>,
    /// Change notifications emitted by the field, in order
    pub changes: Vec<ChangeEvent>,
}

/// Offer each key press to the widget, the way a host event loop would.
pub fn replay<B: FieldBuffer>(widget: &mut Incrementable<B>, keys: &[Keystroke]) -> Report {
    let keys = keys
        .iter()
        .map(|&keystroke| KeyReport {
            key: keystroke.to_string(),
            handled: widget.handle_key(keystroke).is_handled(),
        })
        .collect();

    let field = widget.field_mut();
    let selection = field.selection();
    Report {
        text: field.text(),
        anchor: selection.anchor,
        head: selection.head,
        keys,
        changes: field.drain_changes(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::Modifiers;

    #[test]
    fn test_replay_sequence() {
        let mut widget = Incrementable::input("width: 10px;");
        widget.field_mut().set_caret(8);

        let report = replay(
            &mut widget,
            &[
                Keystroke::up(Modifiers::NONE),
                Keystroke::up(Modifiers::SHIFT),
                Keystroke::down(Modifiers::CTRL),
            ],
        );

        assert_eq!(report.text, "width: 20.9px;");
        assert!(report.keys.iter().all(|k| k.handled));
        assert_eq!(report.changes.len(), 3);
        assert_eq!(report.changes[0], ChangeEvent::new(7, "10px", "11px"));
        assert_eq!(report.changes[2], ChangeEvent::new(7, "21px", "20.9px"));
        assert!(widget.field().pending_changes().is_empty());
    }

    #[test]
    fn test_replay_ignored_key() {
        let mut widget = Incrementable::input("auto");
        let report = replay(&mut widget, &[Keystroke::up(Modifiers::NONE)]);
        assert_eq!(report.text, "auto");
        assert_eq!(report.keys, vec![KeyReport { key: "up".to_string(), handled: false }]);
        assert!(report.changes.is_empty());
    }
}
