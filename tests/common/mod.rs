//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use incrementable::field::{RopeBuffer, Selection, StringBuffer, TextField};
use incrementable::{Incrementable, KeyOutcome, Keystroke, Modifiers, Options};

/// Input field with `text` and a collapsed caret at `caret`
pub fn test_widget(text: &str, caret: usize) -> Incrementable<StringBuffer> {
    test_widget_with(text, caret, Options::default())
}

pub fn test_widget_with(text: &str, caret: usize, options: Options) -> Incrementable<StringBuffer> {
    let mut field = TextField::input(text);
    field.set_caret(caret);
    Incrementable::new(field, options)
}

/// Input field with an anchor/head selection
pub fn test_widget_with_selection(text: &str, anchor: usize, head: usize) -> Incrementable<StringBuffer> {
    let mut field = TextField::input(text);
    field.set_selection(Selection::new(anchor, head));
    Incrementable::new(field, Options::default())
}

/// Multi-line content field with a collapsed caret
pub fn test_content_widget(text: &str, caret: usize) -> Incrementable<RopeBuffer> {
    let mut field = TextField::content(text);
    field.set_caret(caret);
    Incrementable::new(field, Options::default())
}

pub fn up() -> Keystroke {
    Keystroke::up(Modifiers::NONE)
}

pub fn down() -> Keystroke {
    Keystroke::down(Modifiers::NONE)
}

pub fn shift_up() -> Keystroke {
    Keystroke::up(Modifiers::SHIFT)
}

pub fn shift_down() -> Keystroke {
    Keystroke::down(Modifiers::SHIFT)
}

pub fn ctrl_up() -> Keystroke {
    Keystroke::up(Modifiers::CTRL)
}

/// Press `key` and return the field text afterwards
pub fn press(widget: &mut Incrementable<StringBuffer>, key: Keystroke) -> (KeyOutcome, String) {
    let outcome = widget.handle_key(key);
    (outcome, widget.field().text())
}
