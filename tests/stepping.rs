//! Arrow-key stepping through the widget: numbers, units, colors, pass-through

mod common;

use common::*;
use incrementable::field::Selection;
use incrementable::increment::TokenGrammar;
use incrementable::widget::{MultiplierPolicy, SelectionMode};
use incrementable::{ChangeEvent, KeyOutcome, Options};

// ========================================================================
// Numbers
// ========================================================================

#[test]
fn test_arrow_up_inside_px_value() {
    let mut widget = test_widget("width: 10px;", 8);
    let (outcome, text) = press(&mut widget, up());

    assert_eq!(text, "width: 11px;");
    assert_eq!(
        outcome,
        KeyOutcome::Handled(ChangeEvent::new(7, "10px", "11px"))
    );
    assert_eq!(widget.field().selection(), Selection::collapsed(8));
}

#[test]
fn test_shift_down_multiplies_by_ten() {
    let mut widget = test_widget("opacity: 0.5", 10);
    let (outcome, text) = press(&mut widget, shift_down());

    assert!(outcome.is_handled());
    assert_eq!(text, "opacity: -9.5");
}

#[test]
fn test_ctrl_up_steps_a_tenth() {
    let mut widget = test_widget("line-height: 1.2", 14);
    let (_, text) = press(&mut widget, ctrl_up());
    assert_eq!(text, "line-height: 1.3");
}

#[test]
fn test_repeated_tenths_do_not_drift() {
    let mut widget = test_widget("0", 0);
    for _ in 0..10 {
        widget.handle_key(ctrl_up());
    }
    assert_eq!(widget.field().text(), "1");

    for _ in 0..3 {
        widget.handle_key(ctrl_up());
    }
    assert_eq!(widget.field().text(), "1.3");
}

#[test]
fn test_step_attribute() {
    let mut field = incrementable::TextField::input("0.1");
    field.set_attribute("step", "0.1");
    field.set_caret(1);
    let mut widget = incrementable::Incrementable::new(field, Options::default());

    assert_eq!(widget.step(), 0.1);
    widget.handle_key(up());
    assert_eq!(widget.field().text(), "0.2");
    widget.handle_key(up());
    assert_eq!(widget.field().text(), "0.3");
}

#[test]
fn test_up_then_down_round_trips() {
    for (text, caret) in [("margin: -3.25em", 10), ("50%", 1), ("rotate(45deg)", 8)] {
        let mut widget = test_widget(text, caret);
        widget.handle_key(shift_up());
        widget.handle_key(shift_down());
        assert_eq!(widget.field().text(), text);
    }
}

#[test]
fn test_number_with_prefix() {
    let mut widget = test_widget("grid-area: r2c3", 13);
    let (_, text) = press(&mut widget, up());
    assert_eq!(text, "grid-area: r3c3");
}

// ========================================================================
// Pass-through
// ========================================================================

#[test]
fn test_caret_in_whitespace_passes_through() {
    let mut widget = test_widget("a   10", 2);
    let (outcome, text) = press(&mut widget, up());

    assert_eq!(outcome, KeyOutcome::Ignored);
    assert_eq!(text, "a   10");
    assert_eq!(widget.field().selection(), Selection::collapsed(2));
    assert!(widget.field().pending_changes().is_empty());
}

#[test]
fn test_word_without_number_passes_through() {
    let mut widget = test_widget("display: block", 11);
    assert_eq!(widget.handle_key(down()), KeyOutcome::Ignored);
}

#[test]
fn test_selection_over_two_tokens_passes_through() {
    let mut widget = test_widget_with_selection("10px 20px", 0, 9);
    assert_eq!(widget.handle_key(up()), KeyOutcome::Ignored);
    assert_eq!(widget.field().text(), "10px 20px");
}

#[test]
fn test_selection_with_trailing_space_still_steps() {
    let mut widget = test_widget_with_selection("10px 20px", 0, 5);
    let (_, text) = press(&mut widget, up());
    assert_eq!(text, "11px 20px");
    assert_eq!(widget.field().selection(), Selection::new(0, 4));
}

#[test]
fn test_suppressed_multiplier_passes_through() {
    let options = Options {
        multiplier: MultiplierPolicy::constant(0.0),
        ..Options::default()
    };
    let mut widget = test_widget_with("10", 1, options);
    assert_eq!(widget.handle_key(up()), KeyOutcome::Ignored);
}

// ========================================================================
// Units grammar
// ========================================================================

#[test]
fn test_units_grammar_steps_only_the_touched_value() {
    let options = Options {
        grammar: TokenGrammar::with_units("px|em|%").unwrap(),
        ..Options::default()
    };
    let mut widget = test_widget_with("margin: 10px 2em", 14, options);
    let (_, text) = press(&mut widget, up());
    assert_eq!(text, "margin: 10px 3em");
}

// ========================================================================
// Colors
// ========================================================================

#[test]
fn test_short_color_green_channel_wraps() {
    let mut widget = test_widget("#fff", 3);
    let (outcome, text) = press(&mut widget, up());

    assert_eq!(text, "#f0f");
    assert_eq!(
        outcome,
        KeyOutcome::Handled(ChangeEvent::new(0, "#fff", "#f0f"))
    );
    assert_eq!(widget.field().selection(), Selection::collapsed(3));
}

#[test]
fn test_long_color_round_trip_at_every_caret() {
    let text = "color: #1e90ff;";
    for caret in 8..=14 {
        let mut widget = test_widget(text, caret);
        widget.handle_key(up());
        assert_ne!(widget.field().text(), text);
        widget.handle_key(down());
        assert_eq!(widget.field().text(), text, "caret {caret}");
    }
}

#[test]
fn test_color_ignores_multiplier_magnitude() {
    let mut widget = test_widget("#000000", 1);
    let (_, text) = press(&mut widget, shift_up());
    assert_eq!(text, "#010000");
}

#[test]
fn test_colors_disabled_steps_digits() {
    let options = Options {
        grammar: TokenGrammar::scan().colors(false),
        ..Options::default()
    };
    let mut widget = test_widget_with("#123456", 3, options);
    let (_, text) = press(&mut widget, up());
    assert_eq!(text, "#123457");
}

// ========================================================================
// Selection restore
// ========================================================================

#[test]
fn test_token_selection_mode_selects_new_token() {
    let options = Options {
        selection: SelectionMode::Token,
        ..Options::default()
    };
    let mut widget = test_widget_with("top: 99px", 6, options);
    widget.handle_key(up());

    assert_eq!(widget.field().text(), "top: 100px");
    assert_eq!(widget.field().selection(), Selection::new(5, 10));
}

#[test]
fn test_caret_follows_growing_number() {
    let mut widget = test_widget("99px", 2);
    widget.handle_key(up());
    assert_eq!(widget.field().text(), "100px");
    assert_eq!(widget.field().selection(), Selection::collapsed(3));
}

#[test]
fn test_caret_in_prefix_stays_put() {
    let mut widget = test_widget("grid-area: r9c3", 12);
    widget.handle_key(up());
    assert_eq!(widget.field().text(), "grid-area: r10c3");
    assert_eq!(widget.field().selection(), Selection::collapsed(12));
}

#[test]
fn test_selected_color_keeps_stepping() {
    let mut widget = test_widget_with_selection("border: 1px solid #abc", 19, 21);
    for expected in ["#bbc", "#cbc", "#dbc"] {
        let (outcome, text) = press(&mut widget, up());
        assert!(outcome.is_handled());
        assert!(text.ends_with(expected), "{text} should end with {expected}");
    }
    assert_eq!(widget.field().selection(), Selection::new(18, 22));
}

#[test]
fn test_whitespace_selection_is_ignored() {
    let mut widget = test_widget_with_selection("margin: 4px   8px", 11, 14);
    let (outcome, text) = press(&mut widget, up());
    assert_eq!(outcome, KeyOutcome::Ignored);
    assert_eq!(text, "margin: 4px   8px");
}

// ========================================================================
// Multi-line content fields
// ========================================================================

#[test]
fn test_content_field_second_line() {
    let text = "a {\n  width: 9px;\n}";
    let mut widget = test_content_widget(text, 14);
    assert!(widget.handle_key(up()).is_handled());
    assert_eq!(widget.field().text(), "a {\n  width: 10px;\n}");
}
