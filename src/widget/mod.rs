//! The incrementable field: arrow keys step the number or color under the caret.
//!
//! ```text
//! Keystroke → multiplier policy → increment() → TextField::replace() → selection restore
//!                                                    ↓
//!                                              ChangeEvent queued
//! ```
//!
//! Each widget owns the field it is attached to. Step, multiplier policy, and
//! grammar are fixed at construction.

mod multiplier;

use serde::{Deserialize, Serialize};

use crate::config::{ConfigError, IncrementConfig};
use crate::field::{ChangeEvent, FieldBuffer, Selection, StringBuffer, TextField};
use crate::increment::{increment, Replacement, StepRequest, TokenGrammar};
use crate::keymap::Keystroke;

pub use multiplier::{MultiplierPolicy, MultiplierRule};

/// Field attributes consulted for the step, in order
pub const STEP_ATTRIBUTES: [&str; 2] = ["step", "data-step"];

/// Step used when neither options nor attributes provide one
pub const DEFAULT_STEP: f64 = 1.0;

/// Where the selection goes after a token is replaced
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    /// Keep a caret at the same place relative to the token end; a
    /// selection grows to cover the whole new token
    #[default]
    Anchor,
    /// Always select the whole new token
    Token,
}

/// Construction options
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Overrides the field's `step` / `data-step` attributes
    pub step: Option<f64>,
    pub multiplier: MultiplierPolicy,
    pub grammar: TokenGrammar,
    pub selection: SelectionMode,
}

/// Result of offering a key press to the widget
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The field was changed; the host must suppress the key's default action
    Handled(ChangeEvent),
    /// Not ours; let the key press through
    Ignored,
}

impl KeyOutcome {
    pub fn is_handled(&self) -> bool {
        matches!(self, KeyOutcome::Handled(_))
    }

    pub fn change(&self) -> Option<&ChangeEvent> {
        match self {
            KeyOutcome::Handled(change) => Some(change),
            KeyOutcome::Ignored => None,
        }
    }
}

/// A text field whose numbers and colors step with the arrow keys.
#[derive(Debug, Clone)]
pub struct Incrementable<B: FieldBuffer> {
    field: TextField<B>,
    step: f64,
    multiplier: MultiplierPolicy,
    grammar: TokenGrammar,
    selection: SelectionMode,
}

impl<B: FieldBuffer> Incrementable<B> {
    /// Attach to `field`. The step is resolved once, here.
    pub fn new(field: TextField<B>, options: Options) -> Self {
        let step = resolve_step(&field, options.step);
        tracing::debug!(step, units = ?options.grammar.units(), "incrementable attached");

        Self {
            field,
            step,
            multiplier: options.multiplier,
            grammar: options.grammar,
            selection: options.selection,
        }
    }

    /// Attach using options built from a loaded configuration
    pub fn with_config(field: TextField<B>, config: &IncrementConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(field, config.options()?))
    }

    pub fn field(&self) -> &TextField<B> {
        &self.field
    }

    /// Host access for typing, caret moves, and draining change events
    pub fn field_mut(&mut self) -> &mut TextField<B> {
        &mut self.field
    }

    pub fn into_field(self) -> TextField<B> {
        self.field
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn grammar(&self) -> &TokenGrammar {
        &self.grammar
    }

    /// Handle a key-down. Only arrow up/down with a non-zero multiplier qualify.
    pub fn handle_key(&mut self, keystroke: Keystroke) -> KeyOutcome {
        let Some(decrement) = keystroke.key.step_direction() else {
            return KeyOutcome::Ignored;
        };

        let multiplier = self.multiplier.factor(keystroke.mods);
        if multiplier == 0.0 {
            tracing::trace!(%keystroke, "multiplier is zero, key passes through");
            return KeyOutcome::Ignored;
        }

        let request = StepRequest {
            decrement,
            multiplier,
            step: self.step,
        };

        let text = self.field.text();
        let before = self.field.selection();
        let Some(replacement) = increment(&text, before.range(), &self.grammar, &request) else {
            tracing::trace!(%keystroke, caret = ?before.range(), "no token under caret");
            return KeyOutcome::Ignored;
        };

        let change = self.field.replace(replacement.range.clone(), &replacement.text);
        let after = restore_selection(before, &replacement, self.selection);
        self.field.set_selection(after);

        tracing::debug!(
            %keystroke,
            from = %replacement.original,
            to = %replacement.text,
            start = change.start,
            "stepped token"
        );

        KeyOutcome::Handled(change)
    }
}

impl Incrementable<StringBuffer> {
    /// Attach to an input-like field holding `text`, with default options
    pub fn input(text: &str) -> Self {
        Self::new(TextField::input(text), Options::default())
    }
}

/// Explicit option, then `step`, then `data-step`, then 1.
/// Values that are not finite, non-zero numbers are skipped.
fn resolve_step<B: FieldBuffer>(field: &TextField<B>, explicit: Option<f64>) -> f64 {
    explicit
        .filter(|step| valid_step(*step))
        .or_else(|| {
            STEP_ATTRIBUTES.iter().find_map(|name| {
                field
                    .attribute(name)
                    .and_then(|value| value.trim().parse::<f64>().ok())
                    .filter(|step| valid_step(*step))
            })
        })
        .unwrap_or(DEFAULT_STEP)
}

fn valid_step(step: f64) -> bool {
    step.is_finite() && step != 0.0
}

fn restore_selection(before: Selection, replacement: &Replacement, mode: SelectionMode) -> Selection {
    let (start, end) = (replacement.range.start, replacement.range.end);
    let new_end = start + replacement.len();

    match mode {
        SelectionMode::Token => before.with_range(start..new_end),
        SelectionMode::Anchor if !before.is_empty() => before.with_range(start..new_end),
        SelectionMode::Anchor => {
            let caret = before.head;
            // Text before the value keeps its length
            if caret <= replacement.value_start {
                return Selection::collapsed(caret.max(start));
            }
            let from_end = end.saturating_sub(caret);
            Selection::collapsed(new_end.saturating_sub(from_end).max(start))
        }
    }
}
