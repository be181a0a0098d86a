//! Host-independent core: find the token under the caret and step it.
//!
//! # Architecture
//!
//! ```text
//! (text, caret, grammar) → locate() → Located → step_value() / ColorToken::increment_at()
//!                                              → Replacement { range, original, text }
//! ```
//!
//! Nothing here touches a field. The [`crate::widget`] layer splices the
//! [`Replacement`] back and restores the selection.

mod color;
mod grammar;
mod locate;
mod value;

use std::ops::Range;

pub use color::ColorToken;
pub use grammar::{GrammarError, TokenGrammar, TokenMode, COLOR_PATTERN, NUMBER_PATTERN};
pub use locate::{locate, Located, Token};
pub use value::{add_with_precision, format_number, step_value, Precision, StepRequest};

/// Text to splice over `range` in place of `original`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    /// Char range of the token in the field content
    pub range: Range<usize>,
    /// Char offset where the stepped value starts (after any prefix or `#`)
    pub value_start: usize,
    pub original: String,
    pub text: String,
}

impl Replacement {
    /// Char length of the new text
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Locate the token under `caret` and compute its stepped replacement.
///
/// `None` means the key press is not ours: no token, or stepping would not
/// change the text.
///
/// ```
/// use incrementable::increment::{increment, StepRequest, TokenGrammar};
///
/// let grammar = TokenGrammar::scan();
/// let replacement = increment("width: 10px;", 8..8, &grammar, &StepRequest::increment(1.0)).unwrap();
/// assert_eq!(replacement.range, 7..11);
/// assert_eq!(replacement.text, "11px");
/// ```
pub fn increment(
    text: &str,
    caret: Range<usize>,
    grammar: &TokenGrammar,
    request: &StepRequest,
) -> Option<Replacement> {
    let located = locate(text, caret.start, caret.end, grammar)?;
    let range = located.range();

    let (original, stepped, value_start) = match located {
        Located::Number(token) => {
            if request.offset() == 0.0 {
                tracing::trace!(
                    step = request.step,
                    multiplier = request.multiplier,
                    "step rounds to zero"
                );
                return None;
            }
            let original = token.text();
            let stepped = step_value(&original, request)?;
            let value_start = token.start + token.prefix.chars().count();
            (original, stepped, value_start)
        }
        Located::Color(mut color) => {
            let original: String = text.chars().skip(range.start).take(range.len()).collect();
            color.increment_at(caret.start.min(caret.end), request.decrement);
            (original, color.render(), color.digits_start())
        }
    };

    if stepped == original {
        return None;
    }

    Some(Replacement {
        range,
        value_start,
        original,
        text: stepped,
    })
}
