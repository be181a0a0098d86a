//! Numeric stepping with a precision guard.
//!
//! `0.1 + 0.2` is `0.30000000000000004` in binary floating point. Every sum is
//! rounded back to the number of significant digits the operands were written
//! with, so stepping `0.1` by `0.2` yields `0.3`.

use super::grammar::NUMBER;

/// Largest significant-digit count an f64 can honour
const MAX_SIGNIFICANT: usize = 17;

/// Largest decimal count kept on a computed offset
const MAX_OFFSET_DECIMALS: usize = 15;

/// A single increment/decrement request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepRequest {
    pub decrement: bool,
    /// Scale factor derived from modifier keys. Zero is treated as 1.
    pub multiplier: f64,
    /// Base step of the field
    pub step: f64,
}

impl Default for StepRequest {
    fn default() -> Self {
        Self {
            decrement: false,
            multiplier: 1.0,
            step: 1.0,
        }
    }
}

impl StepRequest {
    pub fn increment(step: f64) -> Self {
        Self {
            step,
            ..Self::default()
        }
    }

    pub fn decrement(step: f64) -> Self {
        Self {
            decrement: true,
            step,
            ..Self::default()
        }
    }

    pub fn with_multiplier(mut self, multiplier: f64) -> Self {
        self.multiplier = multiplier;
        self
    }

    /// The same request in the opposite direction
    pub fn reversed(mut self) -> Self {
        self.decrement = !self.decrement;
        self
    }

    /// Signed amount added to the value.
    ///
    /// Rounded to the decimals of `multiplier` plus the decimals of `step`,
    /// which is the exact decimal precision of their product.
    pub fn offset(&self) -> f64 {
        let multiplier = if self.multiplier == 0.0 {
            1.0
        } else {
            self.multiplier
        };
        let sign = if self.decrement { -1.0 } else { 1.0 };
        let raw = sign * multiplier * self.step;

        let decimals = Precision::of(multiplier).decimals + Precision::of(self.step).decimals;
        round_to_decimals(raw, decimals.min(MAX_OFFSET_DECIMALS))
    }
}

/// Digits a number is written with, leading zeros and sign excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Precision {
    pub integer: usize,
    pub decimals: usize,
}

impl Precision {
    pub fn of(value: f64) -> Self {
        let text = format_number(value.abs());
        let digits = text.trim_start_matches('0');

        match digits.find('.') {
            None => Self {
                integer: digits.len(),
                decimals: 0,
            },
            Some(dot) => Self {
                integer: dot,
                decimals: digits.len() - 1 - dot,
            },
        }
    }

    /// Significant digits needed to represent a sum of `a` and `b`
    pub fn combined(a: Precision, b: Precision) -> usize {
        a.integer.max(b.integer) + a.decimals.max(b.decimals)
    }
}

/// Add `offset` to `value` without floating-point drift.
pub fn add_with_precision(value: f64, offset: f64) -> f64 {
    let sum = value + offset;
    let (value, offset) = (Precision::of(value), Precision::of(offset));

    // A carry (9.95 + 0.1) adds an integer digit neither operand had
    let carried = Precision::of(sum).integer.saturating_sub(value.integer.max(offset.integer));
    round_to_significant(sum, Precision::combined(value, offset) + carried)
}

/// Step the first number inside `token`, keeping the text around it.
///
/// Returns `None` when the token holds no number.
///
/// ```
/// use incrementable::increment::{step_value, StepRequest};
///
/// assert_eq!(step_value("10px", &StepRequest::increment(1.0)).as_deref(), Some("11px"));
/// assert_eq!(step_value("0.1", &StepRequest::increment(0.1)).as_deref(), Some("0.2"));
/// ```
pub fn step_value(token: &str, request: &StepRequest) -> Option<String> {
    let number = NUMBER.find(token)?;
    let value: f64 = number.as_str().parse().ok()?;

    let before = &token[..number.start()];
    let after = &token[number.end()..];
    let stepped = add_with_precision(value, request.offset());

    Some(format!("{before}{}{after}", format_number(stepped)))
}

/// Shortest decimal rendering; integers print without a point, `-0` prints as `0`.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{value}")
}

fn round_to_significant(value: f64, digits: usize) -> f64 {
    if !value.is_finite() || value == 0.0 {
        return value;
    }
    let digits = digits.clamp(1, MAX_SIGNIFICANT);
    format!("{:.*e}", digits - 1, value)
        .parse()
        .unwrap_or(value)
}

fn round_to_decimals(value: f64, decimals: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{:.*}", decimals, value).parse().unwrap_or(value)
}
