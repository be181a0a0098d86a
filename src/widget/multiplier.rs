//! Modifier-key multiplier policy.
//!
//! Maps the modifiers held during a key press to a scale factor for the step.
//! A factor of 0 means the key press is not handled at all.

use std::fmt;
use std::sync::Arc;

use crate::keymap::Modifiers;

/// One `modifiers -> factor` rule. Matches when all of `mods` are held.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MultiplierRule {
    pub mods: Modifiers,
    pub factor: f64,
}

impl MultiplierRule {
    pub const fn new(mods: Modifiers, factor: f64) -> Self {
        Self { mods, factor }
    }
}

type MultiplierFn = dyn Fn(Modifiers) -> f64 + Send + Sync;

/// How modifier state scales the step.
#[derive(Clone)]
pub enum MultiplierPolicy {
    /// First matching rule wins, `fallback` otherwise
    Rules {
        rules: Vec<MultiplierRule>,
        fallback: f64,
    },
    /// Host-supplied function
    Custom(Arc<MultiplierFn>),
}

impl Default for MultiplierPolicy {
    /// Shift: x10, Ctrl: x0.1, otherwise x1
    fn default() -> Self {
        Self::Rules {
            rules: vec![
                MultiplierRule::new(Modifiers::SHIFT, 10.0),
                MultiplierRule::new(Modifiers::CTRL, 0.1),
            ],
            fallback: 1.0,
        }
    }
}

impl fmt::Debug for MultiplierPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rules { rules, fallback } => f
                .debug_struct("Rules")
                .field("rules", rules)
                .field("fallback", fallback)
                .finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl MultiplierPolicy {
    pub fn rules(rules: Vec<MultiplierRule>, fallback: f64) -> Self {
        Self::Rules { rules, fallback }
    }

    pub fn custom(f: impl Fn(Modifiers) -> f64 + Send + Sync + 'static) -> Self {
        Self::Custom(Arc::new(f))
    }

    /// Same factor whatever the modifiers; 0 disables stepping
    pub fn constant(factor: f64) -> Self {
        Self::rules(Vec::new(), factor)
    }

    /// Scale factor for the held modifiers. Non-finite factors count as 0.
    pub fn factor(&self, mods: Modifiers) -> f64 {
        let factor = match self {
            Self::Rules { rules, fallback } => rules
                .iter()
                .find(|rule| mods.contains(rule.mods))
                .map_or(*fallback, |rule| rule.factor),
            Self::Custom(f) => f(mods),
        };

        if factor.is_finite() {
            factor
        } else {
            0.0
        }
    }
}
