//! Incrementable text fields
//!
//! Arrow keys step the number (or hex color) under the caret of a text field,
//! the way browser dev tools do: `width: 10px` becomes `width: 11px` on Up,
//! Shift scales the step by 10 and Ctrl by 0.1.
//!
//! - [`increment`]: host-independent core (token locator + value stepper)
//! - [`field`]: text field model the widget edits
//! - [`widget`]: key handling, multiplier policy, splice and caret restore

pub mod cli;
pub mod config;
pub mod config_paths;
pub mod field;
pub mod host;
pub mod increment;
pub mod keymap;
pub mod tracing;
pub mod widget;

// Re-export commonly used types
pub use config::IncrementConfig;
pub use field::{ChangeEvent, TextField};
pub use increment::{increment, locate, step_value, StepRequest, TokenGrammar};
pub use keymap::{KeyCode, Keystroke, Modifiers};
pub use widget::{Incrementable, KeyOutcome, Options};
