//! Keystrokes as the field host reports them.
//!
//! Hosts translate their native key events into a [`Keystroke`]; config files
//! and the command line spell them as `"shift+up"`.

mod parse;
mod types;

pub use parse::{parse_key_string, parse_modifiers, KeyParseError};
pub use types::{KeyCode, Keystroke, Modifiers};
