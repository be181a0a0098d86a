//! Parsing `"shift+up"` style key strings.

use super::types::{KeyCode, Keystroke, Modifiers};

/// Errors that can occur when parsing key strings
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeyParseError {
    #[error("empty key string")]
    Empty,
    #[error("unknown key `{0}`")]
    UnknownKey(String),
    #[error("multiple keys in `{0}`")]
    MultipleKeys(String),
    #[error("no key in `{0}`")]
    MissingKey(String),
}

/// Parse a modifier list like `"ctrl+shift"` (no key allowed)
pub fn parse_modifiers(mods_str: &str) -> Result<Modifiers, KeyParseError> {
    let mut mods = Modifiers::NONE;
    for part in mods_str.split('+').map(str::trim).filter(|p| !p.is_empty()) {
        mods = mods
            | parse_modifier(&part.to_lowercase())
                .ok_or_else(|| KeyParseError::UnknownKey(part.to_string()))?;
    }
    Ok(mods)
}

/// Parse a key string like `"shift+up"` into a Keystroke
pub fn parse_key_string(key_str: &str) -> Result<Keystroke, KeyParseError> {
    if key_str.trim().is_empty() {
        return Err(KeyParseError::Empty);
    }

    let mut mods = Modifiers::NONE;
    let mut key_part = None;

    for part in key_str.split('+').map(str::trim) {
        let part_lower = part.to_lowercase();
        if let Some(modifier) = parse_modifier(&part_lower) {
            mods = mods | modifier;
            continue;
        }
        if key_part.is_some() {
            return Err(KeyParseError::MultipleKeys(key_str.to_string()));
        }
        key_part = Some(parse_key_code(&part_lower)?);
    }

    let key = key_part.ok_or_else(|| KeyParseError::MissingKey(key_str.to_string()))?;
    Ok(Keystroke::new(key, mods))
}

fn parse_modifier(part: &str) -> Option<Modifiers> {
    match part {
        "ctrl" | "control" => Some(Modifiers::CTRL),
        "shift" => Some(Modifiers::SHIFT),
        "alt" | "option" | "opt" => Some(Modifiers::ALT),
        "meta" | "super" | "win" | "cmd" => Some(Modifiers::META),
        _ => None,
    }
}

fn parse_key_code(key: &str) -> Result<KeyCode, KeyParseError> {
    match key {
        "up" | "arrowup" => Ok(KeyCode::Up),
        "down" | "arrowdown" => Ok(KeyCode::Down),
        "left" | "arrowleft" => Ok(KeyCode::Left),
        "right" | "arrowright" => Ok(KeyCode::Right),
        _ => Err(KeyParseError::UnknownKey(key.to_string())),
    }
}
