//! Keystroke, Modifiers and the keys a field host forwards

use std::fmt;

/// Modifier keys held during a key press
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Modifiers {
    ctrl: bool,
    shift: bool,
    alt: bool,
    meta: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers::held(false, false, false, false);
    pub const CTRL: Modifiers = Modifiers::held(true, false, false, false);
    pub const SHIFT: Modifiers = Modifiers::held(false, true, false, false);
    pub const ALT: Modifiers = Modifiers::held(false, false, true, false);
    /// Cmd on macOS, Win on Windows
    pub const META: Modifiers = Modifiers::held(false, false, false, true);

    const fn held(ctrl: bool, shift: bool, alt: bool, meta: bool) -> Self {
        Self {
            ctrl,
            shift,
            alt,
            meta,
        }
    }

    pub const fn ctrl(self) -> bool {
        self.ctrl
    }

    pub const fn shift(self) -> bool {
        self.shift
    }

    pub const fn alt(self) -> bool {
        self.alt
    }

    pub const fn meta(self) -> bool {
        self.meta
    }

    pub const fn is_empty(self) -> bool {
        !(self.ctrl || self.shift || self.alt || self.meta)
    }

    /// Every modifier held in either set
    pub const fn union(self, other: Modifiers) -> Modifiers {
        Self::held(
            self.ctrl || other.ctrl,
            self.shift || other.shift,
            self.alt || other.alt,
            self.meta || other.meta,
        )
    }

    /// Whether every modifier of `other` is held here as well
    pub const fn contains(self, other: Modifiers) -> bool {
        (self.ctrl || !other.ctrl)
            && (self.shift || !other.shift)
            && (self.alt || !other.alt)
            && (self.meta || !other.meta)
    }
}

impl std::ops::BitOr for Modifiers {
    type Output = Modifiers;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = [
            (self.ctrl, "ctrl"),
            (self.shift, "shift"),
            (self.alt, "alt"),
            (self.meta, "meta"),
        ];
        let held: Vec<&str> = names
            .iter()
            .filter(|(on, _)| *on)
            .map(|(_, name)| *name)
            .collect();
        write!(f, "{}", held.join("+"))
    }
}

/// Arrow keys. Up and Down step values; Left and Right always pass through.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Up,
    Down,
    Left,
    Right,
}

impl KeyCode {
    /// Direction of a stepping key: `Some(true)` decrements
    pub const fn step_direction(self) -> Option<bool> {
        match self {
            KeyCode::Up => Some(false),
            KeyCode::Down => Some(true),
            KeyCode::Left | KeyCode::Right => None,
        }
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            KeyCode::Up => "up",
            KeyCode::Down => "down",
            KeyCode::Left => "left",
            KeyCode::Right => "right",
        };
        f.write_str(name)
    }
}

/// A single key-down: a key with modifiers
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Keystroke {
    pub key: KeyCode,
    pub mods: Modifiers,
}

impl Keystroke {
    pub const fn new(key: KeyCode, mods: Modifiers) -> Self {
        Self { key, mods }
    }

    /// Create a keystroke with no modifiers
    pub const fn key(key: KeyCode) -> Self {
        Self::new(key, Modifiers::NONE)
    }

    pub const fn up(mods: Modifiers) -> Self {
        Self::new(KeyCode::Up, mods)
    }

    pub const fn down(mods: Modifiers) -> Self {
        Self::new(KeyCode::Down, mods)
    }
}

impl fmt::Display for Keystroke {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.mods.is_empty() {
            write!(f, "{}", self.key)
        } else {
            write!(f, "{}+{}", self.mods, self.key)
        }
    }
}
