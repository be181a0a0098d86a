//! Token grammar shared by the locator and the stepper.
//!
//! One value describes what counts as a steppable token:
//! - the prefix/suffix character class scanned around the caret
//! - the number pattern (`-?[0-9]*\.?[0-9]+`)
//! - an optional unit alternation (`px|em|%`) which switches the locator to
//!   unit-aware regex matching
//! - whether `#rgb` / `#rrggbb` colors are stepped at all

use std::sync::LazyLock;

use regex::Regex;

/// Number pattern. The first match inside a token is the stepped value.
pub const NUMBER_PATTERN: &str = r"-?[0-9]*\.?[0-9]+";

/// `#` followed by exactly 3 or 6 hex digits, not glued to more word characters
pub const COLOR_PATTERN: &str = r"#(?:[0-9a-fA-F]{6}|[0-9a-fA-F]{3})\b";

pub(crate) static NUMBER: LazyLock<Regex> = LazyLock::new(|| compile(NUMBER_PATTERN));
pub(crate) static COLOR: LazyLock<Regex> = LazyLock::new(|| compile(COLOR_PATTERN));

/// Errors raised while building a grammar from user input
#[derive(Debug, thiserror::Error)]
pub enum GrammarError {
    #[error("invalid unit grammar `{units}`: {source}")]
    InvalidUnits {
        units: String,
        #[source]
        source: regex::Error,
    },
}

/// How tokens are delimited around the caret
#[derive(Debug, Clone)]
pub enum TokenMode {
    /// Expand left/right over prefix/suffix characters
    Scan,
    /// Take the `number(unit)?` regex match touching the caret
    Units { source: String, pattern: Regex },
}

/// Unified grammar for locating and stepping tokens.
#[derive(Debug, Clone)]
pub struct TokenGrammar {
    mode: TokenMode,
    colors: bool,
}

impl Default for TokenGrammar {
    fn default() -> Self {
        Self::scan()
    }
}

impl TokenGrammar {
    /// Prefix/suffix scanning grammar with colors enabled
    pub fn scan() -> Self {
        Self {
            mode: TokenMode::Scan,
            colors: true,
        }
    }

    /// Unit-aware grammar. `units` is a regex alternation such as `px|em|%`.
    pub fn with_units(units: &str) -> Result<Self, GrammarError> {
        let source = format!(r"{NUMBER_PATTERN}(?:{units})?");
        let pattern = Regex::new(&source).map_err(|source| GrammarError::InvalidUnits {
            units: units.to_string(),
            source,
        })?;

        Ok(Self {
            mode: TokenMode::Units {
                source: units.to_string(),
                pattern,
            },
            colors: true,
        })
    }

    /// Build from optional config values
    pub fn from_parts(units: Option<&str>, colors: bool) -> Result<Self, GrammarError> {
        let grammar = match units.map(str::trim).filter(|u| !u.is_empty()) {
            Some(units) => Self::with_units(units)?,
            None => Self::scan(),
        };
        Ok(grammar.colors(colors))
    }

    /// Enable or disable hex color stepping
    pub fn colors(mut self, enabled: bool) -> Self {
        self.colors = enabled;
        self
    }

    pub fn colors_enabled(&self) -> bool {
        self.colors
    }

    pub fn mode(&self) -> &TokenMode {
        &self.mode
    }

    /// The configured unit alternation, if any
    pub fn units(&self) -> Option<&str> {
        match &self.mode {
            TokenMode::Scan => None,
            TokenMode::Units { source, .. } => Some(source),
        }
    }

    /// Characters that may surround a number inside one token (`[%\w.-]`)
    #[inline]
    pub fn is_token_char(ch: char) -> bool {
        ch.is_ascii_alphanumeric() || matches!(ch, '_' | '.' | '-' | '%')
    }

    /// A selection may only be stepped if it could be part of a single token.
    pub fn is_partial_token(selection: &str) -> bool {
        selection.chars().all(Self::is_token_char)
    }
}

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("built-in token pattern is valid")
}
