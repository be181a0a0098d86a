//! Finding the token under the caret.
//!
//! All offsets are char offsets into the field content.

use std::ops::Range;

use super::color::ColorToken;
use super::grammar::{TokenGrammar, TokenMode, COLOR, NUMBER};

/// A numeric token: `prefix` + `number` + `suffix`, spanning `start..end`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub start: usize,
    pub end: usize,
    pub prefix: String,
    pub number: String,
    pub suffix: String,
}

impl Token {
    /// Split `text` found at `start` around its first number
    pub fn split(text: &str, start: usize) -> Option<Self> {
        let number = NUMBER.find(text)?;
        Some(Self {
            start,
            end: start + text.chars().count(),
            prefix: text[..number.start()].to_string(),
            number: number.as_str().to_string(),
            suffix: text[number.end()..].to_string(),
        })
    }

    /// The full token text
    pub fn text(&self) -> String {
        format!("{}{}{}", self.prefix, self.number, self.suffix)
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// What the caret is on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Located {
    Number(Token),
    Color(ColorToken),
}

impl Located {
    pub fn range(&self) -> Range<usize> {
        match self {
            Located::Number(token) => token.range(),
            Located::Color(color) => color.start..color.end,
        }
    }
}

/// Find the token touched by the caret (or selection) `caret_start..caret_end`.
///
/// Returns `None` when the key press should pass through: no number or color
/// near the caret, or a selection that cannot be part of a single token.
pub fn locate(
    text: &str,
    caret_start: usize,
    caret_end: usize,
    grammar: &TokenGrammar,
) -> Option<Located> {
    let chars: Vec<char> = text.chars().collect();
    let (start, end) = normalize_selection(&chars, caret_start, caret_end)?;

    if grammar.colors_enabled() {
        if let Some(color) = locate_color(text, start, end) {
            return Some(Located::Color(color));
        }
    }

    let selection: String = chars[start..end].iter().collect();
    if !TokenGrammar::is_partial_token(&selection) {
        tracing::trace!(selection = %selection, "selection is not part of a token");
        return None;
    }

    let token = match grammar.mode() {
        TokenMode::Scan => scan_token(&chars, start, end),
        TokenMode::Units { pattern, .. } => pattern
            .find_iter(text)
            .map(|m| (char_offset(text, m.start()), m.as_str()))
            .find(|(match_start, matched)| {
                let match_end = match_start + matched.chars().count();
                *match_start <= end && start <= match_end
            })
            .and_then(|(match_start, matched)| Token::split(matched, match_start)),
    }?;

    Some(Located::Number(token))
}

/// Order, clamp, and trim surrounding whitespace off a selection.
///
/// A selection of nothing but whitespace is not part of any token.
fn normalize_selection(
    chars: &[char],
    caret_start: usize,
    caret_end: usize,
) -> Option<(usize, usize)> {
    let len = chars.len();
    let mut start = caret_start.min(caret_end).min(len);
    let mut end = caret_start.max(caret_end).min(len);
    let selected = start < end;

    while start < end && chars[start].is_whitespace() {
        start += 1;
    }
    while end > start && chars[end - 1].is_whitespace() {
        end -= 1;
    }

    if selected && start == end {
        tracing::trace!("selection is only whitespace");
        return None;
    }
    Some((start, end))
}

/// Expand over token characters on both sides of the selection
fn scan_token(chars: &[char], start: usize, end: usize) -> Option<Token> {
    let mut left = start;
    while left > 0 && TokenGrammar::is_token_char(chars[left - 1]) {
        left -= 1;
    }

    let mut right = end;
    while right < chars.len() && TokenGrammar::is_token_char(chars[right]) {
        right += 1;
    }

    let candidate: String = chars[left..right].iter().collect();
    Token::split(&candidate, left)
}

/// A caret must sit on the hex digits; a selection may also cover the `#`
fn locate_color(text: &str, start: usize, end: usize) -> Option<ColorToken> {
    COLOR
        .find_iter(text)
        .filter_map(|m| ColorToken::parse(m.as_str(), char_offset(text, m.start())))
        .find(|color| {
            if start == end {
                color.contains_caret(start)
            } else {
                color.start <= start && end <= color.end
            }
        })
}

fn char_offset(text: &str, byte_offset: usize) -> usize {
    text[..byte_offset].chars().count()
}
