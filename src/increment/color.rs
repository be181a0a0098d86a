//! Hex color tokens (`#rgb`, `#rrggbb`) stepped one channel at a time.

/// Channel under each caret position inside a 6-digit color (0..=6)
const LONG_CHANNELS: [usize; 7] = [0, 0, 0, 1, 1, 2, 2];

/// Channel under each caret position inside a 3-digit color (0..=3)
const SHORT_CHANNELS: [usize; 4] = [0, 0, 1, 2];

/// A `#rgb` or `#rrggbb` color found in the field content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorToken {
    /// Char offset of the `#`
    pub start: usize,
    /// Char offset one past the last hex digit
    pub end: usize,
    /// Channels in 8-bit space. Short colors hold nibble * 17.
    pub channels: [u8; 3],
    /// Written as `#rgb`
    pub short: bool,
    /// All hex letters were uppercase
    pub uppercase: bool,
}

impl ColorToken {
    /// Parse `#rgb` / `#rrggbb` located at `start`. Returns `None` for anything else.
    pub fn parse(text: &str, start: usize) -> Option<Self> {
        let hex = text.strip_prefix('#')?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }

        let (channels, short) = match hex.len() {
            3 => {
                let mut channels = [0u8; 3];
                for (channel, digit) in channels.iter_mut().zip(hex.chars()) {
                    *channel = digit.to_digit(16)? as u8 * 17;
                }
                (channels, true)
            }
            6 => (
                [
                    u8::from_str_radix(&hex[0..2], 16).ok()?,
                    u8::from_str_radix(&hex[2..4], 16).ok()?,
                    u8::from_str_radix(&hex[4..6], 16).ok()?,
                ],
                false,
            ),
            _ => return None,
        };

        let uppercase = hex.chars().any(|c| c.is_ascii_uppercase())
            && !hex.chars().any(|c| c.is_ascii_lowercase());

        Some(Self {
            start,
            end: start + 1 + hex.len(),
            channels,
            short,
            uppercase,
        })
    }

    /// Number of hex digits (3 or 6)
    pub fn digits(&self) -> usize {
        if self.short {
            3
        } else {
            6
        }
    }

    /// Char offset of the first hex digit
    pub fn digits_start(&self) -> usize {
        self.start + 1
    }

    /// Whether a caret offset sits on the hex digits (`#|fff|`)
    pub fn contains_caret(&self, caret: usize) -> bool {
        caret >= self.digits_start() && caret <= self.end
    }

    /// Channel the caret at absolute offset `caret` points at
    pub fn channel_at(&self, caret: usize) -> usize {
        let position = caret.saturating_sub(self.digits_start()).min(self.digits());
        if self.short {
            SHORT_CHANNELS[position]
        } else {
            LONG_CHANNELS[position]
        }
    }

    /// Step the channel under the caret by one digit, wrapping around.
    ///
    /// One step is 1 in 8-bit space, or 17 (one nibble) for short colors.
    pub fn increment_at(&mut self, caret: usize, decrement: bool) {
        let channel = self.channel_at(caret);
        let amount: i32 = if self.short { 17 } else { 1 };
        let delta = if decrement { -amount } else { amount };

        let stepped = (i32::from(self.channels[channel]) + delta).rem_euclid(256);
        self.channels[channel] = stepped as u8;
    }

    /// Render back in the original form and case
    pub fn render(&self) -> String {
        let body = if self.short {
            self.channels
                .iter()
                .map(|c| format!("{:x}", c % 16))
                .collect::<String>()
        } else {
            self.channels
                .iter()
                .map(|c| format!("{:02x}", c))
                .collect::<String>()
        };

        if self.uppercase {
            format!("#{}", body.to_ascii_uppercase())
        } else {
            format!("#{body}")
        }
    }
}
