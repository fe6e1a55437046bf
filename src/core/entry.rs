//! Entry text buffer.
//!
//! The entry is kept as text so that appending and backspacing edit exactly
//! what the user typed. It is parsed only when a value is needed.

use super::number::{format_number, parse_float};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default maximum length of a typed entry.
pub const DEFAULT_MAX_ENTRY_LEN: usize = 15;

crate::token_enum! {
    /// A key that edits the entry text.
    pub enum EntryToken {
        Zero => "0",
        One => "1",
        Two => "2",
        Three => "3",
        Four => "4",
        Five => "5",
        Six => "6",
        Seven => "7",
        Eight => "8",
        Nine => "9",
        Decimal => "decimal",
    }
}

impl EntryToken {
    /// The character this token writes into the entry.
    pub fn as_char(&self) -> char {
        match self {
            Self::Decimal => '.',
            digit => digit.token().chars().next().unwrap_or('0'),
        }
    }

    /// Token for a typed character, accepting `,` as a decimal separator.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '.' | ',' => Some(Self::Decimal),
            '0'..='9' => {
                let mut buf = [0u8; 4];
                Self::from_token(c.encode_utf8(&mut buf))
            }
            _ => None,
        }
    }
}

/// Text of the value being typed or last computed.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Entry(String);

impl Default for Entry {
    fn default() -> Self {
        Self::zero()
    }
}

impl Entry {
    /// The reset entry, `"0"`.
    pub fn zero() -> Self {
        Self("0".to_string())
    }

    /// Entry holding the display form of `value`.
    pub fn from_value(value: f64) -> Self {
        Self(format_number(value))
    }

    /// Entry starting with a single token.
    pub fn from_token(token: EntryToken) -> Self {
        Self(token.as_char().to_string())
    }

    /// Append a token unless the entry already holds `max_len` characters.
    ///
    /// Returns whether the token was appended.
    pub fn push(&mut self, token: EntryToken, max_len: usize) -> bool {
        if self.len() < max_len {
            self.0.push(token.as_char());
            true
        } else {
            false
        }
    }

    /// Drop the last character.
    ///
    /// Returns `false` and leaves the entry alone when at most one character
    /// remains; the caller decides how to reset.
    pub fn pop(&mut self) -> bool {
        if self.len() > 1 {
            self.0.pop();
            true
        } else {
            false
        }
    }

    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parsed value of the entry (see [`parse_float`]).
    pub fn value(&self) -> f64 {
        parse_float(&self.0)
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
