//! Mask compilation and matching.
//!
//! This module contains the core engine: the template tokenizer, the
//! backtracking applier, the alternative selector and the numeric
//! formatter, together with the fixed placeholder alphabet they share.

pub mod applier;
pub mod numeric;
pub mod selector;
pub mod tokenizer;

pub use applier::apply_tokens;
pub use numeric::{format_numeric, NumericConfig};
pub use selector::select_template;
pub use tokenizer::{tokenize, GroupItem, Token, TokenSequence};

use once_cell::sync::Lazy;
use regex::Regex;

/// Character class a placeholder accepts.
///
/// The alphabet is fixed:
/// - `9` - an ASCII digit
/// - `A` - an ASCII letter
/// - `*` - an ASCII letter or digit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Digit,
    Letter,
    Alphanumeric,
}

impl CharClass {
    /// Maps a template character to its placeholder class.
    pub fn from_placeholder(c: char) -> Option<Self> {
        match c {
            '9' => Some(Self::Digit),
            'A' => Some(Self::Letter),
            '*' => Some(Self::Alphanumeric),
            _ => None,
        }
    }

    /// Returns true if `c` belongs to this class.
    pub fn accepts(self, c: char) -> bool {
        match self {
            Self::Digit => c.is_ascii_digit(),
            Self::Letter => c.is_ascii_alphabetic(),
            Self::Alphanumeric => c.is_ascii_alphanumeric(),
        }
    }
}

/// Strips everything but ASCII letters and digits from a raw value.
pub fn clean_input(value: &str) -> String {
    value.chars().filter(char::is_ascii_alphanumeric).collect()
}

/// Shared patterns used by the engine.
pub struct MaskPatterns;

impl MaskPatterns {
    /// Serialized regex literal of the form `/pattern/flags`.
    pub fn regex_literal() -> &'static Regex {
        static PATTERN: Lazy<Regex> =
            Lazy::new(|| Regex::new(r"^/(.*)/([gimsuy]*)$").expect("Valid regex pattern"));
        &PATTERN
    }

    /// Canonical numeric value: digits, optionally a dot and more digits.
    pub fn canonical_number() -> &'static Regex {
        static PATTERN: Lazy<Regex> =
            Lazy::new(|| Regex::new(r"^\d+(\.\d+)?$").expect("Valid regex pattern"));
        &PATTERN
    }
}
