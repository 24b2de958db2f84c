//! Template compilation.
//!
//! A template such as `(99) [9 ]9999-9999` is compiled into a flat
//! sequence of [`Token`]s plus the length bounds used for alternative
//! selection and truncation.
//!
//! # Grammar
//! - `9`, `A`, `*` - mandatory placeholders (see [`CharClass`])
//! - `\x` - the literal `x`; a trailing `\` is dropped
//! - `[...]` - an optional group; every character inside is a
//!   placeholder or literal item, and the group is emitted all or nothing
//! - anything else - a literal emitted verbatim

use super::CharClass;

/// One item inside an optional group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupItem {
    Literal(char),
    Placeholder(CharClass),
}

impl GroupItem {
    fn from_template_char(c: char) -> Self {
        CharClass::from_placeholder(c).map_or(Self::Literal(c), Self::Placeholder)
    }
}

/// One unit of a compiled template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Fixed character emitted verbatim
    Literal(char),

    /// Mandatory placeholder consuming one matching raw character
    Placeholder(CharClass),

    /// Optional block, matched atomically
    Group(Vec<GroupItem>),
}

/// Compiled template with its length bounds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenSequence {
    tokens: Vec<Token>,
    min_length: usize,
    max_length: usize,
}

impl TokenSequence {
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Number of mandatory placeholders.
    pub fn min_length(&self) -> usize {
        self.min_length
    }

    /// Mandatory placeholders plus every group item.
    ///
    /// Sizing heuristic only: group literals count even though they
    /// never consume input.
    pub fn max_length(&self) -> usize {
        self.max_length
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// For each token index, the number of mandatory placeholders that
    /// come strictly after it.
    pub fn mandatory_after(&self) -> Vec<usize> {
        let mut counts = vec![0; self.tokens.len()];
        let mut seen = 0;
        for (idx, token) in self.tokens.iter().enumerate().rev() {
            counts[idx] = seen;
            if matches!(token, Token::Placeholder(_)) {
                seen += 1;
            }
        }
        counts
    }
}

/// Compiles a template string. Never fails: unclosed groups compile
/// to an empty group and a trailing escape is dropped.
pub fn tokenize(template: &str) -> TokenSequence {
    let chars: Vec<char> = template.chars().collect();
    let mut seq = TokenSequence::default();
    let mut idx = 0;

    while idx < chars.len() {
        let c = chars[idx];

        if c == '\\' {
            if let Some(&escaped) = chars.get(idx + 1) {
                seq.tokens.push(Token::Literal(escaped));
            }
            idx += 2;
            continue;
        }

        if c == '[' {
            let close = chars[idx + 1..]
                .iter()
                .position(|&ch| ch == ']')
                .map(|offset| idx + 1 + offset);

            // An unclosed bracket yields an empty group and scanning
            // continues right after it.
            let items: Vec<GroupItem> = match close {
                Some(end) => chars[idx + 1..end]
                    .iter()
                    .map(|&ch| GroupItem::from_template_char(ch))
                    .collect(),
                None => Vec::new(),
            };

            seq.max_length += items.len();
            seq.tokens.push(Token::Group(items));
            idx = close.unwrap_or(idx) + 1;
            continue;
        }

        match CharClass::from_placeholder(c) {
            Some(class) => {
                seq.tokens.push(Token::Placeholder(class));
                seq.min_length += 1;
                seq.max_length += 1;
            }
            None => seq.tokens.push(Token::Literal(c)),
        }
        idx += 1;
    }

    seq
}
