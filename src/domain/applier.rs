//! Aligns raw input against a compiled template.
//!
//! The applier walks two cursors: one over the tokens and one over the
//! raw characters. A mandatory placeholder that does not accept the
//! current character skips that character and retries the same token,
//! which discards noise without desynchronizing template and input.
//!
//! Optional groups are matched atomically. An optional placeholder is
//! only admitted while the remaining input (current character included)
//! is strictly longer than the number of mandatory placeholders still
//! ahead, so mandatory tokens always have first claim on the tail.

use super::tokenizer::{GroupItem, Token, TokenSequence};
use crate::masking::MaskOutput;

/// Output accumulator threaded through the matching loop.
#[derive(Debug, Default)]
struct Emitter {
    masked: String,
    unmasked: String,
    pending_prefix: String,
    started: bool,
}

impl Emitter {
    /// Flushes buffered leading literals once real content shows up.
    fn start(&mut self) {
        if self.started {
            return;
        }
        self.masked.push_str(&self.pending_prefix);
        self.pending_prefix.clear();
        self.started = true;
    }

    fn literal(&mut self, c: char) {
        self.start();
        self.masked.push(c);
    }

    fn accepted(&mut self, c: char) {
        self.start();
        self.masked.push(c);
        self.unmasked.push(c);
    }

    fn commit_group(&mut self, group: GroupMatch) {
        self.start();
        self.masked.push_str(&group.masked);
        self.unmasked.push_str(&group.unmasked);
    }

    fn finish(self) -> MaskOutput {
        MaskOutput::new(self.masked, self.unmasked)
    }
}

/// A fully matched optional group, not yet committed.
#[derive(Debug)]
struct GroupMatch {
    masked: String,
    unmasked: String,
    next_input: usize,
}

/// Tries to match every item of a group starting at `start`.
///
/// Returns `None` if any item fails, in which case nothing of the group
/// may be emitted.
fn match_group(
    items: &[GroupItem],
    input: &[char],
    start: usize,
    mandatory_ahead: usize,
) -> Option<GroupMatch> {
    let mut masked = String::new();
    let mut unmasked = String::new();
    let mut pos = start;

    for item in items {
        let c = *input.get(pos)?;
        match *item {
            GroupItem::Literal(lit) => masked.push(lit),
            GroupItem::Placeholder(class) => {
                if !class.accepts(c) || !admits_optional(input.len(), pos, mandatory_ahead) {
                    return None;
                }
                masked.push(c);
                unmasked.push(c);
                pos += 1;
            }
        }
    }

    Some(GroupMatch {
        masked,
        unmasked,
        next_input: pos,
    })
}

/// Optional-admission guard.
fn admits_optional(input_len: usize, pos: usize, mandatory_ahead: usize) -> bool {
    input_len - pos > mandatory_ahead
}

/// Applies a compiled template to already-cleaned raw input.
///
/// Stops as soon as either the input or the tokens run out; trailing
/// literals are never emitted for input that does not reach them.
pub fn apply_tokens(raw: &str, seq: &TokenSequence) -> MaskOutput {
    let input: Vec<char> = raw.chars().collect();
    let tokens = seq.tokens();
    let mandatory_after = seq.mandatory_after();

    let mut out = Emitter::default();
    let mut token_idx = 0;
    let mut input_idx = 0;

    while token_idx < tokens.len() {
        let Some(&current) = input.get(input_idx) else {
            break;
        };

        match &tokens[token_idx] {
            Token::Group(items) => {
                if let Some(group) =
                    match_group(items, &input, input_idx, mandatory_after[token_idx])
                {
                    input_idx = group.next_input;
                    out.commit_group(group);
                }
                token_idx += 1;
            }
            Token::Literal(c) => {
                if token_idx == 0 && !out.started {
                    out.pending_prefix.push(*c);
                } else {
                    out.literal(*c);
                }
                token_idx += 1;
            }
            Token::Placeholder(class) => {
                if class.accepts(current) {
                    out.accepted(current);
                    token_idx += 1;
                }
                input_idx += 1;
            }
        }
    }

    out.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::tokenize;

    fn apply(raw: &str, template: &str) -> (String, String) {
        let out = apply_tokens(raw, &tokenize(template));
        (out.masked, out.unmasked)
    }

    #[test]
    fn test_fixed_template() {
        assert_eq!(
            apply("12345678909", "999.999.999-99"),
            ("123.456.789-09".to_string(), "12345678909".to_string())
        );
    }

    #[test]
    fn test_partial_input_stops_before_literal() {
        assert_eq!(apply("123", "999-99").0, "123");
        assert_eq!(apply("1234", "999-99").0, "123-4");
    }

    #[test]
    fn test_noise_is_skipped() {
        assert_eq!(apply("a1b2c3", "999").0, "123");
        assert_eq!(apply("1x2", "9-9").0, "1-2");
    }

    #[test]
    fn test_leading_literal_is_buffered() {
        assert_eq!(apply("x", "(99)").0, "");
        assert_eq!(apply("1", "(99)").0, "(1");
        assert_eq!(apply("12", "(99)").0, "(12");
    }

    #[test]
    fn test_group_admitted_only_with_enough_input() {
        let template = "[9 ][+9]9999-9999";
        assert_eq!(apply("12345678", template).0, "1234-5678");
        assert_eq!(apply("912345678", template).0, "9 1234-5678");
        assert_eq!(apply("9912345678", template).0, "9 +91234-5678");
    }

    #[test]
    fn test_group_never_partial() {
        // Letter class fails on the second item, so nothing of the group is kept.
        assert_eq!(apply("1234", "[9A]99").0, "12");
        assert_eq!(apply("1234", "[9A]99").1, "12");
    }

    #[test]
    fn test_group_needs_input_for_literal_items() {
        assert_eq!(apply("12", "99[-]").0, "12");
    }

    #[test]
    fn test_empty_group_starts_output() {
        assert_eq!(apply("1", "([99").0, "(1");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(apply("", "99:99"), (String::new(), String::new()));
    }

    #[test]
    fn test_empty_template() {
        assert_eq!(apply("123", ""), (String::new(), String::new()));
    }

    #[test]
    fn test_overflow_bounded_by_tokens() {
        assert_eq!(
            apply("12345678901234567890", "99:99"),
            ("12:34".to_string(), "1234".to_string())
        );
    }
}
