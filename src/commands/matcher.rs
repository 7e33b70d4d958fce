//! Verb matching for multi-word commands.
//!
//! Decides whether the start of a token sequence names a given command and
//! how many tokens the command name occupies. Everything after that is the
//! argument tail.

use super::tokenizer::{trim_start, Token, TokenKind, SPACE};

/// Outcome of matching a token sequence against one verb sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerbMatch {
    /// Whether every verb was found at the start of the tokens.
    pub matched: bool,
    /// Number of leading tokens that belong to the command name, including
    /// the spaces trimmed after it. Always 0 when `matched` is false.
    pub consumed: usize,
}

impl VerbMatch {
    /// A failed match.
    pub const NONE: Self = Self {
        matched: false,
        consumed: 0,
    };

    fn success(consumed: usize) -> Self {
        Self {
            matched: true,
            consumed,
        }
    }
}

/// Matches the start of `tokens` against a lowercase verb sequence.
///
/// Rules:
/// - Space tokens are skipped.
/// - Plain strings are compared case-insensitively with the next verb.
/// - A quoted string is a phrase: each space-separated word in it is compared
///   with the next verb, so `"start oracle"` names `start oracle`. The phrase
///   is consumed whole and may not run past the last verb.
/// - After the last verb, leading spaces of the argument tail are consumed.
///
/// Any mismatch, or running out of tokens, yields [`VerbMatch::NONE`]. An
/// empty verb list never matches.
pub fn match_verbs<S: AsRef<str>>(tokens: &[Token], verbs: &[S]) -> VerbMatch {
    if verbs.is_empty() {
        return VerbMatch::NONE;
    }

    let mut cursor = 0;
    let mut next_verb = 0;

    while next_verb < verbs.len() {
        let Some(token) = tokens.get(cursor) else {
            return VerbMatch::NONE;
        };

        match token.kind() {
            TokenKind::Space => {}
            TokenKind::PlainString => {
                if !verb_eq(token.value(), verbs[next_verb].as_ref()) {
                    return VerbMatch::NONE;
                }
                next_verb += 1;
            }
            TokenKind::QuotedString => {
                let mut phrase = token
                    .value()
                    .split(SPACE)
                    .filter(|word| !word.is_empty())
                    .peekable();
                if phrase.peek().is_none() {
                    return VerbMatch::NONE;
                }
                for word in phrase {
                    match verbs.get(next_verb) {
                        Some(verb) if verb_eq(word, verb.as_ref()) => next_verb += 1,
                        _ => return VerbMatch::NONE,
                    }
                }
            }
        }

        cursor += 1;
    }

    let rest = &tokens[cursor..];
    let trimmed = rest.len() - trim_start(rest).len();
    VerbMatch::success(cursor + trimmed)
}

fn verb_eq(word: &str, verb: &str) -> bool {
    word.chars().flat_map(char::to_lowercase).eq(verb.chars())
}
