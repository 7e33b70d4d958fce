//! Tokenizer for console command lines.
//!
//! Splits a raw input line into a lossless sequence of tokens:
//! - Runs of spaces
//! - Double-quoted strings (`"start oracle"` → `start oracle`)
//! - Plain strings (everything up to the next space)
//!
//! Tokens keep their byte offset into the original line, so the sequence can
//! be turned back into text with [`tokens_to_string`] and errors can point at
//! the offending position.

use std::iter::FusedIterator;

/// Character that opens and closes a quoted string.
pub const QUOTE: char = '"';

/// Character that separates tokens.
pub const SPACE: char = ' ';

/// Kind of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A run of one or more spaces.
    Space,
    /// An unquoted string.
    PlainString,
    /// A string that was wrapped in double quotes.
    QuotedString,
}

/// A token parsed from a command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    kind: TokenKind,
    offset: usize,
    value: String,
    source_len: usize,
}

impl Token {
    fn space(offset: usize, run: &str) -> Self {
        Self {
            kind: TokenKind::Space,
            offset,
            value: run.to_string(),
            source_len: run.len(),
        }
    }

    fn plain(offset: usize, text: &str) -> Self {
        Self {
            kind: TokenKind::PlainString,
            offset,
            value: text.to_string(),
            source_len: text.len(),
        }
    }

    fn quoted(offset: usize, content: &str, terminated: bool) -> Self {
        let quotes = if terminated { 2 } else { 1 };
        Self {
            kind: TokenKind::QuotedString,
            offset,
            value: content.to_string(),
            source_len: content.len() + quotes * QUOTE.len_utf8(),
        }
    }

    /// Returns the kind of this token.
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Returns the byte offset of the token in the original line.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Returns the byte offset just past the token's source text.
    ///
    /// For quoted strings this includes the quote characters, so
    /// `line[token.offset()..token.end()]` is the exact source slice.
    pub fn end(&self) -> usize {
        self.offset + self.source_len
    }

    /// Returns the literal text of the token.
    ///
    /// Quoted strings yield the content between the quotes.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns true if the token must be wrapped in quotes when written back.
    pub fn requires_quotes(&self) -> bool {
        matches!(self.kind, TokenKind::QuotedString)
    }

    /// Returns true if this is a run of spaces.
    pub fn is_space(&self) -> bool {
        matches!(self.kind, TokenKind::Space)
    }

    /// Returns the string value if this is a plain or quoted string.
    pub fn as_str(&self) -> Option<&str> {
        match self.kind {
            TokenKind::Space => None,
            TokenKind::PlainString | TokenKind::QuotedString => Some(&self.value),
        }
    }
}

/// Lazy token stream over a single command line.
///
/// Created by [`tokenize`]. Each call to `next` yields one token and strictly
/// advances the cursor, so the stream always terminates.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    line: &'a str,
    cursor: usize,
}

impl Iterator for Tokens<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let rest = &self.line[self.cursor..];
        let first = rest.chars().next()?;
        let start = self.cursor;

        let (token, consumed) = match first {
            SPACE => {
                let len = rest.len() - rest.trim_start_matches(SPACE).len();
                (Token::space(start, &rest[..len]), len)
            }
            QUOTE => {
                let body = &rest[QUOTE.len_utf8()..];
                match body.find(QUOTE) {
                    Some(close) => (
                        Token::quoted(start, &body[..close], true),
                        close + 2 * QUOTE.len_utf8(),
                    ),
                    // Unterminated quote: the rest of the line is quoted content.
                    None => (Token::quoted(start, body, false), rest.len()),
                }
            }
            _ => {
                let len = rest.find(SPACE).unwrap_or(rest.len());
                (Token::plain(start, &rest[..len]), len)
            }
        };

        self.cursor += consumed;
        Some(token)
    }
}

impl FusedIterator for Tokens<'_> {}

/// Tokenizes a command line.
///
/// Handles:
/// - Space runs: `"a   b"` → `a`, `"   "`, `b`
/// - Quoted strings: `"\"start oracle\""` → `start oracle` (quoted)
/// - Unterminated quotes: `"\"abc"` → `abc` (quoted, runs to end of line)
/// - Quotes inside a plain string are literal: `ab"c` → `ab"c`
///
/// Only the ASCII space separates tokens; tabs are ordinary content.
pub fn tokenize(line: &str) -> Tokens<'_> {
    Tokens { line, cursor: 0 }
}

/// Writes a token sequence back as text.
///
/// Quoted strings are re-wrapped in double quotes; everything else is emitted
/// verbatim. Unterminated quotes come back closed, and quote characters
/// embedded in quoted content are not escaped.
pub fn tokens_to_string<'a>(tokens: impl IntoIterator<Item = &'a Token>) -> String {
    let mut out = String::new();
    for token in tokens {
        if token.requires_quotes() {
            out.push(QUOTE);
            out.push_str(token.value());
            out.push(QUOTE);
        } else {
            out.push_str(token.value());
        }
    }
    out
}

/// Skips leading space tokens.
pub fn trim_start(tokens: &[Token]) -> &[Token] {
    let skip = tokens.iter().take_while(|t| t.is_space()).count();
    &tokens[skip..]
}

/// Returns the string values of all non-space tokens.
pub fn words(tokens: &[Token]) -> impl Iterator<Item = &str> {
    tokens.iter().filter_map(Token::as_str)
}
