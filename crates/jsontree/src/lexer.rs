//! Scanner: converts the source buffer into a token stream with one-token
//! lookahead.
//!
//! Quotes are tokens of their own, so `"abc"` lexes as `Quote`,
//! `String("abc")`, `Quote`. The scanner tracks which of the three it owes
//! next in [`Mode`]; the string body between the delimiters is taken
//! verbatim, with no escape-sequence interpretation.
//!
//! `peek_token` snapshots and restores the whole cursor, so any number of
//! peeks leaves the lexer exactly where a sequence of `next_token` calls
//! would have. Token text is a borrowed slice of the input; nothing is
//! copied at scan time.

use memchr::memchr;

use crate::error::LexError;
use crate::options::ParseOptions;
use crate::token::{Span, Token, TokenKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Between tokens; whitespace is insignificant here.
    Normal,
    /// Just consumed an opening quote; the next token is the raw string
    /// body.
    StringBody,
    /// Just consumed a string body; the next token is the closing quote.
    StringClose,
}

/// The complete scan state. Saved and restored as a unit around peeks.
#[derive(Debug, Clone, Copy)]
struct Cursor {
    pos: usize,
    mode: Mode,
    /// Offset of the opening quote of the string currently being scanned.
    open_quote: usize,
}

pub(crate) struct Lexer<'src> {
    input: &'src str,
    cursor: Cursor,
    allow_bare_words: bool,
}

impl<'src> Lexer<'src> {
    pub(crate) fn new(input: &'src str, options: ParseOptions) -> Self {
        Self {
            input,
            cursor: Cursor {
                pos: 0,
                mode: Mode::Normal,
                open_quote: 0,
            },
            allow_bare_words: options.allow_bare_words,
        }
    }

    /// Returns the next token and advances past it.
    pub(crate) fn next_token(&mut self) -> Result<Token<'src>, LexError> {
        match self.cursor.mode {
            Mode::Normal => self.scan_normal(),
            Mode::StringBody => self.scan_string_body(),
            Mode::StringClose => self.scan_string_close(),
        }
    }

    /// Returns the next token without advancing.
    pub(crate) fn peek_token(&mut self) -> Result<Token<'src>, LexError> {
        let saved = self.cursor;
        let result = self.next_token();
        self.cursor = saved;
        result
    }

    fn scan_normal(&mut self) -> Result<Token<'src>, LexError> {
        self.skip_whitespace();

        let start = self.cursor.pos;
        let Some(ch) = self.input[start..].chars().next() else {
            return Ok(self.token(TokenKind::Eof, start, start));
        };

        match ch {
            '{' => Ok(self.punct(TokenKind::BraceOpen)),
            '}' => Ok(self.punct(TokenKind::BraceClose)),
            '[' => Ok(self.punct(TokenKind::BracketOpen)),
            ']' => Ok(self.punct(TokenKind::BracketClose)),
            ':' => Ok(self.punct(TokenKind::Colon)),
            ',' => Ok(self.punct(TokenKind::Comma)),
            '"' => {
                self.cursor.open_quote = start;
                self.cursor.mode = Mode::StringBody;
                Ok(self.punct(TokenKind::Quote))
            }
            c if c.is_ascii_alphabetic() => self.scan_word(c),
            c if c.is_ascii_digit() || c == '-' => self.scan_number(),
            c => Err(LexError::UnexpectedCharacter(start, c)),
        }
    }

    /// Raw scan to the closing quote. The body is whatever bytes sit
    /// between the delimiters; an empty body is a valid (empty) string
    /// token.
    fn scan_string_body(&mut self) -> Result<Token<'src>, LexError> {
        let start = self.cursor.pos;
        match memchr(b'"', &self.input.as_bytes()[start..]) {
            Some(len) => {
                self.cursor.pos = start + len;
                self.cursor.mode = Mode::StringClose;
                Ok(self.token(TokenKind::String, start, self.cursor.pos))
            }
            None => Err(LexError::UnterminatedString(self.cursor.open_quote)),
        }
    }

    fn scan_string_close(&mut self) -> Result<Token<'src>, LexError> {
        // scan_string_body stopped exactly on the closing quote.
        self.cursor.mode = Mode::Normal;
        Ok(self.punct(TokenKind::Quote))
    }

    fn scan_word(&mut self, first: char) -> Result<Token<'src>, LexError> {
        let start = self.cursor.pos;
        while self
            .byte_at(self.cursor.pos)
            .is_some_and(|b| b.is_ascii_alphabetic())
        {
            self.cursor.pos += 1;
        }

        let kind = match &self.input[start..self.cursor.pos] {
            "true" => TokenKind::True,
            "false" => TokenKind::False,
            "null" => TokenKind::Null,
            _ if self.allow_bare_words => TokenKind::String,
            _ => return Err(LexError::UnexpectedCharacter(start, first)),
        };
        Ok(self.token(kind, start, self.cursor.pos))
    }

    /// Strict number grammar: `-? digits ('.' digits)? ([eE] [+-]? digits)?`.
    fn scan_number(&mut self) -> Result<Token<'src>, LexError> {
        let start = self.cursor.pos;

        if self.byte_at(self.cursor.pos) == Some(b'-') {
            self.cursor.pos += 1;
        }
        if self.eat_digits() == 0 {
            return Err(LexError::InvalidNumberLiteral(start));
        }
        if self.byte_at(self.cursor.pos) == Some(b'.') {
            self.cursor.pos += 1;
            if self.eat_digits() == 0 {
                return Err(LexError::InvalidNumberLiteral(start));
            }
        }
        if matches!(self.byte_at(self.cursor.pos), Some(b'e' | b'E')) {
            self.cursor.pos += 1;
            if matches!(self.byte_at(self.cursor.pos), Some(b'+' | b'-')) {
                self.cursor.pos += 1;
            }
            if self.eat_digits() == 0 {
                return Err(LexError::InvalidNumberLiteral(start));
            }
        }

        // A second '.', sign or exponent here makes the whole run one
        // malformed literal, not two adjacent tokens.
        if let Some(b) = self.byte_at(self.cursor.pos) {
            if b.is_ascii_alphanumeric() || matches!(b, b'.' | b'-' | b'+') {
                return Err(LexError::InvalidNumberLiteral(start));
            }
        }

        Ok(self.token(TokenKind::Number, start, self.cursor.pos))
    }

    fn eat_digits(&mut self) -> usize {
        let start = self.cursor.pos;
        while self
            .byte_at(self.cursor.pos)
            .is_some_and(|b| b.is_ascii_digit())
        {
            self.cursor.pos += 1;
        }
        self.cursor.pos - start
    }

    fn skip_whitespace(&mut self) {
        while matches!(
            self.byte_at(self.cursor.pos),
            Some(b' ' | b'\t' | b'\n' | b'\r')
        ) {
            self.cursor.pos += 1;
        }
    }

    fn byte_at(&self, index: usize) -> Option<u8> {
        self.input.as_bytes().get(index).copied()
    }

    /// Emits a one-character token and advances past it.
    fn punct(&mut self, kind: TokenKind) -> Token<'src> {
        let start = self.cursor.pos;
        self.cursor.pos += 1;
        self.token(kind, start, self.cursor.pos)
    }

    fn token(&self, kind: TokenKind, start: usize, end: usize) -> Token<'src> {
        Token {
            kind,
            text: &self.input[start..end],
            span: Span::new(start, end),
        }
    }
}
