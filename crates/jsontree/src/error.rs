//! Error types for lexing and parsing.
//!
//! Every error carries the byte offset of the first violation. A failed
//! parse returns exactly one error and no tree; there is no recovery or
//! resynchronization.

use core::fmt;

use thiserror::Error;

use crate::token::TokenKind;

/// Errors raised while scanning raw text into tokens.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexError {
    /// A string's opening quote was never matched before end of input.
    ///
    /// Carries the offset of the opening quote.
    #[error("unterminated string starting at offset {0}")]
    UnterminatedString(usize),

    /// A numeric literal violated the number grammar
    /// (`-? digits ('.' digits)? ([eE] [+-]? digits)?`).
    #[error("invalid number literal at offset {0}")]
    InvalidNumberLiteral(usize),

    /// A character that cannot begin any token.
    #[error("unexpected character {1:?} at offset {0}")]
    UnexpectedCharacter(usize, char),
}

/// What the parser was prepared to accept at the point of failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    /// Any value: `{`, `[`, a quoted string, a number, `true`, `false`,
    /// `null`.
    Value,
    /// An object key.
    Key,
    /// The `:` between a key and its value.
    Colon,
    /// `,` to continue an object, or `}` to close it.
    CommaOrBraceClose,
    /// `,` to continue an array, or `]` to close it.
    CommaOrBracketClose,
    /// Nothing further: the root value must span the whole buffer.
    EndOfInput,
}

impl Expected {
    /// Whether `kind` would have satisfied this expectation.
    #[must_use]
    pub fn admits(self, kind: TokenKind) -> bool {
        match self {
            Expected::Value => matches!(
                kind,
                TokenKind::BraceOpen
                    | TokenKind::BracketOpen
                    | TokenKind::Quote
                    | TokenKind::String
                    | TokenKind::Number
                    | TokenKind::True
                    | TokenKind::False
                    | TokenKind::Null
            ),
            Expected::Key => matches!(kind, TokenKind::Quote | TokenKind::String),
            Expected::Colon => kind == TokenKind::Colon,
            Expected::CommaOrBraceClose => {
                matches!(kind, TokenKind::Comma | TokenKind::BraceClose)
            }
            Expected::CommaOrBracketClose => {
                matches!(kind, TokenKind::Comma | TokenKind::BracketClose)
            }
            Expected::EndOfInput => kind == TokenKind::Eof,
        }
    }
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Expected::Value => "a value",
            Expected::Key => "an object key",
            Expected::Colon => "':'",
            Expected::CommaOrBraceClose => "',' or '}'",
            Expected::CommaOrBracketClose => "',' or ']'",
            Expected::EndOfInput => "end of input",
        };
        f.write_str(s)
    }
}

/// Errors raised while assembling tokens into a tree.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The lexer rejected the input before the parser saw a token.
    #[error(transparent)]
    Lex(#[from] LexError),

    /// A structurally out-of-place token.
    #[error("expected {expected} but found {found} at offset {offset}")]
    UnexpectedToken {
        offset: usize,
        expected: Expected,
        found: TokenKind,
    },

    /// Input ended where a token was required.
    #[error("unexpected end of input at offset {0}")]
    UnexpectedEndOfInput(usize),

    /// Containers nested deeper than the configured maximum depth.
    #[error("recursion limit exceeded at depth {0}")]
    RecursionLimitExceeded(usize),
}
