//! Recursive-descent parser: token stream in, [`Value`] tree out.
//!
//! One token of lookahead picks the grammar rule; each composite rule
//! consumes its opening delimiter, loops on `,`-separated children until it
//! sees the closing delimiter, and every loop iteration consumes at least
//! one token or returns an error, so malformed input can never hang the
//! parser. Depth of nested containers is bounded by
//! [`ParseOptions::max_depth`].

use alloc::borrow::ToOwned;
use alloc::string::String;
use alloc::vec::Vec;

use crate::error::{Expected, ParseError};
use crate::lexer::Lexer;
use crate::options::ParseOptions;
use crate::token::{Token, TokenKind};
use crate::value::{Pairs, Value};

/// Parses a complete JSON text buffer into a tree with default options.
///
/// # Errors
///
/// Returns the first lexical or structural violation encountered; an error
/// and a tree are mutually exclusive, so no partial tree escapes a failed
/// parse.
///
/// # Examples
///
/// ```
/// use jsontree::{parse, Value};
///
/// assert_eq!(parse("[]"), Ok(Value::Array(vec![])));
/// assert!(parse("[1,").is_err());
/// ```
pub fn parse(input: &str) -> Result<Value, ParseError> {
    parse_with_options(input, ParseOptions::default())
}

/// Parses a complete JSON text buffer into a tree.
///
/// The whole buffer must be one JSON value; trailing content after the
/// root is an error.
///
/// # Errors
///
/// See [`parse`].
pub fn parse_with_options(input: &str, options: ParseOptions) -> Result<Value, ParseError> {
    let mut parser = Parser::new(input, options);
    let value = parser.parse_value()?;
    parser.expect(TokenKind::Eof, Expected::EndOfInput)?;
    Ok(value)
}

struct Parser<'src> {
    lexer: Lexer<'src>,
    max_depth: usize,
    depth: usize,
}

impl<'src> Parser<'src> {
    fn new(input: &'src str, options: ParseOptions) -> Self {
        Self {
            lexer: Lexer::new(input, options),
            max_depth: options.max_depth,
            depth: 0,
        }
    }

    /// `value := object | array | string | number | bool | null`
    fn parse_value(&mut self) -> Result<Value, ParseError> {
        let token = self.lexer.peek_token()?;
        match token.kind {
            TokenKind::BraceOpen => self.parse_object(),
            TokenKind::BracketOpen => self.parse_array(),
            TokenKind::Quote => self.parse_string().map(Value::String),
            TokenKind::String => {
                // Bare word, only lexed under `allow_bare_words`.
                self.advance()?;
                Ok(Value::String(token.text.to_owned()))
            }
            TokenKind::Number => {
                self.advance()?;
                Ok(Value::Number(token.text.to_owned()))
            }
            TokenKind::True => {
                self.advance()?;
                Ok(Value::Bool(true))
            }
            TokenKind::False => {
                self.advance()?;
                Ok(Value::Bool(false))
            }
            TokenKind::Null => {
                self.advance()?;
                Ok(Value::Null)
            }
            TokenKind::Eof => Err(ParseError::UnexpectedEndOfInput(token.span.start)),
            _ => Err(ParseError::UnexpectedToken {
                offset: token.span.start,
                expected: Expected::Value,
                found: token.kind,
            }),
        }
    }

    /// `object := '{' (pair (',' pair)*)? '}'`
    fn parse_object(&mut self) -> Result<Value, ParseError> {
        self.enter()?;
        self.advance()?; // '{', already peeked
        let mut pairs = Pairs::new();

        if self.lexer.peek_token()?.kind == TokenKind::BraceClose {
            self.advance()?;
            self.leave();
            return Ok(Value::Object(pairs));
        }

        loop {
            let key = self.parse_key()?;
            self.expect(TokenKind::Colon, Expected::Colon)?;
            let value = self.parse_value()?;
            pairs.push((key, value));

            let sep = self.advance()?;
            match sep.kind {
                TokenKind::Comma => {}
                TokenKind::BraceClose => break,
                TokenKind::Eof => return Err(ParseError::UnexpectedEndOfInput(sep.span.start)),
                _ => {
                    return Err(ParseError::UnexpectedToken {
                        offset: sep.span.start,
                        expected: Expected::CommaOrBraceClose,
                        found: sep.kind,
                    });
                }
            }
        }

        self.leave();
        Ok(Value::Object(pairs))
    }

    /// `array := '[' (value (',' value)*)? ']'`
    fn parse_array(&mut self) -> Result<Value, ParseError> {
        self.enter()?;
        self.advance()?; // '[', already peeked
        let mut items = Vec::new();

        if self.lexer.peek_token()?.kind == TokenKind::BracketClose {
            self.advance()?;
            self.leave();
            return Ok(Value::Array(items));
        }

        loop {
            items.push(self.parse_value()?);

            let sep = self.advance()?;
            match sep.kind {
                TokenKind::Comma => {}
                TokenKind::BracketClose => break,
                TokenKind::Eof => return Err(ParseError::UnexpectedEndOfInput(sep.span.start)),
                _ => {
                    return Err(ParseError::UnexpectedToken {
                        offset: sep.span.start,
                        expected: Expected::CommaOrBracketClose,
                        found: sep.kind,
                    });
                }
            }
        }

        self.leave();
        Ok(Value::Array(items))
    }

    /// The key half of `pair := string ':' value`.
    fn parse_key(&mut self) -> Result<String, ParseError> {
        let token = self.lexer.peek_token()?;
        match token.kind {
            TokenKind::Quote => self.parse_string(),
            TokenKind::String => {
                self.advance()?;
                Ok(token.text.to_owned())
            }
            TokenKind::Eof => Err(ParseError::UnexpectedEndOfInput(token.span.start)),
            _ => Err(ParseError::UnexpectedToken {
                offset: token.span.start,
                expected: Expected::Key,
                found: token.kind,
            }),
        }
    }

    /// A quoted string is three tokens: quote, raw body, quote. The caller
    /// has already peeked the opening quote; the lexer's mode machine
    /// guarantees the body and closing quote follow (or a lexical error).
    fn parse_string(&mut self) -> Result<String, ParseError> {
        self.advance()?; // opening quote
        let body = self.advance()?;
        debug_assert_eq!(body.kind, TokenKind::String);
        self.advance()?; // closing quote
        Ok(body.text.to_owned())
    }

    fn advance(&mut self) -> Result<Token<'src>, ParseError> {
        Ok(self.lexer.next_token()?)
    }

    fn expect(&mut self, kind: TokenKind, expected: Expected) -> Result<Token<'src>, ParseError> {
        let token = self.advance()?;
        if token.kind == kind {
            Ok(token)
        } else if token.kind == TokenKind::Eof {
            Err(ParseError::UnexpectedEndOfInput(token.span.start))
        } else {
            Err(ParseError::UnexpectedToken {
                offset: token.span.start,
                expected,
                found: token.kind,
            })
        }
    }

    fn enter(&mut self) -> Result<(), ParseError> {
        self.depth += 1;
        if self.depth > self.max_depth {
            return Err(ParseError::RecursionLimitExceeded(self.depth));
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }
}
