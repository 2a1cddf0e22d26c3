use alloc::vec;
use alloc::vec::Vec;

use crate::error::LexError;
use crate::lexer::Lexer;
use crate::options::ParseOptions;
use crate::token::TokenKind;

fn lexer(input: &str) -> Lexer<'_> {
    Lexer::new(input, ParseOptions::default())
}

fn lenient(input: &str) -> Lexer<'_> {
    Lexer::new(
        input,
        ParseOptions {
            allow_bare_words: true,
            ..ParseOptions::default()
        },
    )
}

fn kinds(input: &str) -> Vec<TokenKind> {
    let mut lexer = lexer(input);
    let mut out = Vec::new();
    loop {
        let token = lexer.next_token().unwrap();
        if token.kind == TokenKind::Eof {
            break;
        }
        out.push(token.kind);
    }
    out
}

#[test]
fn punctuation() {
    assert_eq!(
        kinds("{}[],:"),
        vec![
            TokenKind::BraceOpen,
            TokenKind::BraceClose,
            TokenKind::BracketOpen,
            TokenKind::BracketClose,
            TokenKind::Comma,
            TokenKind::Colon,
        ]
    );
}

#[test]
fn keywords() {
    assert_eq!(
        kinds("true false null"),
        vec![TokenKind::True, TokenKind::False, TokenKind::Null]
    );
}

#[test]
fn quoted_string_is_a_token_triple() {
    let mut lexer = lexer(r#""hi""#);

    let open = lexer.next_token().unwrap();
    assert_eq!(open.kind, TokenKind::Quote);
    assert_eq!((open.span.start, open.span.end), (0, 1));

    let body = lexer.next_token().unwrap();
    assert_eq!(body.kind, TokenKind::String);
    assert_eq!(body.text, "hi");
    assert_eq!((body.span.start, body.span.end), (1, 3));

    let close = lexer.next_token().unwrap();
    assert_eq!(close.kind, TokenKind::Quote);
    assert_eq!((close.span.start, close.span.end), (3, 4));

    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Eof);
}

#[test]
fn empty_string_body() {
    let mut lexer = lexer(r#""""#);
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Quote);
    let body = lexer.next_token().unwrap();
    assert_eq!(body.kind, TokenKind::String);
    assert_eq!(body.text, "");
    assert!(body.span.is_empty());
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Quote);
}

#[test]
fn string_body_is_verbatim() {
    // No escape interpretation: the backslash and 'n' are two plain bytes.
    let mut lexer = lexer(r#""a\nb""#);
    lexer.next_token().unwrap();
    let body = lexer.next_token().unwrap();
    assert_eq!(body.text, r"a\nb");
}

#[test]
fn whitespace_inside_strings_is_content() {
    let mut lexer = lexer("\" a\tb \"");
    lexer.next_token().unwrap();
    assert_eq!(lexer.next_token().unwrap().text, " a\tb ");
}

#[test]
fn peek_is_stable() {
    let mut lexer = lexer("[1]");
    let first = lexer.peek_token().unwrap();
    let second = lexer.peek_token().unwrap();
    assert_eq!(first, second);
    assert_eq!(lexer.next_token().unwrap(), first);
}

#[test]
fn peek_preserves_string_mode() {
    let mut lexer = lexer(r#""ab""#);
    lexer.next_token().unwrap(); // opening quote
    let peeked = lexer.peek_token().unwrap();
    assert_eq!(peeked.kind, TokenKind::String);
    assert_eq!(peeked.text, "ab");
    assert_eq!(lexer.peek_token().unwrap(), peeked);
    assert_eq!(lexer.next_token().unwrap(), peeked);
}

#[test]
fn eof_is_repeatable() {
    let mut lexer = lexer("1");
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Number);
    let eof = lexer.next_token().unwrap();
    assert_eq!(eof.kind, TokenKind::Eof);
    assert_eq!(lexer.next_token().unwrap(), eof);
    assert_eq!(lexer.next_token().unwrap(), eof);
}

#[test]
fn number_text_and_span() {
    let mut lexer = lexer(" \t\n\r3.1400");
    let token = lexer.next_token().unwrap();
    assert_eq!(token.kind, TokenKind::Number);
    assert_eq!(token.text, "3.1400");
    assert_eq!((token.span.start, token.span.end), (4, 10));
}

#[test]
fn exponent_forms() {
    for input in ["1e9", "1E9", "2e+3", "2e-3", "6.02e23", "-0.5", "007"] {
        let mut lexer = lexer(input);
        let token = lexer.next_token().unwrap();
        assert_eq!(token.kind, TokenKind::Number, "{input}");
        assert_eq!(token.text, input);
    }
}

#[test]
fn unterminated_string_reports_opening_quote() {
    let mut lexer = lexer("[1, \"abc");
    for _ in 0..4 {
        lexer.next_token().unwrap(); // '[', '1', ',', '"'
    }
    assert_eq!(
        lexer.next_token(),
        Err(LexError::UnterminatedString(4))
    );
}

#[test]
fn bare_words_rejected_by_default() {
    let mut lexer = lexer("hello");
    assert_eq!(
        lexer.next_token(),
        Err(LexError::UnexpectedCharacter(0, 'h'))
    );
}

#[test]
fn bare_words_lex_as_strings_when_allowed() {
    let mut lexer = lenient("hello");
    let token = lexer.next_token().unwrap();
    assert_eq!(token.kind, TokenKind::String);
    assert_eq!(token.text, "hello");
}

#[test]
fn unexpected_characters() {
    assert_eq!(
        lexer("@").next_token(),
        Err(LexError::UnexpectedCharacter(0, '@'))
    );
    assert_eq!(
        lexer("é").next_token(),
        Err(LexError::UnexpectedCharacter(0, 'é'))
    );
}

#[test]
fn spans_stay_within_bounds() {
    let input = r#"{"k":[1,true,"x"]}"#;
    let mut lexer = lexer(input);
    loop {
        let token = lexer.next_token().unwrap();
        assert!(token.span.start <= token.span.end);
        assert!(token.span.end <= input.len());
        if token.kind == TokenKind::Eof {
            break;
        }
    }
}
