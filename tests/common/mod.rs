//! Common test utilities
//!
//! The tokenizer proper lives upstream of this crate, so integration tests
//! drive the parser through [`lex`], a fixture tokenizer covering the ASCII
//! token shapes the front-end inspects: keywords, identifiers, quoted
//! strings, delimited identifiers, integers, comparison operators, and
//! punctuation.
//!
//! # Helpers
//! - [`lex`] - Tokenize ASCII test source into a token stream
//! - [`parser_for`] - Tokenize and wrap the stream in a parser
//! - [`assert_error_code`] - Assert an error's stable numeric code

use sqlfront::token::lookup_keyword;
use sqlfront::{ErrorCode, ParseError, Parser, Span, Token, TokenKind};

/// Tokenize ASCII test source into a token stream.
///
/// Quoted strings undouble embedded `''`; words resolve through the keyword
/// table with the reserved flags a conforming tokenizer would set.
///
/// # Panics
/// Panics on input the fixture does not cover (non-ASCII text, unterminated
/// quotes, uncovered punctuation) so a typo in a test fails loudly.
pub fn lex(source: &str) -> Vec<Token> {
    let bytes = source.as_bytes();
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < bytes.len() {
        let start = pos;
        match bytes[pos] {
            byte if byte.is_ascii_whitespace() => pos += 1,
            b'(' => {
                tokens.push(Token::structural(TokenKind::LParen, start..start + 1));
                pos += 1;
            }
            b')' => {
                tokens.push(Token::structural(TokenKind::RParen, start..start + 1));
                pos += 1;
            }
            b',' => {
                tokens.push(Token::structural(TokenKind::Comma, start..start + 1));
                pos += 1;
            }
            b';' => {
                tokens.push(Token::structural(TokenKind::Semicolon, start..start + 1));
                pos += 1;
            }
            b'+' => {
                tokens.push(Token::structural(TokenKind::Plus, start..start + 1));
                pos += 1;
            }
            b'-' => {
                tokens.push(Token::structural(TokenKind::Minus, start..start + 1));
                pos += 1;
            }
            b'=' => {
                tokens.push(Token::structural(TokenKind::Eq, start..start + 1));
                pos += 1;
            }
            b'<' | b'>' => {
                let (kind, width) = match (bytes[pos], bytes.get(pos + 1)) {
                    (b'<', Some(b'=')) => (TokenKind::LtEq, 2),
                    (b'<', Some(b'>')) => (TokenKind::NotEq, 2),
                    (b'<', _) => (TokenKind::Lt, 1),
                    (_, Some(b'=')) => (TokenKind::GtEq, 2),
                    (_, _) => (TokenKind::Gt, 1),
                };
                tokens.push(Token::structural(kind, start..start + width));
                pos += width;
            }
            b'\'' => {
                let (value, end) = scan_quoted(source, bytes, pos, b'\'');
                tokens.push(Token::string_literal(value, start..end));
                pos = end;
            }
            b'"' => {
                let (name, end) = scan_quoted(source, bytes, pos, b'"');
                tokens.push(Token::delimited_identifier(name, start..end));
                pos = end;
            }
            b'0'..=b'9' => {
                while pos < bytes.len() && bytes[pos].is_ascii_digit() {
                    pos += 1;
                }
                tokens.push(Token::integer_literal(&source[start..pos], start..pos));
            }
            b'A'..=b'Z' | b'a'..=b'z' | b'_' => {
                while pos < bytes.len()
                    && (bytes[pos].is_ascii_alphanumeric() || bytes[pos] == b'_')
                {
                    pos += 1;
                }
                tokens.push(word_token(&source[start..pos], start..pos));
            }
            other => panic!("fixture lexer cannot scan {:?} in `{source}`", other as char),
        }
    }

    tokens
}

/// Scans a quote-delimited run starting at `open`, undoubling the quote
/// character, and returns the cooked content with the end offset past the
/// closing quote.
fn scan_quoted(source: &str, bytes: &[u8], open: usize, quote: u8) -> (String, usize) {
    let mut content = String::new();
    let mut pos = open + 1;
    while pos < bytes.len() {
        if bytes[pos] == quote {
            if bytes.get(pos + 1) == Some(&quote) {
                content.push(quote as char);
                pos += 2;
            } else {
                return (content, pos + 1);
            }
        } else {
            content.push(bytes[pos] as char);
            pos += 1;
        }
    }
    panic!("unterminated quote in test source: `{source}`");
}

fn word_token(word: &str, span: Span) -> Token {
    match lookup_keyword(word) {
        Some(kind) if kind.is_core_reserved_word() => Token::core_reserved(kind, word, span),
        Some(kind) if kind.is_reserved_word() => Token::reserved(kind, word, span),
        Some(kind) => Token::keyword(kind, word, span),
        None => Token::identifier(word, span),
    }
}

/// Tokenize source and wrap the stream in a parser positioned on the first
/// token.
///
/// # Panics
/// Panics if the first token is malformed, which the fixture lexer never
/// produces.
pub fn parser_for(source: &str) -> Parser<'_> {
    Parser::new(lex(source), source)
        .unwrap_or_else(|err| panic!("parser construction failed for `{source}`: {err}"))
}

/// Assert an error's stable numeric code, showing the full error on
/// mismatch.
pub fn assert_error_code(err: &ParseError, code: ErrorCode) {
    assert_eq!(err.code, code, "unexpected code for error: {err}");
}
