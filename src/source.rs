//! Position-addressable token source backing the parser.
//!
//! The tokenizer itself is an external collaborator: any lexer that can
//! produce [`Token`]s with byte spans plugs in here. `TokenSource` keeps the
//! pre-lexed tokens together with the source text so the cursor can re-seek
//! to an arbitrary byte offset, extract verbatim statement text, and report
//! line numbers — without this crate owning any scanning logic.

use crate::token::{Token, TokenKind};

/// Pre-lexed tokens plus their source text, addressable by byte offset.
#[derive(Debug)]
pub struct TokenSource<'src> {
    source: &'src str,
    tokens: Vec<Token>,
    line_starts: Vec<usize>,
    next: usize,
}

impl<'src> TokenSource<'src> {
    /// Wraps a lexer's output. Appends an end-of-text token spanning the end
    /// offset when the vector lacks one, so the stream always terminates.
    pub fn new(mut tokens: Vec<Token>, source: &'src str) -> Self {
        if !matches!(tokens.last().map(|t| t.kind), Some(TokenKind::EndOfText)) {
            tokens.push(Token::end_of_text(source.len()));
        }

        let mut line_starts = vec![0];
        for (offset, byte) in source.bytes().enumerate() {
            if byte == b'\n' {
                line_starts.push(offset + 1);
            }
        }

        Self {
            source,
            tokens,
            line_starts,
            next: 0,
        }
    }

    /// Hands out the next token. Sticky at end of text: once the stream is
    /// exhausted, every further call returns the end-of-text token again.
    pub(crate) fn scan_next(&mut self) -> Token {
        if self.next >= self.tokens.len() {
            return self.tokens[self.tokens.len() - 1].clone();
        }
        let token = self.tokens[self.next].clone();
        self.next += 1;
        token
    }

    /// Repositions the stream so the next fetched token is the first one
    /// starting at or after `offset`.
    pub(crate) fn seek(&mut self, offset: usize) {
        self.next = self.tokens.partition_point(|t| t.span.start < offset);
    }

    /// The verbatim source text between two byte offsets.
    pub fn part(&self, start: usize, end: usize) -> &'src str {
        &self.source[start..end]
    }

    /// The full source text.
    pub fn source(&self) -> &'src str {
        self.source
    }

    /// The 1-based line containing the given byte offset.
    pub fn line_at(&self, offset: usize) -> u32 {
        self.line_starts.partition_point(|&start| start <= offset) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::TokenKind;

    fn number_stream() -> (Vec<Token>, &'static str) {
        let source = "1 22 333";
        let tokens = vec![
            Token::integer_literal("1", 0..1),
            Token::integer_literal("22", 2..4),
            Token::integer_literal("333", 5..8),
        ];
        (tokens, source)
    }

    #[test]
    fn appends_end_of_text_when_missing() {
        let (tokens, source) = number_stream();
        let mut src = TokenSource::new(tokens, source);
        for _ in 0..3 {
            src.scan_next();
        }
        let end = src.scan_next();
        assert_eq!(end.kind, TokenKind::EndOfText);
        assert_eq!(end.span, 8..8);
    }

    #[test]
    fn end_of_text_is_sticky() {
        let mut src = TokenSource::new(Vec::new(), "");
        assert_eq!(src.scan_next().kind, TokenKind::EndOfText);
        assert_eq!(src.scan_next().kind, TokenKind::EndOfText);
    }

    #[test]
    fn seek_lands_on_token_starting_at_offset() {
        let (tokens, source) = number_stream();
        let mut src = TokenSource::new(tokens, source);
        src.scan_next();
        src.scan_next();
        src.scan_next();

        src.seek(2);
        assert_eq!(src.scan_next().text, "22");

        // An offset inside a token's span resolves to the next token start.
        src.seek(3);
        assert_eq!(src.scan_next().text, "333");
    }

    #[test]
    fn part_returns_verbatim_text() {
        let (tokens, source) = number_stream();
        let src = TokenSource::new(tokens, source);
        assert_eq!(src.part(2, 8), "22 333");
        assert_eq!(src.part(0, 0), "");
    }

    #[test]
    fn line_numbers_are_one_based() {
        let source = "1\n22\n\n333";
        let tokens = vec![
            Token::integer_literal("1", 0..1),
            Token::integer_literal("22", 2..4),
            Token::integer_literal("333", 6..9),
        ];
        let src = TokenSource::new(tokens, source);
        assert_eq!(src.line_at(0), 1);
        assert_eq!(src.line_at(2), 2);
        assert_eq!(src.line_at(3), 2);
        assert_eq!(src.line_at(6), 4);
        assert_eq!(src.line_at(9), 4);
    }
}
