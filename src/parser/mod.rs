//! Parser infrastructure shared by every grammar layer.
//!
//! The parser owns the current token and its position against a
//! [`TokenSource`], and layers the recording, reader, and diagnostic
//! operations on top of that cursor. Higher grammar productions drive it
//! forward with [`Parser::advance`] and the consuming readers; speculative
//! productions checkpoint with [`Parser::mark`] and restore with
//! [`Parser::reset`].

mod diagnostics;
mod literals;
mod primitives;
mod recording;

pub use literals::DateTimeLiteral;

use crate::diag::{ParseError, ParseResult};
use crate::source::TokenSource;
use crate::token::{Token, TokenKind};
use recording::StatementRecorder;

/// An opaque checkpoint for [`Parser::reset`].
///
/// A mark names the start offset of the token that was current when it was
/// taken; it is only meaningful for the parser that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mark(usize);

/// Cursor over one pre-lexed statement stream.
#[derive(Debug)]
pub struct Parser<'src> {
    source: TokenSource<'src>,
    token: Token,
    recorder: Option<StatementRecorder>,
    // Neutral token handed out by recorded_token when no recording is active.
    placeholder: Token,
}

impl<'src> Parser<'src> {
    /// Creates a parser positioned on the first token of the stream.
    ///
    /// Fails when the first token is malformed; an empty stream positions
    /// the cursor on the end-of-text token.
    pub fn new(tokens: Vec<Token>, source: &'src str) -> ParseResult<Self> {
        let mut parser = Self {
            source: TokenSource::new(tokens, source),
            token: Token::end_of_text(0),
            recorder: None,
            placeholder: Token::end_of_text(0),
        };
        parser.fetch()?;
        Ok(parser)
    }

    /// Moves the cursor to the next token.
    ///
    /// Fails with the malformed-token code matching the subkind when the
    /// tokenizer flagged the next token; the cursor does not move in that
    /// case and no recovery is attempted.
    pub fn advance(&mut self) -> ParseResult<()> {
        self.fetch()
    }

    fn fetch(&mut self) -> ParseResult<()> {
        let token = self.source.scan_next();
        if let Some(kind) = token.malformed_kind() {
            let line = self.source.line_at(token.span.start);
            return Err(ParseError::malformed_token(kind, &token.text, line, token.span));
        }
        if let Some(recorder) = &mut self.recorder {
            recorder.push(token.clone());
        }
        self.token = token;
        Ok(())
    }

    /// The token the cursor is positioned on.
    pub fn current(&self) -> &Token {
        &self.token
    }

    /// Returns true when the current token has the given kind.
    pub fn at(&self, kind: TokenKind) -> bool {
        self.token.kind == kind
    }

    /// Returns true when the cursor is on the end-of-text token.
    pub fn at_end(&self) -> bool {
        self.at(TokenKind::EndOfText)
    }

    /// The 1-based source line of the current token.
    pub fn line_number(&self) -> u32 {
        self.source.line_at(self.token.span.start)
    }

    /// The full source text backing this parser.
    pub fn source_text(&self) -> &'src str {
        self.source.source()
    }

    /// Takes a checkpoint at the current token.
    pub fn mark(&self) -> Mark {
        Mark(self.token.span.start)
    }

    /// Restores the cursor (and the recording, if active) to a checkpoint.
    ///
    /// A no-op when the checkpoint equals the current position. Otherwise
    /// the source re-scans from the checkpoint offset, recorded entries at
    /// or past it are dropped, and the cursor resynchronizes on the token
    /// there. This is the sole checkpoint/restore primitive; speculative
    /// retries must not keep state of their own.
    pub fn reset(&mut self, mark: Mark) {
        if mark.0 == self.token.span.start {
            return;
        }
        self.source.seek(mark.0);
        if let Some(recorder) = &mut self.recorder {
            recorder.truncate_from(mark.0);
        }
        // Every token between the checkpoint and the abandoned position was
        // fetched once already, so the re-fetch cannot hit a malformed one.
        let _ = self.fetch();
    }

    /// The verbatim source text from a checkpoint up to (not including) the
    /// current token.
    pub fn text_since(&self, mark: Mark) -> &'src str {
        self.source.part(mark.0, self.token.span.start)
    }

    /// Advances to the end of the current statement and returns its
    /// verbatim text since the checkpoint, terminator excluded.
    ///
    /// The statement ends at a semicolon, at end of text, or at any kind in
    /// `stop` (the caller's statement-starting keywords); the terminating
    /// token is left current.
    pub fn read_statement_text(
        &mut self,
        start: Mark,
        stop: &[TokenKind],
    ) -> ParseResult<&'src str> {
        loop {
            if self.at(TokenKind::Semicolon) || self.at_end() || stop.contains(&self.token.kind) {
                break;
            }
            self.advance()?;
        }
        Ok(self.text_since(start))
    }

    /// Like [`Self::read_statement_text`] but for routine bodies, which may
    /// contain semicolons of their own.
    ///
    /// Only a stop kind or end of text terminates. A semicolon immediately
    /// preceding end of text is put back as the current token so the
    /// captured text excludes it.
    pub fn read_routine_text(
        &mut self,
        start: Mark,
        stop: &[TokenKind],
    ) -> ParseResult<&'src str> {
        let mut index = 0usize;
        let mut last_semicolon: Option<(usize, usize)> = None;
        loop {
            if self.at(TokenKind::Semicolon) {
                last_semicolon = Some((index, self.token.span.start));
            } else if self.at_end() {
                if let Some((semi_index, offset)) = last_semicolon {
                    if semi_index > 0 && semi_index + 1 == index {
                        self.reset(Mark(offset));
                    }
                }
                break;
            } else if stop.contains(&self.token.kind) {
                break;
            }
            self.advance()?;
            index += 1;
        }
        Ok(self.text_since(start))
    }
}
