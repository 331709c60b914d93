//! Statement recording: verbatim capture of the consumed token sequence.

use super::Parser;
use crate::token::Token;

/// Capture log for the tokens consumed over a statement span.
///
/// The log owns duplicates of the tokens it records; it never aliases the
/// cursor's current token.
#[derive(Debug)]
pub(super) struct StatementRecorder {
    entries: Vec<Token>,
}

impl StatementRecorder {
    /// Starts a capture. The caller's current token goes in as a sentinel
    /// entry that finalize discards.
    pub(super) fn new(sentinel: Token) -> Self {
        Self {
            entries: vec![sentinel],
        }
    }

    /// Appends a duplicate of a newly fetched token.
    pub(super) fn push(&mut self, token: Token) {
        self.entries.push(token);
    }

    /// Drops every recorded entry at or past a rewind offset. Entries are
    /// in fetch order, so this truncates a tail.
    pub(super) fn truncate_from(&mut self, offset: usize) {
        while self
            .entries
            .last()
            .is_some_and(|token| token.span.start >= offset)
        {
            self.entries.pop();
        }
    }

    /// The most recently recorded entry.
    pub(super) fn last(&self) -> Option<&Token> {
        self.entries.last()
    }

    /// Ends the capture, discarding the sentinel and returning the rest in
    /// consumption order.
    pub(super) fn finalize(mut self) -> Vec<Token> {
        if !self.entries.is_empty() {
            self.entries.remove(0);
        }
        self.entries
    }
}

impl Parser<'_> {
    /// Begins capturing the token sequence from the current position.
    ///
    /// The capture sees every subsequent [`Parser::advance`] until
    /// [`Parser::finalize_recording`]; a [`Parser::reset`] while recording
    /// drops the entries past the checkpoint. Starting again while a
    /// recording is active restarts the capture.
    pub fn start_recording(&mut self) {
        self.recorder = Some(StatementRecorder::new(self.token.clone()));
    }

    /// The most recently recorded token, or a neutral placeholder when no
    /// recording is active.
    pub fn recorded_token(&self) -> &Token {
        self.recorder
            .as_ref()
            .and_then(StatementRecorder::last)
            .unwrap_or(&self.placeholder)
    }

    /// Stops capturing and returns the tokens fetched since
    /// [`Parser::start_recording`], in order.
    ///
    /// The returned sequence reconstructs the verbatim shape of definitions
    /// that are stored and later re-parsed identically.
    ///
    /// # Panics
    ///
    /// Panics when no recording is active; pairing the two calls is part of
    /// the caller's contract.
    pub fn finalize_recording(&mut self) -> Vec<Token> {
        match self.recorder.take() {
            Some(recorder) => recorder.finalize(),
            None => panic!("finalize_recording called without an active recording"),
        }
    }
}
