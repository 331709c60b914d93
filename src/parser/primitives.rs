//! Token-shape predicates, their checked variants, and the consuming
//! single-token operations.
//!
//! Predicates answer yes/no without consuming; the `check_*` variants turn a
//! "no" into the unexpected-token diagnostic; the consuming operations move
//! the cursor on success.

use super::Parser;
use crate::diag::{ErrorCode, ParseResult};
use crate::token::{Span, TokenKind, TokenValue, ValueType};
use smol_str::SmolStr;

impl Parser<'_> {
    // ========================================================================
    // Predicates
    // ========================================================================

    /// Returns true when the current token is a reserved word.
    pub fn is_reserved(&self) -> bool {
        self.token.reserved
    }

    /// Returns true when the current token is in the core reserved subset.
    pub fn is_core_reserved(&self) -> bool {
        self.token.core_reserved
    }

    /// Returns true when the current token can serve as an identifier,
    /// delimited or not.
    pub fn is_identifier(&self) -> bool {
        self.token.undelimited || self.token.delimited
    }

    /// Returns true for an identifier that is not a reserved word.
    pub fn is_non_reserved_identifier(&self) -> bool {
        self.is_identifier() && !self.token.reserved
    }

    /// Returns true for an identifier outside the core reserved subset.
    pub fn is_non_core_reserved_identifier(&self) -> bool {
        self.is_identifier() && !self.token.core_reserved
    }

    /// Returns true for a delimited (quoted) identifier.
    pub fn is_delimited_identifier(&self) -> bool {
        self.token.delimited
    }

    /// Returns true for an unqualified undelimited identifier.
    pub fn is_undelimited_simple_name(&self) -> bool {
        self.token.undelimited && self.token.qualifiers.is_empty()
    }

    /// Returns true for an unqualified delimited identifier.
    pub fn is_delimited_simple_name(&self) -> bool {
        self.token.delimited && self.token.qualifiers.is_empty()
    }

    /// Returns true for an unqualified name outside the core reserved
    /// subset.
    pub fn is_simple_name(&self) -> bool {
        self.is_non_core_reserved_identifier() && self.token.qualifiers.is_empty()
    }

    /// Returns true when the current token carries a literal value.
    pub fn is_value(&self) -> bool {
        self.token.kind == TokenKind::Value
    }

    // ========================================================================
    // Checked variants
    // ========================================================================

    fn ensure(&self, ok: bool) -> ParseResult<()> {
        if ok { Ok(()) } else { Err(self.unexpected_token()) }
    }

    /// Requires the current token to be usable as an identifier.
    pub fn check_identifier(&self) -> ParseResult<()> {
        self.ensure(self.is_identifier())
    }

    /// Requires an identifier that is not a reserved word.
    pub fn check_non_reserved_identifier(&self) -> ParseResult<()> {
        self.ensure(self.is_non_reserved_identifier())
    }

    /// Requires an identifier outside the core reserved subset.
    pub fn check_non_core_reserved_identifier(&self) -> ParseResult<()> {
        self.ensure(self.is_non_core_reserved_identifier())
    }

    /// Requires a delimited identifier.
    pub fn check_delimited_identifier(&self) -> ParseResult<()> {
        self.ensure(self.token.kind == TokenKind::DelimitedIdentifier)
    }

    /// Requires an unqualified name outside the core reserved subset.
    pub fn check_simple_name(&self) -> ParseResult<()> {
        self.ensure(self.is_simple_name())
    }

    /// Requires a value token.
    pub fn check_value(&self) -> ParseResult<()> {
        self.ensure(self.is_value())
    }

    /// Requires a value token of the given declared type.
    pub fn check_value_type(&self, kind: ValueType) -> ParseResult<()> {
        self.check_value()?;
        self.ensure(self.token.data_type == Some(kind))
    }

    /// Requires the current token to have the given kind, without
    /// consuming it.
    pub fn check_this(&self, kind: TokenKind) -> ParseResult<()> {
        if self.at(kind) {
            Ok(())
        } else {
            Err(self.unexpected_token_require(kind))
        }
    }

    /// Rejects a delimited identifier where plain text is required.
    pub fn check_not_quoted(&self) -> ParseResult<()> {
        self.ensure(!self.token.delimited)
    }

    /// Rejects an identifier carrying characters outside the regular
    /// identifier alphabet.
    pub fn check_regular_identifier(&self) -> ParseResult<()> {
        self.ensure(!self.token.irregular_char)
    }

    // ========================================================================
    // Consuming operations
    // ========================================================================

    /// Requires and consumes a token of the given kind, returning its span.
    pub fn expect(&mut self, kind: TokenKind) -> ParseResult<Span> {
        self.check_this(kind)?;
        let span = self.token.span.clone();
        self.advance()?;
        Ok(span)
    }

    /// Consumes the current token when it has the given kind.
    pub fn consume(&mut self, kind: TokenKind) -> ParseResult<bool> {
        if self.at(kind) {
            self.advance()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Requires a character string literal, consumes it, and returns the
    /// cooked value.
    pub fn read_quoted_string(&mut self) -> ParseResult<SmolStr> {
        self.check_value()?;
        let value = match &self.token.value {
            Some(TokenValue::String(value))
                if self.token.data_type == Some(ValueType::Character) =>
            {
                value.clone()
            }
            _ => {
                return Err(self.error_here(
                    ErrorCode::InvalidNumericLiteral,
                    "character string literal required",
                ));
            }
        };
        self.advance()?;
        Ok(value)
    }

    /// Requires an undelimited simple name matching `expected` (ASCII
    /// case-insensitive) and consumes it.
    ///
    /// This is how the grammar reads syntax words that are not keywords.
    pub fn read_unquoted_identifier(&mut self, expected: &str) -> ParseResult<()> {
        if !self.is_undelimited_simple_name() || !self.token.text.eq_ignore_ascii_case(expected) {
            return Err(self.unexpected_token());
        }
        self.advance()?;
        Ok(())
    }
}
