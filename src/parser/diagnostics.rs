//! Error constructors anchored at the current token.
//!
//! Constructors return the [`ParseError`] for the caller to raise, so a
//! grammar layer can write `return Err(self.unexpected_token())` at the
//! point of detection.

use super::Parser;
use crate::diag::{ErrorCode, ParseError};
use smol_str::SmolStr;
use std::fmt;

impl Parser<'_> {
    pub(super) fn error_here(&self, code: ErrorCode, message: impl Into<String>) -> ParseError {
        ParseError::new(code, message, self.line_number(), self.token.span.clone())
    }

    /// The most specific available description of the current token.
    ///
    /// Priority: charset schema, charset name, outer name qualifier, inner
    /// name qualifier, then the token's own text. The deepest qualifier
    /// slot is left to [`Self::too_many_identifiers`].
    fn found_description(&self) -> &str {
        if let Some(schema) = &self.token.charset_schema {
            return schema;
        }
        if let Some(name) = &self.token.charset_name {
            return name;
        }
        self.token
            .qualifiers
            .iter()
            .take(2)
            .rev()
            .find(|part| !part.is_empty())
            .map(SmolStr::as_str)
            .unwrap_or(self.token.text.as_str())
    }

    /// The unexpected-token diagnostic for the current token.
    ///
    /// At end of text this produces the distinct no-more-input form with
    /// its own code.
    pub fn unexpected_token(&self) -> ParseError {
        if self.at_end() {
            return self.error_here(ErrorCode::UnexpectedEndOfText, "unexpected end of text");
        }
        self.error_here(
            ErrorCode::UnexpectedToken,
            format!("unexpected token: {}", self.found_description()),
        )
    }

    /// Like [`Self::unexpected_token`] with an explicit found-description,
    /// for callers that synthesize multi-token constructs.
    pub fn unexpected_token_text(&self, found: impl fmt::Display) -> ParseError {
        self.error_here(
            ErrorCode::UnexpectedToken,
            format!("unexpected token: {found}"),
        )
    }

    /// The unexpected-token diagnostic paired with what the grammar
    /// required here.
    pub fn unexpected_token_require(&self, required: impl fmt::Display) -> ParseError {
        if self.at_end() {
            return self.error_here(
                ErrorCode::UnexpectedEndOfText,
                format!("unexpected end of text, required: {required}"),
            );
        }
        self.error_here(
            ErrorCode::UnexpectedToken,
            format!(
                "unexpected token: {}, required: {required}",
                self.found_description()
            ),
        )
    }

    /// The too-many-name-parts diagnostic.
    ///
    /// Same priority scan as [`Self::unexpected_token`] over the qualifier
    /// chain, but starting from the deepest slot.
    pub fn too_many_identifiers(&self) -> ParseError {
        let found = self
            .token
            .qualifiers
            .iter()
            .rev()
            .find(|part| !part.is_empty())
            .map(SmolStr::as_str)
            .unwrap_or(self.token.text.as_str());
        self.error_here(
            ErrorCode::TooManyNameParts,
            format!("too many name parts: {found}"),
        )
    }

    /// The unsupported-feature diagnostic, describing the current token.
    pub fn unsupported_feature(&self) -> ParseError {
        self.unsupported_feature_detail(&self.token.text)
    }

    /// The unsupported-feature diagnostic with an explicit detail.
    pub fn unsupported_feature_detail(&self, detail: impl fmt::Display) -> ParseError {
        self.error_here(
            ErrorCode::UnsupportedFeature,
            format!("unsupported feature: {detail}"),
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::diag::ErrorCode;
    use crate::parser::Parser;
    use crate::token::{Token, TokenKind};

    fn parser_over(tokens: Vec<Token>, source: &str) -> Parser<'_> {
        Parser::new(tokens, source).unwrap()
    }

    #[test]
    fn charset_schema_outranks_everything() {
        let token = Token::identifier("SQL_TEXT", 0..8)
            .with_charset(Some("DEFN_SCHEMA".into()), Some("LATIN1".into()))
            .with_qualifiers(vec!["inner".into(), "outer".into()]);
        let parser = parser_over(vec![token], "SQL_TEXT");
        let err = parser.unexpected_token();
        assert_eq!(err.code, ErrorCode::UnexpectedToken);
        assert_eq!(err.message, "unexpected token: DEFN_SCHEMA");
    }

    #[test]
    fn charset_name_outranks_plain_text() {
        let token = Token::identifier("SQL_TEXT", 0..8).with_charset(None, Some("LATIN1".into()));
        let parser = parser_over(vec![token], "SQL_TEXT");
        assert_eq!(parser.unexpected_token().message, "unexpected token: LATIN1");
    }

    #[test]
    fn qualifier_scans_differ_between_the_two_diagnostics() {
        let token = Token::identifier("col", 10..13).with_qualifiers(vec![
            "tbl".into(),
            "schema".into(),
            "catalog".into(),
        ]);
        let parser = parser_over(vec![token], "catalog.schema.tbl.col");

        // unexpected_token never reaches the deepest slot.
        assert_eq!(parser.unexpected_token().message, "unexpected token: schema");
        let err = parser.too_many_identifiers();
        assert_eq!(err.code, ErrorCode::TooManyNameParts);
        assert_eq!(err.message, "too many name parts: catalog");
    }

    #[test]
    fn unqualified_tokens_fall_back_to_their_text() {
        let parser = parser_over(vec![Token::identifier("widget", 0..6)], "widget");
        assert_eq!(parser.unexpected_token().message, "unexpected token: widget");
        assert_eq!(
            parser.too_many_identifiers().message,
            "too many name parts: widget"
        );
    }

    #[test]
    fn end_of_text_gets_its_own_code() {
        let parser = parser_over(Vec::new(), "");
        let err = parser.unexpected_token();
        assert_eq!(err.code, ErrorCode::UnexpectedEndOfText);
        assert_eq!(err.code.number(), 42590);

        let err = parser.unexpected_token_require(TokenKind::RParen);
        assert_eq!(err.code, ErrorCode::UnexpectedEndOfText);
        assert_eq!(err.message, "unexpected end of text, required: )");
    }

    #[test]
    fn require_form_names_both_sides() {
        let parser = parser_over(vec![Token::structural(TokenKind::Comma, 0..1)], ",");
        let err = parser.unexpected_token_require(TokenKind::RParen);
        assert_eq!(err.message, "unexpected token: ,, required: )");
    }

    #[test]
    fn diagnostics_carry_the_current_line() {
        let source = "line one\nbad";
        let tokens = vec![
            Token::identifier("line", 0..4),
            Token::identifier("one", 5..8),
            Token::identifier("bad", 9..12),
        ];
        let mut parser = Parser::new(tokens, source).unwrap();
        parser.advance().unwrap();
        parser.advance().unwrap();
        assert_eq!(parser.unexpected_token().line, 2);
        assert_eq!(parser.unexpected_token().span, 9..12);
    }

    #[test]
    fn unsupported_feature_describes_the_token_or_the_detail() {
        let parser = parser_over(vec![Token::identifier("MERGE", 0..5)], "MERGE");
        let err = parser.unsupported_feature();
        assert_eq!(err.code.number(), 42501);
        assert_eq!(err.message, "unsupported feature: MERGE");

        let err = parser.unsupported_feature_detail("recursive common table expression");
        assert_eq!(
            err.message,
            "unsupported feature: recursive common table expression"
        );
    }
}
