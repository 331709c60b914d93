//! Error codes, the parse error type, and the miette rendering bridge.

use crate::token::{MalformedKind, Span};
use miette::{Diagnostic, LabeledSpan, Report, Severity};
use std::fmt;

/// Result alias used by every fallible parser operation.
pub type ParseResult<T> = Result<T, ParseError>;

/// Stable numeric codes for every user-facing failure.
///
/// The numbering follows the syntax-error class of SQLSTATE-style codes the
/// engine surfaces to clients; each malformed-token subkind has its own code
/// so client tooling can distinguish them without parsing message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// A token that does not fit the grammar at this position.
    UnexpectedToken,
    /// The grammar required more input but the text ended.
    UnexpectedEndOfText,
    /// A name carried more qualifier parts than the context allows.
    TooManyNameParts,
    /// Tokenizer-reported: unrecognizable input.
    UnknownToken,
    /// Tokenizer-reported: malformed identifier.
    MalformedIdentifier,
    /// Tokenizer-reported: unterminated or invalid string.
    MalformedString,
    /// Tokenizer-reported: invalid numeric constant.
    MalformedNumeric,
    /// Tokenizer-reported: invalid unicode string.
    MalformedUnicodeString,
    /// Tokenizer-reported: invalid binary string.
    MalformedBinaryString,
    /// Tokenizer-reported: invalid bit string.
    MalformedBitString,
    /// Tokenizer-reported: unterminated comment.
    MalformedComment,
    /// A literal with the wrong declared kind or value kind.
    InvalidNumericLiteral,
    /// Interval precision, scale, or field range out of bounds.
    PrecisionOutOfRange,
    /// A recognized but unsupported construct.
    UnsupportedFeature,
}

impl ErrorCode {
    /// The stable numeric form of this code.
    pub fn number(self) -> u16 {
        match self {
            ErrorCode::UnexpectedToken => 42581,
            ErrorCode::UnexpectedEndOfText => 42590,
            ErrorCode::TooManyNameParts => 42551,
            ErrorCode::UnknownToken => 42582,
            ErrorCode::MalformedIdentifier => 42583,
            ErrorCode::MalformedString => 42584,
            ErrorCode::MalformedNumeric => 42585,
            ErrorCode::MalformedUnicodeString => 42586,
            ErrorCode::MalformedBinaryString => 42587,
            ErrorCode::MalformedBitString => 42588,
            ErrorCode::MalformedComment => 42589,
            ErrorCode::InvalidNumericLiteral => 42563,
            ErrorCode::PrecisionOutOfRange => 42592,
            ErrorCode::UnsupportedFeature => 42501,
        }
    }

    /// The diagnostic code for a malformed-token subkind.
    pub fn for_malformed(kind: MalformedKind) -> ErrorCode {
        match kind {
            MalformedKind::BinaryString => ErrorCode::MalformedBinaryString,
            MalformedKind::BitString => ErrorCode::MalformedBitString,
            MalformedKind::UnicodeString => ErrorCode::MalformedUnicodeString,
            MalformedKind::String => ErrorCode::MalformedString,
            MalformedKind::UnknownToken => ErrorCode::UnknownToken,
            MalformedKind::Numeric => ErrorCode::MalformedNumeric,
            MalformedKind::Comment => ErrorCode::MalformedComment,
            MalformedKind::Identifier => ErrorCode::MalformedIdentifier,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// A parse failure: numeric code, message, 1-based line, offending span.
///
/// Raising one of these aborts the current statement; there is no multi-error
/// batching in this layer. Convert to a [`miette::Report`] with
/// [`ParseError::to_report`] when rendered output is wanted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// The stable numeric code.
    pub code: ErrorCode,
    /// Human-readable description.
    pub message: String,
    /// 1-based source line of the offending token.
    pub line: u32,
    /// Span of the offending token.
    pub span: Span,
}

impl ParseError {
    /// Creates a parse error.
    pub fn new(code: ErrorCode, message: impl Into<String>, line: u32, span: Span) -> Self {
        Self {
            code,
            message: message.into(),
            line,
            span,
        }
    }

    /// Creates the error for a tokenizer-reported malformed token, carrying
    /// the raw offending text.
    pub fn malformed_token(kind: MalformedKind, text: &str, line: u32, span: Span) -> Self {
        let message = match kind {
            MalformedKind::UnknownToken => format!("unknown token: {text}"),
            _ => format!("malformed {kind}: {text}"),
        };
        Self::new(ErrorCode::for_malformed(kind), message, line, span)
    }

    /// Converts to a rendered report with the span labeled against `source`.
    ///
    /// The span is clamped to the source bounds, so a report can always be
    /// produced even for a stale or synthetic error.
    pub fn to_report(&self, source: &str) -> Report {
        let len = source.len();
        let start = self.span.start.min(len);
        let end = self.span.end.min(len).max(start);
        let diagnostic = RenderedDiagnostic {
            message: self.message.clone(),
            code: self.code.to_string(),
            label: LabeledSpan::new_primary_with_span(None, (start, end - start)),
        };
        Report::new(diagnostic).with_source_code(source.to_string())
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (line {})", self.message, self.line)
    }
}

impl std::error::Error for ParseError {}

/// The shape handed to miette for rendering.
#[derive(Debug)]
struct RenderedDiagnostic {
    message: String,
    code: String,
    label: LabeledSpan,
}

impl fmt::Display for RenderedDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for RenderedDiagnostic {}

impl Diagnostic for RenderedDiagnostic {
    fn severity(&self) -> Option<Severity> {
        Some(Severity::Error)
    }

    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(&self.code))
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        Some(Box::new(std::iter::once(self.label.clone())))
    }
}
