//! Token types shared by the cursor, the readers, and the diagnostics.

use smol_str::SmolStr;
use std::fmt;
use std::ops::Range;

/// A byte-offset range into the source text.
pub type Span = Range<usize>;

/// The kind of a lexical token.
///
/// This is the closed set the front-end inspects: temporal and aggregate
/// keywords, comparison and sign operators, the punctuation that delimits
/// precision lists, and the catch-all identifier/value kinds. Everything a
/// full grammar needs beyond these passes through the cursor untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Temporal keywords
    Date,
    Time,
    Timestamp,
    Interval,

    // Interval field keywords
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
    To,

    // Aggregate keywords
    Count,
    Max,
    Min,
    Sum,
    Avg,
    Every,
    Any,
    Some,
    StddevPop,
    StddevSamp,
    VarPop,
    VarSamp,
    ArrayAgg,
    GroupConcat,
    Median,

    // Comparison operators
    Eq,   // =
    NotEq, // <>
    Lt,   // <
    Gt,   // >
    LtEq, // <=
    GtEq, // >=

    // Sign operators
    Plus,  // +
    Minus, // -

    // Punctuation
    LParen,    // (
    RParen,    // )
    Comma,     // ,
    Semicolon, // ;

    // Identifiers (name text carried on the token)
    Identifier,
    DelimitedIdentifier,

    // A literal with a typed payload carried on the token
    Value,

    // Special
    EndOfText,
    Malformed(MalformedKind),
}

impl TokenKind {
    /// Returns true if this token kind is a keyword.
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::Date
                | TokenKind::Time
                | TokenKind::Timestamp
                | TokenKind::Interval
                | TokenKind::Year
                | TokenKind::Month
                | TokenKind::Day
                | TokenKind::Hour
                | TokenKind::Minute
                | TokenKind::Second
                | TokenKind::To
                | TokenKind::Count
                | TokenKind::Max
                | TokenKind::Min
                | TokenKind::Sum
                | TokenKind::Avg
                | TokenKind::Every
                | TokenKind::Any
                | TokenKind::Some
                | TokenKind::StddevPop
                | TokenKind::StddevSamp
                | TokenKind::VarPop
                | TokenKind::VarSamp
                | TokenKind::ArrayAgg
                | TokenKind::GroupConcat
                | TokenKind::Median
        )
    }

    /// Returns true for keywords a conforming tokenizer must flag reserved.
    pub fn is_reserved_word(&self) -> bool {
        self.is_keyword() && !matches!(self, TokenKind::GroupConcat | TokenKind::Median)
    }

    /// Returns true for the core reserved subset (reserved since the base
    /// standard, as opposed to the later statistical aggregates).
    pub fn is_core_reserved_word(&self) -> bool {
        self.is_reserved_word()
            && !matches!(
                self,
                TokenKind::StddevPop
                    | TokenKind::StddevSamp
                    | TokenKind::VarPop
                    | TokenKind::VarSamp
                    | TokenKind::ArrayAgg
            )
    }

    /// Returns true if this token kind is a comparison operator.
    pub fn is_comparison_op(&self) -> bool {
        matches!(
            self,
            TokenKind::Eq
                | TokenKind::NotEq
                | TokenKind::Lt
                | TokenKind::Gt
                | TokenKind::LtEq
                | TokenKind::GtEq
        )
    }
}

/// Resolves an unquoted word to its keyword kind, if it is one.
///
/// Tokenizers feeding this front-end call this after scanning an
/// identifier-shaped word; a `None` means the word is a plain identifier.
pub fn lookup_keyword(name: &str) -> Option<TokenKind> {
    let upper = name.to_ascii_uppercase();
    let kind = match upper.as_str() {
        "DATE" => TokenKind::Date,
        "TIME" => TokenKind::Time,
        "TIMESTAMP" => TokenKind::Timestamp,
        "INTERVAL" => TokenKind::Interval,
        "YEAR" => TokenKind::Year,
        "MONTH" => TokenKind::Month,
        "DAY" => TokenKind::Day,
        "HOUR" => TokenKind::Hour,
        "MINUTE" => TokenKind::Minute,
        "SECOND" => TokenKind::Second,
        "TO" => TokenKind::To,
        "COUNT" => TokenKind::Count,
        "MAX" => TokenKind::Max,
        "MIN" => TokenKind::Min,
        "SUM" => TokenKind::Sum,
        "AVG" => TokenKind::Avg,
        "EVERY" => TokenKind::Every,
        "ANY" => TokenKind::Any,
        "SOME" => TokenKind::Some,
        "STDDEV_POP" => TokenKind::StddevPop,
        "STDDEV_SAMP" => TokenKind::StddevSamp,
        "VAR_POP" => TokenKind::VarPop,
        "VAR_SAMP" => TokenKind::VarSamp,
        "ARRAY_AGG" => TokenKind::ArrayAgg,
        "GROUP_CONCAT" => TokenKind::GroupConcat,
        "MEDIAN" => TokenKind::Median,
        _ => return None,
    };
    Some(kind)
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Date => write!(f, "DATE"),
            TokenKind::Time => write!(f, "TIME"),
            TokenKind::Timestamp => write!(f, "TIMESTAMP"),
            TokenKind::Interval => write!(f, "INTERVAL"),
            TokenKind::Year => write!(f, "YEAR"),
            TokenKind::Month => write!(f, "MONTH"),
            TokenKind::Day => write!(f, "DAY"),
            TokenKind::Hour => write!(f, "HOUR"),
            TokenKind::Minute => write!(f, "MINUTE"),
            TokenKind::Second => write!(f, "SECOND"),
            TokenKind::To => write!(f, "TO"),
            TokenKind::Count => write!(f, "COUNT"),
            TokenKind::Max => write!(f, "MAX"),
            TokenKind::Min => write!(f, "MIN"),
            TokenKind::Sum => write!(f, "SUM"),
            TokenKind::Avg => write!(f, "AVG"),
            TokenKind::Every => write!(f, "EVERY"),
            TokenKind::Any => write!(f, "ANY"),
            TokenKind::Some => write!(f, "SOME"),
            TokenKind::StddevPop => write!(f, "STDDEV_POP"),
            TokenKind::StddevSamp => write!(f, "STDDEV_SAMP"),
            TokenKind::VarPop => write!(f, "VAR_POP"),
            TokenKind::VarSamp => write!(f, "VAR_SAMP"),
            TokenKind::ArrayAgg => write!(f, "ARRAY_AGG"),
            TokenKind::GroupConcat => write!(f, "GROUP_CONCAT"),
            TokenKind::Median => write!(f, "MEDIAN"),
            TokenKind::Eq => write!(f, "="),
            TokenKind::NotEq => write!(f, "<>"),
            TokenKind::Lt => write!(f, "<"),
            TokenKind::Gt => write!(f, ">"),
            TokenKind::LtEq => write!(f, "<="),
            TokenKind::GtEq => write!(f, ">="),
            TokenKind::Plus => write!(f, "+"),
            TokenKind::Minus => write!(f, "-"),
            TokenKind::LParen => write!(f, "("),
            TokenKind::RParen => write!(f, ")"),
            TokenKind::Comma => write!(f, ","),
            TokenKind::Semicolon => write!(f, ";"),
            TokenKind::Identifier => write!(f, "identifier"),
            TokenKind::DelimitedIdentifier => write!(f, "delimited identifier"),
            TokenKind::Value => write!(f, "value"),
            TokenKind::EndOfText => write!(f, "<end of text>"),
            TokenKind::Malformed(kind) => write!(f, "<malformed {kind}>"),
        }
    }
}

/// The eight closed subkinds of malformed token the tokenizer can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MalformedKind {
    BinaryString,
    BitString,
    UnicodeString,
    String,
    UnknownToken,
    Numeric,
    Comment,
    Identifier,
}

impl fmt::Display for MalformedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MalformedKind::BinaryString => "binary string",
            MalformedKind::BitString => "bit string",
            MalformedKind::UnicodeString => "unicode string",
            MalformedKind::String => "string",
            MalformedKind::UnknownToken => "unknown token",
            MalformedKind::Numeric => "numeric constant",
            MalformedKind::Comment => "comment",
            MalformedKind::Identifier => "identifier",
        };
        write!(f, "{name}")
    }
}

/// Declared type of a literal value token, assigned by the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    /// 32-bit exact integer.
    Integer,
    /// 64-bit exact integer.
    Bigint,
    /// Exact numeric beyond the 64-bit range.
    Numeric,
    /// Character string.
    Character,
}

/// The typed payload of a value token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenValue {
    /// A magnitude representable in 64 bits (declared Integer or Bigint).
    Integer(i64),
    /// Canonical decimal digits beyond the 64-bit range: no sign, no
    /// leading zeros. Constructors normalize to this form.
    Numeric(SmolStr),
    /// The cooked value of a character string literal.
    String(SmolStr),
}

/// Which of the five mutually exclusive classifications a token carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenClass {
    Reserved,
    Delimited,
    Undelimited,
    Value,
    Structural,
}

/// A classified lexical unit.
///
/// Tokens are produced by an external tokenizer and adapted through
/// [`TokenSource`](crate::TokenSource). The identity flags and the qualifier
/// chain exist for the diagnostic builder: when a parse fails, the most
/// specific available description of "what was found" wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The kind of token.
    pub kind: TokenKind,
    /// The literal text as the tokenizer reports it.
    pub text: SmolStr,
    /// Typed payload, for value tokens.
    pub value: Option<TokenValue>,
    /// Declared type of the payload, for value tokens.
    pub data_type: Option<ValueType>,
    /// The span in source text.
    pub span: Span,
    /// The token is a reserved word.
    pub reserved: bool,
    /// The token is in the core reserved subset.
    pub core_reserved: bool,
    /// The token has undelimited identifier shape.
    pub undelimited: bool,
    /// The token is a delimited (quoted) identifier.
    pub delimited: bool,
    /// An undelimited identifier containing characters outside the regular
    /// identifier alphabet.
    pub irregular_char: bool,
    /// Name qualifiers preceding this token, innermost first, at most three.
    pub qualifiers: Vec<SmolStr>,
    /// Character-set schema qualifier, diagnostics only.
    pub charset_schema: Option<SmolStr>,
    /// Character-set name qualifier, diagnostics only.
    pub charset_name: Option<SmolStr>,
}

impl Token {
    fn bare(kind: TokenKind, text: SmolStr, span: Span) -> Self {
        Self {
            kind,
            text,
            value: None,
            data_type: None,
            span,
            reserved: false,
            core_reserved: false,
            undelimited: false,
            delimited: false,
            irregular_char: false,
            qualifiers: Vec::new(),
            charset_schema: None,
            charset_name: None,
        }
    }

    /// Creates a structural token (operator or punctuation); its text is the
    /// printed form of the kind.
    pub fn structural(kind: TokenKind, span: Span) -> Self {
        Self::bare(kind, SmolStr::new(kind.to_string()), span)
    }

    /// Creates a non-reserved keyword token, usable as an identifier.
    pub fn keyword(kind: TokenKind, text: impl Into<SmolStr>, span: Span) -> Self {
        let mut token = Self::bare(kind, text.into(), span);
        token.undelimited = true;
        token
    }

    /// Creates a reserved keyword token.
    pub fn reserved(kind: TokenKind, text: impl Into<SmolStr>, span: Span) -> Self {
        let mut token = Self::keyword(kind, text, span);
        token.reserved = true;
        token
    }

    /// Creates a core reserved keyword token.
    pub fn core_reserved(kind: TokenKind, text: impl Into<SmolStr>, span: Span) -> Self {
        let mut token = Self::reserved(kind, text, span);
        token.core_reserved = true;
        token
    }

    /// Creates an undelimited identifier token.
    pub fn identifier(text: impl Into<SmolStr>, span: Span) -> Self {
        let mut token = Self::bare(TokenKind::Identifier, text.into(), span);
        token.undelimited = true;
        token
    }

    /// Creates a delimited (quoted) identifier token.
    pub fn delimited_identifier(text: impl Into<SmolStr>, span: Span) -> Self {
        let mut token = Self::bare(TokenKind::DelimitedIdentifier, text.into(), span);
        token.delimited = true;
        token
    }

    /// Creates a character string literal token with its cooked value.
    pub fn string_literal(value: impl Into<SmolStr>, span: Span) -> Self {
        let value = value.into();
        let mut token = Self::bare(TokenKind::Value, value.clone(), span);
        token.value = Some(TokenValue::String(value));
        token.data_type = Some(ValueType::Character);
        token
    }

    /// Creates an integer literal token, classifying the declared type by
    /// magnitude the way the engine's tokenizer does: up to 2³¹−1 Integer,
    /// up to 2⁶³−1 Bigint, Numeric beyond.
    pub fn integer_literal(digits: &str, span: Span) -> Self {
        debug_assert!(
            !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()),
            "integer literal must be bare decimal digits"
        );
        let canonical = canonical_digits(digits);
        let mut token = Self::bare(TokenKind::Value, SmolStr::new(digits), span);
        match canonical.parse::<u128>() {
            Ok(magnitude) if magnitude <= i32::MAX as u128 => {
                token.value = Some(TokenValue::Integer(magnitude as i64));
                token.data_type = Some(ValueType::Integer);
            }
            Ok(magnitude) if magnitude <= i64::MAX as u128 => {
                token.value = Some(TokenValue::Integer(magnitude as i64));
                token.data_type = Some(ValueType::Bigint);
            }
            _ => {
                token.value = Some(TokenValue::Numeric(SmolStr::new(canonical)));
                token.data_type = Some(ValueType::Numeric);
            }
        }
        token
    }

    /// Creates the end-of-text token at the given offset.
    pub fn end_of_text(offset: usize) -> Self {
        Self::bare(TokenKind::EndOfText, SmolStr::default(), offset..offset)
    }

    /// Creates a malformed token carrying the raw offending text.
    pub fn malformed(kind: MalformedKind, text: impl Into<SmolStr>, span: Span) -> Self {
        Self::bare(TokenKind::Malformed(kind), text.into(), span)
    }

    /// Attaches a qualifier chain (innermost first, at most three).
    pub fn with_qualifiers(mut self, qualifiers: Vec<SmolStr>) -> Self {
        debug_assert!(qualifiers.len() <= 3, "at most three name qualifiers");
        self.qualifiers = qualifiers;
        self
    }

    /// Attaches character-set qualifiers for diagnostics.
    pub fn with_charset(
        mut self,
        schema: Option<SmolStr>,
        name: Option<SmolStr>,
    ) -> Self {
        self.charset_schema = schema;
        self.charset_name = name;
        self
    }

    /// Marks the token as containing irregular identifier characters.
    pub fn with_irregular_char(mut self) -> Self {
        self.irregular_char = true;
        self
    }

    /// Returns the malformed subkind, if the token is malformed.
    pub fn malformed_kind(&self) -> Option<MalformedKind> {
        match self.kind {
            TokenKind::Malformed(kind) => Some(kind),
            _ => None,
        }
    }

    /// Returns true if the tokenizer flagged this token malformed.
    pub fn is_malformed(&self) -> bool {
        matches!(self.kind, TokenKind::Malformed(_))
    }

    /// The classification of a well-formed token, derived from the identity
    /// flags in precedence order.
    pub fn classification(&self) -> TokenClass {
        if self.reserved {
            TokenClass::Reserved
        } else if self.delimited {
            TokenClass::Delimited
        } else if self.undelimited {
            TokenClass::Undelimited
        } else if self.kind == TokenKind::Value {
            TokenClass::Value
        } else {
            TokenClass::Structural
        }
    }

    /// Returns the source slice covered by this token.
    pub fn slice<'a>(&self, source: &'a str) -> &'a str {
        &source[self.span.clone()]
    }
}

fn canonical_digits(digits: &str) -> &str {
    let trimmed = digits.trim_start_matches('0');
    if trimmed.is_empty() { "0" } else { trimmed }
}
