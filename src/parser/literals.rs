//! Literal and type readers: signed integers at two widths, interval type
//! descriptors, and the speculative date-time/interval literal.

use super::{Mark, Parser};
use crate::diag::{ErrorCode, ParseResult};
use crate::interval::{IntervalField, IntervalType};
use crate::token::{TokenKind, TokenValue, ValueType};
use smol_str::SmolStr;

/// Decimal digits of one past `i64::MAX`, the magnitude of `i64::MIN`.
const BIGINT_MIN_MAGNITUDE: &str = "9223372036854775808";

/// A recognized date-time or interval literal.
///
/// The reader validates shape, not content: the raw value text is carried
/// unparsed for the engine's value layer to cook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateTimeLiteral {
    /// `DATE '...'`
    Date(SmolStr),
    /// `TIME '...'`
    Time(SmolStr),
    /// `TIMESTAMP '...'`
    Timestamp(SmolStr),
    /// `INTERVAL [ + | - ] <value> <interval qualifier>`
    Interval {
        value: SmolStr,
        negated: bool,
        interval_type: IntervalType,
    },
}

impl Parser<'_> {
    /// Reads a signed 32-bit integer literal.
    ///
    /// The magnitude of `i32::MIN` does not fit the positive 32-bit range
    /// and arrives with the 64-bit declared kind; it is legal only under a
    /// unary minus and is tested against the boundary before the sign is
    /// applied. Any other declared kind than the 32-bit one fails with
    /// code 42563.
    pub fn read_integer(&mut self) -> ParseResult<i32> {
        let minus = self.consume(TokenKind::Minus)?;
        self.check_value()?;

        let magnitude = match &self.token.value {
            Some(TokenValue::Integer(value)) => Some(*value),
            _ => None,
        };

        if minus
            && self.token.data_type == Some(ValueType::Bigint)
            && magnitude == Some(-(i32::MIN as i64))
        {
            self.advance()?;
            return Ok(i32::MIN);
        }

        match (self.token.data_type, magnitude) {
            (Some(ValueType::Integer), Some(value)) => {
                self.advance()?;
                Ok(if minus { -(value as i32) } else { value as i32 })
            }
            _ => Err(self.error_here(
                ErrorCode::InvalidNumericLiteral,
                "numeric literal out of range for INTEGER",
            )),
        }
    }

    /// Reads a signed 64-bit integer literal.
    ///
    /// Same two-step pattern as [`Self::read_integer`] one width up: the
    /// magnitude of `i64::MIN` arrives as an exact numeric whose canonical
    /// digits equal the boundary constant, and both integer declared kinds
    /// are in range otherwise.
    pub fn read_bigint(&mut self) -> ParseResult<i64> {
        let minus = self.consume(TokenKind::Minus)?;
        self.check_value()?;

        if minus
            && self.token.data_type == Some(ValueType::Numeric)
            && matches!(
                &self.token.value,
                Some(TokenValue::Numeric(digits)) if digits == BIGINT_MIN_MAGNITUDE
            )
        {
            self.advance()?;
            return Ok(i64::MIN);
        }

        let in_range = matches!(
            self.token.data_type,
            Some(ValueType::Integer) | Some(ValueType::Bigint)
        );
        match (&self.token.value, in_range) {
            (Some(TokenValue::Integer(value)), true) => {
                let value = *value;
                self.advance()?;
                Ok(if minus { -value } else { value })
            }
            _ => Err(self.error_here(
                ErrorCode::InvalidNumericLiteral,
                "numeric literal out of range for BIGINT",
            )),
        }
    }

    /// Reads an interval qualifier into its type descriptor.
    ///
    /// # Grammar
    ///
    /// ```text
    /// interval_qualifier ::=
    ///     start_field [ ( precision [ , scale ] ) ] [ TO end_field [ ( scale ) ] ]
    ///
    /// start_field, end_field ::=
    ///     YEAR | MONTH | DAY | HOUR | MINUTE | SECOND
    /// ```
    ///
    /// Precision must be positive. A scale is legal only against a SECOND
    /// field: inside the first parenthesis only when the start field is
    /// SECOND, and trailing only when the end field is SECOND and differs
    /// from the start field. The end field must not precede the start
    /// field in the ordering. When `max_precision_default` is set, an
    /// omitted precision defaults to the start field's maximum.
    pub fn read_interval_type(&mut self, max_precision_default: bool) -> ParseResult<IntervalType> {
        let start_field = self.read_interval_field()?;
        let mut end_field = start_field;
        let mut precision = None;
        let mut scale = None;

        if self.consume(TokenKind::LParen)? {
            let value = self.read_integer()?;
            if value <= 0 {
                return Err(self.error_here(
                    ErrorCode::PrecisionOutOfRange,
                    "interval precision must be positive",
                ));
            }
            precision = Some(value as u32);
            if self.at(TokenKind::Comma) {
                if start_field != IntervalField::Second {
                    return Err(self.error_here(
                        ErrorCode::PrecisionOutOfRange,
                        "interval scale applies only to SECOND",
                    ));
                }
                self.advance()?;
                scale = Some(self.read_scale()?);
            }
            self.expect(TokenKind::RParen)?;
        }

        if self.consume(TokenKind::To)? {
            end_field = self.read_interval_field()?;
        }

        if self.at(TokenKind::LParen) {
            if end_field != IntervalField::Second || end_field == start_field {
                return Err(self.error_here(
                    ErrorCode::PrecisionOutOfRange,
                    "interval scale applies only to a SECOND end field",
                ));
            }
            self.advance()?;
            scale = Some(self.read_scale()?);
            self.expect(TokenKind::RParen)?;
        }

        if start_field > end_field {
            return Err(self.error_here(
                ErrorCode::PrecisionOutOfRange,
                "interval end field precedes its start field",
            ));
        }

        if precision.is_none() && max_precision_default {
            precision = Some(start_field.max_precision());
        }

        Ok(IntervalType::new(start_field, end_field, precision, scale))
    }

    fn read_interval_field(&mut self) -> ParseResult<IntervalField> {
        let Some(field) = IntervalField::from_token(self.token.kind) else {
            return Err(self.unexpected_token());
        };
        self.advance()?;
        Ok(field)
    }

    fn read_scale(&mut self) -> ParseResult<u32> {
        let value = self.read_integer()?;
        if value < 0 {
            return Err(self.error_here(
                ErrorCode::PrecisionOutOfRange,
                "interval scale must not be negative",
            ));
        }
        Ok(value as u32)
    }

    /// Attempts to read a date-time or interval literal at a leading DATE,
    /// TIME, TIMESTAMP, or INTERVAL keyword.
    ///
    /// When the shape after the keyword does not materialize — no quoted
    /// string, or for INTERVAL neither a quoted string nor a bare 32-bit
    /// numeric — the cursor is reset to where it stood before the keyword
    /// and `Ok(None)` is returned so the caller can retry the same tokens
    /// under a different production. A malformed interval qualifier after
    /// a well-shaped INTERVAL value is a hard error, not a no-match.
    ///
    /// # Panics
    ///
    /// Panics when the current token is none of the four keywords; callers
    /// dispatch on the token kind first.
    pub fn read_datetime_interval_literal(&mut self) -> ParseResult<Option<DateTimeLiteral>> {
        let start = self.mark();

        match self.token.kind {
            TokenKind::Date => {
                self.advance()?;
                match self.quoted_literal_value() {
                    Some(value) => {
                        self.advance()?;
                        Ok(Some(DateTimeLiteral::Date(value)))
                    }
                    None => self.no_match(start),
                }
            }
            TokenKind::Time => {
                self.advance()?;
                match self.quoted_literal_value() {
                    Some(value) => {
                        self.advance()?;
                        Ok(Some(DateTimeLiteral::Time(value)))
                    }
                    None => self.no_match(start),
                }
            }
            TokenKind::Timestamp => {
                self.advance()?;
                match self.quoted_literal_value() {
                    Some(value) => {
                        self.advance()?;
                        Ok(Some(DateTimeLiteral::Timestamp(value)))
                    }
                    None => self.no_match(start),
                }
            }
            TokenKind::Interval => {
                self.advance()?;
                let mut negated = false;
                if self.at(TokenKind::Minus) {
                    self.advance()?;
                    negated = true;
                } else if self.at(TokenKind::Plus) {
                    self.advance()?;
                }

                // A bare integer value is accepted in addition to the
                // quoted string, but only with the 32-bit declared kind.
                let value = match (self.token.data_type, &self.token.value) {
                    (Some(ValueType::Character), Some(TokenValue::String(value))) => value.clone(),
                    (Some(ValueType::Integer), _) if self.is_value() => self.token.text.clone(),
                    _ => return self.no_match(start),
                };
                self.advance()?;

                let interval_type = self.read_interval_type(false)?;
                Ok(Some(DateTimeLiteral::Interval {
                    value,
                    negated,
                    interval_type,
                }))
            }
            _ => panic!(
                "read_datetime_interval_literal requires a DATE, TIME, TIMESTAMP, or INTERVAL token, found {}",
                self.token.kind
            ),
        }
    }

    fn quoted_literal_value(&self) -> Option<SmolStr> {
        match (&self.token.value, self.token.data_type) {
            (Some(TokenValue::String(value)), Some(ValueType::Character)) if self.is_value() => {
                Some(value.clone())
            }
            _ => None,
        }
    }

    fn no_match<T>(&mut self, start: Mark) -> ParseResult<Option<T>> {
        self.reset(start);
        Ok(None)
    }
}
