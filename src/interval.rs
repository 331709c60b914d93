//! Interval fields and the resolved interval type descriptor.

use crate::token::TokenKind;
use std::fmt;

/// General maximum for interval leading-field precision.
pub const MAX_INTERVAL_PRECISION: u32 = 9;

/// Maximum leading-field precision when the start field is SECOND.
pub const MAX_SECOND_INTERVAL_PRECISION: u32 = 12;

/// A datetime interval field.
///
/// The declaration order is the range-validation order: an interval type's
/// end field must not precede its start field, and the derived `Ord` is what
/// enforces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IntervalField {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
}

impl IntervalField {
    /// All fields in validation order.
    pub const FIELDS: [IntervalField; 6] = [
        IntervalField::Year,
        IntervalField::Month,
        IntervalField::Day,
        IntervalField::Hour,
        IntervalField::Minute,
        IntervalField::Second,
    ];

    /// Resolves a field keyword token to its field, if it is one.
    pub fn from_token(kind: TokenKind) -> Option<IntervalField> {
        match kind {
            TokenKind::Year => Some(IntervalField::Year),
            TokenKind::Month => Some(IntervalField::Month),
            TokenKind::Day => Some(IntervalField::Day),
            TokenKind::Hour => Some(IntervalField::Hour),
            TokenKind::Minute => Some(IntervalField::Minute),
            TokenKind::Second => Some(IntervalField::Second),
            _ => None,
        }
    }

    /// The field's index in the validation order.
    pub fn index(self) -> usize {
        self as usize
    }

    /// The precision ceiling used when a declaration omits it.
    pub fn max_precision(self) -> u32 {
        if self == IntervalField::Second {
            MAX_SECOND_INTERVAL_PRECISION
        } else {
            MAX_INTERVAL_PRECISION
        }
    }
}

impl fmt::Display for IntervalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            IntervalField::Year => "YEAR",
            IntervalField::Month => "MONTH",
            IntervalField::Day => "DAY",
            IntervalField::Hour => "HOUR",
            IntervalField::Minute => "MINUTE",
            IntervalField::Second => "SECOND",
        };
        write!(f, "{name}")
    }
}

/// A resolved interval type descriptor: immutable once constructed.
///
/// `precision` is the leading-field precision; `scale` is the fractional
/// seconds precision and is only ever present when one of the fields is
/// SECOND.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntervalType {
    pub start_field: IntervalField,
    pub end_field: IntervalField,
    pub precision: Option<u32>,
    pub scale: Option<u32>,
}

impl IntervalType {
    /// Creates a descriptor. Range validity is the reader's responsibility;
    /// this only asserts it in debug builds.
    pub fn new(
        start_field: IntervalField,
        end_field: IntervalField,
        precision: Option<u32>,
        scale: Option<u32>,
    ) -> Self {
        debug_assert!(start_field <= end_field, "interval range out of order");
        Self {
            start_field,
            end_field,
            precision,
            scale,
        }
    }

    /// True when the type spans two distinct fields.
    pub fn is_range(&self) -> bool {
        self.start_field != self.end_field
    }
}

impl fmt::Display for IntervalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "INTERVAL {}", self.start_field)?;
        match (self.precision, self.scale, self.is_range()) {
            (Some(p), Some(s), false) => write!(f, "({p},{s})")?,
            (Some(p), _, _) => write!(f, "({p})")?,
            _ => {}
        }
        if self.is_range() {
            write!(f, " TO {}", self.end_field)?;
            if let Some(s) = self.scale {
                write!(f, "({s})")?;
            }
        }
        Ok(())
    }
}
