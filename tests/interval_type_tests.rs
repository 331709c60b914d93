//! Tests for interval qualifier parsing: field ranges, precision and scale
//! placement, and their failure codes.

mod common;

use common::{assert_error_code, parser_for};
use sqlfront::{ErrorCode, IntervalField, IntervalType};

#[test]
fn single_fields_parse_with_and_without_defaults() {
    let descriptor = parser_for("year").read_interval_type(false).unwrap();
    assert_eq!(
        descriptor,
        IntervalType::new(IntervalField::Year, IntervalField::Year, None, None)
    );

    let descriptor = parser_for("year").read_interval_type(true).unwrap();
    assert_eq!(descriptor.precision, Some(9));

    let descriptor = parser_for("second").read_interval_type(true).unwrap();
    assert_eq!(descriptor.precision, Some(12));
}

#[test]
fn explicit_precision_suppresses_the_default() {
    let descriptor = parser_for("second(3)").read_interval_type(true).unwrap();
    assert_eq!(descriptor.precision, Some(3));
    assert_eq!(descriptor.scale, None);
}

#[test]
fn second_takes_a_precision_scale_pair() {
    let descriptor = parser_for("second(4,2)").read_interval_type(true).unwrap();
    assert_eq!(
        descriptor,
        IntervalType::new(IntervalField::Second, IntervalField::Second, Some(4), Some(2))
    );
}

#[test]
fn ranged_qualifiers_cover_both_fields() {
    let descriptor = parser_for("day to hour").read_interval_type(false).unwrap();
    assert_eq!(descriptor.start_field, IntervalField::Day);
    assert_eq!(descriptor.end_field, IntervalField::Hour);

    let descriptor = parser_for("minute to second(3)")
        .read_interval_type(false)
        .unwrap();
    assert_eq!(descriptor.end_field, IntervalField::Second);
    assert_eq!(descriptor.scale, Some(3));

    let descriptor = parser_for("day(5) to second(6)")
        .read_interval_type(true)
        .unwrap();
    assert_eq!(
        descriptor,
        IntervalType::new(IntervalField::Day, IntervalField::Second, Some(5), Some(6))
    );
}

#[test]
fn leading_scale_needs_a_second_start_field() {
    let err = parser_for("month(2,3)").read_interval_type(true).unwrap_err();
    assert_error_code(&err, ErrorCode::PrecisionOutOfRange);
}

#[test]
fn trailing_scale_needs_a_distinct_second_end_field() {
    let err = parser_for("day to hour(2)")
        .read_interval_type(true)
        .unwrap_err();
    assert_error_code(&err, ErrorCode::PrecisionOutOfRange);

    // A degenerate SECOND TO SECOND range cannot take a trailing scale
    // either; the single-field form carries it in the first parenthesis.
    let err = parser_for("second to second(3)")
        .read_interval_type(true)
        .unwrap_err();
    assert_error_code(&err, ErrorCode::PrecisionOutOfRange);
}

#[test]
fn precision_must_be_positive() {
    for source in ["day(0)", "day(- 1)"] {
        let err = parser_for(source).read_interval_type(true).unwrap_err();
        assert_error_code(&err, ErrorCode::PrecisionOutOfRange);
    }
}

#[test]
fn scale_must_be_nonnegative() {
    let err = parser_for("second(2, - 1)")
        .read_interval_type(true)
        .unwrap_err();
    assert_error_code(&err, ErrorCode::PrecisionOutOfRange);
}

#[test]
fn end_field_must_not_precede_the_start() {
    let err = parser_for("hour to year").read_interval_type(true).unwrap_err();
    assert_error_code(&err, ErrorCode::PrecisionOutOfRange);
}

#[test]
fn non_field_tokens_are_unexpected() {
    let err = parser_for("fortnight").read_interval_type(true).unwrap_err();
    assert_error_code(&err, ErrorCode::UnexpectedToken);

    let err = parser_for("year to fortnight")
        .read_interval_type(true)
        .unwrap_err();
    assert_error_code(&err, ErrorCode::UnexpectedToken);
    assert_eq!(err.message, "unexpected token: fortnight");
}

#[test]
fn unclosed_precision_names_the_required_token() {
    let err = parser_for("day(5 to second")
        .read_interval_type(true)
        .unwrap_err();
    assert_error_code(&err, ErrorCode::UnexpectedToken);
    assert_eq!(err.message, "unexpected token: to, required: )");
}
