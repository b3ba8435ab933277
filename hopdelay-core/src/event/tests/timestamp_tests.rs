use crate::event::error::RecordError;
use crate::event::timestamp::{ReferenceDate, parse_epoch};
use crate::event::types::TimeUnit;
use chrono::NaiveDate;
use pretty_assertions::assert_eq;

fn aug_24() -> NaiveDate {
    NaiveDate::from_ymd_opt(2021, 8, 24).unwrap()
}

fn epoch_nanos(h: u32, m: u32, s: u32) -> i64 {
    aug_24().and_hms_opt(h, m, s).unwrap().and_utc().timestamp() * 1_000_000_000
}

#[test]
fn clock_field_with_microsecond_suffix() {
    // Arrange
    let reference = ReferenceDate::utc(aug_24());

    // Act
    let ts = reference
        .parse_clock("Aug 24, 2021 09:30:01.123456 CST")
        .unwrap();

    // Assert
    assert_eq!(ts.as_nanos(), epoch_nanos(9, 30, 1) + 123_456_000);
}

#[test]
fn suffixes_of_different_widths_subtract_in_nanoseconds() {
    // Arrange
    let reference = ReferenceDate::utc(aug_24());

    // Act
    let short = reference.parse_clock("09:30:01.5").unwrap();
    let long = reference.parse_clock("09:30:01.500001").unwrap();

    // Assert
    assert_eq!(short.delay_to(long), 1_000);
}

#[test]
fn nanosecond_suffix_is_kept_verbatim() {
    let reference = ReferenceDate::utc(aug_24());

    let ts = reference.parse_clock("09:30:01.000000007").unwrap();

    assert_eq!(ts.as_nanos(), epoch_nanos(9, 30, 1) + 7);
}

#[test]
fn field_without_suffix_has_zero_fraction() {
    let reference = ReferenceDate::utc(aug_24());

    let ts = reference.parse_clock("at 23:59:59 local").unwrap();

    assert_eq!(ts.as_nanos(), epoch_nanos(23, 59, 59));
}

#[test]
fn utc_offset_shifts_absolute_time() {
    // Arrange
    let utc = ReferenceDate::utc(aug_24());
    let shanghai = ReferenceDate::with_offset(aug_24(), 480).unwrap();

    // Act
    let a = utc.parse_clock("09:30:01.1").unwrap();
    let b = shanghai.parse_clock("09:30:01.1").unwrap();

    // Assert
    assert_eq!(a.as_nanos() - b.as_nanos(), 8 * 3600 * 1_000_000_000);
    assert_eq!(shanghai.utc_offset_minutes(), 480);
}

#[test]
fn offset_beyond_a_day_is_rejected() {
    assert!(ReferenceDate::with_offset(aug_24(), 24 * 60).is_none());
}

#[test]
fn missing_clock_time_is_reported() {
    let reference = ReferenceDate::utc(aug_24());

    let err = reference.parse_clock("no time here.123").unwrap_err();

    assert_eq!(
        err,
        RecordError::TimePatternNotFound {
            value: "no time here.123".to_string()
        }
    );
}

#[test]
fn impossible_clock_time_is_reported() {
    let reference = ReferenceDate::utc(aug_24());

    let err = reference.parse_clock("25:61:00.1").unwrap_err();

    assert_eq!(
        err,
        RecordError::InvalidClockTime {
            value: "25:61:00".to_string()
        }
    );
}

#[test]
fn overlong_or_non_numeric_suffix_is_rejected() {
    let reference = ReferenceDate::utc(aug_24());

    assert!(matches!(
        reference.parse_clock("09:30:01.1234567890"),
        Err(RecordError::InvalidFraction { .. })
    ));
    assert!(matches!(
        reference.parse_clock("09:30:01.12ab"),
        Err(RecordError::InvalidFraction { .. })
    ));
}

#[test]
fn epoch_field_is_scaled_by_unit() {
    let ts = parse_epoch(" 1629797401123456 ", TimeUnit::Us).unwrap();

    assert_eq!(ts.as_nanos(), 1_629_797_401_123_456_000);
}

#[test]
fn epoch_field_must_be_numeric() {
    for value in ["abc", "", ".5", "12x.5", "--3"] {
        assert!(
            matches!(parse_epoch(value, TimeUnit::Ns), Err(RecordError::InvalidEpoch { .. })),
            "{value:?} should be rejected"
        );
    }
}

#[test]
fn epoch_seconds_with_fraction_are_exact() {
    // Act
    let ts = parse_epoch("1629790000.123456789", TimeUnit::S).unwrap();

    // Assert
    assert_eq!(ts.as_nanos(), 1_629_790_000_123_456_789);
}

#[test]
fn epoch_fraction_widths_scale_to_the_unit() {
    assert_eq!(
        parse_epoch("1629790000.5", TimeUnit::S).unwrap().as_nanos(),
        1_629_790_000_500_000_000
    );
    assert_eq!(parse_epoch("12.25", TimeUnit::Ms).unwrap().as_nanos(), 12_250_000);
    assert_eq!(parse_epoch("-1.5", TimeUnit::Us).unwrap().as_nanos(), -1_500);
    assert_eq!(parse_epoch("7.9", TimeUnit::Ns).unwrap().as_nanos(), 7);
}

#[test]
fn epoch_fraction_longer_than_nanoseconds_is_rejected() {
    assert!(matches!(
        parse_epoch("1629790000.1234567891", TimeUnit::S),
        Err(RecordError::InvalidFraction { .. })
    ));
}

#[test]
fn epoch_overflow_is_reported() {
    assert!(matches!(
        parse_epoch("9223372036854775807", TimeUnit::S),
        Err(RecordError::TimestampOutOfRange { .. })
    ));
}
