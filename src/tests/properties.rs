use quickcheck_macros::quickcheck;

use crate::interval::greatest_difference;
use crate::tests::pattern_opts;
use crate::{format_date, format_interval, format_time, DateTime, Options};

/// Clamp arbitrary bytes into a valid date.
fn arbitrary_date(year: i16, month: u8, day: u8) -> DateTime {
    DateTime::ymd(i32::from(year % 3000), month % 12 + 1, day % 28 + 1)
}

/// Clamp arbitrary bytes into a valid time of day.
fn arbitrary_time(hour: u8, minute: u8, second: u8) -> DateTime {
    DateTime::hms(hour % 24, minute % 60, second % 60)
}

#[quickcheck]
fn test_formatting_is_deterministic(year: i16, month: u8, day: u8) -> bool {
    let date = arbitrary_date(year, month, day);
    let opts = Options::default();
    format_date(&date, &opts) == format_date(&date, &opts)
}

#[quickcheck]
fn test_numeric_padding_is_exact(minute: u8) -> bool {
    let minute = minute % 60;
    let time = DateTime {
        minute: Some(minute),
        ..DateTime::default()
    };
    let padded = format_time(&time, &pattern_opts("en", "mm")).unwrap();
    let natural = format_time(&time, &pattern_opts("en", "m")).unwrap();

    padded.len() == 2
        && padded.parse::<u8>() == Ok(minute)
        && natural == minute.to_string()
}

#[quickcheck]
fn test_rendering_distributes_over_literal_splits(year: i16, month: u8, day: u8) -> bool {
    let date = arbitrary_date(year, month, day);
    let left = format_date(&date, &pattern_opts("en", "yyyy-MM")).unwrap();
    let right = format_date(&date, &pattern_opts("en", "-dd")).unwrap();
    let whole = format_date(&date, &pattern_opts("en", "yyyy-MM-dd")).unwrap();
    format!("{left}{right}") == whole
}

#[quickcheck]
fn test_greatest_difference_is_symmetric(
    a: (u8, u8, u8),
    b: (u8, u8, u8),
) -> bool {
    let from = arbitrary_time(a.0, a.1, a.2);
    let to = arbitrary_time(b.0, b.1, b.2);
    greatest_difference(&from, &to) == greatest_difference(&to, &from)
}

#[quickcheck]
fn test_equal_tracked_fields_reduce_to_a_single_value(hour: u8, minute: u8, second: u8) -> bool {
    let from = arbitrary_time(hour, minute, second);
    // Same hour and minute, a later second: below tracked resolution.
    let to = DateTime {
        second: from.second.map(|second| (second + 1).min(59)),
        ..from.clone()
    };
    let opts = Options::default();

    greatest_difference(&from, &to).is_none()
        && format_interval(Some(&from), Some(&to), &opts) == format_time(&from, &opts)
}

#[quickcheck]
fn test_transliteration_commutes_with_rendering(year: i16, month: u8, day: u8) -> bool {
    let date = arbitrary_date(year, month, day);
    let latin = format_date(&date, &Options::default()).unwrap();
    let opts = Options {
        number_system: Some("arab"),
        ..Options::default()
    };
    crate::numbers::transliterate(&latin, "arab").unwrap() == format_date(&date, &opts).unwrap()
}
