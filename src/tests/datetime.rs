use crate::tests::{id_opts, pattern_opts, style_opts};
use crate::{
    format_datetime, DateTime, Error, Format, Options, RenderStyle, Style,
};

fn check_datetime(dt: &DateTime, opts: &Options<'_>, expected: &str) {
    assert_eq!(format_datetime(dt, opts).as_deref(), Ok(expected));
}

fn millennium() -> DateTime {
    DateTime::new(2000, 1, 1, 23, 59, 59).with_zone("Etc/UTC", "UTC", 0)
}

#[test]
fn test_full_datetime_en() {
    check_datetime(
        &millennium(),
        &style_opts("en", Style::Full),
        "Saturday, January 1, 2000, 11:59:59 PM GMT",
    );
}

#[test]
fn test_full_datetime_fr() {
    check_datetime(
        &millennium(),
        &style_opts("fr", Style::Full),
        "samedi 1 janvier 2000, 23:59:59 UTC",
    );
}

#[test]
#[rustfmt::skip]
fn test_datetime_styles() {
    let dt = DateTime::new(2024, 6, 3, 10, 30, 0);

    check_datetime(&dt, &style_opts("en", Style::Short),  "6/3/24, 10:30 AM");
    check_datetime(&dt, &style_opts("en", Style::Medium), "Jun 3, 2024, 10:30:00 AM");
    check_datetime(&dt, &Options::default(),              "Jun 3, 2024, 10:30:00 AM");
    check_datetime(&dt, &style_opts("fr", Style::Short),  "03/06/2024, 10:30");
    check_datetime(&dt, &Options::locale("fr"),           "3 juin 2024, 10:30:00");
}

#[test]
fn test_at_style_templates() {
    let dt = DateTime::new(2024, 6, 3, 10, 30, 0);
    let opts = Options {
        style: RenderStyle::At,
        time_format: Some(Format::Style(Style::Medium)),
        ..style_opts("en", Style::Long)
    };
    check_datetime(&dt, &opts, "June 3, 2024 at 10:30:00 AM");

    let opts = Options {
        style: RenderStyle::At,
        time_format: Some(Format::Style(Style::Medium)),
        ..style_opts("fr", Style::Long)
    };
    check_datetime(&dt, &opts, "3 juin 2024 à 10:30:00");
}

#[test]
fn test_portion_overrides() {
    let dt = DateTime::new(2024, 6, 3, 10, 30, 0);
    let opts = Options {
        date_format: Some(Format::Style(Style::Full)),
        time_format: Some(Format::Style(Style::Short)),
        ..style_opts("en", Style::Medium)
    };
    check_datetime(&dt, &opts, "Monday, June 3, 2024, 10:30 AM");

    let opts = Options {
        time_format: Some(Format::Pattern("HH'h'mm")),
        ..style_opts("en", Style::Medium)
    };
    check_datetime(&dt, &opts, "Jun 3, 2024, 10h30");
}

#[test]
fn test_overrides_require_style_format() {
    let dt = DateTime::new(2024, 6, 3, 10, 30, 0);
    let opts = Options {
        date_format: Some(Format::Style(Style::Full)),
        ..pattern_opts("en", "y-MM-dd HH:mm")
    };
    assert!(matches!(
        format_datetime(&dt, &opts),
        Err(Error::InvalidFormat(_))
    ));
}

#[test]
fn test_literal_pattern_covers_the_whole_instant() {
    let dt = DateTime::new(2024, 6, 3, 10, 30, 0).with_utc_offset(7200);
    check_datetime(
        &dt,
        &pattern_opts("en", "y-MM-dd'T'HH:mm:ssxxx"),
        "2024-06-03T10:30:00+02:00",
    );
}

#[test]
fn test_named_format_covers_the_whole_instant() {
    let dt = DateTime::new(2024, 6, 3, 10, 30, 0);
    check_datetime(&dt, &id_opts("en", "EHm"), "Mon 10:30");
}

#[test]
fn test_partial_portions_resolve_through_skeletons() {
    // Year+month date part, hour+minute time part.
    let dt = DateTime {
        year: Some(2024),
        month: Some(6),
        hour: Some(10),
        minute: Some(30),
        ..DateTime::default()
    };
    check_datetime(&dt, &Options::locale("fr"), "06/2024, 10:30");
}

#[test]
fn test_datetime_requires_both_portions() {
    assert_eq!(
        format_datetime(&DateTime::ymd(2024, 6, 3), &Options::default()),
        Err(Error::InsufficientFields("hour"))
    );
    assert_eq!(
        format_datetime(&DateTime::hms(10, 30, 0), &Options::default()),
        Err(Error::InsufficientFields("year"))
    );
}
