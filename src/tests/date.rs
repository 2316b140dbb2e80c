use crate::tests::{id_opts, pattern_opts, style_opts};
use crate::{format_date, DateTime, Error, NameVariant, Options, Prefer, Style};

fn check_date(dt: &DateTime, opts: &Options<'_>, expected: &str) {
    assert_eq!(format_date(dt, opts).as_deref(), Ok(expected));
}

#[test]
#[rustfmt::skip]
fn test_date_styles_en() {
    let date = DateTime::ymd(2000, 1, 1);

    check_date(&date, &style_opts("en", Style::Short),  "1/1/00");
    check_date(&date, &style_opts("en", Style::Medium), "Jan 1, 2000");
    check_date(&date, &style_opts("en", Style::Long),   "January 1, 2000");
    check_date(&date, &style_opts("en", Style::Full),   "Saturday, January 1, 2000");
}

#[test]
#[rustfmt::skip]
fn test_date_styles_fr() {
    let date = DateTime::ymd(2024, 6, 3);

    check_date(&date, &style_opts("fr", Style::Short),  "03/06/2024");
    check_date(&date, &style_opts("fr", Style::Medium), "3 juin 2024");
    check_date(&date, &style_opts("fr", Style::Long),   "3 juin 2024");
    check_date(&date, &style_opts("fr", Style::Full),   "lundi 3 juin 2024");
}

#[test]
fn test_date_default_is_medium() {
    let date = DateTime::ymd(2024, 6, 3);
    check_date(&date, &Options::default(), "Jun 3, 2024");
    check_date(&date, &Options::locale("fr"), "3 juin 2024");
}

#[test]
fn test_regional_tag_falls_back_to_language() {
    let date = DateTime::ymd(2024, 6, 3);
    check_date(&date, &Options::locale("en-US"), "Jun 3, 2024");
    check_date(&date, &Options::locale("fr_CA"), "3 juin 2024");
}

#[test]
#[rustfmt::skip]
fn test_year_run_lengths() {
    let times = [
        DateTime::ymd(5, 1, 1),
        DateTime::ymd(1999, 1, 1),
        DateTime::ymd(2024, 1, 1),
    ];

    check_date(&times[0], &pattern_opts("en", "y"),     "5");
    check_date(&times[0], &pattern_opts("en", "yy"),    "05");
    check_date(&times[0], &pattern_opts("en", "yyyy"),  "0005");
    check_date(&times[0], &pattern_opts("en", "yyyyy"), "00005");
    check_date(&times[1], &pattern_opts("en", "y"),     "1999");
    check_date(&times[1], &pattern_opts("en", "yy"),    "99");
    check_date(&times[1], &pattern_opts("en", "yyyy"),  "1999");
    check_date(&times[2], &pattern_opts("en", "yy"),    "24");
}

#[test]
fn test_negative_years_render_through_the_era() {
    // Year -44 is 45 BC; the era symbol carries the sign.
    let date = DateTime::ymd(-44, 3, 15);
    check_date(&date, &pattern_opts("en", "y G"), "45 BC");
    check_date(&date, &pattern_opts("en", "yyyy G"), "0045 BC");
    check_date(&date, &pattern_opts("en", "y GGGG"), "45 Before Christ");
    check_date(&date, &pattern_opts("en", "y GGGGG"), "45 B");
}

#[test]
fn test_era_variant_option() {
    let date = DateTime::ymd(2024, 6, 3);
    let mut opts = id_opts("en", "Gy");
    check_date(&date, &opts, "2024 AD");
    opts.era = NameVariant::Variant;
    check_date(&date, &opts, "2024 CE");
}

#[test]
#[rustfmt::skip]
fn test_month_run_lengths() {
    let date = DateTime::ymd(2024, 6, 3);

    check_date(&date, &pattern_opts("en", "M"),     "6");
    check_date(&date, &pattern_opts("en", "MM"),    "06");
    check_date(&date, &pattern_opts("en", "MMM"),   "Jun");
    check_date(&date, &pattern_opts("en", "MMMM"),  "June");
    check_date(&date, &pattern_opts("en", "MMMMM"), "J");
    check_date(&date, &pattern_opts("fr", "MMM"),   "juin");
    check_date(&date, &pattern_opts("fr", "MMMM"),  "juin");
}

#[test]
#[rustfmt::skip]
fn test_weekday_run_lengths() {
    // 2024-06-03 is a Monday.
    let date = DateTime::ymd(2024, 6, 3);

    check_date(&date, &pattern_opts("en", "E"),      "Mon");
    check_date(&date, &pattern_opts("en", "EEEE"),   "Monday");
    check_date(&date, &pattern_opts("en", "EEEEE"),  "M");
    check_date(&date, &pattern_opts("en", "EEEEEE"), "Mo");
    check_date(&date, &pattern_opts("fr", "EEEE"),   "lundi");
}

#[test]
fn test_numeric_weekday_honors_week_start() {
    // 2024-06-03 is a Monday: second day of the en week, first of the fr one.
    let date = DateTime::ymd(2024, 6, 3);
    check_date(&date, &pattern_opts("en", "e"), "2");
    check_date(&date, &pattern_opts("fr", "e"), "1");

    let sunday = DateTime::ymd(2024, 6, 9);
    check_date(&sunday, &pattern_opts("en", "e"), "1");
    check_date(&sunday, &pattern_opts("fr", "e"), "7");
}

#[test]
#[rustfmt::skip]
fn test_quarters(){
    let date = DateTime::ymd(2024, 6, 3);

    check_date(&date, &pattern_opts("en", "Q"),    "2");
    check_date(&date, &pattern_opts("en", "QQ"),   "02");
    check_date(&date, &pattern_opts("en", "QQQ"),  "Q2");
    check_date(&date, &pattern_opts("en", "QQQQ"), "2nd quarter");
    check_date(&date, &pattern_opts("fr", "QQQQ"), "2e trimestre");
    check_date(&date, &pattern_opts("fr", "qqq"),  "T2");
}

#[test]
#[rustfmt::skip]
fn test_week_and_ordinal_fields() {
    let date = DateTime::ymd(2024, 6, 3);

    check_date(&date, &pattern_opts("en", "w"),  "23");
    check_date(&date, &pattern_opts("en", "ww"), "23");
    check_date(&date, &pattern_opts("en", "W"),  "2");
    check_date(&date, &pattern_opts("en", "D"),  "155");
    check_date(&date, &pattern_opts("en", "F"),  "1");

    // 2005-01-01 belongs to ISO week 53 of 2004.
    let new_year = DateTime::ymd(2005, 1, 1);
    check_date(&new_year, &pattern_opts("en", "YYYY"), "2004");
    check_date(&new_year, &pattern_opts("en", "ww"),   "53");
}

#[test]
fn test_skeleton_match_year_month() {
    let partial = DateTime {
        year: Some(2024),
        month: Some(6),
        ..DateTime::default()
    };
    check_date(&partial, &Options::locale("fr"), "06/2024");
    check_date(&partial, &Options::locale("en"), "6/2024");
}

#[test]
fn test_skeleton_match_failure_names_the_skeleton() {
    let partial = DateTime {
        year: Some(2024),
        day: Some(3),
        ..DateTime::default()
    };
    assert_eq!(
        format_date(&partial, &Options::locale("fr")),
        Err(Error::UnresolvedFormat("dy".into()))
    );
}

#[test]
fn test_named_formats() {
    let date = DateTime::ymd(2024, 6, 3);
    check_date(&date, &id_opts("en", "yMMM"), "Jun 2024");
    check_date(&date, &id_opts("en", "yMMMEd"), "Mon, Jun 3, 2024");
    check_date(&date, &id_opts("fr", "yMMM"), "juin 2024");
    check_date(&date, &id_opts("fr", "MMMMd"), "3 juin");

    assert_eq!(
        format_date(&date, &id_opts("en", "yQ")),
        Err(Error::UnknownFormat("yQ".into()))
    );
}

#[test]
fn test_named_format_variant_preference() {
    let date = DateTime::ymd(2024, 6, 3);
    let mut opts = id_opts("fr", "MMMMd");
    check_date(&date, &opts, "3 juin");
    opts.prefer = Prefer::VARIANT;
    check_date(&date, &opts, "le 3 juin");
}

#[test]
fn test_stand_alone_context() {
    let date = DateTime::ymd(2024, 6, 3);
    check_date(&date, &pattern_opts("en", "LLLL"), "June");
    check_date(&date, &pattern_opts("en", "cccc"), "Monday");
}

#[test]
fn test_number_system_override() {
    let date = DateTime::ymd(2024, 6, 3);
    let opts = Options {
        number_system: Some("arab"),
        ..style_opts("en", Style::Short)
    };
    assert_eq!(format_date(&date, &opts).unwrap(), "٦/٣/٢٤");

    let bad = Options {
        number_system: Some("roman"),
        ..Options::default()
    };
    assert_eq!(
        format_date(&date, &bad),
        Err(Error::InvalidNumberSystem("roman".into()))
    );
}

#[test]
fn test_quoted_literals_in_patterns() {
    let date = DateTime::ymd(2024, 6, 3);
    check_date(&date, &pattern_opts("en", "'week' w 'of' y"), "week 23 of 2024");
    check_date(&date, &pattern_opts("en", "d''y"), "3'2024");
}

#[test]
fn test_pattern_syntax_errors() {
    let date = DateTime::ymd(2024, 6, 3);
    assert_eq!(
        format_date(&date, &pattern_opts("en", "")),
        Err(Error::EmptyPattern)
    );
    assert_eq!(
        format_date(&date, &pattern_opts("en", "y 'oops")),
        Err(Error::BadQuote)
    );
}

#[test]
fn test_missing_fields() {
    let empty = DateTime::default();
    assert_eq!(
        format_date(&empty, &Options::default()),
        Err(Error::InsufficientFields("year"))
    );

    // A pattern needing a field the instant lacks names that field.
    let partial = DateTime {
        year: Some(2024),
        ..DateTime::default()
    };
    assert_eq!(
        format_date(&partial, &pattern_opts("en", "y-MM")),
        Err(Error::InsufficientFields("month"))
    );
}

#[test]
fn test_unknown_locale_and_calendar() {
    let date = DateTime::ymd(2024, 6, 3);
    assert_eq!(
        format_date(&date, &Options::locale("tlh")),
        Err(Error::UnknownLocale("tlh".into()))
    );

    let buddhist = DateTime::ymd(2567, 6, 3).with_calendar(crate::Calendar::Buddhist);
    assert_eq!(
        format_date(&buddhist, &Options::default()),
        Err(Error::UnknownCalendar("buddhist"))
    );
}
