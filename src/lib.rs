#![forbid(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::cargo)]
#![allow(clippy::cast_possible_truncation)]
#![allow(unknown_lints)]
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unsafe_op_in_unsafe_fn)]
#![warn(unused_qualifications)]
#![warn(variant_size_differences)]
// Enable feature callouts in generated documentation:
// https://doc.rust-lang.org/beta/unstable-book/language-features/doc-cfg.html
//
// This approach is borrowed from tokio.
#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(docsrs, feature(doc_alias))]

/*!
This crate formats dates, times, datetimes, intervals and relative-time
expressions according to the pattern and data conventions of [Unicode TR35]
and CLDR. An instant decomposed into calendar fields, a locale tag, and a
format selector produce a localized string.

Patterns are strings over the TR35 field alphabet: a run of the same letter
is one field directive whose run length selects its form, quoted text is
literal, and `''` is a literal apostrophe.

```text
"EEEE, MMMM d, y"  →  "Saturday, January 1, 2000"
```

## Field symbols

| Symbol | Runs | Description                                                                   |
|--------|------|-------------------------------------------------------------------------------|
| `G`    | 1–5  | Era: abbreviated at 1–3, wide at 4, narrow at 5.                              |
| `y`    | any  | Year of the era; `yy` is the zero-padded two-digit year.                      |
| `Y`    | any  | ISO 8601 week-based year.                                                     |
| `u`    | any  | Extended year, signed.                                                        |
| `Q`/`q`| 1–5  | Quarter, numeric at 1–2, then abbreviated, wide, narrow. `q` is stand-alone.  |
| `M`/`L`| 1–5  | Month, numeric at 1–2, then abbreviated, wide, narrow. `L` is stand-alone.    |
| `w`/`W`| 1–2  | Week of the year / week of the month.                                         |
| `d`    | 1–2  | Day of the month.                                                             |
| `D`    | 1–3  | Day of the year.                                                              |
| `F`    | 1    | Day of the week in the month.                                                 |
| `E`    | 1–6  | Weekday: abbreviated at 1–3, wide at 4, narrow at 5, short at 6.              |
| `e`/`c`| 1–6  | Weekday, numeric at 1–2 relative to the locale week start; `c` stand-alone.   |
| `a`    | 1–5  | AM/PM.                                                                        |
| `b`    | 1–5  | As `a`, plus `noon` and `midnight` on the exact hour.                         |
| `B`    | 1–5  | Flexible day period, e.g. "in the morning".                                   |
| `h`/`H`| 1–2  | Hour 1–12 / 0–23.                                                             |
| `K`/`k`| 1–2  | Hour 0–11 / 1–24.                                                             |
| `m`    | 1–2  | Minute.                                                                       |
| `s`    | 1–2  | Second.                                                                       |
| `S`    | any  | Fractional second, truncated to the run length.                               |
| `A`    | any  | Milliseconds in the day.                                                      |
| `z`    | 1–4  | Zone abbreviation, falling back to the localized GMT format.                  |
| `Z`    | 1–5  | ISO 8601 basic at 1–3, localized GMT at 4, extended ISO at 5.                 |
| `O`    | 1, 4 | Localized GMT, short and long.                                                |
| `v`    | 1, 4 | Generic zone, falling back to localized GMT.                                  |
| `V`    | 1–4  | Zone abbreviation, zone ID, exemplar city, generic location.                  |
| `X`/`x`| 1–5  | ISO 8601 forms, with and without `Z` for a zero offset.                       |

## Examples

```
use cldr_datetime::{format_datetime, DateTime, Format, Options, Style};

let dt = DateTime::new(2000, 1, 1, 23, 59, 59).with_zone("Etc/UTC", "UTC", 0);
let opts = Options {
    locale: "en",
    format: Some(Format::Style(Style::Full)),
    ..Options::default()
};
let formatted = format_datetime(&dt, &opts)?;
assert_eq!(formatted, "Saturday, January 1, 2000, 11:59:59 PM GMT");
# Ok::<(), cldr_datetime::Error>(())
```

Intervals select a compact pattern anchored on the greatest differing field,
and relative expressions scale a delta into a localized phrase:

```
use cldr_datetime::{format_interval, format_relative, DateTime, Options, Unit};

let from = DateTime::hms(10, 0, 0);
let to = DateTime::hms(10, 3, 0);
assert_eq!(
    format_interval(Some(&from), Some(&to), &Options::default())?,
    "10:00 – 10:03 AM",
);

let opts = Options {
    unit: Some(Unit::Day),
    ..Options::default()
};
assert_eq!(format_relative(-1, &opts)?, "yesterday");
# Ok::<(), cldr_datetime::Error>(())
```

[Unicode TR35]: <https://unicode.org/reports/tr35/tr35-dates.html>
*/

#![doc(html_root_url = "https://docs.rs/cldr-datetime/0.1.0")]

mod assert;
mod calendar;
mod datetime;
mod interval;
mod locale;
mod numbers;
mod options;
mod pattern;
mod relative;
mod render;
mod resolve;

#[cfg(test)]
mod tests;

use core::fmt;

pub use calendar::Calendar;
pub use datetime::DateTime;
pub use options::{Format, NameVariant, Options, Prefer, RenderStyle, Style, Unit};

use render::Renderer;
use resolve::Kind;

/// Error type returned by the formatting functions.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Error {
    /// The locale tag resolves to no loaded locale data.
    UnknownLocale(String),
    /// The instant's calendar is not covered by the locale's data.
    UnknownCalendar(&'static str),
    /// A named format is absent from the locale's available formats.
    UnknownFormat(String),
    /// The skeleton matcher found no candidate covering the present fields.
    UnresolvedFormat(String),
    /// A style was given outside the accepted set.
    InvalidStyle(&'static str),
    /// The option combination is contradictory.
    InvalidFormat(&'static str),
    /// A pattern contains an unterminated quote.
    BadQuote,
    /// A pattern is empty.
    EmptyPattern,
    /// The number system is unknown.
    InvalidNumberSystem(String),
    /// An interval's endpoints are not in ascending order.
    IntervalOrder,
    /// An interval's endpoints carry different time zones.
    IncompatibleTimezone,
    /// An interval's endpoints are equal at the coarsest tracked resolution.
    ///
    /// This never escapes the public functions: [`format_interval`] renders
    /// such an interval as a single value instead.
    NoPracticalDifference,
    /// The relative-time unit is outside the recognized set for the locale.
    UnknownTimeUnit(&'static str),
    /// The instant lacks a field the resolved format needs.
    InsufficientFields(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownLocale(tag) => write!(f, "unknown locale {tag:?}"),
            Error::UnknownCalendar(calendar) => {
                write!(f, "calendar {calendar:?} is not covered by the locale")
            }
            Error::UnknownFormat(name) => write!(f, "unknown format {name:?}"),
            Error::UnresolvedFormat(skeleton) => {
                write!(f, "no available format resolves skeleton {skeleton:?}")
            }
            Error::InvalidStyle(message) | Error::InvalidFormat(message) => f.write_str(message),
            Error::BadQuote => f.write_str("pattern has an unterminated quote"),
            Error::EmptyPattern => f.write_str("pattern is empty"),
            Error::InvalidNumberSystem(name) => write!(f, "unknown number system {name:?}"),
            Error::IntervalOrder => f.write_str("interval endpoints are out of order"),
            Error::IncompatibleTimezone => {
                f.write_str("interval endpoints have different time zones")
            }
            Error::NoPracticalDifference => {
                f.write_str("interval endpoints do not differ in any tracked field")
            }
            Error::UnknownTimeUnit(unit) => write!(f, "unknown time unit {unit:?}"),
            Error::InsufficientFields(field) => {
                write!(f, "instant is missing the {field} field")
            }
        }
    }
}

impl std::error::Error for Error {}

/// Format the date portion of an instant.
///
/// At least one of year, month or day must be present; partial dates resolve
/// through skeleton matching when no explicit format is given.
///
/// # Examples
///
/// ```
/// use cldr_datetime::{format_date, DateTime, Options};
///
/// let date = DateTime::ymd(2024, 6, 3);
/// assert_eq!(format_date(&date, &Options::locale("fr"))?, "3 juin 2024");
/// # Ok::<(), cldr_datetime::Error>(())
/// ```
///
/// # Errors
///
/// Returns an [`Error`] when the locale, calendar, format or fields do not
/// resolve.
pub fn format_date(dt: &DateTime, opts: &Options<'_>) -> Result<String, Error> {
    validate_format_options(opts)?;
    let data = locale::lookup(opts.locale)?;
    let cal = data.calendar(dt.calendar)?;
    if !dt.has_date() {
        return Err(Error::InsufficientFields("year"));
    }

    let pattern_text = resolve::pattern_for(Kind::Date, dt, data, cal, opts.format, opts)?;
    let compiled = pattern::compiled(&pattern_text)?;
    let out = Renderer::new(dt, data, opts)?.render(&compiled.segments)?;
    numbers::apply_number_system(out, opts, data)
}

/// Format the time-of-day portion of an instant.
///
/// At least one of hour, minute or second must be present.
///
/// # Examples
///
/// ```
/// use cldr_datetime::{format_time, DateTime, Options};
///
/// let time = DateTime::hms(23, 59, 59);
/// assert_eq!(format_time(&time, &Options::default())?, "11:59:59 PM");
/// # Ok::<(), cldr_datetime::Error>(())
/// ```
///
/// # Errors
///
/// Returns an [`Error`] when the locale, calendar, format or fields do not
/// resolve.
pub fn format_time(dt: &DateTime, opts: &Options<'_>) -> Result<String, Error> {
    validate_format_options(opts)?;
    let data = locale::lookup(opts.locale)?;
    let cal = data.calendar(dt.calendar)?;
    if !dt.has_time() {
        return Err(Error::InsufficientFields("hour"));
    }

    let pattern_text = resolve::pattern_for(Kind::Time, dt, data, cal, opts.format, opts)?;
    let compiled = pattern::compiled(&pattern_text)?;
    let out = Renderer::new(dt, data, opts)?.render(&compiled.segments)?;
    numbers::apply_number_system(out, opts, data)
}

/// Format an instant carrying both date and time fields.
///
/// A style format composes the date and time portions through the locale's
/// datetime template; `date_format` and `time_format` override either
/// portion. A named format or literal pattern covers the whole instant.
///
/// # Errors
///
/// Returns an [`Error`] when the locale, calendar, format or fields do not
/// resolve, and [`Error::InvalidFormat`] when portion overrides accompany a
/// non-style format.
pub fn format_datetime(dt: &DateTime, opts: &Options<'_>) -> Result<String, Error> {
    validate_format_options(opts)?;
    let data = locale::lookup(opts.locale)?;
    let cal = data.calendar(dt.calendar)?;
    if !dt.has_date() {
        return Err(Error::InsufficientFields("year"));
    }
    if !dt.has_time() {
        return Err(Error::InsufficientFields("hour"));
    }

    match opts.format {
        Some(Format::Id(_) | Format::Pattern(_)) => {
            let pattern_text = resolve::pattern_for(Kind::Date, dt, data, cal, opts.format, opts)?;
            let compiled = pattern::compiled(&pattern_text)?;
            let out = Renderer::new(dt, data, opts)?.render(&compiled.segments)?;
            numbers::apply_number_system(out, opts, data)
        }
        Some(Format::Style(style)) => compose_datetime(dt, data, cal, style, opts),
        None => compose_datetime(dt, data, cal, Style::Medium, opts),
    }
}

/// Compose the date and time portions through the datetime template.
fn compose_datetime(
    dt: &DateTime,
    data: &'static locale::LocaleData,
    cal: &'static locale::CalendarData,
    style: Style,
    opts: &Options<'_>,
) -> Result<String, Error> {
    let date_format = opts
        .date_format
        .or_else(|| dt.has_full_date().then_some(Format::Style(style)));
    let time_format = opts
        .time_format
        .or_else(|| dt.has_full_time().then_some(Format::Style(style)));

    let date_pattern = resolve::pattern_for(Kind::Date, dt, data, cal, date_format, opts)?;
    let time_pattern = resolve::pattern_for(Kind::Time, dt, data, cal, time_format, opts)?;

    let renderer = Renderer::new(dt, data, opts)?;
    let date_text = renderer.render(&pattern::compiled(&date_pattern)?.segments)?;
    let time_text = renderer.render(&pattern::compiled(&time_pattern)?.segments)?;

    let template = resolve::datetime_template(cal, style, opts.style);
    let shell = renderer.render(&pattern::compiled(template)?.segments)?;
    let out = shell.replace("{1}", &date_text).replace("{0}", &time_text);
    numbers::apply_number_system(out, opts, data)
}

/// Format an interval between two instants of the same shape.
///
/// The pattern is anchored on the greatest differing calendar field. Equal
/// endpoints render as a single value; an absent endpoint renders the other
/// side into the locale's fallback template.
///
/// # Examples
///
/// ```
/// use cldr_datetime::{format_interval, DateTime, Options};
///
/// let from = DateTime::ymd(2024, 6, 3);
/// let to = DateTime::ymd(2024, 8, 9);
/// assert_eq!(
///     format_interval(Some(&from), Some(&to), &Options::default())?,
///     "Jun 3 – Aug 9, 2024",
/// );
/// # Ok::<(), cldr_datetime::Error>(())
/// ```
///
/// # Errors
///
/// Returns [`Error::IntervalOrder`] when `from > to`,
/// [`Error::IncompatibleTimezone`] when the zones differ, and the usual
/// resolution errors otherwise.
pub fn format_interval(
    from: Option<&DateTime>,
    to: Option<&DateTime>,
    opts: &Options<'_>,
) -> Result<String, Error> {
    validate_format_options(opts)?;
    interval::format(from, to, opts)
}

/// Format a relative-time expression from an integer delta.
///
/// With `opts.unit` set, the delta counts that unit; otherwise it counts
/// seconds and the unit is derived from the step table (or the caller's
/// `derive_unit` override).
///
/// # Examples
///
/// ```
/// use cldr_datetime::{format_relative, Options, Unit};
///
/// let opts = Options {
///     locale: "fr",
///     unit: Some(Unit::Day),
///     ..Options::default()
/// };
/// assert_eq!(format_relative(1, &opts)?, "demain");
/// # Ok::<(), cldr_datetime::Error>(())
/// ```
///
/// # Errors
///
/// Returns an [`Error`] when the locale, unit or width does not resolve.
pub fn format_relative(delta: i64, opts: &Options<'_>) -> Result<String, Error> {
    relative::format(delta, opts)
}

/// Format an instant relative to a baseline instant.
///
/// With the `at` style and a time-of-day on `dt`, the result combines the
/// relative phrase with the rendered time, e.g. "tomorrow at 3:00 PM".
///
/// # Errors
///
/// Returns an [`Error`] when the locale, unit, width or fields do not
/// resolve.
pub fn format_relative_to(
    dt: &DateTime,
    base: &DateTime,
    opts: &Options<'_>,
) -> Result<String, Error> {
    relative::format_to(dt, base, opts)
}

/// Reject contradictory format option combinations.
fn validate_format_options(opts: &Options<'_>) -> Result<(), Error> {
    if matches!(opts.format, Some(Format::Id(_) | Format::Pattern(_)))
        && (opts.date_format.is_some() || opts.time_format.is_some())
    {
        return Err(Error::InvalidFormat(
            "date_format and time_format apply only when format is a style",
        ));
    }
    Ok(())
}
