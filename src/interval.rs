//! The interval engine: greatest-difference computation, split-pattern
//! selection and rendering, and the fallback join.

use crate::datetime::DateTime;
use crate::locale::{self, CalendarData, LocaleData};
use crate::numbers;
use crate::options::{Format, Options, RenderStyle, Style};
use crate::pattern;
use crate::render::{day_period, Renderer};
use crate::resolve;
use crate::Error;

/// The greatest calendar field in which two instants differ, as its TR35
/// letter. Seconds and finer are ignored; no interval pattern spans them.
pub(crate) fn greatest_difference(from: &DateTime, to: &DateTime) -> Option<char> {
    let date_walk = [
        ('y', from.year != to.year),
        ('M', from.month != to.month),
        ('d', from.day != to.day),
    ];
    let time_walk = [
        ('H', from.hour != to.hour),
        ('m', from.minute != to.minute),
    ];

    let with_date = from.has_date() || to.has_date();
    date_walk
        .into_iter()
        .filter(|_| with_date)
        .chain(time_walk)
        .find_map(|(letter, differs)| differs.then_some(letter))
}

/// Format an interval, one endpoint possibly absent.
pub(crate) fn format(
    from: Option<&DateTime>,
    to: Option<&DateTime>,
    opts: &Options<'_>,
) -> Result<String, Error> {
    let data = locale::lookup(opts.locale)?;

    match (from, to) {
        (None, None) => Err(Error::InsufficientFields("from")),
        (Some(single), None) => open_interval(single, data, opts, true),
        (None, Some(single)) => open_interval(single, data, opts, false),
        (Some(from), Some(to)) => closed_interval(from, to, data, opts),
    }
}

/// Render a half-open interval: the present side substituted into the
/// fallback template, surrounding whitespace from the empty side trimmed.
fn open_interval(
    single: &DateTime,
    data: &'static LocaleData,
    opts: &Options<'_>,
    is_from: bool,
) -> Result<String, Error> {
    let cal = data.calendar(single.calendar)?;
    let rendered = format_single(single, opts)?;
    let joined = if is_from {
        join_fallback(cal, &rendered, "")
    } else {
        join_fallback(cal, "", &rendered)
    };
    Ok(joined.trim().to_owned())
}

fn closed_interval(
    from: &DateTime,
    to: &DateTime,
    data: &'static LocaleData,
    opts: &Options<'_>,
) -> Result<String, Error> {
    if from.calendar != to.calendar {
        return Err(Error::UnknownCalendar(to.calendar.cldr_tag()));
    }
    if from.time_zone != to.time_zone || from.utc_offset != to.utc_offset {
        return Err(Error::IncompatibleTimezone);
    }
    if instant_key(from) > instant_key(to) {
        return Err(Error::IntervalOrder);
    }

    let cal = data.calendar(from.calendar)?;

    let Some(difference) = greatest_difference(from, to) else {
        return format_single(from, opts);
    };

    // Datetime shape: a differing date part joins two full renderings; a
    // differing time part renders the date once around a time interval.
    if from.has_date() && from.has_time() {
        if matches!(difference, 'y' | 'M' | 'd') {
            let left = format_single(from, opts)?;
            let right = format_single(to, opts)?;
            return Ok(join_fallback(cal, &left, &right));
        }
        return datetime_time_interval(from, to, data, cal, opts);
    }

    let time_only = !from.has_date();
    render_split(from, to, difference, time_only, data, cal, opts)
}

/// Render the two halves of the selected interval pattern.
fn render_split(
    from: &DateTime,
    to: &DateTime,
    difference: char,
    time_only: bool,
    data: &'static LocaleData,
    cal: &'static CalendarData,
    opts: &Options<'_>,
) -> Result<String, Error> {
    let pattern_text = match select_pattern(from, to, difference, time_only, cal, opts) {
        Ok(pattern_text) => pattern_text,
        Err(Error::NoPracticalDifference) => return format_single(from, opts),
        Err(err) => return Err(err),
    };

    let compiled = pattern::compiled(pattern_text)?;
    let out = match compiled.halves() {
        Some((left, right)) => {
            let mut out = Renderer::new(from, data, opts)?.render(left)?;
            Renderer::new(to, data, opts)?.render_into(right, &mut out)?;
            out
        }
        None => {
            let left = Renderer::new(from, data, opts)?.render(&compiled.segments)?;
            let right = Renderer::new(to, data, opts)?.render(&compiled.segments)?;
            join_fallback(cal, &left, &right)
        }
    };
    numbers::apply_number_system(out, opts, data)
}

/// A datetime interval whose date part is equal: the date renders once and
/// combines with a time interval through the composition template.
fn datetime_time_interval(
    from: &DateTime,
    to: &DateTime,
    data: &'static LocaleData,
    cal: &'static CalendarData,
    opts: &Options<'_>,
) -> Result<String, Error> {
    let style = match opts.format {
        Some(Format::Style(style)) => style,
        _ => Style::Medium,
    };
    let date_text = crate::format_date(&from.date_part(), opts)?;

    let from_time = from.time_part();
    let to_time = to.time_part();
    let difference = greatest_difference(&from_time, &to_time).unwrap_or('m');
    let time_text = render_split(&from_time, &to_time, difference, true, data, cal, opts)?;

    let template = resolve::datetime_template(cal, style, RenderStyle::Default);
    let segments = pattern::compiled(template)?;
    let shell = Renderer::new(from, data, opts)?.render(&segments.segments)?;
    Ok(shell.replace("{1}", &date_text).replace("{0}", &time_text))
}

/// Select the interval pattern for the computed greatest difference.
fn select_pattern(
    from: &DateTime,
    to: &DateTime,
    difference: char,
    time_only: bool,
    cal: &'static CalendarData,
    opts: &Options<'_>,
) -> Result<&'static str, Error> {
    let skeleton = match opts.format {
        None => style_skeleton(time_only, Style::Medium, opts.style),
        Some(Format::Style(style)) => style_skeleton(time_only, style, opts.style),
        Some(Format::Id(id)) => id,
        Some(Format::Pattern(_)) => {
            return Err(Error::InvalidFormat(
                "interval formats accept a style or a skeleton name, not a pattern",
            ));
        }
    };

    let entry = match cal.interval_format(skeleton) {
        Some(entry) => entry,
        None => return Err(Error::UnknownFormat(skeleton.into())),
    };

    for key in fallback_keys(from, to, difference, cal) {
        if let Ok(position) = entry.binary_search_by_key(&key, |&(letter, _)| letter) {
            return Ok(entry[position].1);
        }
    }
    Err(Error::NoPracticalDifference)
}

/// The greatest-difference keys to try, in order.
///
/// Date differences fall back toward coarser fields (`M`, then `y`). An hour
/// difference crossing an AM/PM or day-period boundary prefers the period
/// entries; minute differences fall back to the hour entries.
fn fallback_keys(
    from: &DateTime,
    to: &DateTime,
    difference: char,
    cal: &'static CalendarData,
) -> Vec<u8> {
    match difference {
        'y' => vec![b'y'],
        'M' => vec![b'M', b'y'],
        'd' => vec![b'd', b'M', b'y'],
        'H' => {
            let from_half = from.hour.map(|hour| hour < 12);
            let to_half = to.hour.map(|hour| hour < 12);
            let period_changes = from_half != to_half || period_of(from, cal) != period_of(to, cal);
            if period_changes {
                vec![b'a', b'B', b'h', b'H']
            } else {
                vec![b'h', b'H']
            }
        }
        _ => vec![b'm', b'h', b'H'],
    }
}

/// The flexible day period an endpoint falls in.
fn period_of(dt: &DateTime, cal: &'static CalendarData) -> Option<&'static str> {
    let hour = dt.hour?;
    let minute_of_day = u16::from(hour) * 60 + u16::from(dt.minute.unwrap_or(0));
    day_period::select(cal.day_periods.rules, minute_of_day)
}

/// The interval skeleton a standard style maps to.
fn style_skeleton(time_only: bool, style: Style, render_style: RenderStyle) -> &'static str {
    if !time_only {
        return match style {
            Style::Short => "yMd",
            Style::Medium => "yMMMd",
            Style::Long | Style::Full => "yMMMEd",
        };
    }
    if render_style == RenderStyle::Flex {
        match style {
            Style::Short => "Bh",
            _ => "Bhm",
        }
    } else {
        match style {
            Style::Short => "h",
            _ => "hm",
        }
    }
}

/// Substitute both sides into the locale's fallback template.
fn join_fallback(cal: &'static CalendarData, left: &str, right: &str) -> String {
    cal.interval_fallback
        .replace("{0}", left)
        .replace("{1}", right)
}

/// Render one endpoint as a standalone value of the matching kind.
fn format_single(dt: &DateTime, opts: &Options<'_>) -> Result<String, Error> {
    if dt.has_date() && dt.has_time() {
        crate::format_datetime(dt, opts)
    } else if dt.has_date() {
        crate::format_date(dt, opts)
    } else {
        crate::format_time(dt, opts)
    }
}

/// Ordering key over the tracked fields.
#[allow(clippy::type_complexity)]
fn instant_key(
    dt: &DateTime,
) -> (
    Option<i32>,
    Option<u8>,
    Option<u8>,
    Option<u8>,
    Option<u8>,
    Option<u8>,
    Option<u32>,
) {
    (
        dt.year,
        dt.month,
        dt.day,
        dt.hour,
        dt.minute,
        dt.second,
        dt.microsecond,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greatest_difference_walk() {
        let a = DateTime::new(2024, 6, 3, 10, 0, 0);
        let b = DateTime::new(2024, 6, 3, 10, 3, 30);
        assert_eq!(greatest_difference(&a, &b), Some('m'));

        let c = DateTime::new(2024, 7, 3, 10, 0, 0);
        assert_eq!(greatest_difference(&a, &c), Some('M'));

        let d = DateTime::new(2025, 6, 3, 10, 0, 0);
        assert_eq!(greatest_difference(&a, &d), Some('y'));
    }

    #[test]
    fn test_greatest_difference_is_symmetric() {
        let a = DateTime::hms(10, 0, 0);
        let b = DateTime::hms(11, 30, 0);
        assert_eq!(greatest_difference(&a, &b), greatest_difference(&b, &a));
        assert_eq!(greatest_difference(&a, &b), Some('H'));
    }

    #[test]
    fn test_greatest_difference_ignores_seconds() {
        let a = DateTime::hms(10, 0, 0);
        let b = DateTime::hms(10, 0, 59);
        assert_eq!(greatest_difference(&a, &b), None);
    }

    #[test]
    fn test_style_skeletons() {
        assert_eq!(style_skeleton(false, Style::Medium, RenderStyle::Default), "yMMMd");
        assert_eq!(style_skeleton(true, Style::Medium, RenderStyle::Default), "hm");
        assert_eq!(style_skeleton(true, Style::Long, RenderStyle::Flex), "Bhm");
        assert_eq!(style_skeleton(true, Style::Short, RenderStyle::Flex), "Bh");
    }
}
