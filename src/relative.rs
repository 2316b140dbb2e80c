//! The relative-time engine: unit derivation, exact-offset templates and
//! plural-keyed templates.

use crate::calendar::days_from_civil;
use crate::datetime::DateTime;
use crate::locale::{self, LocaleData, RelativePatterns};
use crate::numbers;
use crate::options::{Format, Options, RenderStyle, Style, Unit};
use crate::Error;

/// Relative-time widths, mapping to the three CLDR field widths.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Width {
    /// The full templates.
    Standard,
    /// Abbreviated templates.
    Short,
    /// The narrowest templates.
    Narrow,
}

/// Format a delta: in `opts.unit` when set, otherwise in seconds with the
/// unit derived from the step table.
pub(crate) fn format(delta: i64, opts: &Options<'_>) -> Result<String, Error> {
    let data = locale::lookup(opts.locale)?;
    let (unit, count) = match opts.unit {
        Some(unit) => (unit, delta),
        None => derive_unit(delta, opts),
    };
    render(unit, count, data, opts)
}

/// Format an instant relative to a baseline instant.
pub(crate) fn format_to(
    dt: &DateTime,
    base: &DateTime,
    opts: &Options<'_>,
) -> Result<String, Error> {
    let data = locale::lookup(opts.locale)?;
    let delta_seconds = epoch_seconds(dt)? - epoch_seconds(base)?;

    if opts.style == RenderStyle::At && dt.has_time() {
        return format_at(dt, base, data, opts);
    }

    match opts.unit {
        Some(unit) => {
            let count = rounded_div(delta_seconds, unit_seconds(unit));
            render(unit, count, data, opts)
        }
        None => {
            let (unit, count) = derive_unit(delta_seconds, opts);
            render(unit, count, data, opts)
        }
    }
}

/// The combined "tomorrow at 3:00 PM" form: a day-granularity relative
/// phrase joined with the rendered time through the locale's "date at time"
/// template.
fn format_at(
    dt: &DateTime,
    base: &DateTime,
    data: &'static LocaleData,
    opts: &Options<'_>,
) -> Result<String, Error> {
    let day_delta = day_difference(dt, base)?;
    let unit = opts.unit.unwrap_or(Unit::Day);
    let phrase = render(unit, day_delta, data, opts)?;

    let time_opts = Options {
        format: Some(opts.time_format.unwrap_or(Format::Style(Style::Short))),
        date_format: None,
        time_format: None,
        style: RenderStyle::Default,
        unit: None,
        ..opts.clone()
    };
    let time_text = crate::format_time(&dt.time_part(), &time_opts)?;

    let cal = data.calendar(dt.calendar)?;
    let template = crate::resolve::datetime_template(cal, Style::Full, RenderStyle::At);
    let compiled = crate::pattern::compiled(template)?;
    let shell = crate::render::Renderer::new(dt, data, opts)?.render(&compiled.segments)?;
    Ok(shell.replace("{1}", &phrase).replace("{0}", &time_text))
}

/// Render one unit count through the locale's relative-time tables.
fn render(
    unit: Unit,
    count: i64,
    data: &'static LocaleData,
    opts: &Options<'_>,
) -> Result<String, Error> {
    let field = data
        .relative_field(unit.index())
        .ok_or(Error::UnknownTimeUnit(unit_name(unit)))?;
    let patterns = match width_from(opts)? {
        Width::Standard => &field.standard,
        Width::Short => field.short.as_ref().unwrap_or(&field.standard),
        Width::Narrow => field.narrow.as_ref().unwrap_or(&field.standard),
    };

    if let Some(exact) = patterns.exact_for(count) {
        return numbers::apply_number_system(exact.to_owned(), opts, data);
    }

    let text = plural_template(patterns, count, data)?;
    numbers::apply_number_system(text, opts, data)
}

/// Substitute the grouped count into the plural-selected template.
fn plural_template(
    patterns: &RelativePatterns,
    count: i64,
    data: &'static LocaleData,
) -> Result<String, Error> {
    let tense = if count < 0 {
        &patterns.past
    } else {
        &patterns.future
    };
    let category = (data.plural)(count.unsigned_abs());
    let template = tense.get(category);

    let mut number = String::new();
    numbers::push_grouped(&mut number, count.unsigned_abs(), data);
    Ok(template.replace("{0}", &number))
}

/// The relative width selected by the `format` option.
fn width_from(opts: &Options<'_>) -> Result<Width, Error> {
    match opts.format {
        None => Ok(Width::Standard),
        Some(Format::Id("standard")) => Ok(Width::Standard),
        Some(Format::Id("short")) => Ok(Width::Short),
        Some(Format::Id("narrow")) => Ok(Width::Narrow),
        Some(_) => Err(Error::InvalidStyle(
            "relative formats accept standard, short or narrow",
        )),
    }
}

/// Scale a delta in seconds into a unit using the default step table, or the
/// caller's override.
fn derive_unit(delta_seconds: i64, opts: &Options<'_>) -> (Unit, i64) {
    let unit = match opts.derive_unit {
        Some(derive) => derive(delta_seconds),
        None => {
            let magnitude = delta_seconds.unsigned_abs();
            if magnitude < 60 {
                Unit::Second
            } else if magnitude < 3_600 {
                Unit::Minute
            } else if magnitude < 86_400 {
                Unit::Hour
            } else if magnitude < 7 * 86_400 {
                Unit::Day
            } else if magnitude < 30 * 86_400 {
                Unit::Week
            } else if magnitude < 365 * 86_400 {
                Unit::Month
            } else {
                Unit::Year
            }
        }
    };
    (unit, rounded_div(delta_seconds, unit_seconds(unit)))
}

/// Seconds per unit for count scaling; day-of-week units count weeks.
fn unit_seconds(unit: Unit) -> i64 {
    match unit {
        Unit::Year => 365 * 86_400,
        Unit::Quarter => 91 * 86_400,
        Unit::Month => 30 * 86_400,
        Unit::Week => 7 * 86_400,
        Unit::Day => 86_400,
        Unit::Hour => 3_600,
        Unit::Minute => 60,
        Unit::Second => 1,
        _ => 7 * 86_400,
    }
}

/// Integer division rounding half away from zero.
fn rounded_div(value: i64, step: i64) -> i64 {
    let quotient = (value.abs() + step / 2) / step;
    if value < 0 {
        -quotient
    } else {
        quotient
    }
}

/// Whole-day difference between two dated instants.
fn day_difference(dt: &DateTime, base: &DateTime) -> Result<i64, Error> {
    let days = days_from_civil(dt.req_year()?, dt.req_month()?, dt.req_day()?);
    let base_days = days_from_civil(base.req_year()?, base.req_month()?, base.req_day()?);
    Ok(days - base_days)
}

/// Seconds since the epoch, missing time-of-day fields treated as zero.
fn epoch_seconds(dt: &DateTime) -> Result<i64, Error> {
    let days = days_from_civil(dt.req_year()?, dt.req_month()?, dt.req_day()?);
    let hour = i64::from(dt.hour.unwrap_or(0));
    let minute = i64::from(dt.minute.unwrap_or(0));
    let second = i64::from(dt.second.unwrap_or(0));
    Ok(days * 86_400 + hour * 3_600 + minute * 60 + second)
}

/// The CLDR name of a unit, for error reporting.
fn unit_name(unit: Unit) -> &'static str {
    match unit {
        Unit::Year => "year",
        Unit::Quarter => "quarter",
        Unit::Month => "month",
        Unit::Week => "week",
        Unit::Day => "day",
        Unit::Hour => "hour",
        Unit::Minute => "minute",
        Unit::Second => "second",
        Unit::Monday => "mon",
        Unit::Tuesday => "tue",
        Unit::Wednesday => "wed",
        Unit::Thursday => "thu",
        Unit::Friday => "fri",
        Unit::Saturday => "sat",
        Unit::Sunday => "sun",
    }
}
