//! The format resolver: turns the caller's `format` option into a concrete
//! pattern string.

pub(crate) mod skeleton;

use std::borrow::Cow;

use crate::datetime::DateTime;
use crate::locale::{AvailableFormat, CalendarData, LocaleData, StyleFormats};
use crate::options::{Format, Options, Prefer, RenderStyle, Style};
use crate::Error;

/// Which portion of an instant a pattern covers.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub(crate) enum Kind {
    /// Date fields only.
    Date,
    /// Time-of-day fields only.
    Time,
}

impl Kind {
    /// The standard style table for this kind.
    fn styles(self, cal: &'static CalendarData) -> &'static StyleFormats {
        match self {
            Kind::Date => &cal.date_formats,
            Kind::Time => &cal.time_formats,
        }
    }

    /// Whether the instant carries every field of this kind.
    fn complete(self, dt: &DateTime) -> bool {
        match self {
            Kind::Date => dt.has_full_date(),
            Kind::Time => dt.has_full_time(),
        }
    }
}

/// Resolve a pattern for one kind, applying the spec precedence: style,
/// named format, literal pattern, then skeleton matching for partial inputs.
pub(crate) fn pattern_for(
    kind: Kind,
    dt: &DateTime,
    data: &'static LocaleData,
    cal: &'static CalendarData,
    format: Option<Format<'_>>,
    opts: &Options<'_>,
) -> Result<Cow<'static, str>, Error> {
    match format {
        Some(Format::Style(style)) => Ok(Cow::Borrowed(kind.styles(cal).get(style))),
        Some(Format::Id(id)) => {
            let available = cal
                .available_format(id)
                .ok_or_else(|| Error::UnknownFormat(id.into()))?;
            Ok(Cow::Borrowed(unwrap_sub_form(available, opts.prefer)))
        }
        Some(Format::Pattern(pattern)) => Ok(Cow::Owned(pattern.to_owned())),
        None => {
            if kind.complete(dt) {
                return Ok(Cow::Borrowed(kind.styles(cal).get(Style::Medium)));
            }
            let letters = skeleton::derive(dt, data, kind);
            let available = skeleton::best_match(&letters, cal)?;
            Ok(Cow::Borrowed(unwrap_sub_form(available, opts.prefer)))
        }
    }
}

/// The datetime composition template for a style: `{1}` is the rendered
/// date, `{0}` the rendered time.
pub(crate) fn datetime_template(
    cal: &'static CalendarData,
    style: Style,
    render_style: RenderStyle,
) -> &'static str {
    match (render_style, &cal.date_time_at_formats) {
        (RenderStyle::At, Some(at_formats)) => at_formats.get(style),
        _ => cal.date_time_formats.get(style),
    }
}

/// Unwrap sub-forms according to the caller's preferences. The defaults are
/// the `default` and `unicode` forms.
pub(crate) fn unwrap_sub_form(format: &'static AvailableFormat, prefer: Prefer) -> &'static str {
    match format {
        AvailableFormat::Plain(pattern) => pattern,
        AvailableFormat::Variant { default, variant } => {
            if prefer.contains(Prefer::VARIANT) {
                variant
            } else {
                default
            }
        }
        AvailableFormat::Spacing { unicode, ascii } => {
            if prefer.contains(Prefer::ASCII) {
                ascii
            } else {
                unicode
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale;

    fn en() -> (&'static LocaleData, &'static CalendarData) {
        let data = locale::lookup("en").unwrap();
        (data, &data.gregorian)
    }

    #[test]
    fn test_style_resolution() {
        let (data, cal) = en();
        let opts = Options::default();
        let dt = DateTime::ymd(2024, 6, 3);
        let pattern = pattern_for(
            Kind::Date,
            &dt,
            data,
            cal,
            Some(Format::Style(Style::Full)),
            &opts,
        )
        .unwrap();
        assert_eq!(pattern, "EEEE, MMMM d, y");
    }

    #[test]
    fn test_named_format_resolution() {
        let (data, cal) = en();
        let opts = Options::default();
        let dt = DateTime::ymd(2024, 6, 3);
        let pattern =
            pattern_for(Kind::Date, &dt, data, cal, Some(Format::Id("yMMM")), &opts).unwrap();
        assert_eq!(pattern, "MMM y");

        let missing = pattern_for(Kind::Date, &dt, data, cal, Some(Format::Id("yQ")), &opts);
        assert_eq!(missing, Err(Error::UnknownFormat("yQ".into())));
    }

    #[test]
    fn test_literal_pattern_passes_through() {
        let (data, cal) = en();
        let opts = Options::default();
        let dt = DateTime::ymd(2024, 6, 3);
        let pattern = pattern_for(
            Kind::Date,
            &dt,
            data,
            cal,
            Some(Format::Pattern("y-MM-dd")),
            &opts,
        )
        .unwrap();
        assert_eq!(pattern, "y-MM-dd");
    }

    #[test]
    fn test_complete_input_defaults_to_medium() {
        let (data, cal) = en();
        let opts = Options::default();
        let dt = DateTime::ymd(2024, 6, 3);
        let pattern = pattern_for(Kind::Date, &dt, data, cal, None, &opts).unwrap();
        assert_eq!(pattern, "MMM d, y");
    }

    #[test]
    fn test_partial_input_uses_skeleton_match() {
        let (data, cal) = en();
        let opts = Options::default();
        let dt = DateTime {
            year: Some(2024),
            month: Some(6),
            ..DateTime::default()
        };
        let pattern = pattern_for(Kind::Date, &dt, data, cal, None, &opts).unwrap();
        assert_eq!(pattern, "M/y");
    }

    #[test]
    fn test_sub_form_preferences() {
        let (data, cal) = en();
        let dt = DateTime::hms(10, 0, 0);

        let unicode = pattern_for(
            Kind::Time,
            &dt,
            data,
            cal,
            Some(Format::Id("Bhm")),
            &Options::default(),
        )
        .unwrap();
        assert_eq!(unicode, "h:mm\u{202f}B");

        let ascii_opts = Options {
            prefer: Prefer::ASCII,
            ..Options::default()
        };
        let ascii = pattern_for(
            Kind::Time,
            &dt,
            data,
            cal,
            Some(Format::Id("Bhm")),
            &ascii_opts,
        )
        .unwrap();
        assert_eq!(ascii, "h:mm B");
    }

    #[test]
    fn test_datetime_template_at_style() {
        let (_, cal) = en();
        assert_eq!(
            datetime_template(cal, Style::Full, RenderStyle::Default),
            "{1}, {0}"
        );
        assert_eq!(
            datetime_template(cal, Style::Full, RenderStyle::At),
            "{1} 'at' {0}"
        );
    }
}
