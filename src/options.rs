//! Options accepted by the formatting functions.

use bitflags::bitflags;

/// A standard CLDR format length.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Style {
    /// The locale's short format, e.g. `"1/1/00"`.
    Short,
    /// The locale's medium format, e.g. `"Jan 1, 2000"`.
    Medium,
    /// The locale's long format, e.g. `"January 1, 2000"`.
    Long,
    /// The locale's full format, e.g. `"Saturday, January 1, 2000"`.
    Full,
}

/// The `format` option: a standard style, a named format, or a literal
/// TR35 pattern.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Format<'a> {
    /// One of the four standard lengths.
    Style(Style),
    /// A named format resolved against the locale's available formats, e.g.
    /// `"yMMM"`. For intervals the name selects an interval-format entry;
    /// for relative rendering it selects the width (`"standard"`, `"short"`
    /// or `"narrow"`).
    Id(&'a str),
    /// A literal pattern string passed through to the compiler, e.g.
    /// `"EEEE, MMMM d, y G"`.
    Pattern(&'a str),
}

/// Rendering style refinements orthogonal to [`Format`].
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub enum RenderStyle {
    /// The locale's standard composition templates.
    #[default]
    Default,
    /// Prefer the locale's "date at time" composition templates.
    At,
    /// Prefer flexible day periods over AM/PM for time intervals.
    Flex,
}

/// Era and day-period name sub-form selection.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub enum NameVariant {
    /// The locale's default names.
    #[default]
    Default,
    /// The variant names where the locale provides them, e.g. `"CE"` for
    /// `"AD"` or lowercase `"am"` for `"AM"`.
    Variant,
}

bitflags! {
    /// Preferences applied when a resolved format exposes sub-forms.
    pub struct Prefer: u32 {
        /// Prefer ASCII spacing over Unicode spacing sub-forms.
        const ASCII   = 1 << 0;
        /// Prefer the variant sub-form over the default one.
        const VARIANT = 1 << 1;
    }
}

impl Default for Prefer {
    fn default() -> Self {
        Prefer::empty()
    }
}

/// A relative-time unit.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Unit {
    /// Calendar years.
    Year,
    /// Calendar quarters.
    Quarter,
    /// Calendar months.
    Month,
    /// Seven-day weeks.
    Week,
    /// Calendar days.
    Day,
    /// Hours.
    Hour,
    /// Minutes.
    Minute,
    /// Seconds.
    Second,
    /// Mondays relative to the reference point.
    Monday,
    /// Tuesdays relative to the reference point.
    Tuesday,
    /// Wednesdays relative to the reference point.
    Wednesday,
    /// Thursdays relative to the reference point.
    Thursday,
    /// Fridays relative to the reference point.
    Friday,
    /// Saturdays relative to the reference point.
    Saturday,
    /// Sundays relative to the reference point.
    Sunday,
}

impl Unit {
    /// Stable index used as key into the static relative-time tables.
    pub(crate) fn index(self) -> u8 {
        match self {
            Unit::Year => 0,
            Unit::Quarter => 1,
            Unit::Month => 2,
            Unit::Week => 3,
            Unit::Day => 4,
            Unit::Hour => 5,
            Unit::Minute => 6,
            Unit::Second => 7,
            Unit::Monday => 8,
            Unit::Tuesday => 9,
            Unit::Wednesday => 10,
            Unit::Thursday => 11,
            Unit::Friday => 12,
            Unit::Saturday => 13,
            Unit::Sunday => 14,
        }
    }

}

/// Options accepted by every formatting function.
///
/// Unknown or contradictory combinations surface as errors rather than being
/// ignored; see [`Error`](crate::Error) for the kinds.
///
/// # Examples
///
/// ```
/// use cldr_datetime::{format_date, DateTime, Format, Options, Style};
///
/// let opts = Options {
///     locale: "fr",
///     format: Some(Format::Style(Style::Long)),
///     ..Options::default()
/// };
/// let formatted = format_date(&DateTime::ymd(2000, 1, 1), &opts)?;
/// assert_eq!(formatted, "1 janvier 2000");
/// # Ok::<(), cldr_datetime::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Options<'a> {
    /// BCP-47 locale tag. Defaults to `"en"`.
    pub locale: &'a str,
    /// Style, named format or literal pattern to render with.
    pub format: Option<Format<'a>>,
    /// Overrides the date portion of a datetime when `format` is a style.
    pub date_format: Option<Format<'a>>,
    /// Overrides the time portion of a datetime when `format` is a style.
    pub time_format: Option<Format<'a>>,
    /// Composition refinement (`at` templates, flexible day periods).
    pub style: RenderStyle,
    /// Sub-form preferences for formats exposing `{default, variant}` or
    /// `{unicode, ascii}` alternatives.
    pub prefer: Prefer,
    /// Overrides the locale's default number system.
    pub number_system: Option<&'a str>,
    /// Era name sub-form selection.
    pub era: NameVariant,
    /// Day-period name sub-form selection.
    pub period: NameVariant,
    /// Forces the relative-time unit instead of deriving it.
    pub unit: Option<Unit>,
    /// Overrides the default second-count-to-unit derivation for relative
    /// formatting.
    pub derive_unit: Option<fn(i64) -> Unit>,
}

impl<'a> Options<'a> {
    /// Options for the given locale, everything else defaulted.
    pub fn locale(tag: &'a str) -> Self {
        Self {
            locale: tag,
            ..Self::default()
        }
    }

    /// Options for the given locale and format.
    pub fn with_format(tag: &'a str, format: Format<'a>) -> Self {
        Self {
            locale: tag,
            format: Some(format),
            ..Self::default()
        }
    }
}

impl Default for Options<'_> {
    fn default() -> Self {
        Self {
            locale: "en",
            format: None,
            date_format: None,
            time_format: None,
            style: RenderStyle::default(),
            prefer: Prefer::default(),
            number_system: None,
            era: NameVariant::default(),
            period: NameVariant::default(),
            unit: None,
            derive_unit: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_indexes_are_unique() {
        let units = [
            Unit::Year,
            Unit::Quarter,
            Unit::Month,
            Unit::Week,
            Unit::Day,
            Unit::Hour,
            Unit::Minute,
            Unit::Second,
            Unit::Monday,
            Unit::Tuesday,
            Unit::Wednesday,
            Unit::Thursday,
            Unit::Friday,
            Unit::Saturday,
            Unit::Sunday,
        ];
        for (i, unit) in units.iter().enumerate() {
            assert_eq!(usize::from(unit.index()), i);
        }
    }

    #[test]
    fn test_default_options() {
        let opts = Options::default();
        assert_eq!(opts.locale, "en");
        assert!(opts.format.is_none());
        assert_eq!(opts.prefer, Prefer::empty());
    }
}
