//! Static locale data and the locale registry.
//!
//! Each locale module declares one [`LocaleData`] with the full data contract
//! the engine consumes: name tables, standard and available formats, interval
//! formats, zone templates, relative-time fields, and number metadata. All
//! tables are `'static`; sorted maps are validated by compile-time asserts.

mod en;
mod fr;

use crate::calendar::Calendar;
use crate::numbers::Plural;
use crate::options::Style;
use crate::Error;

/// Locale data handle for one BCP-47 tag.
#[derive(Debug)]
pub(crate) struct LocaleData {
    /// Canonical tag of this data set.
    pub(crate) tag: &'static str,
    /// Calendars this locale declares data for.
    pub(crate) calendars: &'static [Calendar],
    /// Data for the Gregorian calendar.
    pub(crate) gregorian: CalendarData,
    /// GMT offset templates.
    pub(crate) time_zone_names: TimeZoneNames,
    /// Relative-time fields keyed by [`Unit::index`](crate::options::Unit).
    pub(crate) date_fields: &'static [(u8, RelativeField)],
    /// Default number system name.
    pub(crate) number_system: &'static str,
    /// Decimal symbols for integer formatting.
    pub(crate) number_symbols: NumberSymbols,
    /// CLDR plural rule for cardinal integers.
    pub(crate) plural: fn(u64) -> Plural,
    /// First day of the week, `1` = Monday through `7` = Sunday.
    pub(crate) first_weekday: u8,
    /// Preferred hour symbol (`'h'` or `'H'`) for derived skeletons.
    pub(crate) preferred_hour: char,
}

impl LocaleData {
    /// The calendar data for an instant's calendar.
    pub(crate) fn calendar(&self, calendar: Calendar) -> Result<&CalendarData, Error> {
        if !self.calendars.contains(&calendar) {
            return Err(Error::UnknownCalendar(calendar.cldr_tag()));
        }
        match calendar {
            Calendar::Gregorian => Ok(&self.gregorian),
            // Declared but unshipped calendars are a data bug, not a caller
            // error; the declaration list above is the source of truth.
            _ => Err(Error::UnknownCalendar(calendar.cldr_tag())),
        }
    }

    /// The relative-time field for a unit, if the locale has one.
    pub(crate) fn relative_field(&self, unit_index: u8) -> Option<&'static RelativeField> {
        self.date_fields
            .binary_search_by_key(&unit_index, |&(index, _)| index)
            .ok()
            .map(|position| &self.date_fields[position].1)
    }
}

/// Name tables and patterns for one calendar.
#[derive(Debug)]
pub(crate) struct CalendarData {
    /// Month names, formatting and stand-alone contexts.
    pub(crate) months: NameContexts,
    /// Weekday names in Monday-first order.
    pub(crate) weekdays: NameContexts,
    /// Quarter names.
    pub(crate) quarters: NameContexts,
    /// Era names, earliest era first.
    pub(crate) eras: Eras,
    /// Day-period rules and names.
    pub(crate) day_periods: DayPeriods,
    /// Standard date patterns.
    pub(crate) date_formats: StyleFormats,
    /// Standard time patterns.
    pub(crate) time_formats: StyleFormats,
    /// Date-time composition templates with `{1}` (date) and `{0}` (time).
    pub(crate) date_time_formats: StyleFormats,
    /// "Date at time" composition templates.
    pub(crate) date_time_at_formats: Option<StyleFormats>,
    /// Available formats keyed by skeleton.
    pub(crate) available_formats: &'static [(&'static str, AvailableFormat)],
    /// Interval formats: skeleton → (greatest-difference letter → pattern).
    pub(crate) interval_formats:
        &'static [(&'static str, &'static [(u8, &'static str)])],
    /// Fallback template joining two independently rendered endpoints.
    pub(crate) interval_fallback: &'static str,
}

impl CalendarData {
    /// Look up an available format by skeleton key.
    pub(crate) fn available_format(&self, key: &str) -> Option<&'static AvailableFormat> {
        self.available_formats
            .binary_search_by_key(&key, |&(name, _)| name)
            .ok()
            .map(|position| &self.available_formats[position].1)
    }

    /// Look up an interval format entry by skeleton key.
    pub(crate) fn interval_format(
        &self,
        key: &str,
    ) -> Option<&'static [(u8, &'static str)]> {
        self.interval_formats
            .binary_search_by_key(&key, |&(name, _)| name)
            .ok()
            .map(|position| self.interval_formats[position].1)
    }
}

/// One pattern per standard style.
#[derive(Debug)]
pub(crate) struct StyleFormats {
    /// The `short` pattern.
    pub(crate) short: &'static str,
    /// The `medium` pattern.
    pub(crate) medium: &'static str,
    /// The `long` pattern.
    pub(crate) long: &'static str,
    /// The `full` pattern.
    pub(crate) full: &'static str,
}

impl StyleFormats {
    /// The pattern for a style.
    pub(crate) fn get(&self, style: Style) -> &'static str {
        match style {
            Style::Short => self.short,
            Style::Medium => self.medium,
            Style::Long => self.long,
            Style::Full => self.full,
        }
    }

    /// All four patterns, for cache priming.
    fn all(&self) -> [&'static str; 4] {
        [self.short, self.medium, self.long, self.full]
    }
}

/// An available-format value, possibly exposing sub-forms.
#[derive(Debug)]
pub(crate) enum AvailableFormat {
    /// A single pattern.
    Plain(&'static str),
    /// A default pattern with a variant alternative.
    Variant {
        /// The default sub-form.
        default: &'static str,
        /// The variant sub-form.
        variant: &'static str,
    },
    /// Unicode-spacing and ASCII-spacing sub-forms.
    Spacing {
        /// The sub-form using Unicode spaces.
        unicode: &'static str,
        /// The sub-form using ASCII spaces.
        ascii: &'static str,
    },
}

/// Name widths for one context.
#[derive(Debug)]
pub(crate) struct Names {
    /// Wide names, e.g. `"January"`.
    pub(crate) wide: &'static [&'static str],
    /// Abbreviated names, e.g. `"Jan"`.
    pub(crate) abbreviated: &'static [&'static str],
    /// Narrow names, e.g. `"J"`.
    pub(crate) narrow: &'static [&'static str],
    /// Short names where the locale has them (weekdays only).
    pub(crate) short: Option<&'static [&'static str]>,
}

/// Formatting and stand-alone name contexts.
#[derive(Debug)]
pub(crate) struct NameContexts {
    /// Names used inside a complete date.
    pub(crate) format: Names,
    /// Names used in isolation.
    pub(crate) stand_alone: Names,
}

/// Era names, index 0 for the era before the epoch.
#[derive(Debug)]
pub(crate) struct Eras {
    /// Abbreviated era names, e.g. `"BC"` / `"AD"`.
    pub(crate) abbreviated: [&'static str; 2],
    /// Wide era names.
    pub(crate) wide: [&'static str; 2],
    /// Narrow era names.
    pub(crate) narrow: [&'static str; 2],
    /// Variant abbreviated names, e.g. `"BCE"` / `"CE"`.
    pub(crate) variant_abbreviated: Option<[&'static str; 2]>,
    /// Variant wide names.
    pub(crate) variant_wide: Option<[&'static str; 2]>,
}

/// A flexible day-period rule over minutes since midnight.
#[derive(Debug, Copy, Clone)]
pub(crate) enum DayPeriodRule {
    /// An exact point, e.g. noon at `12:00`.
    At {
        /// Day-period key.
        key: &'static str,
        /// Minute of the day.
        minute: u16,
    },
    /// A half-open range `[from, before)`, wrapping past midnight when
    /// `before < from`.
    Between {
        /// Day-period key.
        key: &'static str,
        /// Inclusive start minute.
        from: u16,
        /// Exclusive end minute.
        before: u16,
    },
}

/// Day-period rules and name tables.
#[derive(Debug)]
pub(crate) struct DayPeriods {
    /// Selection rules. Exact rules come first; see
    /// [`assert_exact_before_ranged`].
    pub(crate) rules: &'static [DayPeriodRule],
    /// Formatting-context names per width, keyed by day-period key.
    pub(crate) wide: &'static [(&'static str, &'static str)],
    /// Abbreviated names.
    pub(crate) abbreviated: &'static [(&'static str, &'static str)],
    /// Narrow names.
    pub(crate) narrow: &'static [(&'static str, &'static str)],
}

impl DayPeriods {
    /// Whether the locale can name `noon` and `midnight` exactly.
    pub(crate) fn has_noon_and_midnight(&self) -> bool {
        lookup_name(self.wide, "noon").is_some() && lookup_name(self.wide, "midnight").is_some()
    }
}

/// Look up a day-period name in a sorted key table.
pub(crate) fn lookup_name(
    table: &'static [(&'static str, &'static str)],
    key: &str,
) -> Option<&'static str> {
    table
        .binary_search_by_key(&key, |&(name, _)| name)
        .ok()
        .map(|position| table[position].1)
}

/// GMT offset templates.
#[derive(Debug)]
pub(crate) struct TimeZoneNames {
    /// Template with a `{0}` placeholder, e.g. `"GMT{0}"`.
    pub(crate) gmt_format: &'static str,
    /// Verbatim text for a zero offset, e.g. `"GMT"`.
    pub(crate) gmt_zero_format: &'static str,
    /// Positive and negative offset sub-patterns separated by `';'`, e.g.
    /// `"+HH:mm;-HH:mm"`.
    pub(crate) hour_format: &'static str,
}

/// Plural-category-keyed relative-time templates with `{0}` placeholders.
#[derive(Debug)]
pub(crate) struct PluralPatterns {
    /// The `one` template.
    pub(crate) one: Option<&'static str>,
    /// The `two` template.
    pub(crate) two: Option<&'static str>,
    /// The `few` template.
    pub(crate) few: Option<&'static str>,
    /// The `many` template.
    pub(crate) many: Option<&'static str>,
    /// The `other` template, always present.
    pub(crate) other: &'static str,
}

impl PluralPatterns {
    /// Templates distinguishing only `one` and `other`.
    pub(crate) const fn one_other(one: &'static str, other: &'static str) -> Self {
        Self {
            one: Some(one),
            two: None,
            few: None,
            many: None,
            other,
        }
    }

    /// A single template for every category.
    pub(crate) const fn invariant(other: &'static str) -> Self {
        Self {
            one: None,
            two: None,
            few: None,
            many: None,
            other,
        }
    }

    /// The template for a plural category, falling back to `other`.
    pub(crate) fn get(&self, plural: Plural) -> &'static str {
        let specific = match plural {
            Plural::One => self.one,
            Plural::Two => self.two,
            Plural::Few => self.few,
            Plural::Many => self.many,
            Plural::Zero | Plural::Other => None,
        };
        specific.unwrap_or(self.other)
    }
}

/// Relative-time templates for one unit at one width.
#[derive(Debug)]
pub(crate) struct RelativePatterns {
    /// Exact-offset templates keyed by signed offset, sorted.
    pub(crate) exact: &'static [(i8, &'static str)],
    /// Future-tense templates.
    pub(crate) future: PluralPatterns,
    /// Past-tense templates.
    pub(crate) past: PluralPatterns,
}

impl RelativePatterns {
    /// The exact template for an offset, if the locale has one.
    pub(crate) fn exact_for(&self, offset: i64) -> Option<&'static str> {
        let offset = i8::try_from(offset).ok()?;
        self.exact
            .binary_search_by_key(&offset, |&(key, _)| key)
            .ok()
            .map(|position| self.exact[position].1)
    }
}

/// Relative-time templates for one unit across the three widths.
#[derive(Debug)]
pub(crate) struct RelativeField {
    /// The `standard` width.
    pub(crate) standard: RelativePatterns,
    /// The `short` width, falling back to `standard`.
    pub(crate) short: Option<RelativePatterns>,
    /// The `narrow` width, falling back to `standard`.
    pub(crate) narrow: Option<RelativePatterns>,
}

/// Decimal symbols.
#[derive(Debug)]
pub(crate) struct NumberSymbols {
    /// Grouping separator.
    pub(crate) group: &'static str,
}

/// Asserts that every exact day-period rule sorts before every ranged one,
/// so noon and midnight are never swallowed by a containing range.
pub(crate) const fn assert_exact_before_ranged(
    rules: &[DayPeriodRule],
) -> &[DayPeriodRule] {
    let mut seen_ranged = false;
    let mut i = 0;
    while i < rules.len() {
        match rules[i] {
            DayPeriodRule::At { .. } => assert!(!seen_ranged),
            DayPeriodRule::Between { .. } => seen_ranged = true,
        }
        i += 1;
    }
    rules
}

/// The built-in locale registry.
static LOCALES: &[&LocaleData] = &[&en::DATA, &fr::DATA];

/// Resolve a BCP-47 tag to its data, falling back from a regional tag to its
/// language (`"en-US"` → `"en"`).
pub(crate) fn lookup(tag: &str) -> Result<&'static LocaleData, Error> {
    let language = tag
        .split(['-', '_'])
        .next()
        .unwrap_or(tag);
    LOCALES
        .iter()
        .find(|data| data.tag == tag)
        .or_else(|| LOCALES.iter().find(|data| data.tag == language))
        .copied()
        .ok_or_else(|| Error::UnknownLocale(tag.into()))
}

/// Every pattern string the built-in locales declare, for cache priming.
pub(crate) fn declared_patterns() -> impl Iterator<Item = &'static str> {
    LOCALES.iter().flat_map(|data| {
        let calendar = &data.gregorian;
        let styles = calendar
            .date_formats
            .all()
            .into_iter()
            .chain(calendar.time_formats.all())
            .chain(calendar.date_time_formats.all())
            .chain(
                calendar
                    .date_time_at_formats
                    .as_ref()
                    .map(StyleFormats::all)
                    .into_iter()
                    .flatten(),
            );
        let available = calendar
            .available_formats
            .iter()
            .flat_map(|(_, format)| match format {
                AvailableFormat::Plain(pattern) => vec![*pattern],
                AvailableFormat::Variant { default, variant } => vec![*default, *variant],
                AvailableFormat::Spacing { unicode, ascii } => vec![*unicode, *ascii],
            });
        let intervals = calendar
            .interval_formats
            .iter()
            .flat_map(|(_, entry)| entry.iter().map(|&(_, pattern)| pattern));
        styles.chain(available).chain(intervals)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_exact_and_language_fallback() {
        assert_eq!(lookup("en").unwrap().tag, "en");
        assert_eq!(lookup("en-US").unwrap().tag, "en");
        assert_eq!(lookup("fr_FR").unwrap().tag, "fr");
        assert!(matches!(lookup("tlh"), Err(Error::UnknownLocale(_))));
    }

    #[test]
    fn test_calendar_coverage() {
        let en = lookup("en").unwrap();
        assert!(en.calendar(Calendar::Gregorian).is_ok());
        assert!(matches!(
            en.calendar(Calendar::Buddhist),
            Err(Error::UnknownCalendar("buddhist"))
        ));
    }

    #[test]
    fn test_declared_patterns_compile() {
        for pattern in declared_patterns() {
            assert!(
                crate::pattern::compile(pattern).is_ok(),
                "declared pattern failed to compile: {pattern:?}"
            );
        }
    }

    #[test]
    fn test_day_period_names_present_for_rule_keys() {
        for data in LOCALES {
            let periods = &data.gregorian.day_periods;
            for rule in periods.rules {
                let key = match rule {
                    DayPeriodRule::At { key, .. } | DayPeriodRule::Between { key, .. } => key,
                };
                assert!(
                    lookup_name(periods.wide, key).is_some(),
                    "{}: missing wide name for {key}",
                    data.tag
                );
            }
        }
    }

    #[test]
    fn test_relative_fields_sorted() {
        for data in LOCALES {
            let mut previous = None;
            for &(index, _) in data.date_fields {
                assert!(previous.map_or(true, |p| p < index), "{}", data.tag);
                previous = Some(index);
            }
        }
    }
}
