//! Field renderers: one rendering rule per TR35 field symbol.

pub(crate) mod day_period;
pub(crate) mod zone;

use crate::calendar::{CalendarOps, Gregorian};
use crate::datetime::DateTime;
use crate::locale::{lookup_name, CalendarData, LocaleData, Names};
use crate::numbers::push_padded;
use crate::options::{NameVariant, Options};
use crate::pattern::Segment;
use crate::Error;

/// Renders compiled segments for one instant against one locale.
pub(crate) struct Renderer<'a> {
    /// The instant being formatted.
    dt: &'a DateTime,
    /// Locale data handle.
    data: &'static LocaleData,
    /// Calendar data for the instant's calendar.
    cal: &'static CalendarData,
    /// Caller options.
    opts: &'a Options<'a>,
}

impl<'a> Renderer<'a> {
    /// Construct a renderer, checking calendar coverage.
    pub(crate) fn new(
        dt: &'a DateTime,
        data: &'static LocaleData,
        opts: &'a Options<'a>,
    ) -> Result<Self, Error> {
        let cal = data.calendar(dt.calendar)?;
        Ok(Self {
            dt,
            data,
            cal,
            opts,
        })
    }

    /// Render a segment list, appending to `out`.
    pub(crate) fn render_into(&self, segments: &[Segment], out: &mut String) -> Result<(), Error> {
        for segment in segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Field { symbol, length } => self.render_field(*symbol, *length, out)?,
            }
        }
        Ok(())
    }

    /// Render a segment list into a fresh string.
    pub(crate) fn render(&self, segments: &[Segment]) -> Result<String, Error> {
        let mut out = String::new();
        self.render_into(segments, &mut out)?;
        Ok(out)
    }

    /// Render one field directive.
    #[allow(clippy::too_many_lines)]
    fn render_field(&self, symbol: char, length: u8, out: &mut String) -> Result<(), Error> {
        let n = usize::from(length);
        match symbol {
            'G' => out.push_str(self.era_name(length)?),
            'y' => {
                let year = display_year(self.dt.req_year()?);
                if length == 2 {
                    push_padded(out, year % 100, 2);
                } else {
                    push_padded(out, year, n);
                }
            }
            'Y' => {
                let year = display_year(self.week_based_year()?);
                if length == 2 {
                    push_padded(out, year % 100, 2);
                } else {
                    push_padded(out, year, n);
                }
            }
            'u' => {
                let year = self.dt.req_year()?;
                out.push_str(&format!("{year:0n$}"));
            }
            // Cyclic year names only exist in calendars without shipped
            // data; numeric year is the TR35 fallback.
            'U' => {
                let year = display_year(self.dt.req_year()?);
                push_padded(out, year, n);
            }
            'r' => {
                let year = self.dt.req_year()?;
                out.push_str(&format!("{year:0n$}"));
            }
            'Q' => self.render_quarter(length, &self.cal.quarters.format, out)?,
            'q' => self.render_quarter(length, &self.cal.quarters.stand_alone, out)?,
            'M' => self.render_month(length, &self.cal.months.format, out)?,
            'L' => self.render_month(length, &self.cal.months.stand_alone, out)?,
            'w' => {
                let (year, month, day) = self.full_date()?;
                push_padded(out, i64::from(Gregorian.week_of_year(year, month, day)), n);
            }
            'W' => {
                let (year, month, day) = self.full_date()?;
                push_padded(out, i64::from(Gregorian.week_of_month(year, month, day)), n);
            }
            'd' => push_padded(out, i64::from(self.dt.req_day()?), n),
            'D' => {
                let (year, month, day) = self.full_date()?;
                push_padded(out, i64::from(Gregorian.day_of_year(year, month, day)), n);
            }
            'F' => {
                let day = self.dt.req_day()?;
                push_padded(out, i64::from((day - 1) / 7 + 1), n);
            }
            'E' => {
                let name = self.weekday_name(length, &self.cal.weekdays.format)?;
                out.push_str(name);
            }
            'e' => {
                if length <= 2 {
                    push_padded(out, i64::from(self.locale_weekday()?), n);
                } else {
                    let name = self.weekday_name(length, &self.cal.weekdays.format)?;
                    out.push_str(name);
                }
            }
            'c' => {
                if length <= 2 {
                    push_padded(out, i64::from(self.locale_weekday()?), 1);
                } else {
                    let name = self.weekday_name(length, &self.cal.weekdays.stand_alone)?;
                    out.push_str(name);
                }
            }
            'a' => self.render_period(length, out)?,
            'b' => {
                let hour = self.dt.req_hour()?;
                let on_the_hour = self.dt.minute.map_or(false, |minute| minute == 0);
                let key = match hour {
                    12 if on_the_hour => Some("noon"),
                    0 if on_the_hour => Some("midnight"),
                    _ => None,
                };
                match key {
                    Some(key) if self.cal.day_periods.has_noon_and_midnight() => {
                        out.push_str(self.day_period_name(key, length));
                    }
                    _ => self.render_period(length, out)?,
                }
            }
            'B' => {
                let hour = self.dt.req_hour()?;
                let minute_of_day =
                    u16::from(hour) * 60 + u16::from(self.dt.minute.unwrap_or(0));
                match day_period::select(self.cal.day_periods.rules, minute_of_day) {
                    Some(key) => out.push_str(self.day_period_name(key, length)),
                    None => self.render_period(length, out)?,
                }
            }
            'h' => {
                let hour = self.dt.req_hour()? % 12;
                let hour = if hour == 0 { 12 } else { hour };
                push_padded(out, i64::from(hour), n);
            }
            'H' => push_padded(out, i64::from(self.dt.req_hour()?), n),
            'K' => push_padded(out, i64::from(self.dt.req_hour()? % 12), n),
            'k' => {
                let hour = self.dt.req_hour()?;
                let hour = if hour == 0 { 24 } else { hour };
                push_padded(out, i64::from(hour), n);
            }
            'm' => push_padded(out, i64::from(self.dt.req_minute()?), n),
            's' => push_padded(out, i64::from(self.dt.req_second()?), n),
            'S' => {
                // Truncation, never rounding; zeros past the carried
                // precision.
                let nanos = format!("{:09}", self.dt.fraction_nanos());
                for position in 0..n {
                    out.push(nanos.as_bytes().get(position).map_or('0', |&b| b as char));
                }
            }
            'A' => {
                let hour = i64::from(self.dt.req_hour()?);
                let minute = i64::from(self.dt.minute.unwrap_or(0));
                let second = i64::from(self.dt.second.unwrap_or(0));
                let millis = (hour * 3600 + minute * 60 + second) * 1000
                    + i64::from(self.dt.fraction_nanos() / 1_000_000);
                push_padded(out, millis, n);
            }
            'z' | 'Z' | 'O' | 'v' | 'V' | 'X' | 'x' => self.render_zone(symbol, length, out)?,
            // TR35 reserves every ASCII letter; symbols without a rendering
            // rule pass through verbatim.
            _ => {
                for _ in 0..length {
                    out.push(symbol);
                }
            }
        }
        Ok(())
    }

    /// Year, month and day, all required.
    fn full_date(&self) -> Result<(i32, u8, u8), Error> {
        Ok((
            self.dt.req_year()?,
            self.dt.req_month()?,
            self.dt.req_day()?,
        ))
    }

    /// ISO week-based year of the instant.
    fn week_based_year(&self) -> Result<i32, Error> {
        let (year, month, day) = self.full_date()?;
        Ok(Gregorian.week_based_year(year, month, day))
    }

    /// Weekday numbered relative to the locale's first day of week.
    fn locale_weekday(&self) -> Result<u8, Error> {
        let (year, month, day) = self.full_date()?;
        let weekday = Gregorian.day_of_week(year, month, day);
        let first = self.data.first_weekday;
        Ok((i16::from(weekday) - i16::from(first)).rem_euclid(7) as u8 + 1)
    }

    /// The era name at the requested width.
    fn era_name(&self, length: u8) -> Result<&'static str, Error> {
        let year = self.dt.req_year()?;
        let index = usize::from(Gregorian.era_for(year));
        let eras = &self.cal.eras;
        let variant = self.opts.era == NameVariant::Variant;
        let name = match length {
            4 => match eras.variant_wide {
                Some(wide) if variant => wide[index],
                _ => eras.wide[index],
            },
            5 => eras.narrow[index],
            _ => match eras.variant_abbreviated {
                Some(abbreviated) if variant => abbreviated[index],
                _ => eras.abbreviated[index],
            },
        };
        Ok(name)
    }

    /// Render a month field: numeric at runs 1–2, names beyond.
    fn render_month(&self, length: u8, names: &Names, out: &mut String) -> Result<(), Error> {
        let month = self.dt.req_month()?;
        let index = usize::from(month - 1);
        match length {
            1 | 2 => push_padded(out, i64::from(month), usize::from(length)),
            3 => out.push_str(names.abbreviated[index]),
            4 => out.push_str(names.wide[index]),
            _ => out.push_str(names.narrow[index]),
        }
        Ok(())
    }

    /// Render a quarter field: numeric at runs 1–2, names beyond.
    fn render_quarter(&self, length: u8, names: &Names, out: &mut String) -> Result<(), Error> {
        let month = self.dt.req_month()?;
        let quarter = Gregorian.quarter_of_year(month);
        let index = usize::from(quarter - 1);
        match length {
            1 | 2 => push_padded(out, i64::from(quarter), usize::from(length)),
            3 => out.push_str(names.abbreviated[index]),
            4 => out.push_str(names.wide[index]),
            _ => out.push_str(names.narrow[index]),
        }
        Ok(())
    }

    /// The weekday name at the requested width.
    fn weekday_name(&self, length: u8, names: &Names) -> Result<&'static str, Error> {
        let (year, month, day) = self.full_date()?;
        let index = usize::from(Gregorian.day_of_week(year, month, day) - 1);
        let name = match length {
            4 => names.wide[index],
            5 => names.narrow[index],
            6 => names.short.map_or(names.abbreviated[index], |short| short[index]),
            _ => names.abbreviated[index],
        };
        Ok(name)
    }

    /// Render the AM/PM period at the requested width.
    fn render_period(&self, length: u8, out: &mut String) -> Result<(), Error> {
        let hour = self.dt.req_hour()?;
        let key = if hour < 12 { "am" } else { "pm" };
        out.push_str(self.period_name(key, length));
        Ok(())
    }

    /// A period name honoring the `period` variant option.
    fn period_name(&self, key: &str, length: u8) -> &'static str {
        if self.opts.period == NameVariant::Variant {
            let variant_key = if key == "am" { "am-alt" } else { "pm-alt" };
            let table = self.day_period_table(length);
            if let Some(name) = lookup_name(table, variant_key) {
                return name;
            }
        }
        self.day_period_name(key, length)
    }

    /// A day-period name at the requested width, falling back across widths
    /// and ultimately to the key itself for incomplete data.
    fn day_period_name(&self, key: &str, length: u8) -> &'static str {
        lookup_name(self.day_period_table(length), key)
            .or_else(|| lookup_name(self.cal.day_periods.wide, key))
            .unwrap_or("")
    }

    /// The day-period name table for a run length.
    fn day_period_table(&self, length: u8) -> &'static [(&'static str, &'static str)] {
        match length {
            4 => self.cal.day_periods.wide,
            5 => self.cal.day_periods.narrow,
            _ => self.cal.day_periods.abbreviated,
        }
    }

    /// Render a zone field.
    fn render_zone(&self, symbol: char, length: u8, out: &mut String) -> Result<(), Error> {
        let names = &self.data.time_zone_names;
        match (symbol, length) {
            ('z', 1..=3) => match self.dt.zone_abbr.as_deref() {
                Some(abbr) => out.push_str(abbr),
                None => zone::localized_gmt(names, self.dt.req_utc_offset()?, false, out)?,
            },
            // Long specific names need zone name data the input does not
            // carry; the localized GMT format is the TR35 fallback.
            ('z', _) => zone::localized_gmt(names, self.dt.req_utc_offset()?, true, out)?,
            ('Z', 1..=3) => zone::iso_basic(self.dt.req_utc_offset()?, out),
            ('Z', 4) => zone::localized_gmt(names, self.dt.req_utc_offset()?, true, out)?,
            ('Z', _) => zone::iso_8601(self.dt.req_utc_offset()?, 5, true, out),
            ('O', 4) => zone::localized_gmt(names, self.dt.req_utc_offset()?, true, out)?,
            ('O', _) => zone::localized_gmt(names, self.dt.req_utc_offset()?, false, out)?,
            ('v', 4) => zone::localized_gmt(names, self.dt.req_utc_offset()?, true, out)?,
            ('v', _) => zone::localized_gmt(names, self.dt.req_utc_offset()?, false, out)?,
            ('V', 1) => out.push_str(self.dt.zone_abbr.as_deref().unwrap_or("unk")),
            ('V', 2) => out.push_str(self.dt.req_zone_id()?),
            ('V', 3) => out.push_str(&zone::exemplar_city(self.dt.req_zone_id()?)),
            ('V', _) => match self.dt.time_zone.as_deref() {
                Some(zone_id) => out.push_str(&zone::exemplar_city(zone_id)),
                None => zone::localized_gmt(names, self.dt.req_utc_offset()?, true, out)?,
            },
            ('X', _) => zone::iso_8601(self.dt.req_utc_offset()?, length, true, out),
            ('x', _) => zone::iso_8601(self.dt.req_utc_offset()?, length, false, out),
            _ => {}
        }
        Ok(())
    }
}

/// The year as displayed inside its era: year 0 is 1 BC.
fn display_year(year: i32) -> i64 {
    let year = i64::from(year);
    if year <= 0 {
        1 - year
    } else {
        year
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_year() {
        assert_eq!(display_year(2024), 2024);
        assert_eq!(display_year(1), 1);
        assert_eq!(display_year(0), 1);
        assert_eq!(display_year(-1), 2);
        assert_eq!(display_year(-44), 45);
    }
}
