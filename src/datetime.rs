//! The decomposed instant handed to the formatting functions.

use crate::calendar::Calendar;
use crate::Error;

/// A partially specified instant, decomposed into calendar fields.
///
/// Every field is optional; the formatting functions check that the fields a
/// resolved pattern needs are present and return
/// [`Error::InsufficientFields`] otherwise. Unset zone fields simply make the
/// zone directives unavailable.
///
/// # Examples
///
/// ```
/// use cldr_datetime::{format_date, DateTime, Options};
///
/// let date = DateTime::ymd(2000, 1, 1);
/// let formatted = format_date(&date, &Options::default())?;
/// assert_eq!(formatted, "Jan 1, 2000");
/// # Ok::<(), cldr_datetime::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateTime {
    /// Proleptic year. Non-positive years are rendered through the era, not
    /// with a minus sign.
    pub year: Option<i32>,
    /// Month of the year in `1..=12`.
    pub month: Option<u8>,
    /// Day of the month in `1..=31`.
    pub day: Option<u8>,
    /// Hour of the day in `0..=23`.
    pub hour: Option<u8>,
    /// Minute of the hour in `0..=59`.
    pub minute: Option<u8>,
    /// Second of the minute in `0..=60`, allowing leap seconds.
    pub second: Option<u8>,
    /// Microsecond of the second in `0..=999_999`.
    pub microsecond: Option<u32>,
    /// Nanosecond of the second in `0..=999_999_999`, superseding
    /// `microsecond` for fractional-second rendering when present.
    pub nanosecond: Option<u32>,
    /// Calendar the fields are expressed in.
    pub calendar: Calendar,
    /// Opaque time zone identifier, e.g. `"Europe/Paris"`.
    pub time_zone: Option<String>,
    /// Time zone abbreviation, e.g. `"CET"`.
    pub zone_abbr: Option<String>,
    /// Offset from UTC in seconds, including any daylight saving shift.
    pub utc_offset: Option<i32>,
    /// Standard (non-daylight) offset from UTC in seconds.
    pub std_offset: Option<i32>,
}

impl DateTime {
    /// Construct an instant with full date and time-of-day fields.
    pub fn new(year: i32, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        Self {
            year: Some(year),
            month: Some(month),
            day: Some(day),
            hour: Some(hour),
            minute: Some(minute),
            second: Some(second),
            ..Self::default()
        }
    }

    /// Construct a date-only instant.
    pub fn ymd(year: i32, month: u8, day: u8) -> Self {
        Self {
            year: Some(year),
            month: Some(month),
            day: Some(day),
            ..Self::default()
        }
    }

    /// Construct a time-only instant.
    pub fn hms(hour: u8, minute: u8, second: u8) -> Self {
        Self {
            hour: Some(hour),
            minute: Some(minute),
            second: Some(second),
            ..Self::default()
        }
    }

    /// Attach a microsecond-of-second value.
    #[must_use]
    pub fn with_microsecond(mut self, microsecond: u32) -> Self {
        self.microsecond = Some(microsecond);
        self
    }

    /// Attach a nanosecond-of-second value.
    #[must_use]
    pub fn with_nanosecond(mut self, nanosecond: u32) -> Self {
        self.nanosecond = Some(nanosecond);
        self
    }

    /// Attach zone metadata: identifier, abbreviation and UTC offset in
    /// seconds.
    #[must_use]
    pub fn with_zone(mut self, id: &str, abbr: &str, utc_offset: i32) -> Self {
        self.time_zone = Some(id.into());
        self.zone_abbr = Some(abbr.into());
        self.utc_offset = Some(utc_offset);
        self
    }

    /// Attach a bare UTC offset in seconds.
    #[must_use]
    pub fn with_utc_offset(mut self, utc_offset: i32) -> Self {
        self.utc_offset = Some(utc_offset);
        self
    }

    /// Select a calendar other than the default Gregorian one.
    #[must_use]
    pub fn with_calendar(mut self, calendar: Calendar) -> Self {
        self.calendar = calendar;
        self
    }

    /// Whether any date field is present.
    pub(crate) fn has_date(&self) -> bool {
        self.year.is_some() || self.month.is_some() || self.day.is_some()
    }

    /// Whether any time-of-day field is present.
    pub(crate) fn has_time(&self) -> bool {
        self.hour.is_some() || self.minute.is_some() || self.second.is_some()
    }

    /// Whether all of year, month and day are present.
    pub(crate) fn has_full_date(&self) -> bool {
        self.year.is_some() && self.month.is_some() && self.day.is_some()
    }

    /// Whether all of hour, minute and second are present.
    pub(crate) fn has_full_time(&self) -> bool {
        self.hour.is_some() && self.minute.is_some() && self.second.is_some()
    }

    /// The date-only projection of this instant.
    pub(crate) fn date_part(&self) -> Self {
        Self {
            year: self.year,
            month: self.month,
            day: self.day,
            calendar: self.calendar,
            ..Self::default()
        }
    }

    /// The time-of-day projection of this instant, keeping zone metadata.
    pub(crate) fn time_part(&self) -> Self {
        Self {
            hour: self.hour,
            minute: self.minute,
            second: self.second,
            microsecond: self.microsecond,
            nanosecond: self.nanosecond,
            calendar: self.calendar,
            time_zone: self.time_zone.clone(),
            zone_abbr: self.zone_abbr.clone(),
            utc_offset: self.utc_offset,
            std_offset: self.std_offset,
            ..Self::default()
        }
    }

    /// Checked year.
    pub(crate) fn req_year(&self) -> Result<i32, Error> {
        self.year.ok_or(Error::InsufficientFields("year"))
    }

    /// Checked month in `1..=12`.
    pub(crate) fn req_month(&self) -> Result<u8, Error> {
        match self.month {
            Some(month @ 1..=12) => Ok(month),
            _ => Err(Error::InsufficientFields("month")),
        }
    }

    /// Checked day of the month in `1..=31`.
    pub(crate) fn req_day(&self) -> Result<u8, Error> {
        match self.day {
            Some(day @ 1..=31) => Ok(day),
            _ => Err(Error::InsufficientFields("day")),
        }
    }

    /// Checked hour of the day in `0..=23`.
    pub(crate) fn req_hour(&self) -> Result<u8, Error> {
        match self.hour {
            Some(hour @ 0..=23) => Ok(hour),
            _ => Err(Error::InsufficientFields("hour")),
        }
    }

    /// Checked minute of the hour in `0..=59`.
    pub(crate) fn req_minute(&self) -> Result<u8, Error> {
        match self.minute {
            Some(minute @ 0..=59) => Ok(minute),
            _ => Err(Error::InsufficientFields("minute")),
        }
    }

    /// Checked second of the minute in `0..=60`.
    pub(crate) fn req_second(&self) -> Result<u8, Error> {
        match self.second {
            Some(second @ 0..=60) => Ok(second),
            _ => Err(Error::InsufficientFields("second")),
        }
    }

    /// Nanoseconds of the second, from whichever precision the instant
    /// carries, defaulting to zero.
    pub(crate) fn fraction_nanos(&self) -> u32 {
        match (self.nanosecond, self.microsecond) {
            (Some(nanosecond), _) => nanosecond.min(999_999_999),
            (None, Some(microsecond)) => microsecond.min(999_999) * 1000,
            (None, None) => 0,
        }
    }

    /// Checked UTC offset in seconds.
    pub(crate) fn req_utc_offset(&self) -> Result<i32, Error> {
        self.utc_offset.ok_or(Error::InsufficientFields("utc_offset"))
    }

    /// Checked IANA time zone identifier.
    pub(crate) fn req_zone_id(&self) -> Result<&str, Error> {
        self.time_zone.as_deref().ok_or(Error::InsufficientFields("time_zone"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_fields() {
        let dt = DateTime::new(2024, 6, 3, 10, 30, 59);
        assert_eq!(dt.req_year(), Ok(2024));
        assert_eq!(dt.req_month(), Ok(6));
        assert_eq!(dt.req_day(), Ok(3));
        assert_eq!(dt.req_hour(), Ok(10));
        assert_eq!(dt.req_minute(), Ok(30));
        assert_eq!(dt.req_second(), Ok(59));

        let partial = DateTime {
            year: Some(2024),
            month: Some(13),
            ..DateTime::default()
        };
        assert_eq!(partial.req_month(), Err(Error::InsufficientFields("month")));
        assert_eq!(partial.req_day(), Err(Error::InsufficientFields("day")));
        assert_eq!(partial.req_hour(), Err(Error::InsufficientFields("hour")));
    }

    #[test]
    fn test_shape_predicates() {
        let date = DateTime::ymd(2024, 6, 3);
        assert!(date.has_date() && date.has_full_date());
        assert!(!date.has_time());

        let time = DateTime::hms(10, 0, 0);
        assert!(time.has_time() && time.has_full_time());
        assert!(!time.has_date());

        let partial = DateTime {
            year: Some(2024),
            month: Some(6),
            ..DateTime::default()
        };
        assert!(partial.has_date());
        assert!(!partial.has_full_date());
    }

    #[test]
    fn test_projections() {
        let dt = DateTime::new(2024, 6, 3, 10, 30, 0).with_zone("Europe/Paris", "CEST", 7200);
        let date = dt.date_part();
        assert!(date.has_full_date() && !date.has_time());
        let time = dt.time_part();
        assert!(time.has_full_time() && !time.has_date());
        assert_eq!(time.utc_offset, Some(7200));
    }
}
