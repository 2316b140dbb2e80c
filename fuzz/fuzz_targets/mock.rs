use arbitrary::Arbitrary;
use cldr_datetime::DateTime;

/// Arbitrary calendar fields, mapped into a partial instant.
#[derive(Debug, Arbitrary)]
pub(super) struct MockFields {
    year: Option<i32>,
    month: Option<u8>,
    day: Option<u8>,
    hour: Option<u8>,
    minute: Option<u8>,
    second: Option<u8>,
    microsecond: Option<u32>,
    nanosecond: Option<u32>,
    utc_offset: Option<i32>,
    zone_abbr: Option<String>,
    time_zone: Option<String>,
}

impl MockFields {
    pub(super) fn into_datetime(self) -> DateTime {
        DateTime {
            year: self.year,
            month: self.month,
            day: self.day,
            hour: self.hour,
            minute: self.minute,
            second: self.second,
            microsecond: self.microsecond,
            nanosecond: self.nanosecond,
            utc_offset: self.utc_offset,
            zone_abbr: self.zone_abbr,
            time_zone: self.time_zone,
            ..DateTime::default()
        }
    }
}
