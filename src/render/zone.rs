//! Time zone field rendering: localized GMT composition and ISO 8601 forms.

use crate::locale::TimeZoneNames;
use crate::numbers::push_padded;
use crate::pattern::{lex, Segment};
use crate::Error;

/// A UTC offset decomposed for rendering.
#[derive(Debug, Copy, Clone)]
pub(crate) struct OffsetParts {
    /// Whether the offset is negative.
    negative: bool,
    /// Absolute hours.
    hours: i64,
    /// Absolute minutes past the hour.
    minutes: i64,
    /// Absolute seconds past the minute.
    seconds: i64,
}

impl OffsetParts {
    /// Decompose an offset in seconds.
    pub(crate) fn new(utc_offset: i32) -> Self {
        let abs = i64::from(utc_offset.unsigned_abs());
        Self {
            negative: utc_offset < 0,
            hours: abs / 3600,
            minutes: (abs / 60) % 60,
            seconds: abs % 60,
        }
    }

    fn sign(&self) -> char {
        if self.negative {
            '-'
        } else {
            '+'
        }
    }
}

/// Append the offset through the locale's GMT templates.
///
/// A zero offset short-circuits to `gmt_zero_format`. Otherwise the matching
/// half of `hour_format` is rendered as its own sub-pattern and substituted
/// into the `{0}` placeholder of `gmt_format`. The short form minimizes:
/// unpadded hour, minutes only when nonzero.
pub(crate) fn localized_gmt(
    names: &TimeZoneNames,
    utc_offset: i32,
    long: bool,
    out: &mut String,
) -> Result<(), Error> {
    if utc_offset == 0 {
        out.push_str(names.gmt_zero_format);
        return Ok(());
    }

    let parts = OffsetParts::new(utc_offset);
    let (positive, negative) = names
        .hour_format
        .split_once(';')
        .unwrap_or((names.hour_format, names.hour_format));
    let sub_pattern = if parts.negative { negative } else { positive };

    let mut offset_text = String::new();
    render_hour_format(sub_pattern, parts, long, &mut offset_text)?;

    match names.gmt_format.split_once("{0}") {
        Some((head, tail)) => {
            out.push_str(head);
            out.push_str(&offset_text);
            out.push_str(tail);
        }
        None => out.push_str(names.gmt_format),
    }
    Ok(())
}

/// Render one half of `hour_format` against decomposed offset parts.
fn render_hour_format(
    sub_pattern: &str,
    parts: OffsetParts,
    long: bool,
    out: &mut String,
) -> Result<(), Error> {
    let segments = lex(sub_pattern)?;
    for (index, segment) in segments.iter().enumerate() {
        match segment {
            Segment::Literal(text) => {
                // The short form ends right after the hour when there is
                // nothing more to show.
                if !long && parts.minutes == 0 && follows_hour(&segments, index) {
                    break;
                }
                out.push_str(text);
            }
            Segment::Field { symbol, length } => match symbol {
                'H' | 'h' => {
                    let width = if long { usize::from(*length) } else { 1 };
                    push_padded(out, parts.hours, width);
                }
                'm' => {
                    if !long && parts.minutes == 0 {
                        break;
                    }
                    push_padded(out, parts.minutes, usize::from(*length));
                }
                's' => push_padded(out, parts.seconds, usize::from(*length)),
                _ => {}
            },
        }
    }
    Ok(())
}

/// Whether every field before `index` has already been rendered and the next
/// field is past the hour.
fn follows_hour(segments: &[Segment], index: usize) -> bool {
    segments[..index]
        .iter()
        .any(|segment| matches!(segment, Segment::Field { symbol: 'H' | 'h', .. }))
}

/// ISO 8601 basic form `±HHmm`.
pub(crate) fn iso_basic(utc_offset: i32, out: &mut String) {
    let parts = OffsetParts::new(utc_offset);
    out.push(parts.sign());
    push_padded(out, parts.hours, 2);
    push_padded(out, parts.minutes, 2);
}

/// ISO 8601 forms for the `X` and `x` symbols.
///
/// Run lengths select the shape: 1 `±HH[mm]`, 2 `±HHmm`, 3 `±HH:mm`,
/// 4 `±HHmm[ss]`, 5 `±HH:mm[:ss]`. With `z_for_zero`, a zero offset renders
/// as the `Z` marker.
pub(crate) fn iso_8601(utc_offset: i32, length: u8, z_for_zero: bool, out: &mut String) {
    if z_for_zero && utc_offset == 0 {
        out.push('Z');
        return;
    }

    let parts = OffsetParts::new(utc_offset);
    out.push(parts.sign());
    push_padded(out, parts.hours, 2);

    match length {
        1 => {
            if parts.minutes != 0 {
                push_padded(out, parts.minutes, 2);
            }
        }
        2 => push_padded(out, parts.minutes, 2),
        3 => {
            out.push(':');
            push_padded(out, parts.minutes, 2);
        }
        4 => {
            push_padded(out, parts.minutes, 2);
            if parts.seconds != 0 {
                push_padded(out, parts.seconds, 2);
            }
        }
        _ => {
            out.push(':');
            push_padded(out, parts.minutes, 2);
            if parts.seconds != 0 {
                out.push(':');
                push_padded(out, parts.seconds, 2);
            }
        }
    }
}

/// The exemplar city derived from a zone identifier, e.g.
/// `"America/New_York"` → `"New York"`.
pub(crate) fn exemplar_city(zone_id: &str) -> String {
    let city = zone_id.rsplit('/').next().unwrap_or(zone_id);
    city.replace('_', " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAMES: TimeZoneNames = TimeZoneNames {
        gmt_format: "GMT{0}",
        gmt_zero_format: "GMT",
        hour_format: "+HH:mm;-HH:mm",
    };

    fn gmt(offset: i32, long: bool) -> String {
        let mut out = String::new();
        localized_gmt(&NAMES, offset, long, &mut out).unwrap();
        out
    }

    #[test]
    fn test_localized_gmt_zero() {
        assert_eq!(gmt(0, false), "GMT");
        assert_eq!(gmt(0, true), "GMT");
    }

    #[test]
    fn test_localized_gmt_long() {
        assert_eq!(gmt(3600, true), "GMT+01:00");
        assert_eq!(gmt(-28_800, true), "GMT-08:00");
        assert_eq!(gmt(19_800, true), "GMT+05:30");
    }

    #[test]
    fn test_localized_gmt_short() {
        assert_eq!(gmt(3600, false), "GMT+1");
        assert_eq!(gmt(-28_800, false), "GMT-8");
        assert_eq!(gmt(19_800, false), "GMT+5:30");
    }

    #[test]
    fn test_iso_8601() {
        let mut out = String::new();
        iso_basic(-28_800, &mut out);
        assert_eq!(out, "-0800");

        let cases: &[(i32, u8, bool, &str)] = &[
            (0, 1, true, "Z"),
            (0, 3, false, "+00:00"),
            (3600, 1, true, "+01"),
            (19_800, 1, true, "+0530"),
            (19_800, 2, true, "+0530"),
            (19_800, 3, true, "+05:30"),
            (-3615, 4, false, "-010015"),
            (-3615, 5, false, "-01:00:15"),
            (-3600, 5, false, "-01:00"),
        ];
        for &(offset, length, z_for_zero, expected) in cases {
            let mut out = String::new();
            iso_8601(offset, length, z_for_zero, &mut out);
            assert_eq!(out, expected, "offset {offset} length {length}");
        }
    }

    #[test]
    fn test_exemplar_city() {
        assert_eq!(exemplar_city("America/New_York"), "New York");
        assert_eq!(exemplar_city("Europe/Paris"), "Paris");
        assert_eq!(exemplar_city("UTC"), "UTC");
    }
}
