//! Skeleton derivation and available-format best-match scoring.

use crate::datetime::DateTime;
use crate::locale::{AvailableFormat, CalendarData, LocaleData};
use crate::resolve::Kind;
use crate::Error;

/// Derive the skeleton letters for the fields present on a partial instant.
///
/// Each present field contributes its canonical letter once; the hour letter
/// follows the locale's preferred hour cycle.
pub(crate) fn derive(dt: &DateTime, data: &LocaleData, kind: Kind) -> Vec<char> {
    let mut letters = Vec::new();
    if kind != Kind::Time {
        if dt.year.is_some() {
            letters.push('y');
        }
        if dt.month.is_some() {
            letters.push('M');
        }
        if dt.day.is_some() {
            letters.push('d');
        }
    }
    if kind != Kind::Date {
        if dt.hour.is_some() {
            letters.push(data.preferred_hour);
        }
        if dt.minute.is_some() {
            letters.push('m');
        }
        if dt.second.is_some() {
            letters.push('s');
        }
    }
    letters
}

/// Find the closest available format for the requested letters.
///
/// Only keys covering exactly the requested letters qualify; among those the
/// lowest run-length distance wins, with ties broken by key length and then
/// key order. No qualifying key is [`Error::UnresolvedFormat`].
pub(crate) fn best_match(
    letters: &[char],
    cal: &'static CalendarData,
) -> Result<&'static AvailableFormat, Error> {
    let mut best: Option<(&'static str, &'static AvailableFormat, u32)> = None;

    for (key, format) in cal.available_formats {
        let Some(score) = score_key(key, letters) else {
            continue;
        };
        let better = match best {
            None => true,
            Some((best_key, _, best_score)) => {
                score < best_score || (score == best_score && key.len() < best_key.len())
            }
        };
        if better {
            best = Some((key, format, score));
        }
    }

    match best {
        Some((_, format, _)) => Ok(format),
        None => Err(Error::UnresolvedFormat(unresolved_name(letters))),
    }
}

/// Score a key against the requested letters, or `None` when the key's
/// letter set differs from the requested one.
fn score_key(key: &str, letters: &[char]) -> Option<u32> {
    let mut score = 0;
    let mut matched = 0;
    let mut chars = key.chars().peekable();

    while let Some(symbol) = chars.next() {
        let mut run = 1u32;
        while chars.peek() == Some(&symbol) {
            chars.next();
            run += 1;
        }
        if !letters.contains(&symbol) {
            return None;
        }
        matched += 1;
        score += run - 1;
    }

    (matched == letters.len()).then_some(score)
}

/// The skeleton name reported for an unresolved request: the requested
/// letters in code point order.
fn unresolved_name(letters: &[char]) -> String {
    let mut sorted = letters.to_vec();
    sorted.sort_unstable();
    sorted.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale;

    fn en() -> &'static CalendarData {
        &locale::lookup("en").unwrap().gregorian
    }

    #[test]
    fn test_derive_date_letters() {
        let en = locale::lookup("en").unwrap();
        let partial = DateTime {
            year: Some(2024),
            month: Some(6),
            ..DateTime::default()
        };
        assert_eq!(derive(&partial, en, Kind::Date), vec!['y', 'M']);
    }

    #[test]
    fn test_derive_respects_preferred_hour() {
        let en = locale::lookup("en").unwrap();
        let fr = locale::lookup("fr").unwrap();
        let partial = DateTime {
            hour: Some(10),
            minute: Some(30),
            ..DateTime::default()
        };
        assert_eq!(derive(&partial, en, Kind::Time), vec!['h', 'm']);
        assert_eq!(derive(&partial, fr, Kind::Time), vec!['H', 'm']);
    }

    #[test]
    fn test_best_match_prefers_exact_run_lengths() {
        // Both "yM" and "yMMM" cover {y, M}; "yM" is closer.
        let format = best_match(&['y', 'M'], en()).unwrap();
        assert!(matches!(format, AvailableFormat::Plain("M/y")));
    }

    #[test]
    fn test_best_match_rejects_partial_coverage() {
        // "yMd" covers {y, d} only with an extra M, so nothing qualifies.
        let err = best_match(&['y', 'd'], en()).unwrap_err();
        assert_eq!(err, Error::UnresolvedFormat("dy".into()));
    }

    #[test]
    fn test_score_key() {
        assert_eq!(score_key("yM", &['y', 'M']), Some(0));
        assert_eq!(score_key("yMMM", &['y', 'M']), Some(2));
        assert_eq!(score_key("yMd", &['y', 'M']), None);
        assert_eq!(score_key("y", &['y', 'M']), None);
    }
}
