//! The number and digit bridge: padded and grouped integers, plural
//! categories, and digit transliteration into non-Latin number systems.

use crate::assert::assert_sorted_str;
use crate::locale::LocaleData;
use crate::options::Options;
use crate::Error;

/// CLDR plural categories.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub(crate) enum Plural {
    /// The `zero` category.
    Zero,
    /// The `one` category.
    One,
    /// The `two` category.
    Two,
    /// The `few` category.
    Few,
    /// The `many` category.
    Many,
    /// The `other` category, always present.
    Other,
}

/// Decimal digit tables for the supported number systems, keyed by CLDR
/// number system name.
static NUMBER_SYSTEMS: &[(&str, [char; 10])] = assert_sorted_str(&[
    ("arab", ['٠', '١', '٢', '٣', '٤', '٥', '٦', '٧', '٨', '٩']),
    ("deva", ['०', '१', '२', '३', '४', '५', '६', '७', '८', '९']),
    ("latn", ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9']),
    ("thai", ['๐', '๑', '๒', '๓', '๔', '๕', '๖', '๗', '๘', '๙']),
]);

/// Append a non-negative integer zero-padded to at least `width` digits.
pub(crate) fn push_padded(out: &mut String, value: i64, width: usize) {
    out.push_str(&format!("{value:0width$}"));
}

/// Append an unsigned integer with the locale's grouping separator every
/// three digits, as the relative-time engine needs for large counts.
pub(crate) fn push_grouped(out: &mut String, value: u64, data: &LocaleData) {
    let digits = value.to_string();
    let first_group = match digits.len() % 3 {
        0 => 3,
        rem => rem,
    };
    for (index, digit) in digits.chars().enumerate() {
        if index != 0 && (index + 3 - first_group) % 3 == 0 {
            out.push_str(data.number_symbols.group);
        }
        out.push(digit);
    }
}

/// The number system a call renders digits in: the caller's override if
/// given, the locale default otherwise.
pub(crate) fn effective_system<'a>(
    opts: &Options<'a>,
    data: &'static LocaleData,
) -> Result<&'a str, Error> {
    let system = opts.number_system.unwrap_or(data.number_system);
    if digits_for(system).is_none() {
        return Err(Error::InvalidNumberSystem(system.into()));
    }
    Ok(system)
}

/// Map every ASCII digit of `text` into the target number system.
///
/// The mapping is a pure per-codepoint substitution; everything that is not
/// an ASCII digit passes through untouched.
pub(crate) fn transliterate(text: &str, system: &str) -> Result<String, Error> {
    let Some(digits) = digits_for(system) else {
        return Err(Error::InvalidNumberSystem(system.into()));
    };
    Ok(text
        .chars()
        .map(|c| match c.to_digit(10) {
            Some(d) if c.is_ascii_digit() => digits[d as usize],
            _ => c,
        })
        .collect())
}

/// Apply the effective number system to an assembled Latin-digit output.
pub(crate) fn apply_number_system(
    text: String,
    opts: &Options<'_>,
    data: &'static LocaleData,
) -> Result<String, Error> {
    let system = effective_system(opts, data)?;
    if system == "latn" {
        return Ok(text);
    }
    transliterate(&text, system)
}

/// The digit table for a number system name.
fn digits_for(system: &str) -> Option<&'static [char; 10]> {
    NUMBER_SYSTEMS
        .binary_search_by_key(&system, |&(name, _)| name)
        .ok()
        .map(|index| &NUMBER_SYSTEMS[index].1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale;

    #[test]
    fn test_push_padded() {
        let mut out = String::new();
        push_padded(&mut out, 7, 2);
        out.push(' ');
        push_padded(&mut out, 7, 1);
        out.push(' ');
        push_padded(&mut out, 2024, 2);
        assert_eq!(out, "07 7 2024");
    }

    #[test]
    fn test_push_grouped() {
        let en = locale::lookup("en").unwrap();
        let fr = locale::lookup("fr").unwrap();

        let mut out = String::new();
        push_grouped(&mut out, 1_234_567, en);
        assert_eq!(out, "1,234,567");

        let mut out = String::new();
        push_grouped(&mut out, 1234, fr);
        assert_eq!(out, "1\u{202f}234");

        let mut out = String::new();
        push_grouped(&mut out, 999, en);
        assert_eq!(out, "999");
    }

    #[test]
    fn test_transliterate() {
        assert_eq!(transliterate("06/2024", "arab").unwrap(), "٠٦/٢٠٢٤");
        assert_eq!(transliterate("10:30", "deva").unwrap(), "१०:३०");
        assert_eq!(transliterate("abc", "thai").unwrap(), "abc");
        assert_eq!(transliterate("12", "latn").unwrap(), "12");
        assert_eq!(
            transliterate("12", "wxyz"),
            Err(Error::InvalidNumberSystem("wxyz".into()))
        );
    }
}
