//! Flexible day-period selection.

use crate::locale::DayPeriodRule;

/// Select the day-period key for a minute of the day.
///
/// Rule tables put exact rules first (checked at compile time), so noon and
/// midnight win over the ranges containing them. Ranged rules are half-open
/// and wrap past midnight when `before < from`.
pub(crate) fn select(rules: &[DayPeriodRule], minute_of_day: u16) -> Option<&'static str> {
    for rule in rules {
        match *rule {
            DayPeriodRule::At { key, minute } => {
                if minute_of_day == minute {
                    return Some(key);
                }
            }
            DayPeriodRule::Between { key, from, before } => {
                let matched = if before < from {
                    minute_of_day >= from || minute_of_day < before
                } else {
                    minute_of_day >= from && minute_of_day < before
                };
                if matched {
                    return Some(key);
                }
            }
        }
    }
    None
}
