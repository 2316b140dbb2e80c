//! English (`en`) locale data.

use crate::assert::{assert_sorted_elem_0, assert_sorted_str};
use crate::calendar::Calendar;
use crate::numbers::Plural;

use super::{
    assert_exact_before_ranged, AvailableFormat, CalendarData, DayPeriodRule, DayPeriods, Eras,
    LocaleData, NameContexts, Names, NumberSymbols, PluralPatterns, RelativeField,
    RelativePatterns, StyleFormats, TimeZoneNames,
};

/// List of wide month names.
const MONTHS_WIDE: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// List of abbreviated month names.
const MONTHS_ABBREVIATED: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// List of narrow month names.
const MONTHS_NARROW: [&str; 12] = ["J", "F", "M", "A", "M", "J", "J", "A", "S", "O", "N", "D"];

/// List of wide weekday names, Monday first.
const WEEKDAYS_WIDE: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// List of abbreviated weekday names, Monday first.
const WEEKDAYS_ABBREVIATED: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// List of short weekday names, Monday first.
const WEEKDAYS_SHORT: [&str; 7] = ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"];

/// List of narrow weekday names, Monday first.
const WEEKDAYS_NARROW: [&str; 7] = ["M", "T", "W", "T", "F", "S", "S"];

/// List of wide quarter names.
const QUARTERS_WIDE: [&str; 4] = ["1st quarter", "2nd quarter", "3rd quarter", "4th quarter"];

/// List of abbreviated quarter names.
const QUARTERS_ABBREVIATED: [&str; 4] = ["Q1", "Q2", "Q3", "Q4"];

/// List of narrow quarter names.
const QUARTERS_NARROW: [&str; 4] = ["1", "2", "3", "4"];

const MONTH_NAMES: Names = Names {
    wide: &MONTHS_WIDE,
    abbreviated: &MONTHS_ABBREVIATED,
    narrow: &MONTHS_NARROW,
    short: None,
};

const WEEKDAY_NAMES: Names = Names {
    wide: &WEEKDAYS_WIDE,
    abbreviated: &WEEKDAYS_ABBREVIATED,
    narrow: &WEEKDAYS_NARROW,
    short: Some(&WEEKDAYS_SHORT),
};

const QUARTER_NAMES: Names = Names {
    wide: &QUARTERS_WIDE,
    abbreviated: &QUARTERS_ABBREVIATED,
    narrow: &QUARTERS_NARROW,
    short: None,
};

/// Day-period names at each width, keyed by day-period key.
static DAY_PERIODS_WIDE: &[(&str, &str)] = assert_sorted_str(&[
    ("afternoon1", "in the afternoon"),
    ("am", "AM"),
    ("am-alt", "am"),
    ("evening1", "in the evening"),
    ("midnight", "midnight"),
    ("morning1", "in the morning"),
    ("night1", "at night"),
    ("noon", "noon"),
    ("pm", "PM"),
    ("pm-alt", "pm"),
]);

static DAY_PERIODS_ABBREVIATED: &[(&str, &str)] = assert_sorted_str(&[
    ("afternoon1", "in the afternoon"),
    ("am", "AM"),
    ("am-alt", "am"),
    ("evening1", "in the evening"),
    ("midnight", "midnight"),
    ("morning1", "in the morning"),
    ("night1", "at night"),
    ("noon", "noon"),
    ("pm", "PM"),
    ("pm-alt", "pm"),
]);

static DAY_PERIODS_NARROW: &[(&str, &str)] = assert_sorted_str(&[
    ("afternoon1", "in the afternoon"),
    ("am", "a"),
    ("am-alt", "am"),
    ("evening1", "in the evening"),
    ("midnight", "mi"),
    ("morning1", "in the morning"),
    ("night1", "at night"),
    ("noon", "n"),
    ("pm", "p"),
    ("pm-alt", "pm"),
]);

/// Day-period selection rules: exact points first, then ranges.
static DAY_PERIOD_RULES: &[DayPeriodRule] = assert_exact_before_ranged(&[
    DayPeriodRule::At {
        key: "midnight",
        minute: 0,
    },
    DayPeriodRule::At {
        key: "noon",
        minute: 720,
    },
    DayPeriodRule::Between {
        key: "morning1",
        from: 360,
        before: 720,
    },
    DayPeriodRule::Between {
        key: "afternoon1",
        from: 720,
        before: 1080,
    },
    DayPeriodRule::Between {
        key: "evening1",
        from: 1080,
        before: 1260,
    },
    DayPeriodRule::Between {
        key: "night1",
        from: 1260,
        before: 360,
    },
]);

/// Available formats keyed by skeleton.
static AVAILABLE_FORMATS: &[(&str, AvailableFormat)] = assert_sorted_str(&[
    (
        "Bh",
        AvailableFormat::Spacing {
            unicode: "h\u{202f}B",
            ascii: "h B",
        },
    ),
    (
        "Bhm",
        AvailableFormat::Spacing {
            unicode: "h:mm\u{202f}B",
            ascii: "h:mm B",
        },
    ),
    (
        "Bhms",
        AvailableFormat::Spacing {
            unicode: "h:mm:ss\u{202f}B",
            ascii: "h:mm:ss B",
        },
    ),
    ("E", AvailableFormat::Plain("ccc")),
    ("EHm", AvailableFormat::Plain("E HH:mm")),
    ("Ed", AvailableFormat::Plain("d E")),
    ("Gy", AvailableFormat::Plain("y G")),
    ("GyMMM", AvailableFormat::Plain("MMM y G")),
    ("H", AvailableFormat::Plain("HH")),
    ("Hm", AvailableFormat::Plain("HH:mm")),
    ("Hms", AvailableFormat::Plain("HH:mm:ss")),
    ("M", AvailableFormat::Plain("L")),
    ("MEd", AvailableFormat::Plain("E, M/d")),
    ("MMM", AvailableFormat::Plain("LLL")),
    ("MMMEd", AvailableFormat::Plain("E, MMM d")),
    ("MMMMd", AvailableFormat::Plain("MMMM d")),
    ("MMMd", AvailableFormat::Plain("MMM d")),
    ("Md", AvailableFormat::Plain("M/d")),
    ("d", AvailableFormat::Plain("d")),
    ("h", AvailableFormat::Plain("h a")),
    ("hm", AvailableFormat::Plain("h:mm a")),
    ("hms", AvailableFormat::Plain("h:mm:ss a")),
    ("ms", AvailableFormat::Plain("mm:ss")),
    ("y", AvailableFormat::Plain("y")),
    ("yM", AvailableFormat::Plain("M/y")),
    ("yMEd", AvailableFormat::Plain("E, M/d/y")),
    ("yMMM", AvailableFormat::Plain("MMM y")),
    ("yMMMEd", AvailableFormat::Plain("E, MMM d, y")),
    ("yMMMM", AvailableFormat::Plain("MMMM y")),
    ("yMMMd", AvailableFormat::Plain("MMM d, y")),
    ("yMd", AvailableFormat::Plain("M/d/y")),
    ("yQQQ", AvailableFormat::Plain("QQQ y")),
    ("yQQQQ", AvailableFormat::Plain("QQQQ y")),
]);

/// Interval formats: skeleton → greatest-difference letter → pattern.
static INTERVAL_FORMATS: &[(&str, &[(u8, &str)])] = assert_sorted_str(&[
    (
        "Bh",
        assert_sorted_elem_0(&[(b'B', "h B – h B"), (b'h', "h – h B")]),
    ),
    (
        "Bhm",
        assert_sorted_elem_0(&[
            (b'B', "h:mm B – h:mm B"),
            (b'h', "h:mm – h:mm B"),
            (b'm', "h:mm – h:mm B"),
        ]),
    ),
    ("H", assert_sorted_elem_0(&[(b'H', "HH – HH")])),
    (
        "Hm",
        assert_sorted_elem_0(&[(b'H', "HH:mm – HH:mm"), (b'm', "HH:mm – HH:mm")]),
    ),
    ("M", assert_sorted_elem_0(&[(b'M', "M – M")])),
    (
        "MEd",
        assert_sorted_elem_0(&[(b'M', "E, M/d – E, M/d"), (b'd', "E, M/d – E, M/d")]),
    ),
    ("MMM", assert_sorted_elem_0(&[(b'M', "MMM – MMM")])),
    (
        "MMMEd",
        assert_sorted_elem_0(&[
            (b'M', "E, MMM d – E, MMM d"),
            (b'd', "E, MMM d – E, MMM d"),
        ]),
    ),
    (
        "MMMd",
        assert_sorted_elem_0(&[(b'M', "MMM d – MMM d"), (b'd', "MMM d – d")]),
    ),
    (
        "Md",
        assert_sorted_elem_0(&[(b'M', "M/d – M/d"), (b'd', "M/d – M/d")]),
    ),
    ("d", assert_sorted_elem_0(&[(b'd', "d – d")])),
    (
        "h",
        assert_sorted_elem_0(&[(b'a', "h a – h a"), (b'h', "h – h a")]),
    ),
    (
        "hm",
        assert_sorted_elem_0(&[
            (b'a', "h:mm a – h:mm a"),
            (b'h', "h:mm – h:mm a"),
            (b'm', "h:mm – h:mm a"),
        ]),
    ),
    ("y", assert_sorted_elem_0(&[(b'y', "y – y")])),
    (
        "yM",
        assert_sorted_elem_0(&[(b'M', "M/y – M/y"), (b'y', "M/y – M/y")]),
    ),
    (
        "yMEd",
        assert_sorted_elem_0(&[
            (b'M', "E, M/d/y – E, M/d/y"),
            (b'd', "E, M/d/y – E, M/d/y"),
            (b'y', "E, M/d/y – E, M/d/y"),
        ]),
    ),
    (
        "yMMM",
        assert_sorted_elem_0(&[(b'M', "MMM – MMM y"), (b'y', "MMM y – MMM y")]),
    ),
    (
        "yMMMEd",
        assert_sorted_elem_0(&[
            (b'M', "E, MMM d – E, MMM d, y"),
            (b'd', "E, MMM d – E, MMM d, y"),
            (b'y', "E, MMM d, y – E, MMM d, y"),
        ]),
    ),
    (
        "yMMMM",
        assert_sorted_elem_0(&[(b'M', "MMMM – MMMM y"), (b'y', "MMMM y – MMMM y")]),
    ),
    (
        "yMMMd",
        assert_sorted_elem_0(&[
            (b'M', "MMM d – MMM d, y"),
            (b'd', "MMM d – d, y"),
            (b'y', "MMM d, y – MMM d, y"),
        ]),
    ),
    (
        "yMd",
        assert_sorted_elem_0(&[
            (b'M', "M/d/y – M/d/y"),
            (b'd', "M/d/y – M/d/y"),
            (b'y', "M/d/y – M/d/y"),
        ]),
    ),
]);

/// Relative-time fields keyed by unit index.
static DATE_FIELDS: &[(u8, RelativeField)] = assert_sorted_elem_0(&[
    (
        0, // year
        RelativeField {
            standard: RelativePatterns {
                exact: &[(-1, "last year"), (0, "this year"), (1, "next year")],
                future: PluralPatterns::one_other("in {0} year", "in {0} years"),
                past: PluralPatterns::one_other("{0} year ago", "{0} years ago"),
            },
            short: Some(RelativePatterns {
                exact: &[(-1, "last yr."), (0, "this yr."), (1, "next yr.")],
                future: PluralPatterns::invariant("in {0} yr."),
                past: PluralPatterns::invariant("{0} yr. ago"),
            }),
            narrow: Some(RelativePatterns {
                exact: &[(-1, "last yr."), (0, "this yr."), (1, "next yr.")],
                future: PluralPatterns::invariant("in {0} yr."),
                past: PluralPatterns::invariant("{0} yr. ago"),
            }),
        },
    ),
    (
        1, // quarter
        RelativeField {
            standard: RelativePatterns {
                exact: &[
                    (-1, "last quarter"),
                    (0, "this quarter"),
                    (1, "next quarter"),
                ],
                future: PluralPatterns::one_other("in {0} quarter", "in {0} quarters"),
                past: PluralPatterns::one_other("{0} quarter ago", "{0} quarters ago"),
            },
            short: Some(RelativePatterns {
                exact: &[(-1, "last qtr."), (0, "this qtr."), (1, "next qtr.")],
                future: PluralPatterns::invariant("in {0} qtrs."),
                past: PluralPatterns::invariant("{0} qtrs. ago"),
            }),
            narrow: None,
        },
    ),
    (
        2, // month
        RelativeField {
            standard: RelativePatterns {
                exact: &[(-1, "last month"), (0, "this month"), (1, "next month")],
                future: PluralPatterns::one_other("in {0} month", "in {0} months"),
                past: PluralPatterns::one_other("{0} month ago", "{0} months ago"),
            },
            short: Some(RelativePatterns {
                exact: &[(-1, "last mo."), (0, "this mo."), (1, "next mo.")],
                future: PluralPatterns::invariant("in {0} mo."),
                past: PluralPatterns::invariant("{0} mo. ago"),
            }),
            narrow: None,
        },
    ),
    (
        3, // week
        RelativeField {
            standard: RelativePatterns {
                exact: &[(-1, "last week"), (0, "this week"), (1, "next week")],
                future: PluralPatterns::one_other("in {0} week", "in {0} weeks"),
                past: PluralPatterns::one_other("{0} week ago", "{0} weeks ago"),
            },
            short: Some(RelativePatterns {
                exact: &[(-1, "last wk."), (0, "this wk."), (1, "next wk.")],
                future: PluralPatterns::invariant("in {0} wk."),
                past: PluralPatterns::invariant("{0} wk. ago"),
            }),
            narrow: None,
        },
    ),
    (
        4, // day
        RelativeField {
            standard: RelativePatterns {
                exact: &[(-1, "yesterday"), (0, "today"), (1, "tomorrow")],
                future: PluralPatterns::one_other("in {0} day", "in {0} days"),
                past: PluralPatterns::one_other("{0} day ago", "{0} days ago"),
            },
            short: Some(RelativePatterns {
                exact: &[(-1, "yesterday"), (0, "today"), (1, "tomorrow")],
                future: PluralPatterns::one_other("in {0} day", "in {0} days"),
                past: PluralPatterns::one_other("{0} day ago", "{0} days ago"),
            }),
            narrow: None,
        },
    ),
    (
        5, // hour
        RelativeField {
            standard: RelativePatterns {
                exact: &[(0, "this hour")],
                future: PluralPatterns::one_other("in {0} hour", "in {0} hours"),
                past: PluralPatterns::one_other("{0} hour ago", "{0} hours ago"),
            },
            short: Some(RelativePatterns {
                exact: &[(0, "this hour")],
                future: PluralPatterns::invariant("in {0} hr."),
                past: PluralPatterns::invariant("{0} hr. ago"),
            }),
            narrow: None,
        },
    ),
    (
        6, // minute
        RelativeField {
            standard: RelativePatterns {
                exact: &[(0, "this minute")],
                future: PluralPatterns::one_other("in {0} minute", "in {0} minutes"),
                past: PluralPatterns::one_other("{0} minute ago", "{0} minutes ago"),
            },
            short: Some(RelativePatterns {
                exact: &[(0, "this minute")],
                future: PluralPatterns::invariant("in {0} min."),
                past: PluralPatterns::invariant("{0} min. ago"),
            }),
            narrow: None,
        },
    ),
    (
        7, // second
        RelativeField {
            standard: RelativePatterns {
                exact: &[(0, "now")],
                future: PluralPatterns::one_other("in {0} second", "in {0} seconds"),
                past: PluralPatterns::one_other("{0} second ago", "{0} seconds ago"),
            },
            short: Some(RelativePatterns {
                exact: &[(0, "now")],
                future: PluralPatterns::invariant("in {0} sec."),
                past: PluralPatterns::invariant("{0} sec. ago"),
            }),
            narrow: None,
        },
    ),
    (
        8, // monday
        RelativeField {
            standard: RelativePatterns {
                exact: &[(-1, "last Monday"), (0, "this Monday"), (1, "next Monday")],
                future: PluralPatterns::one_other("in {0} Monday", "in {0} Mondays"),
                past: PluralPatterns::one_other("{0} Monday ago", "{0} Mondays ago"),
            },
            short: None,
            narrow: None,
        },
    ),
    (
        9, // tuesday
        RelativeField {
            standard: RelativePatterns {
                exact: &[
                    (-1, "last Tuesday"),
                    (0, "this Tuesday"),
                    (1, "next Tuesday"),
                ],
                future: PluralPatterns::one_other("in {0} Tuesday", "in {0} Tuesdays"),
                past: PluralPatterns::one_other("{0} Tuesday ago", "{0} Tuesdays ago"),
            },
            short: None,
            narrow: None,
        },
    ),
    (
        10, // wednesday
        RelativeField {
            standard: RelativePatterns {
                exact: &[
                    (-1, "last Wednesday"),
                    (0, "this Wednesday"),
                    (1, "next Wednesday"),
                ],
                future: PluralPatterns::one_other("in {0} Wednesday", "in {0} Wednesdays"),
                past: PluralPatterns::one_other("{0} Wednesday ago", "{0} Wednesdays ago"),
            },
            short: None,
            narrow: None,
        },
    ),
    (
        11, // thursday
        RelativeField {
            standard: RelativePatterns {
                exact: &[
                    (-1, "last Thursday"),
                    (0, "this Thursday"),
                    (1, "next Thursday"),
                ],
                future: PluralPatterns::one_other("in {0} Thursday", "in {0} Thursdays"),
                past: PluralPatterns::one_other("{0} Thursday ago", "{0} Thursdays ago"),
            },
            short: None,
            narrow: None,
        },
    ),
    (
        12, // friday
        RelativeField {
            standard: RelativePatterns {
                exact: &[(-1, "last Friday"), (0, "this Friday"), (1, "next Friday")],
                future: PluralPatterns::one_other("in {0} Friday", "in {0} Fridays"),
                past: PluralPatterns::one_other("{0} Friday ago", "{0} Fridays ago"),
            },
            short: None,
            narrow: None,
        },
    ),
    (
        13, // saturday
        RelativeField {
            standard: RelativePatterns {
                exact: &[
                    (-1, "last Saturday"),
                    (0, "this Saturday"),
                    (1, "next Saturday"),
                ],
                future: PluralPatterns::one_other("in {0} Saturday", "in {0} Saturdays"),
                past: PluralPatterns::one_other("{0} Saturday ago", "{0} Saturdays ago"),
            },
            short: None,
            narrow: None,
        },
    ),
    (
        14, // sunday
        RelativeField {
            standard: RelativePatterns {
                exact: &[(-1, "last Sunday"), (0, "this Sunday"), (1, "next Sunday")],
                future: PluralPatterns::one_other("in {0} Sunday", "in {0} Sundays"),
                past: PluralPatterns::one_other("{0} Sunday ago", "{0} Sundays ago"),
            },
            short: None,
            narrow: None,
        },
    ),
]);

/// CLDR cardinal plural rule for `en`.
fn plural(n: u64) -> Plural {
    if n == 1 {
        Plural::One
    } else {
        Plural::Other
    }
}

pub(super) static DATA: LocaleData = LocaleData {
    tag: "en",
    calendars: &[Calendar::Gregorian],
    gregorian: CalendarData {
        months: NameContexts {
            format: MONTH_NAMES,
            stand_alone: MONTH_NAMES,
        },
        weekdays: NameContexts {
            format: WEEKDAY_NAMES,
            stand_alone: WEEKDAY_NAMES,
        },
        quarters: NameContexts {
            format: QUARTER_NAMES,
            stand_alone: QUARTER_NAMES,
        },
        eras: Eras {
            abbreviated: ["BC", "AD"],
            wide: ["Before Christ", "Anno Domini"],
            narrow: ["B", "A"],
            variant_abbreviated: Some(["BCE", "CE"]),
            variant_wide: Some(["Before Common Era", "Common Era"]),
        },
        day_periods: DayPeriods {
            rules: DAY_PERIOD_RULES,
            wide: DAY_PERIODS_WIDE,
            abbreviated: DAY_PERIODS_ABBREVIATED,
            narrow: DAY_PERIODS_NARROW,
        },
        date_formats: StyleFormats {
            short: "M/d/yy",
            medium: "MMM d, y",
            long: "MMMM d, y",
            full: "EEEE, MMMM d, y",
        },
        time_formats: StyleFormats {
            short: "h:mm a",
            medium: "h:mm:ss a",
            long: "h:mm:ss a z",
            full: "h:mm:ss a zzzz",
        },
        date_time_formats: StyleFormats {
            short: "{1}, {0}",
            medium: "{1}, {0}",
            long: "{1}, {0}",
            full: "{1}, {0}",
        },
        date_time_at_formats: Some(StyleFormats {
            short: "{1}, {0}",
            medium: "{1}, {0}",
            long: "{1} 'at' {0}",
            full: "{1} 'at' {0}",
        }),
        available_formats: AVAILABLE_FORMATS,
        interval_formats: INTERVAL_FORMATS,
        interval_fallback: "{0} – {1}",
    },
    time_zone_names: TimeZoneNames {
        gmt_format: "GMT{0}",
        gmt_zero_format: "GMT",
        hour_format: "+HH:mm;-HH:mm",
    },
    date_fields: DATE_FIELDS,
    number_system: "latn",
    number_symbols: NumberSymbols { group: "," },
    plural,
    first_weekday: 7,
    preferred_hour: 'h',
};
