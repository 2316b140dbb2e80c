//! French (`fr`) locale data.

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
    "janvier",
    "février",
    "mars",
    "avril",
    "mai",
    "juin",
    "juillet",
    "août",
    "septembre",
    "octobre",
    "novembre",
    "décembre",
];

/// List of abbreviated month names.
const MONTHS_ABBREVIATED: [&str; 12] = [
    "janv.", "févr.", "mars", "avr.", "mai", "juin", "juil.", "août", "sept.", "oct.", "nov.",
    "déc.",
];

/// List of narrow month names.
const MONTHS_NARROW: [&str; 12] = ["J", "F", "M", "A", "M", "J", "J", "A", "S", "O", "N", "D"];

/// List of wide weekday names, Monday first.
const WEEKDAYS_WIDE: [&str; 7] = [
    "lundi", "mardi", "mercredi", "jeudi", "vendredi", "samedi", "dimanche",
];

/// List of abbreviated weekday names, Monday first.
const WEEKDAYS_ABBREVIATED: [&str; 7] = ["lun.", "mar.", "mer.", "jeu.", "ven.", "sam.", "dim."];

/// List of short weekday names, Monday first.
const WEEKDAYS_SHORT: [&str; 7] = ["lu", "ma", "me", "je", "ve", "sa", "di"];

/// List of narrow weekday names, Monday first.
const WEEKDAYS_NARROW: [&str; 7] = ["L", "M", "M", "J", "V", "S", "D"];

/// List of wide quarter names.
const QUARTERS_WIDE: [&str; 4] = [
    "1er trimestre",
    "2e trimestre",
    "3e trimestre",
    "4e trimestre",
];

/// List of abbreviated quarter names.
const QUARTERS_ABBREVIATED: [&str; 4] = ["T1", "T2", "T3", "T4"];

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
    ("afternoon1", "de l’après-midi"),
    ("am", "AM"),
    ("evening1", "du soir"),
    ("midnight", "minuit"),
    ("morning1", "du matin"),
    ("night1", "de nuit"),
    ("noon", "midi"),
    ("pm", "PM"),
]);

static DAY_PERIODS_ABBREVIATED: &[(&str, &str)] = assert_sorted_str(&[
    ("afternoon1", "de l’ap.m."),
    ("am", "AM"),
    ("evening1", "du soir"),
    ("midnight", "minuit"),
    ("morning1", "du mat."),
    ("night1", "de nuit"),
    ("noon", "midi"),
    ("pm", "PM"),
]);

static DAY_PERIODS_NARROW: &[(&str, &str)] = assert_sorted_str(&[
    ("afternoon1", "de l’ap.m."),
    ("am", "AM"),
    ("evening1", "du soir"),
    ("midnight", "minuit"),
    ("morning1", "du mat."),
    ("night1", "de nuit"),
    ("noon", "midi"),
    ("pm", "PM"),
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
        key: "night1",
        from: 0,
        before: 240,
    },
    DayPeriodRule::Between {
        key: "morning1",
        from: 240,
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
        before: 1440,
    },
]);

/// Available formats keyed by skeleton.
static AVAILABLE_FORMATS: &[(&str, AvailableFormat)] = assert_sorted_str(&[
    ("Bh", AvailableFormat::Plain("h B")),
    ("Bhm", AvailableFormat::Plain("h:mm B")),
    ("Bhms", AvailableFormat::Plain("h:mm:ss B")),
    ("E", AvailableFormat::Plain("E")),
    ("EHm", AvailableFormat::Plain("E HH:mm")),
    ("Ed", AvailableFormat::Plain("E d")),
    ("Gy", AvailableFormat::Plain("y G")),
    ("GyMMM", AvailableFormat::Plain("MMM y G")),
    ("H", AvailableFormat::Plain("HH 'h'")),
    ("Hm", AvailableFormat::Plain("HH:mm")),
    ("Hms", AvailableFormat::Plain("HH:mm:ss")),
    ("M", AvailableFormat::Plain("L")),
    ("MEd", AvailableFormat::Plain("E dd/MM")),
    ("MMM", AvailableFormat::Plain("LLL")),
    ("MMMEd", AvailableFormat::Plain("E d MMM")),
    (
        "MMMMd",
        AvailableFormat::Variant {
            default: "d MMMM",
            variant: "'le' d MMMM",
        },
    ),
    ("MMMd", AvailableFormat::Plain("d MMM")),
    ("Md", AvailableFormat::Plain("dd/MM")),
    ("d", AvailableFormat::Plain("d")),
    ("h", AvailableFormat::Plain("h a")),
    ("hm", AvailableFormat::Plain("h:mm a")),
    ("hms", AvailableFormat::Plain("h:mm:ss a")),
    ("ms", AvailableFormat::Plain("mm:ss")),
    ("y", AvailableFormat::Plain("y")),
    ("yM", AvailableFormat::Plain("MM/y")),
    ("yMEd", AvailableFormat::Plain("E dd/MM/y")),
    ("yMMM", AvailableFormat::Plain("MMM y")),
    ("yMMMEd", AvailableFormat::Plain("E d MMM y")),
    ("yMMMM", AvailableFormat::Plain("MMMM y")),
    ("yMMMd", AvailableFormat::Plain("d MMM y")),
    ("yMd", AvailableFormat::Plain("dd/MM/y")),
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
        assert_sorted_elem_0(&[(b'M', "E dd/MM – E dd/MM"), (b'd', "E dd/MM – E dd/MM")]),
    ),
    ("MMM", assert_sorted_elem_0(&[(b'M', "MMM – MMM")])),
    (
        "MMMEd",
        assert_sorted_elem_0(&[
            (b'M', "E d MMM – E d MMM"),
            (b'd', "E d – E d MMM"),
        ]),
    ),
    (
        "MMMd",
        assert_sorted_elem_0(&[(b'M', "d MMM – d MMM"), (b'd', "d–d MMM")]),
    ),
    (
        "Md",
        assert_sorted_elem_0(&[(b'M', "dd/MM – dd/MM"), (b'd', "dd/MM – dd/MM")]),
    ),
    ("d", assert_sorted_elem_0(&[(b'd', "d–d")])),
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
    ("y", assert_sorted_elem_0(&[(b'y', "y–y")])),
    (
        "yM",
        assert_sorted_elem_0(&[(b'M', "MM/y – MM/y"), (b'y', "MM/y – MM/y")]),
    ),
    (
        "yMEd",
        assert_sorted_elem_0(&[
            (b'M', "E dd/MM/y – E dd/MM/y"),
            (b'd', "E dd/MM/y – E dd/MM/y"),
            (b'y', "E dd/MM/y – E dd/MM/y"),
        ]),
    ),
    (
        "yMMM",
        assert_sorted_elem_0(&[(b'M', "MMM – MMM y"), (b'y', "MMM y – MMM y")]),
    ),
    (
        "yMMMEd",
        assert_sorted_elem_0(&[
            (b'M', "E d MMM – E d MMM y"),
            (b'd', "E d – E d MMM y"),
            (b'y', "E d MMM y – E d MMM y"),
        ]),
    ),
    (
        "yMMMM",
        assert_sorted_elem_0(&[(b'M', "MMMM – MMMM y"), (b'y', "MMMM y – MMMM y")]),
    ),
    (
        "yMMMd",
        assert_sorted_elem_0(&[
            (b'M', "d MMM – d MMM y"),
            (b'd', "d–d MMM y"),
            (b'y', "d MMM y – d MMM y"),
        ]),
    ),
    (
        "yMd",
        assert_sorted_elem_0(&[
            (b'M', "dd/MM/y – dd/MM/y"),
            (b'd', "dd/MM/y – dd/MM/y"),
            (b'y', "dd/MM/y – dd/MM/y"),
        ]),
    ),
]);

/// Relative-time fields keyed by unit index.
static DATE_FIELDS: &[(u8, RelativeField)] = assert_sorted_elem_0(&[
    (
        0, // year
        RelativeField {
            standard: RelativePatterns {
                exact: &[
                    (-1, "l’année dernière"),
                    (0, "cette année"),
                    (1, "l’année prochaine"),
                ],
                future: PluralPatterns::one_other("dans {0} an", "dans {0} ans"),
                past: PluralPatterns::one_other("il y a {0} an", "il y a {0} ans"),
            },
            short: Some(RelativePatterns {
                exact: &[
                    (-1, "l’année dern."),
                    (0, "cette année"),
                    (1, "l’année proch."),
                ],
                future: PluralPatterns::invariant("dans {0} a"),
                past: PluralPatterns::invariant("il y a {0} a"),
            }),
            narrow: Some(RelativePatterns {
                exact: &[(-1, "l’année dern."), (0, "cette année"), (1, "l’année proch.")],
                future: PluralPatterns::invariant("+{0} a"),
                past: PluralPatterns::invariant("-{0} a"),
            }),
        },
    ),
    (
        1, // quarter
        RelativeField {
            standard: RelativePatterns {
                exact: &[
                    (-1, "le trimestre dernier"),
                    (0, "ce trimestre"),
                    (1, "le trimestre prochain"),
                ],
                future: PluralPatterns::one_other("dans {0} trimestre", "dans {0} trimestres"),
                past: PluralPatterns::one_other("il y a {0} trimestre", "il y a {0} trimestres"),
            },
            short: Some(RelativePatterns {
                exact: &[
                    (-1, "le trim. dernier"),
                    (0, "ce trim."),
                    (1, "le trim. prochain"),
                ],
                future: PluralPatterns::invariant("dans {0} trim."),
                past: PluralPatterns::invariant("il y a {0} trim."),
            }),
            narrow: None,
        },
    ),
    (
        2, // month
        RelativeField {
            standard: RelativePatterns {
                exact: &[
                    (-1, "le mois dernier"),
                    (0, "ce mois-ci"),
                    (1, "le mois prochain"),
                ],
                future: PluralPatterns::invariant("dans {0} mois"),
                past: PluralPatterns::invariant("il y a {0} mois"),
            },
            short: Some(RelativePatterns {
                exact: &[(-1, "le mois dern."), (0, "ce mois-ci"), (1, "le mois proch.")],
                future: PluralPatterns::invariant("dans {0} m."),
                past: PluralPatterns::invariant("il y a {0} m."),
            }),
            narrow: None,
        },
    ),
    (
        3, // week
        RelativeField {
            standard: RelativePatterns {
                exact: &[
                    (-1, "la semaine dernière"),
                    (0, "cette semaine"),
                    (1, "la semaine prochaine"),
                ],
                future: PluralPatterns::one_other("dans {0} semaine", "dans {0} semaines"),
                past: PluralPatterns::one_other("il y a {0} semaine", "il y a {0} semaines"),
            },
            short: Some(RelativePatterns {
                exact: &[
                    (-1, "la sem. dernière"),
                    (0, "cette sem."),
                    (1, "la sem. prochaine"),
                ],
                future: PluralPatterns::invariant("dans {0} sem."),
                past: PluralPatterns::invariant("il y a {0} sem."),
            }),
            narrow: None,
        },
    ),
    (
        4, // day
        RelativeField {
            standard: RelativePatterns {
                exact: &[
                    (-2, "avant-hier"),
                    (-1, "hier"),
                    (0, "aujourd’hui"),
                    (1, "demain"),
                    (2, "après-demain"),
                ],
                future: PluralPatterns::one_other("dans {0} jour", "dans {0} jours"),
                past: PluralPatterns::one_other("il y a {0} jour", "il y a {0} jours"),
            },
            short: Some(RelativePatterns {
                exact: &[
                    (-2, "avant-hier"),
                    (-1, "hier"),
                    (0, "aujourd’hui"),
                    (1, "demain"),
                    (2, "après-demain"),
                ],
                future: PluralPatterns::invariant("dans {0} j"),
                past: PluralPatterns::invariant("il y a {0} j"),
            }),
            narrow: None,
        },
    ),
    (
        5, // hour
        RelativeField {
            standard: RelativePatterns {
                exact: &[(0, "cette heure-ci")],
                future: PluralPatterns::one_other("dans {0} heure", "dans {0} heures"),
                past: PluralPatterns::one_other("il y a {0} heure", "il y a {0} heures"),
            },
            short: Some(RelativePatterns {
                exact: &[(0, "cette heure-ci")],
                future: PluralPatterns::invariant("dans {0} h"),
                past: PluralPatterns::invariant("il y a {0} h"),
            }),
            narrow: None,
        },
    ),
    (
        6, // minute
        RelativeField {
            standard: RelativePatterns {
                exact: &[(0, "cette minute-ci")],
                future: PluralPatterns::one_other("dans {0} minute", "dans {0} minutes"),
                past: PluralPatterns::one_other("il y a {0} minute", "il y a {0} minutes"),
            },
            short: Some(RelativePatterns {
                exact: &[(0, "cette minute-ci")],
                future: PluralPatterns::invariant("dans {0} min"),
                past: PluralPatterns::invariant("il y a {0} min"),
            }),
            narrow: None,
        },
    ),
    (
        7, // second
        RelativeField {
            standard: RelativePatterns {
                exact: &[(0, "maintenant")],
                future: PluralPatterns::one_other("dans {0} seconde", "dans {0} secondes"),
                past: PluralPatterns::one_other("il y a {0} seconde", "il y a {0} secondes"),
            },
            short: Some(RelativePatterns {
                exact: &[(0, "maintenant")],
                future: PluralPatterns::invariant("dans {0} s"),
                past: PluralPatterns::invariant("il y a {0} s"),
            }),
            narrow: None,
        },
    ),
    (
        8, // monday
        RelativeField {
            standard: RelativePatterns {
                exact: &[(-1, "lundi dernier"), (0, "ce lundi"), (1, "lundi prochain")],
                future: PluralPatterns::one_other("dans {0} lundi", "dans {0} lundis"),
                past: PluralPatterns::one_other("il y a {0} lundi", "il y a {0} lundis"),
            },
            short: None,
            narrow: None,
        },
    ),
    (
        9, // tuesday
        RelativeField {
            standard: RelativePatterns {
                exact: &[(-1, "mardi dernier"), (0, "ce mardi"), (1, "mardi prochain")],
                future: PluralPatterns::one_other("dans {0} mardi", "dans {0} mardis"),
                past: PluralPatterns::one_other("il y a {0} mardi", "il y a {0} mardis"),
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
                    (-1, "mercredi dernier"),
                    (0, "ce mercredi"),
                    (1, "mercredi prochain"),
                ],
                future: PluralPatterns::one_other("dans {0} mercredi", "dans {0} mercredis"),
                past: PluralPatterns::one_other("il y a {0} mercredi", "il y a {0} mercredis"),
            },
            short: None,
            narrow: None,
        },
    ),
    (
        11, // thursday
        RelativeField {
            standard: RelativePatterns {
                exact: &[(-1, "jeudi dernier"), (0, "ce jeudi"), (1, "jeudi prochain")],
                future: PluralPatterns::one_other("dans {0} jeudi", "dans {0} jeudis"),
                past: PluralPatterns::one_other("il y a {0} jeudi", "il y a {0} jeudis"),
            },
            short: None,
            narrow: None,
        },
    ),
    (
        12, // friday
        RelativeField {
            standard: RelativePatterns {
                exact: &[
                    (-1, "vendredi dernier"),
                    (0, "ce vendredi"),
                    (1, "vendredi prochain"),
                ],
                future: PluralPatterns::one_other("dans {0} vendredi", "dans {0} vendredis"),
                past: PluralPatterns::one_other("il y a {0} vendredi", "il y a {0} vendredis"),
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
                    (-1, "samedi dernier"),
                    (0, "ce samedi"),
                    (1, "samedi prochain"),
                ],
                future: PluralPatterns::one_other("dans {0} samedi", "dans {0} samedis"),
                past: PluralPatterns::one_other("il y a {0} samedi", "il y a {0} samedis"),
            },
            short: None,
            narrow: None,
        },
    ),
    (
        14, // sunday
        RelativeField {
            standard: RelativePatterns {
                exact: &[
                    (-1, "dimanche dernier"),
                    (0, "ce dimanche"),
                    (1, "dimanche prochain"),
                ],
                future: PluralPatterns::one_other("dans {0} dimanche", "dans {0} dimanches"),
                past: PluralPatterns::one_other("il y a {0} dimanche", "il y a {0} dimanches"),
            },
            short: None,
            narrow: None,
        },
    ),
]);

/// CLDR cardinal plural rule for `fr`.
fn plural(n: u64) -> Plural {
    if n == 0 || n == 1 {
        Plural::One
    } else if n % 1_000_000 == 0 {
        Plural::Many
    } else {
        Plural::Other
    }
}

pub(super) static DATA: LocaleData = LocaleData {
    tag: "fr",
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
            abbreviated: ["av. J.-C.", "ap. J.-C."],
            wide: ["avant Jésus-Christ", "après Jésus-Christ"],
            narrow: ["av. J.-C.", "ap. J.-C."],
            variant_abbreviated: Some(["AEC", "EC"]),
            variant_wide: Some(["avant l’ère commune", "de l’ère commune"]),
        },
        day_periods: DayPeriods {
            rules: DAY_PERIOD_RULES,
            wide: DAY_PERIODS_WIDE,
            abbreviated: DAY_PERIODS_ABBREVIATED,
            narrow: DAY_PERIODS_NARROW,
        },
        date_formats: StyleFormats {
            short: "dd/MM/y",
            medium: "d MMM y",
            long: "d MMMM y",
            full: "EEEE d MMMM y",
        },
        time_formats: StyleFormats {
            short: "HH:mm",
            medium: "HH:mm:ss",
            long: "HH:mm:ss z",
            full: "HH:mm:ss zzzz",
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
            long: "{1} 'à' {0}",
            full: "{1} 'à' {0}",
        }),
        available_formats: AVAILABLE_FORMATS,
        interval_formats: INTERVAL_FORMATS,
        interval_fallback: "{0} – {1}",
    },
    time_zone_names: TimeZoneNames {
        gmt_format: "UTC{0}",
        gmt_zero_format: "UTC",
        hour_format: "+HH:mm;-HH:mm",
    },
    date_fields: DATE_FIELDS,
    number_system: "latn",
    number_symbols: NumberSymbols { group: "\u{202f}" },
    plural,
    first_weekday: 1,
    preferred_hour: 'H',
};
