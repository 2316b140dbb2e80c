use crate::{Format, Options, Style};

mod date;
mod datetime;
mod properties;

/// Options selecting a locale and a standard style.
fn style_opts(locale: &'static str, style: Style) -> Options<'static> {
    Options {
        locale,
        format: Some(Format::Style(style)),
        ..Options::default()
    }
}

/// Options selecting a locale and a literal pattern.
fn pattern_opts(locale: &'static str, pattern: &'static str) -> Options<'static> {
    Options {
        locale,
        format: Some(Format::Pattern(pattern)),
        ..Options::default()
    }
}

/// Options selecting a locale and a named format.
fn id_opts(locale: &'static str, id: &'static str) -> Options<'static> {
    Options {
        locale,
        format: Some(Format::Id(id)),
        ..Options::default()
    }
}
