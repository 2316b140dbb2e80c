#![no_main]

mod mock;

use cldr_datetime::{format_date, Format, Options};
use libfuzzer_sys::fuzz_target;
use mock::MockFields;

fuzz_target!(|data: (MockFields, &str)| {
    let (fields, pattern) = data;
    let opts = Options {
        format: Some(Format::Pattern(pattern)),
        ..Options::default()
    };
    let _ = format_date(&fields.into_datetime(), &opts);
});
