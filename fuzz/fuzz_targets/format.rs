#![no_main]

mod mock;

use cldr_datetime::{format_datetime, format_interval, Options};
use libfuzzer_sys::fuzz_target;
use mock::MockFields;

fuzz_target!(|data: (MockFields, MockFields)| {
    let (from, to) = data;
    let from = from.into_datetime();
    let to = to.into_datetime();
    let opts = Options::default();
    let _ = format_datetime(&from, &opts);
    let _ = format_interval(Some(&from), Some(&to), &opts);
});
