#![no_main]

use libfuzzer_sys::fuzz_target;
use manualj::output::SinkOutput;
use manualj::run_project;
use std::io::{BufReader, Cursor};

fuzz_target!(|data: &[u8]| {
    let _run = run_project(BufReader::new(Cursor::new(data)), SinkOutput);
});
