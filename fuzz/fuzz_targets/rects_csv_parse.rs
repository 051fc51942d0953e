//! Fuzz target for rectangle-set CSV parsing.
//!
//! This fuzzer feeds arbitrary byte sequences to the CSV reader,
//! checking for panics, crashes, or hangs.

#![no_main]

use libfuzzer_sys::fuzz_target;
use rectoverlap::geom::io_csv::from_csv_slice;

fuzz_target!(|data: &[u8]| {
    if data.len() > 10 * 1024 * 1024 {
        return;
    }

    let _ = from_csv_slice(data);
});
