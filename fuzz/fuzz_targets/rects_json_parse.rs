//! Fuzz target for rectangle-set JSON parsing.
//!
//! This fuzzer feeds arbitrary byte sequences to the JSON reader and runs
//! the detector on whatever parses, checking for panics, crashes, or hangs.

#![no_main]

use libfuzzer_sys::fuzz_target;
use rectoverlap::geom::io_json::from_json_slice;
use rectoverlap::geom::RectId;
use rectoverlap::OverlapDetector;

fuzz_target!(|data: &[u8]| {
    if data.len() > 10 * 1024 * 1024 {
        return;
    }

    let Ok(set) = from_json_slice(data) else {
        return;
    };
    // Keep the detector input small; region count grows quickly.
    if set.len() > 32 {
        return;
    }
    if let Ok(detector) = OverlapDetector::<RectId>::try_from(set) {
        for (_, ids) in detector.overlaps() {
            assert!(ids.len() >= 2);
        }
    }
});
