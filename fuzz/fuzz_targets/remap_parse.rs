#![no_main]

//! Fuzz target for remap file parsing.
//!
//! This fuzzes `parse_remap` with arbitrary bytes to ensure malformed remap
//! files are rejected with an error rather than a panic.

use libfuzzer_sys::fuzz_target;
use migrator_types::Replacement;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };

    let Ok(entries) = migrator_remap::parse_remap(s) else {
        return;
    };

    // Anything that parses must convert and re-render without panicking.
    let replacements: Vec<Replacement> = entries
        .into_iter()
        .filter_map(|e| Replacement::try_from(e).ok())
        .collect();
    for r in &replacements {
        let _ = r.range();
    }
    if let Ok(rendered) = migrator_remap::render_remap(None, &replacements) {
        let reparsed = migrator_remap::parse_remap(&rendered).expect("rendered remap parses");
        assert_eq!(reparsed.len(), replacements.len());
    }

    // Individual entries, too.
    let _ = serde_json::from_str::<migrator_types::RemapEntryV1>(s);
});
