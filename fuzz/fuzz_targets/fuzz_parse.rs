#![no_main]
use jsontree::{parse, parse_with_options, ParseOptions};
use libfuzzer_sys::fuzz_target;

// A shallow depth limit keeps the recursive descent far from the real
// stack bound while still exercising the limit check.
const FUZZ_DEPTH: usize = 64;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let options = ParseOptions {
        max_depth: FUZZ_DEPTH,
        ..ParseOptions::default()
    };

    // Parsing arbitrary text must never panic, hang, or read out of
    // bounds; when it succeeds, the printed tree must re-parse.
    if let Ok(tree) = parse_with_options(text, options) {
        let printed = tree.to_string();
        parse(&printed).expect("printed output must re-parse");
    }
});
