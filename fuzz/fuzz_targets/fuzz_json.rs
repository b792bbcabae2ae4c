#![no_main]
use graph_tools::parsers::{GraphParser, JsonGraphParser};
use libfuzzer_sys::fuzz_target;

/// Fuzz the JSON parser with both graph layouts reachable.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = JsonGraphParser::new().parse_str(s);
    }
});
