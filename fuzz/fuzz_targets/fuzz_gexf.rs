#![no_main]
use graph_tools::parsers::{GexfParser, GraphParser};
use libfuzzer_sys::fuzz_target;

/// Fuzz the GEXF parser directly.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = GexfParser::new().parse_str(s);
    }
});
