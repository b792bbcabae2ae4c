#![no_main]
use libfuzzer_sys::fuzz_target;

/// Fuzz the filename-dispatched entry point.
///
/// The first byte picks the filename so both parsers and the unsupported
/// path are reached; the rest is passed through as raw, possibly non-UTF-8,
/// content.
fuzz_target!(|data: &[u8]| {
    let Some((selector, content)) = data.split_first() else {
        return;
    };
    let filename = match selector % 3 {
        0 => "graph.json",
        1 => "graph.gexf",
        _ => "graph.csv",
    };
    let _ = graph_tools::parsers::parse_graph(filename, content);
});
