#![no_main]
use libfuzzer_sys::fuzz_target;
use xpath2css::xpath::parse;

fuzz_target!(|data: &[u8]| {
    if let Ok(expr) = std::str::from_utf8(data) {
        // Parsing should never panic on any input
        let _ = parse(expr);
    }
});
