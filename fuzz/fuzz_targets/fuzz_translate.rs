#![no_main]
use libfuzzer_sys::fuzz_target;
use xpath2css::css::to_selector;
use xpath2css::xpath::parse;

fuzz_target!(|data: &[u8]| {
    if let Ok(expr) = std::str::from_utf8(data) {
        // Parse -> render should never panic; rendering may only reject
        // unsupported functions and argument shapes
        if let Ok(steps) = parse(expr) {
            let _ = to_selector(&steps);
        }
    }
});
