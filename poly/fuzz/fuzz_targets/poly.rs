#![no_main]
use libfuzzer_sys::fuzz_target;

use poly::{get_opts, run_poly};

// Runs the whole report in-process; a panic here is the equivalent of the binary's exit code 2.
fuzz_target!(|input: &str| {
    let args = std::iter::once("poly").chain(input.split_whitespace().take(8));
    if let Ok(mut opts) = get_opts(|app| app.get_matches_from_safe(args), false) {
        opts.count = opts.count.min(3);
        let _ = run_poly(opts);
    }
});
