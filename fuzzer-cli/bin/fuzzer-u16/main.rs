//! Automated round-trip test of the FSE-U16 codec
//!
//! Runs the counting tests, then fuzzes compression and decompression from
//! a single seed. Exits with status 1 on the first failed check.

use std::io;
use std::process;

mod opts;

use opts::FuzzerOpts;

use fuzzer_cli::{finish, init_tracing, run_cli};

fn main() {
    let opts = FuzzerOpts::parse();
    let config = opts.config();

    init_tracing(config.verbose);

    let result = run_cli(&config, io::stderr(), io::stdin().lock());
    let code = finish(&result, io::stderr());
    if code != 0 {
        process::exit(code);
    }
}
