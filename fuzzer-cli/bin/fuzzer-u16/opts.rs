//! Command line argument parsing for the fuzzer-u16 utility.

use clap::Parser;

use fuzzer_cli::CliConfig;

/// FSE U16 automated round-trip test
///
/// Compresses pseudo-random slices of a skewed 16-bit symbol buffer and
/// decodes them into exact, oversized and undersized destinations, checking
/// that nothing is written past the end of any of them.
#[derive(Debug, Parser)]
#[command(
    name = "fuzzer-u16",
    version = "0.1.1",
    about = "FSE U16 automated round-trip test",
    long_about = "Compresses pseudo-random slices of a skewed 16-bit symbol buffer and decodes \
                 them into exact, oversized and undersized destinations. A failing test is \
                 reported with its seed and test number; rerun with -s and -t to replay it."
)]
pub struct FuzzerOpts {
    /// Seed of the run (defaults to the wall clock)
    #[arg(short = 's', long = "seed", value_name = "SEED")]
    seed: Option<u32>,

    /// Total number of tests
    #[arg(short = 'i', long = "iterations", value_name = "N")]
    iterations: Option<u32>,

    /// Resume at test N
    #[arg(short = 't', long = "start", value_name = "N", default_value_t = 0)]
    start: u32,

    /// Trace every test and stage
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,

    /// Wait for Enter before exiting
    #[arg(short = 'p', long = "pause", hide = true)]
    pause: bool,
}

impl FuzzerOpts {
    /// Parse command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Build CLI configuration from the parsed options
    pub fn config(&self) -> CliConfig {
        let defaults = CliConfig::default();
        CliConfig {
            seed: self.seed.unwrap_or(defaults.seed),
            total_tests: self.iterations.unwrap_or(defaults.total_tests),
            start_test: self.start,
            verbose: self.verbose,
            pause: self.pause,
        }
    }
}
