//! Front-end of the FSE-U16 round-trip fuzzer.
//!
//! [`run_cli`] sequences a run the way the `fuzzer-u16` binary presents it:
//! banner, counting tests, seed announcement, fuzzing loop and final
//! verdict. Console lines go through a [`Reporter`] so the caller decides
//! where they land and how verbose they are.

use std::io::{self, BufRead, Write};

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use fuzzer_core::{
    run_fuzz_tests, run_unit_tests, FseU16, FuzzSummary, Reporter, LEVEL_ERRORS, LEVEL_RESULTS,
    PROGRESS_INTERVAL,
};

mod config;
mod error;

#[cfg(test)]
mod tests;

pub use config::{clock_seed, CliConfig, CLOCK_SEED_RANGE};
pub use error::{format_error_for_stderr, Error, Result};

/// Log filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Log filter used with `--verbose` when `RUST_LOG` is unset.
pub const VERBOSE_LOG_FILTER: &str = "debug";

/// Installs the stderr log subscriber.
///
/// `RUST_LOG` takes precedence over the verbosity flag. Installing twice is
/// a no-op.
pub fn init_tracing(verbose: bool) {
    let default = if verbose {
        VERBOSE_LOG_FILTER
    } else {
        DEFAULT_LOG_FILTER
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

/// Runs the counting tests and the fuzzing loop against [`FseU16`].
///
/// Console output goes to `out`; when `config.pause` is set, a line is read
/// from `input` before returning.
///
/// # Errors
///
/// Returns the first failed check, an invalid configuration, or an I/O
/// error while waiting for the pause confirmation.
pub fn run_cli<W, R>(config: &CliConfig, out: W, input: R) -> Result<FuzzSummary>
where
    W: Write,
    R: BufRead,
{
    let mut reporter = Reporter::new(out, config.display_level(), PROGRESS_INTERVAL);
    let fuzz_config = config.fuzz_config();

    reporter.display(
        LEVEL_ERRORS,
        format_args!("FSE U16 ({:2} bits) automated test\n", usize::BITS),
    );

    run_unit_tests(&FseU16).inspect_err(|failure| error!(%failure, "unit tests failed"))?;
    reporter.display(LEVEL_RESULTS, format_args!("Unit tests completed\n"));

    reporter.display(LEVEL_RESULTS, format_args!("Fuzzer seed : {} \n", config.seed));
    let summary = run_fuzz_tests(&FseU16, &fuzz_config, &mut reporter)
        .inspect_err(|err| error!(%err, "fuzzing stopped"))?;

    info!(
        seed = config.seed,
        tests = summary.tests,
        round_trips = summary.round_trips,
        raw = summary.raw,
        rle = summary.rle,
        "fuzzing completed"
    );
    reporter.display(
        LEVEL_RESULTS,
        format_args!("\rAll {} tests passed               \n", config.total_tests),
    );

    if config.pause {
        reporter.display(LEVEL_RESULTS, format_args!("press enter ...\n"));
        wait_for_enter(input)?;
    }

    Ok(summary)
}

/// Exit status of a finished run.
///
/// A failed run writes its `Error => ...` line to `err_out` and maps to 1.
pub fn finish<W: Write>(result: &Result<FuzzSummary>, mut err_out: W) -> i32 {
    match result {
        Ok(_) => 0,
        Err(err) => {
            let _ = writeln!(err_out, "{}", format_error_for_stderr(err));
            1
        }
    }
}

fn wait_for_enter<R: BufRead>(mut input: R) -> io::Result<()> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(())
}
