use std::io;

use super::*;

fn quick_config(seed: u32) -> CliConfig {
    CliConfig {
        seed,
        total_tests: 12,
        ..CliConfig::default()
    }
}

fn run_to_string(config: &CliConfig, input: &[u8]) -> (Result<FuzzSummary>, String) {
    let mut out = Vec::new();
    let result = run_cli(config, &mut out, input);
    (result, String::from_utf8(out).unwrap())
}

/// Test default configuration
#[test]
fn default_config_uses_clock_seed_and_full_run() {
    let config = CliConfig::default();
    assert!(u128::from(config.seed) < CLOCK_SEED_RANGE);
    assert_eq!(config.total_tests, 32 * 1024);
    assert_eq!(config.start_test, 0);
    assert!(!config.verbose);
    assert!(!config.pause);
}

/// Test verbosity mapping
#[test]
fn verbose_selects_trace_level() {
    let mut config = quick_config(1);
    assert_eq!(config.display_level(), fuzzer_core::LEVEL_RESULTS);

    config.verbose = true;
    assert_eq!(config.display_level(), fuzzer_core::LEVEL_TRACE);
}

/// Test engine configuration
#[test]
fn fuzz_config_carries_run_options() {
    let config = CliConfig {
        seed: 77,
        total_tests: 500,
        start_test: 20,
        verbose: false,
        pause: false,
    };
    let fuzz = config.fuzz_config();
    assert_eq!((fuzz.seed, fuzz.total_tests, fuzz.start_test), (77, 500, 20));
    assert_eq!(fuzz.max_test_size_mask, 0x1FFFF);
}

/// Test the lines printed by a passing run
#[test]
fn passing_run_prints_banner_seed_and_verdict() {
    let (result, text) = run_to_string(&quick_config(1234), b"");
    let summary = result.unwrap();
    assert_eq!(summary.tests, 12);

    let banner = text.find("FSE U16 (64 bits) automated test\n");
    let unit = text.find("Unit tests completed\n");
    let seed = text.find("Fuzzer seed : 1234 \n");
    let verdict = text.find("All 12 tests passed");
    assert!(banner.is_some() && unit.is_some() && seed.is_some() && verdict.is_some());
    assert!(banner < unit && unit < seed && seed < verdict);
    assert!(!text.contains("press enter"));
}

/// Test resume reports the full test count
#[test]
fn resumed_run_reports_total_tests() {
    let config = CliConfig {
        start_test: 10,
        ..quick_config(1234)
    };
    let (result, text) = run_to_string(&config, b"");
    assert_eq!(result.unwrap().tests, 2);
    assert!(text.contains("All 12 tests passed"));
}

/// Test pause waits for a line of input
#[test]
fn pause_prompts_and_reads_input() {
    let config = CliConfig {
        pause: true,
        ..quick_config(5)
    };
    let (result, text) = run_to_string(&config, b"\n");
    assert!(result.is_ok());
    assert!(text.ends_with("press enter ...\n"));
}

/// Test verbose mode traces tests and stages
#[test]
fn verbose_run_traces_each_test() {
    let config = CliConfig {
        verbose: true,
        ..quick_config(9)
    };
    let (result, text) = run_to_string(&config, b"");
    assert!(result.is_ok());
    assert!(text.contains("\r test     0"));
    assert!(text.contains("\r test    11"));
}

/// Test a start index past the end runs nothing
#[test]
fn start_past_end_runs_no_tests() {
    let config = CliConfig {
        start_test: 40,
        ..quick_config(3)
    };
    let (result, _) = run_to_string(&config, b"");
    assert_eq!(result.unwrap().tests, 0);
}

/// Test error formatting
#[test]
fn failure_is_formatted_with_prefix() {
    let failure = fuzzer_core::TestContext {
        seed: 12,
        test_nb: 3,
    }
    .fail(fuzzer_core::Violation::Corrupted {
        stage: fuzzer_core::Stage::Exact,
    });
    let err = Error::from(fuzzer_core::Error::from(failure.clone()));

    assert_eq!(err.failure(), Some(&failure));
    assert_eq!(
        format_error_for_stderr(&err),
        "Error => decompressed data corrupted in exact-size test (seed 12, test nb 3)"
    );

    let err = Error::from(io::Error::other("closed"));
    assert!(err.failure().is_none());
    assert_eq!(format_error_for_stderr(&err), "Error => I/O error: closed");
}

/// Test the exit path of a failed run
#[test]
fn failed_run_exits_with_one_and_reports_seed() {
    let failure = fuzzer_core::TestContext {
        seed: 4321,
        test_nb: 17,
    }
    .fail(fuzzer_core::Violation::UndersizedAccepted {
        orig_size: 100,
        dst_size: 90,
    });
    let result: Result<FuzzSummary> = Err(Error::from(fuzzer_core::Error::from(failure)));

    let mut err_out = Vec::new();
    assert_eq!(finish(&result, &mut err_out), 1);

    let text = String::from_utf8(err_out).unwrap();
    assert!(text.starts_with("Error => "));
    assert!(text.ends_with(" (seed 4321, test nb 17)\n"));
}

/// Test the exit path of a passing run
#[test]
fn passing_run_exits_with_zero_silently() {
    let result: Result<FuzzSummary> = Ok(FuzzSummary::default());

    let mut err_out = Vec::new();
    assert_eq!(finish(&result, &mut err_out), 0);
    assert!(err_out.is_empty());
}
