use crate::add_test;
use crate::common::run_fuzzer;

// Test a short run prints every banner line in order
add_test!(short_run_passes, async {
    let output = run_fuzzer(&["-s1234", "-i20"]).await;
    assert!(output.status.success(), "stderr: {}", output.stderr);

    let stderr = &output.stderr;
    let banner = stderr.find("FSE U16 (64 bits) automated test").unwrap();
    let unit = stderr.find("Unit tests completed").unwrap();
    let seed = stderr.find("Fuzzer seed : 1234").unwrap();
    let verdict = stderr.find("All 20 tests passed").unwrap();
    assert!(banner < unit && unit < seed && seed < verdict);
    assert!(output.stdout.is_empty());
});

// Test the same seed gives the same verdict twice
add_test!(same_seed_is_reproducible, async {
    let first = run_fuzzer(&["-s", "77", "-i", "10"]).await;
    let second = run_fuzzer(&["-s", "77", "-i", "10"]).await;

    assert!(first.status.success());
    assert!(second.status.success());
    assert!(first.stderr.contains("Fuzzer seed : 77"));
    assert!(second.stderr.contains("Fuzzer seed : 77"));
});

// Test resuming near the end of a run
add_test!(resume_runs_remaining_tests, async {
    let output = run_fuzzer(&["-s1234", "-i30", "-t25"]).await;
    assert!(output.status.success(), "stderr: {}", output.stderr);
    assert!(output.stderr.contains("All 30 tests passed"));
});

// Test the default seed is announced
add_test!(clock_seed_is_announced, async {
    let output = run_fuzzer(&["-i1"]).await;
    assert!(output.status.success());

    let line = output
        .stderr
        .lines()
        .find_map(|line| line.strip_prefix("Fuzzer seed : "))
        .unwrap();
    let seed: u32 = line.trim().parse().unwrap();
    assert!(seed < 10_000);
});

// Test zero iterations still runs the counting tests
add_test!(zero_iterations, async {
    let output = run_fuzzer(&["-s1", "-i0"]).await;
    assert!(output.status.success());
    assert!(output.stderr.contains("Unit tests completed"));
    assert!(output.stderr.contains("All 0 tests passed"));
});
