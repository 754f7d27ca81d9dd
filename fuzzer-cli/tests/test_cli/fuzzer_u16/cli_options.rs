use crate::add_test;
use crate::common::{run_fuzzer, run_fuzzer_with_stdin};

// Test verbose mode traces every test
add_test!(verbose_traces_tests, async {
    let output = run_fuzzer(&["-s5", "-i3", "-v"]).await;
    assert!(output.status.success());
    assert!(output.stderr.contains("\r test     0"));
    assert!(output.stderr.contains("\r test     2"));
});

// Test long option spellings
add_test!(long_options, async {
    let output = run_fuzzer(&["--seed", "8", "--iterations", "4", "--start", "2"]).await;
    assert!(output.status.success(), "stderr: {}", output.stderr);
    assert!(output.stderr.contains("Fuzzer seed : 8"));
    assert!(output.stderr.contains("All 4 tests passed"));
});

// Test pause waits for Enter
add_test!(pause_reads_stdin, async {
    let output = run_fuzzer_with_stdin(&["-s3", "-i2", "-p"], b"\n").await;
    assert!(output.status.success());
    assert!(output.stderr.contains("press enter ..."));
});

// Test pause with a closed stdin does not hang
add_test!(pause_with_closed_stdin, async {
    let output = run_fuzzer(&["-s3", "-i2", "-p"]).await;
    assert!(output.status.success());
});

// Test malformed arguments are rejected
add_test!(invalid_arguments, async {
    let output = run_fuzzer(&["-s", "not-a-number"]).await;
    assert!(output.exited_with(2));
    assert!(!output.stderr.contains("Fuzzer seed"));

    let output = run_fuzzer(&["--unknown"]).await;
    assert!(output.exited_with(2));
});

// Test help output
add_test!(help_lists_options, async {
    let output = run_fuzzer(&["--help"]).await;
    assert!(output.status.success());
    for flag in ["--seed", "--iterations", "--start", "--verbose"] {
        assert!(output.stdout.contains(flag), "missing {flag}");
    }
});
