use std::process::{ExitStatus, Stdio};

use tokio::io::AsyncWriteExt;

/// Path of the binary under test, provided by cargo.
pub const FUZZER_BIN: &str = env!("CARGO_BIN_EXE_fuzzer-u16");

/// Output from running the fuzzer
pub struct Output {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl Output {
    /// Returns `true` if the process exited with the given code.
    pub fn exited_with(&self, code: i32) -> bool {
        self.status.code() == Some(code)
    }
}

/// Run the fuzzer with the specified arguments and an empty stdin
pub async fn run_fuzzer(args: &[&str]) -> Output {
    run_fuzzer_with_stdin(args, &[]).await
}

/// Run the fuzzer, feeding `stdin_bytes` to its standard input
///
/// # Panics
///
/// Panics if the binary cannot be spawned or waited on.
pub async fn run_fuzzer_with_stdin(args: &[&str], stdin_bytes: &[u8]) -> Output {
    let mut child = tokio::process::Command::new(FUZZER_BIN)
        .args(args)
        .env_remove("RUST_LOG")
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .stdin(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .unwrap();

    if let Some(ref mut stdin) = child.stdin {
        stdin.write_all(stdin_bytes).await.unwrap_or_else(|err| {
            // The fuzzer only reads stdin when pausing.
            if err.kind() != std::io::ErrorKind::BrokenPipe {
                panic!("failed write to stdin ({} bytes): {err}", stdin_bytes.len());
            }
        });
    }

    // Drop stdin to send EOF to the child process
    drop(child.stdin.take());

    let raw_output = child.wait_with_output().await.unwrap();
    Output {
        status: raw_output.status,
        stdout: String::from_utf8_lossy(&raw_output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&raw_output.stderr).into_owned(),
    }
}
