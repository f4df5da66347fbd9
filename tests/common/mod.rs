//! Shared harness for running the ccraft binary in an isolated environment.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

/// Captured result of one CLI invocation.
pub struct CliResult {
    pub stdout: String,
    pub stderr: String,
    pub success: bool,
}

/// Run `ccraft` with all state paths redirected into `state_dir`, feeding
/// `stdin` to the child when provided.
pub fn run_ccraft(state_dir: &Path, args: &[&str], stdin: Option<&str>) -> CliResult {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_ccraft"));
    cmd.args(args)
        .env("HOME", state_dir)
        .env("CCRAFT_FAVORITES_FILE", favorites_path(state_dir))
        .env("CCRAFT_JSONL_LOG", state_dir.join("activity.jsonl"))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    let mut child = cmd.spawn().expect("spawn ccraft");
    if let Some(input) = stdin {
        child
            .stdin
            .as_mut()
            .expect("child stdin")
            .write_all(input.as_bytes())
            .expect("write child stdin");
    }
    // Dropping stdin closes the pipe so interactive loops terminate.
    drop(child.stdin.take());

    let Output {
        status,
        stdout,
        stderr,
    } = child.wait_with_output().expect("wait for ccraft");

    CliResult {
        stdout: String::from_utf8_lossy(&stdout).into_owned(),
        stderr: String::from_utf8_lossy(&stderr).into_owned(),
        success: status.success(),
    }
}

/// Favorites file path used by the harness for a given state dir.
pub fn favorites_path(state_dir: &Path) -> PathBuf {
    state_dir.join("favorites.json")
}
