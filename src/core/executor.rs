//! External tool invocation.
//!
//! Formatters are run synchronously, one child process per hook invocation:
//! spawn with a closed stdin, read both output streams to completion, then
//! await the exit status. Spawn failure is kept distinct from the captured
//! result so callers can fail closed when the tool is missing entirely.

use std::path::Path;
use std::process::{Command, Stdio};

/// Captured output of one external process invocation.
#[derive(Debug, Clone)]
pub struct ToolOutput {
    /// Exit code of the command (1 if terminated by signal).
    pub exit_code: i32,
    /// Standard output.
    pub stdout: String,
    /// Standard error.
    pub stderr: String,
}

impl ToolOutput {
    /// Returns true if the tool exited cleanly with silent streams.
    #[must_use]
    pub fn clean(&self) -> bool {
        self.exit_code == 0 && self.stderr.trim().is_empty()
    }
}

/// Runs an external tool, capturing stdout, stderr and exit status.
///
/// The child's stdin is null: formatters in list mode read nothing. Returns
/// the raw OS error on spawn failure; interpretation is the caller's job.
pub fn run_tool(
    program: &str,
    args: &[&str],
    files: &[std::path::PathBuf],
    cwd: &Path,
) -> std::io::Result<ToolOutput> {
    let output = Command::new(program)
        .args(args)
        .args(files)
        .current_dir(cwd)
        .stdin(Stdio::null())
        .output()?;

    Ok(ToolOutput {
        exit_code: output.status.code().unwrap_or(1),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    })
}

/// Checks if a command exists in PATH.
#[must_use]
pub fn command_exists(command: &str) -> bool {
    which::which(command).is_ok()
}
