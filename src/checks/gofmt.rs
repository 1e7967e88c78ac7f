//! Go formatting check.
//!
//! Runs `gofmt -l` once over the whole batch of staged `.go` files. The
//! list-only mode prints one non-conforming path per stdout line and touches
//! nothing. A formatter that cannot be spawned blocks the commit: failing
//! closed beats silently admitting unformatted code.

use crate::checks::Verdict;
use crate::core::executor::{run_tool, ToolOutput};
use crate::core::ui::Ui;
use std::path::{Path, PathBuf};

/// Default formatter program name.
pub const GOFMT_PROGRAM: &str = "gofmt";

/// Seam for the external formatter invocation, so the check itself stays a
/// pure function of the changeset and the tool's observed behavior.
pub trait GofmtInvoker {
    /// Invokes the formatter in list-only mode over the full batch.
    fn list_nonconforming(&self, files: &[PathBuf]) -> std::io::Result<ToolOutput>;
}

/// Real `gofmt` invocation, run from the repository root so the staged
/// root-relative paths resolve.
#[derive(Debug, Clone)]
pub struct GofmtCommand {
    program: String,
    cwd: PathBuf,
}

impl GofmtCommand {
    /// Creates an invoker for `program` executed in `cwd`.
    pub fn new(program: impl Into<String>, cwd: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            cwd: cwd.into(),
        }
    }
}

impl GofmtInvoker for GofmtCommand {
    fn list_nonconforming(&self, files: &[PathBuf]) -> std::io::Result<ToolOutput> {
        run_tool(&self.program, &["-l"], files, &self.cwd)
    }
}

/// Checks whether any staged `.go` file is not canonically formatted.
///
/// Emits one `gofmt -w <path>` advisory per non-conforming file and a
/// warning for tool failures. Never returns an error: every failure mode
/// maps onto the verdict.
pub fn check(files: &[PathBuf], invoker: &dyn GofmtInvoker, ui: &dyn Ui) -> Verdict {
    if files.is_empty() {
        return Verdict::Allow;
    }

    tracing::debug!(files = files.len(), "running gofmt -l");

    let output = match invoker.list_nonconforming(files) {
        Ok(output) => output,
        Err(e) => {
            // Tool missing or unspawnable: fail closed
            ui.warn(&format!("gofmt: {}", spawn_detail(&e)));
            return Verdict::Block;
        },
    };

    if !output.stderr.trim().is_empty() {
        ui.warn(&format!("gofmt errors:\n{}", output.stderr.trim_end()));
        return Verdict::Block;
    }

    if !output.stdout.trim().is_empty() {
        for path in output.stdout.lines().filter(|l| !l.trim().is_empty()) {
            ui.status(&format!("gofmt -w {path}"));
        }
        return Verdict::Block;
    }

    if output.exit_code != 0 {
        ui.warn(&format!("gofmt exited with status {}", output.exit_code));
        return Verdict::Block;
    }

    Verdict::Allow
}

/// Formats a spawn failure as `<kind>: <message>`, mirroring the category
/// plus message shape of an exception report.
fn spawn_detail(err: &std::io::Error) -> String {
    format!("{:?}: {err}", err.kind())
}

/// Convenience for checking a batch with the real formatter.
pub fn check_with_program(
    files: &[PathBuf],
    program: &str,
    repo_root: &Path,
    ui: &dyn Ui,
) -> Verdict {
    let invoker = GofmtCommand::new(program, repo_root);
    check(files, &invoker, ui)
}
