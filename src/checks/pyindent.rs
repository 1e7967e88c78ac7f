//! Python indentation check.
//!
//! Each staged `.py` file is read and run through the in-process
//! [`Reindenter`]; no external tool is involved. Files are judged
//! independently and all of them are analyzed even after the first
//! violation, so the developer sees the complete list in one commit attempt.

use crate::checks::reindent::Reindenter;
use crate::checks::Verdict;
use crate::core::error::{Error, Result};
use crate::core::ui::Ui;
use std::path::{Path, PathBuf};

/// Checks whether any staged `.py` file needs reindenting.
///
/// Emits one `pyindent -n <path>` advisory per non-conforming file. A file
/// that cannot be opened or read is an infrastructure failure and aborts the
/// whole hook invocation; it is not caught per file.
pub fn check(
    repo_root: &Path,
    files: &[PathBuf],
    reindenter: &Reindenter,
    ui: &dyn Ui,
) -> Result<Verdict> {
    let mut bad = Vec::new();

    for file in files {
        let source = std::fs::read_to_string(repo_root.join(file))
            .map_err(|e| Error::io(format!("read {}", file.display()), e))?;

        if reindenter.needs_reindent(&source) {
            bad.push(file);
        }
    }

    if bad.is_empty() {
        return Ok(Verdict::Allow);
    }

    for file in bad {
        ui.status(&format!("pyindent -n {}", file.display()));
    }

    Ok(Verdict::Block)
}
