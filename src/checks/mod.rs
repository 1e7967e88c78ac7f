//! The pre-commit style checks and their orchestration.
//!
//! Each check follows the same three-stage pipeline: enumerate staged
//! changes, verify the matching files, aggregate a verdict plus advisory
//! remediation commands. The checks are independent; both run on every
//! invocation so the developer gets the full picture at once.

pub mod gofmt;
pub mod pyindent;
pub mod reindent;

use crate::config::Config;
use crate::core::changes::PathFilter;
use crate::core::error::Result;
use crate::core::git::GitRepo;
use crate::core::ui::Ui;
use reindent::Reindenter;

/// Outcome of a hook invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Verdict {
    /// Allow the commit to proceed.
    #[default]
    Allow,
    /// Abort the commit transaction.
    Block,
}

impl Verdict {
    /// Returns true if the commit should be aborted.
    #[must_use]
    pub const fn is_block(self) -> bool {
        matches!(self, Self::Block)
    }

    /// Combines two verdicts: blocking wins.
    #[must_use]
    pub const fn and(self, other: Self) -> Self {
        if self.is_block() || other.is_block() {
            Self::Block
        } else {
            Self::Allow
        }
    }
}

/// The available hooks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Hook {
    /// Go formatting via `gofmt -l`.
    Gofmt,
    /// Python 4-space indentation via the in-process reindenter.
    Pyindent,
}

impl Hook {
    /// Returns the hook's name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Gofmt => "gofmt",
            Self::Pyindent => "pyindent",
        }
    }
}

impl std::fmt::Display for Hook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for Hook {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "gofmt" => Ok(Self::Gofmt),
            "pyindent" => Ok(Self::Pyindent),
            _ => Err(format!("Invalid hook: {s}. Expected: gofmt or pyindent")),
        }
    }
}

/// Runs the enabled hooks against the staged changeset.
///
/// Enumerates changes once, hands each hook its suffix-filtered subset, and
/// aggregates the verdict. `only` narrows the run to a single hook. Style
/// violations and tool failures come back as [`Verdict::Block`];
/// infrastructure failures (status query, unreadable file) propagate as
/// errors and abort the invocation.
pub fn run_hooks(
    repo: &GitRepo,
    config: &Config,
    filter: &PathFilter,
    only: Option<Hook>,
    ui: &dyn Ui,
) -> Result<Verdict> {
    let changes = repo.changed_files(filter)?;
    tracing::debug!(staged = changes.len(), "enumerated staged changes");

    let selected = |hook: Hook| only.is_none() || only == Some(hook);
    let mut verdict = Verdict::Allow;

    if config.gofmt.enabled && selected(Hook::Gofmt) {
        let files = changes.with_extension("go");
        verdict = verdict.and(gofmt::check_with_program(
            &files,
            &config.gofmt.program,
            repo.root(),
            ui,
        ));
    }

    if config.pyindent.enabled && selected(Hook::Pyindent) {
        let files = changes.with_extension("py");
        let reindenter = Reindenter::with_indent(config.pyindent.indent);
        verdict = verdict.and(pyindent::check(repo.root(), &files, &reindenter, ui)?);
    }

    Ok(verdict)
}
