//! # style-hooks
//!
//! Git pre-commit hooks that enforce coding style.
//!
//! Two checks run against the staged changeset: the **gofmt** hook blocks
//! commits containing `.go` files that are not canonically formatted, and
//! the **pyindent** hook blocks commits containing `.py` files that deviate
//! from standard 4-space indentation. Neither check rewrites anything; both
//! print the command that would (`gofmt -w <file>`, `pyindent -n <file>`)
//! and abort the commit.
//!
//! ## Example
//!
//! ```rust,no_run
//! use style_hooks::{checks, Config, ConsoleUi, GitRepo, PathFilter};
//!
//! fn main() -> style_hooks::Result<()> {
//!     let config = Config::load_or_default()?;
//!     let repo = GitRepo::discover()?;
//!     let ui = ConsoleUi::new();
//!
//!     let verdict = checks::run_hooks(&repo, &config, &PathFilter::match_all(), None, &ui)?;
//!
//!     if verdict.is_block() {
//!         std::process::exit(1);
//!     }
//!     Ok(())
//! }
//! ```

#![doc(html_root_url = "https://docs.rs/style-hooks/0.1.0")]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod checks;
pub mod cli;
pub mod config;
pub mod core;

// Re-export main types for convenience
pub use checks::{Hook, Verdict};
pub use config::Config;
pub use core::changes::{ChangeSet, PathFilter};
pub use core::error::{Error, Result};
pub use core::git::GitRepo;
pub use core::ui::{ConsoleUi, MemoryUi, Ui};
