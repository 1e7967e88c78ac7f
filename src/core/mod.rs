//! Core infrastructure: errors, git access, changesets, tool invocation.

pub mod changes;
pub mod error;
pub mod executor;
pub mod git;
pub mod ui;

pub use changes::{ChangeSet, PathFilter};
pub use error::{Error, Result};
pub use git::GitRepo;
pub use ui::{ConsoleUi, MemoryUi, Ui};
