//! Output sink for hook results.
//!
//! Checks never print directly; they talk to a [`Ui`] with two channels.
//! `status` carries advisory remediation commands, `warn` carries tool
//! diagnostics. The console implementation routes advisories to stdout so
//! they can be piped into a shell, and diagnostics to stderr.

use console::style;

/// Message channels available to a check.
pub trait Ui {
    /// Emits an advisory line (remediation command for the developer).
    fn status(&self, message: &str);

    /// Emits a diagnostic warning line.
    fn warn(&self, message: &str);
}

/// Terminal-backed [`Ui`] implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleUi;

impl ConsoleUi {
    /// Creates a new console UI.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Ui for ConsoleUi {
    fn status(&self, message: &str) {
        println!("{message}");
    }

    fn warn(&self, message: &str) {
        eprintln!("{} {message}", style("warning:").yellow().bold());
    }
}

/// In-memory [`Ui`] that records every line, for assertions in tests.
#[derive(Debug, Default)]
pub struct MemoryUi {
    lines: std::sync::Mutex<Recorded>,
}

#[derive(Debug, Default)]
struct Recorded {
    status: Vec<String>,
    warn: Vec<String>,
}

impl MemoryUi {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Advisory lines emitted so far.
    pub fn status_lines(&self) -> Vec<String> {
        self.lines.lock().map(|r| r.status.clone()).unwrap_or_default()
    }

    /// Warning lines emitted so far.
    pub fn warn_lines(&self) -> Vec<String> {
        self.lines.lock().map(|r| r.warn.clone()).unwrap_or_default()
    }
}

impl Ui for MemoryUi {
    fn status(&self, message: &str) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.status.push(message.to_string());
        }
    }

    fn warn(&self, message: &str) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.warn.push(message.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_ui_records_status() {
        let ui = MemoryUi::new();
        ui.status("gofmt -w main.go");
        ui.status("gofmt -w util.go");
        assert_eq!(
            ui.status_lines(),
            vec!["gofmt -w main.go", "gofmt -w util.go"]
        );
        assert!(ui.warn_lines().is_empty());
    }

    #[test]
    fn test_memory_ui_records_warn() {
        let ui = MemoryUi::new();
        ui.warn("gofmt: NotFound: no such file");
        assert_eq!(ui.warn_lines(), vec!["gofmt: NotFound: no such file"]);
        assert!(ui.status_lines().is_empty());
    }

    #[test]
    fn test_console_ui_constructible() {
        let ui = ConsoleUi::new();
        let debug_str = format!("{:?}", ui);
        assert!(debug_str.contains("ConsoleUi"));
    }
}
