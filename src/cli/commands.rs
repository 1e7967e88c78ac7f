//! CLI command implementations.

use crate::checks::{self, Hook};
use crate::config::{Config, CONFIG_FILE_NAME};
use crate::core::changes::PathFilter;
use crate::core::error::{Error, Result};
use crate::core::executor;
use crate::core::git::GitRepo;
use crate::core::ui::ConsoleUi;
use console::style;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

/// Hook script template.
const HOOK_SCRIPT: &str = r#"#!/bin/sh
# style-hooks hook - installed by `stylehook install`
# https://github.com/style-hooks/style-hooks

# Skip if STYLEHOOK_SKIP is set
if [ "$STYLEHOOK_SKIP" = "1" ]; then
    exit 0
fi

# Run the style checks
exec stylehook run
"#;

/// Hook marker comment.
const HOOK_MARKER: &str = "# style-hooks hook";

/// Run the style checks against staged files.
pub fn run(hook: Option<Hook>, paths: &[String]) -> Result<ExitCode> {
    // Check for skip
    if std::env::var("STYLEHOOK_SKIP").ok().as_deref() == Some("1") {
        eprintln!("{} Skipping checks (STYLEHOOK_SKIP=1)", style("•").cyan());
        return Ok(ExitCode::SUCCESS);
    }

    let config = Config::load_or_default()?;
    let repo = GitRepo::discover()?;

    // CLI patterns take precedence over configured ones
    let filter = if paths.is_empty() {
        config.filter()?
    } else {
        PathFilter::new(paths)?
    };

    let ui = ConsoleUi::new();
    let verdict = checks::run_hooks(&repo, &config, &filter, hook, &ui)?;

    if verdict.is_block() {
        eprintln!(
            "{} Commit blocked: run the commands above to fix the offending files",
            style("✗").red().bold()
        );
        Ok(ExitCode::FAILURE)
    } else {
        tracing::debug!("all style checks passed");
        Ok(ExitCode::SUCCESS)
    }
}

/// Initialize configuration.
pub fn init(force: bool) -> Result<ExitCode> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);

    // Check if config already exists
    if config_path.exists() && !force {
        eprintln!(
            "{} Configuration already exists: {}",
            style("!").yellow(),
            config_path.display()
        );
        eprintln!("  Use --force to overwrite.");
        return Ok(ExitCode::FAILURE);
    }

    std::fs::write(&config_path, Config::default_toml())
        .map_err(|e| Error::io("write config", e))?;

    eprintln!("{} Created {}", style("✓").green(), config_path.display());
    eprintln!("\nNext steps:");
    eprintln!("  1. Review and customize {CONFIG_FILE_NAME}");
    eprintln!("  2. Run: stylehook install");

    Ok(ExitCode::SUCCESS)
}

/// Install git hook.
pub fn install(force: bool) -> Result<ExitCode> {
    let repo = GitRepo::discover()?;
    let hooks_dir = repo.hooks_dir();
    let hook_path = hooks_dir.join("pre-commit");

    // Create hooks directory if needed
    if !hooks_dir.exists() {
        std::fs::create_dir_all(&hooks_dir).map_err(|e| Error::io("create hooks dir", e))?;
    }

    // Check for existing hook
    if hook_path.exists() {
        let content =
            std::fs::read_to_string(&hook_path).map_err(|e| Error::io("read existing hook", e))?;

        // Check if it's our hook
        if content.contains(HOOK_MARKER) {
            eprintln!(
                "{} Hook already installed at {}",
                style("✓").green(),
                hook_path.display()
            );
            return Ok(ExitCode::SUCCESS);
        }

        if !force {
            return Err(Error::HookExists { path: hook_path });
        }

        // Backup existing hook
        let backup_path = hooks_dir.join("pre-commit.bak");
        std::fs::rename(&hook_path, &backup_path).map_err(|e| Error::io("backup hook", e))?;
        eprintln!(
            "{} Backed up existing hook to {}",
            style("•").cyan(),
            backup_path.display()
        );
    }

    // Write hook
    std::fs::write(&hook_path, HOOK_SCRIPT).map_err(|e| Error::io("write hook", e))?;

    // Make executable on Unix
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = std::fs::metadata(&hook_path)
            .map_err(|e| Error::io("get hook metadata", e))?
            .permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&hook_path, perms).map_err(|e| Error::io("set hook perms", e))?;
    }

    eprintln!(
        "{} Installed pre-commit hook at {}",
        style("✓").green(),
        hook_path.display()
    );

    // A missing formatter blocks every commit touching .go files; say so now
    let config = Config::load_or_default()?;
    if config.gofmt.enabled && !executor::command_exists(&config.gofmt.program) {
        eprintln!(
            "{} '{}' not found on PATH; commits touching .go files will be blocked",
            style("!").yellow(),
            config.gofmt.program
        );
    }

    Ok(ExitCode::SUCCESS)
}

/// Uninstall git hook.
pub fn uninstall() -> Result<ExitCode> {
    let repo = GitRepo::discover()?;
    let hook_path = repo.hook_path("pre-commit");

    if !hook_path.exists() {
        eprintln!(
            "{} No hook installed at {}",
            style("•").cyan(),
            hook_path.display()
        );
        return Ok(ExitCode::SUCCESS);
    }

    // Check if it's our hook
    let content = std::fs::read_to_string(&hook_path).map_err(|e| Error::io("read hook", e))?;

    if !content.contains(HOOK_MARKER) {
        eprintln!(
            "{} Hook at {} was not installed by style-hooks",
            style("!").yellow(),
            hook_path.display()
        );
        eprintln!("  Remove manually if desired.");
        return Ok(ExitCode::FAILURE);
    }

    std::fs::remove_file(&hook_path).map_err(|e| Error::io("remove hook", e))?;

    eprintln!(
        "{} Removed pre-commit hook from {}",
        style("✓").green(),
        hook_path.display()
    );

    // Check for backup
    let backup_path = repo.hooks_dir().join("pre-commit.bak");
    if backup_path.exists() {
        eprintln!(
            "  Backup exists at {} - restore if needed",
            backup_path.display()
        );
    }

    Ok(ExitCode::SUCCESS)
}

/// Validate configuration.
pub fn validate() -> Result<ExitCode> {
    match Config::load() {
        Ok(config) => match config.validate() {
            Ok(()) => {
                eprintln!("{} Configuration is valid", style("✓").green());
                Ok(ExitCode::SUCCESS)
            },
            Err(e) => {
                eprintln!("{} Configuration validation failed: {e}", style("✗").red());
                Ok(ExitCode::FAILURE)
            },
        },
        Err(Error::ConfigNotFound { path }) => {
            eprintln!(
                "{} Configuration not found: {}",
                style("!").yellow(),
                path.display()
            );
            eprintln!("  Run: stylehook init");
            Ok(ExitCode::FAILURE)
        },
        Err(e) => {
            eprintln!("{} Failed to load configuration: {e}", style("✗").red());
            Ok(ExitCode::FAILURE)
        },
    }
}

/// Show configuration.
pub fn config(raw: bool) -> Result<ExitCode> {
    match Config::find_config_file() {
        Ok(path) => {
            eprintln!("Configuration file: {}", path.display());

            if raw {
                let content =
                    std::fs::read_to_string(&path).map_err(|e| Error::io("read config", e))?;
                eprintln!();
                std::io::stdout()
                    .write_all(content.as_bytes())
                    .map_err(|e| Error::io("write output", e))?;
            }

            Ok(ExitCode::SUCCESS)
        },
        Err(Error::ConfigNotFound { .. }) => {
            eprintln!("{} No configuration file found", style("!").yellow());
            eprintln!("  Run: stylehook init");
            Ok(ExitCode::FAILURE)
        },
        Err(e) => Err(e),
    }
}

/// Generate shell completions.
pub fn completions(shell: clap_complete::Shell) {
    use clap::CommandFactory;
    clap_complete::generate(
        shell,
        &mut super::Cli::command(),
        "stylehook",
        &mut std::io::stdout(),
    );
}
