//! Command-line interface for style-hooks.
//!
//! This module provides the `stylehook` CLI with subcommands for:
//! - `run`: Run the style checks against staged files (the hook entry point)
//! - `init`: Initialize configuration
//! - `install`: Install git hook
//! - `uninstall`: Remove git hook
//! - `validate`: Validate configuration
//! - `config`: Show configuration file location and contents
//! - `completions`: Generate shell completions

mod commands;

use crate::checks::Hook;
use crate::core::error::Result;
use clap::{Parser, Subcommand};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Git pre-commit hooks enforcing gofmt and Python indentation.
#[derive(Debug, Parser)]
#[command(
    name = "stylehook",
    author,
    version,
    about = "Git pre-commit hooks enforcing gofmt and Python 4-space indentation",
    long_about = r#"
style-hooks (stylehook) blocks commits containing staged .go files that are
not gofmt-formatted or staged .py files that deviate from 4-space
indentation. It never rewrites files; it prints the commands that would
(gofmt -w, pyindent -n) and aborts the commit.

Quick start:
  stylehook init      # Create configuration (optional)
  stylehook install   # Install git hook
  # Done! Non-conforming commits are now rejected.

Environment variables:
  STYLEHOOK_SKIP=1    Skip all checks for one commit
"#,
    propagate_version = true
)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Use color output.
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,
}

/// Color output choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Always use color.
    Always,
    /// Auto-detect color support.
    #[default]
    Auto,
    /// Never use color.
    Never,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the style checks against staged files.
    #[command(visible_alias = "r")]
    Run {
        /// Run only a specific hook.
        #[arg(long, value_enum)]
        hook: Option<Hook>,

        /// Glob patterns limiting which staged paths are checked.
        paths: Vec<String>,
    },

    /// Initialize style-hooks configuration.
    #[command(visible_alias = "i")]
    Init {
        /// Overwrite existing configuration.
        #[arg(short, long)]
        force: bool,
    },

    /// Install the git pre-commit hook.
    Install {
        /// Overwrite existing hook.
        #[arg(short, long)]
        force: bool,
    },

    /// Remove the git pre-commit hook.
    Uninstall,

    /// Validate the configuration file.
    #[command(visible_alias = "v")]
    Validate,

    /// Show configuration file location and contents.
    Config {
        /// Output raw TOML.
        #[arg(long)]
        raw: bool,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Runs the CLI.
pub fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Set up logging
    setup_logging(cli.verbose, cli.quiet);

    // Set up color
    setup_color(cli.color);

    // If no subcommand, run the default action (same as `stylehook run`)
    match cli.command {
        Some(Commands::Run { hook, paths }) => commands::run(hook, &paths),
        Some(Commands::Init { force }) => commands::init(force),
        Some(Commands::Install { force }) => commands::install(force),
        Some(Commands::Uninstall) => commands::uninstall(),
        Some(Commands::Validate) => commands::validate(),
        Some(Commands::Config { raw }) => commands::config(raw),
        Some(Commands::Completions { shell }) => {
            commands::completions(shell);
            Ok(ExitCode::SUCCESS)
        },
        None => commands::run(None, &[]),
    }
}

/// Sets up logging based on verbosity flags.
fn setup_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "info"
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Sets up color output.
fn setup_color(choice: ColorChoice) {
    match choice {
        ColorChoice::Always => {
            console::set_colors_enabled(true);
            console::set_colors_enabled_stderr(true);
        },
        ColorChoice::Never => {
            console::set_colors_enabled(false);
            console::set_colors_enabled_stderr(false);
        },
        ColorChoice::Auto => {
            // Let console crate auto-detect
        },
    }
}
