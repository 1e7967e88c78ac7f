//! Error types for style-hooks.
//!
//! Style violations and formatter failures are deliberately *not* errors:
//! they surface as advisory output plus a blocking verdict. This module only
//! covers infrastructure failures (configuration, git, I/O).

use std::path::PathBuf;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in style-hooks.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    // =========================================================================
    // Configuration errors
    // =========================================================================
    /// Configuration file not found.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// Path where config was expected.
        path: PathBuf,
    },

    /// Failed to parse configuration file.
    #[error("Failed to parse configuration: {message}")]
    ConfigParse {
        /// Description of the parse error.
        message: String,
        /// Optional source error.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Invalid configuration value.
    #[error("Invalid configuration: {field} - {message}")]
    ConfigInvalid {
        /// Field name that is invalid.
        field: String,
        /// Description of why it's invalid.
        message: String,
    },

    // =========================================================================
    // Git errors
    // =========================================================================
    /// Not in a Git repository.
    #[error("Not in a Git repository")]
    NotGitRepo,

    /// Git operation failed.
    #[error("Git operation failed: {operation} - {message}")]
    GitOperation {
        /// Name of the operation that failed.
        operation: String,
        /// Error message.
        message: String,
    },

    // =========================================================================
    // Hook errors
    // =========================================================================
    /// Failed to install hook.
    #[error("Failed to install Git hook: {message}")]
    HookInstall {
        /// Error message.
        message: String,
    },

    /// Hook already exists and wasn't created by us.
    #[error("Git hook already exists at {path}. Use --force to overwrite.")]
    HookExists {
        /// Path to existing hook.
        path: PathBuf,
    },

    // =========================================================================
    // I/O errors
    // =========================================================================
    /// File I/O error.
    #[error("I/O error: {message}")]
    Io {
        /// Description of what failed.
        message: String,
        /// Source error.
        #[source]
        source: std::io::Error,
    },

    // =========================================================================
    // Internal errors
    // =========================================================================
    /// Internal error (should never happen).
    #[error("Internal error: {message}")]
    Internal {
        /// Error message.
        message: String,
    },
}

impl Error {
    /// Creates a new configuration parse error.
    pub fn config_parse(message: impl Into<String>) -> Self {
        Self::ConfigParse {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new configuration parse error with source.
    pub fn config_parse_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::ConfigParse {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates a new invalid-configuration error.
    pub fn config_invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ConfigInvalid {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Creates a new I/O error with context.
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Creates a new Git operation error.
    pub fn git(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::GitOperation {
            operation: operation.into(),
            message: message.into(),
        }
    }

    /// Returns true if this is a user-correctable error.
    pub const fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::ConfigNotFound { .. }
                | Self::ConfigInvalid { .. }
                | Self::NotGitRepo
                | Self::HookExists { .. }
        )
    }

    /// Returns an exit code appropriate for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConfigNotFound { .. } | Self::ConfigParse { .. } | Self::ConfigInvalid { .. } => {
                78
            }, // EX_CONFIG
            Self::NotGitRepo | Self::GitOperation { .. } => 65, // EX_DATAERR
            _ => 1,
        }
    }
}
