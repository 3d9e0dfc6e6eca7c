//! Shared types for CLI command handlers.

use std::fmt;
use std::path::Path;

use crate::config::Config;
use crate::models::Component;
use crate::parser::ProjectBundle;
use crate::services::extract_components;

/// Process exit codes used by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// Any failure the command reports itself
    Failure = 1,
}

impl ExitCode {
    /// Numeric code passed to `std::process::exit`.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Broad failure category of a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliErrorKind {
    /// File missing, unreadable, unwritable or malformed
    Io,
    /// Input loaded but failed a check
    Validation,
    /// Configuration file problem
    Config,
}

/// Error returned by command handlers.
#[derive(Debug, Clone)]
pub struct CliError {
    /// Failure category
    pub kind: CliErrorKind,
    /// Message printed after `Error: `
    pub message: String,
}

impl CliError {
    /// Creates an I/O error.
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            kind: CliErrorKind::Io,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: CliErrorKind::Validation,
            message: message.into(),
        }
    }

    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self {
            kind: CliErrorKind::Config,
            message: message.into(),
        }
    }

    /// Exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> ExitCode {
        match self.kind {
            CliErrorKind::Io | CliErrorKind::Validation | CliErrorKind::Config => {
                ExitCode::Failure
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for command handlers.
pub type CliResult<T> = Result<T, CliError>;

/// Formats an `anyhow` error with its full context chain on one line.
pub fn describe(err: &anyhow::Error) -> String {
    format!("{err:#}")
}

/// Loads the configuration from `path`, or from the platform location.
///
/// An explicit path must exist; a missing platform file yields defaults.
pub fn load_config(path: Option<&Path>) -> CliResult<Config> {
    let loaded = match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    loaded.map_err(|e| CliError::config(describe(&e)))
}

/// Loads a bundle and extracts the components of one artboard.
pub fn load_components(
    bundle: &Path,
    artboard: usize,
) -> CliResult<(ProjectBundle, Vec<Component>)> {
    let project = ProjectBundle::load(bundle).map_err(|e| CliError::io(describe(&e)))?;
    let board = project
        .artboard(artboard)
        .map_err(|e| CliError::validation(describe(&e)))?;
    let components = extract_components(board).map_err(|e| {
        CliError::validation(format!(
            "{} (artboard {artboard} of {})",
            describe(&e),
            bundle.display()
        ))
    })?;
    Ok((project, components))
}
