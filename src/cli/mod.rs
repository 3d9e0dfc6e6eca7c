//! CLI command handlers for PanelForge.
//!
//! Each subcommand is an `Args` struct with an `execute` method returning
//! [`CliResult`]; `main` maps failures to the process exit code.

pub mod common;
pub mod config;
pub mod generate;
pub mod inspect;
pub mod patch_svg;
pub mod validate;

// Re-export types used by main.rs
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use generate::GenerateArgs;
pub use inspect::InspectArgs;
pub use patch_svg::PatchSvgArgs;
pub use validate::ValidateArgs;
