//! Validation command for panel bundles.

use crate::cli::common::{describe, load_components, CliError, CliResult};
use crate::generator::{PanelValidator, ValidationReport};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Validate a bundle's components before generating a scaffold
#[derive(Debug, Clone, Args)]
pub struct ValidateArgs {
    /// Path to the .vectornator bundle directory
    #[arg(value_name = "BUNDLE")]
    pub bundle: PathBuf,

    /// Artboard index within the bundle
    #[arg(long, value_name = "N", default_value_t = 0)]
    pub artboard: usize,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,

    /// Treat warnings as errors (exit non-zero)
    #[arg(long)]
    pub strict: bool,
}

/// JSON response for `validate --json`.
#[derive(Serialize, Debug)]
struct ValidationResponse<'a> {
    valid: bool,
    components: usize,
    #[serde(flatten)]
    report: &'a ValidationReport,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> CliResult<()> {
        let (_, components) = load_components(&self.bundle, self.artboard)?;
        let report = PanelValidator::new(&components)
            .validate()
            .map_err(|e| CliError::validation(describe(&e)))?;

        if self.json {
            let response = ValidationResponse {
                valid: report.is_valid(),
                components: components.len(),
                report: &report,
            };
            println!(
                "{}",
                serde_json::to_string_pretty(&response)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            if report.is_valid() {
                println!("✓ Validation passed ({} components)", components.len());
            } else {
                println!("✗ Validation failed ({} components)", components.len());
            }

            let details = report.format_message();
            if !details.is_empty() {
                println!();
                print!("{details}");
            }
        }

        if !report.is_valid() {
            return Err(CliError::validation("Validation failed"));
        }

        if self.strict && !report.warnings.is_empty() {
            return Err(CliError::validation("Warnings found in strict mode"));
        }

        Ok(())
    }
}
