//! Generate command for module scaffolds.

use crate::cli::common::{describe, load_components, CliError, CliResult};
use crate::config::Config;
use crate::generator::{PanelValidator, ScaffoldGenerator};
use clap::Args;
use std::path::PathBuf;
use tracing::warn;

/// Generate a VCV Rack module scaffold from a Vectornator bundle
///
/// The generated file starts with the header comment
/// `// This file was auto-generated by panelforge`. Scaffolds produced by the
/// older `scripts/generate_widget_class.js` named that script instead, so a
/// regenerated file differs from them on its first line.
#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    /// Path to the .vectornator bundle directory
    #[arg(value_name = "BUNDLE")]
    pub bundle: PathBuf,

    /// Write the scaffold to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub out: Option<PathBuf>,

    /// Artboard index within the bundle
    #[arg(long, value_name = "N", default_value_t = 0)]
    pub artboard: usize,

    /// Module name (defaults to the bundle name without .vectornator)
    #[arg(long, value_name = "NAME")]
    pub module_name: Option<String>,

    /// Refuse to generate when identifiers collide or are empty
    #[arg(long)]
    pub strict: bool,
}

impl GenerateArgs {
    /// Execute the generate command
    pub fn execute(&self, config: &Config) -> CliResult<()> {
        let (project, components) = load_components(&self.bundle, self.artboard)?;
        let module_name = self
            .module_name
            .clone()
            .unwrap_or_else(|| project.module_name());

        if module_name.is_empty() {
            return Err(CliError::validation(
                "Module name is empty. Use --module-name to set one",
            ));
        }

        let report = PanelValidator::new(&components)
            .validate()
            .map_err(|e| CliError::validation(describe(&e)))?;
        if !report.is_valid() {
            if self.strict || config.generate.strict {
                return Err(CliError::validation(format!(
                    "Panel validation failed:\n{}",
                    report.format_message()
                )));
            }
            for error in &report.errors {
                warn!("{error}");
            }
        }

        let generator = ScaffoldGenerator::new(&module_name, &components, &config.template);
        let source = generator
            .generate()
            .map_err(|e| CliError::validation(describe(&e)))?;

        match &self.out {
            Some(path) => {
                std::fs::write(path, &source).map_err(|e| {
                    CliError::io(format!("Failed to write {}: {e}", path.display()))
                })?;
                println!("✓ Generated {}", generator.struct_name());
                println!("  Output: {}", path.display());
            }
            None => print!("{source}"),
        }

        Ok(())
    }
}
