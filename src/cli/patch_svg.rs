//! Patch-svg command for panel artwork.

use crate::cli::common::{describe, CliError, CliResult};
use crate::parser::{patch_svg_file, patch_svg_str};
use clap::Args;
use std::path::PathBuf;

/// Set physical width and height on an exported panel SVG
#[derive(Debug, Clone, Args)]
pub struct PatchSvgArgs {
    /// SVG file to rewrite in place
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Print the patched document instead of writing it
    #[arg(long)]
    pub dry_run: bool,
}

impl PatchSvgArgs {
    /// Execute the patch-svg command
    pub fn execute(&self) -> CliResult<()> {
        if self.dry_run {
            let content = std::fs::read_to_string(&self.file).map_err(|e| {
                CliError::io(format!("Failed to read SVG {}: {e}", self.file.display()))
            })?;
            let patched = patch_svg_str(&content).map_err(|e| {
                CliError::validation(format!(
                    "Failed to patch SVG {}: {}",
                    self.file.display(),
                    describe(&e)
                ))
            })?;
            print!("{patched}");
            return Ok(());
        }

        patch_svg_file(&self.file).map_err(|e| CliError::io(describe(&e)))?;
        println!("✓ Patched {}", self.file.display());
        Ok(())
    }
}
