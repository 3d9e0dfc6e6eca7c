//! Inspect command for listing extracted components.

use crate::cli::common::{describe, load_components, CliError, CliResult};
use crate::generator::enum_identifier;
use crate::models::{Component, ComponentKind, GeometryError, Point};
use crate::units::format_number;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// List the components found on an artboard
#[derive(Debug, Clone, Args)]
pub struct InspectArgs {
    /// Path to the .vectornator bundle directory
    #[arg(value_name = "BUNDLE")]
    pub bundle: PathBuf,

    /// Artboard index within the bundle
    #[arg(long, value_name = "N", default_value_t = 0)]
    pub artboard: usize,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// One row of inspect output.
#[derive(Serialize, Debug)]
struct InspectEntry<'a> {
    name: &'a str,
    kind: ComponentKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    center: Option<Point>,
    #[serde(skip_serializing_if = "Option::is_none")]
    geometry_error: Option<GeometryError>,
}

impl<'a> TryFrom<&'a Component> for InspectEntry<'a> {
    type Error = anyhow::Error;

    fn try_from(component: &'a Component) -> anyhow::Result<Self> {
        Ok(Self {
            name: &component.name,
            kind: component.kind,
            identifier: enum_identifier(component)?,
            center: component.center,
            geometry_error: component.geometry_error,
        })
    }
}

impl InspectArgs {
    /// Execute the inspect command
    pub fn execute(&self) -> CliResult<()> {
        let (_, components) = load_components(&self.bundle, self.artboard)?;
        let entries = components
            .iter()
            .map(InspectEntry::try_from)
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(|e| CliError::validation(describe(&e)))?;

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&entries)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
            return Ok(());
        }

        println!("Components: {}", entries.len());
        if entries.is_empty() {
            return Ok(());
        }
        println!();

        let name_width = entries.iter().map(|e| e.name.len()).max().unwrap_or(0).max(4);
        println!("  {:<name_width$}  {:<7}  {:<24}  Position", "Name", "Kind", "Identifier");
        for entry in &entries {
            let position = match (&entry.center, &entry.geometry_error) {
                (Some(p), _) => format!("({}, {}) mm", format_number(p.x), format_number(p.y)),
                (None, Some(err)) => format!("- ({err})"),
                (None, None) => "-".to_string(),
            };
            println!(
                "  {:<name_width$}  {:<7}  {:<24}  {}",
                entry.name,
                entry.kind.as_str(),
                entry.identifier.as_deref().unwrap_or("-"),
                position
            );
        }

        Ok(())
    }
}
