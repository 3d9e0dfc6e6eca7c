//! Vectornator project bundle loader.
//!
//! A bundle is a directory holding `Manifest.json`, the document JSON it
//! names, and one JSON file per artboard listed by the document.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::constants::{BUNDLE_EXTENSION, MANIFEST_FILE};
use crate::models::{Artboard, Document, Manifest};

/// A fully loaded project bundle.
#[derive(Debug, Clone)]
pub struct ProjectBundle {
    /// Bundle directory
    pub root: PathBuf,
    /// Parsed manifest
    pub manifest: Manifest,
    /// Parsed document
    pub document: Document,
    /// Parsed artboards, in the order the document lists them
    pub artboards: Vec<Artboard>,
}

impl ProjectBundle {
    /// Loads a bundle directory and every file it references.
    ///
    /// # Errors
    ///
    /// Returns an error if the manifest, the document or any artboard is
    /// missing, unreadable, or does not match the expected JSON structure.
    pub fn load(root: &Path) -> Result<Self> {
        if !root.is_dir() {
            anyhow::bail!("Project bundle not found: {}", root.display());
        }

        let manifest: Manifest = read_json(&root.join(MANIFEST_FILE))?;
        let document: Document = read_json(&root.join(&manifest.document_json_filename))?;

        let artboards = document
            .drawing
            .artboard_paths
            .iter()
            .map(|artboard_path| read_json::<Artboard>(&root.join(artboard_path)))
            .collect::<Result<Vec<_>>>()?;

        debug!(
            bundle = %root.display(),
            artboards = artboards.len(),
            "loaded project bundle"
        );

        Ok(Self {
            root: root.to_path_buf(),
            manifest,
            document,
            artboards,
        })
    }

    /// Returns the artboard at `index`.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundle has fewer artboards.
    pub fn artboard(&self, index: usize) -> Result<&Artboard> {
        self.artboards.get(index).with_context(|| {
            format!(
                "Artboard {} not found: bundle {} has {} artboard(s)",
                index,
                self.root.display(),
                self.artboards.len()
            )
        })
    }

    /// Module name derived from the bundle directory name.
    pub fn module_name(&self) -> String {
        module_name_from_path(&self.root)
    }
}

/// Derives a module name from a bundle path.
///
/// Takes the final path component and removes the first `.vectornator`.
///
/// # Examples
///
/// ```
/// use panelforge::parser::bundle::module_name_from_path;
/// use std::path::Path;
///
/// assert_eq!(module_name_from_path(Path::new("panels/Mult.vectornator/")), "Mult");
/// assert_eq!(module_name_from_path(Path::new("VCO")), "VCO");
/// ```
pub fn module_name_from_path(path: &Path) -> String {
    let base = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    base.replacen(BUNDLE_EXTENSION, "", 1)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content =
        fs::read_to_string(path).context(format!("Failed to read file: {}", path.display()))?;
    serde_json::from_str(&content).context(format!("Failed to parse JSON: {}", path.display()))
}
