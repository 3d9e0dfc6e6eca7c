//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::APP_NAME;

/// Environment variable that relocates the config directory.
pub const CONFIG_DIR_ENV: &str = "PANELFORGE_CONFIG_DIR";

/// Naming used in the generated C++ scaffold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Prefix of the module and widget struct names (e.g., "`Viral_Modules`")
    pub struct_prefix: String,
    /// Prefix of the model slug passed to `createModel` (e.g., "Viral-Modules")
    pub model_slug_prefix: String,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            struct_prefix: "Viral_Modules".to_string(),
            model_slug_prefix: "Viral-Modules".to_string(),
        }
    }
}

/// Defaults for the `generate` command.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateConfig {
    /// Refuse to emit a scaffold with duplicate identifiers
    pub strict: bool,
}

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Scaffold naming
    pub template: TemplateConfig,
    /// Generate command defaults
    pub generate: GenerateConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the platform-specific config directory path.
    ///
    /// - Linux: `~/.config/PanelForge/`
    /// - macOS: `~/Library/Application Support/PanelForge/`
    /// - Windows: `%APPDATA%\PanelForge\`
    ///
    /// `PANELFORGE_CONFIG_DIR` overrides the platform directory.
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the platform config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            return Ok(Self::new());
        }

        Self::load_from(&config_path)
    }

    /// Loads configuration from an explicit path. The file must exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .context(format!("Failed to parse config file: {}", path.display()))?;

        config
            .validate()
            .context(format!("Invalid config file: {}", path.display()))?;

        Ok(config)
    }

    /// Saves configuration to `path` using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context(format!(
                "Failed to create config directory: {}",
                parent.display()
            ))?;
        }

        let content = self.to_toml()?;
        let temp_path = path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, path).context(format!(
            "Failed to rename temp config file to: {}",
            path.display()
        ))?;

        Ok(())
    }

    /// Serializes the configuration as pretty TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }

    /// Validates configuration values.
    ///
    /// Checks:
    /// - `struct_prefix` is a valid C++ identifier
    /// - `model_slug_prefix` is non-empty and has no whitespace or quotes
    pub fn validate(&self) -> Result<()> {
        let identifier = Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$")
            .context("Invalid identifier pattern")?;
        if !identifier.is_match(&self.template.struct_prefix) {
            anyhow::bail!(
                "template.struct_prefix '{}' is not a valid C++ identifier",
                self.template.struct_prefix
            );
        }

        let slug = &self.template.model_slug_prefix;
        if slug.is_empty() || slug.chars().any(|c| c.is_whitespace() || c == '"') {
            anyhow::bail!(
                "template.model_slug_prefix '{}' must be non-empty without whitespace or quotes",
                slug
            );
        }

        Ok(())
    }
}
