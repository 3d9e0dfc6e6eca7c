//! Configuration management CLI commands.

use crate::cli::common::{describe, load_config, CliError, CliResult};
use crate::config::Config;
use clap::{Args, Subcommand};
use std::path::Path;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display the effective configuration
    Show(ConfigShowArgs),
    /// Write a config file with default values
    Init(ConfigInitArgs),
    /// Print the config file location
    Path,
}

/// Display the effective configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Write a config file with default values
#[derive(Args, Debug)]
pub struct ConfigInitArgs {
    /// Overwrite an existing config file
    #[arg(long)]
    force: bool,
}

impl ConfigArgs {
    /// Execute config subcommand
    ///
    /// `explicit_path` is the global `--config` value, which takes precedence
    /// over the platform location.
    pub fn execute(&self, explicit_path: Option<&Path>) -> CliResult<()> {
        let path = match explicit_path {
            Some(path) => path.to_path_buf(),
            None => Config::config_file_path().map_err(|e| CliError::config(describe(&e)))?,
        };

        match &self.command {
            ConfigCommand::Show(args) => args.execute(&load_config(explicit_path)?),
            ConfigCommand::Init(args) => args.execute(&path),
            ConfigCommand::Path => {
                println!("{}", path.display());
                Ok(())
            }
        }
    }
}

impl ConfigShowArgs {
    fn execute(&self, config: &Config) -> CliResult<()> {
        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(config)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            print!(
                "{}",
                config.to_toml().map_err(|e| CliError::config(describe(&e)))?
            );
        }
        Ok(())
    }
}

impl ConfigInitArgs {
    fn execute(&self, path: &Path) -> CliResult<()> {
        if path.exists() && !self.force {
            return Err(CliError::config(format!(
                "Config file already exists: {} (use --force to overwrite)",
                path.display()
            )));
        }

        Config::new()
            .save_to(path)
            .map_err(|e| CliError::config(describe(&e)))?;
        println!("✓ Wrote default configuration");
        println!("  Path: {}", path.display());
        Ok(())
    }
}
