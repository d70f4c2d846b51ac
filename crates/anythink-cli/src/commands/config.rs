//! Config command
//!
//! Manage anythink configuration.

use anyhow::{Context, Result};
use anythink_core::config::{Config, DEFAULT_CONFIG_PATH};
use clap::Subcommand;
use std::path::PathBuf;

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show {
        /// Show as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Validate the configuration file
    Validate,

    /// Print the configuration file path
    Path,
}

/// Execute the config command
pub fn execute(cmd: ConfigCommand, path: Option<PathBuf>) -> Result<()> {
    let explicit = path.is_some();
    let path = path.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));

    match cmd {
        ConfigCommand::Show { json } => show_config(&path, explicit, json),
        ConfigCommand::Init { force } => init_config(&path, force),
        ConfigCommand::Validate => validate_config(&path),
        ConfigCommand::Path => {
            println!("{}", path.display());
            Ok(())
        }
    }
}

fn show_config(path: &PathBuf, explicit: bool, as_json: bool) -> Result<()> {
    use colored::Colorize;

    let config = if path.exists() || explicit {
        Config::load(path)?
    } else {
        eprintln!(
            "{} No configuration at {}, showing defaults.",
            "⚠".yellow(),
            path.display()
        );
        Config::default()
    };

    if as_json {
        println!("{}", serde_json::to_string_pretty(&config)?);
    } else {
        print!("{}", config.to_toml()?);
    }

    Ok(())
}

fn init_config(path: &PathBuf, force: bool) -> Result<()> {
    use colored::Colorize;

    if path.exists() && !force {
        anyhow::bail!(
            "Configuration already exists at {} (use --force to overwrite)",
            path.display()
        );
    }

    Config::default()
        .save(path)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!("{} Wrote default configuration to {}", "✓".green(), path.display());
    Ok(())
}

fn validate_config(path: &PathBuf) -> Result<()> {
    use colored::Colorize;

    if !path.exists() {
        anyhow::bail!("Configuration not found at {}", path.display());
    }

    let content = std::fs::read_to_string(path)?;

    let raw: toml::Value = toml::from_str(&content).context("Invalid TOML")?;
    Config::from_toml(&content)?;
    println!("{} Configuration is valid", "✓".green());

    for section in ["server", "storage"] {
        if raw.get(section).is_none() {
            println!(
                "{} [{}] section not found, defaults apply",
                "⚠".yellow(),
                section
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_then_validate() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");

        init_config(&path, false).unwrap();
        assert!(path.exists());
        validate_config(&path).unwrap();

        assert!(init_config(&path, false).is_err());
        init_config(&path, true).unwrap();
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[server]\nport = \"eighty\"\n").unwrap();

        assert!(validate_config(&path).is_err());
    }
}
