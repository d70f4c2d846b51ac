//! CLI commands module
//!
//! This module contains all CLI command implementations.

pub mod case;
pub mod comment;
pub mod config;
pub mod serve;

use anyhow::{Context, Result};
use anythink_core::comment::{CommentGateway, MemoryStorage};
use anythink_core::config::{Config, StorageBackend, StorageConfig};
use anythink_storage::FileSystemStorage;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// anythink - comments service for Anythink Market
#[derive(Debug, Parser)]
#[command(name = "anythink")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true, env = "ANYTHINK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the HTTP service
    Serve(serve::ServeArgs),

    /// Manage comments directly against the configured storage
    #[command(subcommand)]
    Comment(comment::CommentCommand),

    /// Convert a phrase to camelCase, kebab-case or dot.case
    Case(case::CaseArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(config::ConfigCommand),
}

/// Run the CLI application
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    if cli.no_color {
        colored::control::set_override(false);
    }

    match cli.command {
        Commands::Serve(args) => serve::execute(args, load_config(&cli.config)?),
        Commands::Comment(cmd) => comment::execute(cmd, load_config(&cli.config)?),
        Commands::Case(args) => case::execute(args),
        Commands::Config(cmd) => config::execute(cmd, cli.config),
    }
}

fn load_config(path: &Option<PathBuf>) -> Result<Config> {
    Config::load_or_default(path.as_deref()).context("Failed to load configuration")
}

/// Build a gateway over the configured storage engine
pub fn open_gateway(storage: &StorageConfig) -> Result<CommentGateway> {
    match storage.backend {
        StorageBackend::Memory => Ok(CommentGateway::new(MemoryStorage::new())),
        StorageBackend::Filesystem => {
            let dir = storage
                .data_dir
                .clone()
                .unwrap_or_else(FileSystemStorage::default_dir);
            let store = FileSystemStorage::new(&dir)
                .with_context(|| format!("Failed to open storage at {}", dir.display()))?;
            tracing::debug!("Using comment storage at {:?}", store.comments_dir());
            Ok(CommentGateway::new(store))
        }
    }
}

fn setup_logging(verbosity: u8) {
    use tracing_subscriber::EnvFilter;

    let filter = match verbosity {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parse() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_help_text() {
        let cmd = Cli::command();
        assert!(cmd.get_about().is_some());
    }

    #[test]
    fn test_open_memory_gateway() {
        let storage = StorageConfig {
            backend: StorageBackend::Memory,
            data_dir: None,
        };
        let gateway = open_gateway(&storage).unwrap();
        assert_eq!(gateway.count().unwrap(), 0);
    }
}
