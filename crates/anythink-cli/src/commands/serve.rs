//! Serve command
//!
//! Run the comments HTTP service.

use anyhow::{Context, Result};
use anythink_core::config::{Config, StorageBackend};
use clap::Args;

/// Arguments for the serve command
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Interface to bind (overrides config)
    #[arg(long, env = "ANYTHINK_HOST")]
    pub host: Option<String>,

    /// Port to listen on (overrides config)
    #[arg(long, short, env = "ANYTHINK_PORT")]
    pub port: Option<u16>,

    /// Disable permissive CORS
    #[arg(long)]
    pub no_cors: bool,
}

/// Execute the serve command
pub fn execute(args: ServeArgs, mut config: Config) -> Result<()> {
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if args.no_cors {
        config.server.cors = false;
    }

    if config.storage.backend == StorageBackend::Memory {
        tracing::warn!("Using in-memory storage; comments are lost on exit");
    }

    let gateway = super::open_gateway(&config.storage)?;

    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    runtime.block_on(anythink_server::run(&config.server, gateway))?;

    Ok(())
}
