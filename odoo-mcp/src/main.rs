//! Odoo MCP Server Binary
//!
//! ## Usage
//!
//! ```bash
//! # Run as MCP server (stdio)
//! odoo-mcp-server --docs-dir ./docs --rules-dir ./rules
//!
//! # Or through the environment
//! ODOO_DOCS_DIR=./docs ODOO_VERSION=18.0 odoo-mcp-server
//! ```

use std::path::PathBuf;

use clap::Parser;
use odoo_core::{ContentStore, OdooVersion, StoreConfig, VersionSession};
use odoo_mcp::OdooMcpServer;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "odoo-mcp-server", version, about = "Odoo development assistant over MCP (stdio)")]
struct Args {
    /// Documentation root, one directory per Odoo version
    #[arg(long, env = "ODOO_DOCS_DIR")]
    docs_dir: Option<PathBuf>,

    /// Directory holding the rule documents
    #[arg(long, env = "ODOO_RULES_DIR")]
    rules_dir: Option<PathBuf>,

    /// Optional JSON configuration file
    #[arg(long, env = "ODOO_MCP_CONFIG")]
    config: Option<PathBuf>,

    /// Version selected at startup (17.0, 18.0, 19.0)
    #[arg(long, env = "ODOO_VERSION")]
    version_default: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr; stdout carries the protocol
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "odoo_mcp=info,odoo_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    tracing::info!("Starting Odoo MCP Server v{}", env!("CARGO_PKG_VERSION"));

    let mut config = match &args.config {
        Some(path) => {
            tracing::info!(path = %path.display(), "Loading configuration");
            StoreConfig::from_json_file(path)?
        }
        None => StoreConfig::default(),
    };
    if let Some(dir) = args.docs_dir {
        config.docs_root = dir;
    }
    if let Some(dir) = args.rules_dir {
        config.rules_root = dir;
    }

    let initial = match args.version_default.as_deref() {
        Some(tag) => tag.parse::<OdooVersion>()?,
        None => OdooVersion::latest(),
    };

    if !config.docs_root.is_dir() {
        tracing::warn!(path = %config.docs_root.display(), "Documentation root does not exist");
    }
    if !config.rules_root.is_dir() {
        tracing::warn!(path = %config.rules_root.display(), "Rules directory does not exist");
    }

    tracing::info!(
        docs = %config.docs_root.display(),
        rules = %config.rules_root.display(),
        version = %initial,
        "Content store configured"
    );

    let store = ContentStore::new(config).with_session(Arc::new(VersionSession::starting_at(initial)));
    let server = OdooMcpServer::new(store);

    tracing::info!("MCP server ready, listening on stdio");
    server.run_stdio()?;

    Ok(())
}
