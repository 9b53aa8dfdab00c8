//! Odoo MCP Server Library
//!
//! This crate implements the Model Context Protocol (MCP) server for the
//! Odoo development assistant: versioned documentation, rule documents and
//! code scaffolding exposed to agents as tools, resources and prompts.
//!
//! ## Architecture
//!
//! ```text
//! Agent (Claude, GPT, etc.)
//!        │  JSON-RPC over stdio
//!        ▼
//! ┌──────────────────────┐
//! │      MCP Server      │ ◄── This crate
//! │                      │
//! │  ┌────────────────┐  │
//! │  │     Tools      │  │ - set_odoo_version / get_current_version
//! │  │                │  │ - search_documentation
//! │  │                │  │ - get_development_guidelines
//! │  │                │  │ - create_odoo_module / _model / _view
//! │  │                │  │ - create_security_rules
//! │  └────────────────┘  │
//! │  ┌────────────────┐  │
//! │  │   Resources    │  │ - odoo://docs/{version}/index
//! │  │                │  │ - odoo://docs/{version}/{path}
//! │  │                │  │ - odoo://rules/{rule_name}
//! │  └────────────────┘  │
//! │  ┌────────────────┐  │
//! │  │    Prompts     │  │ - develop / debug / upgrade / review
//! │  └────────────────┘  │
//! └──────────┬───────────┘
//!            │
//!            ▼
//! ┌──────────────────────┐
//! │      odoo-core       │
//! │  ContentStore        │
//! │  VersionSession      │
//! └──────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use odoo_core::StoreConfig;
//! use odoo_mcp::OdooMcpServer;
//!
//! let server = OdooMcpServer::from_config(
//!     StoreConfig::builder().docs_root("./docs").rules_root("./rules").build(),
//! );
//! server.run_stdio().unwrap();
//! ```

pub mod error;
pub mod prompts;
pub mod resources;
pub mod scaffold;
pub mod server;
pub mod tools;

use odoo_core::{ContentStore, StoreConfig};

pub use error::{McpError, McpResult};
pub use server::{MCPRequest, MCPResponse};
pub use tools::{ToolCall, ToolDefinition, ToolResult};

/// Server metadata for MCP protocol
pub const SERVER_NAME: &str = "odoo-development-assistant";
pub const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SERVER_INSTRUCTIONS: &str = "Odoo development assistant. Select a version with \
set_odoo_version, browse odoo://docs/{version}/index, search with search_documentation, \
and scaffold modules, models, views and security rules with the create_* tools.";

/// Identity reported during `initialize`
#[derive(Debug, Clone)]
pub struct ServerInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub instructions: &'static str,
}

/// MCP server over the Odoo content store
#[derive(Debug)]
pub struct OdooMcpServer {
    store: ContentStore,
}

impl OdooMcpServer {
    /// Create a server over an existing store
    pub fn new(store: ContentStore) -> Self {
        Self { store }
    }

    /// Create a server over the filesystem described by `config`
    pub fn from_config(config: StoreConfig) -> Self {
        Self::new(ContentStore::new(config))
    }

    /// The content store (and, through it, the version session)
    pub fn store(&self) -> &ContentStore {
        &self.store
    }

    /// Server identity
    pub fn server_info(&self) -> ServerInfo {
        ServerInfo {
            name: SERVER_NAME,
            version: SERVER_VERSION,
            instructions: SERVER_INSTRUCTIONS,
        }
    }

    /// Every tool the server exposes
    pub fn get_tools(&self) -> Vec<ToolDefinition> {
        tools::get_tool_definitions()
    }

    /// Every concrete resource the server lists
    pub fn get_resources(&self) -> Vec<resources::ResourceDefinition> {
        resources::get_resource_definitions()
    }
}
