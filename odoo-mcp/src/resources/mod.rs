//! MCP Resource implementations
//!
//! Resources are documents agents can read by URI:
//!
//! - `odoo://docs/{version}/index`  shallow documentation index
//! - `odoo://docs/{version}/{path}` one documentation page (path may contain `/`)
//! - `odoo://rules/{rule_name}`     a rule document, or `all` of them

use odoo_core::{OdooVersion, RuleSet, TextOutcome};
use serde::{Deserialize, Serialize};

use crate::error::{McpError, McpResult};
use crate::OdooMcpServer;

const DOCS_PREFIX: &str = "odoo://docs/";
const RULES_PREFIX: &str = "odoo://rules/";

/// Concrete resource listed by `resources/list`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceDefinition {
    pub uri: String,

    pub name: String,

    pub description: String,

    /// MIME type of the resource
    #[serde(rename = "mimeType")]
    pub mime_type: String,
}

/// URI template listed by `resources/templates/list`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceTemplate {
    #[serde(rename = "uriTemplate")]
    pub uri_template: String,

    pub name: String,

    pub description: String,

    #[serde(rename = "mimeType")]
    pub mime_type: String,
}

/// Get every concrete resource: one index per version and each rule set
pub fn get_resource_definitions() -> Vec<ResourceDefinition> {
    let indexes = OdooVersion::ALL.iter().map(|version| ResourceDefinition {
        uri: format!("{}{}/index", DOCS_PREFIX, version),
        name: format!("Odoo {} documentation index", version),
        description: format!("Howtos and reference topics available for Odoo {}", version),
        mime_type: "text/markdown".to_string(),
    });

    let rules = RuleSet::ALL.iter().map(|rule| ResourceDefinition {
        uri: format!("{}{}", RULES_PREFIX, rule),
        name: format!("Development rules: {}", rule),
        description: match rule {
            RuleSet::All => "Every development rule document".to_string(),
            _ => format!("The {} rule document", rule),
        },
        mime_type: "text/markdown".to_string(),
    });

    indexes.chain(rules).collect()
}

/// Get the resource URI templates
pub fn get_resource_templates() -> Vec<ResourceTemplate> {
    vec![
        ResourceTemplate {
            uri_template: "odoo://docs/{version}/index".to_string(),
            name: "Documentation index".to_string(),
            description: format!(
                "Documentation index for a version ({})",
                OdooVersion::supported_list()
            ),
            mime_type: "text/markdown".to_string(),
        },
        ResourceTemplate {
            uri_template: "odoo://docs/{version}/{path}".to_string(),
            name: "Documentation page".to_string(),
            description: "A documentation page by logical path, e.g. reference/backend/orm".to_string(),
            mime_type: "text/markdown".to_string(),
        },
        ResourceTemplate {
            uri_template: "odoo://rules/{rule_name}".to_string(),
            name: "Development rules".to_string(),
            description: format!("Rule documents ({})", RuleSet::available()),
            mime_type: "text/markdown".to_string(),
        },
    ]
}

/// A parsed resource URI.
///
/// Version and rule name are kept as given; validation happens in the
/// content store so an unknown version still reads as a text message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceUri {
    DocsIndex { version: String },
    DocsPage { version: String, path: String },
    Rules { name: String },
}

impl ResourceUri {
    /// Parse an `odoo://` URI
    pub fn parse(uri: &str) -> McpResult<Self> {
        if let Some(rest) = uri.strip_prefix(DOCS_PREFIX) {
            let (version, path) = rest
                .split_once('/')
                .filter(|(version, path)| !version.is_empty() && !path.is_empty())
                .ok_or_else(|| McpError::ResourceNotFound(uri.to_string()))?;

            return Ok(if path == "index" {
                ResourceUri::DocsIndex {
                    version: version.to_string(),
                }
            } else {
                ResourceUri::DocsPage {
                    version: version.to_string(),
                    path: path.to_string(),
                }
            });
        }

        if let Some(name) = uri.strip_prefix(RULES_PREFIX) {
            if !name.is_empty() && !name.contains('/') {
                return Ok(ResourceUri::Rules {
                    name: name.to_string(),
                });
            }
        }

        Err(McpError::ResourceNotFound(uri.to_string()))
    }
}

impl OdooMcpServer {
    /// Read a resource by URI.
    ///
    /// Unknown URI shapes are protocol errors; content failures behind a
    /// well-formed URI come back as text.
    pub fn read_resource(&self, uri: &str) -> McpResult<String> {
        let store = self.store();
        let text = match ResourceUri::parse(uri)? {
            ResourceUri::DocsIndex { version } => store.get_index(&version).into_text(),
            ResourceUri::DocsPage { version, path } => store.get_document(&version, &path).into_text(),
            ResourceUri::Rules { name } => store.get_rule_document(&name).into_text(),
        };

        Ok(text)
    }
}
