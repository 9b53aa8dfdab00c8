//! Documentation tools

use serde::{Deserialize, Serialize};
use serde_json::json;

use super::ToolDefinition;

/// search_documentation tool definition
pub fn search_tool() -> ToolDefinition {
    ToolDefinition {
        name: "search_documentation".to_string(),
        description: "Case-insensitive search of the Odoo documentation. Returns up to 10 pages with up to 3 matching excerpts each.".to_string(),
        input_schema: json!({
            "type": "object",
            "required": ["query"],
            "properties": {
                "query": {
                    "type": "string",
                    "description": "Text to look for"
                },
                "version": {
                    "type": "string",
                    "description": "Optional: Odoo version to search. Defaults to the selected version."
                }
            }
        }),
    }
}

/// get_development_guidelines tool definition
pub fn guidelines_tool() -> ToolDefinition {
    ToolDefinition {
        name: "get_development_guidelines".to_string(),
        description: "Development guidelines for a kind of work, built from the rule documents.".to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "context": {
                    "type": "string",
                    "enum": ["general", "models", "views", "security", "all"],
                    "description": "What you are working on (default: general)"
                }
            }
        }),
    }
}

/// Input for search_documentation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchInput {
    pub query: String,
    #[serde(default)]
    pub version: Option<String>,
}

/// Input for get_development_guidelines
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuidelinesInput {
    #[serde(default = "default_context")]
    pub context: String,
}

fn default_context() -> String {
    "general".to_string()
}
