//! Version selection tools

use serde::{Deserialize, Serialize};
use serde_json::json;

use super::ToolDefinition;

/// set_odoo_version tool definition
pub fn set_version_tool() -> ToolDefinition {
    ToolDefinition {
        name: "set_odoo_version".to_string(),
        description: "Select the Odoo version used by the scaffolding tools, the index and searches that do not name a version.".to_string(),
        input_schema: json!({
            "type": "object",
            "required": ["version"],
            "properties": {
                "version": {
                    "type": "string",
                    "enum": ["17.0", "18.0", "19.0"],
                    "description": "Odoo version to develop against"
                }
            }
        }),
    }
}

/// get_current_version tool definition
pub fn current_version_tool() -> ToolDefinition {
    ToolDefinition {
        name: "get_current_version".to_string(),
        description: "Show the currently selected Odoo version.".to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {}
        }),
    }
}

/// Input for set_odoo_version
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetVersionInput {
    pub version: String,
}
