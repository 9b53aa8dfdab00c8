//! Scaffolding tools
//!
//! Inputs deserialize straight into the generator specs in
//! [`crate::scaffold`]; only the schemas live here.

use serde_json::json;

use super::ToolDefinition;

/// create_odoo_module tool definition
pub fn module_tool() -> ToolDefinition {
    ToolDefinition {
        name: "create_odoo_module".to_string(),
        description: "Generate the directory layout, manifest and access file of a new Odoo module for the selected version.".to_string(),
        input_schema: json!({
            "type": "object",
            "required": ["module_name", "display_name", "description"],
            "properties": {
                "module_name": { "type": "string", "description": "Technical name, lowercase_with_underscores" },
                "display_name": { "type": "string", "description": "Human readable name" },
                "description": { "type": "string" },
                "author": { "type": "string", "default": "Your Company" },
                "category": { "type": "string", "default": "Uncategorized" },
                "depends": {
                    "type": "array",
                    "items": { "type": "string" },
                    "description": "Module dependencies (default: base)"
                }
            }
        }),
    }
}

/// create_odoo_model tool definition
pub fn model_tool() -> ToolDefinition {
    ToolDefinition {
        name: "create_odoo_model".to_string(),
        description: "Generate a model class with its fields.".to_string(),
        input_schema: json!({
            "type": "object",
            "required": ["model_name", "model_description", "fields"],
            "properties": {
                "model_name": { "type": "string", "description": "Dotted model name, e.g. library.book" },
                "model_description": { "type": "string" },
                "fields": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "properties": {
                            "name": { "type": "string" },
                            "type": { "type": "string", "description": "Char, Integer, Many2one, One2many, Many2many, Selection, ..." },
                            "string": { "type": "string" },
                            "required": { "type": "boolean" },
                            "comodel_name": { "type": "string" },
                            "inverse_name": { "type": "string" },
                            "selection": { "type": "string" }
                        }
                    }
                },
                "inherit": { "type": "string", "description": "Optional: model to extend" }
            }
        }),
    }
}

/// create_odoo_view tool definition
pub fn view_tool() -> ToolDefinition {
    ToolDefinition {
        name: "create_odoo_view".to_string(),
        description: "Generate a view, window action and menu item for a model.".to_string(),
        input_schema: json!({
            "type": "object",
            "required": ["model_name", "view_type", "fields_to_display"],
            "properties": {
                "model_name": { "type": "string" },
                "view_type": { "type": "string", "enum": ["tree", "form", "search", "kanban"] },
                "fields_to_display": { "type": "array", "items": { "type": "string" } },
                "view_name": { "type": "string", "description": "Optional: record id of the view" }
            }
        }),
    }
}

/// create_security_rules tool definition
pub fn security_tool() -> ToolDefinition {
    ToolDefinition {
        name: "create_security_rules".to_string(),
        description: "Generate access rights and an example record rule for a model.".to_string(),
        input_schema: json!({
            "type": "object",
            "required": ["model_name", "module_name"],
            "properties": {
                "model_name": { "type": "string" },
                "module_name": { "type": "string" },
                "groups": {
                    "type": "array",
                    "items": { "type": "string" },
                    "description": "Group suffixes (default: user, manager)"
                }
            }
        }),
    }
}
