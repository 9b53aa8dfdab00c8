//! MCP Tool implementations
//!
//! These are the tools exposed to agents through the MCP protocol.

pub mod docs;
pub mod scaffold;
pub mod version;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{McpError, McpResult};
use crate::scaffold::{
    development_guidelines, GuidelineContext, ModelSpec, ModuleSpec, SecuritySpec, ViewSpec,
};
use crate::OdooMcpServer;

/// Tool definition for MCP protocol
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Tool name
    pub name: String,

    /// Description shown to the agent
    pub description: String,

    /// JSON Schema for input parameters
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

/// Get all tool definitions
pub fn get_tool_definitions() -> Vec<ToolDefinition> {
    vec![
        version::set_version_tool(),
        version::current_version_tool(),
        docs::search_tool(),
        docs::guidelines_tool(),
        scaffold::module_tool(),
        scaffold::model_tool(),
        scaffold::view_tool(),
        scaffold::security_tool(),
    ]
}

/// Tool call request
#[derive(Debug, Deserialize)]
pub struct ToolCall {
    pub name: String,
    #[serde(default)]
    pub arguments: Value,
}

/// Tool call response
#[derive(Debug, Serialize)]
pub struct ToolResult {
    pub content: Vec<ToolContent>,
    #[serde(rename = "isError", skip_serializing_if = "Option::is_none")]
    pub is_error: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct ToolContent {
    #[serde(rename = "type")]
    pub content_type: String,
    pub text: String,
}

impl ToolResult {
    /// Successful text result
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![ToolContent {
                content_type: "text".to_string(),
                text: text.into(),
            }],
            is_error: None,
        }
    }

    /// Text result flagged as a failure
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            is_error: Some(true),
            ..Self::text(text)
        }
    }

    /// Build from a content outcome, flagging the error side
    pub fn from_outcome<E: std::fmt::Display>(outcome: Result<String, E>) -> Self {
        match outcome {
            Ok(text) => Self::text(text),
            Err(e) => Self::error(e.to_string()),
        }
    }

    /// Concatenated text of every content block
    pub fn joined_text(&self) -> String {
        self.content
            .iter()
            .map(|c| c.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn parse_args<T: DeserializeOwned>(tool: &str, args: Value) -> McpResult<T> {
    let args = match args {
        Value::Null => Value::Object(serde_json::Map::new()),
        other => other,
    };
    serde_json::from_value(args)
        .map_err(|e| McpError::InvalidParams(format!("Invalid arguments for {}: {}", tool, e)))
}

impl OdooMcpServer {
    /// Handle a tool call
    pub fn handle_tool_call(&self, call: ToolCall) -> McpResult<ToolResult> {
        tracing::debug!(tool = %call.name, "Tool call");
        let session = self.store().session();

        let result = match call.name.as_str() {
            "set_odoo_version" => {
                let input: version::SetVersionInput = parse_args(&call.name, call.arguments)?;
                ToolResult::from_outcome(session.select_version(&input.version))
            }
            "get_current_version" => ToolResult::text(session.describe()),
            "search_documentation" => {
                let input: docs::SearchInput = parse_args(&call.name, call.arguments)?;
                ToolResult::text(self.store().search(&input.query, input.version.as_deref()))
            }
            "get_development_guidelines" => {
                let input: docs::GuidelinesInput = parse_args(&call.name, call.arguments)?;
                let context = GuidelineContext::parse_or_general(&input.context);
                ToolResult::text(development_guidelines(self.store(), context))
            }
            "create_odoo_module" => {
                let spec: ModuleSpec = parse_args(&call.name, call.arguments)?;
                ToolResult::text(spec.render(session.current()))
            }
            "create_odoo_model" => {
                let spec: ModelSpec = parse_args(&call.name, call.arguments)?;
                ToolResult::from_outcome(spec.render(session.current()))
            }
            "create_odoo_view" => {
                let spec: ViewSpec = parse_args(&call.name, call.arguments)?;
                ToolResult::from_outcome(spec.render(session.current()))
            }
            "create_security_rules" => {
                let spec: SecuritySpec = parse_args(&call.name, call.arguments)?;
                ToolResult::text(spec.render(session.current()))
            }
            _ => return Err(McpError::ToolNotFound(call.name.clone())),
        };

        Ok(result)
    }
}
