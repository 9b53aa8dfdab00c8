//! MCP Server protocol implementation
//!
//! This module handles the MCP JSON-RPC protocol over stdio: one JSON
//! object per line in, one per line out.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{json, Value};
use std::io::{self, BufRead, Write};

use crate::error::{McpError, McpResult};
use crate::prompts::{get_prompt_definitions, render_prompt};
use crate::resources::get_resource_templates;
use crate::tools::ToolCall;
use crate::OdooMcpServer;

/// Protocol revision announced during `initialize`
pub const PROTOCOL_VERSION: &str = "2024-11-05";

/// MCP JSON-RPC request
#[derive(Debug, Deserialize)]
pub struct MCPRequest {
    /// Must be "2.0"; empty when the field is missing
    #[serde(default)]
    pub jsonrpc: String,
    /// Absent for notifications. An explicit `null` is kept as `Some(Null)`.
    #[serde(default, deserialize_with = "present")]
    pub id: Option<Value>,
    pub method: String,
    #[serde(default)]
    pub params: Value,
}

fn present<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Value>, D::Error> {
    Value::deserialize(deserializer).map(Some)
}

/// MCP JSON-RPC response
#[derive(Debug, Serialize)]
pub struct MCPResponse {
    pub jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<MCPErrorBody>,
}

#[derive(Debug, Serialize)]
pub struct MCPErrorBody {
    pub code: i32,
    pub message: String,
}

impl MCPResponse {
    fn success(id: Option<Value>, result: Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    fn failure(id: Option<Value>, err: &McpError) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: None,
            error: Some(MCPErrorBody::from(err)),
        }
    }
}

impl From<&McpError> for MCPErrorBody {
    fn from(err: &McpError) -> Self {
        Self {
            code: err.error_code(),
            message: err.to_string(),
        }
    }
}

impl OdooMcpServer {
    /// Run the MCP server over stdio
    pub fn run_stdio(&self) -> io::Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.serve(stdin.lock(), stdout.lock())
    }

    /// Serve line-delimited JSON-RPC from `input` until end of stream
    pub fn serve<R: BufRead, W: Write>(&self, mut input: R, mut output: W) -> io::Result<()> {
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }

            let response = match self.parse_line(&buf) {
                Ok(None) => continue,
                Ok(Some(request)) => self.handle_request(request),
                Err(e) => {
                    tracing::warn!(error = %e, "Malformed request");
                    Some(MCPResponse::failure(None, &e))
                }
            };

            if let Some(response) = response {
                writeln!(output, "{}", serde_json::to_string(&response)?)?;
                output.flush()?;
            }
        }

        tracing::info!("Input closed, shutting down");
        Ok(())
    }

    /// Decode one input line; blank lines yield `None`
    fn parse_line(&self, raw: &[u8]) -> McpResult<Option<MCPRequest>> {
        let line = std::str::from_utf8(raw)
            .map_err(|e| McpError::Parse(format!("invalid UTF-8: {}", e)))?;
        if line.trim().is_empty() {
            return Ok(None);
        }

        serde_json::from_str(line)
            .map(Some)
            .map_err(|e| McpError::Parse(e.to_string()))
    }

    /// Handle an MCP request.
    ///
    /// Notifications (no `id`) never produce a response.
    pub fn handle_request(&self, request: MCPRequest) -> Option<MCPResponse> {
        let Some(id) = request.id else {
            tracing::debug!(method = %request.method, "Notification");
            return None;
        };

        if request.jsonrpc != "2.0" {
            let err = McpError::InvalidRequest(format!("unsupported jsonrpc version '{}'", request.jsonrpc));
            tracing::warn!(method = %request.method, error = %err, "Rejected request");
            return Some(MCPResponse::failure(Some(id), &err));
        }

        let outcome = match request.method.as_str() {
            "initialize" => Ok(self.handle_initialize()),
            "ping" => Ok(json!({})),
            "tools/list" => Ok(json!({ "tools": self.get_tools() })),
            "tools/call" => self.handle_tools_call(request.params),
            "resources/list" => Ok(json!({ "resources": self.get_resources() })),
            "resources/templates/list" => Ok(json!({ "resourceTemplates": get_resource_templates() })),
            "resources/read" => self.handle_resources_read(&request.params),
            "prompts/list" => Ok(json!({ "prompts": get_prompt_definitions() })),
            "prompts/get" => self.handle_prompts_get(&request.params),
            other => Err(McpError::MethodNotFound(other.to_string())),
        };

        Some(match outcome {
            Ok(result) => MCPResponse::success(Some(id), result),
            Err(e) => {
                tracing::warn!(method = %request.method, error = %e, "Request failed");
                MCPResponse::failure(Some(id), &e)
            }
        })
    }

    fn handle_initialize(&self) -> Value {
        let info = self.server_info();
        json!({
            "protocolVersion": PROTOCOL_VERSION,
            "serverInfo": {
                "name": info.name,
                "version": info.version
            },
            "capabilities": {
                "tools": {},
                "resources": {},
                "prompts": {}
            },
            "instructions": info.instructions
        })
    }

    fn handle_tools_call(&self, params: Value) -> McpResult<Value> {
        let call: ToolCall = serde_json::from_value(params)
            .map_err(|e| McpError::InvalidParams(format!("Invalid tool call: {}", e)))?;
        let result = self.handle_tool_call(call)?;
        Ok(serde_json::to_value(result)?)
    }

    fn handle_resources_read(&self, params: &Value) -> McpResult<Value> {
        let uri = string_param(params, "uri")?;
        let text = self.read_resource(uri)?;

        Ok(json!({
            "contents": [{
                "uri": uri,
                "mimeType": "text/markdown",
                "text": text
            }]
        }))
    }

    fn handle_prompts_get(&self, params: &Value) -> McpResult<Value> {
        let name = string_param(params, "name")?;
        let args = params.get("arguments").cloned().unwrap_or(Value::Null);
        let text = render_prompt(name, &args, self.store().session().current())?;

        Ok(json!({
            "messages": [{
                "role": "user",
                "content": { "type": "text", "text": text }
            }]
        }))
    }
}

fn string_param<'a>(params: &'a Value, key: &str) -> McpResult<&'a str> {
    params
        .get(key)
        .and_then(Value::as_str)
        .ok_or_else(|| McpError::InvalidParams(format!("Missing parameter: {}", key)))
}
