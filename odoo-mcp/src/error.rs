//! Error types for the Odoo MCP Server
//!
//! Content failures (unknown version, missing document, unreadable file)
//! are not protocol errors; they travel back as text in the tool or
//! resource payload. `McpError` covers what the protocol itself rejects.

use thiserror::Error;

/// Result type for MCP operations
pub type McpResult<T> = Result<T, McpError>;

/// Errors that can occur in the MCP server
#[derive(Error, Debug)]
pub enum McpError {
    /// Line is not a JSON object
    #[error("Parse error: {0}")]
    Parse(String),

    /// JSON object is not a JSON-RPC 2.0 request
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// JSON-RPC method is not implemented
    #[error("Method not found: {0}")]
    MethodNotFound(String),

    /// Request parameters are missing or malformed
    #[error("Invalid params: {0}")]
    InvalidParams(String),

    /// Tool name is not registered
    #[error("Unknown tool: {0}")]
    ToolNotFound(String),

    /// URI does not match any resource template
    #[error("Resource not found: {0}")]
    ResourceNotFound(String),

    /// Prompt name is not registered
    #[error("Unknown prompt: {0}")]
    PromptNotFound(String),

    /// A result could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl McpError {
    /// Get error code for MCP protocol
    pub fn error_code(&self) -> i32 {
        match self {
            McpError::Parse(_) => -32700,
            McpError::InvalidRequest(_) => -32600,
            McpError::MethodNotFound(_) => -32601,
            McpError::InvalidParams(_) => -32602,
            McpError::ToolNotFound(_) => -32602,
            McpError::ResourceNotFound(_) => -32002,
            McpError::PromptNotFound(_) => -32602,
            McpError::Serialization(_) => -32603,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(McpError::MethodNotFound("x".to_string()).error_code(), -32601);
        assert_eq!(McpError::InvalidParams("x".to_string()).error_code(), -32602);
        assert_eq!(McpError::ResourceNotFound("x".to_string()).error_code(), -32002);
    }

    #[test]
    fn test_protocol_codes() {
        assert_eq!(McpError::Parse("x".to_string()).error_code(), -32700);
        assert_eq!(McpError::InvalidRequest("x".to_string()).error_code(), -32600);
        assert_eq!(
            McpError::ToolNotFound("create_widget".to_string()).to_string(),
            "Unknown tool: create_widget"
        );
    }
}
