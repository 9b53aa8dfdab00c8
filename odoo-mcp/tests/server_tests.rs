//! End-to-end tests of the JSON-RPC loop over in-memory streams

use std::fs;
use std::io::Cursor;
use std::path::Path;

use odoo_core::StoreConfig;
use odoo_mcp::OdooMcpServer;
use serde_json::{json, Value};
use tempfile::TempDir;

fn write(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn fixture() -> (TempDir, OdooMcpServer) {
    let temp = TempDir::new().unwrap();
    let docs = temp.path().join("docs");
    let rules = temp.path().join("rules");

    write(&docs.join("18.0/howtos/install.rst"), "Installing Odoo\n");
    write(
        &docs.join("18.0/reference/backend/orm.rst"),
        "ORM API\n\nThe recordset is the core object.\n",
    );
    write(&docs.join("18.0/reference/cli.rst"), "Command-line interface\n");
    write(&docs.join("19.0/howtos/website.rst"), "Website themes\n");
    write(
        &rules.join("odoo-development.mdc"),
        "---\ndescription: Odoo rules\n---\n# Odoo Rules\n\nModels use dots.",
    );
    write(&rules.join("clean-code.mdc"), "# Clean Code\n\nSmall functions.");

    let server = OdooMcpServer::from_config(
        StoreConfig::builder().docs_root(&docs).rules_root(&rules).build(),
    );
    (temp, server)
}

/// Feed requests through `serve` and parse every response line
fn exchange(server: &OdooMcpServer, requests: &[Value]) -> Vec<Value> {
    let input: String = requests.iter().map(|r| format!("{}\n", r)).collect();
    let mut output = Vec::new();
    server.serve(Cursor::new(input), &mut output).unwrap();

    String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

fn call(server: &OdooMcpServer, method: &str, params: Value) -> Value {
    let mut responses = exchange(
        server,
        &[json!({ "jsonrpc": "2.0", "id": 1, "method": method, "params": params })],
    );
    assert_eq!(responses.len(), 1);
    responses.remove(0)
}

fn tool_text(response: &Value) -> &str {
    response["result"]["content"][0]["text"].as_str().unwrap()
}

#[test]
fn test_initialize_then_notification() {
    let (_temp, server) = fixture();
    let responses = exchange(
        &server,
        &[
            json!({ "jsonrpc": "2.0", "id": 1, "method": "initialize", "params": {} }),
            json!({ "jsonrpc": "2.0", "method": "notifications/initialized" }),
            json!({ "jsonrpc": "2.0", "id": 2, "method": "ping" }),
        ],
    );

    assert_eq!(responses.len(), 2);
    assert_eq!(responses[0]["id"], 1);
    assert_eq!(responses[0]["result"]["protocolVersion"], "2024-11-05");
    assert_eq!(responses[1]["id"], 2);
    assert_eq!(responses[1]["result"], json!({}));
}

#[test]
fn test_parse_error_then_recovery() {
    let (_temp, server) = fixture();
    let input = "{not json\n\n{\"jsonrpc\":\"2.0\",\"id\":3,\"method\":\"ping\"}\n";
    let mut output = Vec::new();
    server.serve(Cursor::new(input), &mut output).unwrap();

    let responses: Vec<Value> = String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(responses.len(), 2);
    assert_eq!(responses[0]["error"]["code"], -32700);
    assert!(responses[0].get("id").is_none());
    assert_eq!(responses[1]["id"], 3);
}

#[test]
fn test_invalid_utf8_line_then_recovery() {
    let (_temp, server) = fixture();
    let mut input = b"{\"jsonrpc\":\"2.0\",\"id\":1,\"method\":\"ping\xff\"}\n".to_vec();
    input.extend_from_slice(b"{\"jsonrpc\":\"2.0\",\"id\":2,\"method\":\"ping\"}\n");
    let mut output = Vec::new();
    server.serve(Cursor::new(input), &mut output).unwrap();

    let responses: Vec<Value> = String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(responses.len(), 2);
    assert_eq!(responses[0]["error"]["code"], -32700);
    assert_eq!(responses[1]["id"], 2);
    assert_eq!(responses[1]["result"], json!({}));
}

#[test]
fn test_null_id_is_answered() {
    let (_temp, server) = fixture();
    let responses = exchange(
        &server,
        &[json!({ "jsonrpc": "2.0", "id": null, "method": "ping" })],
    );

    assert_eq!(responses.len(), 1);
    assert_eq!(responses[0]["id"], Value::Null);
    assert!(responses[0].as_object().unwrap().contains_key("id"));
    assert_eq!(responses[0]["result"], json!({}));
}

#[test]
fn test_missing_jsonrpc_is_invalid_request() {
    let (_temp, server) = fixture();
    let responses = exchange(&server, &[json!({ "id": 4, "method": "ping" })]);

    assert_eq!(responses.len(), 1);
    assert_eq!(responses[0]["id"], 4);
    assert_eq!(responses[0]["error"]["code"], -32600);
}

#[test]
fn test_unknown_method() {
    let (_temp, server) = fixture();
    let response = call(&server, "sampling/createMessage", json!({}));
    assert_eq!(response["error"]["code"], -32601);
}

#[test]
fn test_lists() {
    let (_temp, server) = fixture();

    let tools = call(&server, "tools/list", json!({}));
    assert_eq!(tools["result"]["tools"].as_array().unwrap().len(), 8);
    assert!(tools["result"]["tools"][0]["inputSchema"].is_object());

    let resources = call(&server, "resources/list", json!({}));
    assert_eq!(resources["result"]["resources"].as_array().unwrap().len(), 6);

    let templates = call(&server, "resources/templates/list", json!({}));
    assert_eq!(
        templates["result"]["resourceTemplates"][1]["uriTemplate"],
        "odoo://docs/{version}/{path}"
    );

    let prompts = call(&server, "prompts/list", json!({}));
    assert_eq!(prompts["result"]["prompts"].as_array().unwrap().len(), 4);
}

#[test]
fn test_version_tools_share_session() {
    let (_temp, server) = fixture();

    let set = call(
        &server,
        "tools/call",
        json!({ "name": "set_odoo_version", "arguments": { "version": "18.0" } }),
    );
    assert_eq!(tool_text(&set), "Odoo version set to 18.0");
    assert!(set["result"].get("isError").is_none());

    let current = call(&server, "tools/call", json!({ "name": "get_current_version" }));
    assert_eq!(tool_text(&current), "Current Odoo development version: 18.0");

    let bad = call(
        &server,
        "tools/call",
        json!({ "name": "set_odoo_version", "arguments": { "version": "16.0" } }),
    );
    assert_eq!(
        tool_text(&bad),
        "Invalid version. Available versions: 17.0, 18.0, 19.0"
    );
    assert_eq!(bad["result"]["isError"], true);
    assert_eq!(server.store().session().current().as_str(), "18.0");
}

#[test]
fn test_search_uses_selected_version() {
    let (_temp, server) = fixture();
    server.store().session().select("18.0").unwrap();

    let response = call(
        &server,
        "tools/call",
        json!({ "name": "search_documentation", "arguments": { "query": "RECORDSET" } }),
    );
    let text = tool_text(&response);
    assert!(text.starts_with("Search results for 'RECORDSET' in Odoo 18.0:"));
    assert!(text.contains("## reference/backend/orm\n"));

    let response = call(
        &server,
        "tools/call",
        json!({ "name": "search_documentation", "arguments": { "query": "recordset", "version": "19.0" } }),
    );
    assert_eq!(
        tool_text(&response),
        "No results found for 'recordset' in Odoo 19.0 documentation"
    );
}

#[test]
fn test_tool_errors() {
    let (_temp, server) = fixture();

    let missing = call(&server, "tools/call", json!({ "name": "search_documentation", "arguments": {} }));
    assert_eq!(missing["error"]["code"], -32602);

    let unknown = call(&server, "tools/call", json!({ "name": "create_widget" }));
    assert_eq!(unknown["error"]["code"], -32602);
    assert_eq!(unknown["error"]["message"], "Unknown tool: create_widget");

    let view = call(
        &server,
        "tools/call",
        json!({
            "name": "create_odoo_view",
            "arguments": { "model_name": "library.book", "view_type": "calendar", "fields_to_display": ["name"] }
        }),
    );
    assert_eq!(view["result"]["isError"], true);
    assert!(tool_text(&view).starts_with("Unsupported view type: calendar"));
}

#[test]
fn test_read_index_and_nested_page() {
    let (_temp, server) = fixture();
    server.store().session().select("19.0").unwrap();

    let index = call(&server, "resources/read", json!({ "uri": "odoo://docs/18.0/index" }));
    let contents = &index["result"]["contents"][0];
    assert_eq!(contents["uri"], "odoo://docs/18.0/index");
    assert_eq!(contents["mimeType"], "text/markdown");
    assert_eq!(
        contents["text"],
        "# Odoo 18.0 Documentation Index\n\nCurrent development version: 19.0\n\n\
         \n## Howtos\n\n- install\n\n## Reference\n\n- cli\n"
    );

    let page = call(
        &server,
        "resources/read",
        json!({ "uri": "odoo://docs/18.0/reference/backend/orm" }),
    );
    assert_eq!(
        page["result"]["contents"][0]["text"],
        "# reference/backend/orm (Odoo 18.0)\n\nORM API\n\nThe recordset is the core object.\n"
    );
}

#[test]
fn test_read_failures_are_text() {
    let (_temp, server) = fixture();

    let unknown_version = call(&server, "resources/read", json!({ "uri": "odoo://docs/16.0/index" }));
    assert_eq!(
        unknown_version["result"]["contents"][0]["text"],
        "Error: Unknown Odoo version 16.0. Available: 17.0, 18.0, 19.0"
    );

    let missing = call(&server, "resources/read", json!({ "uri": "odoo://docs/18.0/howtos/nope" }));
    assert_eq!(
        missing["result"]["contents"][0]["text"],
        "Documentation file not found: howtos/nope"
    );

    let unknown_rule = call(&server, "resources/read", json!({ "uri": "odoo://rules/style" }));
    assert_eq!(
        unknown_rule["result"]["contents"][0]["text"],
        "Unknown rule set. Available: clean-code, odoo-development, all"
    );

    let bad_uri = call(&server, "resources/read", json!({ "uri": "https://odoo.com" }));
    assert_eq!(bad_uri["error"]["code"], -32002);
}

#[test]
fn test_read_all_rules() {
    let (_temp, server) = fixture();
    let response = call(&server, "resources/read", json!({ "uri": "odoo://rules/all" }));
    let text = response["result"]["contents"][0]["text"].as_str().unwrap();

    assert!(text.starts_with("# Complete Development Guidelines\n\n"));
    let clean = text.find("# Clean Code").unwrap();
    let odoo = text.find("# Odoo Rules").unwrap();
    assert!(clean < odoo);
}

#[test]
fn test_guidelines_strip_frontmatter() {
    let (_temp, server) = fixture();
    let response = call(
        &server,
        "tools/call",
        json!({ "name": "get_development_guidelines", "arguments": { "context": "models" } }),
    );
    let text = tool_text(&response);

    assert!(text.starts_with("# Development Guidelines for Models Context\n\n"));
    assert!(text.contains("# Odoo Rules\n\nModels use dots."));
    assert!(!text.contains("description: Odoo rules"));
    assert!(!text.contains("# Clean Code"));
    assert!(text.contains("- Documentation: odoo://docs/19.0/index"));
}

#[test]
fn test_prompts_get() {
    let (_temp, server) = fixture();
    server.store().session().select("17.0").unwrap();

    let response = call(
        &server,
        "prompts/get",
        json!({ "name": "review_odoo_code", "arguments": { "code": "class A: pass" } }),
    );
    let message = &response["result"]["messages"][0];
    assert_eq!(message["role"], "user");
    assert_eq!(message["content"]["type"], "text");
    let text = message["content"]["text"].as_str().unwrap();
    assert!(text.starts_with("Please review this Odoo code for version 17.0"));
    assert!(text.contains("class A: pass"));

    let missing = call(&server, "prompts/get", json!({ "name": "review_odoo_code", "arguments": {} }));
    assert_eq!(missing["error"]["code"], -32602);

    let unknown = call(&server, "prompts/get", json!({ "name": "write_poem" }));
    assert_eq!(unknown["error"]["message"], "Unknown prompt: write_poem");
}
