//! Conversation starters exposed through `prompts/list` and `prompts/get`

use odoo_core::OdooVersion;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{McpError, McpResult};

/// Prompt definition for MCP protocol
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptDefinition {
    pub name: String,
    pub description: String,
    pub arguments: Vec<PromptArgument>,
}

/// A named prompt argument
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptArgument {
    pub name: String,
    pub description: String,
    pub required: bool,
}

fn argument(name: &str, description: &str, required: bool) -> PromptArgument {
    PromptArgument {
        name: name.to_string(),
        description: description.to_string(),
        required,
    }
}

/// Get all prompt definitions
pub fn get_prompt_definitions() -> Vec<PromptDefinition> {
    vec![
        PromptDefinition {
            name: "develop_odoo_feature".to_string(),
            description: "Plan models, views, security and logic for a new feature".to_string(),
            arguments: vec![argument("feature_description", "What the feature should do", true)],
        },
        PromptDefinition {
            name: "debug_odoo_error".to_string(),
            description: "Diagnose an Odoo error following Odoo debugging practice".to_string(),
            arguments: vec![
                argument("error_message", "The error or traceback", true),
                argument("context", "What you were doing when it happened", false),
            ],
        },
        PromptDefinition {
            name: "upgrade_odoo_module".to_string(),
            description: "Plan the migration of a module between Odoo versions".to_string(),
            arguments: vec![
                argument("module_name", "Technical name of the module", true),
                argument("from_version", "Version the module targets today", true),
                argument("to_version", "Version to migrate to", true),
            ],
        },
        PromptDefinition {
            name: "review_odoo_code".to_string(),
            description: "Review code against Odoo development guidelines".to_string(),
            arguments: vec![argument("code", "The code to review", true)],
        },
    ]
}

fn required_arg<'a>(args: &'a Value, name: &str) -> McpResult<&'a str> {
    args.get(name)
        .and_then(Value::as_str)
        .ok_or_else(|| McpError::InvalidParams(format!("Missing required argument: {}", name)))
}

/// Render a prompt by name with the given arguments
pub fn render_prompt(name: &str, args: &Value, version: OdooVersion) -> McpResult<String> {
    match name {
        "develop_odoo_feature" => Ok(develop_feature(required_arg(args, "feature_description")?, version)),
        "debug_odoo_error" => {
            let context = args.get("context").and_then(Value::as_str).unwrap_or("");
            Ok(debug_error(required_arg(args, "error_message")?, context, version))
        }
        "upgrade_odoo_module" => Ok(upgrade_module(
            required_arg(args, "module_name")?,
            required_arg(args, "from_version")?,
            required_arg(args, "to_version")?,
        )),
        "review_odoo_code" => Ok(review_code(required_arg(args, "code")?, version)),
        _ => Err(McpError::PromptNotFound(name.to_string())),
    }
}

fn develop_feature(feature_description: &str, version: OdooVersion) -> String {
    format!(
        r#"I need to develop a new feature for Odoo {version}:

Feature: {feature_description}

Please help me following Odoo development guidelines:

1. Design the data model (models and fields needed)
   - Follow naming conventions (models use dots, fields use underscores)
   - Use proper field types and parameters

2. Create the necessary views (form, tree, search)
   - Follow view naming conventions
   - Use proper XML structure

3. Set up security rules
   - Define access rights in CSV
   - Add record rules if needed

4. Implement any business logic needed
   - Use proper decorators (@api.depends, @api.constrains, etc.)
   - Follow method naming conventions

5. Follow Odoo best practices and coding guidelines
   - Review: get_development_guidelines("general")
   - Check: odoo://rules/odoo-development

What models, views, and logic do I need to implement this feature?
"#
    )
}

fn debug_error(error_message: &str, context: &str, version: OdooVersion) -> String {
    format!(
        r#"I'm encountering an error in Odoo {version}:

Error: {error_message}

Context: {context}

Please help me following Odoo debugging best practices:

1. Identify the root cause of this error
   - Check common Odoo pitfalls (see guidelines)
   - Verify naming conventions
   - Check for SQL constraints violations

2. Suggest solutions based on Odoo best practices
   - Use proper ORM methods
   - Follow Odoo patterns
   - Avoid common mistakes

3. Provide code examples if needed
   - Show correct implementation
   - Reference Odoo documentation

4. Explain how to prevent this error in the future
   - Follow guidelines: get_development_guidelines()
   - Review: odoo://rules/odoo-development

What's causing this error and how can I fix it?
"#
    )
}

fn upgrade_module(module_name: &str, from_version: &str, to_version: &str) -> String {
    format!(
        r#"I need to upgrade the Odoo module '{module_name}' from version {from_version} to {to_version}.

Please help me:
1. Identify breaking changes between versions
2. List deprecated APIs that need updating
3. Suggest migration steps
4. Provide code examples for common migration patterns
5. Highlight any new features I should consider using

What changes do I need to make to upgrade this module?
"#
    )
}

fn review_code(code: &str, version: OdooVersion) -> String {
    format!(
        r#"Please review this Odoo code for version {version} against Odoo development guidelines:

```python
{code}
```

Check for compliance with Odoo standards:

1. **Naming Conventions**
   - Model names use dots (e.g., sale.order)
   - Field names: _id for Many2one, _ids for Many2many/One2many
   - Method names: _compute_, _onchange_, _check_ prefixes

2. **API Decorators**
   - Proper use of @api.depends, @api.constrains, @api.onchange
   - Correct decorator order

3. **ORM Best Practices**
   - Avoid SQL unless necessary
   - Use mapped(), filtered(), sorted()
   - Batch operations

4. **Performance Issues**
   - Check for N+1 queries
   - Inefficient loops
   - Missing indices

5. **Security Concerns**
   - SQL injection risks
   - Proper access control
   - Input validation

6. **Code Quality**
   - DRY principle
   - Single responsibility
   - Clear naming

Reference guidelines: odoo://rules/odoo-development

Provide specific suggestions for improvement.
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_prompt_names() {
        let names: Vec<String> = get_prompt_definitions().into_iter().map(|p| p.name).collect();
        assert_eq!(
            names,
            vec!["develop_odoo_feature", "debug_odoo_error", "upgrade_odoo_module", "review_odoo_code"]
        );
    }

    #[test]
    fn test_feature_prompt_uses_selected_version() {
        let text = render_prompt(
            "develop_odoo_feature",
            &json!({"feature_description": "Track library loans"}),
            OdooVersion::V18,
        )
        .unwrap();
        assert!(text.starts_with("I need to develop a new feature for Odoo 18.0:"));
        assert!(text.contains("Feature: Track library loans"));
    }

    #[test]
    fn test_debug_prompt_optional_context() {
        let text = render_prompt("debug_odoo_error", &json!({"error_message": "KeyError"}), OdooVersion::V19).unwrap();
        assert!(text.contains("Error: KeyError\n\nContext: \n"));
    }

    #[test]
    fn test_upgrade_prompt_uses_given_versions() {
        let text = render_prompt(
            "upgrade_odoo_module",
            &json!({"module_name": "library", "from_version": "16.0", "to_version": "18.0"}),
            OdooVersion::V19,
        )
        .unwrap();
        assert!(text.starts_with("I need to upgrade the Odoo module 'library' from version 16.0 to 18.0."));
        assert!(!text.contains("19.0"));
    }

    #[test]
    fn test_missing_argument() {
        let err = render_prompt("review_odoo_code", &json!({}), OdooVersion::V19).unwrap_err();
        assert!(matches!(err, McpError::InvalidParams(_)));
    }

    #[test]
    fn test_unknown_prompt() {
        let err = render_prompt("write_poem", &json!({}), OdooVersion::V19).unwrap_err();
        assert!(matches!(err, McpError::PromptNotFound(_)));
    }
}
