//! Model class generation

use odoo_core::OdooVersion;
use serde::{Deserialize, Serialize};

use super::{capitalize, python_bool, title_words, ScaffoldError, ODOO_RULES_URI};

/// One field of a generated model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldSpec {
    #[serde(default = "default_field_name")]
    pub name: String,

    /// Odoo field class, e.g. `Char`, `Many2one`
    #[serde(rename = "type", default = "default_field_type")]
    pub field_type: String,

    /// Label; derived from the name when absent
    #[serde(default)]
    pub string: Option<String>,

    #[serde(default)]
    pub required: bool,

    #[serde(default)]
    pub comodel_name: Option<String>,

    #[serde(default)]
    pub inverse_name: Option<String>,

    /// Python literal for the selection list
    #[serde(default)]
    pub selection: Option<String>,
}

fn default_field_name() -> String {
    "field".to_string()
}

fn default_field_type() -> String {
    "Char".to_string()
}

impl FieldSpec {
    fn label(&self) -> String {
        self.string
            .clone()
            .unwrap_or_else(|| title_words(&self.name.replace('_', " ")))
    }

    /// Render the field declaration line
    pub fn render(&self) -> Result<String, ScaffoldError> {
        let name = &self.name;
        let label = self.label();
        let required = python_bool(self.required);

        let line = match self.field_type.as_str() {
            "Many2one" => {
                let comodel = self.comodel_name.as_deref().unwrap_or("res.partner");
                format!("    {name} = fields.Many2one('{comodel}', string='{label}', required={required})")
            }
            "One2many" => {
                let (Some(comodel), Some(inverse)) = (&self.comodel_name, &self.inverse_name) else {
                    return Err(ScaffoldError::MissingFieldOption {
                        field: name.clone(),
                        option: "comodel_name and inverse_name",
                    });
                };
                format!("    {name} = fields.One2many('{comodel}', '{inverse}', string='{label}')")
            }
            "Many2many" => {
                let Some(comodel) = &self.comodel_name else {
                    return Err(ScaffoldError::MissingFieldOption {
                        field: name.clone(),
                        option: "comodel_name",
                    });
                };
                format!("    {name} = fields.Many2many('{comodel}', string='{label}')")
            }
            "Selection" => {
                let selection = self
                    .selection
                    .as_deref()
                    .unwrap_or("[('draft', 'Draft'), ('done', 'Done')]");
                format!("    {name} = fields.Selection({selection}, string='{label}', required={required})")
            }
            other => {
                format!("    {name} = fields.{other}(string='{label}', required={required})")
            }
        };

        Ok(line)
    }
}

/// A model to generate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelSpec {
    /// Dotted model name, e.g. `library.book`
    pub model_name: String,

    pub model_description: String,

    #[serde(default)]
    pub fields: Vec<FieldSpec>,

    /// Existing model to extend instead of declaring a new one
    #[serde(default)]
    pub inherit: Option<String>,
}

impl ModelSpec {
    /// `library.book` -> `LibraryBook`
    pub fn class_name(&self) -> String {
        self.model_name.split('.').map(capitalize).collect()
    }

    /// `library.book` -> `library_book`
    pub fn file_stem(&self) -> String {
        self.model_name.replace('.', "_")
    }

    /// Render the Python class
    pub fn code(&self) -> Result<String, ScaffoldError> {
        let fields = self
            .fields
            .iter()
            .map(FieldSpec::render)
            .collect::<Result<Vec<_>, _>>()?
            .join("\n");
        let class_name = self.class_name();

        let code = match self.inherit.as_deref().filter(|i| !i.is_empty()) {
            Some(inherit) => format!(
                r#"from odoo import models, fields, api


class {class_name}(models.Model):
    _inherit = '{inherit}'

{fields}
"#
            ),
            None => format!(
                r#"from odoo import models, fields, api


class {class_name}(models.Model):
    _name = '{model_name}'
    _description = '{description}'

    name = fields.Char(string='Name', required=True)
{fields}
"#,
                model_name = self.model_name,
                description = self.model_description,
            ),
        };

        Ok(code)
    }

    /// Render the full model guide
    pub fn render(&self, version: OdooVersion) -> Result<String, ScaffoldError> {
        let code = self.code()?;
        let model_name = &self.model_name;
        let stem = self.file_stem();

        Ok(format!(
            r#"# Model Definition for {model_name} (Odoo {version})

**File**: models/{stem}.py

```python
{code}
```

## Naming Convention Rules ⚠️
- **Model name**: Use dots (e.g., `sale.order.line`, not `sale_order_line`)
- **Class name**: CamelCase (e.g., `SaleOrderLine`)
- **Field naming**:
  - Boolean: Start with `is_`, `has_`, `can_`
  - Many2one: End with `_id`
  - One2many/Many2many: End with `_ids`
- **Method naming**: Use `_compute_`, `_onchange_`, `_check_` prefixes

## Next Steps
1. Import in models/__init__.py: `from . import {stem}`
2. Add security: `create_security_rules("{model_name}", "module_name")`
3. Create views: `create_odoo_view("{model_name}", "form", [fields])`
4. Review guidelines: `get_development_guidelines("models")`

## References
- ORM Documentation: odoo://docs/{version}/reference/backend/orm
- Development Rules: {rules}
- See "Python Coding Standards" section in rules
"#,
            rules = ODOO_RULES_URI,
        ))
    }
}
