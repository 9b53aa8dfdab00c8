//! View, action and menu XML generation

use std::fmt;
use std::str::FromStr;

use odoo_core::OdooVersion;
use serde::{Deserialize, Serialize};

use super::{title_words, ScaffoldError, ODOO_RULES_URI};

/// Supported view architectures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewType {
    Tree,
    Form,
    Search,
    Kanban,
}

impl ViewType {
    pub const ALL: [ViewType; 4] = [ViewType::Tree, ViewType::Form, ViewType::Search, ViewType::Kanban];

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewType::Tree => "tree",
            ViewType::Form => "form",
            ViewType::Search => "search",
            ViewType::Kanban => "kanban",
        }
    }
}

impl fmt::Display for ViewType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewType {
    type Err = ScaffoldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| ScaffoldError::UnsupportedViewType(s.to_string()))
    }
}

/// A view to generate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewSpec {
    pub model_name: String,
    pub view_type: String,
    #[serde(default)]
    pub fields_to_display: Vec<String>,
    /// Record id; derived from model and type when absent
    #[serde(default)]
    pub view_name: Option<String>,
}

fn field_lines(fields: &[String], indent: usize) -> String {
    let separator = format!("\n{}", " ".repeat(indent));
    fields
        .iter()
        .map(|f| format!(r#"<field name="{}"/>"#, f))
        .collect::<Vec<_>>()
        .join(&separator)
}

impl ViewSpec {
    fn model_underscore(&self) -> String {
        self.model_name.replace('.', "_")
    }

    fn record_id(&self, view_type: ViewType) -> String {
        match self.view_name.as_deref().filter(|n| !n.is_empty()) {
            Some(name) => name.to_string(),
            None => format!("{}_{}_view", self.model_underscore(), view_type),
        }
    }

    /// Render the `ir.ui.view` record
    pub fn view_xml(&self, view_type: ViewType) -> String {
        let arch = match view_type {
            ViewType::Tree => format!(
                "            <tree>\n                {}\n            </tree>",
                field_lines(&self.fields_to_display, 16)
            ),
            ViewType::Form => format!(
                "            <form>\n                <sheet>\n                    <group>\n                        {}\n                    </group>\n                </sheet>\n            </form>",
                field_lines(&self.fields_to_display, 20)
            ),
            ViewType::Search => format!(
                "            <search>\n                {}\n            </search>",
                field_lines(&self.fields_to_display, 16)
            ),
            ViewType::Kanban => r#"            <kanban>
                <field name="name"/>
                <templates>
                    <t t-name="kanban-box">
                        <div class="oe_kanban_card">
                            <div class="oe_kanban_content">
                                <div><field name="name"/></div>
                            </div>
                        </div>
                    </t>
                </templates>
            </kanban>"#
                .to_string(),
        };

        format!(
            r#"<?xml version="1.0" encoding="utf-8"?>
<odoo>
    <record id="{id}" model="ir.ui.view">
        <field name="name">{model}.{view_type}</field>
        <field name="model">{model}</field>
        <field name="arch" type="xml">
{arch}
        </field>
    </record>
</odoo>"#,
            id = self.record_id(view_type),
            model = self.model_name,
        )
    }

    /// Render the window action and its menu item
    pub fn action_xml(&self) -> String {
        let model = &self.model_name;
        let underscore = self.model_underscore();
        let label = title_words(model.rsplit('.').next().unwrap_or(model));

        format!(
            r#"    <record id="action_{underscore}" model="ir.actions.act_window">
        <field name="name">{label}</field>
        <field name="res_model">{model}</field>
        <field name="view_mode">tree,form</field>
    </record>

    <menuitem id="menu_{underscore}"
              name="{label}"
              action="action_{underscore}"
              parent="base.menu_custom"/>"#
        )
    }

    /// Render the full view guide
    pub fn render(&self, version: OdooVersion) -> Result<String, ScaffoldError> {
        let view_type: ViewType = self.view_type.parse()?;
        let view_xml = self.view_xml(view_type);
        let action_xml = self.action_xml();
        let model = &self.model_name;
        let underscore = self.model_underscore();
        let title = title_words(view_type.as_str());

        Ok(format!(
            r#"# {title} View for {model} (Odoo {version})

**File**: views/{underscore}_views.xml

```xml
{view_xml}
```

## Action and Menu

```xml
<odoo>
{action_xml}
</odoo>
```

## Manifest Configuration

Add to __manifest__.py 'data' section:
```python
'data': [
    'security/ir.model.access.csv',
    'views/{underscore}_views.xml',
],
```

## Naming Convention Rules ⚠️
- **View ID**: Format as `view_{{model}}_{{type}}` (e.g., `view_sale_order_form`)
- **Action ID**: Format as `action_{{model}}` (e.g., `action_sale_order`)
- **Menu ID**: Format as `menu_{{model}}` (e.g., `menu_sale_order`)
- **File naming**: Use underscores (e.g., `sale_order_views.xml`)

## Next Steps
1. Add this file to your manifest's 'data' section
2. Test the view in Odoo interface
3. Review guidelines: `get_development_guidelines("views")`

## References
- View Architecture: odoo://docs/{version}/reference/user_interface/view_architectures
- Development Rules: {rules}
- See "View (XML) Standards" section in rules
"#,
            rules = ODOO_RULES_URI,
        ))
    }
}
