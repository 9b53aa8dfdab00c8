//! Module skeleton: manifest, package init and access file

use odoo_core::OdooVersion;
use serde::{Deserialize, Serialize};

use super::{python_list, ODOO_RULES_URI};

/// Parameters of a new addon module
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleSpec {
    /// Technical name, lowercase with underscores
    pub module_name: String,

    /// Human readable name
    pub display_name: String,

    pub description: String,

    #[serde(default = "default_author")]
    pub author: String,

    #[serde(default = "default_category")]
    pub category: String,

    /// Module dependencies; empty means `base`
    #[serde(default)]
    pub depends: Vec<String>,
}

fn default_author() -> String {
    "Your Company".to_string()
}

fn default_category() -> String {
    "Uncategorized".to_string()
}

impl ModuleSpec {
    fn dependencies(&self) -> Vec<String> {
        if self.depends.is_empty() {
            vec!["base".to_string()]
        } else {
            self.depends.clone()
        }
    }

    /// Render `__manifest__.py`
    pub fn manifest(&self, version: OdooVersion) -> String {
        format!(
            r#"{{
    'name': '{display_name}',
    'version': '{version}.1.0.0',
    'category': '{category}',
    'summary': '{description}',
    'description': """
        {description}
    """,
    'author': '{author}',
    'website': 'https://www.yourcompany.com',
    'license': 'LGPL-3',
    'depends': {depends},
    'data': [
        'security/ir.model.access.csv',
    ],
    'demo': [],
    'installable': True,
    'application': False,
    'auto_install': False,
}}
"#,
            display_name = self.display_name,
            version = version,
            category = self.category,
            description = self.description,
            author = self.author,
            depends = python_list(&self.dependencies()),
        )
    }

    /// Render the full module guide
    pub fn render(&self, version: OdooVersion) -> String {
        let module_name = &self.module_name;
        let manifest = self.manifest(version);

        format!(
            r#"# Module Structure for {module_name} (Odoo {version})

## Directory Structure

{module_name}/
├── __init__.py
├── __manifest__.py
├── models/
│   └── __init__.py
├── views/
├── security/
│   └── ir.model.access.csv
├── data/
└── static/
    └── description/
        └── icon.png

## File Contents

### __manifest__.py
```python
{manifest}
```

### __init__.py
```python
from . import models

```

### models/__init__.py
```python
# Import your models here
```

### security/ir.model.access.csv
```csv
id,name,model_id:id,group_id:id,perm_read,perm_write,perm_create,perm_unlink
access_{module_name}_user,{module_name}.user,model_{module_name}_model,base.group_user,1,1,1,1
```

## Naming Convention Rules ⚠️
- **Module name**: Use lowercase_with_underscores (e.g., `sale_extended`)
- **Technical name**: Same as directory name
- **Display name**: Human-readable (e.g., "Sales Extended")
- **Never use hyphens** in module names

## Next Steps
1. Create the directory structure above
2. Add models: `create_odoo_model()`
3. Add views: `create_odoo_view()`
4. Configure security: `create_security_rules()`
5. Review guidelines: `get_development_guidelines("general")`

## References
- Documentation: odoo://docs/{version}/reference/backend
- Development Rules: {rules}
- Naming Conventions: See "Module Structure" in rules
"#,
            rules = ODOO_RULES_URI,
        )
    }
}
