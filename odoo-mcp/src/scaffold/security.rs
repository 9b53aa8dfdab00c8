//! Access rights and record rule generation

use odoo_core::OdooVersion;
use serde::{Deserialize, Serialize};

use super::ODOO_RULES_URI;

const ACCESS_HEADER: &str = "id,name,model_id:id,group_id:id,perm_read,perm_write,perm_create,perm_unlink";

/// Security files for one model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecuritySpec {
    pub model_name: String,
    pub module_name: String,
    /// Group suffixes; empty means `user` and `manager`
    #[serde(default)]
    pub groups: Vec<String>,
}

/// Permission columns (read, write, create, unlink) for a group
fn permissions(group: &str) -> &'static str {
    match group {
        "user" => "1,0,0,0",
        _ => "1,1,1,1",
    }
}

impl SecuritySpec {
    fn groups(&self) -> Vec<String> {
        if self.groups.is_empty() {
            vec!["user".to_string(), "manager".to_string()]
        } else {
            self.groups.clone()
        }
    }

    /// Render `ir.model.access.csv`
    pub fn access_csv(&self) -> String {
        let underscore = self.model_name.replace('.', "_");

        let mut lines = vec![ACCESS_HEADER.to_string()];
        lines.extend(self.groups().iter().map(|group| {
            format!(
                "access_{underscore}_{group},{module}.{group},model_{underscore},base.group_{group},{perms}",
                module = self.module_name,
                perms = permissions(group),
            )
        }));
        lines.join("\n")
    }

    /// Render the full security guide
    pub fn render(&self, version: OdooVersion) -> String {
        let csv = self.access_csv();
        let model = &self.model_name;
        let module = &self.module_name;
        let underscore = model.replace('.', "_");

        format!(
            r#"# Security Rules for {model} (Odoo {version})

## Access Rights (CSV)

**File**: security/ir.model.access.csv

```csv
{csv}
```

## Record Rules (XML) - Optional

**File**: security/{module}_security.xml

```xml
<?xml version="1.0" encoding="utf-8"?>
<odoo>
    <record id="{underscore}_rule_own" model="ir.rule">
        <field name="name">{model}: See own records</field>
        <field name="model_id" ref="model_{underscore}"/>
        <field name="domain_force">[('create_uid', '=', user.id)]</field>
        <field name="groups" eval="[(4, ref('base.group_user'))]"/>
    </record>
</odoo>
```

## Security Rules Guidelines ⚠️
- **Naming**: Use `access_{{model}}_{{group}}` format
- **Permissions**: Format is (read, write, create, unlink)
  - User group: Usually (1,0,0,0) - read-only
  - Manager group: Usually (1,1,1,1) - full access
- **Record Rules**: Use for row-level security
- **Testing**: Always test security with different user groups

## Manifest Configuration

Add to __manifest__.py 'data' section (order matters):
```python
'data': [
    'security/{module}_security.xml',  # Groups first (if any)
    'security/ir.model.access.csv',         # Access rights
    'views/{underscore}_views.xml',   # Views last
],
```

## Next Steps
1. Add security files to manifest in correct order
2. Test with different user roles
3. Review guidelines: `get_development_guidelines("security")`

## References
- Security Documentation: odoo://docs/{version}/reference/backend/security
- Development Rules: {rules}
- See "Security Standards" section in rules
"#,
            rules = ODOO_RULES_URI,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_groups() {
        let spec = SecuritySpec {
            model_name: "library.book".to_string(),
            module_name: "library".to_string(),
            groups: vec![],
        };
        assert_eq!(
            spec.access_csv(),
            "id,name,model_id:id,group_id:id,perm_read,perm_write,perm_create,perm_unlink\n\
             access_library_book_user,library.user,model_library_book,base.group_user,1,0,0,0\n\
             access_library_book_manager,library.manager,model_library_book,base.group_manager,1,1,1,1"
        );
    }

    #[test]
    fn test_custom_groups_get_full_access() {
        let spec = SecuritySpec {
            model_name: "library.book".to_string(),
            module_name: "library".to_string(),
            groups: vec!["librarian".to_string()],
        };
        assert!(spec.access_csv().ends_with("base.group_librarian,1,1,1,1"));
    }

    #[test]
    fn test_render_guide() {
        let spec = SecuritySpec {
            model_name: "library.book".to_string(),
            module_name: "library".to_string(),
            groups: vec![],
        };
        let guide = spec.render(OdooVersion::V18);
        assert!(guide.starts_with("# Security Rules for library.book (Odoo 18.0)"));
        assert!(guide.contains(r#"<record id="library_book_rule_own" model="ir.rule">"#));
        assert!(guide.contains("`access_{model}_{group}`"));
    }
}
