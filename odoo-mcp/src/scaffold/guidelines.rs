//! Development guidelines composed from the rule documents

use odoo_core::{ContentStore, RuleSet};

use super::{title_words, ODOO_RULES_URI};

/// The kind of work guidelines are requested for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuidelineContext {
    General,
    Models,
    Views,
    Security,
    All,
}

impl GuidelineContext {
    /// Parse a context name; anything unrecognized is `General`
    pub fn parse_or_general(name: &str) -> Self {
        match name {
            "models" => GuidelineContext::Models,
            "views" => GuidelineContext::Views,
            "security" => GuidelineContext::Security,
            "all" => GuidelineContext::All,
            _ => GuidelineContext::General,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GuidelineContext::General => "general",
            GuidelineContext::Models => "models",
            GuidelineContext::Views => "views",
            GuidelineContext::Security => "security",
            GuidelineContext::All => "all",
        }
    }

    /// Rule documents relevant to this context
    pub fn rules(&self) -> &'static [RuleSet] {
        match self {
            GuidelineContext::General | GuidelineContext::All => {
                &[RuleSet::CleanCode, RuleSet::OdooDevelopment]
            }
            GuidelineContext::Models | GuidelineContext::Views | GuidelineContext::Security => {
                &[RuleSet::OdooDevelopment]
            }
        }
    }
}

/// Drop a leading `---` delimited frontmatter block.
///
/// Text without frontmatter is returned unchanged, as is text whose
/// frontmatter is never closed.
pub fn strip_frontmatter(content: &str) -> &str {
    let trimmed = content.trim_start_matches(['\n', '\r']);
    let Some(first_line_end) = trimmed.find('\n') else {
        return content;
    };
    if trimmed[..first_line_end].trim() != "---" {
        return content;
    }

    let mut offset = first_line_end + 1;
    for line in trimmed[offset..].split_inclusive('\n') {
        offset += line.len();
        if line.trim() == "---" {
            return &trimmed[offset..];
        }
    }

    content
}

/// Compose the guidelines text for a context.
///
/// Rule documents that cannot be fetched are left out.
pub fn development_guidelines(store: &ContentStore, context: GuidelineContext) -> String {
    let version = store.session().current();
    let mut guidelines = format!(
        "# Development Guidelines for {} Context\n\n",
        title_words(context.as_str())
    );
    guidelines.push_str(&format!("Current Odoo Version: {}\n\n", version));

    for rule in context.rules() {
        match store.get_rule_document(rule.name()) {
            Ok(content) => {
                guidelines.push_str(strip_frontmatter(&content));
                guidelines.push_str("\n\n---\n\n");
            }
            Err(e) => {
                tracing::debug!(rule = %rule, error = %e, "Rule document unavailable for guidelines");
            }
        }
    }

    guidelines.push_str("\n## Quick Reference Links\n\n");
    guidelines.push_str("- Full rules: odoo://rules/all\n");
    guidelines.push_str("- Clean code: odoo://rules/clean-code\n");
    guidelines.push_str(&format!("- Odoo conventions: {}\n", ODOO_RULES_URI));
    guidelines.push_str(&format!("- Documentation: odoo://docs/{}/index\n", version));

    guidelines
}
