//! Content store configuration

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ContentError, Result};

/// Where the corpora live and how searches are bounded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Root holding one directory per supported version
    #[serde(default = "default_docs_root")]
    pub docs_root: PathBuf,

    /// Flat directory of rule documents
    #[serde(default = "default_rules_root")]
    pub rules_root: PathBuf,

    /// File suffix of documentation files, without the dot
    #[serde(default = "default_doc_suffix")]
    pub doc_suffix: String,

    /// File suffix of rule files, without the dot
    #[serde(default = "default_rule_suffix")]
    pub rule_suffix: String,

    /// Search limits
    #[serde(default)]
    pub search: SearchLimits,
}

fn default_docs_root() -> PathBuf {
    PathBuf::from("docs")
}

fn default_rules_root() -> PathBuf {
    PathBuf::from("rules")
}

fn default_doc_suffix() -> String {
    "rst".to_string()
}

fn default_rule_suffix() -> String {
    "mdc".to_string()
}

impl StoreConfig {
    /// Create a new configuration builder
    pub fn builder() -> StoreConfigBuilder {
        StoreConfigBuilder::default()
    }

    /// Load a configuration from a JSON file; missing fields take defaults
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| ContentError::ConfigLoad {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        serde_json::from_str(&content).map_err(|e| ContentError::ConfigLoad {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            docs_root: default_docs_root(),
            rules_root: default_rules_root(),
            doc_suffix: default_doc_suffix(),
            rule_suffix: default_rule_suffix(),
            search: SearchLimits::default(),
        }
    }
}

/// Bounds on the search report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchLimits {
    /// Lines of context on each side of a matching line
    #[serde(default = "default_context_lines")]
    pub context_lines: usize,

    /// Matching contexts kept per document
    #[serde(default = "default_max_matches")]
    pub max_matches_per_document: usize,

    /// Documents kept in a report
    #[serde(default = "default_max_documents")]
    pub max_documents: usize,
}

fn default_context_lines() -> usize {
    2
}

fn default_max_matches() -> usize {
    3
}

fn default_max_documents() -> usize {
    10
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            context_lines: default_context_lines(),
            max_matches_per_document: default_max_matches(),
            max_documents: default_max_documents(),
        }
    }
}

/// Builder for StoreConfig
#[derive(Debug, Default)]
pub struct StoreConfigBuilder {
    docs_root: Option<PathBuf>,
    rules_root: Option<PathBuf>,
    doc_suffix: Option<String>,
    rule_suffix: Option<String>,
    search: Option<SearchLimits>,
}

impl StoreConfigBuilder {
    /// Set the documentation root
    pub fn docs_root<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.docs_root = Some(path.into());
        self
    }

    /// Set the rules root
    pub fn rules_root<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.rules_root = Some(path.into());
        self
    }

    /// Set the documentation file suffix
    pub fn doc_suffix(mut self, suffix: &str) -> Self {
        self.doc_suffix = Some(suffix.trim_start_matches('.').to_string());
        self
    }

    /// Set the rule file suffix
    pub fn rule_suffix(mut self, suffix: &str) -> Self {
        self.rule_suffix = Some(suffix.trim_start_matches('.').to_string());
        self
    }

    /// Set the search limits
    pub fn search(mut self, limits: SearchLimits) -> Self {
        self.search = Some(limits);
        self
    }

    /// Build the configuration
    pub fn build(self) -> StoreConfig {
        StoreConfig {
            docs_root: self.docs_root.unwrap_or_else(default_docs_root),
            rules_root: self.rules_root.unwrap_or_else(default_rules_root),
            doc_suffix: self.doc_suffix.unwrap_or_else(default_doc_suffix),
            rule_suffix: self.rule_suffix.unwrap_or_else(default_rule_suffix),
            search: self.search.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config = StoreConfig::builder().build();
        assert_eq!(config, StoreConfig::default());
        assert_eq!(config.doc_suffix, "rst");
        assert_eq!(config.rule_suffix, "mdc");
        assert_eq!(config.search.context_lines, 2);
        assert_eq!(config.search.max_matches_per_document, 3);
        assert_eq!(config.search.max_documents, 10);
    }

    #[test]
    fn test_builder_strips_leading_dot() {
        let config = StoreConfig::builder()
            .docs_root("/srv/docs")
            .doc_suffix(".txt")
            .build();
        assert_eq!(config.docs_root, PathBuf::from("/srv/docs"));
        assert_eq!(config.doc_suffix, "txt");
    }

    #[test]
    fn test_partial_json() {
        let config: StoreConfig =
            serde_json::from_str(r#"{"docs_root": "/opt/docs", "search": {"max_documents": 5}}"#)
                .unwrap();
        assert_eq!(config.docs_root, PathBuf::from("/opt/docs"));
        assert_eq!(config.rules_root, PathBuf::from("rules"));
        assert_eq!(config.search.max_documents, 5);
        assert_eq!(config.search.context_lines, 2);
    }

    #[test]
    fn test_missing_config_file() {
        let err = StoreConfig::from_json_file("/nonexistent/odoo-mcp.json").unwrap_err();
        assert_eq!(err.error_code(), "CONFIG_LOAD_ERROR");
    }
}
