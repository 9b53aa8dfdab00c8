//! Rule documents: flat, unversioned guidance addressed by symbolic name

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ContentError, Result};

use super::ContentStore;

/// Separator placed before each rule document in the aggregate
pub const RULE_SEPARATOR: &str = "---";

/// Recognized rule names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleSet {
    /// General clean code guidance
    CleanCode,
    /// Odoo specific conventions
    OdooDevelopment,
    /// Every rule document in the rules root
    All,
}

impl RuleSet {
    /// All names, in the order they are advertised
    pub const ALL: [RuleSet; 3] = [RuleSet::CleanCode, RuleSet::OdooDevelopment, RuleSet::All];

    /// Symbolic name used in URIs
    pub fn name(&self) -> &'static str {
        match self {
            RuleSet::CleanCode => "clean-code",
            RuleSet::OdooDevelopment => "odoo-development",
            RuleSet::All => "all",
        }
    }

    /// Storage file stem for a single rule set; `None` for the `all` sentinel
    pub fn file_stem(&self) -> Option<&'static str> {
        match self {
            RuleSet::CleanCode => Some("clean-code"),
            RuleSet::OdooDevelopment => Some("odoo-development"),
            RuleSet::All => None,
        }
    }

    /// Comma separated list of names, for error messages
    pub fn available() -> String {
        Self::ALL
            .iter()
            .map(|r| r.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RuleSet {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|r| r.name() == s)
            .ok_or_else(|| ContentError::UnknownRule {
                name: s.to_string(),
                available: Self::available(),
            })
    }
}

impl ContentStore {
    /// Fetch a rule document by symbolic name.
    ///
    /// `all` concatenates every readable rule document, each preceded by a
    /// horizontal rule; unreadable files are skipped.
    pub fn get_rule_document(&self, name: &str) -> Result<String> {
        let rule: RuleSet = name.parse()?;

        match rule.file_stem() {
            Some(stem) => self.read_rule(rule, stem),
            None => Ok(self.all_rules()),
        }
    }

    fn read_rule(&self, rule: RuleSet, stem: &str) -> Result<String> {
        let path = self
            .rules_root()
            .join(format!("{}.{}", stem, self.config.rule_suffix));

        if !self.storage.is_file(&path) {
            return Err(ContentError::RuleNotFound {
                name: rule.name().to_string(),
            });
        }

        self.storage
            .read_to_string(&path)
            .map_err(|e| ContentError::RuleRead {
                name: rule.name().to_string(),
                reason: e.to_string(),
            })
    }

    fn all_rules(&self) -> String {
        let mut content = String::from("# Complete Development Guidelines\n\n");

        for path in self.storage.list(self.rules_root(), &self.config.rule_suffix) {
            match self.storage.read_to_string(&path) {
                Ok(rule_content) => {
                    content.push_str(&format!("\n\n{}\n\n{}\n\n", RULE_SEPARATOR, rule_content));
                }
                Err(e) => {
                    tracing::debug!(path = %path.display(), error = %e, "Skipping unreadable rule file");
                }
            }
        }

        content
    }
}
