//! Case-insensitive substring search over one version's documents
//!
//! No tokenization and no ranking: documents are visited in logical path
//! order and the first hits win.

use serde::Serialize;

use crate::config::SearchLimits;
use crate::version::OdooVersion;

use super::ContentStore;

/// One matching line with its surrounding context
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchContext {
    /// 1-indexed line number of the match
    pub line: usize,

    /// The matching line plus its neighbours, newline separated
    pub context: String,
}

/// A document with at least one matching line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit {
    pub logical_path: String,
    pub matches: Vec<MatchContext>,
}

/// Outcome of a search over a single version
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchReport {
    pub query: String,
    pub version: OdooVersion,
    pub hits: Vec<SearchHit>,
}

impl SearchReport {
    /// True when no document matched
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    /// Render the report as text
    pub fn render(&self) -> String {
        if self.hits.is_empty() {
            return format!(
                "No results found for '{}' in Odoo {} documentation",
                self.query, self.version
            );
        }

        let mut output = format!("Search results for '{}' in Odoo {}:\n\n", self.query, self.version);
        for hit in &self.hits {
            output.push_str(&format!("## {}\n", hit.logical_path));
            for m in &hit.matches {
                output.push_str(&format!("Line {}:\n{}\n\n", m.line, m.context));
            }
            output.push_str("---\n\n");
        }
        output
    }
}

impl ContentStore {
    /// Search the documentation and render the report.
    ///
    /// `version` overrides the selected version when it names a supported
    /// one; otherwise the selected version is searched.
    pub fn search(&self, query: &str, version: Option<&str>) -> String {
        self.search_documents(query, version).render()
    }

    /// Search the documentation, returning the structured report
    pub fn search_documents(&self, query: &str, version: Option<&str>) -> SearchReport {
        let version = version
            .and_then(OdooVersion::parse)
            .unwrap_or_else(|| self.session.current());
        let limits = self.config.search;
        let needle = query.to_lowercase();

        let mut hits = Vec::new();
        for entry in self.documents_for(version) {
            if hits.len() >= limits.max_documents {
                break;
            }

            let content = match self.storage.read_to_string(&entry.location) {
                Ok(content) => content,
                Err(e) => {
                    tracing::debug!(path = %entry.logical_path, error = %e, "Skipping unreadable document");
                    continue;
                }
            };

            if !content.to_lowercase().contains(&needle) {
                continue;
            }

            let matches = match_contexts(&content, &needle, &limits);
            if !matches.is_empty() {
                hits.push(SearchHit {
                    logical_path: entry.logical_path,
                    matches,
                });
            }
        }

        tracing::debug!(query, %version, documents = hits.len(), "Search complete");

        SearchReport {
            query: query.to_string(),
            version,
            hits,
        }
    }
}

/// Collect up to `max_matches_per_document` context windows for lines containing `needle`.
///
/// `needle` must already be lowercased.
fn match_contexts(content: &str, needle: &str, limits: &SearchLimits) -> Vec<MatchContext> {
    let lines: Vec<&str> = content.split('\n').collect();
    let mut matches = Vec::new();

    for (i, line) in lines.iter().enumerate() {
        if matches.len() >= limits.max_matches_per_document {
            break;
        }
        if !line.to_lowercase().contains(needle) {
            continue;
        }

        let start = i.saturating_sub(limits.context_lines);
        let end = (i + limits.context_lines + 1).min(lines.len());
        matches.push(MatchContext {
            line: i + 1,
            context: lines[start..end].join("\n"),
        });
    }

    matches
}
