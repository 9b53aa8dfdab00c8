//! Documentation tree lookups: enumeration, shallow index, single documents

use std::path::{Component, Path, PathBuf};

use serde::Serialize;

use crate::error::{ContentError, Result};
use crate::version::OdooVersion;

use super::ContentStore;

/// Top-level categories listed by the shallow index, in display order
pub const INDEX_CATEGORIES: [&str; 2] = ["howtos", "reference"];

/// A documentation file and the logical path it is addressed by
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct DocumentEntry {
    /// Slash separated path relative to the version root, without suffix
    pub logical_path: String,

    /// Where the document lives on storage
    pub location: PathBuf,
}

impl ContentStore {
    /// Enumerate every document stored for a version.
    ///
    /// A supported version without a storage root yields an empty list.
    /// Entries are sorted by logical path.
    pub fn enumerate_documents(&self, version: &str) -> Result<Vec<DocumentEntry>> {
        let version: OdooVersion = version.parse()?;
        Ok(self.documents_for(version))
    }

    pub(crate) fn documents_for(&self, version: OdooVersion) -> Vec<DocumentEntry> {
        let root = self.version_root(version);
        let suffix = &self.config.doc_suffix;

        let mut entries: Vec<DocumentEntry> = self
            .storage
            .walk(&root, suffix)
            .into_iter()
            .filter_map(|location| {
                let logical_path = logical_path(&root, &location, suffix)?;
                Some(DocumentEntry { logical_path, location })
            })
            .collect();

        entries.sort();
        entries
    }

    /// Build the shallow index for a version.
    ///
    /// Lists the direct children of each category in [`INDEX_CATEGORIES`]
    /// that exists under the version root.
    pub fn get_index(&self, version: &str) -> Result<String> {
        let version: OdooVersion = version.parse()?;
        let root = self.version_root(version);

        if !self.storage.is_dir(&root) {
            return Err(ContentError::VersionDocsNotFound {
                version: version.to_string(),
            });
        }

        let mut content = format!("# Odoo {} Documentation Index\n\n", version);
        content.push_str(&format!(
            "Current development version: {}\n\n",
            self.session.current()
        ));

        for category in INDEX_CATEGORIES {
            let category_root = root.join(category);
            if !self.storage.is_dir(&category_root) {
                continue;
            }

            content.push_str(&format!("\n## {}\n\n", title_case(category)));
            for file in self.storage.list(&category_root, &self.config.doc_suffix) {
                if let Some(topic) = file.file_stem() {
                    content.push_str(&format!("- {}\n", topic.to_string_lossy()));
                }
            }
        }

        Ok(content)
    }

    /// Fetch one document by version and logical path.
    ///
    /// The returned text is prefixed with a header naming the path and version.
    pub fn get_document(&self, version: &str, path: &str) -> Result<String> {
        let version: OdooVersion = version.parse()?;
        check_logical_path(path)?;

        let Some(location) = self.resolve_document(version, path) else {
            tracing::debug!(%version, path, "Documentation file not found");
            return Err(ContentError::DocumentNotFound {
                path: path.to_string(),
            });
        };

        let content = self
            .storage
            .read_to_string(&location)
            .map_err(|e| ContentError::DocumentRead {
                path: path.to_string(),
                reason: e.to_string(),
            })?;

        Ok(format!("# {} (Odoo {})\n\n{}", path, version, content))
    }

    /// Resolve a logical path to a stored file.
    ///
    /// Tries `<root>/<version>/<path>.<suffix>` first; if that misses and the
    /// path has a separator, retries with the first segment as a sub-root and
    /// the remainder as the file. No other locations are probed.
    pub fn resolve_document(&self, version: OdooVersion, path: &str) -> Option<PathBuf> {
        let root = self.version_root(version);
        let suffix = &self.config.doc_suffix;

        let direct = root.join(format!("{}.{}", path, suffix));
        if self.storage.is_file(&direct) {
            return Some(direct);
        }

        let (first, rest) = path.split_once('/')?;
        let nested = root.join(first).join(format!("{}.{}", rest, suffix));
        if nested != direct && self.storage.is_file(&nested) {
            return Some(nested);
        }

        None
    }
}

/// Logical path of `location` under `root`: relative, `/` separated, suffix stripped
fn logical_path(root: &Path, location: &Path, suffix: &str) -> Option<String> {
    // glob drops `.` components from what it yields, so compare without them
    let root = without_cur_dir(root);
    let location = without_cur_dir(location);
    let relative = location.strip_prefix(&root).ok()?;

    let segments: Vec<String> = relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();

    if segments.is_empty() {
        return None;
    }

    let joined = segments.join("/");
    let dotted = format!(".{}", suffix);
    Some(joined.strip_suffix(&dotted).unwrap_or(&joined).to_string())
}

fn without_cur_dir(path: &Path) -> PathBuf {
    path.components()
        .filter(|component| !matches!(component, Component::CurDir))
        .collect()
}

/// Logical paths are relative, with no empty, `.` or `..` segments
fn check_logical_path(path: &str) -> Result<()> {
    let escapes = path.is_empty()
        || Path::new(path).is_absolute()
        || path
            .split(['/', '\\'])
            .any(|segment| matches!(segment, "" | "." | ".."));

    if escapes {
        return Err(ContentError::InvalidPath {
            path: path.to_string(),
        });
    }
    Ok(())
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
