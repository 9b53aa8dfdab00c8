//! Storage backend for the content corpora
//!
//! The store only needs a handful of read operations, collected here behind
//! a trait so the filesystem can be swapped out (tests use this to observe
//! whether storage was touched at all).

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use glob::Pattern;

/// Read-only access to stored text documents
///
/// All methods take `&self`; implementations are shared across requests.
pub trait DocumentStorage: Send + Sync {
    /// Check whether a directory exists
    fn is_dir(&self, path: &Path) -> bool;

    /// Check whether a regular file exists
    fn is_file(&self, path: &Path) -> bool;

    /// Read a file as UTF-8 text
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Every file below `root` (recursively) whose extension is `suffix`
    fn walk(&self, root: &Path, suffix: &str) -> Vec<PathBuf>;

    /// Direct children of `dir` whose extension is `suffix`, sorted by path
    fn list(&self, dir: &Path, suffix: &str) -> Vec<PathBuf>;

    /// Get backend name (for logging/debugging)
    fn name(&self) -> &'static str;
}

/// Filesystem storage backed by `std::fs` and glob patterns
#[derive(Debug, Clone, Copy, Default)]
pub struct FileStorage;

impl FileStorage {
    /// Create a new filesystem backend
    pub fn new() -> Self {
        Self
    }

    fn matching(&self, pattern: &str) -> Vec<PathBuf> {
        let paths = match glob::glob(pattern) {
            Ok(paths) => paths,
            Err(e) => {
                tracing::debug!(pattern, error = %e, "Invalid glob pattern");
                return Vec::new();
            }
        };

        paths
            .filter_map(|entry| match entry {
                Ok(path) => Some(path),
                Err(e) => {
                    tracing::debug!(error = %e, "Skipping unreadable entry");
                    None
                }
            })
            .filter(|path| path.is_file())
            .collect()
    }
}

fn pattern_under(dir: &Path, tail: &str, suffix: &str) -> String {
    format!(
        "{}/{}.{}",
        Pattern::escape(&dir.to_string_lossy()),
        tail,
        Pattern::escape(suffix)
    )
}

impl DocumentStorage for FileStorage {
    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }

    fn walk(&self, root: &Path, suffix: &str) -> Vec<PathBuf> {
        if !root.is_dir() {
            return Vec::new();
        }
        self.matching(&pattern_under(root, "**/*", suffix))
    }

    fn list(&self, dir: &Path, suffix: &str) -> Vec<PathBuf> {
        if !dir.is_dir() {
            return Vec::new();
        }
        let mut paths = self.matching(&pattern_under(dir, "*", suffix));
        paths.sort();
        paths
    }

    fn name(&self) -> &'static str {
        "filesystem"
    }
}
