//! Content Store
//!
//! Read-only access to the two corpora the assistant serves:
//!
//! ```text
//! <docs_root>/
//! ├── 17.0/
//! │   ├── howtos/*.rst
//! │   └── reference/**/*.rst
//! ├── 18.0/ ...
//! └── 19.0/ ...
//!
//! <rules_root>/
//! ├── clean-code.mdc
//! └── odoo-development.mdc
//! ```
//!
//! Every lookup re-reads storage; nothing is cached. Operations return
//! [`crate::Result`] and are rendered to text at the boundary.

mod docs;
mod rules;
mod search;
pub mod storage;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::StoreConfig;
use crate::session::VersionSession;
use crate::version::OdooVersion;

pub use docs::{DocumentEntry, INDEX_CATEGORIES};
pub use rules::{RuleSet, RULE_SEPARATOR};
pub use search::{MatchContext, SearchHit, SearchReport};
pub use storage::{DocumentStorage, FileStorage};

/// Versioned documentation and rule documents
pub struct ContentStore {
    config: StoreConfig,
    storage: Arc<dyn DocumentStorage>,
    session: Arc<VersionSession>,
}

impl ContentStore {
    /// Create a store over the filesystem with a fresh version session
    pub fn new(config: StoreConfig) -> Self {
        Self {
            config,
            storage: Arc::new(FileStorage::new()),
            session: Arc::new(VersionSession::new()),
        }
    }

    /// Use a different storage backend
    pub fn with_storage(mut self, storage: Arc<dyn DocumentStorage>) -> Self {
        self.storage = storage;
        self
    }

    /// Share an existing version session
    pub fn with_session(mut self, session: Arc<VersionSession>) -> Self {
        self.session = session;
        self
    }

    /// The version session this store reads its default version from
    pub fn session(&self) -> &Arc<VersionSession> {
        &self.session
    }

    fn version_root(&self, version: OdooVersion) -> PathBuf {
        self.config.docs_root.join(version.as_str())
    }

    fn rules_root(&self) -> &Path {
        &self.config.rules_root
    }
}

impl std::fmt::Debug for ContentStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentStore")
            .field("config", &self.config)
            .field("storage", &self.storage.name())
            .field("selected_version", &self.session.current())
            .finish()
    }
}
